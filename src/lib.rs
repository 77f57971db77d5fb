// src/lib.rs
//! Offline generator for the CSS tokenizer's byte-class name map.

pub mod config;
pub mod encoder;
pub mod error;
pub mod name_map;
