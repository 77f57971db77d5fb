// src/main.rs
// Prints the name map as a C header fragment on stdout.
// Usage:
//   cargo run > res_name_map.h
//   RUST_LOG=debug NAMEMAP_COLUMNS=16 cargo run

use std::io::{self, Write};

use anyhow::{Context, Result};
use namemap::{config::GenConfig, name_map::generate};

fn main() -> Result<()> {
    env_logger::init();

    let cfg = GenConfig::from_env().context("reading NAMEMAP_* environment")?;
    let text = generate(&cfg).context("generating name map")?;

    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .context("writing name map to stdout")?;
    Ok(())
}
