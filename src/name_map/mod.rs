// src/name_map/mod.rs
pub mod build;
pub mod classify;
pub mod io;
pub mod tag;

pub use build::{build_name_map, build_table, define_line, generate};
pub use classify::{classify, try_classify};
pub use io::{load_name_map_json_bytes, load_name_map_rendered, save_name_map_json};
pub use tag::{NAME_CODE, NAME_START_CODE, NONE_CODE, Tag};

/// Byte -> tag lookup, indexed by byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMap {
    tags: [Tag; 256],
}

impl NameMap {
    pub fn new() -> Self {
        Self::from_tags(build_name_map())
    }

    pub(crate) fn from_tags(tags: [Tag; 256]) -> Self {
        Self { tags }
    }

    #[inline]
    pub fn get(&self, b: u8) -> Tag {
        self.tags[b as usize]
    }

    #[inline]
    pub fn is_name_start(&self, b: u8) -> bool {
        self.get(b) == Tag::NameStart
    }

    /// True for anything allowed after the first byte of a name, which
    /// includes every name-start byte.
    #[inline]
    pub fn is_name(&self, b: u8) -> bool {
        self.get(b).code() & (NAME_START_CODE | NAME_CODE) != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter().copied()
    }

    pub fn as_bytes(&self) -> [u8; 256] {
        self.tags.map(Tag::code)
    }
}

impl Default for NameMap {
    fn default() -> Self {
        Self::new()
    }
}
