// src/name_map/tag.rs
use std::fmt;

use crate::error::TableError;

pub const NONE_CODE: u8 = 0x00;
pub const NAME_START_CODE: u8 = 0x01;
pub const NAME_CODE: u8 = 0x02;

/// Per-byte class stored in the name map. The discriminants are what ends up
/// in the emitted array, and consumers test them as bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Tag {
    #[default]
    None = NONE_CODE,
    NameStart = NAME_START_CODE,
    Name = NAME_CODE,
}

impl Tag {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Tag {
    type Error = TableError;

    fn try_from(v: u8) -> Result<Self, TableError> {
        match v {
            NONE_CODE => Ok(Tag::None),
            NAME_START_CODE => Ok(Tag::NameStart),
            NAME_CODE => Ok(Tag::Name),
            other => Err(TableError::Parse(format!(
                "0x{other:02X} is not a name map tag"
            ))),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.code())
    }
}
