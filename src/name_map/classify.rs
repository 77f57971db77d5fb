// src/name_map/classify.rs
use super::tag::Tag;
use crate::error::TableError;

/// Class of a single byte for the CSS name tokenizer.
///
/// Arms are checked top to bottom and the first hit wins. They don't overlap
/// today; keep the order anyway when editing ranges.
pub const fn classify(b: u8) -> Tag {
    // a-z
    if b >= 0x61 && b <= 0x7A {
        Tag::NameStart
    }
    // A-Z
    else if b >= 0x41 && b <= 0x5A {
        Tag::NameStart
    }
    // 0-9
    else if b >= 0x30 && b <= 0x39 {
        Tag::Name
    }
    // U+00C0..U+00D6
    else if b >= 0xC0 && b <= 0xD6 {
        Tag::NameStart
    }
    // U+00D8..U+00F6
    else if b >= 0xD8 && b <= 0xF6 {
        Tag::NameStart
    }
    // U+00F8 and up, truncated at the byte boundary
    else if b >= 0xF8 {
        Tag::NameStart
    }
    // '_'
    else if b == 0x5F {
        Tag::NameStart
    }
    // U+00B7 MIDDLE DOT
    else if b == 0xB7 {
        Tag::NameStart
    }
    // '-'
    else if b == 0x2D {
        Tag::Name
    } else {
        Tag::None
    }
}

/// Same as [`classify`] for callers holding a wider integer.
pub fn try_classify(v: u32) -> Result<Tag, TableError> {
    u8::try_from(v)
        .map(classify)
        .map_err(|_| TableError::Domain(v))
}
