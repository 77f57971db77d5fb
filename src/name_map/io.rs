// src/name_map/io.rs
use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::{NameMap, tag::Tag};
use crate::{encoder::parse_rendered, error::TableError};

// -------------------- JSON (de)serialization --------------------

#[serde_as]
#[derive(Serialize, Deserialize)]
struct NameMapDisk {
    #[serde_as(as = "[_; 256]")]
    codes: [u8; 256],
}

impl From<&NameMap> for NameMapDisk {
    fn from(m: &NameMap) -> Self {
        Self {
            codes: m.as_bytes(),
        }
    }
}

impl NameMapDisk {
    fn into_name_map(self) -> Result<NameMap, TableError> {
        let mut tags = [Tag::None; 256];
        for (slot, &code) in tags.iter_mut().zip(self.codes.iter()) {
            *slot = Tag::try_from(code)?;
        }
        Ok(NameMap::from_tags(tags))
    }
}

pub fn save_name_map_json(path: &std::path::Path, m: &NameMap) -> Result<(), TableError> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &NameMapDisk::from(m))?;
    w.flush()?;
    Ok(())
}

pub fn load_name_map_json_bytes(data: &[u8]) -> Result<NameMap, TableError> {
    serde_json::from_slice::<NameMapDisk>(data)?.into_name_map()
}

// -------------------- rendered C text --------------------

/// Recovers a map from text produced by [`super::generate`].
pub fn load_name_map_rendered(text: &str) -> Result<NameMap, TableError> {
    let values = parse_rendered(text)?;
    if values.len() != 256 {
        return Err(TableError::Parse(format!(
            "expected 256 entries, found {}",
            values.len()
        )));
    }
    let mut tags = [Tag::None; 256];
    for (slot, code) in tags.iter_mut().zip(values) {
        *slot = Tag::try_from(code)?;
    }
    Ok(NameMap::from_tags(tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_rejects_unknown_codes() {
        let mut codes = vec![0u8; 256];
        codes[10] = 9;
        let json = serde_json::json!({ "codes": codes }).to_string();
        assert!(load_name_map_json_bytes(json.as_bytes()).is_err());
    }

    #[test]
    fn json_rejects_short_arrays() {
        let json = serde_json::json!({ "codes": [0, 1, 2] }).to_string();
        assert!(matches!(
            load_name_map_json_bytes(json.as_bytes()),
            Err(TableError::Json(_))
        ));
    }

    #[test]
    fn rendered_needs_full_length() {
        let text = "static const lxb_char_t m[2] =\n{\n    0x00, 0x01\n};\n";
        assert!(load_name_map_rendered(text).is_err());
    }
}
