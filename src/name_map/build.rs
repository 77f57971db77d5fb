// src/name_map/build.rs
use super::classify::classify;
use super::tag::Tag;
use crate::{
    config::GenConfig,
    encoder::{FilledTable, RenderOptions, TableBuilder, is_c_ident},
    error::TableError,
};

/// Classifies all 256 byte values, 0x00 first.
pub fn build_name_map() -> [Tag; 256] {
    let mut map = [Tag::None; 256];
    for b in 0u8..=255 {
        map[b as usize] = classify(b);
    }
    map
}

/// Feeds the classification of every byte into a fresh encoder and seals it.
pub fn build_table(cfg: &GenConfig) -> Result<FilledTable, TableError> {
    if cfg.capacity != 256 {
        return Err(TableError::Configuration(format!(
            "name map covers 256 byte values, config declares {}",
            cfg.capacity
        )));
    }

    let mut res = TableBuilder::new(
        &cfg.type_name,
        &cfg.array_name,
        cfg.read_only,
        cfg.capacity,
    )?;
    for b in 0u8..=255 {
        res.append(classify(b).code())?;
    }
    res.finish()
}

/// The `#define` line emitted ahead of the array.
pub fn define_line(cfg: &GenConfig) -> String {
    format!("#define {} {}", cfg.define_name, Tag::NameStart)
}

/// Full generation: build, render once, return the text (newline-terminated).
pub fn generate(cfg: &GenConfig) -> Result<String, TableError> {
    if !is_c_ident(&cfg.define_name) {
        return Err(TableError::Configuration(format!(
            "define name {:?} is not a C identifier",
            cfg.define_name
        )));
    }
    let table = build_table(cfg)?;
    let entries = table.values().len();
    let opts = RenderOptions::new(cfg.columns, cfg.hex, Some(define_line(cfg)))?;
    let lines = table.render(&opts);
    log::info!(
        "rendered {} ({entries} entries, {} lines)",
        cfg.array_name,
        lines.len()
    );

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_mismatch_is_a_config_error() {
        let cfg = GenConfig {
            capacity: 255,
            ..GenConfig::default()
        };
        assert!(matches!(build_table(&cfg), Err(TableError::Configuration(_))));
    }

    #[test]
    fn bad_identifier_fails_before_output() {
        let cfg = GenConfig {
            array_name: "name map".into(),
            ..GenConfig::default()
        };
        assert!(generate(&cfg).is_err());
    }

    #[test]
    fn bad_define_name_fails_before_output() {
        for name in ["NOT AN IDENT\n};", "", "1ST", "NAME-START"] {
            let cfg = GenConfig {
                define_name: name.into(),
                ..GenConfig::default()
            };
            assert!(
                matches!(generate(&cfg), Err(TableError::Configuration(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn define_line_uses_name_start_code() {
        assert_eq!(
            define_line(&GenConfig::default()),
            "#define LXB_CSS_SYNTAX_RES_NAME_START 0x01"
        );
    }
}
