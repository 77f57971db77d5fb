// src/config.rs
use std::env;

use crate::error::TableError;

/// Knobs for one generation run. Defaults reproduce the table the CSS syntax
/// tokenizer embeds; `from_env` lets a build script point it elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    pub type_name: String,
    pub array_name: String,
    pub define_name: String,
    pub read_only: bool,
    pub capacity: usize,
    pub columns: usize,
    pub hex: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            type_name: "lxb_char_t".to_string(),
            array_name: "lxb_css_syntax_res_name_map".to_string(),
            define_name: "LXB_CSS_SYNTAX_RES_NAME_START".to_string(),
            read_only: true,
            capacity: 256,
            columns: 10,
            hex: true,
        }
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

impl GenConfig {
    /// Defaults, overridden by `NAMEMAP_TYPE`, `NAMEMAP_ARRAY`,
    /// `NAMEMAP_DEFINE` and `NAMEMAP_COLUMNS` when set.
    pub fn from_env() -> Result<Self, TableError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`GenConfig::from_env`] with variables read through `get`.
    /// Blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, TableError> {
        let mut cfg = Self::default();
        if let Some(v) = non_blank(get("NAMEMAP_TYPE")) {
            cfg.type_name = v;
        }
        if let Some(v) = non_blank(get("NAMEMAP_ARRAY")) {
            cfg.array_name = v;
        }
        if let Some(v) = non_blank(get("NAMEMAP_DEFINE")) {
            cfg.define_name = v;
        }
        if let Some(v) = non_blank(get("NAMEMAP_COLUMNS")) {
            cfg.columns = v.trim().parse::<usize>().map_err(|e| {
                TableError::Configuration(format!("NAMEMAP_COLUMNS={v:?} is not a count: {e}"))
            })?;
        }
        log::debug!("generation config: {cfg:?}");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_css_name_map() {
        let cfg = GenConfig::default();
        assert_eq!(cfg.capacity, 256);
        assert_eq!(cfg.columns, 10);
        assert!(cfg.read_only && cfg.hex);
        assert_eq!(cfg.array_name, "lxb_css_syntax_res_name_map");
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn nothing_set_keeps_defaults() {
        let cfg = GenConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, GenConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = GenConfig::from_lookup(lookup(&[
            ("NAMEMAP_TYPE", "uint8_t"),
            ("NAMEMAP_ARRAY", "name_map"),
            ("NAMEMAP_DEFINE", "NAME_START"),
            ("NAMEMAP_COLUMNS", " 16 "),
        ]))
        .unwrap();
        assert_eq!(cfg.type_name, "uint8_t");
        assert_eq!(cfg.array_name, "name_map");
        assert_eq!(cfg.define_name, "NAME_START");
        assert_eq!(cfg.columns, 16);
        assert_eq!(cfg.capacity, 256);
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = GenConfig::from_lookup(lookup(&[
            ("NAMEMAP_TYPE", "   "),
            ("NAMEMAP_COLUMNS", ""),
        ]))
        .unwrap();
        assert_eq!(cfg.type_name, "lxb_char_t");
        assert_eq!(cfg.columns, 10);
    }

    #[test]
    fn unparsable_columns_is_a_config_error() {
        let r = GenConfig::from_lookup(lookup(&[("NAMEMAP_COLUMNS", "abc")]));
        assert!(matches!(r, Err(TableError::Configuration(_))));
    }
}
