// src/bin/gen_name_map_json.rs
// Writes the name map as JSON for tools that don't read C.
// Usage:
//   cargo run --bin gen_name_map_json                # writes tables/name_map.json
//   cargo run --bin gen_name_map_json -- /path/out.json

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use namemap::name_map::{NameMap, Tag, save_name_map_json};

fn main() -> Result<()> {
    env_logger::init();

    let out = env::args()
        .nth(1)
        .unwrap_or_else(|| "tables/name_map.json".to_string());
    let out_path = Path::new(&out);

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let map = NameMap::new();
    let starts = map.iter().filter(|&t| t == Tag::NameStart).count();
    let names = map.iter().filter(|&t| t == Tag::Name).count();
    log::info!("[gen_name_map_json] name-start = {starts}, name = {names}");

    save_name_map_json(out_path, &map)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    log::info!("[gen_name_map_json] wrote {}", out_path.display());
    Ok(())
}
