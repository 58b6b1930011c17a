//! Loading of `stats.json` and `layouts.json`.
//!
//! Both files are JSON objects keyed by configuration name. The optimizer
//! marks the layouts it generated with a `"000 "` name prefix so they sort
//! first; that prefix is dropped by [`strip_legacy_prefix`] right after
//! parsing, before anything else looks at the keys.

use crate::models::{KeyboardLayout, MetricMap, StatsTable};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name prefix the optimizer puts on generated layouts.
pub const LEGACY_PREFIX: &str = "000 ";

/// Renames every `"000 "`-prefixed key to its unprefixed name.
///
/// Keys are visited in map order. A renamed entry is removed and re-inserted
/// at the end of the map, so it overwrites any existing entry of the same
/// name (last write wins). Only the leading prefix is removed.
pub fn strip_legacy_prefix<V>(map: &mut IndexMap<String, V>) {
    let prefixed: Vec<String> = map
        .keys()
        .filter(|name| name.starts_with(LEGACY_PREFIX))
        .cloned()
        .collect();

    for name in prefixed {
        let Some(value) = map.shift_remove(&name) else {
            continue;
        };
        let renamed = name[LEGACY_PREFIX.len()..].to_string();
        map.shift_remove(&renamed);
        map.insert(renamed, value);
    }
}

/// Reads a JSON file whose root is an object and normalizes its keys.
pub fn load_json_object(path: &Path) -> Result<IndexMap<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut map: IndexMap<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}: expected a JSON object", path.display()))?;

    strip_legacy_prefix(&mut map);
    debug!("Loaded {} entries from {}", map.len(), path.display());

    Ok(map)
}

/// Loads a statistics table: configuration name to metric name to value.
pub fn load_stats(path: &Path) -> Result<StatsTable> {
    load_json_object(path)?
        .into_iter()
        .map(|(name, value)| {
            let metrics: MetricMap = serde_json::from_value(value).with_context(|| {
                format!(
                    "Invalid statistics for '{name}' in {}: expected an object of numbers",
                    path.display()
                )
            })?;
            Ok((name, metrics))
        })
        .collect()
}

/// Loads every layout from a layouts file, in file order.
pub fn load_layouts(path: &Path) -> Result<Vec<KeyboardLayout>> {
    load_json_object(path)?
        .into_iter()
        .map(|(name, value)| {
            KeyboardLayout::from_json(&name, value)
                .with_context(|| format!("Invalid layout entry in {}", path.display()))
        })
        .collect()
}

/// Keeps the layouts whose name starts with `prefix`.
pub fn select_layouts(layouts: Vec<KeyboardLayout>, prefix: &str) -> Vec<KeyboardLayout> {
    layouts
        .into_iter()
        .filter(|layout| layout.name.starts_with(prefix))
        .collect()
}
