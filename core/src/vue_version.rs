#![deny(missing_docs)]

//! # Vue Version Detection
//!
//! Sniffs the target project's `package.json` for the Vue major version.
//! Detection is advisory: every failure mode (missing manifest, invalid
//! JSON, no vue dependency, unparseable range) collapses to `None` and the
//! caller falls back to its default.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The slice of `package.json` we care about.
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, String>,
}

/// Returns the Vue major version (2 or 3) declared by `{root}/package.json`.
///
/// `dependencies` wins over `devDependencies` when both declare vue.
pub fn detect_vue_major(root: &Path) -> Option<u8> {
    let data = fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: PackageManifest = serde_json::from_str(&data).ok()?;

    let range = manifest
        .dependencies
        .get("vue")
        .or_else(|| manifest.dev_dependencies.get("vue"))?;

    parse_major(range)
}

/// Extracts the major from a semver range (`^3.2.0`, `~2.6`, `>=2.5 <3.0`,
/// `v2.6.11`, plain `3.0.0`). Only 2 and 3 are meaningful here.
fn parse_major(range: &str) -> Option<u8> {
    let stripped = range
        .trim()
        .trim_start_matches(|c: char| matches!(c, 'v' | '^' | '~' | '>' | '<' | '=' | ' '));

    let digits: String = stripped
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u8>().ok()? {
        2 => Some(2),
        3 => Some(3),
        _ => None,
    }
}
