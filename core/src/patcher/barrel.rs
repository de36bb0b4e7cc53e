//! # Barrel Patcher
//!
//! Merges an import/export pair into the components index so the file ends
//! up with exactly one import line and exactly one export reference for the
//! component, without disturbing existing entries.

use crate::document::StructuralDocument;
use crate::error::{AppError, AppResult};
use crate::writer::{commit, WriteOutcome};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Captures the entry list of a single-line `export { ... }` statement.
fn export_list_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"export\s*\{\s*(.*?)\s*\}").expect("Invalid regex"))
}

/// Ensures `source` contains the import line and one export reference for
/// `import_name`. Returns the patched content; output equal to the input
/// means the entry was already present.
pub fn patch_index(source: &str, import_path: &str, import_name: &str) -> String {
    let import_line = format!("import {import_name} from './{import_path}';");

    // Idempotence short-circuit: the exact import line settles the question.
    if source.contains(&import_line) {
        return source.to_string();
    }

    let mut doc = StructuralDocument::parse(source);

    // New import goes right after the last recognized import declaration,
    // or at the very top when there are none.
    let mut import_at = 0;
    for (i, line) in doc.lines().iter().enumerate() {
        if line.trim().starts_with("import ") && line.contains("from") {
            import_at = i + 1;
        }
    }
    doc.insert(import_at, import_line);

    if !merge_into_export(&mut doc, import_name) {
        // No aggregation construct anywhere: append a fresh one. Concatenated
        // export statements are valid, so this never invalidates the file.
        doc.push("");
        doc.push(format!("export {{ {import_name} }};"));
    }

    doc.serialize()
}

/// Merges `name` into the first export aggregation found.
///
/// Two dialects, tried in document order:
/// - single-line: `export { A, B };` — re-serialize the comma list.
/// - multi-line: `export {` ... `}` — insert an entry line before the
///   closing delimiter.
///
/// Returns false when the document has no export aggregation at all.
fn merge_into_export(doc: &mut StructuralDocument, name: &str) -> bool {
    for i in 0..doc.len() {
        let line = doc.lines()[i].clone();
        let trimmed = line.trim();

        if !trimmed.starts_with("export {") {
            continue;
        }

        if trimmed.contains('}') {
            // Single-line dialect.
            if !trimmed.contains(name) {
                let inner = export_list_re()
                    .captures(trimmed)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str())
                    .unwrap_or("");

                let mut entries: Vec<&str> = inner
                    .split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .collect();
                entries.push(name);

                doc.set(i, format!("export {{ {} }};", entries.join(", ")));
            }
            return true;
        }

        // Multi-line dialect: collect up to the closing delimiter.
        let mut j = i + 1;
        while j < doc.len() && !doc.lines()[j].contains('}') {
            j += 1;
        }
        if j < doc.len() {
            let span = doc.lines()[i..=j].join(" ");
            if !span.contains(name) {
                doc.insert(j, format!("  {name},"));
            }
            return true;
        }
        // Unterminated list: fall through to the append fallback.
        return false;
    }
    false
}

/// Patches the components index file on disk, diff-gated.
///
/// The index must already exist; its absence is a [`AppError::MissingTargetFile`]
/// hard failure for this patcher (the caller downgrades it to a warning).
pub fn add_to_component_index(
    path: &Path,
    import_path: &str,
    import_name: &str,
    backup: bool,
) -> AppResult<WriteOutcome> {
    if !path.exists() {
        return Err(AppError::MissingTargetFile(path.to_path_buf()));
    }

    let original = fs::read_to_string(path)?;
    let candidate = patch_index(&original, import_path, import_name);
    commit(path, &original, &candidate, backup)
}
