//! # Ordered-List Patcher
//!
//! Inserts a `(label, link)` bullet into the component reference list and
//! keeps the list sorted case-insensitively by label.
//!
//! The whole contiguous bullet run is re-sorted on every insertion, so a list
//! that drifted out of order is healed as a side effect. This is deliberate,
//! if surprising; callers documenting user-facing behavior should mention it.

use crate::document::StructuralDocument;
use crate::error::{AppError, AppResult};
use crate::writer::{commit, WriteOutcome};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Canonical heading of the component reference section.
pub const SECTION_HEADING: &str = "## Índice de Componentes";

/// Captures the label of a `- [label](link)` bullet.
fn bullet_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"- \[([^\]]+)\]").expect("Invalid regex"))
}

/// Computes the patched reference document.
///
/// Unlike the sidebar patcher there is no scaffold fallback: reference
/// documents are assumed pre-seeded with their section heading, so a missing
/// heading is a [`AppError::SectionNotFound`] hard failure.
pub fn patch_reference(source: &str, label: &str, link: &str) -> AppResult<String> {
    // Either half of the entry already present settles the question.
    if source.contains(&format!("[{label}]")) || source.contains(&format!("({link})")) {
        return Ok(source.to_string());
    }

    let mut doc = StructuralDocument::parse(source);

    let heading = doc
        .lines()
        .iter()
        .position(|l| l.contains(SECTION_HEADING))
        .ok_or_else(|| AppError::SectionNotFound(SECTION_HEADING.to_string()))?;

    // Blank lines after the heading precede the bullet run.
    let mut start = heading + 1;
    while start < doc.len() && doc.lines()[start].trim().is_empty() {
        start += 1;
    }

    // Collect the contiguous bullet run; the first non-bullet line ends it.
    let mut entries: Vec<String> = vec![format!("- [{label}]({link})")];
    let mut end = start;
    while end < doc.len() {
        let line = &doc.lines()[end];
        if !line.starts_with("- [") || line.trim().is_empty() {
            break;
        }
        entries.push(line.clone());
        end += 1;
    }

    entries.sort_by_cached_key(|e| bullet_label(e).to_lowercase());
    doc.replace_span(start, end - start, &entries);

    Ok(doc.serialize())
}

fn bullet_label(entry: &str) -> String {
    bullet_label_re()
        .captures(entry)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Patches the reference document on disk, diff-gated.
pub fn add_to_reference_doc(
    path: &Path,
    label: &str,
    link: &str,
    backup: bool,
) -> AppResult<WriteOutcome> {
    if !path.exists() {
        return Err(AppError::MissingTargetFile(path.to_path_buf()));
    }

    let original = fs::read_to_string(path)?;
    let candidate = patch_reference(&original, label, link)?;
    commit(path, &original, &candidate, backup)
}
