//! # Sidebar Patcher
//!
//! Inserts a navigation leaf into the VuePress sidebar configuration. The
//! config has no guaranteed shape, so insertion is a ladder of named
//! strategies tried in order of invasiveness; the first one that finds a safe
//! insertion point wins:
//!
//! 1. [`existing_section`] — a components section already exists; append the
//!    leaf to its `children` array.
//! 2. [`sibling_section`] — a sidebar array exists but has no components
//!    section; append a new section block to it.
//! 3. [`scaffold`] — no sidebar at all; inject a minimal `themeConfig`
//!    substructure into the exported configuration object.

use crate::document::StructuralDocument;
use crate::error::{AppError, AppResult};
use crate::writer::{commit, WriteOutcome};
use std::fs;
use std::path::Path;

/// Section titles recognized as the components section.
const SECTION_TITLES: [&str; 2] = ["Components", "Componentes"];

/// How many lines above a `children:` marker the section title may sit.
const TITLE_LOOKBACK: usize = 5;

/// A planned insertion: the line index and the block that goes there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarPatch {
    /// Line index the block is inserted at.
    pub at: usize,
    /// The lines to insert.
    pub lines: Vec<String>,
}

/// The strategy ladder, least invasive first.
const STRATEGIES: &[fn(&StructuralDocument, &str) -> Option<SidebarPatch>] =
    &[existing_section, sibling_section, scaffold];

/// Computes the patched config content, or `None` when no strategy
/// recognizes the document structure.
///
/// Returns the input unchanged when the leaf already occurs anywhere in the
/// document, in either quoting convention.
pub fn patch_sidebar(source: &str, leaf: &str) -> Option<String> {
    if source.contains(&format!("'{leaf}'")) || source.contains(&format!("\"{leaf}\"")) {
        return Some(source.to_string());
    }

    let doc = StructuralDocument::parse(source);
    for strategy in STRATEGIES {
        if let Some(patch) = strategy(&doc, leaf) {
            let mut patched = doc.clone();
            patched.insert_all(patch.at, &patch.lines);
            return Some(patched.serialize());
        }
    }
    None
}

/// Strategy 1: a `children:` array under a recognized section title.
///
/// For each `children:` marker, a bounded backward window is searched for a
/// `title:` naming the components section; the leaf then goes right before
/// the array's closing delimiter, reusing that line's indentation.
fn existing_section(doc: &StructuralDocument, leaf: &str) -> Option<SidebarPatch> {
    let lines = doc.lines();

    for (i, line) in lines.iter().enumerate() {
        if !line.contains("children:") {
            continue;
        }

        let back_start = i.saturating_sub(TITLE_LOOKBACK);
        let titled = lines[back_start..i].iter().any(|l| {
            l.contains("title:") && SECTION_TITLES.iter().any(|t| l.contains(t))
        });
        if !titled {
            continue;
        }

        for (j, candidate) in lines.iter().enumerate().skip(i + 1) {
            if candidate.contains(']') && !candidate.contains('[') {
                let indent = leading_indent(candidate);
                return Some(SidebarPatch {
                    at: j,
                    lines: vec![format!("{indent}'{leaf}',")],
                });
            }
        }
    }
    None
}

/// Strategy 2: a sidebar array without a components section.
///
/// Tracks `[`/`]` balance from the `sidebar:` line to find the array's
/// closing delimiter, and inserts a complete section block before it.
fn sibling_section(doc: &StructuralDocument, leaf: &str) -> Option<SidebarPatch> {
    let lines = doc.lines();
    let start = lines
        .iter()
        .position(|l| l.contains("sidebar:") && l.contains('['))?;

    // A components section elsewhere in the array means strategy 1 already
    // had its chance; creating a sibling would duplicate the section.
    for line in &lines[start + 1..] {
        if line.contains("title:") && line.contains("Components") {
            return None;
        }
        if line.contains(']') && !line.contains('[') {
            break;
        }
    }

    let mut depth: i32 = 0;
    let mut opened = false;
    for (j, line) in lines.iter().enumerate().skip(start) {
        if line.contains('[') {
            depth += line.matches('[').count() as i32;
            opened = true;
        }
        depth -= line.matches(']').count() as i32;

        if opened && depth == 0 {
            let indent = leading_indent(line);
            return Some(SidebarPatch {
                at: j,
                lines: vec![
                    format!("{indent}{{"),
                    format!("{indent}  title: 'Components',"),
                    format!("{indent}  children: ['{leaf}']"),
                    format!("{indent}}},"),
                ],
            });
        }
    }
    None
}

/// Strategy 3: no recognizable sidebar; scaffold a minimal `themeConfig`.
///
/// Only fires when the document nowhere mentions `themeConfig` — an existing
/// one with an unrecognized shape is left alone rather than duplicated.
fn scaffold(doc: &StructuralDocument, leaf: &str) -> Option<SidebarPatch> {
    let lines = doc.lines();

    if lines.iter().any(|l| l.contains("themeConfig")) {
        return None;
    }

    let start = lines.iter().position(|l| {
        (l.contains("module.exports") || l.contains("export default")) && l.contains('{')
    })?;

    // Brace balance counts lines, not characters, matching the coarse
    // structure these configs actually have.
    let mut depth = 1;
    let mut j = start + 1;
    while j < lines.len() && depth > 0 {
        if lines[j].contains('{') {
            depth += 1;
        }
        if lines[j].contains('}') {
            depth -= 1;
        }
        j += 1;
    }
    if depth != 0 {
        return None;
    }

    let indent = "  ";
    Some(SidebarPatch {
        at: j - 1,
        lines: vec![
            format!("{indent}themeConfig: {{"),
            format!("{indent}  sidebar: ["),
            format!("{indent}    {{"),
            format!("{indent}      title: 'Components',"),
            format!("{indent}      children: ['{leaf}']"),
            format!("{indent}    }}"),
            format!("{indent}  ]"),
            format!("{indent}}},"),
        ],
    })
}

fn leading_indent(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Patches the sidebar config file on disk, diff-gated.
///
/// Absence of the file is [`AppError::MissingTargetFile`]; an unrecognized
/// structure is [`AppError::UnrecognizedStructure`] naming the file. Both are
/// hard failures for this patcher only.
pub fn add_to_sidebar_config(path: &Path, leaf: &str, backup: bool) -> AppResult<WriteOutcome> {
    if !path.exists() {
        return Err(AppError::MissingTargetFile(path.to_path_buf()));
    }

    let original = fs::read_to_string(path)?;
    let candidate = patch_sidebar(&original, leaf)
        .ok_or_else(|| AppError::UnrecognizedStructure(path.display().to_string()))?;
    commit(path, &original, &candidate, backup)
}
