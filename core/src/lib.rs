#![deny(missing_docs)]

//! # Compgen Core
//!
//! Core library for the Vue component scaffolder.
//!
//! Two halves:
//! - Artifact generation: component directory, single-file component, style
//!   and test stubs, documentation pages.
//! - Registry integration: heuristic line-structural patchers that wire a new
//!   component into the components index, the VuePress sidebar and the
//!   alphabetical reference list, idempotently and without disturbing
//!   unrelated content.

/// Shared error types.
pub mod error;

/// Line-oriented document representation.
pub mod document;

/// Pre-mutation file snapshots.
pub mod backup;

/// Diff-gated file writes.
pub mod writer;

/// Component naming variants.
pub mod naming;

/// Vue version detection from `package.json`.
pub mod vue_version;

/// Artifact and documentation templates.
pub mod templates;

/// Registry patchers (barrel, sidebar, reference list).
pub mod patcher;

/// Documentation generation and registry wiring.
pub mod docs;

/// Primary artifact generation.
pub mod generate;

pub use backup::create_backup;
pub use docs::{documentation_file_paths, generate_component_docs, DocsPaths, DocsReport};
pub use document::StructuralDocument;
pub use error::{AppError, AppResult};
pub use generate::{create_component, CreateOptions, CreateOutcome};
pub use naming::NameSet;
pub use patcher::{add_to_component_index, add_to_reference_doc, add_to_sidebar_config};
pub use vue_version::detect_vue_major;
pub use writer::{commit, WriteOutcome};
