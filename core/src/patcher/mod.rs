#![deny(missing_docs)]

//! # Registry Patchers
//!
//! Heuristic, line-structural editors for the three registry files a new
//! component is wired into:
//!
//! - **barrel**: the components index (import declarations plus a
//!   consolidated export list).
//! - **sidebar**: the VuePress sidebar configuration.
//! - **reference**: the alphabetical component reference list.
//!
//! None of these parse the target into a syntax tree. Each recognizes a small
//! set of structural dialects, inserts exactly once, and leaves every other
//! line untouched. Each is idempotent: a second run against already-patched
//! content produces identical output, which the diff-gated writer then turns
//! into a no-op on disk.

/// Components index (barrel) patching.
pub mod barrel;

/// Alphabetical reference-list patching.
pub mod reference;

/// Sidebar configuration patching.
pub mod sidebar;

pub use barrel::add_to_component_index;
pub use reference::add_to_reference_doc;
pub use sidebar::add_to_sidebar_config;
