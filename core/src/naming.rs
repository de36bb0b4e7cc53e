#![deny(missing_docs)]

//! # Naming Resolver
//!
//! Derives the identifier variants a component needs: the PascalCase import
//! name, the kebab-case file/path segment, and the human-readable label used
//! in the reference list.

use heck::{ToKebabCase, ToUpperCamelCase};

/// The resolved naming variants for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    /// PascalCase identifier, e.g. `UserButton`. Used for imports/exports.
    pub pascal: String,
    /// kebab-case identifier, e.g. `user-button`. Used for paths and links.
    pub kebab: String,
    /// Display label, e.g. `User button`. Used for reference-list entries.
    pub display: String,
}

impl NameSet {
    /// Resolves all variants from the raw component name.
    ///
    /// A `root` override changes the folder/path identity (kebab and display)
    /// while the Pascal identifier stays derived from `name`: the component
    /// class keeps its own name even when it lives in a shared root folder.
    pub fn resolve(name: &str, root: Option<&str>) -> Self {
        let effective = root.unwrap_or(name);

        NameSet {
            pascal: name.to_upper_camel_case(),
            kebab: effective.to_kebab_case(),
            display: display_label(effective),
        }
    }
}

/// First letter upper-cased, the rest lower-cased, hyphens become spaces.
fn display_label(name: &str) -> String {
    let lowered = name.to_lowercase().replace('-', " ");
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lowered,
    }
}
