#![deny(missing_docs)]

//! # Documentation Orchestrator
//!
//! Plans documentation target paths, writes the docs artifacts (create-or-
//! skip, never merged), and wires the new component into the three
//! registries. Registry integrations are nice-to-have: each patcher failure
//! is downgraded to a warning and the remaining patchers still run.

use crate::error::AppResult;
use crate::naming::NameSet;
use crate::patcher::{add_to_component_index, add_to_reference_doc, add_to_sidebar_config};
use crate::templates;
use crate::writer::WriteOutcome;
use std::fs;
use std::path::{Path, PathBuf};

/// Seed content for a components index created from scratch.
const INDEX_SEED: &str = "// Auto-generated components index\n\n";

/// All paths the documentation pass touches, resolved from an explicit
/// project root. Nothing here reads the process working directory.
#[derive(Debug, Clone)]
pub struct DocsPaths {
    /// `docs/components/` — markdown pages.
    pub components_dir: PathBuf,
    /// `docs/examples/{kebab}/` — example single-file components.
    pub examples_dir: PathBuf,
    /// `docs/components-api/` — API reference stubs.
    pub api_dir: PathBuf,
    /// The component's markdown page.
    pub component_md: PathBuf,
    /// The component's example SFC.
    pub example_vue: PathBuf,
    /// The component's API stub.
    pub api_js: PathBuf,
    /// The VuePress sidebar configuration.
    pub sidebar_config: PathBuf,
    /// The components barrel/index file.
    pub components_index: PathBuf,
    /// The alphabetical reference document.
    pub reference_doc: PathBuf,
    /// Sidebar leaf / reference link, e.g. `/components/user-button`.
    pub leaf: String,
}

impl DocsPaths {
    /// Resolves every documentation path for a component.
    pub fn resolve(root: &Path, kebab: &str) -> Self {
        let docs_dir = root.join("docs");
        let components_dir = docs_dir.join("components");

        DocsPaths {
            component_md: components_dir.join(format!("{kebab}.md")),
            example_vue: docs_dir
                .join("examples")
                .join(kebab)
                .join(format!("{kebab}-example.vue")),
            api_js: docs_dir
                .join("components-api")
                .join(format!("{kebab}-api.js")),
            sidebar_config: docs_dir.join(".vuepress").join("config.js"),
            components_index: root.join("src").join("components").join("index.js"),
            reference_doc: components_dir.join("README.md"),
            examples_dir: docs_dir.join("examples").join(kebab),
            api_dir: docs_dir.join("components-api"),
            leaf: format!("/components/{kebab}"),
            components_dir,
        }
    }
}

/// Aggregate result of a documentation pass.
#[derive(Debug, Default)]
pub struct DocsReport {
    /// Whether the markdown page was created (false: it already existed).
    pub created_markdown: bool,
    /// Whether the example SFC was created.
    pub created_example: bool,
    /// Whether the API stub was created.
    pub created_api: bool,
    /// Registry-patch failures, downgraded. Never fatal.
    pub warnings: Vec<String>,
    /// Per-registry write outcomes for the patches that succeeded.
    pub registry_writes: Vec<(PathBuf, WriteOutcome)>,
}

/// Generates the documentation artifacts for a component and integrates it
/// into the sidebar, barrel, and reference registries.
///
/// Only the primary artifact work can fail; every registry failure lands in
/// [`DocsReport::warnings`].
pub fn generate_component_docs(
    root: &Path,
    names: &NameSet,
    backup: bool,
) -> AppResult<DocsReport> {
    let paths = DocsPaths::resolve(root, &names.kebab);

    // Disjoint subfolders, no ordering dependency between them.
    fs::create_dir_all(&paths.components_dir)?;
    fs::create_dir_all(&paths.examples_dir)?;
    fs::create_dir_all(&paths.api_dir)?;

    let mut report = DocsReport {
        created_markdown: write_if_missing(
            &paths.component_md,
            &templates::docs_markdown(&names.pascal, &names.kebab),
        )?,
        created_example: write_if_missing(&paths.example_vue, &templates::docs_example(&names.pascal))?,
        created_api: write_if_missing(&paths.api_js, &templates::docs_api(&names.pascal))?,
        ..DocsReport::default()
    };

    match add_to_sidebar_config(&paths.sidebar_config, &paths.leaf, backup) {
        Ok(outcome) => report
            .registry_writes
            .push((paths.sidebar_config.clone(), outcome)),
        Err(e) => report.warnings.push(format!(
            "could not update {}: {}",
            paths.sidebar_config.display(),
            e
        )),
    }

    match patch_barrel(&paths, names, backup) {
        Ok(outcome) => report
            .registry_writes
            .push((paths.components_index.clone(), outcome)),
        Err(e) => report.warnings.push(format!(
            "could not update {}: {}",
            paths.components_index.display(),
            e
        )),
    }

    match add_to_reference_doc(&paths.reference_doc, &names.display, &paths.leaf, backup) {
        Ok(outcome) => report
            .registry_writes
            .push((paths.reference_doc.clone(), outcome)),
        Err(e) => report.warnings.push(format!(
            "could not update {}: {}",
            paths.reference_doc.display(),
            e
        )),
    }

    Ok(report)
}

/// Barrel patch with index seeding: a brand-new project gets a minimal index
/// file first, so the barrel integration works on first run.
fn patch_barrel(paths: &DocsPaths, names: &NameSet, backup: bool) -> AppResult<WriteOutcome> {
    if !paths.components_index.exists() {
        fs::write(&paths.components_index, INDEX_SEED)?;
    }
    add_to_component_index(&paths.components_index, &names.kebab, &names.pascal, backup)
}

/// Paths of the documentation artifacts a generation run would create.
/// Used by dry-run previews.
pub fn documentation_file_paths(root: &Path, kebab: &str) -> Vec<PathBuf> {
    let paths = DocsPaths::resolve(root, kebab);
    vec![paths.component_md, paths.example_vue, paths.api_js]
}

fn write_if_missing(path: &Path, content: &str) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, content)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SIDEBAR: &str = r#"module.exports = {
  themeConfig: {
    sidebar: [
      {
        title: 'Components',
        children: [
        ]
      }
    ]
  }
};
"#;

    fn seed_project(root: &Path) {
        fs::create_dir_all(root.join("docs").join(".vuepress")).unwrap();
        fs::create_dir_all(root.join("docs").join("components")).unwrap();
        fs::create_dir_all(root.join("src").join("components")).unwrap();
        fs::write(root.join("docs/.vuepress/config.js"), SIDEBAR).unwrap();
        fs::write(
            root.join("docs/components/README.md"),
            "## Índice de Componentes\n\n- [Alpha](/components/alpha)\n",
        )
        .unwrap();
        fs::write(
            root.join("src/components/index.js"),
            "import Alpha from './alpha';\n\nexport { Alpha };\n",
        )
        .unwrap();
    }

    #[test]
    fn test_full_pass_touches_all_registries() {
        let dir = tempdir().unwrap();
        seed_project(dir.path());

        let names = NameSet::resolve("UserButton", None);
        let report = generate_component_docs(dir.path(), &names, false).unwrap();

        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert!(report.created_markdown);
        assert!(report.created_example);
        assert!(report.created_api);

        let config =
            fs::read_to_string(dir.path().join("docs/.vuepress/config.js")).unwrap();
        assert!(config.contains("'/components/user-button',"));

        let index =
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap();
        assert!(index.contains("import UserButton from './user-button';"));
        assert!(index.contains("export { Alpha, UserButton };"));

        let readme =
            fs::read_to_string(dir.path().join("docs/components/README.md")).unwrap();
        assert!(readme.contains("- [Userbutton](/components/user-button)"));
    }

    #[test]
    fn test_second_pass_is_a_noop() {
        let dir = tempdir().unwrap();
        seed_project(dir.path());

        let names = NameSet::resolve("UserButton", None);
        generate_component_docs(dir.path(), &names, false).unwrap();

        let config_before =
            fs::read_to_string(dir.path().join("docs/.vuepress/config.js")).unwrap();
        let index_before =
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap();

        let report = generate_component_docs(dir.path(), &names, true).unwrap();
        assert!(report.warnings.is_empty());
        // Docs artifacts already exist, so nothing is re-created.
        assert!(!report.created_markdown);
        // Diff-gated: no registry rewrite and no backups on the second pass.
        assert!(report.registry_writes.iter().all(|(_, o)| !o.written));
        assert!(!dir.path().join("docs/.vuepress/config.js.bak").exists());

        assert_eq!(
            fs::read_to_string(dir.path().join("docs/.vuepress/config.js")).unwrap(),
            config_before
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap(),
            index_before
        );
    }

    #[test]
    fn test_registry_failures_become_warnings() {
        let dir = tempdir().unwrap();
        // No .vuepress config and no README; only src/components exists.
        fs::create_dir_all(dir.path().join("src").join("components")).unwrap();

        let names = NameSet::resolve("UserButton", None);
        let report = generate_component_docs(dir.path(), &names, false).unwrap();

        // Sidebar and reference fail, barrel succeeds via index seeding.
        assert_eq!(report.warnings.len(), 2);
        let index =
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap();
        assert!(index.contains("export { UserButton };"));
        // Primary docs artifacts are still produced.
        assert!(dir
            .path()
            .join("docs/components/user-button.md")
            .exists());
    }

    #[test]
    fn test_index_seeded_when_missing() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src").join("components")).unwrap();

        let names = NameSet::resolve("Beta", None);
        generate_component_docs(dir.path(), &names, false).unwrap();

        let index =
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap();
        // With no import block yet, the import lands at line 0, ahead of the
        // seed comment.
        assert!(index.starts_with("import Beta from './beta';"));
        assert!(index.contains("// Auto-generated components index"));
        assert!(index.contains("export { Beta };"));
    }

    #[test]
    fn test_existing_docs_artifacts_are_never_overwritten() {
        let dir = tempdir().unwrap();
        seed_project(dir.path());
        fs::create_dir_all(dir.path().join("docs/components")).unwrap();
        fs::write(
            dir.path().join("docs/components/user-button.md"),
            "hand-written page\n",
        )
        .unwrap();

        let names = NameSet::resolve("UserButton", None);
        let report = generate_component_docs(dir.path(), &names, false).unwrap();

        assert!(!report.created_markdown);
        assert_eq!(
            fs::read_to_string(dir.path().join("docs/components/user-button.md")).unwrap(),
            "hand-written page\n"
        );
    }
}
