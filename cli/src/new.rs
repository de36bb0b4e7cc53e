#![deny(missing_docs)]

//! # New Command
//!
//! Creates a Vue component with the standard structure:
//!
//! 1. Validates the name and option values.
//! 2. Generates the primary artifacts (SFC, style stub, test stub), or just
//!    prints the plan when dry-running.
//! 3. Unless disabled, generates the VuePress documentation artifacts and
//!    wires the component into the sidebar, the components index, and the
//!    reference list. Registry failures are reported as warnings and never
//!    change the command's outcome.

use compgen_core::{
    create_component, detect_vue_major, documentation_file_paths, generate_component_docs,
    AppError, AppResult, CreateOptions, CreateOutcome, DocsPaths, NameSet,
};
use std::path::{Path, PathBuf};

/// Style extensions the generator knows how to emit.
const VALID_STYLE_EXTS: [&str; 5] = ["css", "scss", "sass", "less", "styl"];

/// Arguments for the new command.
#[derive(clap::Args, Debug, Clone)]
pub struct NewArgs {
    /// Component name (PascalCase, kebab-case, snake_case or spaced).
    pub name: String,

    /// Root folder name for the component (default: same as the component).
    #[clap(short, long)]
    pub root: Option<String>,

    /// Force Vue 2.x templates.
    #[clap(long)]
    pub vue2: bool,

    /// Force Vue 3.x templates (default when undetectable).
    #[clap(long, conflicts_with = "vue2")]
    pub vue3: bool,

    /// Style file extension (css|scss|sass|less|styl).
    #[clap(long, default_value = "scss")]
    pub style_ext: String,

    /// Test file suffix.
    #[clap(long, default_value = ".spec.js")]
    pub test_ext: String,

    /// Use kebab-case file names (default: PascalCase).
    #[clap(long)]
    pub kebab: bool,

    /// Skip the test file.
    #[clap(long = "no-test")]
    pub no_test: bool,

    /// Skip the style file.
    #[clap(long = "no-style")]
    pub no_style: bool,

    /// Skip documentation generation and registry integration.
    #[clap(long = "no-docs")]
    pub no_docs: bool,

    /// Output directory (default: src/components).
    #[clap(short, long)]
    pub out: Option<PathBuf>,

    /// Overwrite an existing component directory.
    #[clap(short, long)]
    pub force: bool,

    /// Preview what would be created without touching the disk.
    #[clap(long)]
    pub dry_run: bool,

    /// Back up registry files (as `.bak` siblings) before patching them.
    #[clap(long)]
    pub backup: bool,

    /// Verbose output.
    #[clap(short, long)]
    pub verbose: bool,
}

/// Executes the new command against the current working directory.
///
/// The working directory is resolved once here; everything below takes it as
/// an explicit argument.
pub fn execute(args: &NewArgs) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    run(&cwd, args)
}

/// Runs the command against an explicit project root.
fn run(cwd: &Path, args: &NewArgs) -> AppResult<()> {
    validate(args)?;

    let opts = CreateOptions {
        out: args.out.clone(),
        root: args.root.clone(),
        vue_major: forced_vue(args),
        kebab_files: args.kebab,
        style: !args.no_style,
        style_ext: args.style_ext.clone(),
        test: !args.no_test,
        test_ext: args.test_ext.clone(),
        force: args.force,
        dry_run: args.dry_run,
    };

    if args.verbose {
        println!("Creating component '{}'...", args.name);
        println!("  output dir: {:?}", opts.out.as_deref().unwrap_or(Path::new("src/components")));
        println!("  docs: {}", if args.no_docs { "skipped" } else { "enabled" });
    }

    match create_component(cwd, &args.name, &opts)? {
        CreateOutcome::Exists(dir) => Err(AppError::General(format!(
            "directory {dir:?} already exists, use --force to overwrite"
        ))),
        CreateOutcome::Created {
            files,
            dry_run: true,
            ..
        } => {
            report_dry_run(cwd, args, &files);
            Ok(())
        }
        CreateOutcome::Created { dir, files, .. } => {
            println!("Component '{}' created at {:?}", args.name, dir);
            for file in &files {
                println!("  + {}", file.display());
            }

            if !args.no_docs {
                generate_docs(cwd, args)?;
            }
            Ok(())
        }
    }
}

/// Documentation pass. Runs only against Vue 2 projects: the VuePress v1
/// pipeline the docs target does not support Vue 3.
fn generate_docs(cwd: &Path, args: &NewArgs) -> AppResult<()> {
    let vue_major = forced_vue(args)
        .or_else(|| detect_vue_major(cwd))
        .unwrap_or(2);
    if vue_major == 3 {
        println!("Warning: documentation generation is not supported for Vue 3, skipping");
        println!("  (use --no-docs to silence this warning)");
        return Ok(());
    }

    let names = NameSet::resolve(&args.name, args.root.as_deref());
    let report = generate_component_docs(cwd, &names, args.backup)?;

    if args.verbose {
        let created = [
            report.created_markdown,
            report.created_example,
            report.created_api,
        ]
        .iter()
        .filter(|c| **c)
        .count();
        println!("Documentation: {created} file(s) created");
        for (path, outcome) in &report.registry_writes {
            let state = if outcome.written { "updated" } else { "unchanged" };
            println!("  ~ {} ({state})", path.display());
        }
    }

    for warning in &report.warnings {
        println!("Warning: {warning}");
    }

    Ok(())
}

fn report_dry_run(cwd: &Path, args: &NewArgs, files: &[PathBuf]) {
    println!("Dry run, files that would be created:");
    for file in files {
        println!("  + {}", file.display());
    }

    if !args.no_docs {
        let names = NameSet::resolve(&args.name, args.root.as_deref());
        println!("Documentation files:");
        for file in documentation_file_paths(cwd, &names.kebab) {
            println!("  + {}", file.display());
        }
        let paths = DocsPaths::resolve(cwd, &names.kebab);
        println!("Registry files that would be updated:");
        println!("  ~ {}", paths.sidebar_config.display());
        println!("  ~ {}", paths.components_index.display());
        println!("  ~ {}", paths.reference_doc.display());
    }
}

fn forced_vue(args: &NewArgs) -> Option<u8> {
    if args.vue2 {
        Some(2)
    } else if args.vue3 {
        Some(3)
    } else {
        None
    }
}

fn validate(args: &NewArgs) -> AppResult<()> {
    if args.name.trim().is_empty() {
        return Err(AppError::General("component name is required".into()));
    }
    if !VALID_STYLE_EXTS.contains(&args.style_ext.as_str()) {
        return Err(AppError::General(format!(
            "style extension '{}' is not supported (valid: {})",
            args.style_ext,
            VALID_STYLE_EXTS.join("|")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn default_args(name: &str) -> NewArgs {
        NewArgs {
            name: name.to_string(),
            root: None,
            vue2: false,
            vue3: false,
            style_ext: "scss".to_string(),
            test_ext: ".spec.js".to_string(),
            kebab: false,
            no_test: false,
            no_style: false,
            no_docs: false,
            out: None,
            force: false,
            dry_run: false,
            backup: false,
            verbose: false,
        }
    }

    fn seed_docs_project(root: &Path) {
        fs::create_dir_all(root.join("docs/.vuepress")).unwrap();
        fs::create_dir_all(root.join("docs/components")).unwrap();
        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::write(
            root.join("docs/.vuepress/config.js"),
            "module.exports = {\n  themeConfig: {\n    sidebar: [\n    ]\n  }\n};\n",
        )
        .unwrap();
        fs::write(
            root.join("docs/components/README.md"),
            "## Índice de Componentes\n\n",
        )
        .unwrap();
        fs::write(root.join("src/components/index.js"), "").unwrap();
    }

    #[test]
    fn test_new_component_with_docs_wiring() {
        let dir = tempdir().unwrap();
        seed_docs_project(dir.path());
        fs::write(
            dir.path().join("package.json"),
            r#"{ "dependencies": { "vue": "^2.6.11" } }"#,
        )
        .unwrap();

        run(dir.path(), &default_args("UserButton")).unwrap();

        // Primary artifacts.
        let component_dir = dir.path().join("src/components/UserButton");
        assert!(component_dir.join("UserButton.vue").exists());
        assert!(component_dir.join("UserButton.scss").exists());
        assert!(component_dir.join("UserButton.spec.js").exists());

        // Registry integration.
        let config =
            fs::read_to_string(dir.path().join("docs/.vuepress/config.js")).unwrap();
        assert!(config.contains("children: ['/components/user-button']"));

        let index =
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap();
        assert!(index.contains("import UserButton from './user-button';"));

        let readme =
            fs::read_to_string(dir.path().join("docs/components/README.md")).unwrap();
        assert!(readme.contains("[Userbutton](/components/user-button)"));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let dir = tempdir().unwrap();
        seed_docs_project(dir.path());
        fs::write(
            dir.path().join("package.json"),
            r#"{ "dependencies": { "vue": "^2.6.11" } }"#,
        )
        .unwrap();

        run(dir.path(), &default_args("UserButton")).unwrap();
        let config_once =
            fs::read_to_string(dir.path().join("docs/.vuepress/config.js")).unwrap();
        let index_once =
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap();

        let mut again = default_args("UserButton");
        again.force = true;
        run(dir.path(), &again).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("docs/.vuepress/config.js")).unwrap(),
            config_once
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("src/components/index.js")).unwrap(),
            index_once
        );
        // Exactly one import line after two runs.
        assert_eq!(
            index_once
                .matches("import UserButton from './user-button';")
                .count(),
            1
        );
    }

    #[test]
    fn test_vue3_project_skips_docs() {
        let dir = tempdir().unwrap();
        let mut args = default_args("Alpha");
        args.vue3 = true;

        run(dir.path(), &args).unwrap();

        assert!(dir.path().join("src/components/Alpha/Alpha.vue").exists());
        // No docs tree was scaffolded.
        assert!(!dir.path().join("docs").exists());
    }

    #[test]
    fn test_registry_warnings_do_not_fail_the_command() {
        let dir = tempdir().unwrap();
        // Vue 2 forced, docs enabled, but no registries exist.
        let mut args = default_args("Alpha");
        args.vue2 = true;

        run(dir.path(), &args).unwrap();
        assert!(dir.path().join("src/components/Alpha/Alpha.vue").exists());
        // Docs artifacts are still produced despite registry warnings.
        assert!(dir.path().join("docs/components/alpha.md").exists());
    }

    #[test]
    fn test_existing_directory_without_force_fails() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/components/Alpha")).unwrap();

        let err = run(dir.path(), &default_args("Alpha")).unwrap_err();
        assert!(format!("{err}").contains("--force"));
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let dir = tempdir().unwrap();
        let mut args = default_args("Alpha");
        args.dry_run = true;

        run(dir.path(), &args).unwrap();
        assert!(!dir.path().join("src").exists());
        assert!(!dir.path().join("docs").exists());
    }

    #[test]
    fn test_invalid_style_ext_rejected() {
        let dir = tempdir().unwrap();
        let mut args = default_args("Alpha");
        args.style_ext = "sty".to_string();

        let err = run(dir.path(), &args).unwrap_err();
        assert!(format!("{err}").contains("not supported"));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_blank_name_rejected() {
        let dir = tempdir().unwrap();
        let err = run(dir.path(), &default_args("   ")).unwrap_err();
        assert!(format!("{err}").contains("name is required"));
    }
}
