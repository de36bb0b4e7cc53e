#![deny(missing_docs)]

//! # Component Generation
//!
//! Creates the component directory and its primary artifacts: the
//! single-file component, the style stub, and the test stub. Documentation
//! and registry wiring are a separate pass (see [`crate::docs`]).

use crate::error::AppResult;
use crate::naming::NameSet;
use crate::templates;
use crate::vue_version::detect_vue_major;
use std::fs;
use std::path::{Path, PathBuf};

/// Options controlling a component generation run.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Output base directory. Defaults to `{cwd}/src/components`.
    pub out: Option<PathBuf>,
    /// Folder/path identity override (component class keeps its own name).
    pub root: Option<String>,
    /// Forced Vue major version; detected from `package.json` when absent.
    pub vue_major: Option<u8>,
    /// kebab-case file names instead of PascalCase.
    pub kebab_files: bool,
    /// Whether to create the style file.
    pub style: bool,
    /// Style file extension.
    pub style_ext: String,
    /// Whether to create the test file.
    pub test: bool,
    /// Test file suffix, including the leading dot(s).
    pub test_ext: String,
    /// Proceed even when the component directory already exists.
    pub force: bool,
    /// Plan only, touch nothing.
    pub dry_run: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        CreateOptions {
            out: None,
            root: None,
            vue_major: None,
            kebab_files: false,
            style: true,
            style_ext: "scss".to_string(),
            test: true,
            test_ext: ".spec.js".to_string(),
            force: false,
            dry_run: false,
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug)]
pub enum CreateOutcome {
    /// Files written, or planned when dry-running.
    Created {
        /// The component directory.
        dir: PathBuf,
        /// The artifact files, in write order.
        files: Vec<PathBuf>,
        /// True when nothing was touched.
        dry_run: bool,
        /// The Vue major version the templates targeted.
        vue_major: u8,
    },
    /// The component directory already exists and `force` was not given.
    /// A refusal, not an error: the caller decides how to present it.
    Exists(PathBuf),
}

/// Creates the component's primary artifacts under `cwd`.
pub fn create_component(
    cwd: &Path,
    name: &str,
    opts: &CreateOptions,
) -> AppResult<CreateOutcome> {
    let names = NameSet::resolve(name, opts.root.as_deref());
    let vue_major = opts
        .vue_major
        .or_else(|| detect_vue_major(cwd))
        .unwrap_or(3);

    let out_base = opts
        .out
        .clone()
        .unwrap_or_else(|| cwd.join("src").join("components"));
    let file_name = if opts.kebab_files {
        names.kebab.clone()
    } else {
        names.pascal.clone()
    };

    let dir = out_base.join(&file_name);
    if dir.exists() && !opts.force {
        return Ok(CreateOutcome::Exists(dir));
    }

    let component_file = dir.join(format!("{file_name}.vue"));
    let style_file = opts
        .style
        .then(|| dir.join(format!("{file_name}.{}", opts.style_ext)));
    let test_file = opts
        .test
        .then(|| dir.join(format!("{file_name}{}", opts.test_ext)));

    let mut files = vec![component_file.clone()];
    files.extend(style_file.clone());
    files.extend(test_file.clone());

    if opts.dry_run {
        return Ok(CreateOutcome::Created {
            dir,
            files,
            dry_run: true,
            vue_major,
        });
    }

    fs::create_dir_all(&dir)?;

    let style_lang = opts.style.then_some(opts.style_ext.as_str());
    let body = match vue_major {
        2 => templates::vue2_component(&names.pascal, &names.kebab, style_lang),
        _ => templates::vue3_component(&names.pascal, &names.kebab, style_lang),
    };
    fs::write(&component_file, body)?;

    if let Some(path) = &style_file {
        fs::write(path, templates::style_stub(&names.kebab))?;
    }
    if let Some(path) = &test_file {
        fs::write(path, templates::test_stub(&names.pascal, vue_major))?;
    }

    Ok(CreateOutcome::Created {
        dir,
        files,
        dry_run: false,
        vue_major,
    })
}
