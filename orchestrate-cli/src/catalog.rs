//! Template catalog discovery
//!
//! Walks the bundled source tree and enumerates the installable units:
//! categories are the subdirectories of `workflows/`, units are the
//! markdown files inside them. Root-level optional units come from static
//! configuration, not from the scan. The scan is a pure read with no side
//! effects.

use std::fs;
use std::path::Path;

use crate::config::{InstallConfig, RootUnitSpec, UNIT_EXTENSION};
use crate::error::SetupError;

/// One immediate entry of a directory, tagged by kind.
///
/// Symlinks and other special entries are dropped by [`list_entries`];
/// consumers match on the two kinds explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    /// A plain file.
    File(String),
    /// A directory.
    Dir(String),
}

/// One installable file.
///
/// `category == None` denotes a root-level unit living directly under
/// `workflows/`. (category, filename) pairs are unique within a catalog
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUnit {
    /// Category directory the unit belongs to, if any.
    pub category: Option<String>,
    /// File name of the unit.
    pub filename: String,
}

/// One category of units, in catalog order.
#[derive(Debug, Clone)]
pub struct Category {
    /// Directory name under `workflows/`.
    pub name: String,
    /// Unit file names within the category, sorted.
    pub files: Vec<String>,
}

/// Snapshot of everything installable, built once per run and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Discovered categories, sorted by name.
    pub categories: Vec<Category>,
    /// Statically configured root-level optional units.
    pub root_units: Vec<RootUnitSpec>,
}

/// List the immediate entries of `path` as tagged variants.
///
/// # Errors
///
/// Returns [`SetupError::Copy`] when the directory cannot be read.
pub fn list_entries(path: &Path) -> Result<Vec<FsEntry>, SetupError> {
    let read = fs::read_dir(path).map_err(|source| SetupError::Copy {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|source| SetupError::Copy {
            path: path.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| SetupError::Copy {
            path: entry.path(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if file_type.is_dir() {
            entries.push(FsEntry::Dir(name));
        } else if file_type.is_file() {
            entries.push(FsEntry::File(name));
        }
    }
    Ok(entries)
}

/// Build the catalog from the configured source tree.
///
/// Categories and the files within them are sorted by name so the catalog
/// order does not depend on directory iteration order.
///
/// # Errors
///
/// Returns [`SetupError::SourceNotFound`] when the bundled source tree or
/// its `workflows/` subtree is missing; the templates ship with the tool,
/// so this indicates a broken installation. Scan failures surface as
/// [`SetupError::Copy`].
pub fn read_catalog(config: &InstallConfig) -> Result<Catalog, SetupError> {
    if !config.source_dir.is_dir() {
        return Err(SetupError::SourceNotFound {
            path: config.source_dir.clone(),
        });
    }
    let workflows = config.workflows_dir();
    if !workflows.is_dir() {
        return Err(SetupError::SourceNotFound { path: workflows });
    }

    let mut names: Vec<String> = list_entries(&workflows)?
        .into_iter()
        .filter_map(|entry| match entry {
            FsEntry::Dir(name) => Some(name),
            FsEntry::File(_) => None,
        })
        .collect();
    names.sort();

    let mut categories = Vec::with_capacity(names.len());
    for name in names {
        let files = unit_files(&workflows.join(&name))?;
        categories.push(Category { name, files });
    }

    Ok(Catalog {
        categories,
        root_units: config.root_units.clone(),
    })
}

/// Markdown unit files directly inside `dir`, sorted by name.
fn unit_files(dir: &Path) -> Result<Vec<String>, SetupError> {
    let mut files: Vec<String> = list_entries(dir)?
        .into_iter()
        .filter_map(|entry| match entry {
            FsEntry::File(name) if has_unit_extension(&name) => Some(name),
            _ => None,
        })
        .collect();
    files.sort();
    Ok(files)
}

fn has_unit_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(UNIT_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(source_dir: &Path) -> InstallConfig {
        InstallConfig {
            source_dir: source_dir.to_path_buf(),
            root_units: vec![RootUnitSpec {
                filename: "todo.md".to_owned(),
                description: "task list".to_owned(),
                default_selected: false,
            }],
            ..InstallConfig::bundled()
        }
    }

    #[test]
    fn missing_source_dir_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp.path().join("does-not-exist"));

        let err = read_catalog(&config).unwrap_err();
        assert!(matches!(err, SetupError::SourceNotFound { .. }));
    }

    #[test]
    fn missing_workflows_subtree_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let err = read_catalog(&config).unwrap_err();
        assert!(matches!(err, SetupError::SourceNotFound { .. }));
    }

    #[test]
    fn categories_and_files_are_sorted() {
        let temp = TempDir::new().unwrap();
        let workflows = temp.path().join("workflows");
        fs::create_dir_all(workflows.join("feature")).unwrap();
        fs::create_dir_all(workflows.join("bugfix")).unwrap();
        fs::write(workflows.join("feature/plan.md"), "plan").unwrap();
        fs::write(workflows.join("feature/build.md"), "build").unwrap();
        fs::write(workflows.join("bugfix/diagnose.md"), "diagnose").unwrap();

        let catalog = read_catalog(&test_config(temp.path())).unwrap();

        let names: Vec<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["bugfix", "feature"]);
        assert_eq!(catalog.categories[1].files, ["build.md", "plan.md"]);
    }

    #[test]
    fn only_markdown_files_count_as_units() {
        let temp = TempDir::new().unwrap();
        let feature = temp.path().join("workflows/feature");
        fs::create_dir_all(&feature).unwrap();
        fs::write(feature.join("build.md"), "build").unwrap();
        fs::write(feature.join("notes.txt"), "notes").unwrap();
        fs::write(feature.join("LOUD.MD"), "loud").unwrap();
        fs::create_dir_all(feature.join("nested")).unwrap();

        let catalog = read_catalog(&test_config(temp.path())).unwrap();

        assert_eq!(catalog.categories[0].files, ["LOUD.MD", "build.md"]);
    }

    #[test]
    fn root_units_come_from_configuration() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("workflows")).unwrap();

        let catalog = read_catalog(&test_config(temp.path())).unwrap();

        assert!(catalog.categories.is_empty());
        assert_eq!(catalog.root_units.len(), 1);
        assert_eq!(catalog.root_units[0].filename, "todo.md");
    }

    #[test]
    fn list_entries_tags_files_and_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let mut entries = list_entries(temp.path()).unwrap();
        entries.sort_by_key(|entry| match entry {
            FsEntry::File(name) | FsEntry::Dir(name) => name.clone(),
        });

        assert_eq!(
            entries,
            [
                FsEntry::File("a.md".to_owned()),
                FsEntry::Dir("sub".to_owned()),
            ]
        );
    }
}
