//! Process-wide installation configuration
//!
//! Every constant the installer needs (template source location,
//! destination naming, guide-file snippet text) lives in one immutable
//! value constructed at startup and passed explicitly into each component,
//! so tests can substitute any of it.

use std::path::{Path, PathBuf};

/// Subdirectory name, in both the source tree and the destination, that
/// holds workflow units.
pub const WORKFLOWS_DIR: &str = "workflows";

/// File extension recognized as an installable template unit.
pub const UNIT_EXTENSION: &str = "md";

/// Reference snippet ensured in the project guide file.
const GUIDE_SNIPPET: &str = "\n\n## Orchestration\n\nFor complex tasks, refer to .orchestration/orchestration.md for available workflows.\n";

/// One root-level optional unit: a markdown file living directly under
/// `workflows/` rather than inside a category.
#[derive(Debug, Clone)]
pub struct RootUnitSpec {
    /// File name under `workflows/` in the source tree.
    pub filename: String,
    /// Short description shown in the interactive picker.
    pub description: String,
    /// Whether the unit starts checked in the interactive picker.
    pub default_selected: bool,
}

/// Immutable configuration for one setup run.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Bundled template source tree: the guide-index file plus the
    /// `workflows/` subtree.
    pub source_dir: PathBuf,
    /// Name of the hidden directory created under the project root.
    pub install_dir_name: String,
    /// Name of the mandatory guide-index file, copied on every run.
    pub index_filename: String,
    /// Guide-file name matched case-insensitively at the project root.
    pub guide_match_name: String,
    /// Canonical name used when creating a fresh guide file.
    pub guide_create_name: String,
    /// Snippet appended to (or seeded into) guide files.
    pub guide_snippet: String,
    /// Substring whose presence marks a guide file as already patched.
    pub guide_marker: String,
    /// Root-level optional units offered alongside the categories.
    pub root_units: Vec<RootUnitSpec>,
}

impl InstallConfig {
    /// Configuration for the template set that ships with the tool.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            source_dir: bundled_source_dir(),
            install_dir_name: ".orchestration".to_owned(),
            index_filename: "orchestration.md".to_owned(),
            guide_match_name: "orchestration.md".to_owned(),
            guide_create_name: "ORCHESTRATION.md".to_owned(),
            guide_snippet: GUIDE_SNIPPET.to_owned(),
            guide_marker: ".orchestration/orchestration.md".to_owned(),
            root_units: vec![
                RootUnitSpec {
                    filename: "handoff.md".to_owned(),
                    description: "session handoff notes for resuming work".to_owned(),
                    default_selected: true,
                },
                RootUnitSpec {
                    filename: "todo.md".to_owned(),
                    description: "running task list kept alongside workflows".to_owned(),
                    default_selected: false,
                },
            ],
        }
    }

    /// Source path of the `workflows/` subtree.
    #[must_use]
    pub fn workflows_dir(&self) -> PathBuf {
        self.source_dir.join(WORKFLOWS_DIR)
    }

    /// Full content for a freshly created guide file: a header line
    /// followed by the reference snippet.
    #[must_use]
    pub fn guide_seed(&self) -> String {
        format!("# {}{}", self.guide_create_name, self.guide_snippet)
    }
}

/// Locate the template tree that ships with the tool.
///
/// An installed binary expects `templates/orchestration` next to the
/// executable; a development build falls back to the copy in the crate
/// source tree.
fn bundled_source_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let beside_exe = dir.join("templates").join("orchestration");
            if beside_exe.is_dir() {
                return beside_exe;
            }
        }
    }
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("templates")
        .join("orchestration")
}
