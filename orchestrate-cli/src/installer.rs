//! Copying selected units into the project
//!
//! Writes everything under the hidden install directory at the project
//! root. The guide-index file is copied first and unconditionally; the
//! selected units follow in selection order, mirroring their category
//! structure under `workflows/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::TemplateUnit;
use crate::config::{InstallConfig, WORKFLOWS_DIR};
use crate::error::SetupError;

/// Copies the guide-index file and the selected units under the project's
/// hidden install directory.
pub struct Installer<'a> {
    config: &'a InstallConfig,
}

impl<'a> Installer<'a> {
    /// Create an installer over `config`.
    #[must_use]
    pub const fn new(config: &'a InstallConfig) -> Self {
        Self { config }
    }

    /// Install `selection` under `project_root`.
    ///
    /// Existing destination files are overwritten wholesale; the units are
    /// static templates, not user data. Returns the paths written, in
    /// order, relative to `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Copy`] on the first failing copy and aborts
    /// the rest of the run; files already written stay in place.
    pub fn install(
        &self,
        selection: &[TemplateUnit],
        project_root: &Path,
    ) -> Result<Vec<PathBuf>, SetupError> {
        let mut written = Vec::with_capacity(selection.len() + 1);

        let index_rel = Path::new(&self.config.install_dir_name).join(&self.config.index_filename);
        copy_file(
            &self.config.source_dir.join(&self.config.index_filename),
            &project_root.join(&index_rel),
        )?;
        written.push(index_rel);

        let workflows_src = self.config.workflows_dir();
        for unit in selection {
            let rel = self.unit_dest_path(unit);
            copy_file(&unit_source_path(&workflows_src, unit), &project_root.join(&rel))?;
            written.push(rel);
        }

        Ok(written)
    }

    /// Destination path for one unit, relative to the project root:
    /// `<install dir>/workflows/[category/]filename`.
    #[must_use]
    pub fn unit_dest_path(&self, unit: &TemplateUnit) -> PathBuf {
        let mut rel = Path::new(&self.config.install_dir_name).join(WORKFLOWS_DIR);
        if let Some(category) = &unit.category {
            rel.push(category);
        }
        rel.push(&unit.filename);
        rel
    }
}

fn unit_source_path(workflows_src: &Path, unit: &TemplateUnit) -> PathBuf {
    let mut src = workflows_src.to_path_buf();
    if let Some(category) = &unit.category {
        src.push(category);
    }
    src.push(&unit.filename);
    src
}

/// Copy one file verbatim, creating missing parent directories.
fn copy_file(src: &Path, dest: &Path) -> Result<(), SetupError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| SetupError::Copy {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::copy(src, dest).map_err(|source| SetupError::Copy {
        path: dest.to_path_buf(),
        source,
    })?;
    Ok(())
}
