//! The setup flow: catalog, selection, install, guide patch

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::catalog::read_catalog;
use crate::config::InstallConfig;
use crate::installer::Installer;
use crate::patcher::{patch_guide_files, PatchOutcome};
use crate::selection::{resolve_all, resolve_interactive, ConsolePrompter, Resolution};

/// Install workflow templates into the current project.
pub struct SetupCommand {
    config: InstallConfig,
    install_all: bool,
}

impl SetupCommand {
    /// Create the command; `install_all` selects every unit without
    /// prompting.
    #[must_use]
    pub const fn new(config: InstallConfig, install_all: bool) -> Self {
        Self {
            config,
            install_all,
        }
    }

    /// Execute against the current working directory.
    ///
    /// # Errors
    ///
    /// Fails on a broken template bundle or any file operation error.
    pub fn execute(&self) -> Result<()> {
        let project_root =
            std::env::current_dir().context("Failed to get current directory")?;
        self.run(&project_root)
    }

    /// Execute against an explicit project root.
    ///
    /// # Errors
    ///
    /// Fails on a broken template bundle, a prompt I/O failure, or any
    /// file operation error. User cancellation and a declined empty
    /// selection both return `Ok` with no destination writes.
    pub fn run(&self, project_root: &Path) -> Result<()> {
        println!("{}", style("Agent Orchestration Setup").green().bold());
        println!();

        let catalog =
            read_catalog(&self.config).context("Failed to read the bundled template catalog")?;

        let resolution = if self.install_all {
            Resolution::Install(resolve_all(&catalog))
        } else {
            let mut prompter = ConsolePrompter::default();
            resolve_interactive(&catalog, &mut prompter)?
        };

        let selection = match resolution {
            Resolution::Install(selection) => selection,
            Resolution::EmptyDeclined => {
                println!("{}", style("Nothing selected. No changes made.").yellow());
                return Ok(());
            }
            Resolution::Cancelled => {
                println!("{}", style("Setup cancelled. No changes made.").yellow());
                return Ok(());
            }
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Copying workflow templates...");

        let installer = Installer::new(&self.config);
        let written = installer.install(&selection, project_root)?;

        spinner.set_message("Updating project guide...");
        let outcomes = patch_guide_files(&self.config, project_root)?;

        spinner.finish_and_clear();

        for path in &written {
            println!(
                "  {} {}",
                style("Created:").green(),
                style(path.display()).dim()
            );
        }
        for outcome in &outcomes {
            match outcome {
                PatchOutcome::Created(name) => {
                    println!("  {} {name}", style("Created:").green());
                }
                PatchOutcome::Updated(name) => {
                    println!("  {} {name}", style("Updated:").green());
                }
                PatchOutcome::Skipped(name) => {
                    println!(
                        "  {} {name} already references the workflow index",
                        style("Skipped:").yellow()
                    );
                }
            }
        }

        println!();
        println!(
            "{}",
            style(format!(
                "Done! Workflow templates are in {}/",
                self.config.install_dir_name
            ))
            .green()
            .bold()
        );
        Ok(())
    }
}
