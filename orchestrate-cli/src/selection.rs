//! Selection resolution
//!
//! Turns a catalog into the ordered list of units to install, either in
//! bulk or through an interactive wizard. Prompt I/O sits behind the
//! [`Prompter`] trait so the wizard's decision logic can be driven by
//! canned responses in tests.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

use crate::catalog::{Catalog, TemplateUnit};
use crate::error::SetupError;

/// Ordered list of units chosen for installation. May be empty; consumed
/// exactly once by the installer.
pub type Selection = Vec<TemplateUnit>;

/// Outcome of resolving a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Proceed and install these units (possibly none).
    Install(Selection),
    /// The selection was empty and the user chose not to proceed.
    EmptyDeclined,
    /// The user aborted a prompt; nothing is installed.
    Cancelled,
}

/// Blocking interactive prompts used by the wizard.
///
/// `Ok(None)` means the user cancelled the prompt (Esc or interrupt).
/// Cancellation is not an error; the wizard abandons the run cleanly.
pub trait Prompter {
    /// Multi-select over `items`, with `defaults` marking pre-checked
    /// entries. Returns the indices of checked items.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Prompt`] when the prompt fails at the I/O
    /// level.
    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Option<Vec<usize>>, SetupError>;

    /// Yes/no confirmation with a default answer.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Prompt`] when the prompt fails at the I/O
    /// level.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, SetupError>;
}

/// [`Prompter`] backed by `dialoguer` prompts on the terminal.
#[derive(Default)]
pub struct ConsolePrompter {
    theme: ColorfulTheme,
}

impl Prompter for ConsolePrompter {
    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Option<Vec<usize>>, SetupError> {
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact_opt()?;
        Ok(picked)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, SetupError> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?;
        Ok(answer)
    }
}

/// Every unit from every category plus every root-level unit, in catalog
/// order. Bulk mode for the `--all` flag.
#[must_use]
pub fn resolve_all(catalog: &Catalog) -> Selection {
    let mut selection = Selection::new();
    for category in &catalog.categories {
        for file in &category.files {
            selection.push(TemplateUnit {
                category: Some(category.name.clone()),
                filename: file.clone(),
            });
        }
    }
    for unit in &catalog.root_units {
        selection.push(TemplateUnit {
            category: None,
            filename: unit.filename.clone(),
        });
    }
    selection
}

/// Run the interactive wizard.
///
/// Steps: pick categories (all pre-checked), pick units within each chosen
/// category in catalog order (all pre-checked), pick root-level units
/// (configured defaults), then ask for confirmation if the accumulated
/// selection is empty (default: proceed). Cancelling any step abandons the
/// whole run; no partial selection escapes.
///
/// # Errors
///
/// Propagates prompt I/O failures. User cancellation is reported as
/// [`Resolution::Cancelled`], not as an error.
pub fn resolve_interactive(
    catalog: &Catalog,
    prompter: &mut dyn Prompter,
) -> Result<Resolution, SetupError> {
    let mut selection = Selection::new();

    if !catalog.categories.is_empty() {
        let names: Vec<String> = catalog
            .categories
            .iter()
            .map(|category| category.name.clone())
            .collect();
        let defaults = vec![true; names.len()];
        let Some(mut picked) =
            prompter.multi_select("Select workflow categories", &names, &defaults)?
        else {
            return Ok(Resolution::Cancelled);
        };
        // Catalog order is the contract, whatever order the prompt reports.
        picked.sort_unstable();

        for category_idx in picked {
            let category = &catalog.categories[category_idx];
            if category.files.is_empty() {
                continue;
            }
            let defaults = vec![true; category.files.len()];
            let prompt = format!("Select {} workflows", category.name);
            let Some(mut files) = prompter.multi_select(&prompt, &category.files, &defaults)?
            else {
                return Ok(Resolution::Cancelled);
            };
            files.sort_unstable();
            for file_idx in files {
                selection.push(TemplateUnit {
                    category: Some(category.name.clone()),
                    filename: category.files[file_idx].clone(),
                });
            }
        }
    }

    if !catalog.root_units.is_empty() {
        let labels: Vec<String> = catalog
            .root_units
            .iter()
            .map(|unit| format!("{} ({})", unit.filename, unit.description))
            .collect();
        let defaults: Vec<bool> = catalog
            .root_units
            .iter()
            .map(|unit| unit.default_selected)
            .collect();
        let Some(mut picked) = prompter.multi_select("Select optional extras", &labels, &defaults)?
        else {
            return Ok(Resolution::Cancelled);
        };
        picked.sort_unstable();
        for unit_idx in picked {
            selection.push(TemplateUnit {
                category: None,
                filename: catalog.root_units[unit_idx].filename.clone(),
            });
        }
    }

    if selection.is_empty() {
        let Some(proceed) =
            prompter.confirm("Nothing selected. Install only the orchestration guide?", true)?
        else {
            return Ok(Resolution::Cancelled);
        };
        if !proceed {
            return Ok(Resolution::EmptyDeclined);
        }
    }

    Ok(Resolution::Install(selection))
}
