//! Guide-file patching
//!
//! Ensures the project guide references the installed workflow index
//! without ever duplicating the reference. Matching is by filename only;
//! existing guide content is never parsed beyond a substring check.

use std::fs;
use std::path::Path;

use crate::catalog::{list_entries, FsEntry};
use crate::config::InstallConfig;
use crate::error::SetupError;

/// Result for one guide-file candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No candidate existed; a fresh guide file was created with this name.
    Created(String),
    /// The snippet was appended to this existing file.
    Updated(String),
    /// This file already contained the reference and was left untouched.
    Skipped(String),
}

/// Ensure the reference snippet is present in the project guide file(s).
///
/// Candidates are the immediate files of `project_root` whose name matches
/// the configured guide name under ASCII-case-insensitive comparison. With
/// zero candidates a new guide is created under the canonical name;
/// otherwise each candidate is appended to or skipped independently, with
/// no rollback across files.
///
/// # Errors
///
/// Returns [`SetupError::Copy`] when the scan, a read, or a write fails.
/// Outcomes already applied to other candidates stand.
pub fn patch_guide_files(
    config: &InstallConfig,
    project_root: &Path,
) -> Result<Vec<PatchOutcome>, SetupError> {
    let candidates = find_guide_files(config, project_root)?;

    if candidates.is_empty() {
        let path = project_root.join(&config.guide_create_name);
        fs::write(&path, config.guide_seed()).map_err(|source| SetupError::Copy {
            path: path.clone(),
            source,
        })?;
        return Ok(vec![PatchOutcome::Created(config.guide_create_name.clone())]);
    }

    let mut outcomes = Vec::with_capacity(candidates.len());
    for name in candidates {
        let path = project_root.join(&name);
        let mut content = fs::read_to_string(&path).map_err(|source| SetupError::Copy {
            path: path.clone(),
            source,
        })?;
        if content.contains(&config.guide_marker) {
            outcomes.push(PatchOutcome::Skipped(name));
            continue;
        }
        content.push_str(&config.guide_snippet);
        fs::write(&path, content).map_err(|source| SetupError::Copy {
            path: path.clone(),
            source,
        })?;
        outcomes.push(PatchOutcome::Updated(name));
    }
    Ok(outcomes)
}

/// File names at the project root matching the guide name, sorted so the
/// outcome order is stable.
fn find_guide_files(
    config: &InstallConfig,
    project_root: &Path,
) -> Result<Vec<String>, SetupError> {
    let mut names: Vec<String> = list_entries(project_root)?
        .into_iter()
        .filter_map(|entry| match entry {
            FsEntry::File(name) if name.eq_ignore_ascii_case(&config.guide_match_name) => {
                Some(name)
            }
            _ => None,
        })
        .collect();
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> InstallConfig {
        InstallConfig::bundled()
    }

    fn marker_count(text: &str, marker: &str) -> usize {
        text.matches(marker).count()
    }

    #[test]
    fn creates_canonical_guide_when_none_exists() {
        let temp = TempDir::new().unwrap();
        let cfg = config();

        let outcomes = patch_guide_files(&cfg, temp.path()).unwrap();

        assert_eq!(
            outcomes,
            [PatchOutcome::Created("ORCHESTRATION.md".to_owned())]
        );
        let text = fs::read_to_string(temp.path().join("ORCHESTRATION.md")).unwrap();
        assert!(text.starts_with("# ORCHESTRATION.md"));
        assert_eq!(marker_count(&text, &cfg.guide_marker), 1);
    }

    #[test]
    fn appends_snippet_to_existing_guide() {
        let temp = TempDir::new().unwrap();
        let cfg = config();
        let guide = temp.path().join("orchestration.md");
        fs::write(&guide, "# My project notes\n").unwrap();

        let outcomes = patch_guide_files(&cfg, temp.path()).unwrap();

        assert_eq!(
            outcomes,
            [PatchOutcome::Updated("orchestration.md".to_owned())]
        );
        let text = fs::read_to_string(&guide).unwrap();
        assert!(text.starts_with("# My project notes\n"));
        assert_eq!(marker_count(&text, &cfg.guide_marker), 1);
    }

    #[test]
    fn skips_guide_that_already_references_the_index() {
        let temp = TempDir::new().unwrap();
        let cfg = config();
        let guide = temp.path().join("orchestration.md");
        let original = format!("# Notes\n\nsee {}\n", cfg.guide_marker);
        fs::write(&guide, &original).unwrap();

        let outcomes = patch_guide_files(&cfg, temp.path()).unwrap();

        assert_eq!(
            outcomes,
            [PatchOutcome::Skipped("orchestration.md".to_owned())]
        );
        assert_eq!(fs::read_to_string(&guide).unwrap(), original);
    }

    #[test]
    fn patching_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let cfg = config();

        patch_guide_files(&cfg, temp.path()).unwrap();
        let outcomes = patch_guide_files(&cfg, temp.path()).unwrap();

        assert_eq!(
            outcomes,
            [PatchOutcome::Skipped("ORCHESTRATION.md".to_owned())]
        );
        let text = fs::read_to_string(temp.path().join("ORCHESTRATION.md")).unwrap();
        assert_eq!(marker_count(&text, &cfg.guide_marker), 1);
    }

    #[test]
    fn matches_guide_name_case_insensitively() {
        let temp = TempDir::new().unwrap();
        let cfg = config();
        let guide = temp.path().join("Orchestration.MD");
        fs::write(&guide, "existing\n").unwrap();

        let outcomes = patch_guide_files(&cfg, temp.path()).unwrap();

        assert_eq!(
            outcomes,
            [PatchOutcome::Updated("Orchestration.MD".to_owned())]
        );
        let text = fs::read_to_string(&guide).unwrap();
        assert_eq!(marker_count(&text, &cfg.guide_marker), 1);
    }

    #[test]
    fn each_candidate_is_handled_independently() {
        // Case-sensitive filesystems can hold several matching names at
        // once; one already patched, one not.
        let temp = TempDir::new().unwrap();
        let cfg = config();
        fs::write(
            temp.path().join("ORCHESTRATION.md"),
            format!("done {}\n", cfg.guide_marker),
        )
        .unwrap();
        fs::write(temp.path().join("orchestration.md"), "fresh\n").unwrap();

        let mut outcomes = patch_guide_files(&cfg, temp.path()).unwrap();
        outcomes.sort_by_key(|outcome| match outcome {
            PatchOutcome::Created(name)
            | PatchOutcome::Updated(name)
            | PatchOutcome::Skipped(name) => name.clone(),
        });

        assert_eq!(
            outcomes,
            [
                PatchOutcome::Skipped("ORCHESTRATION.md".to_owned()),
                PatchOutcome::Updated("orchestration.md".to_owned()),
            ]
        );
    }

    #[test]
    fn directories_with_a_matching_name_are_ignored() {
        let temp = TempDir::new().unwrap();
        let cfg = config();
        fs::create_dir(temp.path().join("orchestration.md")).unwrap();

        let outcomes = patch_guide_files(&cfg, temp.path()).unwrap();

        assert_eq!(
            outcomes,
            [PatchOutcome::Created("ORCHESTRATION.md".to_owned())]
        );
    }
}
