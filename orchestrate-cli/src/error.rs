//! Error taxonomy for the setup flow

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a setup run.
///
/// User cancellation of an interactive prompt is deliberately not an error;
/// it is reported as [`crate::selection::Resolution::Cancelled`] and the
/// process exits cleanly.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The bundled template source tree is missing or not a directory.
    ///
    /// The templates ship with the tool, so this indicates a broken
    /// installation rather than a user mistake. Nothing has been written
    /// when this is raised.
    #[error("template source not found: {path} (try reinstalling the tool)")]
    SourceNotFound {
        /// Path that was expected to hold the template source tree.
        path: PathBuf,
    },

    /// A file copy, read, write, or directory creation failed.
    ///
    /// Fatal; files already written by earlier steps stay in place.
    #[error("file operation failed on {path}: {source}")]
    Copy {
        /// The path the failing operation targeted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An interactive prompt failed at the I/O level.
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
