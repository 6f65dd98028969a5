//! orchestrate CLI library
//!
//! Installs orchestration workflow templates into a project: discovers the
//! bundled template catalog, resolves a selection (interactively or in
//! bulk), copies the chosen files under a hidden install directory, and
//! patches the project guide file to reference the workflow index.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod installer;
pub mod patcher;
pub mod selection;

pub use catalog::{Catalog, TemplateUnit};
pub use config::InstallConfig;
pub use error::SetupError;
pub use selection::{Resolution, Selection};
