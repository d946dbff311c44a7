//! Xgen - generate Xcode workspaces and playgrounds
//!
//! This library builds `.xcworkspace` and `.playground` bundles on disk
//! from an in-memory description: referenced projects, embedded
//! playgrounds, a target platform and source code.

pub mod config;
pub mod error;
pub mod fs;
pub mod paths;
pub mod playground;
pub mod templates;
pub mod ui;
pub mod workspace;
pub mod xml;

pub use error::{Error, Result};
pub use fs::{FileWriter, LocalFileWriter};
pub use playground::{Platform, Playground};
pub use workspace::{Reference, Workspace};
