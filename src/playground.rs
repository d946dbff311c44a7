//! Playground bundles - a code file plus platform metadata

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::Result;
use crate::error::Error;
use crate::fs::{FileWriter, LocalFileWriter};
use crate::paths::bundle_path;
use crate::templates::default_code;
use crate::xml::Element;

/// Bundle directory extension
pub const EXTENSION: &str = "playground";

/// Name of the code file inside the bundle
pub const CODE_FILE: &str = "Contents.swift";

/// Name of the settings document inside the bundle
pub const SETTINGS_FILE: &str = "contents.xcplayground";

const SETTINGS_VERSION: &str = "5.0";

/// Platform a playground runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Macos,
    Tvos,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Macos, Platform::Tvos];

    /// Identifier used in the settings document
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Tvos => "tvos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL.into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Config(format!("Unknown platform: {}", s)))
    }
}

/// A playground: target platform and code, generated into a
/// `.playground` bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playground {
    path: PathBuf,
    platform: Platform,
    code: String,
    /// True until the caller supplies code explicitly
    default_code: bool,
}

impl Playground {
    /// Create an iOS playground with the default code
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_platform(path, Platform::default())
    }

    pub fn with_platform(path: impl AsRef<Path>, platform: Platform) -> Self {
        Self {
            path: bundle_path(path.as_ref(), EXTENSION),
            platform,
            code: default_code(platform).to_string(),
            default_code: true,
        }
    }

    /// Create a playground with custom code. Platform changes never
    /// touch this code.
    pub fn with_code(path: impl AsRef<Path>, platform: Platform, code: impl Into<String>) -> Self {
        let mut playground = Self::with_platform(path, platform);
        playground.set_code(code);
        playground
    }

    /// Bundle directory, always ending in `.playground`
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether `code` is still the platform default
    pub fn has_default_code(&self) -> bool {
        self.default_code
    }

    /// Change the platform. Default code follows the new platform.
    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
        if self.default_code {
            self.code = default_code(platform).to_string();
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.default_code = false;
    }

    /// Settings document describing this playground
    pub fn settings_document(&self) -> Element {
        Element::new("playground")
            .attr("version", SETTINGS_VERSION)
            .attr("target-platform", self.platform.as_str())
    }

    /// Generate the bundle on the local filesystem
    pub fn generate(&self) -> Result<()> {
        self.generate_with(&LocalFileWriter)
    }

    /// Generate the bundle through `writer`.
    ///
    /// Files written before a failing step are left in place.
    pub fn generate_with(&self, writer: &dyn FileWriter) -> Result<()> {
        tracing::info!("Generating {} playground at {:?}", self.platform, self.path);

        writer.create_directory(&self.path)?;
        writer.write_file(&self.path.join(CODE_FILE), self.code.as_bytes())?;

        let settings = self.settings_document().to_document()?;
        writer.write_file(&self.path.join(SETTINGS_FILE), settings.as_bytes())?;

        Ok(())
    }
}
