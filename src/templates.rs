//! Default playground code.
//!
//! Snippets are embedded at compile time from the `templates/` directory,
//! one per platform.

use crate::playground::Platform;

/// iOS playground boilerplate
pub const IOS: &str = include_str!("../templates/ios.swift");

/// macOS playground boilerplate
pub const MACOS: &str = include_str!("../templates/macos.swift");

/// tvOS playground boilerplate
pub const TVOS: &str = include_str!("../templates/tvos.swift");

/// The code a playground starts with when none is supplied
pub fn default_code(platform: Platform) -> &'static str {
    match platform {
        Platform::Ios => IOS,
        Platform::Macos => MACOS,
        Platform::Tvos => TVOS,
    }
}
