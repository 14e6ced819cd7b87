//! skcfg-lib: build configuration for projects linking Skia
//!
//! This crate provides the values an external build driver needs:
//! - `ProjectLayout`: project root, project name and build directory
//! - `FlagSet`: debug compiler flags and preprocessor definitions per platform
//! - `BuildConfig`: both of the above, resolved once with environment overrides
//! - `lua`: the resolved configuration exposed to Lua build scripts

pub mod config;
pub mod consts;
pub mod error;
pub mod flags;
pub mod layout;
pub mod lua;
pub mod platform;
pub mod render;

pub use config::BuildConfig;
pub use error::{Error, Result};
pub use flags::{Define, DefineSet, FlagSet};
pub use layout::ProjectLayout;
pub use platform::Platform;
pub use render::DefineSyntax;
