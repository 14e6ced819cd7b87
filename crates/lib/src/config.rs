//! Resolved build configuration
//!
//! [`BuildConfig::resolve`] is the usual entry point: it picks up environment
//! overrides, falls back to detection, and computes everything once.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::consts::{PLATFORM_ENV, PROJECT_ROOT_ENV};
use crate::error::Result;
use crate::flags::FlagSet;
use crate::layout::ProjectLayout;
use crate::platform::Platform;

/// Project layout and flag set, side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
  pub layout: ProjectLayout,
  pub flags: FlagSet,
}

impl BuildConfig {
  pub fn new(layout: ProjectLayout, platform: &Platform) -> Self {
    Self {
      layout,
      flags: FlagSet::for_platform(platform),
    }
  }

  /// Resolve from the environment
  ///
  /// - `SKCFG_PROJECT_ROOT` replaces layout discovery with an explicit root
  /// - `SKCFG_PLATFORM` replaces host platform detection
  pub fn resolve() -> Result<Self> {
    Self::resolve_with(None, None)
  }

  /// Resolve with explicit overrides taking precedence over the environment
  pub fn resolve_with(root: Option<PathBuf>, platform: Option<Platform>) -> Result<Self> {
    let root = root.or_else(|| non_empty_var(PROJECT_ROOT_ENV).map(PathBuf::from));
    let layout = match root {
      Some(root) => ProjectLayout::from_root(root)?,
      None => ProjectLayout::locate()?,
    };

    let platform = platform
      .or_else(|| non_empty_var(PLATFORM_ENV).map(|tag| Platform::from_tag(&tag)))
      .unwrap_or_else(Platform::current);

    debug!(platform = %platform, root = %layout.project_root.display(), "resolved build config");
    Ok(Self::new(layout, &platform))
  }

  pub fn platform(&self) -> &Platform {
    &self.flags.platform
  }
}

fn non_empty_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use tempfile::TempDir;

  #[test]
  #[serial]
  fn defaults_to_detection() {
    temp_env::with_vars([(PROJECT_ROOT_ENV, None::<&str>), (PLATFORM_ENV, None::<&str>)], || {
      let config = BuildConfig::resolve().unwrap();
      assert_eq!(config.layout, ProjectLayout::locate().unwrap());
      assert_eq!(config.platform(), &Platform::current());
    });
  }

  #[test]
  #[serial]
  fn env_overrides_platform() {
    temp_env::with_vars([(PROJECT_ROOT_ENV, None::<&str>), (PLATFORM_ENV, Some("win32"))], || {
      let config = BuildConfig::resolve().unwrap();
      assert_eq!(config.platform(), &Platform::Windows);
      assert_eq!(config.flags.definitions.len(), 12);
    });
  }

  #[test]
  #[serial]
  fn env_overrides_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Elsewhere");
    std::fs::create_dir_all(&root).unwrap();

    temp_env::with_vars(
      [(PROJECT_ROOT_ENV, Some(root.to_str().unwrap())), (PLATFORM_ENV, None)],
      || {
        let config = BuildConfig::resolve().unwrap();
        assert_eq!(config.layout.project_name, "elsewhere");
        assert_eq!(config.layout.build_dir, dunce::canonicalize(&root).unwrap().join("build"));
      },
    );
  }

  #[test]
  #[serial]
  fn empty_env_values_are_ignored() {
    temp_env::with_vars([(PROJECT_ROOT_ENV, Some("")), (PLATFORM_ENV, Some(""))], || {
      let config = BuildConfig::resolve().unwrap();
      assert_eq!(config.platform(), &Platform::current());
    });
  }

  #[test]
  #[serial]
  fn explicit_overrides_beat_env() {
    temp_env::with_vars([(PROJECT_ROOT_ENV, None::<&str>), (PLATFORM_ENV, Some("windows"))], || {
      let config = BuildConfig::resolve_with(None, Some(Platform::Linux)).unwrap();
      assert_eq!(config.platform(), &Platform::Linux);
    });
  }

  #[test]
  #[serial]
  fn missing_root_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");

    temp_env::with_vars([(PLATFORM_ENV, None::<&str>)], || {
      let err = BuildConfig::resolve_with(Some(missing.clone()), None).unwrap_err();
      assert!(err.to_string().contains("missing"));
    });
  }
}
