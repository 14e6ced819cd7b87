//! Project root and build directory resolution

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::consts::BUILD_DIR_NAME;
use crate::error::{Error, Result};

/// Where the project lives and where its build output goes
///
/// All three values derive from a single anchor path and do not change once
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
  /// Canonical project root directory
  pub project_root: PathBuf,
  /// Final segment of `project_root`, lowercased
  pub project_name: String,
  /// `project_root/build`
  pub build_dir: PathBuf,
}

impl ProjectLayout {
  /// Resolve the layout from a path that sits two levels below the project root
  ///
  /// The anchor is canonicalized first, so symlinks and `.`/`..` segments
  /// never leak into the result. `<root>/scripts/paths.py` and `<root>/crates/lib`
  /// both resolve to `<root>`.
  pub fn from_anchor(anchor: impl AsRef<Path>) -> Result<Self> {
    let anchor = anchor.as_ref();
    let canonical = dunce::canonicalize(anchor).map_err(|e| Error::io(anchor, e))?;
    let root = canonical
      .ancestors()
      .nth(2)
      .ok_or_else(|| Error::NoProjectRoot(canonical.clone()))?;
    Self::derive(root)
  }

  /// Resolve the layout for an already known project root
  pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
    let root = root.as_ref();
    let canonical = dunce::canonicalize(root).map_err(|e| Error::io(root, e))?;
    Self::derive(&canonical)
  }

  /// Resolve the layout of the workspace this crate is built from
  ///
  /// The crate's manifest directory (`<root>/crates/lib`) is the anchor.
  pub fn locate() -> Result<Self> {
    Self::from_anchor(env!("CARGO_MANIFEST_DIR"))
  }

  fn derive(root: &Path) -> Result<Self> {
    let project_name = root
      .file_name()
      .ok_or_else(|| Error::UnnamedRoot(root.to_path_buf()))?
      .to_string_lossy()
      .to_lowercase();

    let layout = Self {
      project_root: root.to_path_buf(),
      project_name,
      build_dir: root.join(BUILD_DIR_NAME),
    };
    debug!(
      root = %layout.project_root.display(),
      name = %layout.project_name,
      "resolved project layout"
    );
    Ok(layout)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  /// Creates `<temp>/<name>/run_py/paths.py` and returns the temp dir and script path.
  fn project_with_script(name: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let script_dir = temp.path().join(name).join("run_py");
    std::fs::create_dir_all(&script_dir).unwrap();
    let script = script_dir.join("paths.py");
    std::fs::write(&script, "").unwrap();
    (temp, script)
  }

  fn canonical(path: impl AsRef<Path>) -> PathBuf {
    dunce::canonicalize(path).unwrap()
  }

  #[test]
  fn root_is_two_levels_above_anchor() {
    let (temp, script) = project_with_script("Automat");
    let layout = ProjectLayout::from_anchor(&script).unwrap();

    assert_eq!(layout.project_root, canonical(temp.path().join("Automat")));
  }

  #[test]
  fn name_is_lowercased_root_segment() {
    let (_temp, script) = project_with_script("MyProject");
    let layout = ProjectLayout::from_anchor(&script).unwrap();

    assert_eq!(layout.project_name, "myproject");
    assert_eq!(
      layout.project_root.file_name().unwrap().to_string_lossy().to_lowercase(),
      layout.project_name
    );
  }

  #[test]
  fn build_dir_is_root_plus_build() {
    let (_temp, script) = project_with_script("proj");
    let layout = ProjectLayout::from_anchor(&script).unwrap();

    assert_eq!(layout.build_dir.parent().unwrap(), layout.project_root);
    assert_eq!(layout.build_dir.file_name().unwrap(), "build");
  }

  #[test]
  fn relative_segments_are_resolved() {
    let (temp, script) = project_with_script("proj");
    let dotted = script
      .parent()
      .unwrap()
      .join("..")
      .join("run_py")
      .join(".")
      .join("paths.py");

    let layout = ProjectLayout::from_anchor(dotted).unwrap();
    assert_eq!(layout.project_root, canonical(temp.path().join("proj")));
  }

  #[cfg(unix)]
  #[test]
  fn symlinked_anchor_resolves_to_target_project() {
    let (temp, script) = project_with_script("real");
    let elsewhere = temp.path().join("other").join("links");
    std::fs::create_dir_all(&elsewhere).unwrap();
    let link = elsewhere.join("paths.py");
    std::os::unix::fs::symlink(&script, &link).unwrap();

    let layout = ProjectLayout::from_anchor(&link).unwrap();
    assert_eq!(layout.project_root, canonical(temp.path().join("real")));
    assert_eq!(layout.project_name, "real");
  }

  #[test]
  fn missing_anchor_is_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope").join("paths.py");

    let err = ProjectLayout::from_anchor(&missing).unwrap_err();
    match err {
      Error::Io { path, .. } => assert_eq!(path, missing),
      other => panic!("expected Io error, got {other:?}"),
    }
  }

  #[cfg(unix)]
  #[test]
  fn filesystem_root_has_no_project_name() {
    let err = ProjectLayout::from_root("/").unwrap_err();
    assert!(matches!(&err, Error::UnnamedRoot(path) if path == Path::new("/")));
    assert_eq!(err.to_string(), "project root '/' has no final segment");
  }

  #[cfg(unix)]
  #[test]
  fn anchor_too_close_to_filesystem_root_fails() {
    let err = ProjectLayout::from_anchor("/tmp").unwrap_err();
    assert!(matches!(err, Error::UnnamedRoot(_) | Error::NoProjectRoot(_)));
  }

  #[test]
  fn from_root_matches_from_anchor() {
    let (temp, script) = project_with_script("Same");
    let by_anchor = ProjectLayout::from_anchor(&script).unwrap();
    let by_root = ProjectLayout::from_root(temp.path().join("Same")).unwrap();

    assert_eq!(by_anchor, by_root);
  }

  #[test]
  fn locate_finds_workspace_root() {
    let layout = ProjectLayout::locate().unwrap();

    assert_eq!(
      layout.project_root.join("crates").join("lib"),
      canonical(env!("CARGO_MANIFEST_DIR"))
    );
    assert!(layout.project_root.join("Cargo.toml").is_file());
  }

  #[test]
  fn resolution_is_deterministic() {
    let (_temp, script) = project_with_script("proj");
    let first = ProjectLayout::from_anchor(&script).unwrap();
    let second = ProjectLayout::from_anchor(&script).unwrap();
    assert_eq!(first, second);
  }
}
