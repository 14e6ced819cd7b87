//! Host platform identification

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Host operating system, as far as build configuration cares
///
/// Only Windows and Linux need platform-specific definitions. Every other tag
/// is kept verbatim in `Other` and gets the unconditional set only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
  Windows,
  Linux,
  Other(String),
}

impl Platform {
  /// Parse a platform tag
  ///
  /// Matching is case-insensitive. `win32` is accepted as an alias for
  /// `windows` since that is what Python's `sys.platform` reports.
  pub fn from_tag(tag: &str) -> Self {
    let tag = tag.trim().to_lowercase();
    match tag.as_str() {
      "windows" | "win32" => Self::Windows,
      "linux" => Self::Linux,
      _ => Self::Other(tag),
    }
  }

  /// Detect the platform this process is running on
  pub fn current() -> Self {
    Self::from_tag(std::env::consts::OS)
  }

  /// Returns the lowercase tag for this platform
  pub fn as_str(&self) -> &str {
    match self {
      Self::Windows => "windows",
      Self::Linux => "linux",
      Self::Other(tag) => tag,
    }
  }

  pub fn is_windows(&self) -> bool {
    matches!(self, Self::Windows)
  }

  pub fn is_linux(&self) -> bool {
    matches!(self, Self::Linux)
  }
}

impl FromStr for Platform {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::from_tag(s))
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl Serialize for Platform {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for Platform {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let tag = String::deserialize(deserializer)?;
    Ok(Self::from_tag(&tag))
  }
}
