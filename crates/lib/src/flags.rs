//! Compiler flags and preprocessor definitions for building against Skia
//!
//! A [`FlagSet`] is a pure function of the [`Platform`]: the same platform
//! always yields the same debug flags and the same definitions.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::platform::Platform;

/// Flags added to every debug compile, in order
pub const DEBUG_FLAGS: &[&str] = &[
  // Enables SkASSERT and friends.
  "-DSK_DEBUG",
  // Changes how sk_sp is passed at the ABI level. Every unit that passes sk_sp
  // across the Skia library boundary must agree on it or it crashes.
  "-DSK_TRIVIAL_ABI=[[clang::trivial_abi]]",
];

/// Definitions applied on every platform
const SKIA_DEFINES: &[&str] = &[
  // Ganesh GPU backend on Vulkan, allocating through VMA
  "SK_GANESH",
  "SK_VULKAN",
  "SK_USE_VMA",
  "SK_SHAPER_HARFBUZZ_AVAILABLE",
];

/// Definitions for Windows, minus the version pair
///
/// `UNICODE` is deliberately absent: we run with the UTF-8 code page.
const WINDOWS_DEFINES: &[&str] = &[
  "NOMINMAX",
  // <windows.h> otherwise defines an ERROR macro
  "NOGDI",
  // MSVC's <source_location> checks for it and Clang does not set it yet
  "__cpp_consteval",
  "_CRT_SECURE_NO_WARNINGS",
  "WIN32_LEAN_AND_MEAN",
  "VK_USE_PLATFORM_WIN32_KHR",
];

const LINUX_DEFINES: &[&str] = &["VK_USE_PLATFORM_XCB_KHR"];

/// A preprocessor symbol with an optional value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Define {
  pub name: String,
  pub value: Option<String>,
}

impl Define {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: None,
    }
  }

  pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: Some(value.into()),
    }
  }

  /// Parse `NAME` or `NAME=VALUE`
  pub fn parse(s: &str) -> Self {
    match s.split_once('=') {
      Some((name, value)) => Self::with_value(name, value),
      None => Self::new(s),
    }
  }
}

impl fmt::Display for Define {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.value {
      Some(value) => write!(f, "{}={}", self.name, value),
      None => write!(f, "{}", self.name),
    }
  }
}

impl Serialize for Define {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// Minimum Windows version targeted by the build
///
/// Windows headers read the version from both `_WIN32_WINNT` and `WINVER`, so
/// both are always emitted from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsVersion(pub u16);

impl WindowsVersion {
  pub const WIN10: Self = Self(0x0A00);

  pub fn defines(self) -> [Define; 2] {
    let value = format!("0x{:04X}", self.0);
    [
      Define::with_value("_WIN32_WINNT", value.clone()),
      Define::with_value("WINVER", value),
    ]
  }
}

/// A set of preprocessor definitions
///
/// Inserting a definition that is already present is a no-op. Iteration is
/// sorted so rendered output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefineSet(BTreeSet<Define>);

impl DefineSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns `true` if the definition was not already present
  pub fn insert(&mut self, define: Define) -> bool {
    self.0.insert(define)
  }

  /// Returns `true` if any definition has this name, whatever its value
  pub fn contains_name(&self, name: &str) -> bool {
    self.0.iter().any(|d| d.name == name)
  }

  pub fn contains(&self, define: &Define) -> bool {
    self.0.contains(define)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Define> {
    self.0.iter()
  }

  /// Definitions as `NAME[=VALUE]` strings, sorted
  pub fn to_strings(&self) -> Vec<String> {
    self.0.iter().map(Define::to_string).collect()
  }

  fn extend_names(&mut self, names: &[&str]) {
    self.0.extend(names.iter().map(|s| Define::parse(s)));
  }
}

impl FromIterator<Define> for DefineSet {
  fn from_iter<I: IntoIterator<Item = Define>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl Extend<Define> for DefineSet {
  fn extend<I: IntoIterator<Item = Define>>(&mut self, iter: I) {
    self.0.extend(iter);
  }
}

impl<'a> IntoIterator for &'a DefineSet {
  type Item = &'a Define;
  type IntoIter = std::collections::btree_set::Iter<'a, Define>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// Debug flags and definitions for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagSet {
  pub platform: Platform,
  pub debug_flags: Vec<String>,
  pub definitions: DefineSet,
}

impl FlagSet {
  pub fn for_platform(platform: &Platform) -> Self {
    let mut definitions = DefineSet::new();
    definitions.extend_names(SKIA_DEFINES);

    match platform {
      Platform::Windows => {
        definitions.extend_names(WINDOWS_DEFINES);
        definitions.extend(WindowsVersion::WIN10.defines());
      }
      Platform::Linux => definitions.extend_names(LINUX_DEFINES),
      Platform::Other(tag) => {
        debug!(platform = %tag, "no platform-specific definitions");
      }
    }

    Self {
      platform: platform.clone(),
      debug_flags: DEBUG_FLAGS.iter().map(|s| s.to_string()).collect(),
      definitions,
    }
  }

  pub fn current() -> Self {
    Self::for_platform(&Platform::current())
  }
}
