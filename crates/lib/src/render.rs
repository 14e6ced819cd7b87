//! Turning definitions into compiler arguments
//!
//! `flags` only ever deals in bare `NAME[=VALUE]` definitions. The prefix a
//! compiler expects is chosen here, by whoever drives the compiler.

use serde::Serialize;

use crate::flags::{Define, DefineSet, FlagSet};
use crate::platform::Platform;

/// Command-line syntax for preprocessor definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefineSyntax {
  /// `-DNAME=VALUE` (clang, gcc, clang-cl also accepts it)
  Gnu,
  /// `/DNAME=VALUE` (cl.exe)
  Msvc,
}

impl DefineSyntax {
  /// Default syntax for compilers native to the platform
  pub fn for_platform(platform: &Platform) -> Self {
    if platform.is_windows() { Self::Msvc } else { Self::Gnu }
  }

  pub const fn prefix(self) -> &'static str {
    match self {
      Self::Gnu => "-D",
      Self::Msvc => "/D",
    }
  }
}

pub fn render_define(define: &Define, syntax: DefineSyntax) -> String {
  format!("{}{}", syntax.prefix(), define)
}

pub fn render_defines(defines: &DefineSet, syntax: DefineSyntax) -> Vec<String> {
  defines.iter().map(|d| render_define(d, syntax)).collect()
}

/// Compiler arguments for a flag set: definitions first, then debug flags if requested
pub fn compile_args(flags: &FlagSet, syntax: DefineSyntax, debug: bool) -> Vec<String> {
  let mut args = render_defines(&flags.definitions, syntax);
  if debug {
    args.extend(flags.debug_flags.iter().cloned());
  }
  args
}

/// Apply a flag set to a `cc::Build`
///
/// `cc` picks the right definition syntax for the compiler it detects.
#[cfg(feature = "cc")]
pub fn apply_to_cc(flags: &FlagSet, build: &mut cc::Build, debug: bool) {
  for define in &flags.definitions {
    build.define(&define.name, define.value.as_deref());
  }
  if debug {
    for flag in &flags.debug_flags {
      build.flag(flag);
    }
  }
}
