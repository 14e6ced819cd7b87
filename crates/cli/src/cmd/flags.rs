//! Implementation of the `skcfg flags` command.
//!
//! Prints one compiler argument per line so the output can be spliced into a
//! compiler invocation as-is.

use anyhow::Result;
use tracing::debug;

use skcfg_lib::BuildConfig;
use skcfg_lib::DefineSyntax;
use skcfg_lib::render::compile_args;

use crate::output::{OutputFormat, print_json};

pub fn cmd_flags(config: &BuildConfig, syntax: Option<DefineSyntax>, with_debug: bool, output: OutputFormat) -> Result<()> {
  let syntax = syntax.unwrap_or_else(|| DefineSyntax::for_platform(config.platform()));
  debug!(?syntax, with_debug, "rendering compiler arguments");

  if output.is_json() {
    let json = serde_json::json!({
      "platform": config.platform(),
      "syntax": syntax,
      "definitions": config.flags.definitions,
      "debug_flags": config.flags.debug_flags,
      "args": compile_args(&config.flags, syntax, with_debug),
    });
    return print_json(&json);
  }

  for arg in compile_args(&config.flags, syntax, with_debug) {
    println!("{}", arg);
  }
  Ok(())
}
