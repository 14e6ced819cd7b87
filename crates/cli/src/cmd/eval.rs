//! Implementation of the `skcfg eval` command.
//!
//! Runs a Lua build script with the resolved configuration registered as the
//! `skcfg` global and prints whatever the script returns.

use std::path::Path;

use anyhow::{Context, Result};
use mlua::{LuaSerdeExt, Value};

use skcfg_lib::BuildConfig;
use skcfg_lib::lua::{create_runtime, load_file};

use crate::output::{OutputFormat, print_json, print_success};

// mlua::Error is not Send + Sync, so it cannot go through anyhow::Context directly
fn map_lua_err<T>(result: mlua::Result<T>) -> Result<T> {
  result.map_err(|e| anyhow::anyhow!("{}", e))
}

pub fn cmd_eval(config: &BuildConfig, script: &Path, output: OutputFormat) -> Result<()> {
  let lua = map_lua_err(create_runtime(config)).context("Failed to create Lua runtime")?;
  let value = map_lua_err(load_file(&lua, script))
    .with_context(|| format!("Failed to evaluate script: {}", script.display()))?;

  if output.is_json() {
    let json: serde_json::Value = map_lua_err(lua.from_value(value)).context("Script result is not serializable")?;
    return print_json(&json);
  }

  match value {
    Value::Nil => print_success(&format!("Evaluated {}", script.display())),
    Value::String(s) => println!("{}", s.to_string_lossy()),
    other => {
      let json: serde_json::Value = map_lua_err(lua.from_value(other)).context("Script result is not serializable")?;
      println!("{}", json);
    }
  }
  Ok(())
}
