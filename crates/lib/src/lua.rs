//! Lua access to the resolved configuration.
//!
//! This module registers the `skcfg` global table which provides:
//! - `skcfg.project_root`, `skcfg.project_name`, `skcfg.build_dir` - Project layout
//! - `skcfg.platform` - Platform tag (e.g., "windows", "linux", "darwin")
//! - `skcfg.debug_flags` - Ordered debug compiler flags
//! - `skcfg.definitions` - Sorted `NAME[=VALUE]` preprocessor definitions
//! - `skcfg.has_define(name)` - Whether a definition with that name is present
//! - `skcfg.script_dir` - Directory of the script being evaluated (set by `load_file`)

use std::path::Path;

use mlua::prelude::*;

use crate::config::BuildConfig;
use crate::consts::APP_NAME;

/// Register the `skcfg` global table in the Lua runtime.
pub fn register_globals(lua: &Lua, config: &BuildConfig) -> LuaResult<()> {
  let table = lua.create_table()?;

  let layout = &config.layout;
  table.set("project_root", layout.project_root.to_string_lossy().to_string())?;
  table.set("project_name", layout.project_name.as_str())?;
  table.set("build_dir", layout.build_dir.to_string_lossy().to_string())?;

  table.set("platform", config.platform().as_str())?;
  table.set("debug_flags", lua.create_sequence_from(config.flags.debug_flags.iter().cloned())?)?;
  table.set("definitions", lua.create_sequence_from(config.flags.definitions.to_strings())?)?;

  let definitions = config.flags.definitions.clone();
  let has_define = lua.create_function(move |_, name: String| Ok(definitions.contains_name(&name)))?;
  table.set("has_define", has_define)?;

  lua.globals().set(APP_NAME, table)?;
  Ok(())
}

/// Create a Lua runtime with the `skcfg` table registered.
pub fn create_runtime(config: &BuildConfig) -> LuaResult<Lua> {
  let lua = Lua::new();
  register_globals(&lua, config)?;
  Ok(lua)
}

/// Load and execute a Lua file at the given path.
/// Sets `skcfg.script_dir` to the directory of the loaded file.
/// Returns the result of the file execution.
pub fn load_file(lua: &Lua, path: &Path) -> LuaResult<LuaValue> {
  let canonical_path = dunce::canonicalize(path)
    .map_err(|e| LuaError::external(format!("cannot canonicalize '{}': {}", path.display(), e)))?;
  let content = std::fs::read_to_string(&canonical_path)
    .map_err(|e| LuaError::external(format!("cannot read '{}': {}", canonical_path.display(), e)))?;

  let table = lua.globals().get::<LuaTable>(APP_NAME)?;
  table.set(
    "script_dir",
    canonical_path
      .parent()
      .unwrap_or(Path::new(""))
      .to_string_lossy()
      .to_string(),
  )?;

  lua
    .load(&content)
    .set_name(format!("@{}", canonical_path.display()))
    .eval::<LuaValue>()
}
