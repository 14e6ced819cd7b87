use anyhow::Result;

use skcfg_lib::BuildConfig;

use crate::output::{OutputFormat, print_json};

/// Print the project layout as `key=value` lines, for shells and build drivers.
pub fn cmd_paths(config: &BuildConfig, output: OutputFormat) -> Result<()> {
  let layout = &config.layout;
  if output.is_json() {
    return print_json(layout);
  }

  println!("project_root={}", layout.project_root.display());
  println!("project_name={}", layout.project_name);
  println!("build_dir={}", layout.build_dir.display());
  Ok(())
}
