use anyhow::Result;

use skcfg_lib::BuildConfig;

use crate::output::{OutputFormat, print_json, print_stat};

pub fn cmd_info(config: &BuildConfig, output: OutputFormat) -> Result<()> {
  if output.is_json() {
    return print_json(config);
  }

  let layout = &config.layout;
  println!("System:");
  print_stat("Platform", config.platform().as_str());
  println!();
  println!("Project:");
  print_stat("Name", &layout.project_name);
  print_stat("Root", &layout.project_root.display().to_string());
  print_stat("Build", &layout.build_dir.display().to_string());
  println!();
  print_stat("Definitions", &config.flags.definitions.len().to_string());
  print_stat("Debug flags", &config.flags.debug_flags.len().to_string());

  Ok(())
}
