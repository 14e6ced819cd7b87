mod cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skcfg_lib::{BuildConfig, DefineSyntax, Platform};

use crate::output::{OutputFormat, print_error};

/// skcfg - Build configuration for Skia-based projects
#[derive(Parser)]
#[command(name = "skcfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Platform tag to configure for (default: host platform)
  #[arg(long, global = true)]
  platform: Option<String>,

  /// Project root (default: the workspace skcfg was built from; set this or SKCFG_PROJECT_ROOT for an installed or relocated binary)
  #[arg(long, global = true)]
  root: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show platform and project layout
  Info,

  /// Print project root, name and build directory
  Paths,

  /// Print preprocessor definitions as compiler arguments
  Flags {
    /// Definition syntax (default: native to the platform)
    #[arg(long, value_enum)]
    syntax: Option<SyntaxArg>,

    /// Append the debug compiler flags
    #[arg(long)]
    debug: bool,
  },

  /// Evaluate a Lua build script with the `skcfg` table available
  Eval {
    /// Path to the Lua script
    script: PathBuf,
  },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SyntaxArg {
  Gnu,
  Msvc,
}

impl From<SyntaxArg> for DefineSyntax {
  fn from(arg: SyntaxArg) -> Self {
    match arg {
      SyntaxArg::Gnu => DefineSyntax::Gnu,
      SyntaxArg::Msvc => DefineSyntax::Msvc,
    }
  }
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if let Err(e) = run(cli) {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> anyhow::Result<()> {
  let platform = cli.platform.as_deref().map(Platform::from_tag);
  let config = BuildConfig::resolve_with(cli.root, platform)?;

  match cli.command {
    Commands::Info => cmd::cmd_info(&config, cli.output),
    Commands::Paths => cmd::cmd_paths(&config, cli.output),
    Commands::Flags { syntax, debug } => cmd::cmd_flags(&config, syntax.map(Into::into), debug, cli.output),
    Commands::Eval { script } => cmd::cmd_eval(&config, &script, cli.output),
  }
}
