/// Application name, used for the CLI and the Lua global table
pub const APP_NAME: &str = "skcfg";

/// Name of the build output directory under the project root
pub const BUILD_DIR_NAME: &str = "build";

/// Overrides the detected project root when set
pub const PROJECT_ROOT_ENV: &str = "SKCFG_PROJECT_ROOT";

/// Overrides the detected host platform when set
pub const PLATFORM_ENV: &str = "SKCFG_PLATFORM";
