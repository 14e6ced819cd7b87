mod eval;
mod flags;
mod info;
mod paths;

pub use eval::cmd_eval;
pub use flags::cmd_flags;
pub use info::cmd_info;
pub use paths::cmd_paths;
