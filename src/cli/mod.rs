pub mod args;
pub mod commands;
pub mod form;
pub mod output;

pub use args::{Cli, Commands, ProfileArgs};
pub use commands::{version_info, CommandHandler, CommandOutput};
pub use form::ProfileForm;
pub use output::{OutputFormatter, Spinner};
