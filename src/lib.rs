pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod recommender;

pub use cli::{Cli, CommandHandler, CommandOutput, Commands};
pub use config::Settings;
pub use error::{ProviderError, SchemeError};
pub use profile::Profile;
pub use recommender::{Outcome, Recommender};
