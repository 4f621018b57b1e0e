pub mod config;
pub mod error;
pub mod inputs;
pub mod kernel;
pub mod outputs;

// Re-export specific items for convenient access
pub use config::DialogueConfig;
pub use error::{ConfigError, DispatchError};
pub use kernel::dispatcher::{Dispatcher, TurnOutcome};
