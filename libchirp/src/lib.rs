//! Chirp - a mock social client for the terminal
//!
//! This library holds the pieces shared by every Chirp front end: the
//! action-event contract between a post cell and the screen that owns it,
//! the hard-coded mock content, configuration, logging and error types.

pub mod config;
pub mod error;
pub mod logging;
pub mod mock;
pub mod notifier;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ChirpError, Result};
pub use notifier::{ActionNotifier, ActionObserver};
pub use types::ActionEvent;
