//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates the watch session with its dependencies

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, StyleArg};
pub use factory::{create_watch_session, initial_sources, ConcreteWatchSession};
