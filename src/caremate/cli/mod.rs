//! Terminal client for the caremate library.
//!
//! - `setup`: clap definitions for the command line and for session lines
//! - `commands`: context setup, the session loop and per-command handlers
//! - `render`: templated terminal output
//! - `styles` and `templates`: the named style theme and template sources

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
pub use setup::Cli;
