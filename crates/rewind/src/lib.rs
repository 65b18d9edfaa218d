//! Rewind - terminal front end for the time-travel tic-tac-toe engine.
//!
//! - **Config**: optional TOML file with logging and display settings
//! - **Replay**: apply a list of intents and print the resulting view
//! - **TUI**: interactive board and move list

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplayConfig, LoggingConfig, RewindConfig};
pub use replay::{parse_intents, run_replay};
