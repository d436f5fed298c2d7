//! Command-line interface for vup.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, FindArgs, LsArgs, NewArgs, PromptArgs, ValidateArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
