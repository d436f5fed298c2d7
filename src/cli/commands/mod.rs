//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the same
//! [`Invocation`](crate::environment::Invocation) captured once in `main`.

pub mod completions;
pub mod dispatcher;
pub mod find;
pub mod help;
pub mod init;
pub mod list;
pub mod new;
pub mod prompt;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
