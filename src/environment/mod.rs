//! Invocation environment.
//!
//! Captures the current directory, home directory, and the environment
//! variables vup reads (`VIRTUAL_ENV`, `VUP_PYTHON`) in one [`Invocation`].

pub mod invocation;

pub use invocation::{vars, Invocation};
