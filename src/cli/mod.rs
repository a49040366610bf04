//! Interactive and scripted shell over an [`IntakeSession`](crate::core::IntakeSession).

pub mod commands;
pub mod core;
pub mod forms;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, SCRIPT_ENV};
