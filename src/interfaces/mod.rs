//! Presentation adapters

pub mod shell;

pub use shell::{run_shell, Flow, Shell, ShellCommand};
