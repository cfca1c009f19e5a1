//! lazycalc command processor.
//!
//! Reads calculator commands line by line, records definitions in an
//! `lc_eval::Engine`, and answers `print` queries. Diagnostics go through
//! `lc_diagnostic`; printed values go through a [`print_handler`].

pub mod command;
pub mod commands;
pub mod logging;
pub mod options;
pub mod print_handler;
pub mod problem;
pub mod session;

pub use command::{parse_command, tokenize, Command, CommandError};
pub use session::{CyclePolicy, Flow, Outcome, Session};
