//! Diagnostic system for command-processor error reporting.
//!
//! Every problem reported to the user carries:
//! - An error code for searchability (`lazycalc --explain E1002`)
//! - A clear message (what went wrong)
//! - The input line it came from, when there is one
//! - Optional notes (why) and help lines (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
