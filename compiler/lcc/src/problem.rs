//! Problem to diagnostic conversion.
//!
//! `CommandError` lives in this crate and `EvalError` in `lc_eval`; both are
//! rendered here so `lc_diagnostic` stays free of engine types.
//!
//! # Error Code Ranges
//!
//! - E0xxx: the line could not be parsed into a command
//! - E1xxx: a well-formed `print` could not be evaluated
//! - E9xxx: the input itself could not be read
//! - W0xxx: the command ran, but likely not as intended

use std::io;

use lc_diagnostic::{Diagnostic, ErrorCode};
use lc_eval::EvalError;
use lc_ir::TokenError;

use crate::command::CommandError;

/// Render a rejected line.
#[cold]
pub fn command_error_to_diagnostic(err: &CommandError) -> Diagnostic {
    match err {
        CommandError::TooManyWords(_) | CommandError::UnknownCommand(_) => {
            Diagnostic::error(ErrorCode::E0001)
                .with_message(err.to_string())
                .with_suggestion(
                    "commands are `<register> add|subtract|multiply <value>`, \
                     `print <register>`, or `quit`",
                )
        }
        CommandError::UnknownOperation(_) => Diagnostic::error(ErrorCode::E0001)
            .with_message(err.to_string())
            .with_suggestion("the supported operations are `add`, `subtract`, and `multiply`"),
        CommandError::Token(TokenError::InvalidName(_)) => Diagnostic::error(ErrorCode::E0002)
            .with_message(err.to_string())
            .with_note("register names may only contain ASCII letters and digits"),
        CommandError::Token(TokenError::LiteralOutOfRange(_)) => {
            Diagnostic::error(ErrorCode::E0003)
                .with_message(err.to_string())
                .with_note(format!("values must lie within {}..={}", i64::MIN, i64::MAX))
        }
    }
}

/// Render a failed query.
#[cold]
pub fn eval_error_to_diagnostic(err: &EvalError) -> Diagnostic {
    match err {
        EvalError::UnknownRegister(_) => Diagnostic::error(ErrorCode::E1001)
            .with_message(err.to_string())
            .with_suggestion("a register is declared by appearing in an operation"),
        EvalError::CycleDetected(name) => Diagnostic::error(ErrorCode::E1002)
            .with_message(err.to_string())
            .with_note(format!(
                "`{name}` was reached again while its own value was being computed"
            ))
            .with_suggestion("remove one of the operations on the cycle"),
    }
}

/// A define whose target is an integer literal. It is recorded but never read.
#[cold]
pub fn dead_definition_warning(target: &str) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W0001)
        .with_message(format!("operation targets the literal `{target}` and has no effect"))
        .with_note("a literal always evaluates to its own value")
}

/// Render an input read failure. `path` is `None` for stdin.
#[cold]
pub fn read_error(path: Option<&str>, err: &io::Error) -> Diagnostic {
    let message = match path {
        None => format!("error reading standard input: {err}"),
        Some(path) => match err.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            _ => format!("error reading '{path}': {err}"),
        },
    };
    Diagnostic::error(ErrorCode::E9001).with_message(message)
}
