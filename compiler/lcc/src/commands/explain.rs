//! The `--explain` command: display documentation for error codes.

use std::process::ExitCode;

use lc_diagnostic::{ErrorCode, ErrorDocs};

/// Print the documentation for `code_str` on stdout.
pub fn explain_error(code_str: &str) -> ExitCode {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for &code in ErrorCode::ALL {
            eprintln!("  {code}  {}", ErrorDocs::title(code));
        }
        return ExitCode::FAILURE;
    };
    println!("{}", ErrorDocs::get(code));
    ExitCode::SUCCESS
}
