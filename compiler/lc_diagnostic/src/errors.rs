//! Long-form error documentation for `lazycalc --explain`.
//!
//! One markdown file per code lives in `errors/`, embedded at compile time.
//! The lookup is an exhaustive match, so a new `ErrorCode` variant does not
//! build until its page exists.

use crate::ErrorCode;

/// Embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// The markdown page for `code`. Starts with `# <code>: <title>`.
    pub fn get(code: ErrorCode) -> &'static str {
        match code {
            ErrorCode::E0001 => include_str!("errors/E0001.md"),
            ErrorCode::E0002 => include_str!("errors/E0002.md"),
            ErrorCode::E0003 => include_str!("errors/E0003.md"),
            ErrorCode::E1001 => include_str!("errors/E1001.md"),
            ErrorCode::E1002 => include_str!("errors/E1002.md"),
            ErrorCode::E9001 => include_str!("errors/E9001.md"),
            ErrorCode::W0001 => include_str!("errors/W0001.md"),
        }
    }

    /// Title line of the page, without the leading `# CODE: `.
    pub fn title(code: ErrorCode) -> &'static str {
        let doc = Self::get(code);
        let first = doc.lines().next().unwrap_or_default();
        first
            .split_once(": ")
            .map_or(first, |(_, title)| title.trim_end())
    }
}
