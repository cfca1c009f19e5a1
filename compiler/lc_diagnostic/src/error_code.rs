//! Error codes for all lazycalc diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating where the problem was found. Used for `--explain` lookups.

use std::fmt;

/// Error codes for all lazycalc diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Command errors (rejected before reaching the engine)
/// - E1xxx: Evaluation errors
/// - E9xxx: Input/internal errors
/// - W0xxx: Command warnings (accepted, but suspicious)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Command Errors (E0xxx)
    /// Invalid command shape or keyword
    E0001,
    /// Invalid register name
    E0002,
    /// Integer literal out of range
    E0003,

    // Evaluation Errors (E1xxx)
    /// Unknown register
    E1001,
    /// Dependency cycle
    E1002,

    // Input Errors (E9xxx)
    /// Input could not be read
    E9001,

    // Command Warnings (W0xxx)
    /// Operation targets a literal and can never be evaluated
    W0001,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E9001,
        ErrorCode::W0001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::W0001 => "W0001",
        }
    }

}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
