//! Errors produced while answering a query.

use lc_ir::TokenError;

/// Failure while evaluating a register.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The register is not a literal and no operation has mentioned it.
    #[error("register `{0}` does not exist")]
    UnknownRegister(String),
    /// The register was requested again while its own value was being computed.
    #[error("dependency cycle: `{0}` depends on itself")]
    CycleDetected(String),
}

impl EvalError {
    /// Name of the register the error is about.
    pub fn register(&self) -> &str {
        match self {
            EvalError::UnknownRegister(name) | EvalError::CycleDetected(name) => name,
        }
    }
}

/// Failure of a query given as raw text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The token cannot name a register at all.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// The register could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
