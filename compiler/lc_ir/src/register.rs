//! Register tokens and references.
//!
//! A register token is classified exactly once: either it is a numeral and
//! becomes `RegisterRef::Literal`, or it is an identifier and becomes an
//! interned `RegisterRef::Named`. A numeral is always a literal, even when
//! some operation record names it as a target.

use std::fmt;

use crate::{Name, StringInterner};

/// Error produced when a token cannot name a register.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Token is empty or contains a non-alphanumeric character.
    #[error("invalid register name `{0}`")]
    InvalidName(String),
    /// Token is a numeral that does not fit in a 64-bit signed integer.
    #[error("integer literal `{0}` is out of range")]
    LiteralOutOfRange(String),
}

/// Result of classifying a token, before any interning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenClass<'a> {
    /// A base-10 numeral and its value.
    Literal(i64),
    /// An identifier naming a register.
    Name(&'a str),
}

/// Whether `token` is a syntactically valid register token.
///
/// Register tokens are non-empty and ASCII alphanumeric.
#[inline]
pub fn is_register_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Classify a register token as a literal or a name.
pub fn classify_token(token: &str) -> Result<TokenClass<'_>, TokenError> {
    if !is_register_token(token) {
        return Err(TokenError::InvalidName(token.to_owned()));
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token
            .parse::<i64>()
            .map(TokenClass::Literal)
            .map_err(|_| TokenError::LiteralOutOfRange(token.to_owned()));
    }
    Ok(TokenClass::Name(token))
}

/// Reference to a register, decided once per token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegisterRef {
    /// Integer literal; its value never changes.
    Literal(i64),
    /// Named register; its value is the fold of the records targeting it.
    Named(Name),
}

impl RegisterRef {
    /// Classify `token` and intern it if it names a register.
    pub fn intern(token: &str, interner: &mut StringInterner) -> Result<Self, TokenError> {
        Ok(match classify_token(token)? {
            TokenClass::Literal(value) => RegisterRef::Literal(value),
            TokenClass::Name(name) => RegisterRef::Named(interner.intern(name)),
        })
    }

    /// The interned name, if this is a named register.
    #[inline]
    pub fn as_name(self) -> Option<Name> {
        match self {
            RegisterRef::Named(name) => Some(name),
            RegisterRef::Literal(_) => None,
        }
    }

    /// Adapter that renders the reference the way the user wrote it.
    pub fn display(self, interner: &StringInterner) -> DisplayRegister<'_> {
        DisplayRegister {
            register: self,
            interner,
        }
    }
}

/// `Display` adapter returned by [`RegisterRef::display`].
pub struct DisplayRegister<'a> {
    register: RegisterRef,
    interner: &'a StringInterner,
}

impl fmt::Display for DisplayRegister<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.register {
            RegisterRef::Literal(value) => write!(f, "{value}"),
            RegisterRef::Named(name) => f.write_str(self.interner.lookup(name)),
        }
    }
}
