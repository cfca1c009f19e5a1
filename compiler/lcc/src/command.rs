//! Command tokenizer and parser.
//!
//! One input line is one command:
//!
//! ```text
//! <register> add|subtract|multiply <register>
//! print <register>
//! quit | QUIT
//! ```
//!
//! Parsing is pure: register tokens are classified into `TokenClass` here,
//! and only interned when the session hands them to the engine.

use lc_ir::{classify_token, is_register_token, Operand, TokenClass, TokenError};

/// A well-formed command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `target <operand> source`
    Define {
        target: TokenClass<'a>,
        operand: Operand,
        source: TokenClass<'a>,
    },
    /// `print register`
    Print(TokenClass<'a>),
    /// `quit`
    Quit,
}

/// Why a line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// More tokens than any command takes.
    #[error("invalid command: expected at most 3 words, found {0}")]
    TooManyWords(usize),
    /// A one- or two-word line that is not `quit` or `print <register>`.
    #[error("invalid command `{0}`")]
    UnknownCommand(String),
    /// The middle word of a three-word line is not an operation.
    #[error("invalid command: unknown operation `{0}`")]
    UnknownOperation(String),
    /// A register token is malformed.
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Split a line into whitespace-separated words.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_ascii_whitespace().collect()
}

/// Parse one line. Blank lines yield `Ok(None)`.
///
/// Register names are checked before the operation keyword, so
/// `a-b frobnicate c` reports the bad name.
pub fn parse_command(line: &str) -> Result<Option<Command<'_>>, CommandError> {
    let words = tokenize(line);
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["quit" | "QUIT"] => Command::Quit,
        [word] => return Err(CommandError::UnknownCommand((*word).to_owned())),
        ["print", register] => Command::Print(register_token(*register)?),
        [word, _] => return Err(CommandError::UnknownCommand((*word).to_owned())),
        [target, operand, source] => {
            for token in [target, source] {
                if !is_register_token(token) {
                    return Err(TokenError::InvalidName((*token).to_owned()).into());
                }
            }
            let operand = Operand::from_keyword(*operand)
                .ok_or_else(|| CommandError::UnknownOperation((*operand).to_owned()))?;
            Command::Define {
                target: register_token(*target)?,
                operand,
                source: register_token(*source)?,
            }
        }
        _ => return Err(CommandError::TooManyWords(words.len())),
    };
    Ok(Some(command))
}

fn register_token<'a>(token: &'a str) -> Result<TokenClass<'a>, CommandError> {
    Ok(classify_token(token)?)
}
