//! Lazycalc IR - Register Representation Types
//!
//! This crate contains the data types shared by the engine and the command
//! processor:
//! - `Name` for interned register names
//! - `StringInterner` mapping register names to `Name` handles
//! - `RegisterRef`, the tagged literal-or-named register reference
//! - `Operand` and `Operation`, the binary operation record
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: register names → Name(u32), compared in O(1)
//! - **Classify Once**: a token is decided to be a literal or a name when the
//!   command is parsed; nothing downstream looks at the raw text again

mod interner;
mod name;
mod operation;
mod register;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use operation::{Operand, Operation};
pub use register::{
    classify_token, is_register_token, DisplayRegister, RegisterRef, TokenClass, TokenError,
};
