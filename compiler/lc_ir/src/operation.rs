//! Binary operation records.

use std::fmt;

use crate::RegisterRef;

/// Arithmetic operand of an operation record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Add,
    Subtract,
    Multiply,
}

impl Operand {
    /// All operands, in keyword order.
    pub const ALL: [Operand; 3] = [Operand::Add, Operand::Subtract, Operand::Multiply];

    /// Keyword used in the command language.
    pub fn as_str(self) -> &'static str {
        match self {
            Operand::Add => "add",
            Operand::Subtract => "subtract",
            Operand::Multiply => "multiply",
        }
    }

    /// Parse a command-language keyword. Keywords are lowercase only.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == keyword)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contribution to a target register: `target = target <operand> source`.
///
/// Immutable once created. Records sharing a target fold in definition order,
/// starting from an accumulator of 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operation {
    pub target: RegisterRef,
    pub operand: Operand,
    pub source: RegisterRef,
}

impl Operation {
    pub fn new(target: RegisterRef, operand: Operand, source: RegisterRef) -> Self {
        Operation {
            target,
            operand,
            source,
        }
    }
}
