#![deny(clippy::arithmetic_side_effects)]
//! Lazycalc Eval - lazy evaluation engine for registers.
//!
//! Registers are defined by appending operation records and evaluated only
//! when a value is asked for.
//!
//! # Architecture
//!
//! - `OperationStore`: append-only log of operation records, indexed by target
//! - `RegisterRegistry`: the set of declared register names
//! - `Evaluator`: one query's memo and in-progress set; recursive fold with
//!   cycle detection
//! - `Engine`: owns the interner, store, and registry; runs each query on a
//!   fresh `Evaluator`
//!
//! # Numeric Semantics
//!
//! Values are `i64`. Overflow wraps silently (two's complement). This is an
//! accepted limitation of the register machine, not something callers should
//! rely on.

mod engine;
pub mod errors;
mod evaluator;
mod operators;
mod registry;
mod stack;
mod store;

pub use engine::Engine;
pub use errors::{EvalError, QueryError};
pub use evaluator::Evaluator;
pub use operators::apply_operand;
pub use registry::RegisterRegistry;
pub use stack::ensure_sufficient_stack;
pub use store::{OpId, OperationStore};
