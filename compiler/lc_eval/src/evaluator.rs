//! Per-query register evaluation.
//!
//! An `Evaluator` owns the state of exactly one query:
//! - the memo of registers already computed in this query
//! - the in-progress set of registers on the active recursion path
//!
//! Both start empty and are dropped with the evaluator, so a later query
//! always sees records appended since the previous one.
//!
//! # Algorithm
//!
//! ```text
//! evaluate(r):
//!     Literal(v)          -> v
//!     memoized            -> memo[r]
//!     not declared        -> UnknownRegister(r)
//!     in progress         -> CycleDetected(r)
//!     otherwise           -> fold records targeting r from 0, memoize
//! ```

use lc_ir::{Name, RegisterRef, StringInterner};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{apply_operand, ensure_sufficient_stack, EvalError, OperationStore, RegisterRegistry};

/// Evaluation state for one query.
pub struct Evaluator<'a> {
    store: &'a OperationStore,
    registry: &'a RegisterRegistry,
    interner: &'a StringInterner,
    memo: FxHashMap<Name, i64>,
    in_progress: FxHashSet<Name>,
    folds: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        store: &'a OperationStore,
        registry: &'a RegisterRegistry,
        interner: &'a StringInterner,
    ) -> Self {
        Evaluator {
            store,
            registry,
            interner,
            memo: FxHashMap::default(),
            in_progress: FxHashSet::default(),
            folds: 0,
        }
    }

    /// Value of `register`, computing and memoizing whatever it depends on.
    pub fn evaluate(&mut self, register: RegisterRef) -> Result<i64, EvalError> {
        match register {
            RegisterRef::Literal(value) => Ok(value),
            RegisterRef::Named(name) => self.evaluate_named(name),
        }
    }

    /// Number of record folds performed so far.
    ///
    /// Each named register is folded at most once per evaluator.
    pub fn folds(&self) -> usize {
        self.folds
    }

    /// Whether `name` already has a value in this query's memo.
    pub fn is_memoized(&self, name: Name) -> bool {
        self.memo.contains_key(&name)
    }

    /// Number of registers currently on the active evaluation path.
    ///
    /// Zero whenever no `evaluate` call is running.
    pub fn depth(&self) -> usize {
        self.in_progress.len()
    }

    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(register = %self.interner.lookup(name))
    )]
    fn evaluate_named(&mut self, name: Name) -> Result<i64, EvalError> {
        if let Some(&value) = self.memo.get(&name) {
            return Ok(value);
        }
        if !self.registry.is_known(name) {
            return Err(EvalError::UnknownRegister(self.name_of(name)));
        }
        if !self.in_progress.insert(name) {
            tracing::debug!(register = %self.interner.lookup(name), "dependency cycle");
            return Err(EvalError::CycleDetected(self.name_of(name)));
        }

        let result = ensure_sufficient_stack(|| self.fold(name));
        self.in_progress.remove(&name);

        let value = result?;
        self.memo.insert(name, value);
        Ok(value)
    }

    /// Fold every record targeting `name` in definition order, from 0.
    fn fold(&mut self, name: Name) -> Result<i64, EvalError> {
        self.folds = self.folds.saturating_add(1);
        let store = self.store;
        let mut acc = 0_i64;
        for op in store.all_targeting(name) {
            let value = self.evaluate(op.source)?;
            acc = apply_operand(op.operand, acc, value);
        }
        Ok(acc)
    }

    fn name_of(&self, name: Name) -> String {
        self.interner.lookup(name).to_owned()
    }
}
