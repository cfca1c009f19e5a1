//! The engine: owned register state plus the query entry points.

use lc_ir::{
    classify_token, DisplayRegister, Operand, Operation, RegisterRef, StringInterner, TokenClass,
    TokenError,
};

use crate::{EvalError, Evaluator, OpId, OperationStore, QueryError, RegisterRegistry};

/// Register machine state: every name, record, and declaration so far.
///
/// Defining appends to the store; querying never mutates anything here.
/// Each query runs on a fresh [`Evaluator`], so memoized values never leak
/// from one query into the next.
#[derive(Default)]
pub struct Engine {
    interner: StringInterner,
    store: OperationStore,
    registry: RegisterRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn store(&self) -> &OperationStore {
        &self.store
    }

    pub fn registry(&self) -> &RegisterRegistry {
        &self.registry
    }

    /// Classify a token, interning it if it names a register.
    pub fn register_ref(&mut self, token: &str) -> Result<RegisterRef, TokenError> {
        RegisterRef::intern(token, &mut self.interner)
    }

    /// Turn an already-classified token into a reference, interning names.
    pub fn resolve(&mut self, class: TokenClass<'_>) -> RegisterRef {
        match class {
            TokenClass::Literal(value) => RegisterRef::Literal(value),
            TokenClass::Name(name) => RegisterRef::Named(self.interner.intern(name)),
        }
    }

    /// Render a register the way the user spelled it.
    pub fn describe(&self, register: RegisterRef) -> DisplayRegister<'_> {
        register.display(&self.interner)
    }

    /// Append a pre-classified record, declaring both of its registers.
    pub fn define(&mut self, op: Operation) -> OpId {
        tracing::debug!(
            target_register = %op.target.display(&self.interner),
            operand = %op.operand,
            source = %op.source.display(&self.interner),
            "define"
        );
        self.store.append(op, &mut self.registry)
    }

    /// Classify both tokens and append `target <operand> source`.
    pub fn define_operation(
        &mut self,
        target: &str,
        operand: Operand,
        source: &str,
    ) -> Result<OpId, TokenError> {
        let target = self.register_ref(target)?;
        let source = self.register_ref(source)?;
        Ok(self.define(Operation::new(target, operand, source)))
    }

    /// A fresh evaluator over the current state.
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.store, &self.registry, &self.interner)
    }

    /// Run one query with an empty memo.
    pub fn evaluate(&self, register: RegisterRef) -> Result<i64, EvalError> {
        self.evaluator().evaluate(register)
    }

    /// Run one query for an already-classified token.
    ///
    /// Never interns: a name the interner has not seen cannot be declared.
    pub fn query(&self, class: TokenClass<'_>) -> Result<i64, EvalError> {
        let register = match class {
            TokenClass::Literal(value) => RegisterRef::Literal(value),
            TokenClass::Name(name) => match self.interner.get(name) {
                Some(name) => RegisterRef::Named(name),
                None => return Err(EvalError::UnknownRegister(name.to_owned())),
            },
        };
        self.evaluate(register)
    }

    /// Run one query for a raw token.
    pub fn query_value(&self, register: &str) -> Result<i64, QueryError> {
        Ok(self.query(classify_token(register)?)?)
    }
}

#[cfg(test)]
mod tests;
