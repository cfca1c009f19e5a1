use super::*;
use pretty_assertions::assert_eq;

#[test]
fn define_operation_declares_registers() {
    let mut engine = Engine::new();
    assert_eq!(
        engine
            .define_operation("A", Operand::Add, "B")
            .map(OpId::index),
        Ok(0)
    );
    assert_eq!(engine.store().len(), 1);
    assert_eq!(engine.registry().len(), 2);
    assert_eq!(engine.query_value("A"), Ok(0));
    assert_eq!(engine.query_value("B"), Ok(0));
}

#[test]
fn define_operation_rejects_invalid_tokens() {
    let mut engine = Engine::new();
    assert_eq!(
        engine.define_operation("A", Operand::Add, "b-c"),
        Err(TokenError::InvalidName("b-c".to_string()))
    );
    assert_eq!(
        engine.define_operation("A", Operand::Add, "99999999999999999999"),
        Err(TokenError::LiteralOutOfRange(
            "99999999999999999999".to_string()
        ))
    );
    assert!(engine.store().is_empty());
    assert!(engine.registry().is_empty());
}

#[test]
fn query_value_literal() {
    let engine = Engine::new();
    assert_eq!(engine.query_value("42"), Ok(42));
}

#[test]
fn query_value_unknown_name_is_not_interned() {
    let engine = Engine::new();
    assert_eq!(
        engine.query_value("ghost"),
        Err(QueryError::Eval(EvalError::UnknownRegister(
            "ghost".to_string()
        )))
    );
    assert!(engine.interner().is_empty());
}

#[test]
fn query_value_interned_but_undeclared() {
    let mut engine = Engine::new();
    assert!(engine.register_ref("ghost").is_ok());
    assert_eq!(
        engine.query_value("ghost"),
        Err(QueryError::Eval(EvalError::UnknownRegister(
            "ghost".to_string()
        )))
    );
}

#[test]
fn query_value_rejects_invalid_token() {
    let engine = Engine::new();
    assert_eq!(
        engine.query_value("a+b"),
        Err(QueryError::Token(TokenError::InvalidName("a+b".to_string())))
    );
}

#[test]
fn query_reflects_later_definitions() {
    let mut engine = Engine::new();
    assert!(engine.define_operation("A", Operand::Add, "B").is_ok());
    assert!(engine.define_operation("B", Operand::Add, "2").is_ok());
    assert_eq!(engine.query_value("A"), Ok(2));

    assert!(engine.define_operation("B", Operand::Add, "3").is_ok());
    assert_eq!(engine.query_value("A"), Ok(5));

    assert!(engine.define_operation("A", Operand::Multiply, "10").is_ok());
    assert_eq!(engine.query_value("A"), Ok(50));
}

#[test]
fn cycle_is_reported_per_query() {
    let mut engine = Engine::new();
    assert!(engine.define_operation("A", Operand::Add, "A").is_ok());
    assert_eq!(
        engine.query_value("A"),
        Err(QueryError::Eval(EvalError::CycleDetected("A".to_string())))
    );
    // The engine stays usable after a cycle.
    assert!(engine.define_operation("B", Operand::Add, "7").is_ok());
    assert_eq!(engine.query_value("B"), Ok(7));
}

#[test]
fn describe_uses_source_spelling() {
    let mut engine = Engine::new();
    let Ok(total) = engine.register_ref("total") else {
        panic!("`total` is a valid token");
    };
    assert_eq!(engine.describe(total).to_string(), "total");
    assert_eq!(engine.describe(RegisterRef::Literal(3)).to_string(), "3");
}

#[test]
fn eval_error_messages() {
    assert_eq!(
        EvalError::UnknownRegister("x".to_string()).to_string(),
        "register `x` does not exist"
    );
    let cycle = EvalError::CycleDetected("A".to_string());
    assert_eq!(cycle.to_string(), "dependency cycle: `A` depends on itself");
    assert_eq!(cycle.register(), "A");
}

#[test]
fn resolve_and_query_classified_tokens() {
    let mut engine = Engine::new();
    let target = engine.resolve(TokenClass::Name("A"));
    let source = engine.resolve(TokenClass::Literal(9));
    assert_eq!(source, RegisterRef::Literal(9));
    engine.define(Operation::new(target, Operand::Add, source));

    assert_eq!(engine.query(TokenClass::Name("A")), Ok(9));
    assert_eq!(engine.query(TokenClass::Literal(-3)), Ok(-3));
    assert_eq!(
        engine.query(TokenClass::Name("B")),
        Err(EvalError::UnknownRegister("B".to_string()))
    );
}
