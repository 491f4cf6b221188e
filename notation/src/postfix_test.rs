use crate::error::EvalErr;
use crate::notations::Notation;
use crate::observer::Action;
use crate::postfix::{check, evaluate, evaluate_traced, validate};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn test_eval1() {
    fuzzy_eq!(evaluate("3 4 + 5 *").unwrap(), 35.0);
    fuzzy_eq!(evaluate("5 3 4 + -").unwrap(), -2.0);
    fuzzy_eq!(evaluate("3 4 -").unwrap(), -1.0);
    fuzzy_eq!(evaluate("2 3 2 ^ ^").unwrap(), 512.0);
    fuzzy_eq!(evaluate("2 3 ^ 2 ^").unwrap(), 64.0);
    fuzzy_eq!(evaluate("6 3 & 8 |").unwrap(), 10.0);
}

#[test]
fn test_signs() {
    fuzzy_eq!(evaluate("5 -3 -").unwrap(), 8.0);
    fuzzy_eq!(evaluate("-3 4 +").unwrap(), 1.0);
    fuzzy_eq!(evaluate("-.5 2 *").unwrap(), -1.0);
    assert_eq!(check("- 3 4"), Err(EvalErr::InvalidNegativeNumber));
    assert_eq!(evaluate("- 3 4"), Err(EvalErr::InvalidNegativeNumber));
    assert_eq!(check("-. 3 +"), Err(EvalErr::InvalidNegativeNumber));
    assert_eq!(check("1 2 -.. +"), Err(EvalErr::InvalidNegativeNumber));
}

#[test]
fn test_functions_and_constants() {
    fuzzy_eq!(evaluate("0 s").unwrap(), 0.0);
    fuzzy_eq!(evaluate("0 s 0 c +").unwrap(), 1.0);
    fuzzy_eq!(evaluate("pi 2 / s").unwrap(), 1.0);
    fuzzy_eq!(evaluate("e l").unwrap(), 1.0);
    fuzzy_eq!(evaluate("5 e *").unwrap(), 5.0 * std::f64::consts::E);
}

#[test]
fn test_math_errors() {
    assert_eq!(evaluate("1 0 /"), Err(EvalErr::DivisionByZero));
    assert_eq!(evaluate("5 0 %"), Err(EvalErr::DivisionByZero));
    assert_eq!(evaluate("0 l"), Err(EvalErr::LogDomainError));
}

#[test]
fn test_finite_only() {
    assert_eq!(check("1e999 1 +"), Err(EvalErr::InvalidExpression));
    assert_eq!(check("-1e999 1 +"), Err(EvalErr::InvalidNegativeNumber));
    assert_eq!(evaluate("2 2000 ^"), Err(EvalErr::InvalidExpression));
    assert_eq!(Notation::Postfix.evaluate("0 -1 ^"), Err(EvalErr::InvalidExpression));
}

#[test]
fn test_operand_count() {
    assert_eq!(check("3 4"), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate("3 4"), Err(EvalErr::InvalidExpression));
    assert_eq!(check("3 +"), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate("3 +"), Err(EvalErr::InsufficientOperands));
    assert_eq!(check("3 4 -5 +"), Err(EvalErr::InvalidExpression));
    assert_eq!(Notation::Postfix.evaluate("3 4"), Err(EvalErr::InvalidExpression));
}

#[test]
fn test_check() {
    assert_eq!(check(""), Err(EvalErr::EmptyExpression));
    assert_eq!(evaluate(""), Err(EvalErr::EmptyExpression));
    assert_eq!(check("3 4 #"), Err(EvalErr::InvalidCharacter("#".to_string())));
    assert_eq!(check("3 4 + )"), Err(EvalErr::InvalidCharacter(")".to_string())));
    assert_eq!(check("1.2.3 4 +"), Err(EvalErr::InvalidExpression));
    assert!(validate("3 4+"));
    assert!(validate("1 2 + 3 4 - *"));
}

#[test]
fn test_trace() {
    let mut actions = Vec::new();
    let result = evaluate_traced("3 4 -", &mut |a: &Action, operands: &[f64], pending: &[char]| {
        assert!(pending.is_empty());
        actions.push((a.clone(), operands.to_vec()))
    });
    assert_eq!(result, Ok(-1.0));
    assert_eq!(actions, vec![
        (Action::PushNumber(3.0), vec![3.0]),
        (Action::PushNumber(4.0), vec![3.0, 4.0]),
        (Action::Apply{symbol: '-', args: vec![3.0, 4.0], result: -1.0}, vec![-1.0]),
        (Action::Done(-1.0), vec![-1.0]),
    ]);
}
