//! Prefix (Polish) expressions, `* + 3 4 5`. Tokens are separated by
//! whitespace and reduced right to left on a single stack.
use lexers::{NotationToken, WordTokenizer};
use crate::catalog::{constant, lookup};
use crate::error::EvalErr;
use crate::observer::{Action, Observer, Silent};

pub fn evaluate(expr: &str) -> Result<f64, EvalErr> {
    evaluate_traced(expr, &mut Silent)
}

pub fn evaluate_traced<O: Observer>(expr: &str, observer: &mut O) -> Result<f64, EvalErr> {
    let tokens = WordTokenizer::new(expr.chars()).collect::<Vec<_>>();
    let mut operands = Vec::new();

    for token in tokens.into_iter().rev() {
        let action = match token {
            NotationToken::Number(n) => {
                operands.push(n);
                Action::PushNumber(n)
            }
            NotationToken::Constant(name) => {
                let value = constant(&name)?;
                operands.push(value);
                Action::PushNumber(value)
            }
            NotationToken::Operator(sym) => {
                let op = lookup(sym)?;
                if operands.len() < op.arity {
                    return Err(EvalErr::InsufficientOperands);
                }
                // scanning backwards the top of the stack is the leftmost operand
                let mut args = operands.split_off(operands.len() - op.arity);
                args.reverse();
                let result = op.apply(&args)?;
                operands.push(result);
                Action::Apply{symbol: sym, args, result}
            }
            _ => return Err(EvalErr::InvalidExpression),
        };
        observer.observe(&action, &operands, &[]);
    }

    match operands.len() {
        0 => Err(EvalErr::EmptyExpression),
        1 => {
            observer.observe(&Action::Done(operands[0]), &operands, &[]);
            Ok(operands[0])
        }
        _ => Err(EvalErr::ExtraOperands),
    }
}

pub fn validate(expr: &str) -> bool {
    check(expr).is_ok()
}

/// Every operator consumes arity operands and leaves one behind, so a well
/// formed expression has one more operand than the operators take away.
pub fn check(expr: &str) -> Result<(), EvalErr> {
    if expr.trim().is_empty() {
        return Err(EvalErr::EmptyExpression);
    }
    let mut operands = 0;
    let mut consumed = 0;
    for token in WordTokenizer::new(expr.chars()) {
        match token {
            NotationToken::Number(_) | NotationToken::Constant(_) => operands += 1,
            NotationToken::Operator(sym) => consumed += lookup(sym)?.arity - 1,
            NotationToken::Malformed(_) => return Err(EvalErr::InvalidExpression),
            other => return Err(EvalErr::InvalidCharacter(other.to_string())),
        }
    }
    if operands == 0 || operands != consumed + 1 {
        return Err(EvalErr::InvalidExpression);
    }
    Ok(())
}
