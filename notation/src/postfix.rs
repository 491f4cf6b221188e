//! Postfix (reverse Polish) expressions, `3 4 + 5 *`, reduced left to
//! right on a single stack. A '-' glued to a digit is a sign, `5 -3 -`.
use lexers::{NotationToken, NotationTokenizer, SignRule};
use crate::catalog::{constant, lookup};
use crate::error::EvalErr;
use crate::observer::{Action, Observer, Silent};

fn tokenizer(expr: &str) -> NotationTokenizer<std::str::Chars<'_>> {
    NotationTokenizer::with_sign_rule(expr.chars(), SignRule::Adjacent)
}

// a lone '-' can't open a postfix expression, neither can '-' without digits
fn bad_sign(position: usize, token: &NotationToken) -> bool {
    match *token {
        NotationToken::Operator('-') => position == 0,
        NotationToken::Malformed(ref lexeme) => lexeme.starts_with('-'),
        _ => false,
    }
}

pub fn evaluate(expr: &str) -> Result<f64, EvalErr> {
    evaluate_traced(expr, &mut Silent)
}

pub fn evaluate_traced<O: Observer>(expr: &str, observer: &mut O) -> Result<f64, EvalErr> {
    let mut operands = Vec::new();

    for (position, token) in tokenizer(expr).enumerate() {
        if bad_sign(position, &token) {
            return Err(EvalErr::InvalidNegativeNumber);
        }
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
            NotationToken::Operator(sym) | NotationToken::Function(sym) => {
                let op = lookup(sym)?;
                if operands.len() < op.arity {
                    return Err(EvalErr::InsufficientOperands);
                }
                let args = operands.split_off(operands.len() - op.arity);
                let result = op.apply(&args)?;
                operands.push(result);
                Action::Apply{symbol: sym, args, result}
            }
            NotationToken::Malformed(_) => return Err(EvalErr::InvalidExpression),
            other => return Err(EvalErr::InvalidCharacter(other.to_string())),
        };
        observer.observe(&action, &operands, &[]);
    }

    match operands.len() {
        0 => Err(EvalErr::EmptyExpression),
        1 => {
            observer.observe(&Action::Done(operands[0]), &operands, &[]);
            Ok(operands[0])
        }
        // extra elements left on the stack
        _ => Err(EvalErr::InvalidExpression),
    }
}

pub fn validate(expr: &str) -> bool {
    check(expr).is_ok()
}

/// Same counting argument as prefix: operands must outnumber what the
/// operators take away by exactly one.
pub fn check(expr: &str) -> Result<(), EvalErr> {
    if expr.trim().is_empty() {
        return Err(EvalErr::EmptyExpression);
    }
    let mut operands = 0;
    let mut consumed = 0;
    for (position, token) in tokenizer(expr).enumerate() {
        if bad_sign(position, &token) {
            return Err(EvalErr::InvalidNegativeNumber);
        }
        match token {
            NotationToken::Number(_) | NotationToken::Constant(_) => operands += 1,
            NotationToken::Operator(sym) | NotationToken::Function(sym) => {
                consumed += lookup(sym)?.arity - 1
            }
            NotationToken::Malformed(_) => return Err(EvalErr::InvalidExpression),
            other => return Err(EvalErr::InvalidCharacter(other.to_string())),
        }
    }
    if operands == 0 || operands != consumed + 1 {
        return Err(EvalErr::InvalidExpression);
    }
    Ok(())
}
