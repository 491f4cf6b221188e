use crate::convert::{convert, infix_to_postfix, infix_to_prefix, postfix_to_infix, prefix_to_infix};
use crate::error::EvalErr;
use crate::notations::Notation;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

const NOTATIONS: [Notation; 3] = [Notation::Infix, Notation::Prefix, Notation::Postfix];

#[test]
fn test_infix_to_postfix() {
    assert_eq!(infix_to_postfix("(3+4)*5"), Ok("3 4 + 5 *".to_string()));
    assert_eq!(infix_to_postfix("2^3^2"), Ok("2 3 ^ 2 ^".to_string()));
    assert_eq!(infix_to_postfix("10 - 4 - 3"), Ok("10 4 - 3 -".to_string()));
    assert_eq!(infix_to_postfix("-3+4"), Ok("-3 4 +".to_string()));
    assert_eq!(infix_to_postfix("2*pi"), Ok("2 pi *".to_string()));
    assert_eq!(infix_to_postfix("3 + 4 * {2 - 1}"), Ok("3 4 2 1 - * +".to_string()));
}

#[test]
fn test_infix_to_prefix() {
    assert_eq!(infix_to_prefix("(3+4)*5"), Ok("* + 3 4 5".to_string()));
    assert_eq!(infix_to_prefix("2^3^2"), Ok("^ ^ 2 3 2".to_string()));
    assert_eq!(infix_to_prefix("1-2-3"), Ok("- - 1 2 3".to_string()));
    assert_eq!(infix_to_prefix("s(0) + [1 - 2]"), Ok("+ s 0 - 1 2".to_string()));
    assert_eq!(infix_to_prefix("2.5 / -.5"), Ok("/ 2.5 -0.5".to_string()));
}

#[test]
fn test_to_infix() {
    assert_eq!(postfix_to_infix("3 4 + 5 *"), Ok("((3 + 4) * 5)".to_string()));
    assert_eq!(prefix_to_infix("* + 3 4 5"), Ok("((3 + 4) * 5)".to_string()));
    assert_eq!(postfix_to_infix("5 -3 -"), Ok("(5 - -3)".to_string()));
    assert_eq!(postfix_to_infix("0 s"), Ok("s(0)".to_string()));
    assert_eq!(postfix_to_infix("1 2 + s"), Ok("s((1 + 2))".to_string()));
    assert_eq!(postfix_to_infix("0 c s"), Ok("s(c(0))".to_string()));
    assert_eq!(prefix_to_infix("l e"), Ok("l(e)".to_string()));
}

#[test]
fn test_other_pairs() {
    assert_eq!(convert("2.5 0.5 /", Notation::Postfix, Notation::Prefix), Ok("/ 2.5 0.5".to_string()));
    assert_eq!(convert("- * 2 3 1", Notation::Prefix, Notation::Postfix), Ok("2 3 * 1 -".to_string()));
    assert_eq!(convert("3+4", Notation::Infix, Notation::Infix), Ok("(3 + 4)".to_string()));
    assert_eq!(convert("3 4 +", Notation::Postfix, Notation::Postfix), Ok("3 4 +".to_string()));
}

#[test]
fn test_nothing_evaluated() {
    assert_eq!(infix_to_postfix("1/0"), Ok("1 0 /".to_string()));
    assert_eq!(infix_to_prefix("l(0)"), Ok("l 0".to_string()));
}

#[test]
fn test_out_of_range_literals() {
    assert_eq!(infix_to_postfix("1e999 + 1"), Err(EvalErr::InvalidExpression));
    assert_eq!(prefix_to_infix("+ 1e999 1"), Err(EvalErr::InvalidExpression));
    // overflow only shows up when evaluating
    assert_eq!(infix_to_postfix("2^2000"), Ok("2 2000 ^".to_string()));
    assert_eq!(Notation::Postfix.evaluate("2 2000 ^"), Err(EvalErr::InvalidExpression));
}

#[test]
fn test_rejected_input() {
    assert_eq!(infix_to_postfix("(3+4]"), Err(EvalErr::MismatchedParentheses));
    assert_eq!(infix_to_postfix(""), Err(EvalErr::EmptyExpression));
    assert_eq!(infix_to_prefix("3 4"), Err(EvalErr::MissingOperator));
    assert_eq!(infix_to_prefix("3 + * 4"), Err(EvalErr::ConsecutiveOperators));
    assert_eq!(infix_to_prefix("-(3)"), Err(EvalErr::ConsecutiveOperators));
    assert_eq!(postfix_to_infix("3 4"), Err(EvalErr::InvalidExpression));
    assert_eq!(postfix_to_infix("- 3 4"), Err(EvalErr::InvalidNegativeNumber));
    assert_eq!(prefix_to_infix("+ 3"), Err(EvalErr::InvalidExpression));
    assert_eq!(prefix_to_infix("+ 3 x"), Err(EvalErr::InvalidCharacter("x".to_string())));
}

#[test]
fn test_value_preserved() {
    let exprs = [
        "(3+4)*5",
        "2^3^2",
        "{1 + 2} * [3 - -4] / 7",
        "s(pi/2) + c(0) * l(e)",
        "10 % 4 - 6 & 3 | 8",
        "-2.5 * (1 - .5)",
    ];
    for expr in exprs.iter() {
        let expected = Notation::Infix.evaluate(expr).unwrap();
        for from in NOTATIONS.iter() {
            let source = convert(expr, Notation::Infix, *from).unwrap();
            for to in NOTATIONS.iter() {
                let target = convert(&source, *from, *to).unwrap();
                fuzzy_eq!(to.evaluate(&target).unwrap(), expected);
            }
        }
    }
}
