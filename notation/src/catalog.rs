use std::f64::consts;
use crate::error::EvalErr;

/// An operator or single letter function and how it evaluates.
#[derive(Debug, PartialEq)]
pub struct OperatorSpec {
    pub symbol: char,
    pub name: &'static str,
    /// Higher binds tighter. Ties bind to the left, `^` included.
    pub precedence: usize,
    pub arity: usize,
}

pub static CATALOG: [OperatorSpec; 12] = [
    OperatorSpec{symbol: '+', name: "add", precedence: 1, arity: 2},
    OperatorSpec{symbol: '-', name: "sub", precedence: 1, arity: 2},
    OperatorSpec{symbol: '&', name: "and", precedence: 1, arity: 2},
    OperatorSpec{symbol: '|', name: "or", precedence: 1, arity: 2},
    OperatorSpec{symbol: '*', name: "mul", precedence: 2, arity: 2},
    OperatorSpec{symbol: '/', name: "div", precedence: 2, arity: 2},
    OperatorSpec{symbol: '%', name: "mod", precedence: 2, arity: 2},
    OperatorSpec{symbol: '^', name: "pow", precedence: 3, arity: 2},
    OperatorSpec{symbol: 's', name: "sin", precedence: 4, arity: 1},
    OperatorSpec{symbol: 'c', name: "cos", precedence: 4, arity: 1},
    OperatorSpec{symbol: 't', name: "tan", precedence: 4, arity: 1},
    OperatorSpec{symbol: 'l', name: "ln", precedence: 4, arity: 1},
];

static CONSTANTS: [(&str, f64); 2] = [("pi", consts::PI), ("e", consts::E)];

pub fn lookup(symbol: char) -> Result<&'static OperatorSpec, EvalErr> {
    CATALOG.iter()
        .find(|op| op.symbol == symbol)
        .ok_or(EvalErr::UnknownOperator(symbol))
}

pub fn constant(name: &str) -> Result<f64, EvalErr> {
    CONSTANTS.iter()
        .find(|&&(cname, _)| cname == name)
        .map(|&(_, value)| value)
        .ok_or_else(|| EvalErr::InvalidCharacter(name.to_string()))
}

impl OperatorSpec {
    pub fn is_function(&self) -> bool {
        self.arity == 1
    }

    /// Operands come in source order, `[a, b]` computes `a op b`.
    /// Results that overflow or aren't numbers are rejected.
    pub fn apply(&self, args: &[f64]) -> Result<f64, EvalErr> {
        if args.len() != self.arity {
            return Err(EvalErr::InsufficientOperands);
        }
        let result = self.compute(args)?;
        if !result.is_finite() {
            return Err(EvalErr::InvalidExpression);
        }
        Ok(result)
    }

    fn compute(&self, args: &[f64]) -> Result<f64, EvalErr> {
        match (self.symbol, args) {
            ('+', &[a, b]) => Ok(a + b),
            ('-', &[a, b]) => Ok(a - b),
            ('*', &[a, b]) => Ok(a * b),
            ('/', &[_, b]) if b == 0.0 => Err(EvalErr::DivisionByZero),
            ('/', &[a, b]) => Ok(a / b),
            ('%', &[_, b]) if b == 0.0 => Err(EvalErr::DivisionByZero),
            ('%', &[a, b]) => Ok(a % b),
            ('^', &[a, b]) => Ok(a.powf(b)),
            // bitwise ops work on the truncated integer parts
            ('&', &[a, b]) => Ok(((a as i64) & (b as i64)) as f64),
            ('|', &[a, b]) => Ok(((a as i64) | (b as i64)) as f64),
            ('s', &[x]) => Ok(x.sin()),
            ('c', &[x]) => Ok(x.cos()),
            ('t', &[x]) => Ok(x.tan()),
            ('l', &[x]) if x <= 0.0 => Err(EvalErr::LogDomainError),
            ('l', &[x]) => Ok(x.ln()),
            (symbol, _) => Err(EvalErr::UnknownOperator(symbol)),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
