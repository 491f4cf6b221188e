//! Infix expressions, `3 + 4 * [2 - s(pi)]`.
//!
//! Evaluation is a shunting-yard that reduces as it goes: operators wait on
//! a stack until something of lower or equal precedence, or the end of
//! their bracket, forces them to apply to the operand stack.
use lexers::{Bracket, NotationToken, NotationTokenizer};
use crate::catalog::{constant, lookup, OperatorSpec};
use crate::error::EvalErr;
use crate::observer::{Action, Observer, Silent};

#[derive(Clone, Copy, Debug)]
enum Pending {
    Operator(&'static OperatorSpec),
    Function(&'static OperatorSpec),
    Open(Bracket),
}

impl Pending {
    fn symbol(&self) -> char {
        match *self {
            Pending::Operator(op) | Pending::Function(op) => op.symbol,
            Pending::Open(kind) => kind.open_char(),
        }
    }
}

struct Machine<'o, O: Observer> {
    operands: Vec<f64>,
    operators: Vec<Pending>,
    observer: &'o mut O,
}

impl<'o, O: Observer> Machine<'o, O> {
    fn new(observer: &'o mut O) -> Self {
        Machine{operands: Vec::new(), operators: Vec::new(), observer}
    }

    fn report(&mut self, action: Action) {
        let pending = self.operators.iter().map(Pending::symbol).collect::<Vec<_>>();
        self.observer.observe(&action, &self.operands, &pending);
    }

    fn push_operand(&mut self, value: f64) {
        self.operands.push(value);
        self.report(Action::PushNumber(value));
    }

    fn push_pending(&mut self, pending: Pending) {
        self.operators.push(pending);
        self.report(match pending {
            Pending::Open(kind) => Action::PushBracket(kind),
            other => Action::PushOperator(other.symbol()),
        });
    }

    // pop as many operands as op takes, first pop is the rightmost one
    fn reduce(&mut self, op: &'static OperatorSpec) -> Result<(), EvalErr> {
        if self.operands.len() < op.arity {
            return Err(EvalErr::InsufficientOperands);
        }
        let args = self.operands.split_off(self.operands.len() - op.arity);
        let result = op.apply(&args)?;
        self.operands.push(result);
        self.report(Action::Apply{symbol: op.symbol, args, result});
        Ok(())
    }

    fn operator(&mut self, op: &'static OperatorSpec) -> Result<(), EvalErr> {
        // >= makes ties bind to the left
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence < op.precedence {
                break;
            }
            self.operators.pop();
            self.reduce(top)?;
        }
        self.push_pending(Pending::Operator(op));
        Ok(())
    }

    fn close(&mut self, kind: Bracket) -> Result<(), EvalErr> {
        loop {
            match self.operators.pop() {
                Some(Pending::Open(open)) if open == kind => break,
                Some(Pending::Operator(op)) => self.reduce(op)?,
                _ => return Err(EvalErr::MismatchedParentheses),
            }
        }
        self.report(Action::PopBracket(kind));
        // end of grouping: check if this was a function call
        if let Some(&Pending::Function(func)) = self.operators.last() {
            self.operators.pop();
            self.reduce(func)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<f64, EvalErr> {
        while let Some(top) = self.operators.pop() {
            match top {
                Pending::Operator(op) => self.reduce(op)?,
                Pending::Open(_) | Pending::Function(_) => {
                    return Err(EvalErr::MismatchedParentheses)
                }
            }
        }
        match self.operands.len() {
            0 => Err(EvalErr::EmptyExpression),
            1 => {
                let result = self.operands[0];
                self.report(Action::Done(result));
                Ok(result)
            }
            _ => Err(EvalErr::MissingOperator),
        }
    }
}

pub fn evaluate(expr: &str) -> Result<f64, EvalErr> {
    evaluate_traced(expr, &mut Silent)
}

pub fn evaluate_traced<O: Observer>(expr: &str, observer: &mut O) -> Result<f64, EvalErr> {
    let mut machine = Machine::new(observer);
    for token in NotationTokenizer::new(expr.chars()) {
        match token {
            NotationToken::Number(n) => machine.push_operand(n),
            NotationToken::Constant(name) => machine.push_operand(constant(&name)?),
            NotationToken::Function(sym) => machine.push_pending(Pending::Function(lookup(sym)?)),
            NotationToken::Operator(sym) => {
                let op = lookup(sym)?;
                // functions need their argument in brackets
                if op.is_function() {
                    return Err(EvalErr::InvalidExpression);
                }
                machine.operator(op)?;
            }
            NotationToken::Open(kind) => machine.push_pending(Pending::Open(kind)),
            NotationToken::Close(kind) => machine.close(kind)?,
            NotationToken::Malformed(_) => return Err(EvalErr::InvalidExpression),
            NotationToken::Unknown(lexeme) => return Err(EvalErr::InvalidCharacter(lexeme)),
        }
    }
    machine.finish()
}

pub fn validate(expr: &str) -> bool {
    check(expr).is_ok()
}

/// Structural check run before evaluation. Two operands side by side
/// (`3 4`) pass here, evaluation reports them as a missing operator.
pub fn check(expr: &str) -> Result<(), EvalErr> {
    let mut brackets = Vec::new();
    let mut after_operator = true; // an operand is expected next
    let mut after_operand = false;
    let mut seen_operand = false;

    for token in NotationTokenizer::new(expr.chars()) {
        match token {
            NotationToken::Number(_) | NotationToken::Constant(_) => {
                after_operator = false;
                after_operand = true;
                seen_operand = true;
            }
            NotationToken::Function(_) | NotationToken::Open(_) if after_operand => {
                return Err(EvalErr::MissingOperator);
            }
            NotationToken::Function(_) => {
                after_operator = true;
            }
            NotationToken::Open(kind) => {
                brackets.push(kind);
                after_operator = true;
            }
            NotationToken::Close(_) if after_operator => {
                return Err(EvalErr::InvalidExpression);
            }
            NotationToken::Close(kind) => {
                if brackets.pop() != Some(kind) {
                    return Err(EvalErr::MismatchedParentheses);
                }
                after_operand = true;
            }
            NotationToken::Operator(sym) => {
                if lookup(sym)?.is_function() {
                    return Err(EvalErr::InvalidExpression);
                }
                // signed literals are already numbers, any '-' left is binary
                if after_operator {
                    return Err(EvalErr::ConsecutiveOperators);
                }
                after_operator = true;
                after_operand = false;
            }
            NotationToken::Malformed(_) => return Err(EvalErr::InvalidExpression),
            NotationToken::Unknown(lexeme) => return Err(EvalErr::InvalidCharacter(lexeme)),
        }
    }

    if !brackets.is_empty() {
        return Err(EvalErr::MismatchedParentheses);
    }
    if !seen_operand {
        return Err(EvalErr::EmptyExpression);
    }
    if after_operator {
        return Err(EvalErr::InvalidExpression);
    }
    Ok(())
}
