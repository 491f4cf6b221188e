use std::fmt;
use lexers::Bracket;
use crate::catalog::lookup;

/// A state transition of an evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    PushNumber(f64),
    PushOperator(char),
    PushBracket(Bracket),
    PopBracket(Bracket),
    Apply{symbol: char, args: Vec<f64>, result: f64},
    Done(f64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Action::PushNumber(n) => write!(f, "push number {}", n),
            Action::PushOperator(sym) => write!(f, "push operator {}", sym),
            Action::PushBracket(kind) => write!(f, "push bracket {}", kind.open_char()),
            Action::PopBracket(kind) => write!(f, "pop bracket {}", kind.open_char()),
            Action::Apply{symbol, ref args, result} => match args.as_slice() {
                [a, b] => write!(f, "calculate {} {} {} = {}", a, symbol, b, result),
                _ => {
                    let name = lookup(symbol).map(|op| op.name).unwrap_or("?");
                    let args = args.iter().map(|a| a.to_string()).collect::<Vec<_>>();
                    write!(f, "calculate {}({}) = {}", name, args.join(", "), result)
                }
            },
            Action::Done(result) => write!(f, "done, result {}", result),
        }
    }
}

/// Gets called after every state transition with the operand stack and
/// the pending operator stack, bottom first. Closures taking
/// `(&Action, &[f64], &[char])` are observers.
pub trait Observer {
    fn observe(&mut self, action: &Action, operands: &[f64], pending: &[char]);
}

/// Observer that ignores everything.
pub struct Silent;

impl Observer for Silent {
    fn observe(&mut self, _: &Action, _: &[f64], _: &[char]) {}
}

impl<F> Observer for F where F: FnMut(&Action, &[f64], &[char]) {
    fn observe(&mut self, action: &Action, operands: &[f64], pending: &[char]) {
        self(action, operands, pending)
    }
}

///////////////////////////////////////////////////////////////////////////////
