use std::fmt;
use std::str::FromStr;
use crate::error::EvalErr;
use crate::observer::{Observer, Silent};
use crate::{infix, postfix, prefix};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notation {
    Infix,
    Prefix,
    Postfix,
}

impl Notation {
    pub fn check(self, expr: &str) -> Result<(), EvalErr> {
        let checked = match self {
            Notation::Infix => infix::check(expr),
            Notation::Prefix => prefix::check(expr),
            Notation::Postfix => postfix::check(expr),
        };
        if let Err(ref e) = checked {
            debug!("{} rejected {:?}: {}", self, expr, e);
        }
        checked
    }

    pub fn validate(self, expr: &str) -> bool {
        self.check(expr).is_ok()
    }

    /// Validate, then evaluate.
    pub fn evaluate(self, expr: &str) -> Result<f64, EvalErr> {
        self.evaluate_traced(expr, &mut Silent)
    }

    pub fn evaluate_traced<O: Observer>(self, expr: &str, observer: &mut O) -> Result<f64, EvalErr> {
        self.check(expr)?;
        match self {
            Notation::Infix => infix::evaluate_traced(expr, observer),
            Notation::Prefix => prefix::evaluate_traced(expr, observer),
            Notation::Postfix => postfix::evaluate_traced(expr, observer),
        }
    }
}

impl FromStr for Notation {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "infix" | "in" => Ok(Notation::Infix),
            "prefix" | "pre" => Ok(Notation::Prefix),
            "postfix" | "post" => Ok(Notation::Postfix),
            _ => Err(format!("unknown notation: {}", s)),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Notation::Infix => write!(f, "infix"),
            Notation::Prefix => write!(f, "prefix"),
            Notation::Postfix => write!(f, "postfix"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
