//! Text to text conversion between notations. Nothing gets evaluated, the
//! input is checked with its notation's validator and rearranged through
//! an expression tree.
use lexers::{NotationToken, NotationTokenizer, SignRule, WordTokenizer};
use crate::catalog::{lookup, OperatorSpec};
use crate::error::EvalErr;
use crate::notations::Notation;

#[derive(Debug, Clone)]
enum Expr {
    Leaf(NotationToken),
    Node(&'static OperatorSpec, Vec<Expr>),
}

// infix tokens in postfix order, brackets resolved
fn shunting(expr: &str) -> Result<Vec<NotationToken>, EvalErr> {
    let mut out = Vec::new();
    let mut stack = Vec::new();

    for token in NotationTokenizer::new(expr.chars()) {
        match token {
            NotationToken::Number(_) | NotationToken::Constant(_) => out.push(token),
            NotationToken::Function(_) | NotationToken::Open(_) => stack.push(token),
            NotationToken::Operator(sym) => {
                let prec = lookup(sym)?.precedence;
                while let Some(NotationToken::Operator(top)) = stack.last() {
                    if lookup(*top)?.precedence < prec {
                        break;
                    }
                    out.extend(stack.pop());
                }
                stack.push(token);
            }
            NotationToken::Close(kind) => {
                loop {
                    match stack.pop() {
                        Some(NotationToken::Open(open)) if open == kind => break,
                        Some(op @ NotationToken::Operator(_)) => out.push(op),
                        _ => return Err(EvalErr::MismatchedParentheses),
                    }
                }
                if let Some(NotationToken::Function(_)) = stack.last() {
                    out.extend(stack.pop());
                }
            }
            NotationToken::Malformed(_) => return Err(EvalErr::InvalidExpression),
            NotationToken::Unknown(lexeme) => return Err(EvalErr::InvalidCharacter(lexeme)),
        }
    }
    while let Some(top) = stack.pop() {
        match top {
            NotationToken::Operator(_) => out.push(top),
            _ => return Err(EvalErr::MismatchedParentheses),
        }
    }
    Ok(out)
}

impl Expr {
    fn parse(expr: &str, notation: Notation) -> Result<Expr, EvalErr> {
        notation.check(expr)?;
        match notation {
            Notation::Infix => Self::from_postfix(shunting(expr)?),
            Notation::Postfix => Self::from_postfix(
                NotationTokenizer::with_sign_rule(expr.chars(), SignRule::Adjacent)),
            Notation::Prefix => Self::from_prefix(WordTokenizer::new(expr.chars())),
        }
    }

    fn from_postfix(tokens: impl IntoIterator<Item=NotationToken>) -> Result<Expr, EvalErr> {
        let mut nodes = Vec::new();
        for token in tokens {
            if token.is_operand() {
                nodes.push(Expr::Leaf(token));
                continue;
            }
            let op = Self::operator(&token)?;
            if nodes.len() < op.arity {
                return Err(EvalErr::InsufficientOperands);
            }
            let args = nodes.split_off(nodes.len() - op.arity);
            nodes.push(Expr::Node(op, args));
        }
        Self::single(nodes)
    }

    fn from_prefix(tokens: impl Iterator<Item=NotationToken>) -> Result<Expr, EvalErr> {
        let tokens = tokens.collect::<Vec<_>>();
        let mut nodes = Vec::new();
        for token in tokens.into_iter().rev() {
            if token.is_operand() {
                nodes.push(Expr::Leaf(token));
                continue;
            }
            let op = Self::operator(&token)?;
            if nodes.len() < op.arity {
                return Err(EvalErr::InsufficientOperands);
            }
            let mut args = nodes.split_off(nodes.len() - op.arity);
            args.reverse();
            nodes.push(Expr::Node(op, args));
        }
        Self::single(nodes)
    }

    fn operator(token: &NotationToken) -> Result<&'static OperatorSpec, EvalErr> {
        match *token {
            NotationToken::Operator(sym) | NotationToken::Function(sym) => lookup(sym),
            _ => Err(EvalErr::InvalidCharacter(token.to_string())),
        }
    }

    fn single(mut nodes: Vec<Expr>) -> Result<Expr, EvalErr> {
        match nodes.len() {
            0 => Err(EvalErr::EmptyExpression),
            1 => nodes.pop().ok_or(EvalErr::EmptyExpression),
            _ => Err(EvalErr::MissingOperator),
        }
    }

    fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Infix => self.infix(),
            Notation::Prefix | Notation::Postfix => {
                let mut words = Vec::new();
                self.words(notation, &mut words);
                words.join(" ")
            }
        }
    }

    fn words(&self, notation: Notation, out: &mut Vec<String>) {
        match *self {
            Expr::Leaf(ref token) => out.push(token.to_string()),
            Expr::Node(op, ref args) => {
                if notation == Notation::Prefix {
                    out.push(op.symbol.to_string());
                }
                args.iter().for_each(|arg| arg.words(notation, out));
                if notation == Notation::Postfix {
                    out.push(op.symbol.to_string());
                }
            }
        }
    }

    // every binary node gets its own parens, functions are called
    fn infix(&self) -> String {
        match *self {
            Expr::Leaf(ref token) => token.to_string(),
            Expr::Node(op, ref args) => match args.as_slice() {
                [lhs, rhs] => format!("({} {} {})", lhs.infix(), op.symbol, rhs.infix()),
                _ => {
                    let args = args.iter().map(Expr::infix).collect::<Vec<_>>();
                    format!("{}({})", op.symbol, args.join(", "))
                }
            },
        }
    }
}

pub fn convert(expr: &str, from: Notation, to: Notation) -> Result<String, EvalErr> {
    let text = Expr::parse(expr, from)?.render(to);
    debug!("{} {:?} -> {} {:?}", from, expr, to, text);
    Ok(text)
}

pub fn infix_to_postfix(expr: &str) -> Result<String, EvalErr> {
    convert(expr, Notation::Infix, Notation::Postfix)
}

pub fn infix_to_prefix(expr: &str) -> Result<String, EvalErr> {
    convert(expr, Notation::Infix, Notation::Prefix)
}

pub fn postfix_to_infix(expr: &str) -> Result<String, EvalErr> {
    convert(expr, Notation::Postfix, Notation::Infix)
}

pub fn prefix_to_infix(expr: &str) -> Result<String, EvalErr> {
    convert(expr, Notation::Prefix, Notation::Infix)
}
