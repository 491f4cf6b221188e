#![deny(warnings)]

use std::fmt;
use crate::scanner::Scanner;

/// Binary operator symbols.
pub const OPERATORS: &[char] = &['+', '-', '*', '/', '%', '^', '&', '|'];
/// Single letter functions: sin, cos, tan and ln.
pub const FUNCTIONS: &[char] = &['s', 'c', 't', 'l'];
pub const CONSTANT_NAMES: &[&str] = &["pi", "e"];


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bracket {
    Paren,
    Curly,
    Square,
}

impl Bracket {
    pub fn open(c: char) -> Option<Bracket> {
        match c {
            '(' => Some(Bracket::Paren),
            '{' => Some(Bracket::Curly),
            '[' => Some(Bracket::Square),
            _ => None,
        }
    }

    pub fn close(c: char) -> Option<Bracket> {
        match c {
            ')' => Some(Bracket::Paren),
            '}' => Some(Bracket::Curly),
            ']' => Some(Bracket::Square),
            _ => None,
        }
    }

    pub fn open_char(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Curly => '{',
            Bracket::Square => '[',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Curly => '}',
            Bracket::Square => ']',
        }
    }
}


#[derive(Clone, PartialEq, Debug)]
pub enum NotationToken {
    Unknown(String),
    Malformed(String), // numeric run that won't parse, eg: 1.2.3 or 1e999
    Number(f64),
    Constant(String),
    Operator(char),
    Function(char), // function symbol right before an open bracket
    Open(Bracket),
    Close(Bracket),
}

impl NotationToken {
    /// Number or constant.
    pub fn is_operand(&self) -> bool {
        matches!(*self, NotationToken::Number(_) | NotationToken::Constant(_))
    }

    // classify a lexeme produced by Scanner::scan_number
    pub(crate) fn literal(lexeme: String) -> NotationToken {
        let mantissa = match lexeme.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => &lexeme[..idx],
            None => &lexeme[..],
        };
        let dots = mantissa.matches('.').count();
        if dots > 1 || !mantissa.chars().any(|c| c.is_ascii_digit()) {
            return NotationToken::Malformed(lexeme);
        }
        match lexeme.parse::<f64>() {
            Ok(n) if n.is_finite() => NotationToken::Number(n),
            _ => NotationToken::Malformed(lexeme),
        }
    }
}

impl fmt::Display for NotationToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NotationToken::Unknown(ref lexeme) => write!(f, "{}", lexeme),
            NotationToken::Malformed(ref lexeme) => write!(f, "{}", lexeme),
            NotationToken::Number(n) => write!(f, "{}", n),
            NotationToken::Constant(ref name) => write!(f, "{}", name),
            NotationToken::Operator(sym) => write!(f, "{}", sym),
            NotationToken::Function(sym) => write!(f, "{}", sym),
            NotationToken::Open(kind) => write!(f, "{}", kind.open_char()),
            NotationToken::Close(kind) => write!(f, "{}", kind.close_char()),
        }
    }
}


/// When a '-' right before a digit belongs to the number.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SignRule {
    /// Only where an operand is expected: at the start or after an
    /// operator, a function or an open bracket. `3-4` is a subtraction.
    Context,
    /// Always. Postfix puts operators after their operands so `3 -4 +`
    /// reads as 3 + -4.
    Adjacent,
}

pub struct NotationTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<NotationToken>,
    sign: SignRule,
    after_digit: bool,
}

impl<I: Iterator<Item=char>> NotationTokenizer<I> {
    pub fn new(source: I) -> Self {
        Self::with_sign_rule(source, SignRule::Context)
    }

    pub fn with_sign_rule(source: I, sign: SignRule) -> Self {
        NotationTokenizer{src: Scanner::new(source), prev: None, sign, after_digit: false}
    }

    // when is an operand expected? we need to know the prev token
    fn operand_position(prev: &Option<NotationToken>) -> bool {
        match *prev {
            None => true,
            Some(NotationToken::Operator(_)) => true,
            Some(NotationToken::Function(_)) => true,
            Some(NotationToken::Open(_)) => true,
            _ => false,
        }
    }

    // expects the scanner to be right before a '-'
    fn signed_literal_ahead(&mut self) -> bool {
        let backtrack = self.src.pos();
        self.src.next();
        let digit_follows = matches!(self.src.peek(), Some(c) if c.is_ascii_digit() || c == '.');
        self.src.set_pos(backtrack);
        digit_follows && match self.sign {
            SignRule::Context => Self::operand_position(&self.prev),
            SignRule::Adjacent => true,
        }
    }

    fn get_token(&mut self) -> Option<NotationToken> {
        let spaced = self.src.ignore_ws();
        // 'e' right after a digit is never the constant
        let after_digit = std::mem::replace(&mut self.after_digit, false) && !spaced;

        let next = self.src.peek()?;
        if next.is_ascii_digit() || next == '.' || (next == '-' && self.signed_literal_ahead()) {
            let lexeme = self.src.scan_number()?;
            self.after_digit = lexeme.ends_with(|c: char| c.is_ascii_digit());
            return Some(NotationToken::literal(lexeme));
        }

        self.src.next();
        let token = if let Some(kind) = Bracket::open(next) {
            Some(NotationToken::Open(kind))
        } else if let Some(kind) = Bracket::close(next) {
            Some(NotationToken::Close(kind))
        } else if OPERATORS.contains(&next) {
            Some(NotationToken::Operator(next))
        } else if FUNCTIONS.contains(&next) {
            match self.src.peek() {
                Some(c) if Bracket::open(c).is_some() => Some(NotationToken::Function(next)),
                _ => Some(NotationToken::Operator(next)),
            }
        } else if next == 'p' && self.src.accept(&'i').is_some() {
            Some(NotationToken::Constant("pi".to_string()))
        } else if next == 'e' && !after_digit {
            Some(NotationToken::Constant("e".to_string()))
        } else {
            None
        };
        let lexeme = self.src.extract_string();
        Some(token.unwrap_or(NotationToken::Unknown(lexeme)))
    }
}

impl<I: Iterator<Item=char>> Iterator for NotationTokenizer<I> {
    type Item = NotationToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        if token.is_some() {
            self.prev = token.clone();
        }
        token
    }
}

///////////////////////////////////////////////////////////////////////////////
