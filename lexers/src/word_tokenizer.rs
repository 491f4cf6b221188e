#![deny(warnings)]

use crate::char_scanner::WHITE;
use crate::notation_tokenizer::{NotationToken, CONSTANT_NAMES, FUNCTIONS, OPERATORS};
use crate::scanner::Scanner;

/// Splits the input on whitespace and classifies each word on its own,
/// the way prefix expressions are written: `* + 1 2 -3.5e2`.
pub struct WordTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> WordTokenizer<I> {
    pub fn new(source: I) -> Self {
        WordTokenizer{src: Scanner::new(source)}
    }
}

/// A word is a number only if it scans as one from start to end.
pub fn classify_word(word: &str) -> NotationToken {
    let mut s = Scanner::new(word.chars());
    if let Some(lexeme) = s.scan_number() {
        if s.peek().is_none() {
            return NotationToken::literal(lexeme);
        }
    }
    if CONSTANT_NAMES.contains(&word) {
        return NotationToken::Constant(word.to_string());
    }
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if OPERATORS.contains(&c) || FUNCTIONS.contains(&c) => {
            NotationToken::Operator(c)
        }
        _ => NotationToken::Unknown(word.to_string()),
    }
}

impl<I: Iterator<Item=char>> Iterator for WordTokenizer<I> {
    type Item = NotationToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.ignore_ws();
        if !self.src.until_any(WHITE) {
            return None;
        }
        let word = self.src.extract_string();
        Some(classify_word(&word))
    }
}

///////////////////////////////////////////////////////////////////////////////
