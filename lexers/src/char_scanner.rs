#![deny(warnings)]

use crate::scanner::Scanner;

pub(crate) static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static DECIMAL: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Drop leading whitespace, returns true if there was any.
    pub fn ignore_ws(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan runs like -?[0-9.]+([eE][+-]?[0-9]+)?
    // how many '.' the run holds is for the caller to judge
    pub fn scan_number(&mut self) -> Option<String> {
        let backtrack = self.pos();
        self.accept(&'-');
        if !self.skip_all(DECIMAL) {
            self.set_pos(backtrack);
            return None;
        }
        // exponent is only taken when digits follow
        let backtrack = self.pos();
        if self.accept_any(&['e', 'E']).is_some() {
            self.accept_any(&['+', '-']);
            if !self.skip_all(DIGITS) {
                self.set_pos(backtrack);
            }
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_number() {
        let tests = vec![
            "987", "-543", "41.98", "-83.5", ".5", "-.25", "7.",
            "28e3", "54E+2", "54e-33", "-38e3", "-53e+5", "-65E-4",
            "85.365e3", "54.234E+2", "-38.657e3", "1.2.3",
        ];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_number();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_number_stops() {
        let tests = vec![
            ("3e", "3"), ("3e+", "3"), ("12+4", "12"),
            ("5 6", "5"), ("2pi", "2"), ("4E-x", "4"),
        ];
        for (input, lexeme) in tests.iter() {
            let mut s = Scanner::new(input.chars());
            assert_eq!(Some(lexeme.to_string()), s.scan_number());
            assert_eq!(s.peek(), input[lexeme.len()..].chars().next());
        }
        assert_eq!(Scanner::new("-x".chars()).scan_number(), None);
        assert_eq!(Scanner::new("e5".chars()).scan_number(), None);
    }

    #[test]
    fn ignore_whitespace() {
        let mut s = Scanner::new(" \t 3".chars());
        assert!(s.ignore_ws());
        assert!(!s.ignore_ws());
        assert_eq!(s.next(), Some('3'));
        assert_eq!(s.extract_string(), "3");
    }
}
