/// Function names the evaluator knows how to apply.
pub const FUNCTIONS: &[&str] = &["sin", "cos", "tan", "log", "ln", "exp", "abs", "sqrt"];

/// Named constants that always resolve to a value.
pub const CONSTANTS: &[&str] = &["pi", "e"];

const DELIMITERS: &str = "+-*/%^!=()";

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Delim(char),
    // raw text; parsed at evaluation time so a malformed run like "3.4.5"
    // surfaces as an invalid-number error instead of a tokenizer panic
    Number(String),
    Variable(String),
    Constant(String),
    Function(String),
    Unknown(String),
}

/// Cuts an expression string into `Token`s: an immutable char buffer and a
/// cursor that only ever moves forward.
pub struct Tokenizer {
    src: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        Tokenizer { src: source.chars().collect(), pos: 0 }
    }

    // delimiters end identifier and number runs; so does any whitespace
    fn is_delimiter(c: char) -> bool {
        DELIMITERS.contains(c) || c == ' ' || c == '\t' || c == '\r'
    }

    fn scan_run(&mut self) -> String {
        let start = self.pos;
        while self.pos < self.src.len() && !Self::is_delimiter(self.src[self.pos]) {
            self.pos += 1;
        }
        self.src[start..self.pos].iter().collect()
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while self.src.get(self.pos) == Some(&' ') {
            self.pos += 1;
        }
        let c = *self.src.get(self.pos)?;
        if DELIMITERS.contains(c) {
            self.pos += 1;
            Some(Token::Delim(c))
        } else if c.is_alphabetic() {
            let run = self.scan_run();
            if FUNCTIONS.contains(&run.as_str()) {
                Some(Token::Function(run))
            } else if CONSTANTS.contains(&run.as_str()) {
                Some(Token::Constant(run))
            } else {
                Some(Token::Variable(run))
            }
        } else if c.is_ascii_digit() {
            Some(Token::Number(self.scan_run()))
        } else {
            self.pos += 1;
            Some(Token::Unknown(c.to_string()))
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Token, Tokenizer};

    #[test]
    fn basic_ops() {
        let mut lx = Tokenizer::new("3+4*2/-(1-5)^2^3");
        let expect = [
            Token::Number(format!("3")),
            Token::Delim('+'),
            Token::Number(format!("4")),
            Token::Delim('*'),
            Token::Number(format!("2")),
            Token::Delim('/'),
            Token::Delim('-'),
            Token::Delim('('),
            Token::Number(format!("1")),
            Token::Delim('-'),
            Token::Number(format!("5")),
            Token::Delim(')'),
            Token::Delim('^'),
            Token::Number(format!("2")),
            Token::Delim('^'),
            Token::Number(format!("3")),
        ];
        for exp_token in expect.iter() {
            let token = lx.next().unwrap();
            assert_eq!(*exp_token, token);
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn classification() {
        let mut lx = Tokenizer::new("2 * sin(pi * x) % foo!");
        let expect = [
            Token::Number(format!("2")),
            Token::Delim('*'),
            Token::Function(format!("sin")),
            Token::Delim('('),
            Token::Constant(format!("pi")),
            Token::Delim('*'),
            Token::Variable(format!("x")),
            Token::Delim(')'),
            Token::Delim('%'),
            Token::Variable(format!("foo")),
            Token::Delim('!'),
        ];
        for exp_token in expect.iter() {
            let token = lx.next().unwrap();
            assert_eq!(*exp_token, token);
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn decimal_numbers() {
        // '.' is not a delimiter so it rides along inside a digit run,
        // and 'e' only means scientific notation to languages that ask for it
        let mut lx = Tokenizer::new("3.25+0.5e");
        let expect = [
            Token::Number(format!("3.25")),
            Token::Delim('+'),
            Token::Number(format!("0.5e")),
        ];
        for exp_token in expect.iter() {
            let token = lx.next().unwrap();
            assert_eq!(*exp_token, token);
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn unknown_chars() {
        let mut lx = Tokenizer::new("1 + #");
        assert_eq!(lx.next(), Some(Token::Number(format!("1"))));
        assert_eq!(lx.next(), Some(Token::Delim('+')));
        assert_eq!(lx.next(), Some(Token::Unknown(format!("#"))));
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn spaces_only() {
        assert_eq!(Tokenizer::new("   ").next(), None);
        assert_eq!(Tokenizer::new("").next(), None);
    }
}
