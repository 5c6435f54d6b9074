use crate::token::{Pos, Token};

/// Splits source text into classified tokens. `#` starts a comment.
pub struct Lexer<'a> {
    code: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(code: &'a str) -> Self {
        Self { code }
    }

    pub fn parse(self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (idx, line) in self.code.lines().enumerate() {
            tokens.extend(LineLexer::new(line, idx + 1).parse());
        }
        tokens
    }
}

pub struct LineLexer<'a> {
    line: &'a str,
    row: usize,
}

impl<'a> LineLexer<'a> {
    pub fn new(line: &'a str, row: usize) -> Self {
        Self { line, row }
    }

    pub fn parse(self) -> Vec<Token> {
        let code = match self.line.split_once('#') {
            Some((code, _comment)) => code,
            None => self.line,
        };
        code.split_whitespace()
            .map(|word| Token::classify(word, Pos { row: self.row }))
            .collect()
    }
}
