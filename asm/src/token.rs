use arch::op::OpCode;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos) -> Self {
        Token { kind, pos }
    }

    /// Classify one whitespace-delimited word.
    pub fn classify(word: &str, pos: Pos) -> Self {
        Token::new(TokenKind::classify(word), pos)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LabelDef(String), // "name:"
    Mnemonic(OpCode), // "LDA"
    Dat,              // "DAT"
    Int(i64),         // "42"
    Symbol(String),   // "name"
}

impl TokenKind {
    pub fn classify(word: &str) -> Self {
        if let Some(name) = word.strip_suffix(':') {
            return TokenKind::LabelDef(name.to_string());
        }
        if let Some(op) = OpCode::parse(word) {
            return TokenKind::Mnemonic(op);
        }
        if word.eq_ignore_ascii_case("DAT") {
            return TokenKind::Dat;
        }
        match word.parse::<i64>() {
            Ok(val) => TokenKind::Int(val),
            Err(_) => TokenKind::Symbol(word.to_string()),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::LabelDef(name) => write!(f, "{}:", name),
            TokenKind::Mnemonic(op) => write!(f, "{}", op),
            TokenKind::Dat => write!(f, "DAT"),
            TokenKind::Int(val) => write!(f, "{}", val),
            TokenKind::Symbol(name) => write!(f, "{}", name),
        }
    }
}

/// 1-based source line. Line 0 means the token did not come from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub row: usize,
}
