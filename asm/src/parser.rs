use arch::op::OpCode;
use indexmap::IndexMap;

use crate::token::{Pos, Token, TokenKind};

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Label(String),
    Op(OpCode, Option<Operand>),
    Data(Option<i64>),
    Stray(TokenKind),
}

impl Stmt {
    /// Number of memory words the statement occupies.
    pub fn words(&self) -> usize {
        match self {
            Stmt::Op(..) | Stmt::Data(_) => 1,
            Stmt::Label(_) | Stmt::Stray(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Literal(i64),
    Ident(String),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Literal(val) => write!(f, "{}", val),
            Operand::Ident(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub stmt: Stmt,
    pub pos: Pos,
}

// ----------------------------------------------------------------------------
// Parser

/// Groups classified tokens into statements.
///
/// The label resolver and the encoder both walk the result, so they always
/// agree on how many words precede each label.
///
/// A `name:` token right after a mnemonic is read as a reference only when
/// `name:` appears at least twice; a sole definition stays a definition and
/// the mnemonic is left without an operand.
pub fn parse(tokens: &[Token]) -> Vec<Line> {
    let mut defs: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        if let TokenKind::LabelDef(name) = &token.kind {
            *defs.entry(name.as_str()).or_insert(0) += 1;
        }
    }
    let is_reference = |name: &str| defs.get(name).is_some_and(|count| *count >= 2);

    let mut lines = Vec::new();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        let pos = token.pos;
        let stmt = match &token.kind {
            TokenKind::LabelDef(name) => Stmt::Label(name.clone()),
            TokenKind::Mnemonic(op) if op.has_operand() => {
                let operand = match iter.peek().map(|t| &t.kind) {
                    Some(TokenKind::Int(val)) => Some(Operand::Literal(*val)),
                    Some(TokenKind::Symbol(name)) => Some(Operand::Ident(name.clone())),
                    Some(TokenKind::LabelDef(name)) if is_reference(name.as_str()) => {
                        Some(Operand::Ident(name.clone()))
                    }
                    _ => None,
                };
                if operand.is_some() {
                    iter.next();
                }
                Stmt::Op(*op, operand)
            }
            TokenKind::Mnemonic(op) => Stmt::Op(*op, None),
            TokenKind::Dat => match iter.peek().map(|t| &t.kind) {
                Some(TokenKind::Int(val)) => {
                    let val = *val;
                    iter.next();
                    Stmt::Data(Some(val))
                }
                _ => Stmt::Data(None),
            },
            kind @ (TokenKind::Int(_) | TokenKind::Symbol(_)) => Stmt::Stray(kind.clone()),
        };
        lines.push(Line { stmt, pos });
    }
    lines
}
