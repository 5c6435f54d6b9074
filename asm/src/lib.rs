//! Assembler for SCRAM, a 16-word machine with 8-bit words.
//!
//! Source text is split into tokens, classified once, grouped into
//! statements, and then assembled in two passes: labels first, so forward
//! references resolve, then encoding into a 16-byte memory image.

pub mod encoder;
pub mod error;
pub mod label;
pub mod lexer;
pub mod listing;
pub mod parser;
pub mod token;

pub use error::{Diag, Error};
pub use label::Labels;
pub use lexer::Lexer;
pub use token::Token;

use arch::mem::Memory;
use parser::Line;

#[derive(Debug, Clone)]
pub struct Assembly {
    pub mem: Memory,
    pub len: usize,
    pub lines: Vec<Line>,
    pub addrs: Vec<Option<usize>>,
    pub labels: Labels,
    pub diags: Vec<Diag>,
}

impl Assembly {
    pub fn is_ok(&self) -> bool {
        self.diags.is_empty()
    }

    /// True when the program did not fit and the image is partial.
    pub fn is_truncated(&self) -> bool {
        self.diags.iter().any(|diag| diag.err.is_fatal())
    }
}

pub fn assemble(tokens: &[Token]) -> Assembly {
    let lines = parser::parse(tokens);
    let (labels, mut diags) = Labels::collect(&lines);
    let encoded = encoder::encode(&lines, &labels);
    diags.extend(encoded.diags);
    diags.sort_by_key(|diag| diag.pos.row);
    Assembly {
        mem: encoded.mem,
        len: encoded.len,
        lines,
        addrs: encoded.addrs,
        labels,
        diags,
    }
}

pub fn assemble_str(code: &str) -> Assembly {
    assemble(&Lexer::new(code).parse())
}
