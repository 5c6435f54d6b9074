use arch::inst::enc_word;
use arch::mem::{Memory, MAX_ADDR, MEM_SIZE};
use arch::op::OpCode;

use crate::error::{Diag, Error};
use crate::label::Labels;
use crate::parser::{Line, Operand, Stmt};
use crate::token::TokenKind;

#[derive(Debug, Clone)]
pub struct Encoded {
    pub mem: Memory,
    /// Number of words written, starting at address 0.
    pub len: usize,
    /// Address of each line's word, `None` for lines that emit nothing or
    /// were never reached.
    pub addrs: Vec<Option<usize>>,
    pub diags: Vec<Diag>,
}

/// Encode statements into a memory image.
///
/// Errors are collected and encoding goes on, so one pass reports every
/// defect. Running out of memory is the exception: encoding stops and the
/// words written so far are returned.
pub fn encode(lines: &[Line], labels: &Labels) -> Encoded {
    let mut out = Encoded {
        mem: [0; MEM_SIZE],
        len: 0,
        addrs: vec![None; lines.len()],
        diags: vec![],
    };

    for (idx, line) in lines.iter().enumerate() {
        let (word, err) = match &line.stmt {
            Stmt::Label(_) => continue,
            Stmt::Op(op, operand) => {
                let (addr, err) = resolve(*op, operand.as_ref(), labels);
                (enc_word((*op).into(), addr), err)
            }
            Stmt::Data(val) => data(*val),
            Stmt::Stray(TokenKind::Symbol(name)) if labels.contains(name) => continue,
            Stmt::Stray(kind) => {
                let err = Error::UnknownOperation(kind.to_string());
                out.diags.push(Diag::new(err, line.pos));
                continue;
            }
        };

        if out.len >= MEM_SIZE {
            out.diags.push(Diag::new(Error::OutOfMemory, line.pos));
            break;
        }
        if let Some(err) = err {
            out.diags.push(Diag::new(err, line.pos));
        }
        out.mem[out.len] = word;
        out.addrs[idx] = Some(out.len);
        out.len += 1;
    }
    out
}

/// Resolve the operand field. On error the field is 0 and the word is still
/// emitted.
fn resolve(op: OpCode, operand: Option<&Operand>, labels: &Labels) -> (u8, Option<Error>) {
    if !op.has_operand() {
        return (0, None);
    }
    match operand {
        None => (0, Some(Error::MissingOperand(op))),
        Some(Operand::Literal(val)) => match u8::try_from(*val) {
            Ok(addr) if addr <= MAX_ADDR => (addr, None),
            _ => (0, Some(Error::OperandRange(val.to_string()))),
        },
        Some(Operand::Ident(name)) => match labels.get_addr(name) {
            Some(addr) if addr <= MAX_ADDR as usize => (addr as u8, None),
            Some(_) => (0, Some(Error::OperandRange(name.clone()))),
            None => (0, Some(Error::UndefinedLabel(name.clone()))),
        },
    }
}

fn data(val: Option<i64>) -> (u8, Option<Error>) {
    match val {
        None => (0, Some(Error::MissingData)),
        Some(val) => match u8::try_from(val) {
            Ok(byte) => (byte, None),
            Err(_) => (0, Some(Error::DataRange(val))),
        },
    }
}
