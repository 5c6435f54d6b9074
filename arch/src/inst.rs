use crate::{mem::mask_addr, op::OpCode};

use color_print::cformat;
use serde::{Deserialize, Serialize};

/// One decoded SCRAM instruction word.
///
/// ```text
///  7      4 3      0
/// +--------+--------+
/// | opcode |  addr  |
/// +--------+--------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inst {
    pub op: OpCode,
    pub addr: u8,
}

impl Inst {
    pub fn new(op: OpCode, addr: u8) -> Self {
        Inst {
            op,
            addr: mask_addr(addr),
        }
    }

    pub fn to_bin(self) -> u8 {
        enc_word(self.op.into(), self.addr)
    }

    /// Decode a word. Fails with the opcode nibble when it names no operation.
    pub fn from_bin(bin: u8) -> Result<Inst, u8> {
        let (opcode, addr) = dec_word(bin);
        match OpCode::try_from(opcode) {
            Ok(op) => Ok(Inst { op, addr }),
            Err(_) => Err(opcode),
        }
    }
}

pub fn enc_word(opcode: u8, addr: u8) -> u8 {
    ((opcode & 0xF) << 4) | (addr & 0xF)
}

pub fn dec_word(bin: u8) -> (u8, u8) {
    (bin >> 4, bin & 0xF)
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self.op {
            OpCode::HLT => cformat!("<r>{:<4}</>{:<4}", self.op, ""),
            _ => cformat!("<r>{:<4}</><y>{:<4}</>", self.op, self.addr),
        }
    }
}

/// Disassemble a memory word for dumps. Illegal words are shown as raw data.
pub fn cformat_word(bin: u8) -> String {
    match Inst::from_bin(bin) {
        Ok(inst) => inst.cformat(),
        Err(_) => cformat!("<m>{:<4}</>{:<4}", "???", ""),
    }
}
