use arch::alu::{alu, ALU};
use arch::inst::dec_word;
use arch::mem::{mask_addr, Memory, MEM_SIZE};
use arch::op::OpCode;
use serde::{Deserialize, Serialize};

/// Complete machine state. Owned by the execution loop and threaded through
/// every step by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub mem: Memory,
    pub ac: u8,
    pub pc: u8,
    pub ic: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Halt {
    /// `HLT` executed.
    Hlt,
    /// The word at `addr` has an opcode outside 0..=8.
    Illegal { addr: u8, word: u8 },
    /// The instruction counter reached the configured maximum.
    Limit(u64),
}

impl std::fmt::Display for Halt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Halt::Hlt => write!(f, "HLT"),
            Halt::Illegal { addr, word } => {
                write!(f, "illegal instruction 0x{:02X} at 0x{:X}", word, addr)
            }
            Halt::Limit(n) => write!(f, "instruction limit reached ({})", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted(Halt),
}

impl State {
    pub fn load(mem: Memory) -> Self {
        State {
            mem,
            ac: 0,
            pc: 0,
            ic: 0,
        }
    }

    pub fn get(&self, addr: u8) -> u8 {
        self.mem[mask_addr(addr) as usize]
    }

    pub fn set(&mut self, addr: u8, val: u8) {
        self.mem[mask_addr(addr) as usize] = val;
    }

    /// Execute one instruction.
    pub fn step(mut self, tmax: Option<u64>) -> (State, Status) {
        // Fetch
        let at = self.pc;
        let word = self.get(at);
        self.pc = mask_addr(self.pc.wrapping_add(1));

        // Decode
        let (opcode, addr) = dec_word(word);
        let op = match OpCode::try_from(opcode) {
            Ok(op) => op,
            Err(_) => return (self, Status::Halted(Halt::Illegal { addr: at, word })),
        };

        // Execute
        match op {
            OpCode::HLT => return (self, Status::Halted(Halt::Hlt)),
            OpCode::LDA => self.ac = self.get(addr),
            OpCode::LDI => self.ac = self.get(self.get(addr)),
            OpCode::STA => self.set(addr, self.ac),
            OpCode::STI => self.set(self.get(addr), self.ac),
            OpCode::ADD => self.ac = alu(ALU::ADD, self.ac, self.get(addr)),
            OpCode::SUB => self.ac = alu(ALU::SUB, self.ac, self.get(addr)),
            OpCode::JMP => self.pc = addr,
            OpCode::JMZ => {
                if self.ac == 0 {
                    self.pc = addr
                }
            }
        }

        self.ic += 1;
        match tmax {
            Some(max) if self.ic >= max => {
                let ic = self.ic;
                (self, Status::Halted(Halt::Limit(ic)))
            }
            _ => (self, Status::Running),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::load([0; MEM_SIZE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::inst::enc_word;

    fn w(op: OpCode, addr: u8) -> u8 {
        enc_word(op.into(), addr)
    }

    fn state(words: &[u8]) -> State {
        let mut mem = [0; MEM_SIZE];
        mem[..words.len()].copy_from_slice(words);
        State::load(mem)
    }

    #[test]
    fn add_wraps() {
        let mut s = state(&[w(OpCode::ADD, 1), 10]);
        s.ac = 250;
        let (s, status) = s.step(None);
        assert_eq!(status, Status::Running);
        assert_eq!(s.ac, 4);
        assert_eq!(s.pc, 1);
        assert_eq!(s.ic, 1);
    }

    #[test]
    fn sub_wraps() {
        let (s, _) = state(&[w(OpCode::SUB, 1), 5]).step(None);
        assert_eq!(s.ac, 251);
    }

    #[test]
    fn store_and_indirect_store() {
        let mut s = state(&[w(OpCode::STA, 9), w(OpCode::STI, 8), 0, 0, 0, 0, 0, 0, 12]);
        s.ac = 0x5A;
        let (s, _) = s.step(None);
        assert_eq!(s.mem[9], 0x5A);
        let (s, _) = s.step(None);
        assert_eq!(s.mem[12], 0x5A);
    }

    #[test]
    fn indirect_load_masks_pointer() {
        let (s, _) = state(&[w(OpCode::LDI, 1), 0xF3, 0, 42]).step(None);
        assert_eq!(s.ac, 42);
    }

    #[test]
    fn jmz_taken_and_not_taken() {
        let prog = [w(OpCode::JMZ, 7)];
        let (s, _) = state(&prog).step(None);
        assert_eq!(s.pc, 7);

        let mut s = state(&prog);
        s.ac = 1;
        let (s, _) = s.step(None);
        assert_eq!(s.pc, 1);
    }

    #[test]
    fn jmp() {
        let (s, _) = state(&[w(OpCode::JMP, 0xC)]).step(None);
        assert_eq!(s.pc, 0xC);
    }

    #[test]
    fn hlt_does_not_count() {
        let (s, status) = state(&[w(OpCode::HLT, 0)]).step(None);
        assert_eq!(status, Status::Halted(Halt::Hlt));
        assert_eq!(s.pc, 1);
        assert_eq!(s.ic, 0);
    }

    #[test]
    fn illegal_opcode_halts() {
        let (s, status) = state(&[0x9F]).step(None);
        assert_eq!(
            status,
            Status::Halted(Halt::Illegal {
                addr: 0,
                word: 0x9F
            })
        );
        assert_eq!(s.ic, 0);
    }

    #[test]
    fn instruction_limit() {
        let (s, status) = state(&[w(OpCode::JMP, 0)]).step(Some(1));
        assert_eq!(status, Status::Halted(Halt::Limit(1)));
        assert_eq!(s.ic, 1);
    }

    #[test]
    fn pc_wraps_to_zero() {
        let mut s = state(&[]);
        s.mem[15] = w(OpCode::LDA, 0);
        s.pc = 15;
        let (s, _) = s.step(None);
        assert_eq!(s.pc, 0);
    }
}
