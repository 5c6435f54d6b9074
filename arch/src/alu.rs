use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, FromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum ALU {
    #[default]
    ADD,
    SUB,
}

/// Accumulator arithmetic. Wraps modulo 256, never faults.
pub fn alu<T: Into<ALU>>(op: T, a: u8, b: u8) -> u8 {
    use ALU::*;
    match op.into() {
        ADD => a.wrapping_add(b),
        SUB => a.wrapping_sub(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraparound() {
        assert_eq!(alu(ALU::ADD, 250, 10), 4);
        assert_eq!(alu(ALU::SUB, 0, 5), 251);
        assert_eq!(alu(ALU::ADD, 3, 4), 7);
        assert_eq!(alu(ALU::SUB, 9, 9), 0);
    }
}
