use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum OpCode {
    HLT = 0,
    LDA = 1,
    LDI = 2,
    STA = 3,
    STI = 4,
    ADD = 5,
    SUB = 6,
    JMP = 7,
    JMZ = 8,
}

impl OpCode {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    /// Every operation except `HLT` takes a 4-bit operand.
    pub fn has_operand(&self) -> bool {
        !matches!(self, OpCode::HLT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_mnemonic() {
        assert_eq!(OpCode::parse("LDA"), Some(OpCode::LDA));
        assert_eq!(OpCode::parse("jmz"), Some(OpCode::JMZ));
        assert_eq!(OpCode::parse("Hlt"), Some(OpCode::HLT));
        assert_eq!(OpCode::parse("DAT"), None);
        assert_eq!(OpCode::parse("hoge"), None);
    }

    #[test]
    fn nibble_values() {
        for (idx, op) in OpCode::iter().enumerate() {
            assert_eq!(u8::from(op), idx as u8);
            assert_eq!(OpCode::try_from(idx as u8).ok(), Some(op));
        }
        for illegal in 9..=0xF_u8 {
            assert!(OpCode::try_from(illegal).is_err());
        }
    }

    #[test]
    fn display() {
        assert_eq!(OpCode::STI.to_string(), "STI");
        assert!(!OpCode::HLT.has_operand());
        assert!(OpCode::JMP.has_operand());
    }
}
