use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// LMC instruction set. The discriminant is the opcode byte emitted in the
/// binary stream; DAT is a pseudo-instruction and never emits its own
/// opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
pub enum Op {
    HLT,
    ADD,
    SUB,
    STA,
    LDA,
    BRA,
    BRZ,
    BRP,
    INP,
    OUT,
    INT,
    IRT,
    DAT,
}

/// What an opcode's operand field may hold.
pub enum Operands {
    /// No operand allowed (HLT, INP, OUT, INT).
    None,
    /// A label naming a code address (branches, loads, stores, IRT).
    Target,
    /// A label whose spelling is a decimal literal (DAT).
    Data,
}

impl Op {
    /// Mnemonic lookup. Exact match only: 3 bytes, case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn operands(&self) -> Operands {
        match self {
            Op::HLT | Op::INP | Op::OUT | Op::INT => Operands::None,
            Op::DAT => Operands::Data,
            _ => Operands::Target,
        }
    }

    /// Bytes the instruction occupies in the output stream.
    pub fn width(&self) -> u16 {
        match self {
            Op::DAT => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics() {
        assert_eq!(Op::parse("HLT"), Some(Op::HLT));
        assert_eq!(Op::parse("DAT"), Some(Op::DAT));
        assert_eq!(Op::parse("hlt"), None);
        assert_eq!(Op::parse("HLTX"), None);
        assert_eq!(Op::parse("HL"), None);
        assert_eq!(Op::parse(""), None);
    }

    #[test]
    fn encoding() {
        assert_eq!(u8::from(Op::HLT), 0x00);
        assert_eq!(u8::from(Op::STA), 0x03);
        assert_eq!(u8::from(Op::LDA), 0x04);
        assert_eq!(u8::from(Op::INP), 0x08);
        assert_eq!(u8::from(Op::OUT), 0x09);
        assert_eq!(u8::from(Op::DAT), 0x0C);
    }

    #[test]
    fn widths() {
        assert_eq!(Op::DAT.width(), 1);
        assert_eq!(Op::ADD.width(), 2);
        assert_eq!(Op::HLT.width(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Op::BRZ.to_string(), "BRZ");
    }
}
