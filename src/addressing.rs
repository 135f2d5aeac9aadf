//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. For the debugger the mode decides two
//! things: how many operand bytes follow the opcode, and how the operand is
//! rendered in the code view.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand (CLC, RTS, NOP).
    Implicit,

    /// Operates on the accumulator (LSR A).
    Accumulator,

    /// 8-bit constant (LDA #$10).
    Immediate,

    /// 8-bit zero page address (LDA $80).
    ZeroPage,

    /// Zero page indexed by X, wraps within page zero.
    ZeroPageX,

    /// Zero page indexed by Y, wraps within page zero.
    ZeroPageY,

    /// Signed 8-bit branch offset, relative to the following instruction.
    Relative,

    /// Full 16-bit address (JMP $1234).
    Absolute,

    /// 16-bit address indexed by X.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    ///
    /// ```
    /// use nese_debug::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implicit.operand_size(), 0);
    /// assert_eq!(AddressingMode::Relative.operand_size(), 1);
    /// assert_eq!(AddressingMode::Indirect.operand_size(), 2);
    /// ```
    pub const fn operand_size(self) -> u8 {
        use AddressingMode::*;

        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Total instruction size: opcode byte plus operands.
    pub const fn instruction_size(self) -> u8 {
        1 + self.operand_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_sizes() {
        assert_eq!(AddressingMode::Accumulator.instruction_size(), 1);
        assert_eq!(AddressingMode::IndirectY.instruction_size(), 2);
        assert_eq!(AddressingMode::AbsoluteX.instruction_size(), 3);
    }
}
