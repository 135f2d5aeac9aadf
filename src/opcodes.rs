//! # Opcode Metadata Table
//!
//! The 256-entry opcode table is the single source of truth the disassembler
//! decodes against. It covers the 151 documented NMOS 6502 opcodes; the 105
//! undocumented ones carry the `"???"` mnemonic, zero cycles and size 1.
//!
//! Instruction size is not stored separately: it follows from the addressing
//! mode, so the table cannot disagree with itself.

use crate::addressing::AddressingMode;

/// Static metadata for a single 6502 opcode.
///
/// ```
/// use nese_debug::{AddressingMode, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic, `"???"` for illegal opcodes.
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost before page crossing penalties. Zero for illegal opcodes.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Whether this entry is one of the undocumented opcodes.
    pub fn is_illegal(&self) -> bool {
        self.mnemonic == ILLEGAL_MNEMONIC
    }
}

/// Mnemonic used for undocumented opcodes.
pub const ILLEGAL_MNEMONIC: &str = "???";

const fn op(mnemonic: &'static str, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: addressing_mode.instruction_size(),
    }
}

const ___: OpcodeMetadata = op(ILLEGAL_MNEMONIC, AddressingMode::Implicit, 0);

use crate::addressing::AddressingMode::{
    Absolute as Abs, AbsoluteX as Abx, AbsoluteY as Aby, Accumulator as Acc, Immediate as Imm,
    Implicit as Imp, Indirect as Ind, IndirectX as Izx, IndirectY as Izy, Relative as Rel,
    ZeroPage as Zp, ZeroPageX as Zpx, ZeroPageY as Zpy,
};

/// Complete opcode table indexed by opcode byte value.
///
/// ```
/// use nese_debug::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.size_bytes, 1);
///
/// assert!(OPCODE_TABLE[0x02].is_illegal());
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op("BRK", Imp, 7),   op("ORA", Izx, 6),   ___,                 ___,
    ___,                 op("ORA", Zp, 3),    op("ASL", Zp, 5),    ___,
    op("PHP", Imp, 3),   op("ORA", Imm, 2),   op("ASL", Acc, 2),   ___,
    ___,                 op("ORA", Abs, 4),   op("ASL", Abs, 6),   ___,
    // 0x10
    op("BPL", Rel, 2),   op("ORA", Izy, 5),   ___,                 ___,
    ___,                 op("ORA", Zpx, 4),   op("ASL", Zpx, 6),   ___,
    op("CLC", Imp, 2),   op("ORA", Aby, 4),   ___,                 ___,
    ___,                 op("ORA", Abx, 4),   op("ASL", Abx, 7),   ___,
    // 0x20
    op("JSR", Abs, 6),   op("AND", Izx, 6),   ___,                 ___,
    op("BIT", Zp, 3),    op("AND", Zp, 3),    op("ROL", Zp, 5),    ___,
    op("PLP", Imp, 4),   op("AND", Imm, 2),   op("ROL", Acc, 2),   ___,
    op("BIT", Abs, 4),   op("AND", Abs, 4),   op("ROL", Abs, 6),   ___,
    // 0x30
    op("BMI", Rel, 2),   op("AND", Izy, 5),   ___,                 ___,
    ___,                 op("AND", Zpx, 4),   op("ROL", Zpx, 6),   ___,
    op("SEC", Imp, 2),   op("AND", Aby, 4),   ___,                 ___,
    ___,                 op("AND", Abx, 4),   op("ROL", Abx, 7),   ___,
    // 0x40
    op("RTI", Imp, 6),   op("EOR", Izx, 6),   ___,                 ___,
    ___,                 op("EOR", Zp, 3),    op("LSR", Zp, 5),    ___,
    op("PHA", Imp, 3),   op("EOR", Imm, 2),   op("LSR", Acc, 2),   ___,
    op("JMP", Abs, 3),   op("EOR", Abs, 4),   op("LSR", Abs, 6),   ___,
    // 0x50
    op("BVC", Rel, 2),   op("EOR", Izy, 5),   ___,                 ___,
    ___,                 op("EOR", Zpx, 4),   op("LSR", Zpx, 6),   ___,
    op("CLI", Imp, 2),   op("EOR", Aby, 4),   ___,                 ___,
    ___,                 op("EOR", Abx, 4),   op("LSR", Abx, 7),   ___,
    // 0x60
    op("RTS", Imp, 6),   op("ADC", Izx, 6),   ___,                 ___,
    ___,                 op("ADC", Zp, 3),    op("ROR", Zp, 5),    ___,
    op("PLA", Imp, 4),   op("ADC", Imm, 2),   op("ROR", Acc, 2),   ___,
    op("JMP", Ind, 5),   op("ADC", Abs, 4),   op("ROR", Abs, 6),   ___,
    // 0x70
    op("BVS", Rel, 2),   op("ADC", Izy, 5),   ___,                 ___,
    ___,                 op("ADC", Zpx, 4),   op("ROR", Zpx, 6),   ___,
    op("SEI", Imp, 2),   op("ADC", Aby, 4),   ___,                 ___,
    ___,                 op("ADC", Abx, 4),   op("ROR", Abx, 7),   ___,
    // 0x80
    ___,                 op("STA", Izx, 6),   ___,                 ___,
    op("STY", Zp, 3),    op("STA", Zp, 3),    op("STX", Zp, 3),    ___,
    op("DEY", Imp, 2),   ___,                 op("TXA", Imp, 2),   ___,
    op("STY", Abs, 4),   op("STA", Abs, 4),   op("STX", Abs, 4),   ___,
    // 0x90
    op("BCC", Rel, 2),   op("STA", Izy, 6),   ___,                 ___,
    op("STY", Zpx, 4),   op("STA", Zpx, 4),   op("STX", Zpy, 4),   ___,
    op("TYA", Imp, 2),   op("STA", Aby, 5),   op("TXS", Imp, 2),   ___,
    ___,                 op("STA", Abx, 5),   ___,                 ___,
    // 0xA0
    op("LDY", Imm, 2),   op("LDA", Izx, 6),   op("LDX", Imm, 2),   ___,
    op("LDY", Zp, 3),    op("LDA", Zp, 3),    op("LDX", Zp, 3),    ___,
    op("TAY", Imp, 2),   op("LDA", Imm, 2),   op("TAX", Imp, 2),   ___,
    op("LDY", Abs, 4),   op("LDA", Abs, 4),   op("LDX", Abs, 4),   ___,
    // 0xB0
    op("BCS", Rel, 2),   op("LDA", Izy, 5),   ___,                 ___,
    op("LDY", Zpx, 4),   op("LDA", Zpx, 4),   op("LDX", Zpy, 4),   ___,
    op("CLV", Imp, 2),   op("LDA", Aby, 4),   op("TSX", Imp, 2),   ___,
    op("LDY", Abx, 4),   op("LDA", Abx, 4),   op("LDX", Aby, 4),   ___,
    // 0xC0
    op("CPY", Imm, 2),   op("CMP", Izx, 6),   ___,                 ___,
    op("CPY", Zp, 3),    op("CMP", Zp, 3),    op("DEC", Zp, 5),    ___,
    op("INY", Imp, 2),   op("CMP", Imm, 2),   op("DEX", Imp, 2),   ___,
    op("CPY", Abs, 4),   op("CMP", Abs, 4),   op("DEC", Abs, 6),   ___,
    // 0xD0
    op("BNE", Rel, 2),   op("CMP", Izy, 5),   ___,                 ___,
    ___,                 op("CMP", Zpx, 4),   op("DEC", Zpx, 6),   ___,
    op("CLD", Imp, 2),   op("CMP", Aby, 4),   ___,                 ___,
    ___,                 op("CMP", Abx, 4),   op("DEC", Abx, 7),   ___,
    // 0xE0
    op("CPX", Imm, 2),   op("SBC", Izx, 6),   ___,                 ___,
    op("CPX", Zp, 3),    op("SBC", Zp, 3),    op("INC", Zp, 5),    ___,
    op("INX", Imp, 2),   op("SBC", Imm, 2),   op("NOP", Imp, 2),   ___,
    op("CPX", Abs, 4),   op("SBC", Abs, 4),   op("INC", Abs, 6),   ___,
    // 0xF0
    op("BEQ", Rel, 2),   op("SBC", Izy, 5),   ___,                 ___,
    ___,                 op("SBC", Zpx, 4),   op("INC", Zpx, 6),   ___,
    op("SED", Imp, 2),   op("SBC", Aby, 4),   ___,                 ___,
    ___,                 op("SBC", Abx, 4),   op("INC", Abx, 7),   ___,];
