//! 6502 Disassembler Module
//!
//! Turns machine code into instructions for the debugger. Two entry points:
//! `disassemble` lists a byte slice, and `Disassembler6502` decodes on demand
//! straight out of a `MemoryBus`, which is what the code view needs.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::debugger::Address;
use crate::error::DecodeError;
use crate::memory::MemoryBus;

pub use decoder::Disassembler6502;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

impl Instruction {
    /// Opcode followed by operand bytes, as they appear in memory.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }

    /// `.byte` pseudo-instruction for an opcode the table does not document.
    fn data_byte(address: u16, opcode: u8) -> Self {
        Instruction {
            address,
            opcode,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            size_bytes: 1,
            base_cycles: 0,
        }
    }
}

/// The one capability the code view row index needs: how long is the
/// instruction starting at `address`?
///
/// Implementations must be deterministic for a given memory snapshot and must
/// never report a length of zero. Any `Fn(Address) -> Result<u32, DecodeError>`
/// is a decoder, which keeps test doubles and adapters to a single closure.
pub trait InstructionDecoder {
    /// Byte length of the instruction at `address`.
    fn instruction_length(&self, address: Address) -> Result<u32, DecodeError>;
}

impl<F> InstructionDecoder for F
where
    F: Fn(Address) -> Result<u32, DecodeError>,
{
    fn instruction_length(&self, address: Address) -> Result<u32, DecodeError> {
        self(address)
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// Illegal opcodes and trailing partial instructions become one-byte `.byte`
/// entries, so every input byte is accounted for.
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = start_address;

    while pc < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[pc..], address)
            .unwrap_or_else(|| Instruction::data_byte(address, bytes[pc]));
        pc += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Disassemble `count` consecutive instructions out of memory.
///
/// Stops early at the top of the address space.
pub fn listing<M: MemoryBus + ?Sized>(memory: &M, start: u16, count: usize) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut address = Address::from(start);

    while instructions.len() < count && address <= 0xFFFF {
        let instr = match decoder::decode_at(memory, address) {
            Ok(instr) => instr,
            // `address` is within 16 bits here, the loop condition guarantees it
            Err(_) => Instruction::data_byte(address as u16, memory.read(address as u16)),
        };
        address += Address::from(instr.size_bytes);
        instructions.push(instr);
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn test_disassemble_empty() {
        let instructions = disassemble(&[], 0x0000);
        assert_eq!(instructions.len(), 0);
    }

    #[test]
    fn test_disassemble_truncated_tail_becomes_data() {
        // STA abs missing its high byte
        let instructions = disassemble(&[0xEA, 0x8D, 0x00], 0x8000);

        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].mnemonic, "NOP");
        assert_eq!(instructions[1].mnemonic, ".byte");
        assert_eq!(instructions[1].address, 0x8001);
        assert_eq!(instructions[2].address, 0x8002);
    }

    #[test]
    fn test_listing_from_memory() {
        let mut memory = FlatMemory::new();
        memory.load(0xC000, &[0xA2, 0x00, 0x02, 0xE8, 0x4C, 0x00, 0xC0]);

        let instructions = listing(&memory, 0xC000, 4);
        let mnemonics: Vec<_> = instructions.iter().map(|i| i.mnemonic).collect();
        assert_eq!(mnemonics, ["LDX", ".byte", "INX", "JMP"]);
        assert_eq!(instructions[3].address, 0xC004);
        assert_eq!(instructions[3].bytes(), vec![0x4C, 0x00, 0xC0]);
    }

    #[test]
    fn test_listing_stops_at_end_of_address_space() {
        let memory = FlatMemory::new();
        // BRK everywhere: one byte each
        let instructions = listing(&memory, 0xFFFE, 10);
        assert_eq!(instructions.len(), 2);
    }

    #[test]
    fn test_closure_is_a_decoder() {
        let fixed = |_address: Address| -> Result<u32, DecodeError> { Ok(2) };
        assert_eq!(fixed.instruction_length(0x8000), Ok(2));
    }
}
