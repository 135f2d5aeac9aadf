//! Instruction decoder for the 6502 disassembler

use crate::debugger::Address;
use crate::disassembler::{InstructionDecoder, Instruction};
use crate::error::DecodeError;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Highest address a 6502 can put on its address bus.
const ADDRESS_SPACE_END: Address = 0xFFFF;

/// Decode a single instruction from a byte slice
///
/// # Returns
///
/// `None` for illegal opcodes or when the slice ends mid-instruction.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let opcode = *bytes.first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.is_illegal() || bytes.len() < metadata.size_bytes as usize {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes: bytes[1..metadata.size_bytes as usize].to_vec(),
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    })
}

/// Decode the instruction starting at `address` directly from memory.
///
/// Unlike [`decode_instruction`] this distinguishes why decoding failed,
/// since the code view treats each failure as "this address is not an
/// instruction boundary I can step over".
pub fn decode_at<M: MemoryBus + ?Sized>(
    memory: &M,
    address: Address,
) -> Result<Instruction, DecodeError> {
    let start = u16::try_from(address).map_err(|_| DecodeError::AddressOutOfRange(address))?;
    let opcode = memory.read(start);
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.is_illegal() {
        return Err(DecodeError::IllegalOpcode { address, opcode });
    }

    let operand_len = u16::from(metadata.addressing_mode.operand_size());
    if address + Address::from(operand_len) > ADDRESS_SPACE_END {
        return Err(DecodeError::Truncated(address));
    }

    let operand_bytes = (1..=operand_len).map(|i| memory.read(start + i)).collect();

    Ok(Instruction {
        address: start,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    })
}

/// Decoder over a borrowed memory bus.
///
/// Borrowing keeps the decoder tied to one stopped-point view of memory:
/// the emulator cannot mutate memory while a code view lookup is stepping
/// through it.
pub struct Disassembler6502<'m, M: MemoryBus + ?Sized> {
    memory: &'m M,
}

impl<'m, M: MemoryBus + ?Sized> Disassembler6502<'m, M> {
    pub fn new(memory: &'m M) -> Self {
        Self { memory }
    }

    /// Fully decode the instruction at `address`.
    pub fn decode(&self, address: Address) -> Result<Instruction, DecodeError> {
        decode_at(self.memory, address)
    }
}

impl<M: MemoryBus + ?Sized> InstructionDecoder for Disassembler6502<'_, M> {
    fn instruction_length(&self, address: Address) -> Result<u32, DecodeError> {
        self.decode(address).map(|instr| u32::from(instr.size_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;
    use crate::memory::FlatMemory;

    #[test]
    fn test_decode_lda_immediate() {
        let bytes = &[0xA9, 0x42];
        let instr = decode_instruction(bytes, 0x8000).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_short_slice() {
        assert!(decode_instruction(&[0x8D, 0x00], 0x0000).is_none());
        assert!(decode_instruction(&[], 0x0000).is_none());
    }

    #[test]
    fn test_decode_at_reads_operands_from_memory() {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, &[0x8D, 0x00, 0x20]);

        let instr = decode_at(&memory, 0x8000).unwrap();
        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.operand_bytes, vec![0x00, 0x20]);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_at_failures() {
        let mut memory = FlatMemory::new();
        memory.write(0x9000, 0x02);
        memory.write(0xFFFE, 0x4C);

        assert_eq!(
            decode_at(&memory, 0x9000),
            Err(DecodeError::IllegalOpcode {
                address: 0x9000,
                opcode: 0x02
            })
        );
        assert_eq!(decode_at(&memory, 0xFFFE), Err(DecodeError::Truncated(0xFFFE)));
        assert_eq!(
            decode_at(&memory, 0x1_0000),
            Err(DecodeError::AddressOutOfRange(0x1_0000))
        );
    }

    #[test]
    fn test_disassembler_reports_lengths() {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, &[0xEA, 0xA9, 0x01, 0x6C, 0xFC, 0xFF]);
        let disasm = Disassembler6502::new(&memory);

        assert_eq!(disasm.instruction_length(0x8000), Ok(1));
        assert_eq!(disasm.instruction_length(0x8001), Ok(2));
        assert_eq!(disasm.instruction_length(0x8003), Ok(3));
    }
}
