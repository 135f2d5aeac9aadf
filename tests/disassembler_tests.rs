//! Integration tests for the 6502 disassembler

use nese_debug::disassembler::formatter::{format_bytes, format_instruction};
use nese_debug::disassembler::{disassemble, listing};
use nese_debug::{
    AddressingMode, CodeViewConfig, DecodeError, Disassembler6502, FlatMemory, InstructionDecoder,
    InstructionRowIndex,
};

#[test]
fn test_multi_instruction_disassembly() {
    let bytes = &[
        0xA9, 0x42,       // LDA #$42
        0x8D, 0x00, 0x80, // STA $8000
        0x4C, 0x00, 0x80, // JMP $8000
    ];

    let instructions = disassemble(bytes, 0x8000);

    assert_eq!(instructions.len(), 3);
    assert_eq!(instructions[0].addressing_mode, AddressingMode::Immediate);
    assert_eq!(format_instruction(&instructions[0]), "LDA #$42");
    assert_eq!(instructions[1].address, 0x8002);
    assert_eq!(format_instruction(&instructions[1]), "STA $8000");
    assert_eq!(instructions[2].address, 0x8005);
    assert_eq!(format_instruction(&instructions[2]), "JMP $8000");
}

#[test]
fn test_illegal_opcode_handling() {
    let bytes = &[
        0xA9, 0x42, // LDA #$42 (valid)
        0xFF,       // Illegal opcode
        0xEA,       // NOP (valid)
    ];

    let instructions = disassemble(bytes, 0x0000);

    assert_eq!(instructions.len(), 3);
    assert_eq!(instructions[1].address, 0x0002);
    assert_eq!(instructions[1].mnemonic, ".byte");
    assert_eq!(format_instruction(&instructions[1]), ".byte $FF");
    assert_eq!(instructions[2].mnemonic, "NOP");
}

#[test]
fn test_listing_matches_slice_disassembly() {
    let program = [0xA0, 0x10, 0x88, 0xD0, 0xFD, 0x60];
    let mut memory = FlatMemory::new();
    memory.load(0xC000, &program);

    let from_memory = listing(&memory, 0xC000, 4);
    let from_slice = disassemble(&program, 0xC000);
    assert_eq!(from_memory, from_slice);
    assert_eq!(format_instruction(&from_memory[2]), "BNE $C002");
    assert_eq!(format_bytes(&from_memory[2].bytes()), "D0 FD");
}

#[test]
fn test_memory_decoder_feeds_row_index() {
    let mut memory = FlatMemory::new();
    // LDY #$10; DEY; BNE; RTS
    memory.load(0xC000, &[0xA0, 0x10, 0x88, 0xD0, 0xFD, 0x60, 0x02]);
    let decoder = Disassembler6502::new(&memory);
    let mut index = InstructionRowIndex::new(CodeViewConfig::default(), 0xC000);

    assert_eq!(index.row_for_address(0xC005, &decoder), 3);
    assert_eq!(index.address_for_row(4, &decoder), Some(0xC006));
    // $C006 holds an illegal opcode, nothing past it resolves
    assert_eq!(index.address_for_row(5, &decoder), None);
    assert_eq!(
        decoder.instruction_length(0xC006),
        Err(DecodeError::IllegalOpcode {
            address: 0xC006,
            opcode: 0x02
        })
    );
}
