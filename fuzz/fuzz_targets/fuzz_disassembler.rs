//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte sequences to the slice disassembler and checks that
//! every byte is accounted for exactly once.

#![no_main]

use arbitrary::Arbitrary;
use nese_debug::disassemble;
use nese_debug::disassembler::formatter::format_instruction;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let instructions = disassemble(&input.bytes, input.start_address);

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert_eq!(instr.bytes().len(), instr.size_bytes as usize);
        assert!(!format_instruction(instr).is_empty());

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    assert_eq!(total_size, input.bytes.len());
});
