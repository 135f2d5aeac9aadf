//! Fuzz target for the code view row index.
//!
//! Loads arbitrary bytes as a program image and fires arbitrary row and
//! address lookups at the index, checking its cache invariants after each.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nese_debug::{CodeViewConfig, Disassembler6502, FlatMemory, InstructionRowIndex};

#[derive(Debug, Arbitrary)]
enum Lookup {
    Row(u16),
    Address(u16),
    Reset(u16),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    image: Vec<u8>,
    image_start: u16,
    max_rows: u16,
    max_scan_distance: u16,
    lookups: Vec<Lookup>,
}

fuzz_target!(|input: FuzzInput| {
    if input.lookups.len() > 256 {
        return;
    }

    let mut memory = FlatMemory::new();
    memory.load(input.image_start, &input.image);
    let decoder = Disassembler6502::new(&memory);

    let config = CodeViewConfig {
        max_rows: usize::from(input.max_rows.max(1)),
        max_scan_distance: u32::from(input.max_scan_distance.max(1)),
    };
    let mut index = InstructionRowIndex::new(config, u32::from(input.image_start));

    for lookup in &input.lookups {
        match *lookup {
            Lookup::Row(row) => {
                if let Some(address) = index.address_for_row(usize::from(row), &decoder) {
                    assert_eq!(index.row_for_address(address, &decoder), usize::from(row));
                }
            }
            Lookup::Address(address) => {
                let row = index.row_for_address(u32::from(address), &decoder);
                assert_eq!(index.address_for_row(row, &decoder), Some(u32::from(address)));
            }
            Lookup::Reset(origin) => index.reset(u32::from(origin)),
        }

        let rows = index.cached_rows();
        assert_eq!(rows[0], (0, index.origin()));
        assert!(rows.len() <= config.max_rows);
        for pair in rows.windows(2) {
            assert_eq!(pair[1].0, pair[0].0 + 1);
            assert!(pair[0].1 < pair[1].1);
        }
    }
});
