//! Stack contents table.
//!
//! Rows run from the top of the stack (the most recent push) down to its
//! bottom, one stack slot per row.

use crate::debugger::target::{DebugTarget, RegisterValue};
use crate::debugger::{format_address, Address, Row, TableView};

const HEADERS: [&str; 2] = ["Address", "Value"];

/// Upper bound on rows, for targets with very deep stacks.
pub const MAX_STACK_ROWS: usize = 1024;

#[derive(Debug, Default, Clone, Copy)]
pub struct StackView;

impl StackView {
    fn slot_address<T: DebugTarget + ?Sized>(target: &T, row: Row) -> Option<Address> {
        let bounds = target.stack_bounds();
        let offset = Address::try_from(row).ok()?.checked_mul(bounds.width)?;
        bounds.top.checked_add(offset)
    }
}

impl<T: DebugTarget + ?Sized> TableView<T> for StackView {
    fn row_count(&self, target: &T) -> usize {
        let bounds = target.stack_bounds();
        if bounds.bottom < bounds.top || bounds.width == 0 {
            return 0;
        }

        let slots = (bounds.bottom - bounds.top) / bounds.width + 1;
        usize::try_from(slots).map_or(MAX_STACK_ROWS, |n| n.min(MAX_STACK_ROWS))
    }

    fn column_count(&self) -> usize {
        HEADERS.len()
    }

    fn header(&self, section: usize) -> Option<&'static str> {
        HEADERS.get(section).copied()
    }

    fn cell(&self, target: &T, row: Row, column: usize) -> Option<String> {
        if row >= self.row_count(target) {
            return None;
        }

        let address = Self::slot_address(target, row)?;
        match column {
            0 => Some(format_address(address)),
            1 => {
                let value = match target.stack_bounds().width {
                    1 => RegisterValue::Byte(target.read_memory_byte(address)?),
                    2 => RegisterValue::Word(target.read_memory_word(address)?),
                    _ => RegisterValue::DWord(target.read_memory_dword(address)?),
                };
                Some(value.to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debugger::target::{CpuSnapshot, Register, StackBounds};
    use crate::disassembler::InstructionDecoder;
    use crate::error::DecodeError;
    use crate::memory::FlatMemory;

    #[test]
    fn test_empty_stack() {
        let mut cpu = CpuSnapshot::new(FlatMemory::new());
        cpu.registers.sp = 0xFF;
        assert_eq!(StackView.row_count(&cpu), 0);
        assert_eq!(StackView.cell(&cpu, 0, 0), None);
    }

    #[test]
    fn test_pushed_bytes() {
        let mut memory = FlatMemory::new();
        // Return address pushed by JSR, high byte first
        memory.load(0x01FE, &[0x02, 0x80]);
        let mut cpu = CpuSnapshot::new(memory);
        cpu.registers.sp = 0xFD;

        assert_eq!(StackView.row_count(&cpu), 2);
        assert_eq!(StackView.cell(&cpu, 0, 0).as_deref(), Some("0x000001FE"));
        assert_eq!(StackView.cell(&cpu, 0, 1).as_deref(), Some("0x02"));
        assert_eq!(StackView.cell(&cpu, 1, 1).as_deref(), Some("0x80"));
        assert_eq!(StackView.cell(&cpu, 1, 2), None);
        // $0200 is past the stack bottom
        assert_eq!(StackView.cell(&cpu, 2, 0), None);
        assert_eq!(StackView.cell(&cpu, 2, 1), None);
    }

    #[test]
    fn test_full_page_is_capped_by_page_size() {
        let mut cpu = CpuSnapshot::new(FlatMemory::new());
        cpu.registers.sp = 0x00;
        assert_eq!(StackView.row_count(&cpu), 255);
    }

    #[test]
    fn test_zero_width_stack_has_no_cells() {
        struct Flat(CpuSnapshot<FlatMemory>);

        impl InstructionDecoder for Flat {
            fn instruction_length(&self, address: Address) -> Result<u32, DecodeError> {
                self.0.instruction_length(address)
            }
        }

        impl DebugTarget for Flat {
            fn instruction_pointer(&self) -> Address {
                self.0.instruction_pointer()
            }

            fn register_count(&self) -> usize {
                self.0.register_count()
            }

            fn register(&self, index: usize) -> Option<Register> {
                self.0.register(index)
            }

            fn read_memory_byte(&self, address: Address) -> Option<u8> {
                self.0.read_memory_byte(address)
            }

            fn address_space_end(&self) -> Address {
                self.0.address_space_end()
            }

            fn stack_bounds(&self) -> StackBounds {
                StackBounds {
                    width: 0,
                    ..self.0.stack_bounds()
                }
            }
        }

        let target = Flat(CpuSnapshot::new(FlatMemory::new()));
        assert_eq!(StackView.row_count(&target), 0);
        assert_eq!(StackView.cell(&target, 0, 0), None);
        assert_eq!(StackView.cell(&target, 1, 1), None);
    }
}
