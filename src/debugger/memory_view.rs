//! Hex dump table over the target's whole address space.

use crate::debugger::target::DebugTarget;
use crate::debugger::{format_address, Address, Row, TableView};

const HEADERS: [&str; 3] = ["Address", "Bytes", "ASCII"];

#[derive(Debug, Clone, Copy)]
pub struct MemoryView {
    bytes_per_row: u32,
}

/// Row width of the default view.
const BYTES_PER_ROW: u32 = 16;

impl MemoryView {
    /// Hex dump with `bytes_per_row` bytes per row, or `None` if it is zero.
    pub fn new(bytes_per_row: u32) -> Option<Self> {
        (bytes_per_row > 0).then_some(Self { bytes_per_row })
    }

    /// First address shown in `row`.
    pub fn row_address(&self, row: Row) -> Option<Address> {
        Address::try_from(row).ok()?.checked_mul(self.bytes_per_row)
    }

    fn row_bytes<T: DebugTarget + ?Sized>(&self, target: &T, start: Address) -> Vec<Option<u8>> {
        (0..self.bytes_per_row)
            .map(|i| start.checked_add(i).and_then(|a| target.read_memory_byte(a)))
            .collect()
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            bytes_per_row: BYTES_PER_ROW,
        }
    }
}

impl<T: DebugTarget + ?Sized> TableView<T> for MemoryView {
    fn row_count(&self, target: &T) -> usize {
        let rows = u64::from(target.address_space_end()) / u64::from(self.bytes_per_row) + 1;
        usize::try_from(rows).unwrap_or(usize::MAX)
    }

    fn column_count(&self) -> usize {
        HEADERS.len()
    }

    fn header(&self, section: usize) -> Option<&'static str> {
        HEADERS.get(section).copied()
    }

    fn cell(&self, target: &T, row: Row, column: usize) -> Option<String> {
        let start = self.row_address(row)?;
        if start > target.address_space_end() {
            return None;
        }

        match column {
            0 => Some(format_address(start)),
            1 => Some(
                self.row_bytes(target, start)
                    .iter()
                    .map(|b| b.map_or_else(|| "??".to_string(), |b| format!("{:02X}", b)))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            2 => Some(
                self.row_bytes(target, start)
                    .iter()
                    .map(|b| match b {
                        Some(b) if b.is_ascii_graphic() || *b == b' ' => char::from(*b),
                        _ => '.',
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}
