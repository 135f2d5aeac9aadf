//! # Debugger Views
//!
//! Plain data components behind the debugger window. Each view answers the
//! questions a table widget asks (how many rows, what is in this cell, how is
//! this row painted) and leaves widgets, repainting and input to a
//! toolkit-specific adapter.
//!
//! - `row_index` - lazy row/address mapping for the code view
//! - `code_view` - disassembly table and instruction pointer highlight
//! - `registers` - register name/value table
//! - `stack` - stack contents table
//! - `memory_view` - hex dump table
//! - `target` - the `DebugTarget` the views read from

pub mod code_view;
pub mod memory_view;
pub mod registers;
pub mod row_index;
pub mod stack;
pub mod target;

use std::ops::Range;

pub use code_view::{CodeView, IpUpdate};
pub use memory_view::MemoryView;
pub use registers::RegistersView;
pub use row_index::{InstructionRowIndex, RebaseReason};
pub use stack::StackView;
pub use target::{CpuSnapshot, DebugTarget, Register, RegisterValue, Registers6502, StackBounds};

/// Program counter value as seen by the debugger. Wide enough for any CPU
/// the front-end hosts; a 6502 only uses the low 16 bits.
pub type Address = u32;

/// 0-based row in a view, in display order.
pub type Row = usize;

/// Text shown for a cell whose data cannot be produced.
pub const INVALID_CELL: &str = "<invalid>";

/// Background colour of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Read side of a debugger table, generic over the target it reads.
///
/// `None` from `header` or `cell` means "no data" (an out-of-range section
/// or column), which an adapter renders as an empty cell.
pub trait TableView<T: ?Sized> {
    fn row_count(&self, target: &T) -> usize;

    fn column_count(&self) -> usize;

    fn header(&self, section: usize) -> Option<&'static str>;

    fn cell(&self, target: &T, row: Row, column: usize) -> Option<String>;

    /// Renders a block of rows, with empty strings for "no data".
    fn render(&self, target: &T, rows: Range<Row>) -> Vec<Vec<String>> {
        let end = rows.end.min(self.row_count(target));
        (rows.start..end)
            .map(|row| {
                (0..self.column_count())
                    .map(|column| self.cell(target, row, column).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// `0x%08X` rendering shared by every address column.
pub(crate) fn format_address(address: Address) -> String {
    format!("0x{:08X}", address)
}
