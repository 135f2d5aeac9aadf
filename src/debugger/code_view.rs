//! Disassembly table.
//!
//! A fixed-height table of instructions starting at the view origin, with
//! the row of the current instruction pointer highlighted. Row/address
//! translation is delegated to [`InstructionRowIndex`]; this layer adds the
//! instruction pointer marker and cell formatting.

use crate::config::CodeViewConfig;
use crate::debugger::row_index::InstructionRowIndex;
use crate::debugger::target::DebugTarget;
use crate::debugger::{format_address, Address, Rgb, Row, TableView, INVALID_CELL};
use crate::disassembler::formatter::format_bytes;
use crate::disassembler::InstructionDecoder;

const HEADERS: [&str; 3] = ["Address", "Bytes", "Instruction"];

/// Background of the row holding the instruction pointer.
pub const INSTRUCTION_POINTER_HIGHLIGHT: Rgb = Rgb(255, 241, 129);

/// Rows an adapter must repaint after the instruction pointer moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpUpdate {
    /// Row now holding the instruction pointer.
    pub active_row: Row,

    /// Rows whose highlight changed: the previous row (when it is still in
    /// the view) and the new one. Empty when the pointer did not move.
    pub changed_rows: Vec<Row>,

    /// The view was rebased since the previous update, so every row changed.
    pub view_reset: bool,
}

#[derive(Debug)]
pub struct CodeView {
    index: InstructionRowIndex,
    instruction_pointer: Option<Address>,
    reset_pending: bool,
}

impl CodeView {
    /// Creates a code view anchored at address 0.
    pub fn new(config: CodeViewConfig) -> Self {
        Self {
            index: InstructionRowIndex::new(config, 0),
            instruction_pointer: None,
            reset_pending: false,
        }
    }

    pub fn index(&self) -> &InstructionRowIndex {
        &self.index
    }

    /// Re-anchors the view so that `origin` is row 0.
    ///
    /// The next [`update_instruction_pointer`] reports `view_reset`.
    ///
    /// [`update_instruction_pointer`]: CodeView::update_instruction_pointer
    pub fn reset(&mut self, origin: Address) {
        self.index.reset(origin);
        self.reset_pending = true;
    }

    /// Last instruction pointer passed to [`update_instruction_pointer`].
    ///
    /// [`update_instruction_pointer`]: CodeView::update_instruction_pointer
    pub fn instruction_pointer(&self) -> Option<Address> {
        self.instruction_pointer
    }

    pub fn row_for_address<D>(&mut self, address: Address, decoder: &D) -> Row
    where
        D: InstructionDecoder + ?Sized,
    {
        self.index.row_for_address(address, decoder)
    }

    pub fn address_for_row<D>(&self, row: Row, decoder: &D) -> Option<Address>
    where
        D: InstructionDecoder + ?Sized,
    {
        self.index.address_for_row(row, decoder)
    }

    /// Moves the highlight to `address` and reports what must be repainted.
    ///
    /// The previous highlight is resolved without rebasing, so it can never
    /// move the view away from the new row. When it cannot be reached only
    /// the new row is reported.
    pub fn update_instruction_pointer<D>(&mut self, address: Address, decoder: &D) -> IpUpdate
    where
        D: InstructionDecoder + ?Sized,
    {
        let epoch = self.index.epoch();
        let active_row = self.index.row_for_address(address, decoder);
        let view_reset = std::mem::take(&mut self.reset_pending) || self.index.epoch() != epoch;

        if self.instruction_pointer == Some(address) {
            return IpUpdate {
                active_row,
                changed_rows: Vec::new(),
                view_reset,
            };
        }

        let previous = self.instruction_pointer.replace(address);
        let mut changed_rows = Vec::with_capacity(2);
        if let Some(old_row) = previous.and_then(|old| self.index.find_row(old, decoder)) {
            if old_row != active_row {
                changed_rows.push(old_row);
            }
        }
        changed_rows.push(active_row);

        IpUpdate {
            active_row,
            changed_rows,
            view_reset,
        }
    }

    /// Background of `row`: highlighted when it holds the instruction pointer.
    pub fn row_background<D>(&self, row: Row, decoder: &D) -> Option<Rgb>
    where
        D: InstructionDecoder + ?Sized,
    {
        let address = self.index.address_for_row(row, decoder)?;
        (Some(address) == self.instruction_pointer).then_some(INSTRUCTION_POINTER_HIGHLIGHT)
    }
}

impl<T: DebugTarget + ?Sized> TableView<T> for CodeView {
    fn row_count(&self, _target: &T) -> usize {
        self.index.config().max_rows
    }

    fn column_count(&self) -> usize {
        HEADERS.len()
    }

    fn header(&self, section: usize) -> Option<&'static str> {
        HEADERS.get(section).copied()
    }

    fn cell(&self, target: &T, row: Row, column: usize) -> Option<String> {
        if column >= HEADERS.len() {
            return None;
        }

        let Some(address) = self.index.address_for_row(row, target) else {
            return Some(INVALID_CELL.to_string());
        };

        let text = match column {
            0 => Ok(format_address(address)),
            1 => target.instruction_bytes(address).map(|bytes| format_bytes(&bytes)),
            _ => target.instruction_text(address),
        };
        Some(text.unwrap_or_else(|_| INVALID_CELL.to_string()))
    }
}
