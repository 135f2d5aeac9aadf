//! WASM API for the debugger views.
//!
//! A `DebuggerSession` owns a stopped-point CPU snapshot and the code view
//! built over it. JavaScript drives it: load memory, set registers, move the
//! instruction pointer, then pull cell text for whatever rows are visible.

use crate::debugger::target::{CpuSnapshot, Registers6502};
use crate::debugger::{Address, CodeView, RegistersView, Row, StackView, TableView};
use crate::disassembler::formatter::{format_bytes, format_instruction};
use crate::disassembler::listing;
use crate::{CodeViewConfig, FlatMemory, MemoryBus};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: String,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> String {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Debugger window state for JavaScript
#[wasm_bindgen]
pub struct DebuggerSession {
    cpu: CpuSnapshot<FlatMemory>,
    code: CodeView,
    on_rows_changed: js_sys::Function,
}

#[wasm_bindgen]
impl DebuggerSession {
    /// Create a session with default bounds.
    ///
    /// `on_rows_changed(rows, view_reset)` is called whenever the
    /// instruction pointer highlight moves or memory writes invalidate the
    /// code table.
    #[wasm_bindgen(constructor)]
    pub fn new(on_rows_changed: js_sys::Function) -> Self {
        Self::build(CodeViewConfig::default(), on_rows_changed)
    }

    /// Create a session with bounds parsed from a JSON configuration.
    pub fn with_config(config_json: &str, on_rows_changed: js_sys::Function) -> Result<DebuggerSession, JsError> {
        let config = CodeViewConfig::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::build(config, on_rows_changed))
    }

    /// Copy a program image into memory. Does not move the instruction pointer.
    pub fn load_program(&mut self, start_addr: u16, program: &[u8]) {
        self.cpu.memory.load(start_addr, program);
        self.invalidate_code();
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory.write(addr, value);
        self.invalidate_code();
    }

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory.read(addr)
    }

    /// Replace the register file with the values of a stopped CPU.
    pub fn set_registers(&mut self, a: u8, x: u8, y: u8, sp: u8, pc: u16, p: u8) {
        self.cpu.registers = Registers6502 { a, x, y, sp, pc, p };
    }

    /// Move the highlight to the current PC and return its row.
    pub fn update_instruction_pointer(&mut self) -> u32 {
        let pc = Address::from(self.cpu.registers.pc);
        let update = self.code.update_instruction_pointer(pc, &self.cpu);

        if !update.changed_rows.is_empty() || update.view_reset {
            self.notify_rows_changed(&update.changed_rows, update.view_reset);
        }

        update.active_row as u32
    }

    /// Row showing `addr`, rebasing the view if it is not reachable.
    pub fn row_for_address(&mut self, addr: u16) -> u32 {
        self.code.row_for_address(Address::from(addr), &self.cpu) as u32
    }

    /// Address of row 0.
    #[wasm_bindgen(getter)]
    pub fn origin(&self) -> u32 {
        self.code.index().origin()
    }

    pub fn code_row_count(&self) -> u32 {
        self.code.row_count(&self.cpu) as u32
    }

    pub fn code_cell(&self, row: u32, column: u32) -> Option<String> {
        self.code.cell(&self.cpu, row as usize, column as usize)
    }

    /// Whether `row` holds the instruction pointer.
    pub fn code_row_highlighted(&self, row: u32) -> bool {
        self.code.row_background(row as usize, &self.cpu).is_some()
    }

    pub fn register_rows(&self) -> u32 {
        RegistersView.row_count(&self.cpu) as u32
    }

    pub fn register_cell(&self, row: u32, column: u32) -> Option<String> {
        RegistersView.cell(&self.cpu, row as usize, column as usize)
    }

    pub fn stack_rows(&self) -> u32 {
        StackView.row_count(&self.cpu) as u32
    }

    pub fn stack_cell(&self, row: u32, column: u32) -> Option<String> {
        StackView.cell(&self.cpu, row as usize, column as usize)
    }

    /// Linear listing of `count` instructions from `start_addr`
    pub fn listing(&self, start_addr: u16, count: u32) -> Vec<JsValue> {
        listing(&self.cpu.memory, start_addr, count as usize)
            .iter()
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes: format_bytes(&instr.bytes()),
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}

impl DebuggerSession {
    fn build(config: CodeViewConfig, on_rows_changed: js_sys::Function) -> Self {
        Self {
            cpu: CpuSnapshot::new(FlatMemory::new()),
            code: CodeView::new(config),
            on_rows_changed,
        }
    }

    /// Decoded rows may be stale after a memory write: drop them and tell
    /// the front-end to repaint the whole code table.
    fn invalidate_code(&mut self) {
        let origin = self.code.index().origin();
        self.code.reset(origin);
        self.notify_rows_changed(&[], true);
    }

    fn notify_rows_changed(&self, rows: &[Row], view_reset: bool) {
        let rows: js_sys::Array = rows.iter().map(|&row| JsValue::from(row as u32)).collect();
        let _ = self
            .on_rows_changed
            .call2(&JsValue::NULL, &rows, &JsValue::from_bool(view_reset));
    }
}
