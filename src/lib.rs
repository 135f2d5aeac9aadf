//! # NES Debugger Core
//!
//! Data side of the debugger window of a 6502-based (NES) emulator: a
//! disassembly table with instruction pointer tracking, plus register, stack
//! and memory tables. Widgets, painting and input belong to a front-end
//! adapter; this crate only answers "what goes in row N, column M".
//!
//! ## Quick Start
//!
//! ```rust
//! use nese_debug::{CodeView, CodeViewConfig, CpuSnapshot, FlatMemory, TableView};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x8000, &[0xA9, 0x42, 0x8D, 0x00, 0x20, 0x4C, 0x00, 0x80]);
//!
//! let mut cpu = CpuSnapshot::new(memory);
//! cpu.registers.pc = 0x8005;
//!
//! let mut code = CodeView::new(CodeViewConfig::default());
//! code.reset(0x8000);
//!
//! let update = code.update_instruction_pointer(0x8005, &cpu);
//! assert_eq!(update.active_row, 2);
//! assert_eq!(code.cell(&cpu, 2, 2).as_deref(), Some("JMP $8000"));
//! ```
//!
//! ## Architecture
//!
//! - **Lazy code view**: rows are mapped to instruction addresses on demand by
//!   decoding forward from the closest known row (`debugger::row_index`).
//! - **One capability in**: the row index only needs instruction lengths, via
//!   the `InstructionDecoder` trait; closures qualify.
//! - **Table-driven decoding**: all opcode metadata lives in `OPCODE_TABLE`.
//! - **Toolkit-free views**: every table implements `TableView`.
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumerations
//! - `opcodes` - Opcode metadata table
//! - `memory` - MemoryBus trait and implementations
//! - `disassembler` - Instruction decoding and formatting
//! - `debugger` - Row index and debugger views
//! - `config` - View bounds
//! - `error` - Error types

pub mod addressing;
pub mod config;
pub mod debugger;
pub mod disassembler;
pub mod error;
pub mod memory;
pub mod opcodes;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::CodeViewConfig;
pub use debugger::{
    Address, CodeView, CpuSnapshot, DebugTarget, InstructionRowIndex, IpUpdate, MemoryView,
    RebaseReason, Register, RegisterValue, Registers6502, RegistersView, Rgb, Row, StackBounds,
    StackView, TableView, INVALID_CELL,
};
pub use disassembler::{disassemble, Disassembler6502, Instruction, InstructionDecoder};
pub use error::{ConfigError, DecodeError};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
