//! The debug target the views read from.
//!
//! `DebugTarget` is everything the debugger window needs from a stopped CPU:
//! its registers, its stack, its memory, and instruction decoding. The code
//! view row index itself only ever sees the `InstructionDecoder` supertrait.
//!
//! Targets are read while the emulator is stopped. The views never write.

use std::fmt;

use crate::debugger::Address;
use crate::disassembler::decoder::decode_at;
use crate::disassembler::formatter::format_instruction;
use crate::disassembler::InstructionDecoder;
use crate::error::DecodeError;
use crate::memory::MemoryBus;

/// A register value tagged with its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterValue {
    Byte(u8),
    Word(u16),
    DWord(u32),
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterValue::Byte(v) => write!(f, "0x{:02X}", v),
            RegisterValue::Word(v) => write!(f, "0x{:04X}", v),
            RegisterValue::DWord(v) => write!(f, "0x{:08X}", v),
        }
    }
}

/// Named register as shown in the registers view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    pub name: &'static str,
    pub value: RegisterValue,
}

/// Live part of the stack, in memory order.
///
/// `top` is the lowest live address and `bottom` the highest; the stack is
/// empty when `bottom < top`. `width` is the size of one stack slot in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackBounds {
    pub top: Address,
    pub bottom: Address,
    pub width: u32,
}

/// A stopped CPU as seen by the debugger.
pub trait DebugTarget: InstructionDecoder {
    /// Address of the next instruction to execute.
    fn instruction_pointer(&self) -> Address;

    fn register_count(&self) -> usize;

    /// Register `index`, or `None` past `register_count`.
    fn register(&self, index: usize) -> Option<Register>;

    /// Reads one byte, `None` if the address is not readable.
    fn read_memory_byte(&self, address: Address) -> Option<u8>;

    /// Little-endian word read.
    fn read_memory_word(&self, address: Address) -> Option<u16> {
        let lo = self.read_memory_byte(address)?;
        let hi = self.read_memory_byte(address.checked_add(1)?)?;
        Some(u16::from_le_bytes([lo, hi]))
    }

    /// Little-endian double word read.
    fn read_memory_dword(&self, address: Address) -> Option<u32> {
        let lo = self.read_memory_word(address)?;
        let hi = self.read_memory_word(address.checked_add(2)?)?;
        Some(u32::from(lo) | (u32::from(hi) << 16))
    }

    /// Highest readable address.
    fn address_space_end(&self) -> Address;

    fn stack_bounds(&self) -> StackBounds;

    /// Raw bytes of the instruction at `address`.
    fn instruction_bytes(&self, _address: Address) -> Result<Vec<u8>, DecodeError> {
        Err(DecodeError::Unsupported)
    }

    /// Assembly text of the instruction at `address`.
    fn instruction_text(&self, _address: Address) -> Result<String, DecodeError> {
        Err(DecodeError::Unsupported)
    }
}

/// 6502 register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers6502 {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: u8,
}

impl Default for Registers6502 {
    /// Power-on state after the reset sequence, before the vector is loaded.
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            p: 0x24,
        }
    }
}

const REGISTER_NAMES: [&str; 6] = ["A", "X", "Y", "SP", "PC", "P"];

/// Base of the 6502 hardware stack page.
const STACK_PAGE: Address = 0x0100;

/// 6502 registers plus memory, captured at a stopping point.
///
/// # Examples
///
/// ```
/// use nese_debug::{CpuSnapshot, DebugTarget, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x42]);
///
/// let mut cpu = CpuSnapshot::new(memory);
/// cpu.registers.pc = 0x8000;
///
/// assert_eq!(cpu.instruction_pointer(), 0x8000);
/// assert_eq!(cpu.instruction_text(0x8000).unwrap(), "LDA #$42");
/// ```
#[derive(Debug, Clone)]
pub struct CpuSnapshot<M: MemoryBus> {
    pub registers: Registers6502,
    pub memory: M,
}

impl<M: MemoryBus> CpuSnapshot<M> {
    pub fn new(memory: M) -> Self {
        Self {
            registers: Registers6502::default(),
            memory,
        }
    }

    pub fn with_registers(memory: M, registers: Registers6502) -> Self {
        Self { registers, memory }
    }
}

impl<M: MemoryBus> InstructionDecoder for CpuSnapshot<M> {
    fn instruction_length(&self, address: Address) -> Result<u32, DecodeError> {
        decode_at(&self.memory, address).map(|instr| u32::from(instr.size_bytes))
    }
}

impl<M: MemoryBus> DebugTarget for CpuSnapshot<M> {
    fn instruction_pointer(&self) -> Address {
        Address::from(self.registers.pc)
    }

    fn register_count(&self) -> usize {
        REGISTER_NAMES.len()
    }

    fn register(&self, index: usize) -> Option<Register> {
        let r = &self.registers;
        let value = match index {
            0 => RegisterValue::Byte(r.a),
            1 => RegisterValue::Byte(r.x),
            2 => RegisterValue::Byte(r.y),
            3 => RegisterValue::Byte(r.sp),
            4 => RegisterValue::Word(r.pc),
            5 => RegisterValue::Byte(r.p),
            _ => return None,
        };
        Some(Register {
            name: REGISTER_NAMES[index],
            value,
        })
    }

    fn read_memory_byte(&self, address: Address) -> Option<u8> {
        let address = u16::try_from(address).ok()?;
        Some(self.memory.read(address))
    }

    fn address_space_end(&self) -> Address {
        0xFFFF
    }

    fn stack_bounds(&self) -> StackBounds {
        // SP points at the next free slot, so the live stack starts above it
        StackBounds {
            top: STACK_PAGE + Address::from(self.registers.sp) + 1,
            bottom: STACK_PAGE + 0xFF,
            width: 1,
        }
    }

    fn instruction_bytes(&self, address: Address) -> Result<Vec<u8>, DecodeError> {
        decode_at(&self.memory, address).map(|instr| instr.bytes())
    }

    fn instruction_text(&self, address: Address) -> Result<String, DecodeError> {
        decode_at(&self.memory, address).map(|instr| format_instruction(&instr))
    }
}
