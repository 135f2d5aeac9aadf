//! # Memory Bus Abstraction
//!
//! The debugger never owns emulated memory. It reads it through the
//! `MemoryBus` trait, so the same views work over a flat test image, a
//! snapshot of NES CPU address space, or a live mapper.
//!
//! Reads are side-effect free from the debugger's point of view. A bus that
//! maps registers with read side effects should hand the debugger a snapshot
//! instead of the live device.

/// Memory bus trait for reading and writing bytes in 16-bit address space.
///
/// # Examples
///
/// ```
/// use nese_debug::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified address. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified address. Read-only regions may ignore it.
    fn write(&mut self, addr: u16, value: u8);
}

impl<M: MemoryBus + ?Sized> MemoryBus for &mut M {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// Simple 64KB flat memory.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use nese_debug::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x42, 0xEA]);
///
/// assert_eq!(memory.read(0x8000), 0xA9);
/// assert_eq!(memory.read(0x8002), 0xEA);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory").finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
