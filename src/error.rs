//! Error types shared by the decoder, the views and configuration loading.

use thiserror::Error;

use crate::debugger::Address;

/// Reasons an address cannot be decoded into an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The address lies outside the target's address space.
    #[error("address 0x{0:08X} is outside the address space")]
    AddressOutOfRange(Address),

    /// The byte at the address is not a documented opcode.
    #[error("illegal opcode 0x{opcode:02X} at 0x{address:08X}")]
    IllegalOpcode { address: Address, opcode: u8 },

    /// The instruction would run past the end of the address space.
    #[error("instruction at 0x{0:08X} runs past the end of the address space")]
    Truncated(Address),

    /// A decoder reported a zero-length instruction.
    #[error("decoder reported a zero-length instruction at 0x{0:08X}")]
    ZeroLength(Address),

    /// The target can measure instructions but not render them.
    #[error("disassembly is not supported by this target")]
    Unsupported,
}

/// Errors raised while loading a view configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for the expected shape.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A bound is zero or otherwise unusable.
    #[error("invalid configuration: {field} must be greater than zero")]
    InvalidBound { field: &'static str },
}
