//! Error taxonomy for the CPU core.
//!
//! Both variants are returned to the immediate caller; the driver
//! decides whether to stop the machine, surface a message, or keep
//! going. Arithmetic overflow is never an error — 8- and 16-bit
//! operations wrap by contract and flags carry the overflow/borrow
//! information.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The supplied cartridge image does not cover the mapped 32 KiB
    /// window; the address space is left unmodified.
    #[error("cartridge image too short: {len} bytes, need at least 32768")]
    ImageTooShort { len: usize },

    /// Dispatch reached an opcode byte with no defined operation.
    /// `pc` is the address the byte was fetched from.
    #[error("illegal opcode {opcode:#04x} at {pc:#06x}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}
