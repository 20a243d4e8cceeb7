//! DotBoy CPU core.
//!
//! Emulates the LR35902-style processor of the original Game Boy (DMG):
//! an 8-bit accumulator machine with a 16-bit address space, 256 base
//! opcodes and 256 `0xCB`-prefixed extended opcodes. The crate owns the
//! register file, a flat unbanked 64 KiB address space and the
//! decode/execute tables; everything else (PPU, APU, cartridge mappers,
//! interrupts, input) is the caller's business.
//!
//! The driver loop is a plain synchronous call chain:
//!
//! ```
//! use dotboy_core::Cpu;
//!
//! let mut cpu = Cpu::new();
//! cpu.load_image(&[0u8; 0x8000]).unwrap();
//! cpu.reset(false);
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 4); // NOP
//! ```

pub mod cpu;
pub mod error;
pub mod memory;
pub mod registers;

pub use cpu::Cpu;
pub use error::CoreError;
pub use memory::AddressSpace;
pub use registers::{Flag, Registers};

/// Size of the flat address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;
/// Number of image bytes mapped at power-on (0x0000..0x8000).
pub const IMAGE_SIZE: usize = 0x8000;
/// Address where cartridge execution begins when no boot ROM is present.
pub const ENTRY_POINT: u16 = 0x0100;
