//! Flat 64 KiB address space.
//!
//! The simplified memory model has no banking: a cartridge image's first
//! 32 KiB is copied verbatim to 0x0000..0x8000 at load time and the
//! whole range, image region included, stays writable afterwards.

use crate::error::CoreError;
use crate::{IMAGE_SIZE, MEMORY_SIZE};

pub struct AddressSpace {
    buffer: Box<[u8; MEMORY_SIZE]>,
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self {
            buffer: Box::new([0; MEMORY_SIZE]),
        }
    }
}

impl AddressSpace {
    #[inline]
    pub fn read_byte(&self, address: u16) -> u8 {
        self.buffer[address as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, address: u16, byte: u8) {
        self.buffer[address as usize] = byte;
    }

    /// Copy the first 32 KiB of a cartridge image into 0x0000..0x8000.
    ///
    /// Fails without touching the buffer when the image is shorter than
    /// 32 KiB. Bytes past the first 32 KiB belong to banked cartridge
    /// formats and are ignored here.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), CoreError> {
        if image.len() < IMAGE_SIZE {
            return Err(CoreError::ImageTooShort { len: image.len() });
        }
        self.buffer[..IMAGE_SIZE].copy_from_slice(&image[..IMAGE_SIZE]);
        log::debug!("loaded {:#06x} image bytes", IMAGE_SIZE);
        Ok(())
    }

    /// The full 64 KiB contents, for presentation-side snapshots.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..]
    }
}
