//! Register file for the DMG CPU.
//!
//! Eight 8-bit registers, the 16-bit `SP`/`PC`, and the flag nibble in
//! the top half of `F`. `BC`/`DE`/`HL` are views composed from their
//! 8-bit halves on demand; there is no separate 16-bit storage.

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        (self.f & (1 << flag as u8)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.f |= 1 << flag as u8;
        } else {
            self.f &= !(1 << flag as u8);
        }
        self.f &= 0xF0;
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.f = 0;
    }

    /// Restore the power-on register values.
    ///
    /// Without a boot ROM the cartridge is entered directly at 0x0100
    /// with the values the DMG boot ROM would have left behind; with a
    /// boot ROM present everything starts zeroed and execution begins
    /// at 0x0000.
    pub fn reset(&mut self, boot_rom_present: bool) {
        if boot_rom_present {
            *self = Registers::default();
        } else {
            self.a = 0x01;
            self.f = 0xB0;
            self.b = 0x00;
            self.c = 0x13;
            self.d = 0x00;
            self.e = 0xD8;
            self.h = 0x01;
            self.l = 0x4D;
            self.sp = 0xFFFE;
            self.pc = crate::ENTRY_POINT;
        }
    }
}
