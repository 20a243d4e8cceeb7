//! Decode/execute engine.
//!
//! A `Cpu` owns its register file and address space outright, so several
//! machines can coexist in one process and individual opcodes can be
//! tested in isolation. `step` is the only entry point the driver needs:
//! fetch one opcode byte at PC, dispatch it through the base table (or,
//! for the `0xCB` prefix, the extended table) and report the elapsed
//! cycle count. No instruction suspends; every call runs to completion.

pub mod cb;
pub mod opcode;

#[cfg(test)]
mod tests;

use crate::error::CoreError;
use crate::memory::AddressSpace;
use crate::registers::{Flag, Registers};

use opcode::Outcome;

/// Cycle cost of the cheapest instruction; also what a halted step costs.
pub const MIN_CYCLES: u32 = 4;

pub struct Cpu {
    pub regs: Registers,
    pub memory: AddressSpace,
    /// Set by HALT. Clearing it is owned by the external interrupt
    /// collaborator; while set, `step` performs no work.
    pub halted: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            memory: AddressSpace::default(),
            halted: false,
        };
        cpu.reset(false);
        cpu
    }

    /// Reset to one of the two literal power-on states.
    pub fn reset(&mut self, boot_rom_present: bool) {
        self.regs.reset(boot_rom_present);
        self.halted = false;
    }

    /// Map a cartridge image into the low 32 KiB of the address space.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), CoreError> {
        self.memory.load_image(image)
    }

    /// Fetch and execute one instruction, returning its cycle cost.
    ///
    /// A halted processor consumes the minimum cycle cost and leaves
    /// registers and memory untouched until the external driver clears
    /// `halted`.
    pub fn step(&mut self) -> Result<u32, CoreError> {
        if self.halted {
            return Ok(MIN_CYCLES);
        }
        let opcode = self.fetch_byte();
        self.execute(opcode)
    }

    /// Dispatch one already-fetched opcode byte.
    ///
    /// Conditional control flow reports the taken or not-taken cost from
    /// the dispatch table; the `0xCB` prefix resolves its cost from the
    /// extended table instead.
    pub fn execute(&mut self, opcode: u8) -> Result<u32, CoreError> {
        let entry = &opcode::BASE[opcode as usize];
        log::trace!("{:#06x} {}", self.regs.pc.wrapping_sub(1), entry.mnemonic);
        match (entry.exec)(self) {
            Outcome::Done => Ok(entry.cycles),
            Outcome::Taken => Ok(entry.cycles_taken),
            Outcome::Prefixed(cycles) => Ok(cycles),
            Outcome::Illegal => {
                let pc = self.regs.pc.wrapping_sub(1);
                log::warn!("illegal opcode {opcode:#04x} at {pc:#06x}");
                Err(CoreError::IllegalOpcode { opcode, pc })
            }
        }
    }

    /// Program counter snapshot for the presentation side.
    #[inline]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Stack pointer snapshot for the presentation side.
    #[inline]
    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    // --- fetch and stack plumbing ------------------------------------

    /// Read the byte at PC and advance PC by one, wrapping at 0xFFFF.
    #[inline]
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let byte = self.memory.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    /// Fetch a 16-bit immediate, low byte first.
    #[inline]
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    #[inline]
    pub(crate) fn push_word(&mut self, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        // Stack grows downward: memory[SP-1] = high, memory[SP-2] = low.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write_byte(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write_byte(self.regs.sp, lo);
    }

    #[inline]
    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.memory.read_byte(self.regs.sp) as u16;
        let hi = self.memory.read_byte(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    #[inline]
    pub(crate) fn read_hl(&self) -> u8 {
        self.memory.read_byte(self.regs.hl())
    }

    #[inline]
    pub(crate) fn write_hl(&mut self, value: u8) {
        self.memory.write_byte(self.regs.hl(), value)
    }

    // --- control-flow helpers ----------------------------------------

    /// Relative jump used by JR/JR cc. The signed displacement applies
    /// after the displacement byte has been consumed, so a taken jump
    /// lands at `address_of_jr + 2 + e`.
    pub(crate) fn jr(&mut self, cond: bool) -> Outcome {
        let offset = self.fetch_byte() as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            Outcome::Taken
        } else {
            Outcome::Done
        }
    }

    /// Absolute jump used by JP cc,nn. The immediate is always consumed.
    pub(crate) fn jp(&mut self, cond: bool) -> Outcome {
        let addr = self.fetch_word();
        if cond {
            self.regs.pc = addr;
            Outcome::Taken
        } else {
            Outcome::Done
        }
    }

    /// CALL cc,nn: push the return address, then jump.
    pub(crate) fn call(&mut self, cond: bool) -> Outcome {
        let addr = self.fetch_word();
        if cond {
            let ret = self.regs.pc;
            self.push_word(ret);
            self.regs.pc = addr;
            Outcome::Taken
        } else {
            Outcome::Done
        }
    }

    /// RET cc.
    pub(crate) fn ret(&mut self, cond: bool) -> Outcome {
        if cond {
            self.regs.pc = self.pop_word();
            Outcome::Taken
        } else {
            Outcome::Done
        }
    }

    /// RST: push the return address and jump to a fixed vector.
    pub(crate) fn rst(&mut self, vector: u16) {
        let ret = self.regs.pc;
        self.push_word(ret);
        self.regs.pc = vector;
    }

    // --- 8-bit ALU ----------------------------------------------------

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true). Carry is
    /// detected in a widened 16-bit intermediate, half-carry on the low
    /// nibble sum.
    pub(crate) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.regs.flag(Flag::C)) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::H, (half & 0x10) != 0);
        self.regs.set_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    pub(crate) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.sub_flags(value, use_carry);
        self.regs.a = result;
    }

    /// CP: SUB flags without storing the result.
    pub(crate) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = (use_carry && self.regs.flag(Flag::C)) as i16;

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, half < 0);
        self.regs.set_flag(Flag::C, full < 0);
        result
    }

    pub(crate) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::H, true);
    }

    pub(crate) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
    }

    pub(crate) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
    }

    /// INC r / INC (HL): carry is not affected.
    pub(crate) fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, (value & 0x0F) + 1 > 0x0F);
        result
    }

    /// DEC r / DEC (HL): carry is not affected.
    pub(crate) fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    // --- 16-bit ALU ---------------------------------------------------

    /// ADD HL,rr: half-carry out of bit 11, carry out of bit 15, zero
    /// flag untouched.
    pub(crate) fn add_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let full = hl as u32 + value as u32;

        self.regs.set_flag(Flag::N, false);
        self.regs
            .set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.regs.set_flag(Flag::C, full > 0xFFFF);
        self.regs.set_hl(full as u16);
    }

    /// SP plus a signed 8-bit displacement, shared by ADD SP,e and
    /// LD HL,SP+e. Carry and half-carry come from the unsigned byte
    /// arithmetic on SP's low byte/nibble regardless of the
    /// displacement's sign; Z and N are always cleared.
    pub(crate) fn add_sp_e(&mut self) -> u16 {
        let e = self.fetch_byte();
        let sp = self.regs.sp;
        let result = sp.wrapping_add(e as i8 as u16);

        self.regs.clear_flags();
        self.regs
            .set_flag(Flag::H, (sp & 0x000F) + (e as u16 & 0x000F) > 0x000F);
        self.regs.set_flag(Flag::C, (sp & 0x00FF) + e as u16 > 0x00FF);
        result
    }

    // --- rotate / shift / bit primitives ------------------------------
    //
    // These compute the zero flag from the result, as the CB-prefixed
    // forms require; the accumulator short forms (RLCA and friends)
    // clear Z afterwards in their table handlers.

    pub(crate) fn rlc(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(1);
        self.set_rotate_flags(result, value & 0x80 != 0);
        result
    }

    pub(crate) fn rrc(&mut self, value: u8) -> u8 {
        let result = value.rotate_right(1);
        self.set_rotate_flags(result, value & 0x01 != 0);
        result
    }

    /// Rotate left through the carry flag.
    pub(crate) fn rl(&mut self, value: u8) -> u8 {
        let carry_in = self.regs.flag(Flag::C) as u8;
        let result = (value << 1) | carry_in;
        self.set_rotate_flags(result, value & 0x80 != 0);
        result
    }

    /// Rotate right through the carry flag.
    pub(crate) fn rr(&mut self, value: u8) -> u8 {
        let carry_in = (self.regs.flag(Flag::C) as u8) << 7;
        let result = (value >> 1) | carry_in;
        self.set_rotate_flags(result, value & 0x01 != 0);
        result
    }

    pub(crate) fn sla(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.set_rotate_flags(result, value & 0x80 != 0);
        result
    }

    /// Arithmetic shift right: bit 7 is preserved.
    pub(crate) fn sra(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (value & 0x80);
        self.set_rotate_flags(result, value & 0x01 != 0);
        result
    }

    pub(crate) fn srl(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.set_rotate_flags(result, value & 0x01 != 0);
        result
    }

    /// Exchange the two nibbles. Only Z can end up set.
    pub(crate) fn swap(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(4);
        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        result
    }

    fn set_rotate_flags(&mut self, result: u8, carry: bool) {
        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::C, carry);
    }

    /// BIT n: Z reflects the tested bit, carry is untouched.
    pub(crate) fn bit(&mut self, n: u8, value: u8) {
        self.regs.set_flag(Flag::Z, value & (1 << n) == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, true);
    }

    /// Decimal adjust after a BCD add/subtract.
    ///
    /// N/H/C decide which nibble corrections apply; carry is set when
    /// the high correction fires and never cleared, half-carry always
    /// ends up clear.
    pub(crate) fn daa(&mut self) {
        let negative = self.regs.flag(Flag::N);
        let half_carry = self.regs.flag(Flag::H);
        let carry = self.regs.flag(Flag::C);

        let mut a = self.regs.a;
        let mut correction = 0u8;
        if half_carry || (!negative && (a & 0x0F) > 0x09) {
            correction |= 0x06;
        }
        if carry || (!negative && a > 0x99) {
            correction |= 0x60;
            self.regs.set_flag(Flag::C, true);
        }
        a = if negative {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };

        self.regs.set_flag(Flag::Z, a == 0);
        self.regs.set_flag(Flag::H, false);
        self.regs.a = a;
    }
}

/// Mnemonic of a base opcode, `"???"` for the unpopulated entries.
pub fn mnemonic(opcode: u8) -> &'static str {
    opcode::BASE[opcode as usize].mnemonic
}

/// Mnemonic of a CB-prefixed opcode.
pub fn extended_mnemonic(opcode: u8) -> &'static str {
    cb::EXTENDED[opcode as usize].mnemonic
}
