//! Extended ("CB-prefixed") instruction set dispatch table.
//!
//! Reached through base opcode 0xCB, which fetches one more byte and
//! resolves it against this flat 256-entry table. The layout is regular:
//! rows of eight in the register order B, C, D, E, H, L, (HL), A —
//! rotates and shifts in 0x00..0x40, BIT in 0x40..0x80, RES in
//! 0x80..0xC0, SET in 0xC0..0x100. There are no holes and no
//! conditional costs: register forms take 8 cycles, `BIT n, (HL)` 12,
//! every other (HL) form 16.

use super::Cpu;

pub struct ExtOpcode {
    pub mnemonic: &'static str,
    pub cycles: u32,
    pub(crate) exec: fn(&mut Cpu),
}

const fn ext(mnemonic: &'static str, cycles: u32, exec: fn(&mut Cpu)) -> ExtOpcode {
    ExtOpcode {
        mnemonic,
        cycles,
        exec,
    }
}

impl Cpu {
    /// Fetch and execute one extended opcode, returning its cycle cost.
    pub(crate) fn execute_extended(&mut self) -> u32 {
        let opcode = self.fetch_byte();
        let entry = &EXTENDED[opcode as usize];
        log::trace!("{:#06x} {}", self.regs.pc.wrapping_sub(2), entry.mnemonic);
        (entry.exec)(self);
        entry.cycles
    }
}

pub(crate) static EXTENDED: [ExtOpcode; 256] = [
    // 0x0_: RLC / RRC
    ext("RLC B", 8, |c| {
        let v = c.rlc(c.regs.b);
        c.regs.b = v;
    }),
    ext("RLC C", 8, |c| {
        let v = c.rlc(c.regs.c);
        c.regs.c = v;
    }),
    ext("RLC D", 8, |c| {
        let v = c.rlc(c.regs.d);
        c.regs.d = v;
    }),
    ext("RLC E", 8, |c| {
        let v = c.rlc(c.regs.e);
        c.regs.e = v;
    }),
    ext("RLC H", 8, |c| {
        let v = c.rlc(c.regs.h);
        c.regs.h = v;
    }),
    ext("RLC L", 8, |c| {
        let v = c.rlc(c.regs.l);
        c.regs.l = v;
    }),
    ext("RLC (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.rlc(v);
        c.write_hl(r);
    }),
    ext("RLC A", 8, |c| {
        let v = c.rlc(c.regs.a);
        c.regs.a = v;
    }),
    ext("RRC B", 8, |c| {
        let v = c.rrc(c.regs.b);
        c.regs.b = v;
    }),
    ext("RRC C", 8, |c| {
        let v = c.rrc(c.regs.c);
        c.regs.c = v;
    }),
    ext("RRC D", 8, |c| {
        let v = c.rrc(c.regs.d);
        c.regs.d = v;
    }),
    ext("RRC E", 8, |c| {
        let v = c.rrc(c.regs.e);
        c.regs.e = v;
    }),
    ext("RRC H", 8, |c| {
        let v = c.rrc(c.regs.h);
        c.regs.h = v;
    }),
    ext("RRC L", 8, |c| {
        let v = c.rrc(c.regs.l);
        c.regs.l = v;
    }),
    ext("RRC (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.rrc(v);
        c.write_hl(r);
    }),
    ext("RRC A", 8, |c| {
        let v = c.rrc(c.regs.a);
        c.regs.a = v;
    }),
    // 0x1_: RL / RR
    ext("RL B", 8, |c| {
        let v = c.rl(c.regs.b);
        c.regs.b = v;
    }),
    ext("RL C", 8, |c| {
        let v = c.rl(c.regs.c);
        c.regs.c = v;
    }),
    ext("RL D", 8, |c| {
        let v = c.rl(c.regs.d);
        c.regs.d = v;
    }),
    ext("RL E", 8, |c| {
        let v = c.rl(c.regs.e);
        c.regs.e = v;
    }),
    ext("RL H", 8, |c| {
        let v = c.rl(c.regs.h);
        c.regs.h = v;
    }),
    ext("RL L", 8, |c| {
        let v = c.rl(c.regs.l);
        c.regs.l = v;
    }),
    ext("RL (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.rl(v);
        c.write_hl(r);
    }),
    ext("RL A", 8, |c| {
        let v = c.rl(c.regs.a);
        c.regs.a = v;
    }),
    ext("RR B", 8, |c| {
        let v = c.rr(c.regs.b);
        c.regs.b = v;
    }),
    ext("RR C", 8, |c| {
        let v = c.rr(c.regs.c);
        c.regs.c = v;
    }),
    ext("RR D", 8, |c| {
        let v = c.rr(c.regs.d);
        c.regs.d = v;
    }),
    ext("RR E", 8, |c| {
        let v = c.rr(c.regs.e);
        c.regs.e = v;
    }),
    ext("RR H", 8, |c| {
        let v = c.rr(c.regs.h);
        c.regs.h = v;
    }),
    ext("RR L", 8, |c| {
        let v = c.rr(c.regs.l);
        c.regs.l = v;
    }),
    ext("RR (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.rr(v);
        c.write_hl(r);
    }),
    ext("RR A", 8, |c| {
        let v = c.rr(c.regs.a);
        c.regs.a = v;
    }),
    // 0x2_: SLA / SRA
    ext("SLA B", 8, |c| {
        let v = c.sla(c.regs.b);
        c.regs.b = v;
    }),
    ext("SLA C", 8, |c| {
        let v = c.sla(c.regs.c);
        c.regs.c = v;
    }),
    ext("SLA D", 8, |c| {
        let v = c.sla(c.regs.d);
        c.regs.d = v;
    }),
    ext("SLA E", 8, |c| {
        let v = c.sla(c.regs.e);
        c.regs.e = v;
    }),
    ext("SLA H", 8, |c| {
        let v = c.sla(c.regs.h);
        c.regs.h = v;
    }),
    ext("SLA L", 8, |c| {
        let v = c.sla(c.regs.l);
        c.regs.l = v;
    }),
    ext("SLA (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.sla(v);
        c.write_hl(r);
    }),
    ext("SLA A", 8, |c| {
        let v = c.sla(c.regs.a);
        c.regs.a = v;
    }),
    ext("SRA B", 8, |c| {
        let v = c.sra(c.regs.b);
        c.regs.b = v;
    }),
    ext("SRA C", 8, |c| {
        let v = c.sra(c.regs.c);
        c.regs.c = v;
    }),
    ext("SRA D", 8, |c| {
        let v = c.sra(c.regs.d);
        c.regs.d = v;
    }),
    ext("SRA E", 8, |c| {
        let v = c.sra(c.regs.e);
        c.regs.e = v;
    }),
    ext("SRA H", 8, |c| {
        let v = c.sra(c.regs.h);
        c.regs.h = v;
    }),
    ext("SRA L", 8, |c| {
        let v = c.sra(c.regs.l);
        c.regs.l = v;
    }),
    ext("SRA (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.sra(v);
        c.write_hl(r);
    }),
    ext("SRA A", 8, |c| {
        let v = c.sra(c.regs.a);
        c.regs.a = v;
    }),
    // 0x3_: SWAP / SRL
    ext("SWAP B", 8, |c| {
        let v = c.swap(c.regs.b);
        c.regs.b = v;
    }),
    ext("SWAP C", 8, |c| {
        let v = c.swap(c.regs.c);
        c.regs.c = v;
    }),
    ext("SWAP D", 8, |c| {
        let v = c.swap(c.regs.d);
        c.regs.d = v;
    }),
    ext("SWAP E", 8, |c| {
        let v = c.swap(c.regs.e);
        c.regs.e = v;
    }),
    ext("SWAP H", 8, |c| {
        let v = c.swap(c.regs.h);
        c.regs.h = v;
    }),
    ext("SWAP L", 8, |c| {
        let v = c.swap(c.regs.l);
        c.regs.l = v;
    }),
    ext("SWAP (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.swap(v);
        c.write_hl(r);
    }),
    ext("SWAP A", 8, |c| {
        let v = c.swap(c.regs.a);
        c.regs.a = v;
    }),
    ext("SRL B", 8, |c| {
        let v = c.srl(c.regs.b);
        c.regs.b = v;
    }),
    ext("SRL C", 8, |c| {
        let v = c.srl(c.regs.c);
        c.regs.c = v;
    }),
    ext("SRL D", 8, |c| {
        let v = c.srl(c.regs.d);
        c.regs.d = v;
    }),
    ext("SRL E", 8, |c| {
        let v = c.srl(c.regs.e);
        c.regs.e = v;
    }),
    ext("SRL H", 8, |c| {
        let v = c.srl(c.regs.h);
        c.regs.h = v;
    }),
    ext("SRL L", 8, |c| {
        let v = c.srl(c.regs.l);
        c.regs.l = v;
    }),
    ext("SRL (HL)", 16, |c| {
        let v = c.read_hl();
        let r = c.srl(v);
        c.write_hl(r);
    }),
    ext("SRL A", 8, |c| {
        let v = c.srl(c.regs.a);
        c.regs.a = v;
    }),
    // 0x4_: BIT 0 / BIT 1
    ext("BIT 0, B", 8, |c| {
        let v = c.regs.b;
        c.bit(0, v);
    }),
    ext("BIT 0, C", 8, |c| {
        let v = c.regs.c;
        c.bit(0, v);
    }),
    ext("BIT 0, D", 8, |c| {
        let v = c.regs.d;
        c.bit(0, v);
    }),
    ext("BIT 0, E", 8, |c| {
        let v = c.regs.e;
        c.bit(0, v);
    }),
    ext("BIT 0, H", 8, |c| {
        let v = c.regs.h;
        c.bit(0, v);
    }),
    ext("BIT 0, L", 8, |c| {
        let v = c.regs.l;
        c.bit(0, v);
    }),
    ext("BIT 0, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(0, v);
    }),
    ext("BIT 0, A", 8, |c| {
        let v = c.regs.a;
        c.bit(0, v);
    }),
    ext("BIT 1, B", 8, |c| {
        let v = c.regs.b;
        c.bit(1, v);
    }),
    ext("BIT 1, C", 8, |c| {
        let v = c.regs.c;
        c.bit(1, v);
    }),
    ext("BIT 1, D", 8, |c| {
        let v = c.regs.d;
        c.bit(1, v);
    }),
    ext("BIT 1, E", 8, |c| {
        let v = c.regs.e;
        c.bit(1, v);
    }),
    ext("BIT 1, H", 8, |c| {
        let v = c.regs.h;
        c.bit(1, v);
    }),
    ext("BIT 1, L", 8, |c| {
        let v = c.regs.l;
        c.bit(1, v);
    }),
    ext("BIT 1, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(1, v);
    }),
    ext("BIT 1, A", 8, |c| {
        let v = c.regs.a;
        c.bit(1, v);
    }),
    // 0x5_: BIT 2 / BIT 3
    ext("BIT 2, B", 8, |c| {
        let v = c.regs.b;
        c.bit(2, v);
    }),
    ext("BIT 2, C", 8, |c| {
        let v = c.regs.c;
        c.bit(2, v);
    }),
    ext("BIT 2, D", 8, |c| {
        let v = c.regs.d;
        c.bit(2, v);
    }),
    ext("BIT 2, E", 8, |c| {
        let v = c.regs.e;
        c.bit(2, v);
    }),
    ext("BIT 2, H", 8, |c| {
        let v = c.regs.h;
        c.bit(2, v);
    }),
    ext("BIT 2, L", 8, |c| {
        let v = c.regs.l;
        c.bit(2, v);
    }),
    ext("BIT 2, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(2, v);
    }),
    ext("BIT 2, A", 8, |c| {
        let v = c.regs.a;
        c.bit(2, v);
    }),
    ext("BIT 3, B", 8, |c| {
        let v = c.regs.b;
        c.bit(3, v);
    }),
    ext("BIT 3, C", 8, |c| {
        let v = c.regs.c;
        c.bit(3, v);
    }),
    ext("BIT 3, D", 8, |c| {
        let v = c.regs.d;
        c.bit(3, v);
    }),
    ext("BIT 3, E", 8, |c| {
        let v = c.regs.e;
        c.bit(3, v);
    }),
    ext("BIT 3, H", 8, |c| {
        let v = c.regs.h;
        c.bit(3, v);
    }),
    ext("BIT 3, L", 8, |c| {
        let v = c.regs.l;
        c.bit(3, v);
    }),
    ext("BIT 3, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(3, v);
    }),
    ext("BIT 3, A", 8, |c| {
        let v = c.regs.a;
        c.bit(3, v);
    }),
    // 0x6_: BIT 4 / BIT 5
    ext("BIT 4, B", 8, |c| {
        let v = c.regs.b;
        c.bit(4, v);
    }),
    ext("BIT 4, C", 8, |c| {
        let v = c.regs.c;
        c.bit(4, v);
    }),
    ext("BIT 4, D", 8, |c| {
        let v = c.regs.d;
        c.bit(4, v);
    }),
    ext("BIT 4, E", 8, |c| {
        let v = c.regs.e;
        c.bit(4, v);
    }),
    ext("BIT 4, H", 8, |c| {
        let v = c.regs.h;
        c.bit(4, v);
    }),
    ext("BIT 4, L", 8, |c| {
        let v = c.regs.l;
        c.bit(4, v);
    }),
    ext("BIT 4, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(4, v);
    }),
    ext("BIT 4, A", 8, |c| {
        let v = c.regs.a;
        c.bit(4, v);
    }),
    ext("BIT 5, B", 8, |c| {
        let v = c.regs.b;
        c.bit(5, v);
    }),
    ext("BIT 5, C", 8, |c| {
        let v = c.regs.c;
        c.bit(5, v);
    }),
    ext("BIT 5, D", 8, |c| {
        let v = c.regs.d;
        c.bit(5, v);
    }),
    ext("BIT 5, E", 8, |c| {
        let v = c.regs.e;
        c.bit(5, v);
    }),
    ext("BIT 5, H", 8, |c| {
        let v = c.regs.h;
        c.bit(5, v);
    }),
    ext("BIT 5, L", 8, |c| {
        let v = c.regs.l;
        c.bit(5, v);
    }),
    ext("BIT 5, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(5, v);
    }),
    ext("BIT 5, A", 8, |c| {
        let v = c.regs.a;
        c.bit(5, v);
    }),
    // 0x7_: BIT 6 / BIT 7
    ext("BIT 6, B", 8, |c| {
        let v = c.regs.b;
        c.bit(6, v);
    }),
    ext("BIT 6, C", 8, |c| {
        let v = c.regs.c;
        c.bit(6, v);
    }),
    ext("BIT 6, D", 8, |c| {
        let v = c.regs.d;
        c.bit(6, v);
    }),
    ext("BIT 6, E", 8, |c| {
        let v = c.regs.e;
        c.bit(6, v);
    }),
    ext("BIT 6, H", 8, |c| {
        let v = c.regs.h;
        c.bit(6, v);
    }),
    ext("BIT 6, L", 8, |c| {
        let v = c.regs.l;
        c.bit(6, v);
    }),
    ext("BIT 6, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(6, v);
    }),
    ext("BIT 6, A", 8, |c| {
        let v = c.regs.a;
        c.bit(6, v);
    }),
    ext("BIT 7, B", 8, |c| {
        let v = c.regs.b;
        c.bit(7, v);
    }),
    ext("BIT 7, C", 8, |c| {
        let v = c.regs.c;
        c.bit(7, v);
    }),
    ext("BIT 7, D", 8, |c| {
        let v = c.regs.d;
        c.bit(7, v);
    }),
    ext("BIT 7, E", 8, |c| {
        let v = c.regs.e;
        c.bit(7, v);
    }),
    ext("BIT 7, H", 8, |c| {
        let v = c.regs.h;
        c.bit(7, v);
    }),
    ext("BIT 7, L", 8, |c| {
        let v = c.regs.l;
        c.bit(7, v);
    }),
    ext("BIT 7, (HL)", 12, |c| {
        let v = c.read_hl();
        c.bit(7, v);
    }),
    ext("BIT 7, A", 8, |c| {
        let v = c.regs.a;
        c.bit(7, v);
    }),
    // 0x8_: RES 0 / RES 1
    ext("RES 0, B", 8, |c| c.regs.b &= !0x01),
    ext("RES 0, C", 8, |c| c.regs.c &= !0x01),
    ext("RES 0, D", 8, |c| c.regs.d &= !0x01),
    ext("RES 0, E", 8, |c| c.regs.e &= !0x01),
    ext("RES 0, H", 8, |c| c.regs.h &= !0x01),
    ext("RES 0, L", 8, |c| c.regs.l &= !0x01),
    ext("RES 0, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x01);
    }),
    ext("RES 0, A", 8, |c| c.regs.a &= !0x01),
    ext("RES 1, B", 8, |c| c.regs.b &= !0x02),
    ext("RES 1, C", 8, |c| c.regs.c &= !0x02),
    ext("RES 1, D", 8, |c| c.regs.d &= !0x02),
    ext("RES 1, E", 8, |c| c.regs.e &= !0x02),
    ext("RES 1, H", 8, |c| c.regs.h &= !0x02),
    ext("RES 1, L", 8, |c| c.regs.l &= !0x02),
    ext("RES 1, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x02);
    }),
    ext("RES 1, A", 8, |c| c.regs.a &= !0x02),
    // 0x9_: RES 2 / RES 3
    ext("RES 2, B", 8, |c| c.regs.b &= !0x04),
    ext("RES 2, C", 8, |c| c.regs.c &= !0x04),
    ext("RES 2, D", 8, |c| c.regs.d &= !0x04),
    ext("RES 2, E", 8, |c| c.regs.e &= !0x04),
    ext("RES 2, H", 8, |c| c.regs.h &= !0x04),
    ext("RES 2, L", 8, |c| c.regs.l &= !0x04),
    ext("RES 2, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x04);
    }),
    ext("RES 2, A", 8, |c| c.regs.a &= !0x04),
    ext("RES 3, B", 8, |c| c.regs.b &= !0x08),
    ext("RES 3, C", 8, |c| c.regs.c &= !0x08),
    ext("RES 3, D", 8, |c| c.regs.d &= !0x08),
    ext("RES 3, E", 8, |c| c.regs.e &= !0x08),
    ext("RES 3, H", 8, |c| c.regs.h &= !0x08),
    ext("RES 3, L", 8, |c| c.regs.l &= !0x08),
    ext("RES 3, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x08);
    }),
    ext("RES 3, A", 8, |c| c.regs.a &= !0x08),
    // 0xA_: RES 4 / RES 5
    ext("RES 4, B", 8, |c| c.regs.b &= !0x10),
    ext("RES 4, C", 8, |c| c.regs.c &= !0x10),
    ext("RES 4, D", 8, |c| c.regs.d &= !0x10),
    ext("RES 4, E", 8, |c| c.regs.e &= !0x10),
    ext("RES 4, H", 8, |c| c.regs.h &= !0x10),
    ext("RES 4, L", 8, |c| c.regs.l &= !0x10),
    ext("RES 4, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x10);
    }),
    ext("RES 4, A", 8, |c| c.regs.a &= !0x10),
    ext("RES 5, B", 8, |c| c.regs.b &= !0x20),
    ext("RES 5, C", 8, |c| c.regs.c &= !0x20),
    ext("RES 5, D", 8, |c| c.regs.d &= !0x20),
    ext("RES 5, E", 8, |c| c.regs.e &= !0x20),
    ext("RES 5, H", 8, |c| c.regs.h &= !0x20),
    ext("RES 5, L", 8, |c| c.regs.l &= !0x20),
    ext("RES 5, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x20);
    }),
    ext("RES 5, A", 8, |c| c.regs.a &= !0x20),
    // 0xB_: RES 6 / RES 7
    ext("RES 6, B", 8, |c| c.regs.b &= !0x40),
    ext("RES 6, C", 8, |c| c.regs.c &= !0x40),
    ext("RES 6, D", 8, |c| c.regs.d &= !0x40),
    ext("RES 6, E", 8, |c| c.regs.e &= !0x40),
    ext("RES 6, H", 8, |c| c.regs.h &= !0x40),
    ext("RES 6, L", 8, |c| c.regs.l &= !0x40),
    ext("RES 6, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x40);
    }),
    ext("RES 6, A", 8, |c| c.regs.a &= !0x40),
    ext("RES 7, B", 8, |c| c.regs.b &= !0x80),
    ext("RES 7, C", 8, |c| c.regs.c &= !0x80),
    ext("RES 7, D", 8, |c| c.regs.d &= !0x80),
    ext("RES 7, E", 8, |c| c.regs.e &= !0x80),
    ext("RES 7, H", 8, |c| c.regs.h &= !0x80),
    ext("RES 7, L", 8, |c| c.regs.l &= !0x80),
    ext("RES 7, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v & !0x80);
    }),
    ext("RES 7, A", 8, |c| c.regs.a &= !0x80),
    // 0xC_: SET 0 / SET 1
    ext("SET 0, B", 8, |c| c.regs.b |= 0x01),
    ext("SET 0, C", 8, |c| c.regs.c |= 0x01),
    ext("SET 0, D", 8, |c| c.regs.d |= 0x01),
    ext("SET 0, E", 8, |c| c.regs.e |= 0x01),
    ext("SET 0, H", 8, |c| c.regs.h |= 0x01),
    ext("SET 0, L", 8, |c| c.regs.l |= 0x01),
    ext("SET 0, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x01);
    }),
    ext("SET 0, A", 8, |c| c.regs.a |= 0x01),
    ext("SET 1, B", 8, |c| c.regs.b |= 0x02),
    ext("SET 1, C", 8, |c| c.regs.c |= 0x02),
    ext("SET 1, D", 8, |c| c.regs.d |= 0x02),
    ext("SET 1, E", 8, |c| c.regs.e |= 0x02),
    ext("SET 1, H", 8, |c| c.regs.h |= 0x02),
    ext("SET 1, L", 8, |c| c.regs.l |= 0x02),
    ext("SET 1, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x02);
    }),
    ext("SET 1, A", 8, |c| c.regs.a |= 0x02),
    // 0xD_: SET 2 / SET 3
    ext("SET 2, B", 8, |c| c.regs.b |= 0x04),
    ext("SET 2, C", 8, |c| c.regs.c |= 0x04),
    ext("SET 2, D", 8, |c| c.regs.d |= 0x04),
    ext("SET 2, E", 8, |c| c.regs.e |= 0x04),
    ext("SET 2, H", 8, |c| c.regs.h |= 0x04),
    ext("SET 2, L", 8, |c| c.regs.l |= 0x04),
    ext("SET 2, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x04);
    }),
    ext("SET 2, A", 8, |c| c.regs.a |= 0x04),
    ext("SET 3, B", 8, |c| c.regs.b |= 0x08),
    ext("SET 3, C", 8, |c| c.regs.c |= 0x08),
    ext("SET 3, D", 8, |c| c.regs.d |= 0x08),
    ext("SET 3, E", 8, |c| c.regs.e |= 0x08),
    ext("SET 3, H", 8, |c| c.regs.h |= 0x08),
    ext("SET 3, L", 8, |c| c.regs.l |= 0x08),
    ext("SET 3, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x08);
    }),
    ext("SET 3, A", 8, |c| c.regs.a |= 0x08),
    // 0xE_: SET 4 / SET 5
    ext("SET 4, B", 8, |c| c.regs.b |= 0x10),
    ext("SET 4, C", 8, |c| c.regs.c |= 0x10),
    ext("SET 4, D", 8, |c| c.regs.d |= 0x10),
    ext("SET 4, E", 8, |c| c.regs.e |= 0x10),
    ext("SET 4, H", 8, |c| c.regs.h |= 0x10),
    ext("SET 4, L", 8, |c| c.regs.l |= 0x10),
    ext("SET 4, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x10);
    }),
    ext("SET 4, A", 8, |c| c.regs.a |= 0x10),
    ext("SET 5, B", 8, |c| c.regs.b |= 0x20),
    ext("SET 5, C", 8, |c| c.regs.c |= 0x20),
    ext("SET 5, D", 8, |c| c.regs.d |= 0x20),
    ext("SET 5, E", 8, |c| c.regs.e |= 0x20),
    ext("SET 5, H", 8, |c| c.regs.h |= 0x20),
    ext("SET 5, L", 8, |c| c.regs.l |= 0x20),
    ext("SET 5, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x20);
    }),
    ext("SET 5, A", 8, |c| c.regs.a |= 0x20),
    // 0xF_: SET 6 / SET 7
    ext("SET 6, B", 8, |c| c.regs.b |= 0x40),
    ext("SET 6, C", 8, |c| c.regs.c |= 0x40),
    ext("SET 6, D", 8, |c| c.regs.d |= 0x40),
    ext("SET 6, E", 8, |c| c.regs.e |= 0x40),
    ext("SET 6, H", 8, |c| c.regs.h |= 0x40),
    ext("SET 6, L", 8, |c| c.regs.l |= 0x40),
    ext("SET 6, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x40);
    }),
    ext("SET 6, A", 8, |c| c.regs.a |= 0x40),
    ext("SET 7, B", 8, |c| c.regs.b |= 0x80),
    ext("SET 7, C", 8, |c| c.regs.c |= 0x80),
    ext("SET 7, D", 8, |c| c.regs.d |= 0x80),
    ext("SET 7, E", 8, |c| c.regs.e |= 0x80),
    ext("SET 7, H", 8, |c| c.regs.h |= 0x80),
    ext("SET 7, L", 8, |c| c.regs.l |= 0x80),
    ext("SET 7, (HL)", 16, |c| {
        let v = c.read_hl();
        c.write_hl(v | 0x80);
    }),
    ext("SET 7, A", 8, |c| c.regs.a |= 0x80),
];
