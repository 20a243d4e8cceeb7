//! Base instruction set dispatch table.
//!
//! The table is the single source of truth for the 256 base opcodes:
//! mnemonic, cycle cost(s) and handler, indexed by the opcode byte.
//! Conditional control flow carries both the not-taken (`cycles`) and
//! taken (`cycles_taken`) costs; the handler reports which path ran and
//! the dispatcher in [`Cpu::execute`] picks the right one. The eleven
//! bytes the hardware never assigned resolve to `"???"` entries whose
//! handler reports [`Outcome::Illegal`].

use super::Cpu;
use crate::registers::Flag;

/// What a handler observed while executing.
pub(crate) enum Outcome {
    /// Unconditional instruction, or a conditional one that fell through.
    Done,
    /// Conditional jump/call/return that was taken.
    Taken,
    /// The `0xCB` prefix; cycles were resolved from the extended table.
    Prefixed(u32),
    /// No operation is assigned to this opcode byte.
    Illegal,
}

pub(crate) type Handler = fn(&mut Cpu) -> Outcome;

pub struct Opcode {
    pub mnemonic: &'static str,
    /// Base cost; for conditional control flow, the not-taken cost.
    pub cycles: u32,
    /// Taken cost for conditional control flow, equal to `cycles`
    /// everywhere else.
    pub cycles_taken: u32,
    pub(crate) exec: Handler,
}

const fn op(mnemonic: &'static str, cycles: u32, exec: Handler) -> Opcode {
    Opcode {
        mnemonic,
        cycles,
        cycles_taken: cycles,
        exec,
    }
}

const fn branch(mnemonic: &'static str, cycles: u32, cycles_taken: u32, exec: Handler) -> Opcode {
    Opcode {
        mnemonic,
        cycles,
        cycles_taken,
        exec,
    }
}

fn illegal_exec(_: &mut Cpu) -> Outcome {
    Outcome::Illegal
}

const fn illegal() -> Opcode {
    Opcode {
        mnemonic: "???",
        cycles: 0,
        cycles_taken: 0,
        exec: illegal_exec,
    }
}

use Outcome::Done;

pub(crate) static BASE: [Opcode; 256] = [
    // 0x0_
    op("NOP", 4, |_| Done),
    op("LD BC, nn", 12, |c| {
        let nn = c.fetch_word();
        c.regs.set_bc(nn);
        Done
    }),
    op("LD (BC), A", 8, |c| {
        c.memory.write_byte(c.regs.bc(), c.regs.a);
        Done
    }),
    op("INC BC", 8, |c| {
        let v = c.regs.bc().wrapping_add(1);
        c.regs.set_bc(v);
        Done
    }),
    op("INC B", 4, |c| {
        let v = c.inc8(c.regs.b);
        c.regs.b = v;
        Done
    }),
    op("DEC B", 4, |c| {
        let v = c.dec8(c.regs.b);
        c.regs.b = v;
        Done
    }),
    op("LD B, n", 8, |c| {
        c.regs.b = c.fetch_byte();
        Done
    }),
    op("RLCA", 4, |c| {
        let v = c.rlc(c.regs.a);
        c.regs.a = v;
        c.regs.set_flag(Flag::Z, false);
        Done
    }),
    op("LD (nn), SP", 20, |c| {
        let nn = c.fetch_word();
        c.memory.write_byte(nn, c.regs.sp as u8);
        c.memory.write_byte(nn.wrapping_add(1), (c.regs.sp >> 8) as u8);
        Done
    }),
    op("ADD HL, BC", 8, |c| {
        let v = c.regs.bc();
        c.add_hl(v);
        Done
    }),
    op("LD A, (BC)", 8, |c| {
        c.regs.a = c.memory.read_byte(c.regs.bc());
        Done
    }),
    op("DEC BC", 8, |c| {
        let v = c.regs.bc().wrapping_sub(1);
        c.regs.set_bc(v);
        Done
    }),
    op("INC C", 4, |c| {
        let v = c.inc8(c.regs.c);
        c.regs.c = v;
        Done
    }),
    op("DEC C", 4, |c| {
        let v = c.dec8(c.regs.c);
        c.regs.c = v;
        Done
    }),
    op("LD C, n", 8, |c| {
        c.regs.c = c.fetch_byte();
        Done
    }),
    op("RRCA", 4, |c| {
        let v = c.rrc(c.regs.a);
        c.regs.a = v;
        c.regs.set_flag(Flag::Z, false);
        Done
    }),
    // 0x1_
    op("STOP", 4, |c| {
        // Two-byte encoding: the byte after the opcode is skipped.
        c.regs.pc = c.regs.pc.wrapping_add(1);
        Done
    }),
    op("LD DE, nn", 12, |c| {
        let nn = c.fetch_word();
        c.regs.set_de(nn);
        Done
    }),
    op("LD (DE), A", 8, |c| {
        c.memory.write_byte(c.regs.de(), c.regs.a);
        Done
    }),
    op("INC DE", 8, |c| {
        let v = c.regs.de().wrapping_add(1);
        c.regs.set_de(v);
        Done
    }),
    op("INC D", 4, |c| {
        let v = c.inc8(c.regs.d);
        c.regs.d = v;
        Done
    }),
    op("DEC D", 4, |c| {
        let v = c.dec8(c.regs.d);
        c.regs.d = v;
        Done
    }),
    op("LD D, n", 8, |c| {
        c.regs.d = c.fetch_byte();
        Done
    }),
    op("RLA", 4, |c| {
        let v = c.rl(c.regs.a);
        c.regs.a = v;
        c.regs.set_flag(Flag::Z, false);
        Done
    }),
    op("JR e", 12, |c| c.jr(true)),
    op("ADD HL, DE", 8, |c| {
        let v = c.regs.de();
        c.add_hl(v);
        Done
    }),
    op("LD A, (DE)", 8, |c| {
        c.regs.a = c.memory.read_byte(c.regs.de());
        Done
    }),
    op("DEC DE", 8, |c| {
        let v = c.regs.de().wrapping_sub(1);
        c.regs.set_de(v);
        Done
    }),
    op("INC E", 4, |c| {
        let v = c.inc8(c.regs.e);
        c.regs.e = v;
        Done
    }),
    op("DEC E", 4, |c| {
        let v = c.dec8(c.regs.e);
        c.regs.e = v;
        Done
    }),
    op("LD E, n", 8, |c| {
        c.regs.e = c.fetch_byte();
        Done
    }),
    op("RRA", 4, |c| {
        let v = c.rr(c.regs.a);
        c.regs.a = v;
        c.regs.set_flag(Flag::Z, false);
        Done
    }),
    // 0x2_
    branch("JR NZ, e", 8, 12, |c| {
        let cond = !c.regs.flag(Flag::Z);
        c.jr(cond)
    }),
    op("LD HL, nn", 12, |c| {
        let nn = c.fetch_word();
        c.regs.set_hl(nn);
        Done
    }),
    op("LD (HL+), A", 8, |c| {
        c.write_hl(c.regs.a);
        let v = c.regs.hl().wrapping_add(1);
        c.regs.set_hl(v);
        Done
    }),
    op("INC HL", 8, |c| {
        let v = c.regs.hl().wrapping_add(1);
        c.regs.set_hl(v);
        Done
    }),
    op("INC H", 4, |c| {
        let v = c.inc8(c.regs.h);
        c.regs.h = v;
        Done
    }),
    op("DEC H", 4, |c| {
        let v = c.dec8(c.regs.h);
        c.regs.h = v;
        Done
    }),
    op("LD H, n", 8, |c| {
        c.regs.h = c.fetch_byte();
        Done
    }),
    op("DAA", 4, |c| {
        c.daa();
        Done
    }),
    branch("JR Z, e", 8, 12, |c| {
        let cond = c.regs.flag(Flag::Z);
        c.jr(cond)
    }),
    op("ADD HL, HL", 8, |c| {
        let v = c.regs.hl();
        c.add_hl(v);
        Done
    }),
    op("LD A, (HL+)", 8, |c| {
        c.regs.a = c.read_hl();
        let v = c.regs.hl().wrapping_add(1);
        c.regs.set_hl(v);
        Done
    }),
    op("DEC HL", 8, |c| {
        let v = c.regs.hl().wrapping_sub(1);
        c.regs.set_hl(v);
        Done
    }),
    op("INC L", 4, |c| {
        let v = c.inc8(c.regs.l);
        c.regs.l = v;
        Done
    }),
    op("DEC L", 4, |c| {
        let v = c.dec8(c.regs.l);
        c.regs.l = v;
        Done
    }),
    op("LD L, n", 8, |c| {
        c.regs.l = c.fetch_byte();
        Done
    }),
    op("CPL", 4, |c| {
        c.regs.a = !c.regs.a;
        c.regs.set_flag(Flag::N, true);
        c.regs.set_flag(Flag::H, true);
        Done
    }),
    // 0x3_
    branch("JR NC, e", 8, 12, |c| {
        let cond = !c.regs.flag(Flag::C);
        c.jr(cond)
    }),
    op("LD SP, nn", 12, |c| {
        c.regs.sp = c.fetch_word();
        Done
    }),
    op("LD (HL-), A", 8, |c| {
        c.write_hl(c.regs.a);
        let v = c.regs.hl().wrapping_sub(1);
        c.regs.set_hl(v);
        Done
    }),
    op("INC SP", 8, |c| {
        c.regs.sp = c.regs.sp.wrapping_add(1);
        Done
    }),
    op("INC (HL)", 12, |c| {
        let v = c.read_hl();
        let r = c.inc8(v);
        c.write_hl(r);
        Done
    }),
    op("DEC (HL)", 12, |c| {
        let v = c.read_hl();
        let r = c.dec8(v);
        c.write_hl(r);
        Done
    }),
    op("LD (HL), n", 12, |c| {
        let n = c.fetch_byte();
        c.write_hl(n);
        Done
    }),
    op("SCF", 4, |c| {
        c.regs.set_flag(Flag::N, false);
        c.regs.set_flag(Flag::H, false);
        c.regs.set_flag(Flag::C, true);
        Done
    }),
    branch("JR C, e", 8, 12, |c| {
        let cond = c.regs.flag(Flag::C);
        c.jr(cond)
    }),
    op("ADD HL, SP", 8, |c| {
        let v = c.regs.sp;
        c.add_hl(v);
        Done
    }),
    op("LD A, (HL-)", 8, |c| {
        c.regs.a = c.read_hl();
        let v = c.regs.hl().wrapping_sub(1);
        c.regs.set_hl(v);
        Done
    }),
    op("DEC SP", 8, |c| {
        c.regs.sp = c.regs.sp.wrapping_sub(1);
        Done
    }),
    op("INC A", 4, |c| {
        let v = c.inc8(c.regs.a);
        c.regs.a = v;
        Done
    }),
    op("DEC A", 4, |c| {
        let v = c.dec8(c.regs.a);
        c.regs.a = v;
        Done
    }),
    op("LD A, n", 8, |c| {
        c.regs.a = c.fetch_byte();
        Done
    }),
    op("CCF", 4, |c| {
        let carry = c.regs.flag(Flag::C);
        c.regs.set_flag(Flag::N, false);
        c.regs.set_flag(Flag::H, false);
        c.regs.set_flag(Flag::C, !carry);
        Done
    }),
    // 0x4_
    op("LD B, B", 4, |_| Done),
    op("LD B, C", 4, |c| {
        c.regs.b = c.regs.c;
        Done
    }),
    op("LD B, D", 4, |c| {
        c.regs.b = c.regs.d;
        Done
    }),
    op("LD B, E", 4, |c| {
        c.regs.b = c.regs.e;
        Done
    }),
    op("LD B, H", 4, |c| {
        c.regs.b = c.regs.h;
        Done
    }),
    op("LD B, L", 4, |c| {
        c.regs.b = c.regs.l;
        Done
    }),
    op("LD B, (HL)", 8, |c| {
        c.regs.b = c.read_hl();
        Done
    }),
    op("LD B, A", 4, |c| {
        c.regs.b = c.regs.a;
        Done
    }),
    op("LD C, B", 4, |c| {
        c.regs.c = c.regs.b;
        Done
    }),
    op("LD C, C", 4, |_| Done),
    op("LD C, D", 4, |c| {
        c.regs.c = c.regs.d;
        Done
    }),
    op("LD C, E", 4, |c| {
        c.regs.c = c.regs.e;
        Done
    }),
    op("LD C, H", 4, |c| {
        c.regs.c = c.regs.h;
        Done
    }),
    op("LD C, L", 4, |c| {
        c.regs.c = c.regs.l;
        Done
    }),
    op("LD C, (HL)", 8, |c| {
        c.regs.c = c.read_hl();
        Done
    }),
    op("LD C, A", 4, |c| {
        c.regs.c = c.regs.a;
        Done
    }),
    // 0x5_
    op("LD D, B", 4, |c| {
        c.regs.d = c.regs.b;
        Done
    }),
    op("LD D, C", 4, |c| {
        c.regs.d = c.regs.c;
        Done
    }),
    op("LD D, D", 4, |_| Done),
    op("LD D, E", 4, |c| {
        c.regs.d = c.regs.e;
        Done
    }),
    op("LD D, H", 4, |c| {
        c.regs.d = c.regs.h;
        Done
    }),
    op("LD D, L", 4, |c| {
        c.regs.d = c.regs.l;
        Done
    }),
    op("LD D, (HL)", 8, |c| {
        c.regs.d = c.read_hl();
        Done
    }),
    op("LD D, A", 4, |c| {
        c.regs.d = c.regs.a;
        Done
    }),
    op("LD E, B", 4, |c| {
        c.regs.e = c.regs.b;
        Done
    }),
    op("LD E, C", 4, |c| {
        c.regs.e = c.regs.c;
        Done
    }),
    op("LD E, D", 4, |c| {
        c.regs.e = c.regs.d;
        Done
    }),
    op("LD E, E", 4, |_| Done),
    op("LD E, H", 4, |c| {
        c.regs.e = c.regs.h;
        Done
    }),
    op("LD E, L", 4, |c| {
        c.regs.e = c.regs.l;
        Done
    }),
    op("LD E, (HL)", 8, |c| {
        c.regs.e = c.read_hl();
        Done
    }),
    op("LD E, A", 4, |c| {
        c.regs.e = c.regs.a;
        Done
    }),
    // 0x6_
    op("LD H, B", 4, |c| {
        c.regs.h = c.regs.b;
        Done
    }),
    op("LD H, C", 4, |c| {
        c.regs.h = c.regs.c;
        Done
    }),
    op("LD H, D", 4, |c| {
        c.regs.h = c.regs.d;
        Done
    }),
    op("LD H, E", 4, |c| {
        c.regs.h = c.regs.e;
        Done
    }),
    op("LD H, H", 4, |_| Done),
    op("LD H, L", 4, |c| {
        c.regs.h = c.regs.l;
        Done
    }),
    op("LD H, (HL)", 8, |c| {
        c.regs.h = c.read_hl();
        Done
    }),
    op("LD H, A", 4, |c| {
        c.regs.h = c.regs.a;
        Done
    }),
    op("LD L, B", 4, |c| {
        c.regs.l = c.regs.b;
        Done
    }),
    op("LD L, C", 4, |c| {
        c.regs.l = c.regs.c;
        Done
    }),
    op("LD L, D", 4, |c| {
        c.regs.l = c.regs.d;
        Done
    }),
    op("LD L, E", 4, |c| {
        c.regs.l = c.regs.e;
        Done
    }),
    op("LD L, H", 4, |c| {
        c.regs.l = c.regs.h;
        Done
    }),
    op("LD L, L", 4, |_| Done),
    op("LD L, (HL)", 8, |c| {
        c.regs.l = c.read_hl();
        Done
    }),
    op("LD L, A", 4, |c| {
        c.regs.l = c.regs.a;
        Done
    }),
    // 0x7_
    op("LD (HL), B", 8, |c| {
        c.write_hl(c.regs.b);
        Done
    }),
    op("LD (HL), C", 8, |c| {
        c.write_hl(c.regs.c);
        Done
    }),
    op("LD (HL), D", 8, |c| {
        c.write_hl(c.regs.d);
        Done
    }),
    op("LD (HL), E", 8, |c| {
        c.write_hl(c.regs.e);
        Done
    }),
    op("LD (HL), H", 8, |c| {
        c.write_hl(c.regs.h);
        Done
    }),
    op("LD (HL), L", 8, |c| {
        c.write_hl(c.regs.l);
        Done
    }),
    op("HALT", 4, |c| {
        c.halted = true;
        Done
    }),
    op("LD (HL), A", 8, |c| {
        c.write_hl(c.regs.a);
        Done
    }),
    op("LD A, B", 4, |c| {
        c.regs.a = c.regs.b;
        Done
    }),
    op("LD A, C", 4, |c| {
        c.regs.a = c.regs.c;
        Done
    }),
    op("LD A, D", 4, |c| {
        c.regs.a = c.regs.d;
        Done
    }),
    op("LD A, E", 4, |c| {
        c.regs.a = c.regs.e;
        Done
    }),
    op("LD A, H", 4, |c| {
        c.regs.a = c.regs.h;
        Done
    }),
    op("LD A, L", 4, |c| {
        c.regs.a = c.regs.l;
        Done
    }),
    op("LD A, (HL)", 8, |c| {
        c.regs.a = c.read_hl();
        Done
    }),
    op("LD A, A", 4, |_| Done),
    // 0x8_
    op("ADD A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_add(v, false);
        Done
    }),
    op("ADD A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_add(v, false);
        Done
    }),
    op("ADD A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_add(v, false);
        Done
    }),
    op("ADD A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_add(v, false);
        Done
    }),
    op("ADD A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_add(v, false);
        Done
    }),
    op("ADD A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_add(v, false);
        Done
    }),
    op("ADD A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_add(v, false);
        Done
    }),
    op("ADD A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_add(v, false);
        Done
    }),
    op("ADC A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_add(v, true);
        Done
    }),
    op("ADC A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_add(v, true);
        Done
    }),
    op("ADC A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_add(v, true);
        Done
    }),
    op("ADC A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_add(v, true);
        Done
    }),
    op("ADC A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_add(v, true);
        Done
    }),
    op("ADC A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_add(v, true);
        Done
    }),
    op("ADC A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_add(v, true);
        Done
    }),
    op("ADC A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_add(v, true);
        Done
    }),
    // 0x9_
    op("SUB A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_sub(v, false);
        Done
    }),
    op("SUB A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_sub(v, false);
        Done
    }),
    op("SUB A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_sub(v, false);
        Done
    }),
    op("SUB A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_sub(v, false);
        Done
    }),
    op("SUB A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_sub(v, false);
        Done
    }),
    op("SUB A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_sub(v, false);
        Done
    }),
    op("SUB A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_sub(v, false);
        Done
    }),
    op("SUB A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_sub(v, false);
        Done
    }),
    op("SBC A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_sub(v, true);
        Done
    }),
    op("SBC A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_sub(v, true);
        Done
    }),
    op("SBC A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_sub(v, true);
        Done
    }),
    op("SBC A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_sub(v, true);
        Done
    }),
    op("SBC A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_sub(v, true);
        Done
    }),
    op("SBC A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_sub(v, true);
        Done
    }),
    op("SBC A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_sub(v, true);
        Done
    }),
    op("SBC A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_sub(v, true);
        Done
    }),
    // 0xA_
    op("AND A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_and(v);
        Done
    }),
    op("AND A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_and(v);
        Done
    }),
    op("AND A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_and(v);
        Done
    }),
    op("AND A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_and(v);
        Done
    }),
    op("AND A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_and(v);
        Done
    }),
    op("AND A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_and(v);
        Done
    }),
    op("AND A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_and(v);
        Done
    }),
    op("AND A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_and(v);
        Done
    }),
    op("XOR A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_xor(v);
        Done
    }),
    op("XOR A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_xor(v);
        Done
    }),
    op("XOR A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_xor(v);
        Done
    }),
    op("XOR A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_xor(v);
        Done
    }),
    op("XOR A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_xor(v);
        Done
    }),
    op("XOR A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_xor(v);
        Done
    }),
    op("XOR A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_xor(v);
        Done
    }),
    op("XOR A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_xor(v);
        Done
    }),
    // 0xB_
    op("OR A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_or(v);
        Done
    }),
    op("OR A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_or(v);
        Done
    }),
    op("OR A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_or(v);
        Done
    }),
    op("OR A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_or(v);
        Done
    }),
    op("OR A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_or(v);
        Done
    }),
    op("OR A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_or(v);
        Done
    }),
    op("OR A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_or(v);
        Done
    }),
    op("OR A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_or(v);
        Done
    }),
    op("CP A, B", 4, |c| {
        let v = c.regs.b;
        c.alu_cp(v);
        Done
    }),
    op("CP A, C", 4, |c| {
        let v = c.regs.c;
        c.alu_cp(v);
        Done
    }),
    op("CP A, D", 4, |c| {
        let v = c.regs.d;
        c.alu_cp(v);
        Done
    }),
    op("CP A, E", 4, |c| {
        let v = c.regs.e;
        c.alu_cp(v);
        Done
    }),
    op("CP A, H", 4, |c| {
        let v = c.regs.h;
        c.alu_cp(v);
        Done
    }),
    op("CP A, L", 4, |c| {
        let v = c.regs.l;
        c.alu_cp(v);
        Done
    }),
    op("CP A, (HL)", 8, |c| {
        let v = c.read_hl();
        c.alu_cp(v);
        Done
    }),
    op("CP A, A", 4, |c| {
        let v = c.regs.a;
        c.alu_cp(v);
        Done
    }),
    // 0xC_
    branch("RET NZ", 8, 20, |c| {
        let cond = !c.regs.flag(Flag::Z);
        c.ret(cond)
    }),
    op("POP BC", 12, |c| {
        let v = c.pop_word();
        c.regs.set_bc(v);
        Done
    }),
    branch("JP NZ, nn", 12, 16, |c| {
        let cond = !c.regs.flag(Flag::Z);
        c.jp(cond)
    }),
    op("JP nn", 16, |c| c.jp(true)),
    branch("CALL NZ, nn", 12, 24, |c| {
        let cond = !c.regs.flag(Flag::Z);
        c.call(cond)
    }),
    op("PUSH BC", 16, |c| {
        let v = c.regs.bc();
        c.push_word(v);
        Done
    }),
    op("ADD A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_add(v, false);
        Done
    }),
    op("RST 00h", 16, |c| {
        c.rst(0x00);
        Done
    }),
    branch("RET Z", 8, 20, |c| {
        let cond = c.regs.flag(Flag::Z);
        c.ret(cond)
    }),
    op("RET", 16, |c| c.ret(true)),
    branch("JP Z, nn", 12, 16, |c| {
        let cond = c.regs.flag(Flag::Z);
        c.jp(cond)
    }),
    op("PREFIX CB", 4, |c| Outcome::Prefixed(c.execute_extended())),
    branch("CALL Z, nn", 12, 24, |c| {
        let cond = c.regs.flag(Flag::Z);
        c.call(cond)
    }),
    op("CALL nn", 24, |c| c.call(true)),
    op("ADC A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_add(v, true);
        Done
    }),
    op("RST 08h", 16, |c| {
        c.rst(0x08);
        Done
    }),
    // 0xD_
    branch("RET NC", 8, 20, |c| {
        let cond = !c.regs.flag(Flag::C);
        c.ret(cond)
    }),
    op("POP DE", 12, |c| {
        let v = c.pop_word();
        c.regs.set_de(v);
        Done
    }),
    branch("JP NC, nn", 12, 16, |c| {
        let cond = !c.regs.flag(Flag::C);
        c.jp(cond)
    }),
    illegal(),
    branch("CALL NC, nn", 12, 24, |c| {
        let cond = !c.regs.flag(Flag::C);
        c.call(cond)
    }),
    op("PUSH DE", 16, |c| {
        let v = c.regs.de();
        c.push_word(v);
        Done
    }),
    op("SUB A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_sub(v, false);
        Done
    }),
    op("RST 10h", 16, |c| {
        c.rst(0x10);
        Done
    }),
    branch("RET C", 8, 20, |c| {
        let cond = c.regs.flag(Flag::C);
        c.ret(cond)
    }),
    // The IME side effect of RETI belongs to the external interrupt
    // collaborator; inside the core it times like RET.
    op("RETI", 16, |c| c.ret(true)),
    branch("JP C, nn", 12, 16, |c| {
        let cond = c.regs.flag(Flag::C);
        c.jp(cond)
    }),
    illegal(),
    branch("CALL C, nn", 12, 24, |c| {
        let cond = c.regs.flag(Flag::C);
        c.call(cond)
    }),
    illegal(),
    op("SBC A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_sub(v, true);
        Done
    }),
    op("RST 18h", 16, |c| {
        c.rst(0x18);
        Done
    }),
    // 0xE_
    op("LD (FF00 + n), A", 12, |c| {
        let n = c.fetch_byte();
        c.memory.write_byte(0xFF00 | n as u16, c.regs.a);
        Done
    }),
    op("POP HL", 12, |c| {
        let v = c.pop_word();
        c.regs.set_hl(v);
        Done
    }),
    op("LD (FF00 + C), A", 8, |c| {
        c.memory.write_byte(0xFF00 | c.regs.c as u16, c.regs.a);
        Done
    }),
    illegal(),
    illegal(),
    op("PUSH HL", 16, |c| {
        let v = c.regs.hl();
        c.push_word(v);
        Done
    }),
    op("AND A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_and(v);
        Done
    }),
    op("RST 20h", 16, |c| {
        c.rst(0x20);
        Done
    }),
    op("ADD SP, e", 16, |c| {
        c.regs.sp = c.add_sp_e();
        Done
    }),
    op("JP HL", 4, |c| {
        c.regs.pc = c.regs.hl();
        Done
    }),
    op("LD (nn), A", 16, |c| {
        let nn = c.fetch_word();
        c.memory.write_byte(nn, c.regs.a);
        Done
    }),
    illegal(),
    illegal(),
    illegal(),
    op("XOR A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_xor(v);
        Done
    }),
    op("RST 28h", 16, |c| {
        c.rst(0x28);
        Done
    }),
    // 0xF_
    op("LD A, (FF00 + n)", 12, |c| {
        let n = c.fetch_byte();
        c.regs.a = c.memory.read_byte(0xFF00 | n as u16);
        Done
    }),
    op("POP AF", 12, |c| {
        let v = c.pop_word();
        // set_af forces the restored flag nibble's low bits to zero.
        c.regs.set_af(v);
        Done
    }),
    op("LD A, (FF00 + C)", 8, |c| {
        c.regs.a = c.memory.read_byte(0xFF00 | c.regs.c as u16);
        Done
    }),
    // DI/EI toggle an interrupt-enable latch owned by the external
    // interrupt collaborator; the core only accounts their cost.
    op("DI", 4, |_| Done),
    illegal(),
    op("PUSH AF", 16, |c| {
        let v = c.regs.af();
        c.push_word(v);
        Done
    }),
    op("OR A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_or(v);
        Done
    }),
    op("RST 30h", 16, |c| {
        c.rst(0x30);
        Done
    }),
    op("LD HL, SP + e", 12, |c| {
        let v = c.add_sp_e();
        c.regs.set_hl(v);
        Done
    }),
    op("LD SP, HL", 8, |c| {
        c.regs.sp = c.regs.hl();
        Done
    }),
    op("LD A, (nn)", 16, |c| {
        let nn = c.fetch_word();
        c.regs.a = c.memory.read_byte(nn);
        Done
    }),
    op("EI", 4, |_| Done),
    illegal(),
    illegal(),
    op("CP A, n", 8, |c| {
        let v = c.fetch_byte();
        c.alu_cp(v);
        Done
    }),
    op("RST 38h", 16, |c| {
        c.rst(0x38);
        Done
    }),
];
