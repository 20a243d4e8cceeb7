//! Headless driver around the `dotboy_core` CPU.
//!
//! Runs a machine until it halts, trips an illegal opcode or exhausts a
//! step budget, and reports what happened. Presentation (formatting the
//! final register file) lives here rather than in the core.

use anyhow::{Context, Result};
use dotboy_core::cpu::mnemonic;
use dotboy_core::Cpu;

#[derive(Debug)]
pub struct RunReport {
    pub steps: u64,
    pub cycles: u64,
    pub halted: bool,
}

/// Step `cpu` until it halts or `max_steps` instructions have retired.
///
/// An illegal opcode surfaces as an error with the accumulated progress
/// attached as context.
pub fn run(cpu: &mut Cpu, max_steps: u64) -> Result<RunReport> {
    let mut steps = 0u64;
    let mut cycles = 0u64;
    while steps < max_steps && !cpu.halted {
        let cost = cpu
            .step()
            .with_context(|| format!("after {steps} steps ({cycles} cycles)"))?;
        cycles += u64::from(cost);
        steps += 1;
    }
    Ok(RunReport {
        steps,
        cycles,
        halted: cpu.halted,
    })
}

/// Multi-line register file snapshot, next opcode included.
pub fn register_dump(cpu: &Cpu) -> String {
    let regs = &cpu.regs;
    format!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X}\n\
         SP={:04X} PC={:04X}  Z={} N={} H={} C={}\n\
         next: {}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc,
        regs.flag(dotboy_core::Flag::Z) as u8,
        regs.flag(dotboy_core::Flag::N) as u8,
        regs.flag(dotboy_core::Flag::H) as u8,
        regs.flag(dotboy_core::Flag::C) as u8,
        mnemonic(cpu.memory.read_byte(regs.pc)),
    )
}
