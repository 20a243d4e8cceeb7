use anyhow::{Context, Result};
use dotboy_core::Cpu;

const DEFAULT_MAX_STEPS: u64 = 10_000_000;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path = args.next().unwrap_or_else(|| {
        eprintln!("Usage: dotboy <rom.gb> [max-steps]");
        std::process::exit(2);
    });
    let max_steps: u64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid max-steps '{raw}'"))?,
        None => DEFAULT_MAX_STEPS,
    };

    let rom = std::fs::read(&rom_path).with_context(|| format!("failed to read '{rom_path}'"))?;
    log::info!("running '{}' ({} bytes)", rom_path, rom.len());

    let mut cpu = Cpu::new();
    cpu.load_image(&rom)?;

    let report = dotboy::run(&mut cpu, max_steps)?;
    if report.halted {
        println!("halted after {} steps ({} cycles)", report.steps, report.cycles);
    } else {
        println!(
            "step budget exhausted: {} steps ({} cycles)",
            report.steps, report.cycles
        );
    }
    println!("{}", dotboy::register_dump(&cpu));
    Ok(())
}
