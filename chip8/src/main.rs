use std::path::PathBuf;

use clap::Parser;

use ch8_core::{CLOCK_SPEED, TIMER_HZ};

mod keymap;
mod run;

/// CPU cycles per 60Hz frame at the default clock speed
const DEFAULT_CYCLES_PER_FRAME: u32 = (1_000_000_000 / CLOCK_SPEED) as u32 / TIMER_HZ;

#[derive(Parser, Debug)]
#[command(version, about = "A Chip-8 interpreter", long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Size multiplier for each Chip-8 pixel
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Instructions executed per 60Hz frame
    #[arg(short, long, default_value_t = DEFAULT_CYCLES_PER_FRAME)]
    cycles_per_frame: u32,

    /// Seed for the random number generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = run::Settings {
        rom: args.rom,
        scale: args.scale,
        cycles_per_frame: args.cycles_per_frame,
        seed: args.seed.unwrap_or_else(rand::random),
    };
    run::run(&settings)
}
