use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use ch8_core::{Interpreter, Keys, TIMER_HZ};
use ch8_display::Display;

use crate::keymap::keymap;

/// Host loop configuration
#[derive(Debug)]
pub struct Settings {
    pub rom: PathBuf,
    pub scale: u32,
    pub cycles_per_frame: u32,
    pub seed: u64,
}

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    info!("seeding interpreter with {:#x}", settings.seed);
    let mut chip8 = Interpreter::new(settings.seed);

    // Load ROM
    let file = File::open(&settings.rom)
        .with_context(|| format!("unable to open {}", settings.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", settings.rom.display()))?;
    info!("successfully loaded {}", settings.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, settings.scale).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let mut keys = Keys::new();

    // Whether or not the frame rate should be respected
    let mut fast_forward = false;

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => keys.press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => keys.release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        for _ in 0..settings.cycles_per_frame {
            if let Err(e) = chip8.step(&keys) {
                error!("halting at pc {:#06X}: {}", chip8.pc(), e);
                return Err(e.into());
            }
        }
        chip8.tick_timers();

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(|e| anyhow!(e))?;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}
