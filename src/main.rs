// The machine under emulation:
//   4K of memory, font at 0, program at 0x200
//   16 8-bit registers plus a 16-bit address register
//   16-frame call stack, two 60 Hz countdown timers
//   64x32 monochrome display, 16-key hex pad
//
// The interpreter runs a fixed burst of instructions per rendered frame;
// everything else (window, tone, key sampling) hangs off the frame loop.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::display::Screen;
use crate::emulator::Emulator;
use crate::sound::Sound;

mod decode;
mod display;
mod emulator;
mod error;
mod framebuffer;
mod keyboard;
mod memory;
mod registers;
mod sound;
mod timer;

/// CHIP-8 emulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM image to run
    rom: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom = fs::read(&args.rom)
        .with_context(|| format!("reading rom {}", args.rom.display()))?;
    info!("loaded {} byte rom from {}", rom.len(), args.rom.display());

    let mut emulator = Emulator::new(&rom)?;
    let mut screen = Screen::new()?;
    let mut sound = Sound::new()?;

    run(&mut emulator, &mut screen, &mut sound)
}

/// One pass per frame: sample the keypad, tick the timers, run the
/// instruction burst, and keep the tone in sync with the sound timer on
/// both sides of the burst (an instruction inside it may have set or
/// cleared the timer). The window's update-rate limiter paces the loop at
/// roughly 60 Hz.
fn run(emulator: &mut Emulator, screen: &mut Screen, sound: &mut Sound) -> Result<()> {
    while screen.is_open() {
        let input = screen.input();

        emulator.tick_timers();
        sync_tone(emulator, sound)?;
        emulator.run_burst(input)?;
        sync_tone(emulator, sound)?;

        screen.render(emulator.frame_buffer())?;
    }

    info!("display closed, shutting down");
    Ok(())
}

fn sync_tone(emulator: &Emulator, sound: &mut Sound) -> Result<()> {
    if emulator.sound_active() {
        sound.start()
    } else {
        sound.stop()
    }
}
