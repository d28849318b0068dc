use std::time::Duration;

use anyhow::{Context, Result};
use minifb::{Key, Scale, Window, WindowOptions};

use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::keyboard::{self, InputFrame};

const OFF_COLOR: u32 = 0x00_000000;
const ON_COLOR: u32 = 0x00_007FFF;

/// The window the frame buffer is presented in. Each cell becomes a 16x16
/// rectangle; the update-rate limiter doubles as the run loop's ~60 Hz
/// frame pacing.
pub struct Screen {
    window: Window,
    pixels: Vec<u32>,
}

impl Screen {
    pub fn new() -> Result<Self> {
        let mut window = Window::new(
            "chirp8",
            WIDTH,
            HEIGHT,
            WindowOptions {
                scale: Scale::X16,
                ..WindowOptions::default()
            },
        )
        .context("opening the display window")?;
        window.limit_update_rate(Some(Duration::from_micros(16_600)));

        Ok(Self {
            window,
            pixels: vec![OFF_COLOR; WIDTH * HEIGHT],
        })
    }

    /// False once the user closes the window or hits Escape.
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    pub fn input(&self) -> InputFrame {
        keyboard::snapshot(&self.window)
    }

    pub fn render(&mut self, fb: &FrameBuffer) -> Result<()> {
        for (cell, &lit) in self.pixels.iter_mut().zip(fb.rows().iter().flatten()) {
            *cell = if lit { ON_COLOR } else { OFF_COLOR };
        }
        self.window
            .update_with_buffer(&self.pixels, WIDTH, HEIGHT)
            .context("presenting the frame")
    }
}
