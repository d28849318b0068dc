/// The two 8-bit countdown timers. The run loop ticks them once per frame;
/// a nonzero sound timer means the tone should be playing.
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self { delay: 0, sound: 0 }
    }

    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_down_and_stops_at_zero() {
        let mut timers = Timers::new();
        timers.delay = 1;
        timers.tick();
        assert_eq!(timers.delay, 0);
        timers.tick();
        assert_eq!(timers.delay, 0);
    }

    #[test]
    fn sound_is_active_while_nonzero() {
        let mut timers = Timers::new();
        assert!(!timers.sound_active());
        timers.sound = 2;
        assert!(timers.sound_active());
        timers.tick();
        assert!(timers.sound_active());
        timers.tick();
        assert!(!timers.sound_active());
    }
}
