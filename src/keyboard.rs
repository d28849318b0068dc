use minifb::{Key, Window};

/// Physical key for each CHIP-8 key code, indexed by the code itself.
///
/// The hex pad maps onto the left block of a QWERTY board:
///
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|      |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub const KEYPAD: [Key; 16] = [
    Key::X,    // 0
    Key::Key1, // 1
    Key::Key2, // 2
    Key::Key3, // 3
    Key::Q,    // 4
    Key::W,    // 5
    Key::E,    // 6
    Key::A,    // 7
    Key::S,    // 8
    Key::D,    // 9
    Key::Z,    // A
    Key::C,    // B
    Key::Key4, // C
    Key::R,    // D
    Key::F,    // E
    Key::V,    // F
];

/// What the keypad looked like when the frame started: at most one key
/// currently held and at most one released since the previous frame. The
/// run loop builds a fresh one every frame and drops it at frame end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputFrame {
    pub held: Option<u8>,
    pub released: Option<u8>,
}

/// Sample the window's key state into a snapshot.
pub fn snapshot(window: &Window) -> InputFrame {
    let mut frame = InputFrame::default();
    for (code, &key) in KEYPAD.iter().enumerate() {
        if frame.held.is_none() && window.is_key_down(key) {
            frame.held = Some(code as u8);
        }
        if frame.released.is_none() && window.is_key_released(key) {
            frame.released = Some(code as u8);
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_covers_every_code_once() {
        for code in 0..16 {
            let key = KEYPAD[code];
            assert_eq!(
                KEYPAD.iter().filter(|&&k| k == key).count(),
                1,
                "key {key:?} appears more than once"
            );
        }
    }

    #[test]
    fn layout_matches_the_cosmac_pad() {
        assert_eq!(KEYPAD[0x1], Key::Key1);
        assert_eq!(KEYPAD[0xC], Key::Key4);
        assert_eq!(KEYPAD[0x0], Key::X);
        assert_eq!(KEYPAD[0xF], Key::V);
    }
}
