use crate::constants::KEY_COUNT;

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad (keys 0..F).
///
/// The host owns the keyboard and answers queries about it; the interpreter only ever asks
/// whether a key is currently held. Keys outside 0..F are never down.
pub trait Keypad {
    fn is_key_down(&self, key: u8) -> bool;
}

impl Keypad for [bool; KEY_COUNT] {
    fn is_key_down(&self, key: u8) -> bool {
        self.get(key as usize).copied().unwrap_or(false)
    }
}

/// Pressed status of each key, maintained by the host from its input events
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Keys {
    pressed: [bool; KEY_COUNT],
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn press(&mut self, key: u8) {
        if let Some(k) = self.pressed.get_mut(key as usize) {
            *k = true;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn release(&mut self, key: u8) {
        if let Some(k) = self.pressed.get_mut(key as usize) {
            *k = false;
        }
    }

    /// The lowest numbered key that is currently held
    pub fn first_down(&self) -> Option<u8> {
        first_down(self)
    }
}

impl Keypad for Keys {
    fn is_key_down(&self, key: u8) -> bool {
        self.pressed.is_key_down(key)
    }
}

/// The lowest numbered key that `keypad` reports as held
pub fn first_down(keypad: &dyn Keypad) -> Option<u8> {
    (0..KEY_COUNT as u8).find(|&key| keypad.is_key_down(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = Keys::new();
        keys.press(0xE);
        assert!(keys.is_key_down(0xE));
        keys.release(0xE);
        assert!(!keys.is_key_down(0xE));
    }

    #[test]
    fn test_out_of_range_keys_are_ignored() {
        let mut keys = Keys::new();
        keys.press(0x10);
        assert_eq!(keys, Keys::new());
        assert!(!keys.is_key_down(0xFF));
    }

    #[test]
    fn test_first_down_picks_lowest_key() {
        let mut keys = Keys::new();
        assert_eq!(keys.first_down(), None);
        keys.press(0x9);
        keys.press(0x3);
        assert_eq!(keys.first_down(), Some(0x3));
    }

    #[test]
    fn test_array_keypad() {
        let mut pressed = [false; KEY_COUNT];
        pressed[0x4] = true;
        assert!(pressed.is_key_down(0x4));
        assert!(!pressed.is_key_down(0x5));
        assert!(!pressed.is_key_down(0x20));
    }
}
