//! Button bitset and the per-frame input sample.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use anyhow::Result;

/// Pressed-button bitset, one bit per physical control.
///
/// Bit positions follow the console's HID register layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Keys(u32);

impl Keys {
    pub const NONE: Keys = Keys(0);
    pub const A: Keys = Keys(1 << 0);
    pub const B: Keys = Keys(1 << 1);
    pub const SELECT: Keys = Keys(1 << 2);
    pub const START: Keys = Keys(1 << 3);
    pub const DRIGHT: Keys = Keys(1 << 4);
    pub const DLEFT: Keys = Keys(1 << 5);
    pub const DUP: Keys = Keys(1 << 6);
    pub const DDOWN: Keys = Keys(1 << 7);
    pub const R: Keys = Keys(1 << 8);
    pub const L: Keys = Keys(1 << 9);
    pub const X: Keys = Keys(1 << 10);
    pub const Y: Keys = Keys(1 << 11);
    pub const ZL: Keys = Keys(1 << 14);
    pub const ZR: Keys = Keys(1 << 15);
    pub const TOUCH: Keys = Keys(1 << 20);
    pub const CSTICK_RIGHT: Keys = Keys(1 << 24);
    pub const CSTICK_LEFT: Keys = Keys(1 << 25);
    pub const CSTICK_UP: Keys = Keys(1 << 26);
    pub const CSTICK_DOWN: Keys = Keys(1 << 27);
    pub const CPAD_RIGHT: Keys = Keys(1 << 28);
    pub const CPAD_LEFT: Keys = Keys(1 << 29);
    pub const CPAD_UP: Keys = Keys(1 << 30);
    pub const CPAD_DOWN: Keys = Keys(1 << 31);

    /// D-pad or circle pad up.
    pub const UP: Keys = Keys(Self::DUP.0 | Self::CPAD_UP.0);
    /// D-pad or circle pad down.
    pub const DOWN: Keys = Keys(Self::DDOWN.0 | Self::CPAD_DOWN.0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        Keys(bits)
    }

    /// True if any bit of `other` is set.
    pub fn intersects(self, other: Keys) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every bit of `other` is set.
    pub fn contains(self, other: Keys) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Keys {
    type Output = Keys;

    fn bitor(self, rhs: Keys) -> Keys {
        Keys(self.0 | rhs.0)
    }
}

impl BitOrAssign for Keys {
    fn bitor_assign(&mut self, rhs: Keys) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Keys {
    type Output = Keys;

    fn bitand(self, rhs: Keys) -> Keys {
        Keys(self.0 & rhs.0)
    }
}

/// Analog stick deflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StickPosition {
    pub dx: i16,
    pub dy: i16,
}

/// Touch point on the bottom screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchPosition {
    pub px: u16,
    pub py: u16,
}

/// Everything read from the input hardware in one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputFrame {
    /// Keys that went down this frame.
    pub down: Keys,
    /// Keys currently held, including those in `down`.
    pub held: Keys,
    pub circle_pad: StickPosition,
    pub c_stick: StickPosition,
    /// Set while the screen is touched.
    pub touch: Option<TouchPosition>,
    /// Raw volume slider, 0..=63.
    pub volume: u8,
    /// 3D slider position, 0.0..=1.0.
    pub slider_3d: f32,
    /// HOME button pressed.
    pub home: bool,
    /// The host asked the application to close.
    pub exit_requested: bool,
}

impl InputFrame {
    /// L held while R goes down, or R held while L goes down.
    pub fn lr_chord(&self) -> bool {
        (self.held.contains(Keys::L) && self.down.contains(Keys::R))
            || (self.held.contains(Keys::R) && self.down.contains(Keys::L))
    }
}

/// Source of input frames, polled once per frame.
///
/// Polling blocks for at most one frame interval.
pub trait Hid {
    fn scan_input(&mut self) -> Result<InputFrame>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(down: Keys, held: Keys) -> InputFrame {
        InputFrame {
            down,
            held,
            ..Default::default()
        }
    }

    #[test]
    fn up_and_down_cover_both_pads() {
        assert!(Keys::DUP.intersects(Keys::UP));
        assert!(Keys::CPAD_UP.intersects(Keys::UP));
        assert!(Keys::DDOWN.intersects(Keys::DOWN));
        assert!(!Keys::DUP.intersects(Keys::DOWN));
    }

    #[test]
    fn contains_requires_all_bits() {
        let keys = Keys::L | Keys::R;
        assert!(keys.contains(Keys::L));
        assert!(keys.contains(Keys::L | Keys::R));
        assert!(!keys.contains(Keys::L | Keys::A));
    }

    #[test]
    fn chord_l_then_r() {
        assert!(frame(Keys::R, Keys::L | Keys::R).lr_chord());
    }

    #[test]
    fn chord_r_then_l() {
        assert!(frame(Keys::L, Keys::L | Keys::R).lr_chord());
    }

    #[test]
    fn chord_needs_an_edge() {
        // Both held but neither went down this frame.
        assert!(!frame(Keys::NONE, Keys::L | Keys::R).lr_chord());
        // Only one shoulder involved.
        assert!(!frame(Keys::L, Keys::L).lr_chord());
    }
}
