//! # Input
//!
//! The pad is a single 16-bit register, one bit per key, **active-low**: a
//! cleared bit means the key is held. [`Gamepad::read`] inverts it so the rest
//! of the engine deals in "pressed = 1".
//!
//! ```ignore
//! let mut pad = Gamepad::new();
//! pad.read(keypad.read_keys());
//! if pad.is_pressed(Buttons::A) { /* water */ }
//! ```

use bit_field::BitField;
use bitflags::bitflags;

bitflags! {
    /// KEYINPUT bit layout.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct KeyInput: u16 {
        const A      = 1 << 0;
        const B      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const RIGHT  = 1 << 4;
        const LEFT   = 1 << 5;
        const UP     = 1 << 6;
        const DOWN   = 1 << 7;
        const R      = 1 << 8;
        const L      = 1 << 9;
    }
}

impl KeyInput {
    /// Raw register value with exactly these keys held.
    #[inline(always)]
    pub const fn active_low(self) -> u16 {
        !self.bits() & Self::all().bits()
    }
}

/// Source of the raw, active-low key register.
pub trait KeyPad {
    fn read_keys(&mut self) -> u16;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Buttons {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
    R,
    L,
}

impl Buttons {
    pub const ALL: [Buttons; 10] = [
        Buttons::A,
        Buttons::B,
        Buttons::Select,
        Buttons::Start,
        Buttons::Right,
        Buttons::Left,
        Buttons::Up,
        Buttons::Down,
        Buttons::R,
        Buttons::L,
    ];

    const fn idx(&self) -> usize {
        match self {
            Buttons::A => 0,
            Buttons::B => 1,
            Buttons::Select => 2,
            Buttons::Start => 3,
            Buttons::Right => 4,
            Buttons::Left => 5,
            Buttons::Up => 6,
            Buttons::Down => 7,
            Buttons::R => 8,
            Buttons::L => 9,
        }
    }
}

/// Latched pad state for one tick, plus the previous tick for edges.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Gamepad {
    pub buttons: u16,
    pub buttons_last: u16,
}

impl Gamepad {
    pub const fn new() -> Self {
        Self {
            buttons: 0,
            buttons_last: 0,
        }
    }

    /// Latch a raw active-low register value.
    #[inline(always)]
    pub fn read(&mut self, raw: u16) {
        self.buttons_last = self.buttons;
        self.buttons = !raw & KeyInput::all().bits();
    }

    #[inline]
    pub fn is_pressed(&self, button: Buttons) -> bool {
        self.buttons.get_bit(button.idx())
    }

    #[inline]
    pub fn was_pressed(&self, button: Buttons) -> bool {
        self.buttons_last.get_bit(button.idx())
    }

    /// True only on the tick the button went down.
    #[inline]
    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.is_pressed(button) && !self.was_pressed(button)
    }

    /// True only on the tick the button came up.
    #[inline]
    pub fn just_released(&self, button: Buttons) -> bool {
        !self.is_pressed(button) && self.was_pressed(button)
    }

    pub fn held(&self) -> KeyInput {
        KeyInput::from_bits_truncate(self.buttons)
    }
}

/// Replays a fixed sequence of key states, one per read, then holds the last.
#[derive(Debug, Clone)]
pub struct ScriptedPad<'a> {
    steps: &'a [KeyInput],
    cursor: usize,
}

impl<'a> ScriptedPad<'a> {
    pub fn new(steps: &'a [KeyInput]) -> Self {
        Self { steps, cursor: 0 }
    }
}

impl KeyPad for ScriptedPad<'_> {
    fn read_keys(&mut self) -> u16 {
        let keys = match self.steps.get(self.cursor) {
            Some(keys) => {
                self.cursor += 1;
                *keys
            }
            None => self.steps.last().copied().unwrap_or(KeyInput::empty()),
        };
        keys.active_low()
    }
}
