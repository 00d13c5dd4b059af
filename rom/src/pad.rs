use turnip_engine::{
    input::KeyPad,
    video::{registers::REG_KEYINPUT, vsync::ScanLine},
};
use volatile_register::{RO, RW};

use crate::display::Lcd;

/// Keypad I/O block at `0x0400_0130`.
#[repr(C)]
pub struct Keys {
    pub keyinput: RO<u16>,
    pub keycnt: RW<u16>,
}

pub struct HardwarePad {
    keys: &'static Keys,
}

impl HardwarePad {
    pub unsafe fn new() -> Self {
        Self {
            keys: unsafe { &*(REG_KEYINPUT as *const Keys) },
        }
    }
}

impl KeyPad for HardwarePad {
    #[inline(always)]
    fn read_keys(&mut self) -> u16 {
        self.keys.keyinput.read()
    }
}

/// `VCOUNT`, read-only, shared with the display.
pub struct HardwareScan {
    lcd: &'static Lcd,
}

impl HardwareScan {
    pub unsafe fn new() -> Self {
        Self {
            lcd: unsafe { Lcd::new() },
        }
    }
}

impl ScanLine for HardwareScan {
    #[inline(always)]
    fn vcount(&mut self) -> u16 {
        self.lcd.vcount.read()
    }
}
