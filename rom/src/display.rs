//! # Mode 4 Display
//!
//! [`Mode4Display`] drives the real LCD registers and VRAM. Two quirks shape
//! it:
//!
//! - VRAM ignores byte writes (the byte is mirrored into both halves of the
//!   halfword), so a single 8-bit pixel is a 16-bit read-modify-write
//! - bulk fills go out as 32-bit words
//!
//! | Page | Address       |
//! |------|---------------|
//! | 0    | `0x0600_0000` |
//! | 1    | `0x0600_A000` |

use bit_field::BitField;
use turnip_engine::{
    config::SCREEN_WIDTH,
    video::{
        Display,
        registers::{DIRECT_BYTES, DispCnt, PAGE_BYTES, PAGE1_OFFSET, PALETTE_BG, REG_DISPCNT, VRAM},
    },
};
use volatile_register::{RO, RW};

/// LCD I/O block at `0x0400_0000`.
#[repr(C)]
pub struct Lcd {
    pub dispcnt: RW<u16>,
    _green_swap: RW<u16>,
    pub dispstat: RW<u16>,
    pub vcount: RO<u16>,
}

impl Lcd {
    pub unsafe fn new() -> &'static Lcd {
        unsafe { &*(REG_DISPCNT as *const Lcd) }
    }
}

pub struct Mode4Display {
    lcd: &'static Lcd,
    dispcnt: DispCnt,
}

impl Mode4Display {
    /// # Safety
    /// Only one display may exist; it owns the LCD registers, VRAM and
    /// background palette.
    pub unsafe fn new() -> Self {
        Self {
            lcd: unsafe { Lcd::new() },
            dispcnt: DispCnt::FORCED_BLANK,
        }
    }

    #[inline(always)]
    fn back_page(&self) -> *mut u16 {
        (VRAM + self.dispcnt.back_page() * PAGE1_OFFSET) as *mut u16
    }

    #[inline(always)]
    fn write_dispcnt(&self) {
        unsafe { self.lcd.dispcnt.write(self.dispcnt.bits()) }
    }
}

impl Display for Mode4Display {
    fn set_mode(&mut self, mode: DispCnt) {
        self.dispcnt = mode;
        self.write_dispcnt();
    }

    fn flip(&mut self) {
        self.dispcnt.toggle(DispCnt::PAGE);
        self.write_dispcnt();
    }

    fn set_palette_bg(&mut self, index: u8, color: u16) {
        let slot = (PALETTE_BG as *mut u16).wrapping_add(index as usize);
        unsafe { slot.write_volatile(color) }
    }

    fn plot_pixel8(&mut self, x: usize, y: usize, index: u8) {
        let offset = y * SCREEN_WIDTH as usize + x;
        let halfword = self.back_page().wrapping_add(offset / 2);
        unsafe {
            let mut pair = halfword.read_volatile();
            let bits = if offset & 1 == 0 { 0..8 } else { 8..16 };
            pair.set_bits(bits, index as u16);
            halfword.write_volatile(pair);
        }
    }

    fn clear_indexed(&mut self, index: u8) {
        let word = u32::from_ne_bytes([index; 4]);
        let base = self.back_page() as *mut u32;
        for i in 0..PAGE_BYTES / 4 {
            unsafe { base.add(i).write_volatile(word) }
        }
    }

    fn clear_direct(&mut self, color: u16) {
        let word = (color as u32) << 16 | color as u32;
        let base = VRAM as *mut u32;
        for i in 0..DIRECT_BYTES / 4 {
            unsafe { base.add(i).write_volatile(word) }
        }
    }
}
