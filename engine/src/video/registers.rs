//! # Display Registers
//!
//! Bit layout and addresses shared by the in-memory display and the cartridge.
//!
//! | Register   | Address       | Access | Use here                        |
//! |------------|---------------|--------|---------------------------------|
//! | `DISPCNT`  | `0x0400_0000` | R/W    | mode, BG2 enable, page select   |
//! | `VCOUNT`   | `0x0400_0006` | R      | scan line, for vsync            |
//! | `KEYINPUT` | `0x0400_0130` | R      | active-low pad bits             |

bitflags::bitflags! {
    /// Display control flags (`DISPCNT`).
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct DispCnt: u16 {
        /// Bits 0-2: background mode.
        const MODE       = 0b0000_0000_0000_0111;
        const MODE3      = 3;
        const MODE4      = 4;
        /// Which mode-4 page is scanned out. Toggle this to flip.
        const PAGE       = 1 << 4;
        const FORCED_BLANK = 1 << 7;
        const BG2_ON     = 1 << 10;
    }
}

pub const REG_DISPCNT: usize = 0x0400_0000;
pub const REG_VCOUNT: usize = 0x0400_0006;
pub const REG_KEYINPUT: usize = 0x0400_0130;

pub const PALETTE_BG: usize = 0x0500_0000;
pub const VRAM: usize = 0x0600_0000;

/// Byte offset of the second mode-4 page from the start of VRAM.
pub const PAGE1_OFFSET: usize = 0xA000;
/// Bytes in one mode-4 page.
pub const PAGE_BYTES: usize = 240 * 160;
/// Bytes in the mode-3 direct-color bitmap.
pub const DIRECT_BYTES: usize = 240 * 160 * 2;
/// VRAM covered by the bitmap modes.
pub const BITMAP_VRAM_BYTES: usize = 0x14000;

/// Lines per frame, including vertical blank.
pub const TOTAL_LINES: u16 = 228;
/// First line of vertical blank.
pub const VDRAW_LINES: u16 = 160;

impl DispCnt {
    /// Index of the page currently drawn to.
    #[inline(always)]
    pub fn back_page(self) -> usize {
        if self.contains(DispCnt::PAGE) { 0 } else { 1 }
    }
}
