//! In-memory stand-in for the bitmap VRAM, palette and `DISPCNT`.
//!
//! Layout matches the hardware byte for byte: page 0 at offset 0, page 1 at
//! [`PAGE1_OFFSET`], the mode-3 bitmap overlapping both from offset 0.

use super::{
    Display,
    registers::{BITMAP_VRAM_BYTES, DIRECT_BYTES, DispCnt, PAGE_BYTES, PAGE1_OFFSET},
};
use crate::config::SCREEN_WIDTH;

const WIDTH: usize = SCREEN_WIDTH as usize;

pub struct Framebuffers {
    vram: [u8; BITMAP_VRAM_BYTES],
    palette: [u16; 256],
    dispcnt: DispCnt,
    flips: u32,
}

impl Default for Framebuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffers {
    pub const fn new() -> Self {
        Self {
            vram: [0; BITMAP_VRAM_BYTES],
            palette: [0; 256],
            dispcnt: DispCnt::empty(),
            flips: 0,
        }
    }

    #[inline(always)]
    fn page_offset(page: usize) -> usize {
        if page == 0 { 0 } else { PAGE1_OFFSET }
    }

    pub fn page(&self, page: usize) -> &[u8] {
        let start = Self::page_offset(page);
        &self.vram[start..start + PAGE_BYTES]
    }

    fn page_mut(&mut self, page: usize) -> &mut [u8] {
        let start = Self::page_offset(page);
        &mut self.vram[start..start + PAGE_BYTES]
    }

    /// The page being scanned out.
    pub fn visible(&self) -> &[u8] {
        self.page(1 - self.dispcnt.back_page())
    }

    /// The page being drawn to.
    pub fn back(&self) -> &[u8] {
        self.page(self.dispcnt.back_page())
    }

    pub fn visible_pixel(&self, x: usize, y: usize) -> u8 {
        self.visible()[y * WIDTH + x]
    }

    pub fn back_pixel(&self, x: usize, y: usize) -> u8 {
        self.back()[y * WIDTH + x]
    }

    /// Mode-3 pixel at `(x, y)`.
    pub fn direct_pixel(&self, x: usize, y: usize) -> u16 {
        let at = (y * WIDTH + x) * 2;
        u16::from_le_bytes([self.vram[at], self.vram[at + 1]])
    }

    pub fn palette(&self) -> &[u16; 256] {
        &self.palette
    }

    pub fn dispcnt(&self) -> DispCnt {
        self.dispcnt
    }

    pub fn flips(&self) -> u32 {
        self.flips
    }
}

impl Display for Framebuffers {
    fn set_mode(&mut self, mode: DispCnt) {
        self.dispcnt = mode;
    }

    fn flip(&mut self) {
        self.dispcnt.toggle(DispCnt::PAGE);
        self.flips = self.flips.wrapping_add(1);
    }

    fn set_palette_bg(&mut self, index: u8, color: u16) {
        self.palette[index as usize] = color;
    }

    fn plot_pixel8(&mut self, x: usize, y: usize, index: u8) {
        let page = self.dispcnt.back_page();
        self.page_mut(page)[y * WIDTH + x] = index;
    }

    fn clear_indexed(&mut self, index: u8) {
        let word = [index; 4];
        let page = self.dispcnt.back_page();
        for chunk in self.page_mut(page).chunks_exact_mut(4) {
            chunk.copy_from_slice(&word);
        }
    }

    fn clear_direct(&mut self, color: u16) {
        let pair = color.to_le_bytes();
        for chunk in self.vram[..DIRECT_BYTES].chunks_exact_mut(2) {
            chunk.copy_from_slice(&pair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_drawing_to_the_hidden_page() {
        let mut fb = Framebuffers::new();
        fb.set_mode(DispCnt::MODE4 | DispCnt::BG2_ON);
        fb.plot_pixel8(3, 2, 7);
        assert_eq!(fb.back_pixel(3, 2), 7);
        assert_eq!(fb.visible_pixel(3, 2), 0);
    }

    #[test]
    fn flip_shows_what_was_drawn() {
        let mut fb = Framebuffers::new();
        fb.plot_pixel8(239, 159, 5);
        fb.flip();
        assert_eq!(fb.visible_pixel(239, 159), 5);
        assert_eq!(fb.back_pixel(239, 159), 0);
        assert_eq!(fb.flips(), 1);
    }

    #[test]
    fn clear_indexed_fills_only_the_back_page() {
        let mut fb = Framebuffers::new();
        fb.clear_indexed(9);
        assert!(fb.back().iter().all(|&p| p == 9));
        assert!(fb.visible().iter().all(|&p| p == 0));
    }

    #[test]
    fn clear_direct_fills_the_whole_bitmap() {
        let mut fb = Framebuffers::new();
        fb.clear_direct(0x7FFF);
        assert_eq!(fb.direct_pixel(0, 0), 0x7FFF);
        assert_eq!(fb.direct_pixel(239, 159), 0x7FFF);
    }

    #[test]
    fn palette_slots() {
        let mut fb = Framebuffers::new();
        fb.set_palette_bg(1, 0x1234);
        assert_eq!(fb.palette()[1], 0x1234);
        assert_eq!(fb.palette()[0], 0);
    }
}
