//! # Sprite Compositor
//!
//! The single rendering primitive. Ground tiles, crops, the player and the
//! held turnip all reach the screen through [`draw_sprite`].
//!
//! Two rules apply to every cell:
//!
//! - a stored value of `0` is the color key and is never written
//! - cells that land outside `[0, 240) × [0, 160)` are skipped
//!
//! Neither is an error. Written pixels carry `value + 1`, keeping index 0 of
//! the frame for the untouched background.

use super::Display;
use crate::{
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
    geometry::Position,
};

pub const TRANSPARENT: u8 = 0;

/// Immutable indexed-color image, `width × height` row-major.
#[derive(Debug)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    pub pixels: &'static [u8],
}

impl Sprite {
    #[inline(always)]
    pub fn at(&self, col: usize, row: usize) -> u8 {
        self.pixels[row * self.width + col]
    }
}

/// Draw `sprite` with its top-left corner at `origin` onto the back page.
pub fn draw_sprite<D: Display + ?Sized>(display: &mut D, sprite: &Sprite, origin: Position) {
    for i in 0..sprite.height {
        let y = origin.y + i as i32;
        if !(0..SCREEN_HEIGHT).contains(&y) {
            continue;
        }
        for j in 0..sprite.width {
            let x = origin.x + j as i32;
            let value = sprite.at(j, i);
            if value != TRANSPARENT && (0..SCREEN_WIDTH).contains(&x) {
                display.plot_pixel8(x as usize, y as usize, value + 1);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::video::registers::DispCnt;

    /// Records every write instead of storing pixels.
    #[derive(Default)]
    pub(crate) struct RecordingDisplay {
        pub writes: Vec<(usize, usize, u8)>,
        pub flips: usize,
    }

    impl Display for RecordingDisplay {
        fn set_mode(&mut self, _mode: DispCnt) {}
        fn flip(&mut self) {
            self.flips += 1;
        }
        fn set_palette_bg(&mut self, _index: u8, _color: u16) {}
        fn plot_pixel8(&mut self, x: usize, y: usize, index: u8) {
            self.writes.push((x, y, index));
        }
        fn clear_indexed(&mut self, _index: u8) {}
        fn clear_direct(&mut self, _color: u16) {}
    }

    static CHECKER: Sprite = Sprite {
        width: 4,
        height: 2,
        pixels: &[1, 0, 2, 0, 0, 3, 0, 4],
    };

    static SOLID: Sprite = Sprite {
        width: 16,
        height: 16,
        pixels: &[6; 256],
    };

    #[test]
    fn writes_value_plus_one_and_skips_the_key() {
        let mut rec = RecordingDisplay::default();
        draw_sprite(&mut rec, &CHECKER, Position::new(10, 20));
        assert_eq!(rec.writes, vec![(10, 20, 2), (12, 20, 3), (11, 21, 4), (13, 21, 5)]);
    }

    #[test]
    fn transparent_cells_never_write() {
        static CLEAR: Sprite = Sprite {
            width: 8,
            height: 8,
            pixels: &[TRANSPARENT; 64],
        };
        let mut rec = RecordingDisplay::default();
        draw_sprite(&mut rec, &CLEAR, Position::new(0, 0));
        assert!(rec.writes.is_empty());
    }

    #[test]
    fn clips_to_the_screen() {
        let corners = [
            Position::new(-8, -8),
            Position::new(232, -8),
            Position::new(-8, 152),
            Position::new(232, 152),
        ];
        for origin in corners {
            let mut rec = RecordingDisplay::default();
            draw_sprite(&mut rec, &SOLID, origin);
            assert_eq!(rec.writes.len(), 8 * 8, "origin {origin:?}");
            assert!(rec.writes.iter().all(|&(x, y, _)| x < 240 && y < 160));
        }
    }

    #[test]
    fn fully_off_screen_draws_nothing() {
        let mut rec = RecordingDisplay::default();
        draw_sprite(&mut rec, &SOLID, Position::new(240, 0));
        draw_sprite(&mut rec, &SOLID, Position::new(0, -16));
        assert!(rec.writes.is_empty());
    }
}
