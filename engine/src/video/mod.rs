//! # Video
//!
//! The handheld runs in mode 4: a 240×160 bitmap of 8-bit palette indices,
//! with **two pages**. While one page is scanned out, the other can be drawn
//! to. This is double buffering.
//!
//! ## Double Buffering
//!
//! Call [`Display::flip`] once per tick, before drawing anything:
//!
//! ```ignore
//! loop {
//!     display.flip(); // the page we drew last tick is now on screen
//!     draw_sprite(&mut display, &GROUND, Position::ORIGIN); // lands on the hidden page
//!     wait_vsync(&mut scan);
//! }
//! ```
//!
//! Nothing ever writes to the visible page, so no locking is needed; the
//! flip-then-draw order is what keeps the scan-out and the renderer apart.
//!
//! ## Implementations
//!
//! | Type                                   | Backing                         |
//! |----------------------------------------|---------------------------------|
//! | [`framebuffers::Framebuffers`]         | in-memory VRAM, tests and host  |
//! | `turnip_rom::display::Mode4Display`    | memory-mapped VRAM on cartridge |

pub mod compositor;
pub mod framebuffers;
pub mod registers;
pub mod vsync;

use registers::DispCnt;

/// A paletted, double-buffered pixel plane.
///
/// All writes target the back page, the one **not** currently shown.
pub trait Display {
    /// Write the display control register. This also selects page 0 for
    /// scan-out unless `mode` carries [`DispCnt::PAGE`].
    fn set_mode(&mut self, mode: DispCnt);

    /// Swap the visible and hidden pages.
    fn flip(&mut self);

    /// Load one BGR555 color into background palette slot `index`.
    fn set_palette_bg(&mut self, index: u8, color: u16);

    /// Write one palette index into the back page. Callers keep `(x, y)` on
    /// screen; the compositor is the only caller.
    fn plot_pixel8(&mut self, x: usize, y: usize, index: u8);

    /// Fill the whole back page with one palette index.
    fn clear_indexed(&mut self, index: u8);

    /// Fill the whole direct-color (mode 3) bitmap with one BGR555 color.
    fn clear_direct(&mut self, color: u16);
}
