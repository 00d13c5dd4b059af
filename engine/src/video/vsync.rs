//! Vertical sync: the engine's only clock.
//!
//! [`wait_vsync`] spins until the scan line leaves vertical blank, then spins
//! until it enters it again. It therefore always returns at the start of a
//! blank, never part way through one, which pins the tick rate to the refresh.

use super::registers::{TOTAL_LINES, VDRAW_LINES};

/// Source of the current scan line (`VCOUNT`).
pub trait ScanLine {
    fn vcount(&mut self) -> u16;
}

pub fn wait_vsync<S: ScanLine + ?Sized>(scan: &mut S) {
    // wait till draw
    while scan.vcount() >= VDRAW_LINES {}
    // wait till blank
    while scan.vcount() < VDRAW_LINES {}
}

/// Scan line counter that advances one line per read.
#[derive(Debug, Default, Clone)]
pub struct SimulatedScan {
    line: u16,
    frames: u32,
}

impl SimulatedScan {
    pub const fn new() -> Self {
        Self { line: 0, frames: 0 }
    }

    /// Complete frames scanned so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn line(&self) -> u16 {
        self.line
    }
}

impl ScanLine for SimulatedScan {
    fn vcount(&mut self) -> u16 {
        let line = self.line;
        self.line += 1;
        if self.line == TOTAL_LINES {
            self.line = 0;
            self.frames += 1;
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_at_the_first_blank_line() {
        let mut scan = SimulatedScan::new();
        wait_vsync(&mut scan);
        // line 160 was the read that ended the wait
        assert_eq!(scan.line(), VDRAW_LINES + 1);
        assert_eq!(scan.frames(), 0);
    }

    #[test]
    fn waits_a_whole_frame_from_inside_blank() {
        let mut scan = SimulatedScan::new();
        wait_vsync(&mut scan);
        wait_vsync(&mut scan);
        assert_eq!(scan.line(), VDRAW_LINES + 1);
        assert_eq!(scan.frames(), 1);
    }
}
