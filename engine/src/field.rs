//! # The Frame Loop
//!
//! [`Field`] owns the simulation (one player, nine crops) and runs one tick per
//! vertical blank against whatever [`Display`] it is handed:
//!
//! ```text
//!  flip ─► erase player ─► update player ─► update+draw crops ─► water/harvest ─► draw player ─► vsync
//! ```
//!
//! [`run`] is the cartridge's endless loop. Tests and the host simulator call
//! [`Field::tick`] directly.

use log::{debug, info};

use crate::{
    assets::{self, PALETTE},
    config::{CROP_COUNT, FieldConfig, GRID_SIDE, TILE_SIZE, TILES_X, TILES_Y},
    crop::{Crop, Stage, Watering},
    geometry::Position,
    input::{Gamepad, KeyPad},
    player::Player,
    video::{
        Display,
        compositor::draw_sprite,
        registers::DispCnt,
        vsync::{ScanLine, wait_vsync},
    },
};

/// What happened during one tick, for callers that care.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Crops that advanced a stage, by index.
    pub grown: [Option<Stage>; CROP_COUNT],
    /// The crop the watering can touched, and the outcome.
    pub watered: Option<(usize, Watering)>,
}

impl TickReport {
    pub fn harvested(&self) -> bool {
        matches!(self.watered, Some((_, Watering::Harvested)))
    }
}

pub struct Field {
    pub player: Player,
    pub crops: [Crop; CROP_COUNT],
    pad: Gamepad,
    ticks: u32,
}

impl Field {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_player(Player::new(&config), config)
    }

    pub fn with_player(player: Player, config: FieldConfig) -> Self {
        let origin = config.grid_origin;
        let crops = core::array::from_fn(|n| {
            let (i, j) = ((n / GRID_SIDE) as i32, (n % GRID_SIDE) as i32);
            Crop::new(origin.plus(i, j), config.growth_ticks)
        });

        Self {
            player,
            crops,
            pad: Gamepad::new(),
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn pad(&self) -> &Gamepad {
        &self.pad
    }

    /// One-time display setup: mode, palette, and ground on both pages.
    pub fn startup<D: Display + ?Sized>(&self, display: &mut D) {
        display.set_mode(DispCnt::MODE4 | DispCnt::BG2_ON);

        for (i, color) in PALETTE.iter().enumerate() {
            display.set_palette_bg(i as u8 + 1, *color);
        }

        // paint both pages so neither the first frame nor the one behind it is garbage
        for _ in 0..2 {
            display.flip();
            display.clear_indexed(0);
            paint_ground(display);
        }

        info!(target: "field", "field ready: {} crops from cell {:?}", CROP_COUNT, self.crops[0].cell());
    }

    /// Run one frame against the raw, active-low key register.
    pub fn tick<D: Display + ?Sized>(&mut self, display: &mut D, keys: u16) -> TickReport {
        let mut report = TickReport::default();
        self.ticks = self.ticks.wrapping_add(1);

        display.flip();

        self.player.erase(display);
        self.pad.read(keys);
        self.player.update(&self.pad);

        for (n, crop) in self.crops.iter_mut().enumerate() {
            report.grown[n] = crop.update();
            crop.draw(display);
        }

        if self.player.is_watering() {
            let target = self.player.watering_target();
            if let Some(n) = self.crops.iter().position(|crop| crop.is(target)) {
                let outcome = self.crops[n].action();
                if outcome.harvested() {
                    info!(target: "field", "harvested crop {} on tick {}", n, self.ticks);
                    self.player.pick_up();
                }
                report.watered = Some((n, outcome));
            }
        }

        self.player.draw(display);

        if report.grown.iter().any(Option::is_some) {
            debug!(target: "field", "tick {}: {:?}", self.ticks, report.grown);
        }
        report
    }
}

/// Cover the back page with ground tiles.
pub fn paint_ground<D: Display + ?Sized>(display: &mut D) {
    for i in 0..TILES_X {
        for j in 0..TILES_Y {
            draw_sprite(display, &assets::GROUND, Position::new(i, j).times(TILE_SIZE));
        }
    }
}

/// Start up and tick forever, one frame per vertical blank.
pub fn run<D, K, S>(field: &mut Field, display: &mut D, keypad: &mut K, scan: &mut S) -> !
where
    D: Display + ?Sized,
    K: KeyPad + ?Sized,
    S: ScanLine + ?Sized,
{
    field.startup(display);
    loop {
        field.tick(display, keypad.read_keys());
        wait_vsync(scan);
    }
}
