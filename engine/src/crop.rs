//! # Crops
//!
//! A crop sits in one grid cell for its whole life and walks a three-stage
//! cycle:
//!
//! ```text
//!         water (arms countdown)         countdown hits 0
//!  Seed ─────────────────────────► Seed+wet ───────────────► Sprout
//!  Sprout ───────────────────────► Sprout+wet ─────────────► Mature
//!  Mature ── water ──► harvested: back to Seed, dry
//! ```
//!
//! The countdown only exists while the crop is wet, so it is stored inside
//! the wet state rather than beside a separate flag.

use log::debug;

use crate::{
    assets,
    config::TILE_SIZE,
    geometry::Position,
    video::{
        Display,
        compositor::{Sprite, draw_sprite},
    },
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Seed,
    Sprout,
    Mature,
}

impl Stage {
    /// The next stage, if there is one.
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::Seed => Some(Stage::Sprout),
            Stage::Sprout => Some(Stage::Mature),
            Stage::Mature => None,
        }
    }
}

/// What [`Crop::action`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Watering {
    /// The crop was dry and is now counting down.
    Watered,
    /// Already wet; nothing changed.
    AlreadyWet,
    /// The crop was mature and has been picked.
    Harvested,
}

impl Watering {
    pub fn harvested(self) -> bool {
        self == Watering::Harvested
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crop {
    cell: Position,
    stage: Stage,
    /// Ticks left until the next stage; `Some` exactly while watered.
    countdown: Option<i32>,
    growth_ticks: i32,
}

impl Crop {
    pub const fn new(cell: Position, growth_ticks: i32) -> Self {
        Self {
            cell,
            stage: Stage::Seed,
            countdown: None,
            growth_ticks,
        }
    }

    pub fn cell(&self) -> Position {
        self.cell
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_watered(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn countdown(&self) -> Option<i32> {
        self.countdown
    }

    /// True if this crop occupies `cell`.
    pub fn is(&self, cell: Position) -> bool {
        self.cell == cell
    }

    /// The player's watering can landed on this crop.
    pub fn action(&mut self) -> Watering {
        if self.stage == Stage::Mature {
            self.stage = Stage::Seed;
            self.countdown = None;
            debug!(target: "crop", "harvested crop at {:?}", self.cell);
            return Watering::Harvested;
        }

        if self.countdown.is_some() {
            return Watering::AlreadyWet;
        }

        self.countdown = Some(self.growth_ticks);
        debug!(target: "crop", "watered {:?} crop at {:?}", self.stage, self.cell);
        Watering::Watered
    }

    /// Advance one tick. Returns the new stage if the crop grew.
    pub fn update(&mut self) -> Option<Stage> {
        let remaining = self.countdown.as_mut()?;
        *remaining -= 1;
        if *remaining > 0 {
            return None;
        }

        self.countdown = None;
        let grown = self.stage.next()?;
        self.stage = grown;
        debug!(target: "crop", "crop at {:?} grew to {:?}", self.cell, grown);
        Some(grown)
    }

    pub fn sprite(&self) -> &'static Sprite {
        match (self.stage, self.is_watered()) {
            (Stage::Seed, false) => &assets::SEED,
            (Stage::Seed, true) => &assets::SEED_WET,
            (Stage::Sprout, false) => &assets::SPROUT,
            (Stage::Sprout, true) => &assets::SPROUT_WET,
            // watering a mature crop harvests it, so there is no wet variant
            (Stage::Mature, _) => &assets::TURNIP,
        }
    }

    pub fn draw<D: Display + ?Sized>(&self, display: &mut D) {
        draw_sprite(display, self.sprite(), self.cell.times(TILE_SIZE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::compositor::tests::RecordingDisplay;

    fn crop() -> Crop {
        Crop::new(Position::new(6, 3), 60)
    }

    #[test]
    fn dry_crop_never_grows() {
        let mut c = crop();
        for _ in 0..10_000 {
            assert_eq!(c.update(), None);
        }
        assert_eq!(c.stage(), Stage::Seed);
        assert!(!c.is_watered());
    }

    #[test]
    fn watering_arms_the_countdown_once() {
        let mut c = crop();
        assert_eq!(c.action(), Watering::Watered);
        assert_eq!(c.countdown(), Some(60));
        c.update();
        assert_eq!(c.action(), Watering::AlreadyWet);
        assert_eq!(c.countdown(), Some(59));
    }

    #[test]
    fn grows_after_exactly_the_countdown() {
        let mut c = crop();
        c.action();
        for _ in 0..59 {
            assert_eq!(c.update(), None);
        }
        assert_eq!(c.update(), Some(Stage::Sprout));
        assert!(!c.is_watered());
    }

    #[test]
    fn continuous_watering_matures_in_120_ticks() {
        let mut c = crop();
        let mut ticks = 0;
        while c.stage() != Stage::Mature {
            c.action();
            c.update();
            ticks += 1;
            assert!(ticks <= 120);
        }
        assert_eq!(ticks, 120);
    }

    #[test]
    fn harvest_resets_to_dry_seed() {
        let mut c = crop();
        c.stage = Stage::Mature;
        assert!(c.action().harvested());
        assert_eq!(c.stage(), Stage::Seed);
        assert!(!c.is_watered());
    }

    #[test]
    fn sprite_follows_stage_and_moisture() {
        let mut c = crop();
        assert!(core::ptr::eq(c.sprite(), &assets::SEED));
        c.action();
        assert!(core::ptr::eq(c.sprite(), &assets::SEED_WET));
        c.stage = Stage::Sprout;
        assert!(core::ptr::eq(c.sprite(), &assets::SPROUT_WET));
        c.countdown = None;
        assert!(core::ptr::eq(c.sprite(), &assets::SPROUT));
        c.stage = Stage::Mature;
        assert!(core::ptr::eq(c.sprite(), &assets::TURNIP));
    }

    #[test]
    fn draws_inside_its_cell() {
        let mut rec = RecordingDisplay::default();
        crop().draw(&mut rec);
        assert!(!rec.writes.is_empty());
        assert!(rec.writes.iter().all(|&(x, y, _)| (96..112).contains(&x) && (48..64).contains(&y)));
    }
}
