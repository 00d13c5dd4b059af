//! # Turnip Field Engine
//!
//! The frame engine for a tiny farming game on a 240×160 handheld with two
//! paletted video pages. Every vertical blank the engine:
//!
//! 1. flips the video pages, so drawing targets the hidden one
//! 2. erases the player's previous footprint
//! 3. steps the player and the crop grid
//! 4. composites crops and the player onto the back page
//! 5. waits for the next vertical blank
//!
//! Hardware is reached only through the traits in [`video`], [`input`] and
//! [`video::vsync`], so the same [`field::Field`] runs on the cartridge and on
//! the in-memory [`video::framebuffers::Framebuffers`] used by tests and the
//! host simulator.
//!
//! ```ignore
//! use turnip_engine::{config::FieldConfig, field::Field};
//!
//! let mut field = Field::new(FieldConfig::default());
//! field.startup(&mut display);
//! loop {
//!     field.tick(&mut display, pad.read_keys());
//!     wait_vsync(&mut scan);
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod assets;
pub mod config;
pub mod crop;
pub mod field;
pub mod geometry;
pub mod input;
pub mod player;
pub mod video;

pub use config::FieldConfig;
pub use field::Field;
pub use geometry::Position;
