//! # Field Configuration
//!
//! Hardware geometry is fixed and lives in `const`s. Gameplay tuning lives in
//! [`FieldConfig`], which the cartridge builds with [`Default`] and the host
//! simulator may override from the command line.
//!
//! | Constant          | Value     | Meaning                                  |
//! |-------------------|-----------|------------------------------------------|
//! | `SCREEN_WIDTH`    | 240       | visible pixels per line                  |
//! | `SCREEN_HEIGHT`   | 160       | visible lines                            |
//! | `TILE_SIZE`       | 16        | grid cell edge in pixels                 |
//! | `PLAYER_WIDTH`    | 16        | player sprite width (clamp bound)        |
//! | `PLAYER_HEIGHT`   | 22        | player sprite height (clamp bound)       |
//! | `CROP_COUNT`      | 9         | crops in the fixed 3×3 grid              |

use crate::geometry::Position;

pub const SCREEN_WIDTH: i32 = 240;
pub const SCREEN_HEIGHT: i32 = 160;

pub const TILE_SIZE: i32 = 16;
/// Ground tiles across and down the screen.
pub const TILES_X: i32 = SCREEN_WIDTH / TILE_SIZE;
pub const TILES_Y: i32 = SCREEN_HEIGHT / TILE_SIZE;

pub const PLAYER_WIDTH: i32 = 16;
pub const PLAYER_HEIGHT: i32 = 22;

/// Largest position the player's sprite origin may take.
pub const PLAYER_MAX: Position = Position::new(SCREEN_WIDTH - PLAYER_WIDTH, SCREEN_HEIGHT - PLAYER_HEIGHT);

pub const GRID_SIDE: usize = 3;
pub const CROP_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Gameplay tuning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Pixels moved per tick while walking.
    pub step_speed: i32,
    /// Ticks each animation frame is held.
    pub anim_pause: i32,
    /// Ticks a watered crop takes to advance one stage.
    pub growth_ticks: i32,
    /// Grid cell of the top-left crop.
    pub grid_origin: Position,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            step_speed: 2,
            anim_pause: 10,
            growth_ticks: 60,
            grid_origin: Position::new(6, 3),
        }
    }
}
