//! # Player
//!
//! The farmer is a small state machine driven once per tick by the pad:
//!
//! | Action     | Entered by                          | Left by                                |
//! |------------|-------------------------------------|----------------------------------------|
//! | `Standing` | no direction held                   | a direction, or A                      |
//! | `Walking`  | a held direction                    | releasing it, or A                     |
//! | `Watering` | A while standing or walking         | the animation reaching frame 2         |
//! | `Carrying` | [`Player::pick_up`] after a harvest | walking once the turnip is held up     |
//!
//! Watering cannot be interrupted. Carrying cannot be interrupted while the
//! farmer is still bending down (frame 0); once the turnip is held overhead
//! (frame 1) the animation freezes until the player walks away.
//!
//! ## Animation
//!
//! Every non-standing action counts `anim_pause` down from the configured
//! delay; at zero the frame advances `0 → 1 → 2 → 3 → 0`. Which sprite is
//! shown for a frame is a pure lookup in [`POSES`].

use log::debug;

use crate::{
    assets,
    config::{FieldConfig, PLAYER_MAX, TILE_SIZE},
    geometry::Position,
    input::{Buttons, Gamepad},
    video::{
        Display,
        compositor::{Sprite, draw_sprite},
    },
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Input priority when several directions are held.
    pub const PRIORITY: [(Buttons, Direction); 4] = [
        (Buttons::Right, Direction::Right),
        (Buttons::Left, Direction::Left),
        (Buttons::Up, Direction::Up),
        (Buttons::Down, Direction::Down),
    ];

    /// Unit step along this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Standing,
    Walking,
    Watering,
    Carrying,
}

/// Animation frame, always in `0..4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Phase(u8);

impl Phase {
    pub const COUNT: u8 = 4;

    pub fn new(frame: u8) -> Self {
        assert!(frame < Self::COUNT, "animation frame {frame} out of range");
        Self(frame)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A sprite and where to draw it relative to the player's origin.
#[derive(Copy, Clone, Debug)]
pub struct Pose {
    pub sprite: &'static Sprite,
    pub offset: Position,
}

const fn still(sprite: &'static Sprite) -> Pose {
    Pose {
        sprite,
        offset: Position::ORIGIN,
    }
}

const fn shifted(sprite: &'static Sprite, dx: i32) -> Pose {
    Pose {
        sprite,
        offset: Position::new(dx, 0),
    }
}

/// Every action of one facing direction, indexed `[action][phase]`.
///
/// Walking shows the standing pose on phases 1 and 3 for the bob. Watering and
/// carrying only have two poses; their second half repeats the first.
const fn facing_row(
    stand: &'static Sprite,
    walk: [&'static Sprite; 2],
    water: [Pose; 2],
    pick: [&'static Sprite; 2],
) -> [[Pose; 4]; 4] {
    [
        [still(stand); 4],
        [still(walk[0]), still(stand), still(walk[1]), still(stand)],
        [water[0], water[1], water[0], water[1]],
        [still(pick[0]), still(pick[1]), still(pick[0]), still(pick[1])],
    ]
}

/// Sprite lookup keyed by `(facing, action, phase)`.
pub struct PoseTable([[[Pose; 4]; 4]; 4]);

impl PoseTable {
    pub fn get(&self, facing: Direction, action: Action, phase: Phase) -> Pose {
        self.0[facing as usize][action as usize][phase.index()]
    }
}

pub static POSES: PoseTable = PoseTable([
    facing_row(
        &assets::STAND_LEFT,
        [&assets::WALK_LEFT_1, &assets::WALK_LEFT_2],
        // the can swings out ahead of the farmer, 8px left of the origin
        [shifted(&assets::WATER_LEFT_1, -8), shifted(&assets::WATER_LEFT_2, -8)],
        [&assets::PICK_LEFT_1, &assets::PICK_LEFT_2],
    ),
    facing_row(
        &assets::STAND_RIGHT,
        [&assets::WALK_RIGHT_1, &assets::WALK_RIGHT_2],
        [still(&assets::WATER_RIGHT_1), still(&assets::WATER_RIGHT_2)],
        [&assets::PICK_RIGHT_1, &assets::PICK_RIGHT_2],
    ),
    facing_row(
        &assets::STAND_UP,
        [&assets::WALK_UP_1, &assets::WALK_UP_2],
        [still(&assets::WATER_UP_1), still(&assets::WATER_UP_2)],
        [&assets::PICK_UP_1, &assets::PICK_UP_2],
    ),
    facing_row(
        &assets::STAND_DOWN,
        [&assets::WALK_DOWN_1, &assets::WALK_DOWN_2],
        [still(&assets::WATER_DOWN_1), still(&assets::WATER_DOWN_2)],
        [&assets::PICK_DOWN_1, &assets::PICK_DOWN_2],
    ),
]);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    position: Position,
    facing: Direction,
    action: Action,
    anim_frame: u8,
    anim_pause: i32,
    speed: i32,
    anim_delay: i32,
}

impl Player {
    pub fn new(config: &FieldConfig) -> Self {
        Self::placed(Position::ORIGIN, Direction::Down, config)
    }

    /// A standing player at `position` (clamped onto the field).
    pub fn placed(position: Position, facing: Direction, config: &FieldConfig) -> Self {
        Self {
            position: position.clamp(Position::ORIGIN, PLAYER_MAX),
            facing,
            action: Action::Standing,
            anim_frame: 0,
            anim_pause: config.anim_pause,
            speed: config.step_speed,
            anim_delay: config.anim_pause,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn anim_frame(&self) -> u8 {
        self.anim_frame
    }

    pub fn anim_pause(&self) -> i32 {
        self.anim_pause
    }

    pub fn is_watering(&self) -> bool {
        self.action == Action::Watering
    }

    /// Carrying with the turnip overhead; the animation is frozen here.
    pub fn holding_item(&self) -> bool {
        self.action == Action::Carrying && self.anim_frame == 1
    }

    fn busy(&self) -> bool {
        matches!(self.action, Action::Watering | Action::Carrying)
    }

    /// Advance one tick with the latched pad state.
    pub fn update(&mut self, pad: &Gamepad) {
        self.animate();

        match Direction::PRIORITY.iter().find(|(button, _)| pad.is_pressed(*button)) {
            Some(&(_, direction)) => self.walk(direction),
            None if !self.busy() => self.action = Action::Standing,
            None => {}
        }

        if pad.is_pressed(Buttons::A) && !self.busy() {
            self.action = Action::Watering;
            self.anim_frame = 0;
            self.anim_pause = self.anim_delay;
        }
    }

    fn animate(&mut self) {
        if self.action != Action::Standing && !self.holding_item() {
            if self.anim_pause <= 0 {
                self.anim_pause = self.anim_delay;
                self.anim_frame = (self.anim_frame + 1) % Phase::COUNT;
                if self.anim_frame == 2 && self.action == Action::Watering {
                    self.action = Action::Standing;
                }
            }
            self.anim_pause -= 1;
        } else {
            if self.action == Action::Standing {
                self.anim_frame = 0;
            }
            self.anim_pause = self.anim_delay;
        }
    }

    fn walk(&mut self, direction: Direction) {
        let bending_down = self.action == Action::Carrying && self.anim_frame == 0;
        if self.action == Action::Watering || bending_down {
            return;
        }

        self.facing = direction;
        self.action = Action::Walking;
        let (dx, dy) = direction.delta();
        self.position = self
            .position
            .plus(dx.saturating_mul(self.speed), dy.saturating_mul(self.speed))
            .clamp(Position::ORIGIN, PLAYER_MAX);
    }

    /// Start the pick-up animation after a harvest.
    pub fn pick_up(&mut self) {
        debug!(target: "player", "picking up at {:?}", self.position);
        self.action = Action::Carrying;
        self.anim_frame = 0;
        self.anim_pause = self.anim_delay;
    }

    /// Grid cell reached by the watering can (and by a pick-up).
    pub fn watering_target(&self) -> Position {
        let p = self.position;
        let reach = match self.facing {
            Direction::Up => p.plus(8, 0),
            Direction::Down => p.plus(8, 28),
            Direction::Left => p.plus(-8, 20),
            Direction::Right => p.plus(28, 20),
        };
        reach.div(TILE_SIZE)
    }

    /// Grid cell the player was drawn from, one step back along the facing.
    pub fn last_cell(&self) -> Position {
        let back_x = if self.facing == Direction::Right { self.speed } else { 0 };
        let back_y = if self.facing == Direction::Down { self.speed } else { 0 };
        self.position.plus(-back_x, -back_y).div(TILE_SIZE)
    }

    /// Repaint the ground under the previous footprint.
    ///
    /// Sprites don't erase themselves, so this must run on the fresh back
    /// page before the player moves and is redrawn.
    pub fn erase<D: Display + ?Sized>(&self, display: &mut D) {
        let last = self.last_cell();
        for i in -1..3 {
            for j in -1..3 {
                draw_sprite(display, &assets::GROUND, last.plus(i, j).times(TILE_SIZE));
            }
        }
    }

    pub fn pose(&self) -> Pose {
        POSES.get(self.facing, self.action, Phase::new(self.anim_frame))
    }

    pub fn draw<D: Display + ?Sized>(&self, display: &mut D) {
        if self.holding_item() {
            let dx = if self.facing == Direction::Up { 0 } else { 1 };
            draw_sprite(display, &assets::TURNIP_HELD, self.position.plus(dx, -11));
        }

        let pose = self.pose();
        draw_sprite(display, pose.sprite, self.position.plus(pose.offset.x, pose.offset.y));
    }
}
