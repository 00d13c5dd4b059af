//! Whole-field scenarios run against in-memory hardware.

use pretty_assertions::assert_eq;
use turnip_engine::{
    config::{FieldConfig, PLAYER_MAX},
    crop::{Stage, Watering},
    field::Field,
    geometry::Position,
    input::{KeyInput, KeyPad, ScriptedPad},
    player::{Action, Direction, Player},
    video::{
        Display,
        compositor::{Sprite, draw_sprite},
        framebuffers::Framebuffers,
        registers::DispCnt,
    },
};

#[derive(Default)]
struct Recorder {
    writes: Vec<(usize, usize, u8)>,
}

impl Display for Recorder {
    fn set_mode(&mut self, _mode: DispCnt) {}
    fn flip(&mut self) {}
    fn set_palette_bg(&mut self, _index: u8, _color: u16) {}
    fn plot_pixel8(&mut self, x: usize, y: usize, index: u8) {
        self.writes.push((x, y, index));
    }
    fn clear_indexed(&mut self, _index: u8) {}
    fn clear_direct(&mut self, _color: u16) {}
}

/// xorshift32, enough to wander the field.
struct Wander(u32);

impl Wander {
    fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}

fn field_with(position: Position, facing: Direction) -> Field {
    let config = FieldConfig::default();
    Field::with_player(Player::placed(position, facing, &config), config)
}

#[test]
fn random_walks_stay_on_the_field() {
    let directions = [KeyInput::LEFT, KeyInput::RIGHT, KeyInput::UP, KeyInput::DOWN];
    let mut rng = Wander(0x1234_5678);
    let mut fb = Framebuffers::new();
    let mut field = Field::new(FieldConfig::default());
    field.startup(&mut fb);

    for _ in 0..200 {
        let keys = directions[(rng.next() % 4) as usize];
        let steps = rng.next() % 120;
        for _ in 0..steps {
            field.tick(&mut fb, keys.active_low());
            let p = field.player.position();
            assert!((0..=PLAYER_MAX.x).contains(&p.x), "x out of range: {p:?}");
            assert!((0..=PLAYER_MAX.y).contains(&p.y), "y out of range: {p:?}");
        }
    }
}

#[test]
fn partially_visible_sprite_only_writes_on_screen() {
    static BLOCK: Sprite = Sprite {
        width: 16,
        height: 22,
        pixels: &[3; 16 * 22],
    };
    let mut rec = Recorder::default();
    draw_sprite(&mut rec, &BLOCK, Position::new(230, 150));
    assert_eq!(rec.writes.len(), 10 * 10);
    assert!(rec.writes.iter().all(|&(x, y, v)| x < 240 && y < 160 && v == 4));
}

#[test]
fn transparent_cells_leave_the_page_alone() {
    static RING: Sprite = Sprite {
        width: 3,
        height: 3,
        pixels: &[1, 1, 1, 1, 0, 1, 1, 1, 1],
    };
    let mut fb = Framebuffers::new();
    fb.clear_indexed(9);
    draw_sprite(&mut fb, &RING, Position::new(0, 0));
    assert_eq!(fb.back_pixel(1, 1), 9);
    assert_eq!(fb.back_pixel(0, 0), 2);
}

#[test]
fn held_walking_cycles_the_animation() {
    let mut rec = Recorder::default();
    let mut field = Field::new(FieldConfig::default());

    let mut frames = Vec::new();
    for _ in 0..45 {
        field.tick(&mut rec, KeyInput::RIGHT.active_low());
        let frame = field.player.anim_frame();
        if frames.last() != Some(&frame) {
            frames.push(frame);
        }
    }
    assert_eq!(frames, vec![0, 1, 2, 3, 0]);
    assert_eq!(field.player.action(), Action::Walking);
}

#[test]
fn holding_a_over_the_first_crop_grows_it_at_tick_61() {
    // facing down from here the can lands on cell (6, 3)
    let mut field = field_with(Position::new(88, 20), Direction::Down);
    assert_eq!(field.player.watering_target(), field.crops[0].cell());

    let script = [KeyInput::A];
    let mut pad = ScriptedPad::new(&script);
    let mut fb = Framebuffers::new();
    field.startup(&mut fb);

    let first = field.tick(&mut fb, pad.read_keys());
    assert_eq!(first.watered, Some((0, Watering::Watered)));
    assert_eq!(field.crops[0].countdown(), Some(60));

    for tick in 2..61 {
        let report = field.tick(&mut fb, pad.read_keys());
        assert_eq!(report.grown[0], None, "tick {tick}");
        assert_eq!(field.crops[0].stage(), Stage::Seed);
    }

    let report = field.tick(&mut fb, pad.read_keys());
    assert_eq!(field.ticks(), 61);
    assert_eq!(report.grown[0], Some(Stage::Sprout));
    assert_eq!(field.crops[0].stage(), Stage::Sprout);
    // the can is still out, so the sprout is watered again the same tick
    assert_eq!(report.watered, Some((0, Watering::Watered)));

    // the rest of the grid was never touched
    assert!(field.crops[1..].iter().all(|c| c.stage() == Stage::Seed && !c.is_watered()));
}

#[test]
fn continuous_watering_reaches_a_turnip_then_harvests_it() {
    let mut field = field_with(Position::new(88, 20), Direction::Down);
    let mut fb = Framebuffers::new();
    field.startup(&mut fb);

    let mut mature_at = None;
    let mut harvested_at = None;
    for _ in 0..400 {
        let report = field.tick(&mut fb, KeyInput::A.active_low());
        if report.grown[0] == Some(Stage::Mature) {
            mature_at = Some(field.ticks());
        }
        if report.harvested() {
            harvested_at = Some(field.ticks());
            break;
        }
    }

    assert_eq!(mature_at, Some(121));
    // the can is out on the tick the turnip ripens
    assert_eq!(harvested_at, Some(121));
    assert_eq!(field.player.action(), Action::Carrying);
    assert_eq!(field.crops[0].stage(), Stage::Seed);
}

#[test]
fn the_visible_page_lags_one_tick_behind() {
    let mut field = Field::new(FieldConfig::default());
    let mut fb = Framebuffers::new();
    field.startup(&mut fb);

    field.tick(&mut fb, KeyInput::empty().active_low());
    let drawn = fb.back().to_vec();
    field.tick(&mut fb, KeyInput::empty().active_low());
    assert!(fb.visible() == drawn.as_slice());
}
