use std::path::PathBuf;

use tracing::{debug, info, trace};
use turnip_engine::{
    config::FieldConfig,
    crop::Stage,
    field::Field,
    input::{Buttons, KeyInput, KeyPad},
    video::{
        framebuffers::Framebuffers,
        vsync::{SimulatedScan, wait_vsync},
    },
};

use crate::{script::Script, snapshot::save_visible};

/// Where, and how often, to dump the screen while running.
#[derive(Debug, Clone)]
pub struct Snapshots {
    pub every: u32,
    pub dir: PathBuf,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u32,
    pub frames: u32,
    pub harvests: u32,
    pub grown: u32,
    pub snapshots: u32,
    /// Key-down edges seen across the run.
    pub presses: u32,
}

/// The engine wired to in-memory hardware.
pub struct Simulation {
    pub field: Field,
    pub fb: Box<Framebuffers>,
    pub scan: SimulatedScan,
    pub script: Script,
    summary: Summary,
}

impl Simulation {
    pub fn new(config: FieldConfig, script: Script) -> Self {
        let field = Field::new(config);
        let mut fb = Box::new(Framebuffers::new());
        field.startup(fb.as_mut());

        Self {
            field,
            fb,
            scan: SimulatedScan::new(),
            script,
            summary: Summary::default(),
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn step(&mut self) {
        let keys = self.script.read_keys();
        let report = self.field.tick(self.fb.as_mut(), keys);
        wait_vsync(&mut self.scan);

        self.summary.ticks = self.field.ticks();
        self.summary.frames = self.scan.frames();

        let pad = self.field.pad();
        for button in Buttons::ALL {
            if pad.just_pressed(button) {
                self.summary.presses += 1;
                trace!(tick = self.summary.ticks, ?button, "pressed");
            } else if pad.just_released(button) {
                trace!(tick = self.summary.ticks, ?button, "released");
            }
        }

        for (n, stage) in report.grown.iter().enumerate() {
            if let Some(stage) = stage {
                debug!(tick = self.summary.ticks, crop = n, ?stage, "crop grew");
                self.summary.grown += 1;
            }
        }
        if report.harvested() {
            self.summary.harvests += 1;
            info!(tick = self.summary.ticks, "turnip harvested ({} so far)", self.summary.harvests);
        }
    }

    pub fn run(&mut self, ticks: u32, snapshots: Option<&Snapshots>) -> anyhow::Result<()> {
        for _ in 0..ticks {
            self.step();

            if let Some(snap) = snapshots.filter(|s| s.every > 0) {
                if self.summary.ticks % snap.every == 0 {
                    let path = snap.dir.join(format!("tick-{:06}.png", self.summary.ticks));
                    save_visible(&self.fb, &path)?;
                    self.summary.snapshots += 1;
                    debug!(path = %path.display(), "snapshot written");
                }
            }
        }
        Ok(())
    }

    /// Keys held on the last tick.
    pub fn held(&self) -> KeyInput {
        self.field.pad().held()
    }

    pub fn print_summary(&self) {
        let player = &self.field.player;
        println!(
            "{} ticks ({} frames scanned), {} harvests, {} growth steps, {} key presses",
            self.summary.ticks, self.summary.frames, self.summary.harvests, self.summary.grown, self.summary.presses
        );
        println!("keys held at the end: {:?}", self.held());
        println!(
            "player at ({}, {}) facing {:?}, {:?}",
            player.position().x,
            player.position().y,
            player.facing(),
            player.action()
        );
        for crop in &self.field.crops {
            let stage = match crop.stage() {
                Stage::Seed => "seed",
                Stage::Sprout => "sprout",
                Stage::Mature => "turnip",
            };
            let water = match crop.countdown() {
                Some(left) => format!("wet, {left} ticks left"),
                None => "dry".to_string(),
            };
            println!("  crop ({}, {}): {stage}, {water}", crop.cell().x, crop.cell().y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Exhausted;

    #[test]
    fn idle_run_counts_frames() {
        let mut sim = Simulation::new(FieldConfig::default(), Script::idle());
        sim.run(10, None).unwrap();
        // the first wait ends at the first blank, every later one a frame on
        assert_eq!(sim.summary().ticks, 10);
        assert_eq!(sim.summary().frames, 9);
        assert_eq!(sim.summary().harvests, 0);
    }

    #[test]
    fn walking_right_moves_the_player() {
        let script = Script::parse("right*20", Exhausted::Release).unwrap();
        let mut sim = Simulation::new(FieldConfig::default(), script);
        sim.run(30, None).unwrap();
        assert_eq!(sim.field.player.position().x, 40);
    }

    #[test]
    fn counts_each_press_once() {
        let script = Script::parse("a*3,-,a+up*2,up", Exhausted::Release).unwrap();
        let mut sim = Simulation::new(FieldConfig::default(), script);
        sim.run(7, None).unwrap();
        // a, then a and up together on tick 5
        assert_eq!(sim.summary().presses, 3);
        assert_eq!(sim.held(), KeyInput::UP);
        sim.run(1, None).unwrap();
        assert_eq!(sim.held(), KeyInput::empty());
    }

    #[test]
    fn snapshots_land_in_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let snaps = Snapshots {
            every: 5,
            dir: dir.path().to_path_buf(),
        };
        let mut sim = Simulation::new(FieldConfig::default(), Script::idle());
        sim.run(12, Some(&snaps)).unwrap();

        assert_eq!(sim.summary().snapshots, 2);
        assert!(dir.path().join("tick-000005.png").exists());
        assert!(dir.path().join("tick-000010.png").exists());
    }

    #[test]
    fn faster_growth_harvests_sooner() {
        let config = FieldConfig {
            growth_ticks: 5,
            ..FieldConfig::default()
        };
        // walk to (88, 20) facing down, where the can reaches the first crop
        let script = Script::parse("right*44,down*10,a*200", Exhausted::Release).unwrap();
        let mut sim = Simulation::new(config, script);
        sim.run(254, None).unwrap();
        assert_eq!(sim.field.player.position().x, 88);
        assert_eq!(sim.field.player.position().y, 20);
        assert!(sim.summary().harvests > 0);
    }
}
