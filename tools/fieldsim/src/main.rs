mod script;
mod sim;
mod snapshot;

use std::{ops::RangeInclusive, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::util::SubscriberInitExt;
use turnip_engine::{
    assets::PALETTE,
    config::{FieldConfig, TILE_SIZE},
};

use crate::{
    script::{Exhausted, Script},
    sim::{Simulation, Snapshots},
    snapshot::{bgr555_to_rgb, save_visible},
};

#[derive(Parser)]
#[command(name = "fieldsim")]
#[command(version, about = "Headless Turnip Field simulator", long_about = None)]
struct Cli {
    /// More logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the field for a number of ticks and save the last frame
    Run {
        /// Ticks (frames) to simulate
        #[arg(short, long, default_value_t = 600)]
        ticks: u32,

        /// Input script, e.g. `right*30,a,-*20,up+a*5`
        #[arg(short, long, conflicts_with = "script_file")]
        script: Option<String>,

        /// Read the input script from a file
        #[arg(long)]
        script_file: Option<PathBuf>,

        /// What the script does after its last step
        #[arg(long, value_enum, default_value_t = Exhausted::Cycle)]
        exhausted: Exhausted,

        /// Where to write the final visible frame
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,

        /// Also write a frame every N ticks
        #[arg(long, requires = "snapshot_dir")]
        snapshot_every: Option<u32>,

        /// Directory for periodic frames
        #[arg(long)]
        snapshot_dir: Option<PathBuf>,

        /// Pixels moved per tick while walking
        #[arg(long)]
        speed: Option<i32>,

        /// Ticks between animation frames
        #[arg(long)]
        anim_pause: Option<i32>,

        /// Ticks a watered crop needs to grow one stage
        #[arg(long)]
        growth: Option<i32>,
    },

    /// Print the background palette as RGB hex
    Palette {},
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .finish()
        .init();
}

/// Apply command-line overrides on top of the default tuning.
fn field_config(speed: Option<i32>, anim_pause: Option<i32>, growth: Option<i32>) -> anyhow::Result<FieldConfig> {
    fn checked(name: &str, value: Option<i32>, default: i32, range: RangeInclusive<i32>) -> anyhow::Result<i32> {
        let value = value.unwrap_or(default);
        if !range.contains(&value) {
            bail!("--{name} must be in {}..={}, got {value}", range.start(), range.end());
        }
        Ok(value)
    }

    let defaults = FieldConfig::default();
    Ok(FieldConfig {
        step_speed: checked("speed", speed, defaults.step_speed, 1..=TILE_SIZE)?,
        anim_pause: checked("anim-pause", anim_pause, defaults.anim_pause, 1..=i32::MAX)?,
        growth_ticks: checked("growth", growth, defaults.growth_ticks, 1..=i32::MAX)?,
        ..defaults
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            ticks,
            script,
            script_file,
            exhausted,
            output,
            snapshot_every,
            snapshot_dir,
            speed,
            anim_pause,
            growth,
        } => {
            let config = field_config(speed, anim_pause, growth)?;

            let text = match (script, script_file) {
                (Some(text), _) => Some(text),
                (None, Some(path)) => Some(
                    std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read script {}", path.display()))?,
                ),
                (None, None) => None,
            };
            let script = match text {
                Some(text) => Script::parse(&text, exhausted)?,
                None => Script::idle(),
            };
            info!(
                "running {ticks} ticks, script of {} steps ({} ticks per pass)",
                script.steps().len(),
                script.len_ticks()
            );

            let snapshots = snapshot_every
                .zip(snapshot_dir)
                .map(|(every, dir)| Snapshots { every, dir });

            let mut sim = Simulation::new(config, script);
            sim.run(ticks, snapshots.as_ref())?;

            save_visible(&sim.fb, &output)?;
            info!("last frame written to {}", output.display());
            sim.print_summary();
        }
        Commands::Palette {} => {
            for (i, color) in PALETTE.iter().enumerate() {
                let [r, g, b] = bgr555_to_rgb(*color).0;
                println!("{:>2} (slot {:>2}): {color:#06x}  #{r:02x}{g:02x}{b:02x}", i, i + 1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_keeps_the_defaults() {
        assert_eq!(field_config(None, None, None).unwrap(), FieldConfig::default());
    }

    #[test]
    fn overrides_inside_their_range_apply() {
        let config = field_config(Some(16), Some(1), Some(1)).unwrap();
        assert_eq!((config.step_speed, config.anim_pause, config.growth_ticks), (16, 1, 1));
    }

    #[test]
    fn out_of_range_overrides_are_rejected() {
        for (speed, anim_pause, growth) in [
            (Some(i32::MAX), None, None),
            (Some(17), None, None),
            (Some(0), None, None),
            (Some(-2), None, None),
            (None, Some(0), None),
            (None, Some(-10), None),
            (None, None, Some(0)),
            (None, None, Some(-60)),
        ] {
            assert!(field_config(speed, anim_pause, growth).is_err(), "{speed:?} {anim_pause:?} {growth:?}");
        }
    }

    #[test]
    fn rejection_names_the_flag() {
        let err = field_config(Some(2_147_483_647), None, None).unwrap_err();
        assert_eq!(err.to_string(), "--speed must be in 1..=16, got 2147483647");
    }

    #[test]
    fn cli_accepts_a_huge_speed_but_run_refuses_it() {
        let cli = Cli::try_parse_from(["fieldsim", "run", "--speed", "2147483647", "--script", "right*5", "-t", "5"]).unwrap();
        let Commands::Run { speed, anim_pause, growth, .. } = cli.command else {
            panic!("expected the run subcommand");
        };
        assert!(field_config(speed, anim_pause, growth).is_err());
    }
}
