//! Input scripts: a compact way to hold keys for a number of ticks.
//!
//! `right*30,a,-*20,up+a*5` holds right for 30 ticks, taps A once, waits 20
//! ticks, then holds up and A together for 5.

use anyhow::{Context, bail};
use turnip_engine::input::{KeyInput, KeyPad};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub keys: KeyInput,
    pub count: u32,
}

/// What a script does once it has played every step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Exhausted {
    /// Start over from the first step.
    #[default]
    Cycle,
    /// Release every key.
    Release,
}

fn key(name: &str) -> anyhow::Result<KeyInput> {
    Ok(match name {
        "a" => KeyInput::A,
        "b" => KeyInput::B,
        "select" => KeyInput::SELECT,
        "start" => KeyInput::START,
        "right" => KeyInput::RIGHT,
        "left" => KeyInput::LEFT,
        "up" => KeyInput::UP,
        "down" => KeyInput::DOWN,
        "r" => KeyInput::R,
        "l" => KeyInput::L,
        other => bail!("unknown key `{other}`"),
    })
}

fn parse_step(step: &str) -> anyhow::Result<Step> {
    let (keys, count) = match step.split_once('*') {
        Some((keys, count)) => {
            let count = count
                .trim()
                .parse::<u32>()
                .with_context(|| format!("bad repeat count in `{step}`"))?;
            (keys.trim(), count)
        }
        None => (step.trim(), 1),
    };

    if count == 0 {
        bail!("step `{step}` repeats zero times");
    }

    let keys = match keys {
        "-" => KeyInput::empty(),
        "" => bail!("step `{step}` names no keys (use `-` for none)"),
        keys => keys
            .split('+')
            .map(|name| key(&name.trim().to_ascii_lowercase()))
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .fold(KeyInput::empty(), |acc, k| acc | k),
    };

    Ok(Step { keys, count })
}

#[derive(Debug, Clone)]
pub struct Script {
    steps: Vec<Step>,
    exhausted: Exhausted,
    step: usize,
    played: u32,
}

impl Script {
    pub fn parse(text: &str, exhausted: Exhausted) -> anyhow::Result<Self> {
        let steps = text
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(parse_step)
            .collect::<anyhow::Result<Vec<_>>>()
            .context("failed to parse input script")?;

        Ok(Self {
            steps,
            exhausted,
            step: 0,
            played: 0,
        })
    }

    /// A script that never presses anything.
    pub fn idle() -> Self {
        Self {
            steps: Vec::new(),
            exhausted: Exhausted::Release,
            step: 0,
            played: 0,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Total ticks in one pass of the script.
    pub fn len_ticks(&self) -> u64 {
        self.steps.iter().map(|s| s.count as u64).sum()
    }

    /// Keys for the next tick.
    pub fn next_keys(&mut self) -> KeyInput {
        if self.step >= self.steps.len() {
            match self.exhausted {
                Exhausted::Cycle if !self.steps.is_empty() => self.step = 0,
                _ => return KeyInput::empty(),
            }
        }

        let current = &self.steps[self.step];
        let keys = current.keys;
        self.played += 1;
        if self.played >= current.count {
            self.played = 0;
            self.step += 1;
        }
        keys
    }
}

impl KeyPad for Script {
    fn read_keys(&mut self) -> u16 {
        self.next_keys().active_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counts_and_combos() {
        let script = Script::parse("right*30, a, -*20, up+A*5", Exhausted::Cycle).unwrap();
        assert_eq!(
            script.steps(),
            &[
                Step { keys: KeyInput::RIGHT, count: 30 },
                Step { keys: KeyInput::A, count: 1 },
                Step { keys: KeyInput::empty(), count: 20 },
                Step { keys: KeyInput::UP | KeyInput::A, count: 5 },
            ]
        );
        assert_eq!(script.len_ticks(), 56);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Script::parse("jump", Exhausted::Cycle).is_err());
        assert!(Script::parse("a*x", Exhausted::Cycle).is_err());
        assert!(Script::parse("a*0", Exhausted::Cycle).is_err());
        assert!(Script::parse("a+", Exhausted::Cycle).is_err());
    }

    #[test]
    fn unknown_key_is_named_in_the_error() {
        let err = Script::parse("a,jump*3", Exhausted::Cycle).unwrap_err();
        assert!(format!("{err:#}").contains("unknown key `jump`"));
    }

    #[test]
    fn cycles_when_exhausted() {
        let mut script = Script::parse("a,b*2", Exhausted::Cycle).unwrap();
        let keys: Vec<_> = (0..5).map(|_| script.next_keys()).collect();
        assert_eq!(keys, vec![KeyInput::A, KeyInput::B, KeyInput::B, KeyInput::A, KeyInput::B]);
    }

    #[test]
    fn releases_when_exhausted() {
        let mut script = Script::parse("left*2", Exhausted::Release).unwrap();
        let keys: Vec<_> = (0..4).map(|_| script.next_keys()).collect();
        assert_eq!(keys, vec![KeyInput::LEFT, KeyInput::LEFT, KeyInput::empty(), KeyInput::empty()]);
    }

    #[test]
    fn idle_and_empty_scripts_press_nothing() {
        let mut idle = Script::idle();
        assert_eq!(idle.read_keys(), KeyInput::empty().active_low());
        let mut empty = Script::parse("", Exhausted::Cycle).unwrap();
        assert_eq!(empty.next_keys(), KeyInput::empty());
    }
}
