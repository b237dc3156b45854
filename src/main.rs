//! Headless engine runner (default binary).
//!
//! Drives a seeded engine at a fixed 60 Hz timestep with no player input
//! and prints the events it drains each frame, then the final score. With
//! `--json`, each frame is emitted as one adapter observation line instead.
//! This is a driver for smoke-running the engine, not a presentation
//! layer: no rendering, no keyboard polling.

use anyhow::{anyhow, Result};

use blockfall::adapter::{observation_from_snapshot, to_json_line};
use blockfall::engine::GameEngine;
use blockfall::types::{GameEvent, TICK_S};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunConfig {
    seed: u32,
    ticks: u32,
    json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            ticks: 3600,
            json: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --ticks"))?;
                config.ticks = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --ticks value: {}", v))?;
            }
            "--json" => {
                config.json = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn run(config: RunConfig) -> Result<()> {
    let mut engine = GameEngine::new(config.seed);
    let mut events: Vec<GameEvent> = Vec::new();

    for frame in 0..config.ticks {
        engine.tick(TICK_S);

        events.clear();
        while let Some(event) = engine.pop_event() {
            events.push(event);
        }

        if config.json {
            let snapshot = engine.snapshot();
            let ts = (frame as f32 * TICK_S * 1000.0) as u64;
            let message = observation_from_snapshot(frame as u64 + 1, ts, &snapshot, &events);
            print!("{}", to_json_line(&message)?);
        } else {
            for event in &events {
                match event {
                    GameEvent::LinesCleared { count } => {
                        println!("[{}] cleared {} line(s)", frame, count)
                    }
                    GameEvent::Message(message) => println!("[{}] {}", frame, message.as_str()),
                    GameEvent::GameOver => println!("[{}] game over", frame),
                }
            }
        }

        if engine.game_over() {
            break;
        }
    }

    if !config.json {
        println!("final score: {}", engine.score());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    run(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_uses_defaults() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn parse_args_parses_seed_ticks_json() {
        let args = vec![
            "--seed".to_string(),
            "42".to_string(),
            "--ticks".to_string(),
            "120".to_string(),
            "--json".to_string(),
        ];
        let config = parse_args(&args).unwrap();
        assert_eq!(
            config,
            RunConfig {
                seed: 42,
                ticks: 120,
                json: true
            }
        );
    }

    #[test]
    fn parse_args_rejects_unknown_flags() {
        let args = vec!["--speed".to_string()];
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn parse_args_rejects_missing_values() {
        let args = vec!["--seed".to_string()];
        assert!(parse_args(&args).is_err());
    }
}
