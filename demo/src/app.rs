//! Event loops of the two demo screens.

use std::error::Error;
use std::time::Instant;

use algoscope_trace::playback::{MAX_SPEED, MIN_DELAY};
use algoscope_trace::{Playback, PlaybackAction, TraceConfig};
use crossterm::style::Color;
use rand::Rng;

use crate::keys::{Input, Keys};
use crate::render::{snake_status, snake_tiles, step_cells, step_status};
use crate::snake::{GridConfig, SnakeGame};
use crate::term::{Terminal, role_color, tile_color};

/// Lines under the trace chart: title, caption, key help.
const FOOTER_ROWS: usize = 3;

/// Run the snake autopilot until the user quits.
pub fn snake(
    term: &mut Terminal,
    keys: &Keys,
    config: GridConfig,
    seed: u64,
) -> Result<(), Box<dyn Error>> {
    let mut game = SnakeGame::new(config, seed)?;
    let mut paused = false;
    let mut speed = 1u32;
    let mut last = Instant::now();
    loop {
        let rows: Vec<Vec<(char, Color)>> = snake_tiles(&game)
            .into_iter()
            .map(|row| row.into_iter().map(|t| (t.glyph(), tile_color(t))).collect())
            .collect();
        let mut status = format!("{}  seed {seed}  x{speed}", snake_status(&game));
        if paused {
            status.push_str("  [paused]");
        }
        term.draw(&rows, &[status, keys.help()])?;

        let delay = (config.tick / speed).max(MIN_DELAY);
        if let Some(code) = term.poll_key(delay.saturating_sub(last.elapsed()))? {
            match keys.input(code) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Playback(action)) => match action {
                    PlaybackAction::TogglePause => paused = !paused,
                    PlaybackAction::SpeedMore => speed = (speed * 2).min(MAX_SPEED),
                    PlaybackAction::SpeedLess => speed = (speed / 2).max(1),
                    PlaybackAction::Next => {
                        paused = true;
                        game.tick()?;
                    }
                    _ => {}
                },
                None => {}
            }
            continue;
        }
        if !paused && game.game_over().is_none() {
            game.tick()?;
        }
        last = Instant::now();
    }
}

/// Trace `config.algorithm` on a random array sized to the terminal and
/// play the trace back until the user quits.
pub fn trace<R: Rng + ?Sized>(
    term: &mut Terminal,
    keys: &Keys,
    config: &TraceConfig,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    let (cols, rows) = term.size()?;
    let config = config
        .clone()
        .with_array_size(config.array_size().min(usize::from(cols)));
    let array = config.random_array(rng);
    let target = config.resolve_target(&array, rng);
    let steps = algoscope_trace::run(config.algorithm, &array, target)?;
    let mut playback = Playback::new(steps, config.interval());

    let height = usize::from(rows).saturating_sub(FOOTER_ROWS).max(1);
    let title = match target {
        Some(t) => format!("{} for {t}", config.algorithm.name()),
        None => config.algorithm.name().to_string(),
    };
    let mut last = Instant::now();
    loop {
        if let Some(step) = playback.current() {
            let chart: Vec<Vec<(char, Color)>> = step_cells(step, height)
                .into_iter()
                .map(|row| row.into_iter().map(|(c, r)| (c, role_color(r))).collect())
                .collect();
            let mut caption = step_status(step, playback.len());
            if !playback.is_auto_play() {
                caption.push_str("  [paused]");
            }
            let title = format!("{title}  x{}", playback.speed());
            term.draw(&chart, &[title, caption, keys.help()])?;
        }

        let wait = playback.delay().saturating_sub(last.elapsed());
        if let Some(code) = term.poll_key(wait)? {
            match keys.input(code) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Playback(action)) => {
                    playback.apply(action);
                }
                None => {}
            }
        }
        let now = Instant::now();
        playback.tick(now - last);
        last = now;
    }
}
