//! Playback driver for recorded traces.
//!
//! [`Playback`] owns a trace and a cursor into it. Front-ends feed it
//! elapsed time through [`Playback::tick`] and user input through
//! [`Playback::apply`], then draw [`Playback::current`].

use std::time::Duration;

use crate::step::Step;

/// Frames skipped by [`PlaybackAction::Forward`] and
/// [`PlaybackAction::Backward`].
pub const SEEK_FRAMES: usize = 10;

/// Largest speed multiplier.
pub const MAX_SPEED: u32 = 64;

/// Shortest interval between two automatically advanced frames.
pub const MIN_DELAY: Duration = Duration::from_millis(4);

/// Actions a front-end can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    None,
    /// Step one frame forward and pause.
    Next,
    /// Step one frame back and pause.
    Previous,
    TogglePause,
    SpeedMore,
    SpeedLess,
    /// Skip [`SEEK_FRAMES`] forward.
    Forward,
    /// Skip [`SEEK_FRAMES`] back.
    Backward,
}

/// Plays a trace frame by frame.
///
/// Supports auto-play with adjustable speed, pause and resume, single
/// stepping and seeking. The cursor always points at a valid frame unless
/// the trace is empty.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    idx: usize,
    auto_play: bool,
    /// Speed multiplier (1 = normal, 2 = 2x, etc.)
    speed: u32,
    base: Duration,
    pending: Duration,
}

impl Playback {
    /// Start playing `steps` from the first frame, one frame per `base`
    /// interval at normal speed.
    pub fn new(steps: Vec<Step>, base: Duration) -> Self {
        Self {
            steps,
            idx: 0,
            auto_play: true,
            speed: 1,
            base,
            pending: Duration::ZERO,
        }
    }

    /// The frame under the cursor.
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.idx)
    }

    /// The current frame index.
    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether auto-play is active.
    pub fn is_auto_play(&self) -> bool {
        self.auto_play
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Whether the cursor sits on the last frame.
    pub fn is_finished(&self) -> bool {
        self.idx + 1 >= self.steps.len()
    }

    /// Interval between automatically advanced frames at the current speed.
    pub fn delay(&self) -> Duration {
        (self.base / self.speed).max(MIN_DELAY)
    }

    /// Advance one frame. Returns false at the end of the trace.
    pub fn next(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.idx += 1;
        true
    }

    /// Go back one frame. Returns false at the start of the trace.
    pub fn previous(&mut self) -> bool {
        if self.idx == 0 {
            return false;
        }
        self.idx -= 1;
        true
    }

    /// Move the cursor to frame `n`, clamped to the trace.
    pub fn seek(&mut self, n: usize) {
        self.idx = n.min(self.steps.len().saturating_sub(1));
        self.pending = Duration::ZERO;
    }

    pub fn toggle_pause(&mut self) {
        self.auto_play = !self.auto_play;
        self.pending = Duration::ZERO;
    }

    pub fn speed_more(&mut self) {
        self.speed = (self.speed * 2).min(MAX_SPEED);
    }

    pub fn speed_less(&mut self) {
        self.speed = (self.speed / 2).max(1);
    }

    /// Apply a user action. Returns whether the displayed frame changed.
    pub fn apply(&mut self, action: PlaybackAction) -> bool {
        let before = self.idx;
        match action {
            PlaybackAction::None => {}
            PlaybackAction::Next => {
                self.auto_play = false;
                self.next();
            }
            PlaybackAction::Previous => {
                self.auto_play = false;
                self.previous();
            }
            PlaybackAction::TogglePause => self.toggle_pause(),
            PlaybackAction::SpeedMore => self.speed_more(),
            PlaybackAction::SpeedLess => self.speed_less(),
            PlaybackAction::Forward => self.seek(self.idx + SEEK_FRAMES),
            PlaybackAction::Backward => self.seek(self.idx.saturating_sub(SEEK_FRAMES)),
        }
        self.idx != before
    }

    /// Account for `elapsed` wall time and advance as many frames as it
    /// covers. Returns the number of frames advanced.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if !self.auto_play || self.is_finished() {
            self.pending = Duration::ZERO;
            return 0;
        }
        self.pending += elapsed;
        let delay = self.delay();
        let mut advanced = 0;
        while self.pending >= delay && self.next() {
            self.pending -= delay;
            advanced += 1;
        }
        if self.is_finished() {
            self.pending = Duration::ZERO;
            log::trace!("playback reached frame {}", self.idx);
        }
        advanced
    }
}
