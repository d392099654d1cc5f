//! Per-level attempt state machine
//!
//! Owns one shape, at most one live stroke, the cut budget, and the level
//! countdown. The surrounding platform layer feeds pointer events and a
//! clock in; everything here is deterministic for the same event sequence.

use glam::Vec2;

use super::score::{Grade, grade, score};
use super::shape::Shape;
use super::split::{SplitResult, compute_split};
use super::stroke::Stroke;
use crate::consts::{MAX_TIME_BONUS, MIN_STROKE_REACH};
use crate::levels::{LevelConfig, shape_for_level};

/// Current phase of a level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for a gesture to start
    Ready,
    /// A stroke is being captured
    Cutting,
    /// A cut was scored; terminal for this attempt
    Resolved,
    /// The countdown expired before a scoreable cut; terminal
    TimeUp,
}

/// A scored cut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutScore {
    pub split: SplitResult,
    pub score: f32,
    pub grade: Grade,
    pub time_bonus: f32,
}

/// Result of ending a stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutOutcome {
    /// Gesture reach below the minimum; discarded, no cut consumed
    TooShort,
    /// Stroke never crossed the fruit (or sampling found nothing to
    /// split); discarded, no cut consumed
    Missed,
    /// A scoreable cut
    Cut(CutScore),
}

/// State for one attempt at one level
#[derive(Debug, Clone)]
pub struct LevelSession {
    config: LevelConfig,
    shape: Shape,
    stroke: Option<Stroke>,
    phase: SessionPhase,
    cuts_remaining: u32,
    time_remaining: f32,
    last_cut: Option<CutScore>,
}

impl LevelSession {
    /// Start an attempt: build the level's shape for the given canvas and
    /// arm the cut budget and countdown.
    pub fn new(config: &LevelConfig, canvas_width: f32, canvas_height: f32) -> Self {
        let shape = shape_for_level(config, canvas_width, canvas_height);
        log::info!(
            "level {} started: {:?} fruit, {}s, {} cut(s)",
            config.level,
            config.fruit,
            config.time_limit,
            config.cuts_allowed,
        );
        Self {
            shape,
            stroke: None,
            phase: SessionPhase::Ready,
            cuts_remaining: config.cuts_allowed,
            time_remaining: config.time_limit,
            last_cut: None,
            config: config.clone(),
        }
    }

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The stroke currently being captured, for renderer feedback
    #[inline]
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    #[inline]
    pub fn cuts_remaining(&self) -> u32 {
        self.cuts_remaining
    }

    #[inline]
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    /// The scored cut, once the session is Resolved
    #[inline]
    pub fn last_cut(&self) -> Option<&CutScore> {
        self.last_cut.as_ref()
    }

    /// Whether the resolved cut meets the level's target score
    pub fn passed(&self) -> bool {
        self.last_cut
            .map(|cut| cut.score >= self.config.target_score)
            .unwrap_or(false)
    }

    /// Advance the countdown by `dt` seconds. The clock only runs while
    /// the player can still act; expiry discards any live stroke.
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            SessionPhase::Ready | SessionPhase::Cutting => {
                self.time_remaining -= dt;
                if self.time_remaining <= 0.0 {
                    self.time_remaining = 0.0;
                    self.stroke = None;
                    self.phase = SessionPhase::TimeUp;
                    log::info!("level {}: time up", self.config.level);
                }
            }
            SessionPhase::Resolved | SessionPhase::TimeUp => {}
        }
    }

    /// Start capturing a gesture. Ignored unless the session is Ready.
    pub fn begin_stroke(&mut self, p: Vec2) {
        if self.phase != SessionPhase::Ready {
            return;
        }
        self.stroke = Some(Stroke::begin(p));
        self.phase = SessionPhase::Cutting;
    }

    /// Append a sampled gesture point. Ignored unless capturing.
    pub fn extend_stroke(&mut self, p: Vec2) {
        if self.phase != SessionPhase::Cutting {
            return;
        }
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.extend(p);
        }
    }

    /// Freeze and evaluate the live stroke. Returns `None` when no stroke
    /// is being captured.
    pub fn end_stroke(&mut self) -> Option<CutOutcome> {
        if self.phase != SessionPhase::Cutting {
            return None;
        }
        let stroke = self.stroke.take()?;

        if stroke.reach() < MIN_STROKE_REACH {
            log::debug!("stroke rejected: reach {:.1} px", stroke.reach());
            self.phase = SessionPhase::Ready;
            return Some(CutOutcome::TooShort);
        }

        let Some(split) = compute_split(&self.shape, &stroke) else {
            log::debug!("stroke rejected: no cut through the fruit");
            self.phase = SessionPhase::Ready;
            return Some(CutOutcome::Missed);
        };

        self.cuts_remaining = self.cuts_remaining.saturating_sub(1);

        let time_bonus =
            (self.time_remaining / self.config.time_limit * MAX_TIME_BONUS).round();
        let cut = CutScore {
            split,
            score: score(split.deviation, self.config.bands, time_bonus),
            grade: grade(split.deviation, self.config.bands),
            time_bonus,
        };
        log::info!(
            "level {}: {:.1}/{:.1} split, deviation {:.2}, score {:.1} ({})",
            self.config.level,
            split.left_percent,
            split.right_percent,
            split.deviation,
            cut.score,
            cut.grade.as_str(),
        );

        self.last_cut = Some(cut);
        self.phase = SessionPhase::Resolved;
        Some(CutOutcome::Cut(cut))
    }
}
