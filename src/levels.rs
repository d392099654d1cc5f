//! Level configuration and shape construction
//!
//! Levels are plain serde records so campaigns can ship as JSON. The
//! built-in campaign tightens tolerances and shortens the clock as the
//! silhouettes get harder to judge by eye.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::sim::{ScoreBands, Shape};

/// Which silhouette the level uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Polygon,
    Star,
}

/// Decorative fruit theme; ignored by the geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitSkin {
    Watermelon,
    Orange,
    Lemon,
    Apple,
}

/// Difficulty label shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// One level's configuration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: u32,
    pub shape: ShapeKind,
    pub fruit: FruitSkin,
    pub difficulty: Difficulty,
    /// Countdown for the attempt, seconds
    pub time_limit: f32,
    pub cuts_allowed: u32,
    /// Scoring tolerances; must satisfy 0 < perfect < good < 10
    pub bands: ScoreBands,
    /// Minimum score to clear the level
    pub target_score: f32,
    /// Silhouette rotation, radians
    pub rotation: f32,
}

fn level(
    level: u32,
    shape: ShapeKind,
    fruit: FruitSkin,
    difficulty: Difficulty,
    time_limit: f32,
    perfect_range: f32,
    good_range: f32,
    target_score: f32,
    rotation: f32,
) -> LevelConfig {
    LevelConfig {
        level,
        shape,
        fruit,
        difficulty,
        time_limit,
        cuts_allowed: 1,
        bands: ScoreBands {
            perfect_range,
            good_range,
        },
        target_score,
        rotation,
    }
}

/// The built-in 10-level campaign
pub fn campaign() -> Vec<LevelConfig> {
    use Difficulty::*;
    use FruitSkin::*;
    use ShapeKind::*;

    vec![
        level(1, Circle, Watermelon, Easy, 40.0, 3.0, 6.0, 60.0, 0.0),
        level(2, Circle, Watermelon, Easy, 35.0, 2.5, 5.5, 65.0, PI / 6.0),
        level(3, Circle, Orange, Medium, 30.0, 2.0, 5.0, 70.0, 0.0),
        level(4, Ellipse, Orange, Medium, 28.0, 2.0, 5.0, 72.0, PI / 8.0),
        level(5, Circle, Lemon, Medium, 26.0, 1.8, 4.5, 74.0, PI / 4.0),
        level(6, Ellipse, Lemon, Hard, 24.0, 1.6, 4.0, 76.0, PI / 3.0),
        level(7, Ellipse, Lemon, Hard, 22.0, 1.5, 4.0, 78.0, PI / 2.5),
        level(8, Ellipse, Apple, Hard, 20.0, 1.4, 3.8, 80.0, PI / 2.0),
        level(9, Polygon, Apple, Expert, 18.0, 1.2, 3.5, 82.0, PI / 3.0),
        level(10, Star, Apple, Expert, 16.0, 1.0, 3.0, 85.0, PI / 4.0),
    ]
}

/// Build the level's silhouette, centered on the canvas and sized
/// relative to its smaller dimension.
pub fn shape_for_level(config: &LevelConfig, canvas_width: f32, canvas_height: f32) -> Shape {
    let center = Vec2::new(canvas_width / 2.0, canvas_height / 2.0);
    let base_size = canvas_width.min(canvas_height) * 0.3;

    match config.shape {
        ShapeKind::Circle => Shape::circle(center, base_size * 0.8),
        ShapeKind::Ellipse => Shape::ellipse(
            center,
            base_size * 0.9,
            base_size * 0.6,
            config.rotation,
        ),
        ShapeKind::Polygon => Shape::polygon(
            center,
            config.rotation,
            irregular_polygon(base_size * 0.7, config.level),
        ),
        ShapeKind::Star => Shape::star(
            center,
            base_size * 0.8,
            base_size * 0.4,
            5,
            config.rotation,
        ),
    }
}

/// Irregular 6-8 sided polygon with per-vertex radius jitter, seeded from
/// the level number so every attempt at a level sees the same silhouette.
fn irregular_polygon(base_radius: f32, seed: u32) -> Vec<Vec2> {
    let sides = 6 + (seed as usize % 3);
    let mut rng = Pcg32::seed_from_u64(seed as u64);

    (0..sides)
        .map(|i| {
            let angle = (2.0 * PI / sides as f32) * i as f32;
            let factor = 0.7 + rng.random::<f32>() * 0.6;
            Vec2::new(angle.cos(), angle.sin()) * base_radius * factor
        })
        .collect()
}

/// A campaign with a cursor, tracking the level being played.
/// Holds at least one level; deserialization enforces this too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LevelSetData")]
pub struct LevelSet {
    levels: Vec<LevelConfig>,
    current_index: usize,
}

/// Raw wire form of [`LevelSet`], validated on conversion
#[derive(Deserialize)]
struct LevelSetData {
    levels: Vec<LevelConfig>,
    #[serde(default)]
    current_index: usize,
}

impl TryFrom<LevelSetData> for LevelSet {
    type Error = String;

    fn try_from(data: LevelSetData) -> Result<Self, Self::Error> {
        if data.levels.is_empty() {
            return Err("campaign has no levels".to_string());
        }
        Ok(Self {
            current_index: data.current_index.min(data.levels.len() - 1),
            levels: data.levels,
        })
    }
}

impl LevelSet {
    /// The built-in campaign, starting at level 1
    pub fn new() -> Self {
        Self {
            levels: campaign(),
            current_index: 0,
        }
    }

    /// A custom campaign. Returns `None` for an empty level list.
    pub fn from_levels(levels: Vec<LevelConfig>) -> Option<Self> {
        if levels.is_empty() {
            None
        } else {
            Some(Self {
                levels,
                current_index: 0,
            })
        }
    }

    /// Load a campaign from JSON (a non-empty array of level records)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        use serde::de::Error as _;

        let levels: Vec<LevelConfig> = serde_json::from_str(json)?;
        if levels.is_empty() {
            return Err(serde_json::Error::custom("campaign has no levels"));
        }
        log::info!("loaded campaign with {} levels", levels.len());
        Ok(Self {
            levels,
            current_index: 0,
        })
    }

    /// The level being played. Past the end of the campaign this stays on
    /// the final level.
    pub fn current(&self) -> &LevelConfig {
        &self.levels[self.current_index.min(self.levels.len() - 1)]
    }

    /// Move to the next level. Returns false at the end of the campaign.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.levels.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Jump to a 1-based level number, clamped to the campaign
    pub fn reset_to(&mut self, level: u32) {
        let idx = (level.max(1) as usize - 1).min(self.levels.len() - 1);
        self.current_index = idx;
    }

    pub fn total(&self) -> usize {
        self.levels.len()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::new()
    }
}
