//! Deviation-to-score mapping
//!
//! A piecewise-linear curve over the deviation from a perfect 50/50 split,
//! with per-level tolerance bands controlling where the zones break. The
//! model trusts its configuration: bands must satisfy
//! `0 < perfect_range < good_range < 10` for the curve to be monotonic,
//! and this is a level-data contract, not validated here.

use serde::{Deserialize, Serialize};

/// Per-level tolerance bands, in percentage points of deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBands {
    /// Deviations up to this score in the Perfect zone
    pub perfect_range: f32,
    /// Deviations up to this (and past `perfect_range`) score in the Good zone
    pub good_range: f32,
}

/// Qualitative cut rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Perfect,
    Good,
    Normal,
    Poor,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect",
            Grade::Good => "Good",
            Grade::Normal => "Normal",
            Grade::Poor => "Poor",
        }
    }
}

/// Map a cut's deviation to a score in [0, 100].
///
/// Zone curve: 100..95 inside the perfect band, 95..70 inside the good
/// band, 70..40 up to 10 points of deviation, then 40..0 with a floor.
/// `time_bonus` is added on top and the total clamps at 100; the result
/// is rounded to one decimal place.
pub fn score(deviation: f32, bands: ScoreBands, time_bonus: f32) -> f32 {
    let ScoreBands {
        perfect_range,
        good_range,
    } = bands;

    let zone_score = if deviation <= perfect_range {
        100.0 - (deviation / perfect_range) * 5.0
    } else if deviation <= good_range {
        95.0 - ((deviation - perfect_range) / (good_range - perfect_range)) * 25.0
    } else if deviation <= 10.0 {
        70.0 - ((deviation - good_range) / (10.0 - good_range)) * 30.0
    } else {
        (40.0 - (deviation - 10.0).min(10.0) * 4.0).max(0.0)
    };

    let total = (zone_score + time_bonus).min(100.0);
    (total * 10.0).round() / 10.0
}

/// Qualitative grade for a cut.
///
/// The Normal ceiling is a literal 8, independent of the score curve's
/// Normal-zone ceiling of 10: deviations in (8, 10] score in the Normal
/// zone but grade Poor. Intentional, inherited behavior.
pub fn grade(deviation: f32, bands: ScoreBands) -> Grade {
    if deviation <= bands.perfect_range {
        Grade::Perfect
    } else if deviation <= bands.good_range {
        Grade::Good
    } else if deviation <= 8.0 {
        Grade::Normal
    } else {
        Grade::Poor
    }
}
