//! Immutable scoring configuration.
//!
//! A [`ScoringConfig`] is built once and passed by reference into every
//! per-topic scoring call, so concurrently scored topics always observe the
//! same mode and weights.

use serde::{Deserialize, Serialize};

use crate::app_config::AppConfig;
use crate::ConfigError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Which sources feed the composite demand score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Trend + discussion, 50/50 unless configured otherwise.
    #[default]
    TwoSource,
    /// Trend + discussion + video, roughly a third each. Topics without a
    /// video signal fall back to the two-source weights.
    ThreeSource,
    /// Discussion only; composite is the discussion score directly.
    FastExploration,
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringMode::TwoSource => write!(f, "two_source"),
            ScoringMode::ThreeSource => write!(f, "three_source"),
            ScoringMode::FastExploration => write!(f, "fast_exploration"),
        }
    }
}

impl std::str::FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two_source" => Ok(ScoringMode::TwoSource),
            "three_source" => Ok(ScoringMode::ThreeSource),
            "fast_exploration" => Ok(ScoringMode::FastExploration),
            other => Err(format!(
                "expected two_source, three_source, or fast_exploration; got '{other}'"
            )),
        }
    }
}

impl ScoringMode {
    /// Whether the video source is consulted at all in this mode.
    #[must_use]
    pub fn uses_video(self) -> bool {
        matches!(self, ScoringMode::ThreeSource)
    }
}

/// Convex weights applied to per-source demand scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceWeights {
    trend: f64,
    discussion: f64,
    video: f64,
}

impl SourceWeights {
    /// Build a weight set, checking that it is a convex combination.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any weight is negative or
    /// non-finite, or if the weights do not sum to 1.
    pub fn new(trend: f64, discussion: f64, video: f64) -> Result<Self, ConfigError> {
        for (name, weight) in [("trend", trend), ("discussion", discussion), ("video", video)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} weight must be a finite non-negative number, got {weight}"
                )));
            }
        }
        let sum = trend + discussion + video;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Validation(format!(
                "source weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(Self {
            trend,
            discussion,
            video,
        })
    }

    /// Default trend/discussion split used when the video source is not in play.
    pub const TWO_SOURCE: Self = Self {
        trend: 0.50,
        discussion: 0.50,
        video: 0.0,
    };

    /// Split used when a video signal is present in three-source mode.
    pub const THREE_SOURCE: Self = Self {
        trend: 0.33,
        discussion: 0.33,
        video: 0.34,
    };

    #[must_use]
    pub fn trend(&self) -> f64 {
        self.trend
    }

    #[must_use]
    pub fn discussion(&self) -> f64 {
        self.discussion
    }

    #[must_use]
    pub fn video(&self) -> f64 {
        self.video
    }
}

/// Fixed confidence percentages keyed by mode and number of sources with data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceTable {
    /// Indexed by sources with data (0..=2).
    pub two_source: [u8; 3],
    /// Indexed by sources with data (0..=3).
    pub three_source: [u8; 4],
    /// Confidence when at least one source has data.
    pub fast_exploration: u8,
}

impl Default for ConfidenceTable {
    fn default() -> Self {
        Self {
            two_source: [0, 60, 100],
            three_source: [0, 50, 75, 100],
            fast_exploration: 60,
        }
    }
}

impl ConfidenceTable {
    /// Look up the confidence for `sources_with_data` in `mode`.
    ///
    /// Counts past the end of a table saturate at its last entry.
    #[must_use]
    pub fn lookup(&self, mode: ScoringMode, sources_with_data: usize) -> u8 {
        let row: &[u8] = match mode {
            ScoringMode::TwoSource => &self.two_source,
            ScoringMode::ThreeSource => &self.three_source,
            ScoringMode::FastExploration => {
                return if sources_with_data > 0 {
                    self.fast_exploration
                } else {
                    0
                };
            }
        };
        row.get(sources_with_data)
            .or_else(|| row.last())
            .copied()
            .unwrap_or(0)
    }
}

/// Scale factors for the rough audience-size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudienceWeights {
    /// Multiplier on trend average interest.
    pub interest_weight: f64,
    /// Multiplier on discussion posts x engagement.
    pub engagement_weight: f64,
}

impl Default for AudienceWeights {
    fn default() -> Self {
        Self {
            interest_weight: 1000.0,
            engagement_weight: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    /// Trend/discussion weights; also the fallback in three-source mode when a
    /// topic has no video signal.
    pub two_source_weights: SourceWeights,
    pub three_source_weights: SourceWeights,
    pub confidence: ConfidenceTable,
    pub audience: AudienceWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::for_mode(ScoringMode::default())
    }
}

impl ScoringConfig {
    /// Default tables for `mode`.
    #[must_use]
    pub fn for_mode(mode: ScoringMode) -> Self {
        Self {
            mode,
            two_source_weights: SourceWeights::TWO_SOURCE,
            three_source_weights: SourceWeights::THREE_SOURCE,
            confidence: ConfidenceTable::default(),
            audience: AudienceWeights::default(),
        }
    }

    /// Derive the scoring config from process settings.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            two_source_weights: config.source_weights,
            audience: AudienceWeights {
                interest_weight: config.audience_interest_weight,
                engagement_weight: config.audience_engagement_weight,
            },
            ..Self::for_mode(config.mode)
        }
    }
}
