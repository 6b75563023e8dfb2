//! Output records produced by the scoring engine.
//!
//! Field names on the wire follow the established report contract
//! (`trends_score`, `reddit_score`, `youtube_score`, ...) while the Rust
//! names describe the source kind.

use serde::Serialize;
use topicscout_core::TrendDirection;

/// Coarse saturation band for the overall competition score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl CompetitionLevel {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            CompetitionLevel::Low => "LOW - OPPORTUNITY",
            CompetitionLevel::Moderate => "MODERATE",
            CompetitionLevel::High => "HIGH",
            CompetitionLevel::VeryHigh => "VERY HIGH - SATURATED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionReport {
    #[serde(rename = "trends_competition")]
    pub trend_competition: f64,
    #[serde(rename = "reddit_competition")]
    pub discussion_competition: f64,
    #[serde(rename = "youtube_competition")]
    pub video_competition: Option<f64>,
    pub overall_competition: f64,
    pub competition_level: CompetitionLevel,
    pub competition_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighPriority,
    Viable,
    Risky,
    Avoid,
}

impl Recommendation {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Recommendation::HighPriority => "Strong demand, low competition",
            Recommendation::Viable => "Good opportunity with effort",
            Recommendation::Risky => "Needs strong differentiation",
            Recommendation::Avoid => "Poor opportunity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "VERY HIGH")]
    VeryHigh,
}

/// How hard it is to enter a topic, judged from demand and competition
/// directly rather than from the opportunity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    #[serde(rename = "SIMPLE")]
    Simple,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "COMPLEX")]
    Complex,
    #[serde(rename = "VERY COMPLEX")]
    VeryComplex,
}

impl Complexity {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Complexity::Simple => "First-time creator friendly",
            Complexity::Moderate => "Standard approach works",
            Complexity::Complex => "Needs a unique angle or superior quality",
            Complexity::VeryComplex => "Market validation required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub opportunity_score: f64,
    pub recommendation: Recommendation,
    pub recommendation_description: &'static str,
    pub risk_level: RiskLevel,
    pub complexity: Complexity,
    pub complexity_description: &'static str,
    pub demand_score: f64,
    pub competition_score: f64,
}

/// Quadrant label from thresholding demand and competition independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    GoldMine,
    Viable,
    RiskyNiche,
    Avoid,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::GoldMine => write!(f, "gold_mine"),
            Zone::Viable => write!(f, "viable"),
            Zone::RiskyNiche => write!(f, "risky_niche"),
            Zone::Avoid => write!(f, "avoid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRichness {
    pub richness: f64,
    pub data_points: u32,
    pub average_interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscussionRichness {
    pub richness: f64,
    pub total_posts: u32,
    pub avg_engagement: f64,
}

/// Per-source richness; a source without volume is omitted, not zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichnessBreakdown {
    #[serde(rename = "trends", skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendRichness>,
    #[serde(rename = "reddit", skip_serializing_if = "Option::is_none")]
    pub discussion: Option<DiscussionRichness>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Richness {
    pub richness_score: f64,
    pub richness_stars: u8,
    pub sources_count: usize,
    pub breakdown: RichnessBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recency {
    pub recency_score: f64,
    pub recent_activity_pct: f64,
    pub trend_momentum: TrendDirection,
    pub avg_content_age_days: f64,
    pub recent_30_days: usize,
    pub recent_90_days: usize,
    pub total_content: usize,
}

/// Everything computed for one topic in one scoring invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicResult {
    pub composite_score: f64,
    #[serde(rename = "trends_score")]
    pub trend_score: f64,
    #[serde(rename = "reddit_score")]
    pub discussion_score: f64,
    #[serde(rename = "youtube_score")]
    pub video_score: Option<f64>,
    pub confidence: u8,
    pub sources_with_data: usize,
    pub competition: CompetitionReport,
    pub opportunity: Opportunity,
    pub insights: Vec<String>,
    pub audience_size: u64,
    pub zone: Zone,
    pub richness: Richness,
    pub recency: Recency,
}

/// A named topic with its scores; the unit ordered by
/// [`rank_topics`](crate::rank_topics).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTopic {
    pub topic: String,
    pub scores: TopicResult,
}
