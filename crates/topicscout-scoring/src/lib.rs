//! Demand, competition and opportunity scoring for content topics.
//!
//! Turns per-source signal snapshots (search trend, discussion forum and
//! optionally video) into one comparable record per topic: normalized demand,
//! estimated competition, an opportunity score with recommendation, a quadrant
//! zone, and supporting richness and recency estimates. Scoring is pure and
//! deterministic for a given config and reference time; batches can be scored
//! concurrently and ranked by opportunity.

pub mod audience;
pub mod batch;
pub mod competition;
pub mod demand;
pub mod error;
pub mod insights;
pub mod opportunity;
pub mod pipeline;
pub mod rank;
pub mod recency;
pub mod richness;
pub mod types;

mod bands;

pub use audience::estimate_audience_size;
pub use bands::round_to;
pub use batch::{score_topics, score_topics_concurrently, score_topics_file};
pub use competition::{
    competition_level, discussion_competition, overall_competition, trend_competition,
    video_competition,
};
pub use demand::{normalize_discussion, normalize_trend, normalize_video};
pub use error::ScoringError;
pub use insights::competitive_insights;
pub use opportunity::{classify_zone, score_opportunity};
pub use pipeline::calculate_composite_score;
pub use rank::rank_topics;
pub use recency::score_recency;
pub use richness::{estimate_richness, richness_stars};
pub use types::{
    CompetitionLevel, CompetitionReport, Complexity, Opportunity, Recency, Recommendation,
    Richness, RiskLevel, ScoredTopic, TopicResult, Zone,
};
