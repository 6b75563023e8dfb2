use std::path::PathBuf;

use crate::scoring_config::{ScoringMode, SourceWeights};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-level settings read once at startup.
///
/// Scoring itself never reads this directly; the CLI derives an immutable
/// [`ScoringConfig`](crate::ScoringConfig) from it and passes that into every
/// scoring call.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub mode: ScoringMode,
    pub topics_path: PathBuf,
    pub max_concurrent_topics: usize,
    pub audience_interest_weight: f64,
    pub audience_engagement_weight: f64,
    /// Validated trend/discussion split for two-source demand.
    pub source_weights: SourceWeights,
}
