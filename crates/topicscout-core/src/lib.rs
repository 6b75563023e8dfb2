//! Shared types and configuration for the topicscout workspace.
//!
//! Holds the per-source signal snapshots the scoring engine reads, the
//! immutable scoring configuration threaded through every scoring call, and
//! the environment-driven application config used by the CLI.

pub mod app_config;
pub mod config;
pub mod scoring_config;
pub mod signals;
pub mod topics;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use scoring_config::{
    AudienceWeights, ConfidenceTable, ScoringConfig, ScoringMode, SourceWeights,
};
pub use signals::{
    DiscussionSignal, NamedCount, TopicSignals, TrendDirection, TrendSignal, VideoSignal,
};
pub use topics::{load_topics, TopicEntry, TopicsFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read topics file {path}: {source}")]
    TopicsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse topics file as YAML: {0}")]
    TopicsFileYaml(#[from] serde_yaml::Error),

    #[error("failed to parse topics file as JSON: {0}")]
    TopicsFileJson(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
