use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("config error: {0}")]
    Config(#[from] topicscout_core::ConfigError),

    #[error("scoring task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
