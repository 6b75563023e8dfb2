//! Scoring many topics at once.
//!
//! Each topic is scored independently against the same immutable config, so
//! the concurrent runner fans work out to blocking tasks and only has to
//! restore input order before ranking.

use std::path::Path;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use topicscout_core::{load_topics, ScoringConfig, TopicEntry};

use crate::error::ScoringError;
use crate::pipeline::calculate_composite_score;
use crate::rank::rank_topics;
use crate::types::ScoredTopic;

fn score_entry(entry: &TopicEntry, config: &ScoringConfig, now: DateTime<Utc>) -> ScoredTopic {
    ScoredTopic {
        topic: entry.topic.clone(),
        scores: calculate_composite_score(entry.signals(), config, now),
    }
}

/// Score every entry sequentially and return them ranked.
#[must_use]
pub fn score_topics(
    entries: &[TopicEntry],
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> Vec<ScoredTopic> {
    let scored = entries
        .iter()
        .map(|entry| score_entry(entry, config, now))
        .collect();
    rank_topics(scored)
}

/// Score entries on the blocking pool, at most `max_concurrent` at a time,
/// and return them ranked.
///
/// Results are put back in input order before ranking so ties resolve the
/// same way as [`score_topics`].
///
/// # Errors
///
/// Returns [`ScoringError::Join`] if a scoring task panics or is cancelled.
pub async fn score_topics_concurrently(
    entries: Vec<TopicEntry>,
    config: ScoringConfig,
    now: DateTime<Utc>,
    max_concurrent: usize,
) -> Result<Vec<ScoredTopic>, ScoringError> {
    let max_concurrent = max_concurrent.max(1);
    let total = entries.len();

    let results: Vec<Result<(usize, ScoredTopic), ScoringError>> =
        stream::iter(entries.into_iter().enumerate())
            .map(move |(index, entry)| async move {
                let scored =
                    tokio::task::spawn_blocking(move || score_entry(&entry, &config, now)).await?;
                Ok::<_, ScoringError>((index, scored))
            })
            .buffer_unordered(max_concurrent)
            .collect()
            .await;

    let mut indexed = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    indexed.sort_by_key(|(index, _)| *index);

    tracing::debug!(total, max_concurrent, "topics scored concurrently");

    Ok(rank_topics(
        indexed.into_iter().map(|(_, topic)| topic).collect(),
    ))
}

/// Load a topics file and score it with [`score_topics_concurrently`].
///
/// # Errors
///
/// Returns [`ScoringError::Config`] if the file cannot be read, parsed or
/// validated, and [`ScoringError::Join`] if a scoring task fails.
pub async fn score_topics_file(
    path: &Path,
    config: ScoringConfig,
    now: DateTime<Utc>,
    max_concurrent: usize,
) -> Result<Vec<ScoredTopic>, ScoringError> {
    let file = load_topics(path)?;
    tracing::info!(
        path = %path.display(),
        topics = file.topics.len(),
        mode = %config.mode,
        "scoring topics file"
    );
    score_topics_concurrently(file.topics, config, now, max_concurrent).await
}
