//! `score` and `check` command handlers.

use std::path::{Path, PathBuf};

use chrono::Utc;
use topicscout_core::{AppConfig, ScoringConfig, ScoringMode};
use topicscout_scoring::{score_topics_file, ScoredTopic};

#[derive(Debug, Default)]
pub(crate) struct ScoreOptions {
    pub file: Option<PathBuf>,
    pub mode: Option<ScoringMode>,
    pub json: bool,
    pub top: Option<usize>,
    pub max_concurrent: Option<usize>,
}

/// Scoring config for a run: the environment's settings with any CLI mode
/// override applied.
fn scoring_config(config: &AppConfig, mode: Option<ScoringMode>) -> ScoringConfig {
    match mode {
        Some(mode) => ScoringConfig::from_app_config(&AppConfig {
            mode,
            ..config.clone()
        }),
        None => ScoringConfig::from_app_config(config),
    }
}

fn stars(count: u8) -> String {
    "*".repeat(usize::from(count))
}

fn table_header() -> String {
    format!(
        "{:<6}{:<32}{:>12}{:>9}{:>13}  {:<13}{:>11}  RICHNESS",
        "RANK", "TOPIC", "OPPORTUNITY", "DEMAND", "COMPETITION", "ZONE", "CONFIDENCE"
    )
}

fn table_row(rank: usize, topic: &ScoredTopic) -> String {
    let s = &topic.scores;
    format!(
        "{:<6}{:<32}{:>12.2}{:>9.2}{:>13.2}  {:<13}{:>11}  {}",
        rank,
        topic.topic,
        s.opportunity.opportunity_score,
        s.composite_score,
        s.competition.overall_competition,
        s.zone.to_string(),
        s.confidence,
        stars(s.richness.richness_stars)
    )
}

/// Score and rank all topics in the configured (or given) topics file.
///
/// # Errors
///
/// Returns an error if the topics file cannot be loaded or validated, a
/// scoring task fails, or JSON output cannot be serialized.
pub(crate) async fn run_score(config: &AppConfig, options: ScoreOptions) -> anyhow::Result<()> {
    let scoring = scoring_config(config, options.mode);
    let path = options
        .file
        .unwrap_or_else(|| config.topics_path.clone());
    let max_concurrent = options
        .max_concurrent
        .unwrap_or(config.max_concurrent_topics);

    let ranked = score_topics_file(&path, scoring, Utc::now(), max_concurrent).await?;
    let shown = options.top.map_or(ranked.len(), |n| n.min(ranked.len()));
    let ranked = &ranked[..shown];

    if options.json {
        println!("{}", serde_json::to_string_pretty(ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("no topics found in {}", path.display());
        return Ok(());
    }

    println!("{}", table_header());
    for (i, topic) in ranked.iter().enumerate() {
        println!("{}", table_row(i + 1, topic));
    }

    Ok(())
}

/// Validate a topics file and report what it contains.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub(crate) fn run_check(path: &Path) -> anyhow::Result<usize> {
    let file = topicscout_core::load_topics(path)?;
    let count = file.topics.len();

    println!("{}: {count} topics OK", path.display());
    for entry in &file.topics {
        let sources: Vec<&str> = [
            entry.trend.as_ref().map(|_| "trend"),
            entry.discussion.as_ref().map(|_| "discussion"),
            entry.video.as_ref().map(|_| "video"),
        ]
        .into_iter()
        .flatten()
        .collect();
        println!("  {:<32}{}", entry.topic, sources.join(", "));
    }

    tracing::info!(path = %path.display(), topics = count, "topics file valid");
    Ok(count)
}
