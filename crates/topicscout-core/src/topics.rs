use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::signals::{DiscussionSignal, TopicSignals, TrendSignal, VideoSignal};
use crate::ConfigError;

/// One candidate topic and whatever source snapshots were collected for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic: String,
    #[serde(default)]
    pub trend: Option<TrendSignal>,
    #[serde(default)]
    pub discussion: Option<DiscussionSignal>,
    #[serde(default)]
    pub video: Option<VideoSignal>,
}

impl TopicEntry {
    /// Borrowed view of this entry's signals for the scoring engine.
    #[must_use]
    pub fn signals(&self) -> TopicSignals<'_> {
        TopicSignals {
            trend: self.trend.as_ref(),
            discussion: self.discussion.as_ref(),
            video: self.video.as_ref(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicsFile {
    pub topics: Vec<TopicEntry>,
}

/// Load and validate a topics file.
///
/// Files ending in `.json` are parsed as JSON; anything else as YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_topics(path: &Path) -> Result<TopicsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TopicsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let topics_file: TopicsFile = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_topics(&topics_file)?;

    Ok(topics_file)
}

fn validate_topics(topics_file: &TopicsFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in &topics_file.topics {
        let name = entry.topic.trim();
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "topic name must be non-empty".to_string(),
            ));
        }

        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate topic: '{}'",
                entry.topic
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "topics_test.rs"]
mod tests;
