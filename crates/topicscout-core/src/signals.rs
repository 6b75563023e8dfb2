//! Per-source signal snapshots consumed by the scoring engine.
//!
//! Each snapshot is an already-summarized view of one upstream source for one
//! topic. The engine only reads them; nothing here is mutated after load.

use serde::{Deserialize, Serialize};

/// Direction of a search-interest series over its sampling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
    #[default]
    NoData,
    Error,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Rising => write!(f, "rising"),
            TrendDirection::Falling => write!(f, "falling"),
            TrendDirection::Stable => write!(f, "stable"),
            TrendDirection::NoData => write!(f, "no_data"),
            TrendDirection::Error => write!(f, "error"),
        }
    }
}

/// Search-interest trend summary.
///
/// `Default` is the zeroed snapshot used when the trend source is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSignal {
    /// Mean interest over the window, 0-100.
    pub average_interest: f64,
    #[serde(default)]
    pub peak_interest: f64,
    pub trend_direction: TrendDirection,
    /// Number of samples in the series.
    pub data_points: u32,
}

/// A named bucket with an item count (a community or a channel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u32,
}

/// Community discussion summary (posts across forums/subreddits).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscussionSignal {
    pub total_posts: u32,
    /// Mean engagement (score + comments) per post.
    pub avg_engagement: f64,
    /// Most active communities, busiest first.
    #[serde(default, alias = "top_subreddits")]
    pub top_communities: Vec<NamedCount>,
    /// Post creation times as unix epoch seconds.
    #[serde(default)]
    pub timestamps: Vec<f64>,
}

impl DiscussionSignal {
    /// Number of distinct communities reported.
    #[must_use]
    pub fn community_count(&self) -> u32 {
        u32::try_from(self.top_communities.len()).unwrap_or(u32::MAX)
    }
}

/// Video search summary, the optional third source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSignal {
    pub total_videos: u32,
    pub avg_views: f64,
    #[serde(default)]
    pub top_channels: Vec<NamedCount>,
}

impl VideoSignal {
    #[must_use]
    pub fn channel_count(&self) -> u32 {
        u32::try_from(self.top_channels.len()).unwrap_or(u32::MAX)
    }
}

/// Borrowed view over every source snapshot available for one topic.
///
/// `None` means the source was not queried at all, which is distinct from a
/// source that was queried and came back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicSignals<'a> {
    pub trend: Option<&'a TrendSignal>,
    pub discussion: Option<&'a DiscussionSignal>,
    pub video: Option<&'a VideoSignal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_direction_parses_snake_case() {
        let parsed: TrendDirection = serde_json::from_str("\"no_data\"").unwrap();
        assert_eq!(parsed, TrendDirection::NoData);
        assert_eq!(TrendDirection::Rising.to_string(), "rising");
    }

    #[test]
    fn discussion_accepts_subreddit_alias_and_missing_timestamps() {
        let raw = r#"{
            "total_posts": 12,
            "avg_engagement": 40.5,
            "top_subreddits": [{"name": "r/woodworking", "count": 7}]
        }"#;
        let signal: DiscussionSignal = serde_json::from_str(raw).unwrap();
        assert_eq!(signal.community_count(), 1);
        assert!(signal.timestamps.is_empty());
    }

    #[test]
    fn trend_missing_required_field_is_an_error() {
        let raw = r#"{"average_interest": 50.0, "trend_direction": "rising"}"#;
        let result: Result<TrendSignal, _> = serde_json::from_str(raw);
        assert!(result.is_err(), "data_points is required");
    }

    #[test]
    fn default_trend_has_no_data() {
        let trend = TrendSignal::default();
        assert_eq!(trend.trend_direction, TrendDirection::NoData);
        assert_eq!(trend.data_points, 0);
    }
}
