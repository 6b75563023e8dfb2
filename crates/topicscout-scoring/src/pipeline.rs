//! Per-topic scoring orchestration.
//!
//! Runs normalization, competition analysis, opportunity scoring and zoning,
//! then richness and recency, and assembles one [`TopicResult`]. Nothing is
//! retained between calls.

use chrono::{DateTime, Utc};
use topicscout_core::{DiscussionSignal, ScoringConfig, ScoringMode, TopicSignals, TrendSignal};

use crate::audience::estimate_audience_size;
use crate::bands::round_to;
use crate::competition::overall_competition;
use crate::demand::{normalize_discussion, normalize_trend, normalize_video};
use crate::insights::competitive_insights;
use crate::opportunity::{classify_zone, score_opportunity};
use crate::recency::score_recency;
use crate::richness::estimate_richness;
use crate::types::TopicResult;

/// Weighted composite demand over the sources actually present.
///
/// Three-source weights apply only when a video signal was supplied. Without
/// a trend signal, or in fast exploration, the discussion score stands alone.
/// Otherwise the two-source weights apply.
fn composite_demand(
    trend: Option<f64>,
    discussion: f64,
    video: Option<f64>,
    config: &ScoringConfig,
) -> f64 {
    let composite = match (config.mode, trend, video) {
        (ScoringMode::ThreeSource, trend, Some(video)) => {
            let w = config.three_source_weights;
            trend.unwrap_or(0.0) * w.trend() + discussion * w.discussion() + video * w.video()
        }
        (ScoringMode::FastExploration, ..) | (_, None, _) => discussion,
        (_, Some(trend), _) => {
            let w = config.two_source_weights;
            trend * w.trend() + discussion * w.discussion()
        }
    };
    composite.clamp(0.0, 100.0)
}

/// Score one topic.
///
/// Never fails: absent or empty sources fall back to their documented
/// defaults and a confidence of 0 means no usable source data was present.
/// The video source is only consulted in three-source mode. `now` anchors
/// recency so identical inputs always produce identical output.
#[must_use]
pub fn calculate_composite_score(
    signals: TopicSignals<'_>,
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> TopicResult {
    let mode = config.mode;
    let video = signals.video.filter(|_| mode.uses_video());

    let trend_score = signals.trend.map(normalize_trend);
    let discussion_score = signals.discussion.map_or(0.0, normalize_discussion);
    let video_score = video.map(normalize_video);

    let sources_with_data = [
        signals.trend.is_some_and(|t| t.data_points > 0),
        signals.discussion.is_some_and(|d| d.total_posts > 0),
        video.is_some_and(|v| v.total_videos > 0),
    ]
    .into_iter()
    .filter(|&has_data| has_data)
    .count();

    let composite = composite_demand(trend_score, discussion_score, video_score, config);
    let confidence = config.confidence.lookup(mode, sources_with_data);

    // Competition is always reportable: absent trend/discussion sources are
    // read as zeroed snapshots and land on their neutral defaults.
    let empty_trend = TrendSignal::default();
    let empty_discussion = DiscussionSignal::default();
    let trend = signals.trend.unwrap_or(&empty_trend);
    let discussion = signals.discussion.unwrap_or(&empty_discussion);

    let competition = overall_competition(trend, discussion, video);
    let opportunity = score_opportunity(composite, competition.overall_competition);
    let zone = classify_zone(composite, competition.overall_competition);
    let insights = competitive_insights(trend, discussion, video, &opportunity);
    let audience_size =
        estimate_audience_size(signals.trend, signals.discussion, &config.audience);
    let richness = estimate_richness(signals.trend, signals.discussion);
    let recency = score_recency(signals.trend, signals.discussion, now);

    tracing::info!(
        %mode,
        demand = round_to(composite, 2),
        competition = competition.overall_competition,
        opportunity = opportunity.opportunity_score,
        confidence,
        %zone,
        "topic scored"
    );

    TopicResult {
        composite_score: round_to(composite, 2),
        trend_score: round_to(trend_score.unwrap_or(0.0), 2),
        discussion_score: round_to(discussion_score, 2),
        video_score: video_score.map(|v| round_to(v, 2)),
        confidence,
        sources_with_data,
        competition,
        opportunity,
        insights,
        audience_size,
        zone,
        richness,
        recency,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
