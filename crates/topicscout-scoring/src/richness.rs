//! Evidence-strength estimate: how much data backs a topic's scores.

use topicscout_core::{DiscussionSignal, TrendSignal};

use crate::bands::round_to;
use crate::types::{DiscussionRichness, Richness, RichnessBreakdown, TrendRichness};

/// Weekly samples in a year; a full year of points is full coverage.
const FULL_TREND_COVERAGE: f64 = 52.0;

const STAR_BANDS: &[(f64, u8)] = &[(90.0, 5), (70.0, 4), (50.0, 3), (30.0, 2)];

/// Star rating (1-5) for a richness score; lower bounds are inclusive.
#[must_use]
pub fn richness_stars(score: f64) -> u8 {
    STAR_BANDS
        .iter()
        .find(|&&(threshold, _)| score >= threshold)
        .map_or(1, |&(_, stars)| stars)
}

fn trend_richness(signal: &TrendSignal) -> f64 {
    (f64::from(signal.data_points) / FULL_TREND_COVERAGE * 50.0
        + signal.average_interest / 100.0 * 50.0)
        .min(100.0)
}

fn discussion_richness(signal: &DiscussionSignal) -> f64 {
    (f64::from(signal.total_posts) / 100.0 * 30.0 + signal.avg_engagement / 5000.0 * 70.0)
        .min(100.0)
}

/// Richness over the sources that actually carry volume.
///
/// A source that is absent, or present with zero volume, is left out of the
/// average rather than counted as a zero.
#[must_use]
pub fn estimate_richness(
    trend: Option<&TrendSignal>,
    discussion: Option<&DiscussionSignal>,
) -> Richness {
    let mut breakdown = RichnessBreakdown::default();
    let mut scores: Vec<f64> = Vec::with_capacity(2);

    if let Some(signal) = trend.filter(|t| t.data_points > 0) {
        let richness = trend_richness(signal);
        scores.push(richness);
        breakdown.trend = Some(TrendRichness {
            richness: round_to(richness, 1),
            data_points: signal.data_points,
            average_interest: signal.average_interest,
        });
    }

    if let Some(signal) = discussion.filter(|d| d.total_posts > 0) {
        let richness = discussion_richness(signal);
        scores.push(richness);
        breakdown.discussion = Some(DiscussionRichness {
            richness: round_to(richness, 1),
            total_posts: signal.total_posts,
            avg_engagement: signal.avg_engagement,
        });
    }

    let overall = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / crate::bands::count_f64(scores.len())
    };
    let stars = richness_stars(overall);

    tracing::debug!(overall, stars, sources = scores.len(), "richness estimated");

    Richness {
        richness_score: round_to(overall, 2),
        richness_stars: stars,
        sources_count: scores.len(),
        breakdown,
    }
}
