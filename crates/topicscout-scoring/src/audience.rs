//! Order-of-magnitude audience estimate used for bubble sizing downstream.

use topicscout_core::{AudienceWeights, DiscussionSignal, TrendSignal};

/// `interest * interest_weight + posts * engagement * engagement_weight`,
/// rounded to a whole number. Absent sources contribute nothing.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_audience_size(
    trend: Option<&TrendSignal>,
    discussion: Option<&DiscussionSignal>,
    weights: &AudienceWeights,
) -> u64 {
    let interest = trend.map_or(0.0, |t| t.average_interest * weights.interest_weight);
    let engagement = discussion.map_or(0.0, |d| {
        f64::from(d.total_posts) * d.avg_engagement * weights.engagement_weight
    });

    // float-to-int `as` saturates, and the sum is clamped non-negative first
    (interest + engagement).max(0.0).round() as u64
}
