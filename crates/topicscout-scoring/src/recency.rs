//! Freshness/urgency of a topic's underlying activity.

use chrono::{DateTime, Utc};
use topicscout_core::{DiscussionSignal, TrendDirection, TrendSignal};

use crate::bands::{count_f64, round_to};
use crate::types::Recency;

const SECONDS_PER_DAY: f64 = 86_400.0;
const RECENT_SHORT_DAYS: f64 = 30.0;
const RECENT_LONG_DAYS: f64 = 90.0;
const FRESHNESS_HORIZON_DAYS: f64 = 365.0;

const ACTIVITY_WEIGHT: f64 = 0.60;
const MOMENTUM_WEIGHT: f64 = 0.30;
const FRESHNESS_WEIGHT: f64 = 0.10;

fn momentum_points(direction: TrendDirection) -> f64 {
    match direction {
        TrendDirection::Rising => 100.0,
        TrendDirection::Falling => 30.0,
        TrendDirection::Stable | TrendDirection::NoData | TrendDirection::Error => 60.0,
    }
}

#[allow(clippy::cast_precision_loss)]
fn epoch_seconds(now: DateTime<Utc>) -> f64 {
    now.timestamp_millis() as f64 / 1000.0
}

/// Score recency from discussion timestamps and trend momentum.
///
/// Ages are measured against `now`; a timestamp later than `now` counts as
/// age zero. With no timestamps at all the result is an explicit `no_data`
/// record scoring 0.
#[must_use]
pub fn score_recency(
    trend: Option<&TrendSignal>,
    discussion: Option<&DiscussionSignal>,
    now: DateTime<Utc>,
) -> Recency {
    let timestamps = discussion.map_or(&[][..], |d| d.timestamps.as_slice());

    if timestamps.is_empty() {
        return Recency {
            recency_score: 0.0,
            recent_activity_pct: 0.0,
            trend_momentum: TrendDirection::NoData,
            avg_content_age_days: 0.0,
            recent_30_days: 0,
            recent_90_days: 0,
            total_content: 0,
        };
    }

    let now_secs = epoch_seconds(now);
    let mut recent_30 = 0_usize;
    let mut recent_90 = 0_usize;
    let mut total_age_days = 0.0;

    for &ts in timestamps {
        let age_days = (now_secs - ts).max(0.0) / SECONDS_PER_DAY;
        total_age_days += age_days;
        if age_days <= RECENT_SHORT_DAYS {
            recent_30 += 1;
            recent_90 += 1;
        } else if age_days <= RECENT_LONG_DAYS {
            recent_90 += 1;
        }
    }

    let total = count_f64(timestamps.len());
    let recent_pct = count_f64(recent_90) / total * 100.0;
    let avg_age_days = total_age_days / total;

    let direction = trend.map_or(TrendDirection::default(), |t| t.trend_direction);

    let activity = recent_pct.min(100.0) * ACTIVITY_WEIGHT;
    let momentum = momentum_points(direction) * MOMENTUM_WEIGHT;
    let freshness =
        (1.0 - avg_age_days / FRESHNESS_HORIZON_DAYS).max(0.0) * 100.0 * FRESHNESS_WEIGHT;
    let score = activity + momentum + freshness;

    tracing::debug!(
        score,
        recent_pct,
        avg_age_days,
        momentum = %direction,
        "recency scored"
    );

    Recency {
        recency_score: round_to(score, 2),
        recent_activity_pct: round_to(recent_pct, 1),
        trend_momentum: direction,
        avg_content_age_days: round_to(avg_age_days, 1),
        recent_30_days: recent_30,
        recent_90_days: recent_90,
        total_content: timestamps.len(),
    }
}
