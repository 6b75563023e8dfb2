//! Per-source competition estimation.
//!
//! Competition reads the same raw snapshots as demand but with its own
//! heuristics: a rising, low-volume trend is an unsaturated market whatever
//! its demand. Every source always yields a score; scarce data maps to a
//! neutral default instead of an error.

use topicscout_core::{DiscussionSignal, TrendDirection, TrendSignal, VideoSignal};

use crate::bands::{above, at_least, round_to};
use crate::types::{CompetitionLevel, CompetitionReport};

/// Score returned when a source has too little data to judge.
pub const NEUTRAL_COMPETITION: f64 = 50.0;

/// Returned for a video source with no uploads (a possible content gap).
const EMPTY_VIDEO_COMPETITION: f64 = 30.0;

const MIN_TREND_POINTS: u32 = 10;

/// Engagement per post; more engagement per post reads as unmet-need
/// discussion and so lower competition. Compared with `>`.
const ENGAGEMENT_PER_POST: &[(f64, f64)] =
    &[(200.0, 20.0), (100.0, 35.0), (50.0, 55.0), (20.0, 70.0)];
const ENGAGEMENT_PER_POST_FLOOR: f64 = 60.0;

/// Posts per hundred units of engagement; denser posting reads as saturation.
/// Compared with `>=`.
const VOLUME_DENSITY: &[(f64, f64)] = &[(100.0, 85.0), (50.0, 70.0), (20.0, 55.0), (5.0, 40.0)];
const VOLUME_DENSITY_FLOOR: f64 = 30.0;
const VOLUME_DENSITY_CEILING: f64 = 85.0;

const ENGAGEMENT_WEIGHT: f64 = 0.40;
const CONCENTRATION_WEIGHT: f64 = 0.35;
const DENSITY_WEIGHT: f64 = 0.25;

const VIDEO_VOLUME: &[(f64, f64)] = &[(100.0, 75.0), (50.0, 60.0), (20.0, 40.0)];

/// Trend competition from direction and interest level.
///
/// Fewer than ten samples is treated as unknown and scores the neutral 50.
#[must_use]
pub fn trend_competition(signal: &TrendSignal) -> f64 {
    if signal.data_points < MIN_TREND_POINTS {
        return NEUTRAL_COMPETITION;
    }

    let mut competition: f64 = match signal.trend_direction {
        TrendDirection::Rising => 20.0,
        TrendDirection::Stable if signal.average_interest > 60.0 => 70.0,
        TrendDirection::Stable => 40.0,
        TrendDirection::Falling | TrendDirection::NoData | TrendDirection::Error => 80.0,
    };

    if signal.average_interest > 80.0 {
        competition += 10.0;
    }

    competition.min(100.0)
}

/// Community concentration: a single community is a niche, five or more is
/// mainstream.
fn concentration_score(community_count: u32) -> f64 {
    match community_count {
        0 => 50.0,
        1 => 25.0,
        2 => 35.0,
        3 => 50.0,
        4 => 60.0,
        _ => 75.0,
    }
}

fn density_score(signal: &DiscussionSignal) -> f64 {
    if signal.avg_engagement <= 0.0 {
        return VOLUME_DENSITY_CEILING;
    }
    let density = f64::from(signal.total_posts) / (signal.avg_engagement / 100.0);
    at_least(density, VOLUME_DENSITY, VOLUME_DENSITY_FLOOR)
}

/// Discussion competition as a weighted blend of engagement-per-post,
/// community concentration and volume density.
///
/// Zero posts scores the neutral 50 regardless of every other field.
#[must_use]
pub fn discussion_competition(signal: &DiscussionSignal) -> f64 {
    if signal.total_posts == 0 {
        return NEUTRAL_COMPETITION;
    }

    let per_post = signal.avg_engagement / f64::from(signal.total_posts);
    let engagement = above(per_post, ENGAGEMENT_PER_POST, ENGAGEMENT_PER_POST_FLOOR);
    let concentration = concentration_score(signal.community_count());
    let density = density_score(signal);

    let composite = ENGAGEMENT_WEIGHT * engagement
        + CONCENTRATION_WEIGHT * concentration
        + DENSITY_WEIGHT * density;

    tracing::trace!(
        per_post,
        engagement,
        concentration,
        density,
        composite,
        "discussion competition components"
    );

    composite.clamp(0.0, 100.0)
}

/// Video competition from upload count, view/count gaps and channel spread.
#[must_use]
pub fn video_competition(signal: &VideoSignal) -> f64 {
    if signal.total_videos == 0 {
        return EMPTY_VIDEO_COMPETITION;
    }

    let videos = signal.total_videos;
    let mut competition = at_least(f64::from(videos), VIDEO_VOLUME, 20.0);

    if videos < 30 && signal.avg_views > 500_000.0 {
        competition -= 20.0;
    } else if videos > 50 && signal.avg_views < 50_000.0 {
        competition += 15.0;
    }

    match signal.channel_count() {
        n if n >= 5 => competition += 10.0,
        n if n <= 2 => competition -= 5.0,
        _ => {}
    }

    competition.clamp(0.0, 100.0)
}

#[must_use]
pub fn competition_level(overall: f64) -> CompetitionLevel {
    if overall < 30.0 {
        CompetitionLevel::Low
    } else if overall < 50.0 {
        CompetitionLevel::Moderate
    } else if overall < 70.0 {
        CompetitionLevel::High
    } else {
        CompetitionLevel::VeryHigh
    }
}

/// Unweighted mean of the available per-source competition scores.
///
/// Trend and discussion always contribute (an absent source is passed as its
/// zeroed snapshot and lands on the neutral default); video contributes only
/// when supplied.
#[must_use]
pub fn overall_competition(
    trend: &TrendSignal,
    discussion: &DiscussionSignal,
    video: Option<&VideoSignal>,
) -> CompetitionReport {
    let trend_score = trend_competition(trend);
    let discussion_score = discussion_competition(discussion);
    let video_score = video.map(video_competition);

    let (sum, count) = match video_score {
        Some(v) => (trend_score + discussion_score + v, 3.0),
        None => (trend_score + discussion_score, 2.0),
    };
    let overall = sum / count;
    let level = competition_level(overall);

    tracing::debug!(
        trend = trend_score,
        discussion = discussion_score,
        video = ?video_score,
        overall,
        "competition analyzed"
    );

    CompetitionReport {
        trend_competition: round_to(trend_score, 2),
        discussion_competition: round_to(discussion_score, 2),
        video_competition: video_score.map(|v| round_to(v, 2)),
        overall_competition: round_to(overall, 2),
        competition_level: level,
        competition_description: level.description(),
    }
}

#[cfg(test)]
mod tests {
    use topicscout_core::NamedCount;

    use super::*;

    fn trend(average_interest: f64, direction: TrendDirection, data_points: u32) -> TrendSignal {
        TrendSignal {
            average_interest,
            peak_interest: average_interest,
            trend_direction: direction,
            data_points,
        }
    }

    fn named(n: usize) -> Vec<NamedCount> {
        (0..n)
            .map(|i| NamedCount {
                name: format!("c{i}"),
                count: 3,
            })
            .collect()
    }

    fn discussion(total_posts: u32, avg_engagement: f64, n: usize) -> DiscussionSignal {
        DiscussionSignal {
            total_posts,
            avg_engagement,
            top_communities: named(n),
            timestamps: vec![],
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn trend_nine_points_is_neutral_regardless_of_inputs() {
        for direction in [
            TrendDirection::Rising,
            TrendDirection::Falling,
            TrendDirection::Stable,
        ] {
            assert_close(trend_competition(&trend(95.0, direction, 9)), 50.0);
            assert_close(trend_competition(&trend(5.0, direction, 9)), 50.0);
        }
    }

    #[test]
    fn trend_ten_points_rising_is_twenty() {
        assert_close(
            trend_competition(&trend(50.0, TrendDirection::Rising, 10)),
            20.0,
        );
    }

    #[test]
    fn trend_stable_splits_at_sixty() {
        assert_close(
            trend_competition(&trend(60.0, TrendDirection::Stable, 20)),
            40.0,
        );
        assert_close(
            trend_competition(&trend(61.0, TrendDirection::Stable, 20)),
            70.0,
        );
    }

    #[test]
    fn trend_high_interest_adds_ten() {
        assert_close(
            trend_competition(&trend(80.0, TrendDirection::Stable, 20)),
            70.0,
        );
        assert_close(
            trend_competition(&trend(81.0, TrendDirection::Stable, 20)),
            80.0,
        );
        assert_close(
            trend_competition(&trend(90.0, TrendDirection::Falling, 20)),
            90.0,
        );
    }

    #[test]
    fn trend_without_direction_scores_like_falling() {
        assert_close(
            trend_competition(&trend(50.0, TrendDirection::NoData, 20)),
            80.0,
        );
    }

    #[test]
    fn discussion_zero_posts_is_neutral() {
        assert_close(discussion_competition(&discussion(0, 9_999.0, 7)), 50.0);
        assert_close(discussion_competition(&discussion(0, 0.0, 0)), 50.0);
    }

    #[test]
    fn discussion_high_engagement_niche() {
        // per-post 250 -> 20; one community -> 25; density 10/(2500/100)=0.4 -> 30
        let score = discussion_competition(&discussion(10, 2_500.0, 1));
        assert_close(score, 0.40 * 20.0 + 0.35 * 25.0 + 0.25 * 30.0);
    }

    #[test]
    fn discussion_low_engagement_mainstream() {
        // per-post 1.25 -> 60; five communities -> 75; density 120/1.5=80 -> 70
        let score = discussion_competition(&discussion(120, 150.0, 5));
        assert_close(score, 67.75);
    }

    #[test]
    fn discussion_zero_engagement_is_maximally_dense() {
        // per-post 0 -> 60; no communities -> 50; density ceiling 85
        let score = discussion_competition(&discussion(40, 0.0, 0));
        assert_close(score, 0.40 * 60.0 + 0.35 * 50.0 + 0.25 * 85.0);
    }

    #[test]
    fn engagement_per_post_bands_are_exclusive() {
        // exactly 200 per post falls to the 35 band
        let at = discussion_competition(&discussion(10, 2_000.0, 0));
        let over = discussion_competition(&discussion(10, 2_010.0, 0));
        assert!(over < at, "higher engagement per post should lower competition");
    }

    #[test]
    fn concentration_is_monotonic_from_one_community() {
        let scores: Vec<f64> = (1..=6).map(concentration_score).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{scores:?}");
        assert_close(concentration_score(0), 50.0);
    }

    #[test]
    fn video_empty_is_gap() {
        assert_close(video_competition(&VideoSignal::default()), 30.0);
    }

    #[test]
    fn video_gap_discount() {
        // 10 videos -> 20, gap -20, one channel -5, clamp to 0
        let video = VideoSignal {
            total_videos: 10,
            avg_views: 600_000.0,
            top_channels: named(1),
        };
        assert_close(video_competition(&video), 0.0);
    }

    #[test]
    fn video_saturation_penalty() {
        // 120 videos -> 75, saturated +15, six channels +10
        let video = VideoSignal {
            total_videos: 120,
            avg_views: 10_000.0,
            top_channels: named(6),
        };
        assert_close(video_competition(&video), 100.0);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(competition_level(29.99), CompetitionLevel::Low);
        assert_eq!(competition_level(30.0), CompetitionLevel::Moderate);
        assert_eq!(competition_level(50.0), CompetitionLevel::High);
        assert_eq!(competition_level(70.0), CompetitionLevel::VeryHigh);
    }

    #[test]
    fn overall_is_mean_of_two_without_video() {
        let report = overall_competition(
            &trend(80.0, TrendDirection::Rising, 40),
            &discussion(120, 150.0, 5),
            None,
        );
        assert_close(report.trend_competition, 20.0);
        assert_close(report.discussion_competition, 67.75);
        assert!(report.video_competition.is_none());
        assert_close(report.overall_competition, 43.88);
        assert_eq!(report.competition_level, CompetitionLevel::Moderate);
        assert_eq!(report.competition_description, "MODERATE");
    }

    #[test]
    fn overall_includes_video_when_present() {
        let report = overall_competition(
            &TrendSignal::default(),
            &DiscussionSignal::default(),
            Some(&VideoSignal::default()),
        );
        assert_close(report.video_competition.unwrap(), 30.0);
        assert_close(report.overall_competition, round_to(130.0 / 3.0, 2));
    }

    #[test]
    fn overall_stays_in_range() {
        let report = overall_competition(
            &trend(100.0, TrendDirection::Falling, 52),
            &discussion(500, 1.0, 9),
            Some(&VideoSignal {
                total_videos: 500,
                avg_views: 1.0,
                top_channels: named(9),
            }),
        );
        assert!((0.0..=100.0).contains(&report.overall_competition));
    }
}
