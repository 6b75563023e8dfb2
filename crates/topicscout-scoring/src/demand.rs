//! Per-source demand normalization.
//!
//! Each function maps one raw source snapshot to an independent 0-100 demand
//! score. They are pure and never fail; an empty source scores 0.

use topicscout_core::{DiscussionSignal, TrendDirection, TrendSignal, VideoSignal};

use crate::bands::at_least;

const DISCUSSION_VOLUME: &[(f64, f64)] = &[(100.0, 70.0), (50.0, 50.0), (10.0, 30.0)];
const VIDEO_VOLUME: &[(f64, f64)] = &[(20.0, 60.0), (10.0, 35.0), (5.0, 20.0)];
const VIDEO_VIEWS: &[(f64, f64)] = &[(1_000_000.0, 60.0), (100_000.0, 40.0), (10_000.0, 20.0)];

/// Trend demand: average interest adjusted for direction and sample size.
///
/// Only the upper bound is clamped; interest is expected to be non-negative.
#[must_use]
pub fn normalize_trend(signal: &TrendSignal) -> f64 {
    let mut score = signal.average_interest;

    match signal.trend_direction {
        TrendDirection::Rising => score *= 1.2,
        TrendDirection::Falling => score *= 0.8,
        TrendDirection::Stable | TrendDirection::NoData | TrendDirection::Error => {}
    }

    if signal.data_points < 10 {
        score *= 0.7;
    } else if signal.data_points >= 30 {
        score *= 1.1;
    }

    score.min(100.0)
}

/// Discussion demand: post volume band + capped engagement + community spread.
#[must_use]
pub fn normalize_discussion(signal: &DiscussionSignal) -> f64 {
    if signal.total_posts == 0 {
        return 0.0;
    }

    let posts = f64::from(signal.total_posts);
    let volume = at_least(posts, DISCUSSION_VOLUME, posts * 3.0);
    let engagement = (signal.avg_engagement / 2.0).min(50.0);
    let diversity = (f64::from(signal.community_count()) * 3.0).min(15.0);

    (volume + engagement + diversity).min(100.0)
}

/// Video demand: upload volume band + view band + channel spread.
#[must_use]
pub fn normalize_video(signal: &VideoSignal) -> f64 {
    if signal.total_videos == 0 {
        return 0.0;
    }

    let videos = f64::from(signal.total_videos);
    let volume = at_least(videos, VIDEO_VOLUME, videos * 4.0);

    let small_views = if signal.avg_views > 0.0 {
        (signal.avg_views / 1000.0 * 2.0).min(20.0)
    } else {
        0.0
    };
    let views = at_least(signal.avg_views, VIDEO_VIEWS, small_views);

    let diversity = (f64::from(signal.channel_count()) * 4.0).min(20.0);

    (volume + views + diversity).min(100.0)
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

    fn communities(n: usize) -> Vec<NamedCount> {
        (0..n)
            .map(|i| NamedCount {
                name: format!("community-{i}"),
                count: 1,
            })
            .collect()
    }

    fn discussion(total_posts: u32, avg_engagement: f64, n: usize) -> DiscussionSignal {
        DiscussionSignal {
            total_posts,
            avg_engagement,
            top_communities: communities(n),
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
    fn trend_stable_mid_sample_is_raw_interest() {
        assert_close(normalize_trend(&trend(42.0, TrendDirection::Stable, 20)), 42.0);
    }

    #[test]
    fn trend_rising_boost() {
        assert_close(normalize_trend(&trend(50.0, TrendDirection::Rising, 20)), 60.0);
    }

    #[test]
    fn trend_falling_penalty() {
        assert_close(normalize_trend(&trend(50.0, TrendDirection::Falling, 20)), 40.0);
    }

    #[test]
    fn trend_low_sample_penalty() {
        assert_close(normalize_trend(&trend(50.0, TrendDirection::Stable, 9)), 35.0);
    }

    #[test]
    fn trend_high_sample_boost_starts_at_thirty() {
        assert_close(normalize_trend(&trend(50.0, TrendDirection::Stable, 29)), 50.0);
        assert_close(normalize_trend(&trend(50.0, TrendDirection::Stable, 30)), 55.0);
    }

    #[test]
    fn trend_clamps_at_hundred() {
        assert_close(normalize_trend(&trend(80.0, TrendDirection::Rising, 40)), 100.0);
    }

    #[test]
    fn trend_no_data_direction_is_unadjusted() {
        assert_close(normalize_trend(&trend(50.0, TrendDirection::NoData, 20)), 50.0);
        assert_close(normalize_trend(&trend(50.0, TrendDirection::Error, 20)), 50.0);
    }

    #[test]
    fn discussion_zero_posts_is_zero() {
        assert_close(normalize_discussion(&discussion(0, 900.0, 5)), 0.0);
    }

    #[test]
    fn discussion_small_volume_is_linear() {
        // 4 posts * 3 = 12, engagement 10/2 = 5, no communities
        assert_close(normalize_discussion(&discussion(4, 10.0, 0)), 17.0);
    }

    #[test]
    fn discussion_volume_bands() {
        assert_close(normalize_discussion(&discussion(10, 0.0, 0)), 30.0);
        assert_close(normalize_discussion(&discussion(50, 0.0, 0)), 50.0);
        assert_close(normalize_discussion(&discussion(100, 0.0, 0)), 70.0);
    }

    #[test]
    fn discussion_engagement_caps_at_fifty() {
        assert_close(normalize_discussion(&discussion(10, 150.0, 0)), 80.0);
    }

    #[test]
    fn discussion_diversity_caps_at_fifteen() {
        assert_close(normalize_discussion(&discussion(10, 0.0, 3)), 39.0);
        assert_close(normalize_discussion(&discussion(10, 0.0, 8)), 45.0);
    }

    #[test]
    fn discussion_clamps_at_hundred() {
        assert_close(normalize_discussion(&discussion(120, 150.0, 5)), 100.0);
    }

    #[test]
    fn video_zero_is_zero() {
        let video = VideoSignal::default();
        assert_close(normalize_video(&video), 0.0);
    }

    #[test]
    fn video_small_counts_and_views() {
        // 3 videos * 4 = 12, 5000 views -> 10, 1 channel -> 4
        let video = VideoSignal {
            total_videos: 3,
            avg_views: 5_000.0,
            top_channels: communities(1),
        };
        assert_close(normalize_video(&video), 26.0);
    }

    #[test]
    fn video_view_bands() {
        let mut video = VideoSignal {
            total_videos: 10,
            avg_views: 10_000.0,
            top_channels: vec![],
        };
        assert_close(normalize_video(&video), 55.0);
        video.avg_views = 100_000.0;
        assert_close(normalize_video(&video), 75.0);
        video.avg_views = 1_000_000.0;
        assert_close(normalize_video(&video), 95.0);
    }

    #[test]
    fn video_clamps_at_hundred() {
        let video = VideoSignal {
            total_videos: 25,
            avg_views: 2_000_000.0,
            top_channels: communities(6),
        };
        assert_close(normalize_video(&video), 100.0);
    }
}
