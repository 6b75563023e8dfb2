//! Short human-readable takeaways attached to each topic result.

use topicscout_core::{DiscussionSignal, TrendDirection, TrendSignal, VideoSignal};

use crate::types::Opportunity;

fn demand_insight(demand: f64) -> &'static str {
    if demand >= 80.0 {
        "Strong validated demand"
    } else if demand >= 60.0 {
        "Good demand signals"
    } else if demand >= 40.0 {
        "Moderate demand - validate carefully"
    } else {
        "Weak demand signals"
    }
}

fn competition_insight(competition: f64) -> &'static str {
    if competition <= 30.0 {
        "Low competition - market gap opportunity"
    } else if competition <= 50.0 {
        "Moderate competition - differentiation needed"
    } else if competition <= 70.0 {
        "High competition - strong positioning required"
    } else {
        "Very competitive - avoid or find a unique angle"
    }
}

/// Build the ordered insight list for one topic.
///
/// `video` is `None` whenever the video source was not consulted.
#[must_use]
pub fn competitive_insights(
    trend: &TrendSignal,
    discussion: &DiscussionSignal,
    video: Option<&VideoSignal>,
    opportunity: &Opportunity,
) -> Vec<String> {
    let mut insights = vec![
        demand_insight(opportunity.demand_score).to_string(),
        competition_insight(opportunity.competition_score).to_string(),
    ];

    match trend.trend_direction {
        TrendDirection::Rising => {
            insights.push("Rising trend - early mover advantage".to_string());
        }
        TrendDirection::Falling => {
            insights.push("Declining trend - market may be dying".to_string());
        }
        TrendDirection::Stable | TrendDirection::NoData | TrendDirection::Error => {}
    }

    if let Some(v) = video {
        if v.total_videos < 30 && v.avg_views > 100_000.0 {
            insights.push("Content gap - high views, few videos".to_string());
        }
    }

    if discussion.total_posts > 30 && discussion.avg_engagement > 1000.0 {
        insights.push("Active community with pain points".to_string());
    }

    insights
}
