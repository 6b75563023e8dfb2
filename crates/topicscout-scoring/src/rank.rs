//! Opportunity-first ordering of scored topics.

use std::cmp::Ordering;

use crate::types::ScoredTopic;

fn by_opportunity_then_confidence(a: &ScoredTopic, b: &ScoredTopic) -> Ordering {
    b.scores
        .opportunity
        .opportunity_score
        .total_cmp(&a.scores.opportunity.opportunity_score)
        .then_with(|| b.scores.confidence.cmp(&a.scores.confidence))
}

/// Sort topics by opportunity score descending, then confidence descending.
///
/// The sort is stable: topics tied on both keys keep their input order.
#[must_use]
pub fn rank_topics(mut topics: Vec<ScoredTopic>) -> Vec<ScoredTopic> {
    topics.sort_by(by_opportunity_then_confidence);

    if let Some(leader) = topics.first() {
        tracing::info!(
            count = topics.len(),
            leader = %leader.topic,
            opportunity = leader.scores.opportunity.opportunity_score,
            demand = leader.scores.composite_score,
            competition = leader.scores.competition.overall_competition,
            "topics ranked"
        );
    }

    topics
}
