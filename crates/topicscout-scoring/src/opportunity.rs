//! Opportunity scoring and quadrant classification.

use crate::bands::round_to;
use crate::types::{Complexity, Opportunity, Recommendation, RiskLevel, Zone};

/// Demand at or above this is "high demand" for zoning.
const ZONE_DEMAND_THRESHOLD: f64 = 50.0;
/// Competition strictly below this is "low competition" for zoning.
const ZONE_COMPETITION_THRESHOLD: f64 = 50.0;

/// Demand discounted by competition: `demand * (1 - competition / 100)`.
///
/// Both inputs are expected in `[0, 100]`, so the result is too.
#[must_use]
pub fn opportunity_value(demand: f64, competition: f64) -> f64 {
    demand * (1.0 - competition / 100.0)
}

fn recommend(opportunity: f64) -> (Recommendation, RiskLevel) {
    if opportunity >= 60.0 {
        (Recommendation::HighPriority, RiskLevel::Low)
    } else if opportunity >= 45.0 {
        (Recommendation::Viable, RiskLevel::Moderate)
    } else if opportunity >= 30.0 {
        (Recommendation::Risky, RiskLevel::High)
    } else {
        (Recommendation::Avoid, RiskLevel::VeryHigh)
    }
}

/// Entry complexity, judged from the (demand, competition) pair directly.
#[must_use]
pub fn complexity(demand: f64, competition: f64) -> Complexity {
    if demand >= 70.0 && competition <= 30.0 {
        Complexity::Simple
    } else if demand >= 50.0 && competition <= 50.0 {
        Complexity::Moderate
    } else if demand >= 50.0 {
        Complexity::Complex
    } else {
        Complexity::VeryComplex
    }
}

/// Score the opportunity for a demand/competition pair.
#[must_use]
pub fn score_opportunity(demand: f64, competition: f64) -> Opportunity {
    let opportunity = opportunity_value(demand, competition);
    let (recommendation, risk_level) = recommend(opportunity);
    let complexity = complexity(demand, competition);

    tracing::debug!(
        demand,
        competition,
        opportunity,
        ?recommendation,
        "opportunity calculated"
    );

    Opportunity {
        opportunity_score: round_to(opportunity, 2),
        recommendation,
        recommendation_description: recommendation.description(),
        risk_level,
        complexity,
        complexity_description: complexity.description(),
        demand_score: demand,
        competition_score: competition,
    }
}

/// Quadrant for a demand/competition pair.
///
/// High demand is `>= 50`; low competition is strictly `< 50`, so a topic
/// sitting exactly on 50/50 is `viable`, not `gold_mine`.
#[must_use]
pub fn classify_zone(demand: f64, competition: f64) -> Zone {
    let high_demand = demand >= ZONE_DEMAND_THRESHOLD;
    let low_competition = competition < ZONE_COMPETITION_THRESHOLD;

    match (high_demand, low_competition) {
        (true, true) => Zone::GoldMine,
        (true, false) => Zone::Viable,
        (false, true) => Zone::RiskyNiche,
        (false, false) => Zone::Avoid,
    }
}
