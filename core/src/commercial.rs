//! Commercial scorer: the five-factor score for athlete accounts.
//!
//! Each sub-score is computed independently and clamped to its own range:
//! P1 performance 0–25, P2 narrative 0–20, P3 maturity 0–20, P4 activation
//! 0–20, P5 fit 0–15; total clamped to 0–100. Manual components are fixed
//! at zero in this version and the reserved manual columns stay NULL.

use crate::{
    completion::CompletionStatus,
    config::ActivationTagConfig,
    dataset::Row,
    field::{self, has_value, pick},
    index::FactIndices,
    types::{AccountId, ProfileId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Anchor,
    StrongCommercial,
    PotentialCommercial,
    NotYetCommercializable,
}

impl Tier {
    pub fn from_total(total: i64) -> Self {
        if total >= 90 {
            Tier::Anchor
        } else if total >= 75 {
            Tier::StrongCommercial
        } else if total >= 60 {
            Tier::PotentialCommercial
        } else {
            Tier::NotYetCommercializable
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Anchor => "Anchor Athlete",
            Tier::StrongCommercial => "Strong Commercial Athlete",
            Tier::PotentialCommercial => "Potential Commercial Athlete",
            Tier::NotYetCommercializable => "Not Yet Commercializable",
        }
    }
}

/// One derived commercial score, unique per athlete profile id.
#[derive(Debug, Clone, PartialEq)]
pub struct CommercialScoreRecord {
    pub athlete_id: ProfileId,
    pub account_id: AccountId,
    pub p1_performance: i64,
    pub p2_narrative: i64,
    pub p3_maturity: i64,
    pub p4_activation: i64,
    pub p5_fit: i64,
    pub total_score: i64,
    pub tier: Tier,
    /// Reserved manual adjustment fields, always NULL in this version.
    pub notes: Option<String>,
    pub updated_by: Option<String>,
}

fn clamp(n: i64, min: i64, max: i64) -> i64 {
    n.max(min).min(max)
}

/// P1 (0–25): presence across ranking / results / achievements.
pub fn p1_performance(athlete_id: &str, indices: &FactIndices) -> i64 {
    let present = [
        indices.ranking.has_any(athlete_id),
        indices.results.has_any(athlete_id),
        indices.achievements.has_any(athlete_id),
    ]
    .iter()
    .filter(|p| **p)
    .count();

    match present {
        0 => 0,
        1 => 10,
        2 => 18,
        _ => 25,
    }
}

/// P2 (0–20): cause count ladder plus a description-depth bonus.
/// No causes means no narrative at all — the bonus does not apply then.
pub fn p2_narrative(profile: &Row, athlete_id: &str, indices: &FactIndices) -> i64 {
    let count = clamp(indices.causes.count(athlete_id) as i64, 0, 10);
    if count == 0 {
        return 0;
    }

    let base = if count <= 2 {
        8
    } else if count <= 5 {
        12
    } else {
        15
    };

    let description = pick(profile, field::athlete::VALUES_DESCRIPTION);
    let desc_bonus = if description.chars().count() >= 80 { 5 } else { 0 };

    clamp(base + desc_bonus, 0, 20)
}

/// P3 (0–20): gated on every must-have being filled (status acceptable or
/// complete); base 10, +5 education, +5 partnerships.
pub fn p3_maturity(
    status: CompletionStatus,
    athlete_id: &str,
    indices: &FactIndices,
) -> i64 {
    if !status.must_complete() {
        return 0;
    }

    let mut points = 10;
    if indices.education.has_any(athlete_id) {
        points += 5;
    }
    if indices.partnerships.has_any(athlete_id) {
        points += 5;
    }
    clamp(points, 0, 20)
}

/// P4 (0–20): manual component fixed at 0; automatic bonus +5 for the
/// talk/mentorship tag, +2 for any brand/presence-event tag, bonus capped
/// at 8.
pub fn p4_activation(
    athlete_id: &str,
    indices: &FactIndices,
    config: &ActivationTagConfig,
) -> i64 {
    let manual = 0;

    let mut bonus = 0;
    if indices.has_talk_mentorship(athlete_id, config) {
        bonus += 5;
    }
    if indices.has_brand_event(athlete_id, config) {
        bonus += 2;
    }
    bonus = clamp(bonus, 0, 8);

    clamp(manual + bonus, 0, 20)
}

/// P5 (0–15): manual component fixed at 0; +3 when both city and state are
/// filled.
pub fn p5_fit(profile: &Row) -> i64 {
    let manual = 0;

    let has_city = has_value(profile, field::athlete::CITY);
    let has_state = has_value(profile, field::athlete::STATE);
    let auto_base = if has_city && has_state { 3 } else { 0 };

    clamp(manual + auto_base, 0, 15)
}

/// Full commercial score for one resolved athlete account.
pub fn score_athlete(
    profile: &Row,
    athlete_id: &str,
    account_id: &str,
    completion_status: CompletionStatus,
    indices: &FactIndices,
    config: &ActivationTagConfig,
) -> CommercialScoreRecord {
    let p1 = p1_performance(athlete_id, indices);
    let p2 = p2_narrative(profile, athlete_id, indices);
    let p3 = p3_maturity(completion_status, athlete_id, indices);
    let p4 = p4_activation(athlete_id, indices, config);
    let p5 = p5_fit(profile);

    let total = clamp(p1 + p2 + p3 + p4 + p5, 0, 100);

    CommercialScoreRecord {
        athlete_id: athlete_id.to_string(),
        account_id: account_id.to_string(),
        p1_performance: p1,
        p2_narrative: p2,
        p3_maturity: p3,
        p4_activation: p4,
        p5_fit: p5,
        total_score: total,
        tier: Tier::from_total(total),
        notes: None,
        updated_by: None,
    }
}
