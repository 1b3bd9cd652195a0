//! Completion scorer: the must-have / nice-to-have checklist per account.
//!
//! Each rubric is a list of (predicate, label) pairs evaluated independently;
//! a failing predicate contributes its label to the missing list in group
//! order: must-base, then must-cards, then nice. That generation order is
//! stable regardless of the resulting status.

use serde::{Deserialize, Serialize};

use crate::{
    config::ActivationTagConfig,
    dataset::Row,
    field::{self, has_value, is_empty_array_like, pick},
    index::FactIndices,
    types::AccountId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Stalled,
    Incomplete,
    Almost,
    Acceptable,
    Complete,
}

impl CompletionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionStatus::Stalled => "stalled",
            CompletionStatus::Incomplete => "incomplete",
            CompletionStatus::Almost => "almost",
            CompletionStatus::Acceptable => "acceptable",
            CompletionStatus::Complete => "complete",
        }
    }

    /// Must-have checks are all satisfied at `acceptable` and above.
    pub fn must_complete(self) -> bool {
        matches!(self, CompletionStatus::Acceptable | CompletionStatus::Complete)
    }
}

/// Which scoring track an onboarding record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileKind {
    Account,
    Athlete,
    Partner,
}

impl ProfileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Account => "account",
            ProfileKind::Athlete => "athlete",
            ProfileKind::Partner => "partner",
        }
    }
}

/// Closed set of checklist labels. The display layer splits the rendered
/// form on its `must:` / `nice:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    // Athlete must-base
    Photo,
    Bio,
    Modality,
    Level,
    State,
    City,
    Phone,
    Instagram,
    // Athlete must-cards
    Achievements,
    Activations,
    Causes,
    Education,
    Media,
    Results,
    // Athlete nice-to-have
    Ranking,
    Partnerships,
    SocialActions,
    TalksMentorship,
    Youtube,
    Tiktok,
    Linkedin,
    // Partner rubric
    Logo,
    Description,
    PartnerCity,
    PartnerState,
    Contact,
    Links,
    DisplayName,
    Username,
    Identity,
    EntityKind,
}

impl MissingField {
    pub fn label(self) -> &'static str {
        match self {
            MissingField::Photo => "must:photo",
            MissingField::Bio => "must:bio",
            MissingField::Modality => "must:modality",
            MissingField::Level => "must:level",
            MissingField::State => "must:state",
            MissingField::City => "must:city",
            MissingField::Phone => "must:phone",
            MissingField::Instagram => "must:instagram",
            MissingField::Achievements => "must:achievements",
            MissingField::Activations => "must:activations",
            MissingField::Causes => "must:causes",
            MissingField::Education => "must:education",
            MissingField::Media => "must:media",
            MissingField::Results => "must:results",
            MissingField::Ranking => "nice:ranking",
            MissingField::Partnerships => "nice:partnerships",
            MissingField::SocialActions => "nice:social_actions",
            MissingField::TalksMentorship => "nice:talks_mentorship",
            MissingField::Youtube => "nice:youtube",
            MissingField::Tiktok => "nice:tiktok",
            MissingField::Linkedin => "nice:linkedin",
            MissingField::Logo => "must:logo",
            MissingField::Description => "must:description",
            MissingField::PartnerCity => "must:city",
            MissingField::PartnerState => "must:state",
            MissingField::Contact => "must:contact",
            MissingField::Links => "must:links",
            MissingField::DisplayName => "must:display_name",
            MissingField::Username => "must:username",
            MissingField::Identity => "must:identity",
            MissingField::EntityKind => "must:entity_kind",
        }
    }

    pub fn is_nice(self) -> bool {
        self.label().starts_with("nice:")
    }
}

/// Result of one rubric evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub status: CompletionStatus,
    pub score: i64,
    pub missing: Vec<MissingField>,
}

impl CompletionOutcome {
    /// Outcome for an account whose track never reached a rubric.
    pub fn stalled() -> Self {
        Self {
            status: CompletionStatus::Stalled,
            score: 0,
            missing: Vec::new(),
        }
    }
}

/// One derived onboarding record, unique per (account_id, profile_kind).
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingRecord {
    pub account_id: AccountId,
    pub profile_kind: ProfileKind,
    pub entity_kind: Option<String>,
    pub completion_status: CompletionStatus,
    pub completion_score: i64,
    pub missing_fields: Vec<MissingField>,
}

// ── Rubric plumbing ────────────────────────────────────────────────────────

/// Evaluate a check group: count hits, append failing labels in order.
fn run_checks(checks: &[(bool, MissingField)], missing: &mut Vec<MissingField>) -> u32 {
    let mut points = 0;
    for (ok, label) in checks {
        if *ok {
            points += 1;
        } else {
            missing.push(*label);
        }
    }
    points
}

// ── Athlete rubric ─────────────────────────────────────────────────────────

fn athlete_must_base(profile: &Row, missing: &mut Vec<MissingField>) -> u32 {
    use field::athlete as f;
    let checks = [
        (has_value(profile, f::PHOTO), MissingField::Photo),
        (has_value(profile, f::BIO), MissingField::Bio),
        (
            !is_empty_array_like(pick(profile, f::MODALITY)),
            MissingField::Modality,
        ),
        (has_value(profile, f::LEVEL), MissingField::Level),
        (has_value(profile, f::STATE), MissingField::State),
        (has_value(profile, f::CITY), MissingField::City),
        (has_value(profile, f::PHONE), MissingField::Phone),
        (has_value(profile, f::INSTAGRAM), MissingField::Instagram),
    ];
    run_checks(&checks, missing)
}

fn athlete_must_cards(
    profile_id: Option<&str>,
    indices: &FactIndices,
    missing: &mut Vec<MissingField>,
) -> u32 {
    let has = |index: &crate::index::CountIndex| profile_id.is_some_and(|id| index.has_any(id));
    let checks = [
        (has(&indices.achievements), MissingField::Achievements),
        (has(&indices.activations), MissingField::Activations),
        (has(&indices.causes), MissingField::Causes),
        (has(&indices.education), MissingField::Education),
        (has(&indices.media), MissingField::Media),
        (has(&indices.results), MissingField::Results),
    ];
    run_checks(&checks, missing)
}

fn athlete_nice(
    profile: &Row,
    profile_id: Option<&str>,
    indices: &FactIndices,
    config: &ActivationTagConfig,
    missing: &mut Vec<MissingField>,
) -> u32 {
    use field::athlete as f;
    let has = |index: &crate::index::CountIndex| profile_id.is_some_and(|id| index.has_any(id));
    let has_talk_mentor =
        profile_id.is_some_and(|id| indices.has_talk_mentorship(id, config));
    let checks = [
        (has(&indices.ranking), MissingField::Ranking),
        (has(&indices.partnerships), MissingField::Partnerships),
        (has(&indices.social_actions), MissingField::SocialActions),
        (has_talk_mentor, MissingField::TalksMentorship),
        (has_value(profile, f::YOUTUBE), MissingField::Youtube),
        (has_value(profile, f::TIKTOK), MissingField::Tiktok),
        (has_value(profile, f::LINKEDIN), MissingField::Linkedin),
    ];
    run_checks(&checks, missing)
}

/// Athlete completion: 8 must-base + 6 must-card checks, 7 nice checks.
///
/// Status ladder (evaluated in order): all 21 → complete; all 14 must →
/// acceptable; must ratio ≥ 0.8 → almost; else incomplete.
pub fn score_athlete(
    profile: &Row,
    profile_id: Option<&str>,
    indices: &FactIndices,
    config: &ActivationTagConfig,
) -> CompletionOutcome {
    let mut missing = Vec::new();

    let must_points = athlete_must_base(profile, &mut missing)
        + athlete_must_cards(profile_id, indices, &mut missing);
    let must_total = 14u32;

    let nice_points = athlete_nice(profile, profile_id, indices, config, &mut missing);
    let nice_total = 7u32;

    let status = if must_points == must_total && nice_points == nice_total {
        CompletionStatus::Complete
    } else if must_points == must_total {
        CompletionStatus::Acceptable
    } else if f64::from(must_points) / f64::from(must_total) >= 0.8 {
        CompletionStatus::Almost
    } else {
        CompletionStatus::Incomplete
    };

    let full_points = must_points + nice_points;
    let full_total = must_total + nice_total;
    let score = (f64::from(full_points) * 100.0 / f64::from(full_total)).round() as i64;

    CompletionOutcome {
        status,
        score,
        missing,
    }
}

// ── Partner rubric ─────────────────────────────────────────────────────────

/// Partner completion: 10 equally weighted checks.
///
/// This rubric has no `acceptable` state; `stalled` is assigned only
/// upstream, when no profile row exists at all.
pub fn score_partner(profile: &Row) -> CompletionOutcome {
    use field::partner as f;

    let has_links = has_value(profile, f::WEBSITE)
        || has_value(profile, f::LINKEDIN)
        || has_value(profile, f::INSTAGRAM);
    let has_contact = !is_empty_array_like(pick(profile, f::CONTACT));
    let entity_kind = pick(profile, f::ENTITY_KIND);

    let identity_ok = match entity_kind {
        "pj" => has_value(profile, f::TAX_ID) || has_value(profile, f::LEGAL_NAME),
        "pf" => has_value(profile, f::PERSONAL_ID),
        _ => false,
    };

    let checks = [
        (has_value(profile, f::LOGO), MissingField::Logo),
        (has_value(profile, f::DESCRIPTION), MissingField::Description),
        (has_value(profile, f::CITY), MissingField::PartnerCity),
        (has_value(profile, f::STATE), MissingField::PartnerState),
        (has_contact, MissingField::Contact),
        (has_links, MissingField::Links),
        (has_value(profile, f::DISPLAY_NAME), MissingField::DisplayName),
        (has_value(profile, f::USERNAME), MissingField::Username),
        (identity_ok, MissingField::Identity),
        (!entity_kind.is_empty(), MissingField::EntityKind),
    ];

    let mut missing = Vec::new();
    let points = run_checks(&checks, &mut missing);
    let total = checks.len() as u32;

    let score = (f64::from(points) * 100.0 / f64::from(total)).round() as i64;
    let status = if score == 100 {
        CompletionStatus::Complete
    } else if score >= 80 {
        CompletionStatus::Almost
    } else {
        CompletionStatus::Incomplete
    };

    CompletionOutcome {
        status,
        score,
        missing,
    }
}
