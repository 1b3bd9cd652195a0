//! Boundary helpers for the display/export consumers.
//!
//! The display layer splits a missing-field list on its `must:` / `nice:`
//! prefix; the export flattens it into fixed presence columns, one column
//! per known checklist field, valued `Filled` or `Missing`.

use crate::completion::{MissingField, ProfileKind};

pub const FILLED: &str = "Filled";
pub const MISSING: &str = "Missing";

/// All checklist fields of the athlete track, in generation order.
pub const ATHLETE_FIELDS: &[MissingField] = &[
    MissingField::Photo,
    MissingField::Bio,
    MissingField::Modality,
    MissingField::Level,
    MissingField::State,
    MissingField::City,
    MissingField::Phone,
    MissingField::Instagram,
    MissingField::Achievements,
    MissingField::Activations,
    MissingField::Causes,
    MissingField::Education,
    MissingField::Media,
    MissingField::Results,
    MissingField::Ranking,
    MissingField::Partnerships,
    MissingField::SocialActions,
    MissingField::TalksMentorship,
    MissingField::Youtube,
    MissingField::Tiktok,
    MissingField::Linkedin,
];

/// All checklist fields of the partner track, in rubric order.
pub const PARTNER_FIELDS: &[MissingField] = &[
    MissingField::Logo,
    MissingField::Description,
    MissingField::PartnerCity,
    MissingField::PartnerState,
    MissingField::Contact,
    MissingField::Links,
    MissingField::DisplayName,
    MissingField::Username,
    MissingField::Identity,
    MissingField::EntityKind,
];

/// Partition rendered labels into (must, nice), prefixes stripped.
pub fn split_missing<'a, I>(labels: I) -> (Vec<&'a str>, Vec<&'a str>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut must = Vec::new();
    let mut nice = Vec::new();
    for label in labels {
        if let Some(rest) = label.strip_prefix("must:") {
            must.push(rest);
        } else if let Some(rest) = label.strip_prefix("nice:") {
            nice.push(rest);
        }
    }
    (must, nice)
}

/// Fixed presence columns for one record: (label, "Filled"/"Missing") over
/// every known field of the track. The account track has no checklist.
pub fn presence_columns(
    profile_kind: ProfileKind,
    missing: &[MissingField],
) -> Vec<(&'static str, &'static str)> {
    let fields = match profile_kind {
        ProfileKind::Account => &[][..],
        ProfileKind::Athlete => ATHLETE_FIELDS,
        ProfileKind::Partner => PARTNER_FIELDS,
    };
    fields
        .iter()
        .map(|field| {
            let value = if missing.contains(field) { MISSING } else { FILLED };
            (field.label(), value)
        })
        .collect()
}
