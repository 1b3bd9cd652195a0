//! Identity resolution tests: role parsing, track selection, engine routing.

use soulscore_core::completion::CompletionStatus;
use soulscore_core::config::ActivationTagConfig;
use soulscore_core::dataset::Row;
use soulscore_core::engine::ScoreEngine;
use soulscore_core::resolver::{IdentityResolver, Role, Track};
use soulscore_core::snapshot::Snapshot;

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn engine() -> ScoreEngine {
    ScoreEngine::new(ActivationTagConfig::default())
}

/// The raw extracts call the partner role `company`; both spellings parse.
#[test]
fn role_parsing() {
    assert_eq!(Role::parse("athlete"), Role::Athlete);
    assert_eq!(Role::parse("Company"), Role::Partner);
    assert_eq!(Role::parse("partner"), Role::Partner);
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("moderator"), Role::Unassigned);
    assert_eq!(Role::parse(""), Role::Unassigned);
}

/// Duplicate role rows for one account keep the last occurrence.
#[test]
fn duplicate_role_rows_keep_last() {
    let snapshot = Snapshot {
        roles: vec![
            row(&[("user_id", "acc-1"), ("role", "athlete")]),
            row(&[("user_id", "acc-1"), ("role", "company")]),
        ],
        ..Default::default()
    };
    let resolver = IdentityResolver::build(&snapshot);
    assert_eq!(resolver.role("acc-1"), Role::Partner);
}

/// An account with no role row lands on the account track even when a
/// profile row exists for it.
#[test]
fn unassigned_role_stays_on_account_track() {
    let snapshot = Snapshot {
        athletes: vec![row(&[("id", "ath-1"), ("user_id", "acc-1")])],
        ..Default::default()
    };
    let resolver = IdentityResolver::build(&snapshot);
    assert!(matches!(resolver.resolve("acc-1"), Track::Account));
}

/// Admin accounts produce no onboarding record at all.
#[test]
fn admin_accounts_excluded_from_output() {
    let snapshot = Snapshot {
        accounts: vec![row(&[("id", "acc-admin")])],
        roles: vec![row(&[("user_id", "acc-admin"), ("role", "admin")])],
        ..Default::default()
    };
    let output = engine().run(&snapshot);
    assert!(output.onboarding.is_empty());
    assert!(output.commercial.is_empty());
}

/// A no-role account gets a stalled account-track record.
#[test]
fn account_without_role_gets_stalled_record() {
    let snapshot = Snapshot {
        accounts: vec![row(&[("id", "acc-1"), ("email", "a@example.com")])],
        ..Default::default()
    };
    let output = engine().run(&snapshot);
    assert_eq!(output.onboarding.len(), 1);
    let record = &output.onboarding[0];
    assert_eq!(record.completion_status, CompletionStatus::Stalled);
    assert_eq!(record.completion_score, 0);
    assert_eq!(record.profile_kind.as_str(), "account");
    assert!(record.missing_fields.is_empty());
}

/// Role athlete with no profile row: athlete track, forced stalled.
#[test]
fn athlete_without_profile_is_stalled() {
    let snapshot = Snapshot {
        accounts: vec![row(&[("id", "acc-1")])],
        roles: vec![row(&[("user_id", "acc-1"), ("role", "athlete")])],
        ..Default::default()
    };
    let output = engine().run(&snapshot);
    assert_eq!(output.onboarding.len(), 1);
    assert_eq!(output.onboarding[0].profile_kind.as_str(), "athlete");
    assert_eq!(
        output.onboarding[0].completion_status,
        CompletionStatus::Stalled
    );
    assert!(output.commercial.is_empty(), "no profile id, no score");
}

/// Role partner with no profile row: partner track, forced stalled.
#[test]
fn partner_without_profile_is_stalled() {
    let snapshot = Snapshot {
        accounts: vec![row(&[("id", "acc-2")])],
        roles: vec![row(&[("user_id", "acc-2"), ("role", "company")])],
        ..Default::default()
    };
    let output = engine().run(&snapshot);
    assert_eq!(output.onboarding[0].profile_kind.as_str(), "partner");
    assert_eq!(
        output.onboarding[0].completion_status,
        CompletionStatus::Stalled
    );
}

/// Duplicate account rows keep the first; accounts with a blank id vanish.
#[test]
fn duplicate_and_blank_account_rows() {
    let snapshot = Snapshot {
        accounts: vec![
            row(&[("id", "acc-1")]),
            row(&[("id", "acc-1")]),
            row(&[("id", "")]),
        ],
        ..Default::default()
    };
    let output = engine().run(&snapshot);
    assert_eq!(output.onboarding.len(), 1);
}

/// A blank athlete profile id yields an onboarding record but no
/// commercial score.
#[test]
fn blank_profile_id_skips_commercial_score() {
    let snapshot = Snapshot {
        accounts: vec![row(&[("id", "acc-1")])],
        roles: vec![row(&[("user_id", "acc-1"), ("role", "athlete")])],
        athletes: vec![row(&[("id", ""), ("user_id", "acc-1"), ("bio", "x")])],
        ..Default::default()
    };
    let output = engine().run(&snapshot);
    assert_eq!(output.onboarding.len(), 1);
    assert_eq!(output.onboarding[0].profile_kind.as_str(), "athlete");
    assert_ne!(
        output.onboarding[0].completion_status,
        CompletionStatus::Stalled,
        "profile exists, so the rubric runs"
    );
    assert!(output.commercial.is_empty());
}
