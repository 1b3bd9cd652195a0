//! The scoring engine — one deterministic batch pass per snapshot.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Collect known athlete profile ids
//!   2. Build cross-reference indices over the fact tables
//!   3. Resolve identity (role + linked profile) per account
//!   4. Completion scoring (athlete / partner rubric)
//!   5. Commercial scoring (athlete track only, consumes step 4's status)
//!
//! RULES:
//!   - Scoring reads only the in-memory snapshot; nothing revisits files.
//!   - Output vectors are sorted, so an unchanged snapshot reproduces
//!     byte-identical record sets.
//!   - Persistence goes through the store; the engine never executes SQL.

use std::collections::HashSet;

use crate::{
    commercial::{self, CommercialScoreRecord},
    completion::{self, CompletionOutcome, OnboardingRecord, ProfileKind},
    config::ActivationTagConfig,
    error::ScoreResult,
    field::{self, pick},
    index::FactIndices,
    resolver::{IdentityResolver, Track},
    snapshot::Snapshot,
    store::ScoreStore,
    types::ProfileId,
};

/// Everything one run derives. Fully replaces prior values for the same keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOutput {
    pub onboarding: Vec<OnboardingRecord>,
    pub commercial: Vec<CommercialScoreRecord>,
}

pub struct ScoreEngine {
    config: ActivationTagConfig,
}

impl ScoreEngine {
    pub fn new(config: ActivationTagConfig) -> Self {
        Self { config }
    }

    /// Run the full scoring pass. Pure with respect to the snapshot.
    pub fn run(&self, snapshot: &Snapshot) -> RunOutput {
        let known_keys: HashSet<ProfileId> = snapshot
            .athletes
            .iter()
            .filter_map(|row| IdentityResolver::athlete_profile_id(row))
            .map(str::to_string)
            .collect();

        let indices = FactIndices::build(snapshot, &known_keys);
        let resolver = IdentityResolver::build(snapshot);

        let mut output = RunOutput::default();
        let mut seen: HashSet<String> = HashSet::new();

        for account in &snapshot.accounts {
            let account_id = pick(account, field::account::ID);
            if account_id.is_empty() {
                continue;
            }
            if !seen.insert(account_id.to_string()) {
                log::warn!("duplicate account row for '{account_id}'; keeping the first");
                continue;
            }

            match resolver.resolve(account_id) {
                Track::Excluded => {}
                Track::Account => {
                    output.onboarding.push(stalled_record(
                        account_id,
                        ProfileKind::Account,
                    ));
                }
                Track::Athlete { profile: None } => {
                    output.onboarding.push(stalled_record(
                        account_id,
                        ProfileKind::Athlete,
                    ));
                }
                Track::Athlete {
                    profile: Some(profile),
                } => {
                    let profile_id = IdentityResolver::athlete_profile_id(profile);
                    let outcome =
                        completion::score_athlete(profile, profile_id, &indices, &self.config);

                    if let Some(athlete_id) = profile_id {
                        output.commercial.push(commercial::score_athlete(
                            profile,
                            athlete_id,
                            account_id,
                            outcome.status,
                            &indices,
                            &self.config,
                        ));
                    }

                    output.onboarding.push(OnboardingRecord {
                        account_id: account_id.to_string(),
                        profile_kind: ProfileKind::Athlete,
                        entity_kind: None,
                        completion_status: outcome.status,
                        completion_score: outcome.score,
                        missing_fields: outcome.missing,
                    });
                }
                Track::Partner { profile: None } => {
                    output.onboarding.push(stalled_record(
                        account_id,
                        ProfileKind::Partner,
                    ));
                }
                Track::Partner {
                    profile: Some(profile),
                } => {
                    let outcome = completion::score_partner(profile);
                    let entity_kind = pick(profile, field::partner::ENTITY_KIND);

                    output.onboarding.push(OnboardingRecord {
                        account_id: account_id.to_string(),
                        profile_kind: ProfileKind::Partner,
                        entity_kind: (!entity_kind.is_empty())
                            .then(|| entity_kind.to_string()),
                        completion_status: outcome.status,
                        completion_score: outcome.score,
                        missing_fields: outcome.missing,
                    });
                }
            }
        }

        output
            .onboarding
            .sort_by(|a, b| (&a.account_id, a.profile_kind).cmp(&(&b.account_id, b.profile_kind)));
        output
            .commercial
            .sort_by(|a, b| a.athlete_id.cmp(&b.athlete_id));

        output
    }

    /// Persist both record sets; the store applies them in one transaction.
    pub fn persist(&self, output: &RunOutput, store: &ScoreStore) -> ScoreResult<()> {
        store.persist_run_output(output)
    }
}

fn stalled_record(account_id: &str, profile_kind: ProfileKind) -> OnboardingRecord {
    let outcome = CompletionOutcome::stalled();
    OnboardingRecord {
        account_id: account_id.to_string(),
        profile_kind,
        entity_kind: None,
        completion_status: outcome.status,
        completion_score: outcome.score,
        missing_fields: outcome.missing,
    }
}
