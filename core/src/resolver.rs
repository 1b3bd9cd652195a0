//! Identity resolver: link each account to its role and role-specific
//! profile row, and pick the scoring track.
//!
//! TRACK STATE MACHINE (fixed, documented):
//!   - role admin                  → Excluded (no record at all)
//!   - no role assigned            → Account track, regardless of profiles
//!   - role athlete, no profile    → Athlete track, forced stalled
//!   - role athlete, profile found → Athlete track, athlete rubric
//!   - role partner                → symmetric against the partner profile

use std::collections::HashMap;

use crate::{
    dataset::Row,
    field::{self, pick},
    snapshot::Snapshot,
};

/// Parsed role assignment. The raw extracts call the partner role `company`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Athlete,
    Partner,
    Admin,
    Unassigned,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "athlete" => Role::Athlete,
            "company" | "partner" => Role::Partner,
            "admin" => Role::Admin,
            _ => Role::Unassigned,
        }
    }
}

/// The scoring track an account resolves onto.
#[derive(Debug, Clone, Copy)]
pub enum Track<'a> {
    /// Admin accounts produce no onboarding record.
    Excluded,
    /// No role assigned: the account track has no rubric.
    Account,
    Athlete {
        profile: Option<&'a Row>,
    },
    Partner {
        profile: Option<&'a Row>,
    },
}

/// Per-snapshot lookup maps: account id → role / profile row.
/// Duplicate rows for the same account id keep the last occurrence.
pub struct IdentityResolver<'a> {
    roles: HashMap<&'a str, Role>,
    athletes: HashMap<&'a str, &'a Row>,
    partners: HashMap<&'a str, &'a Row>,
}

impl<'a> IdentityResolver<'a> {
    pub fn build(snapshot: &'a Snapshot) -> Self {
        let mut roles = HashMap::new();
        for row in &snapshot.roles {
            let account_id = pick(row, field::role::ACCOUNT_ID);
            let raw_role = pick(row, field::role::ROLE);
            if !account_id.is_empty() && !raw_role.is_empty() {
                roles.insert(account_id, Role::parse(raw_role));
            }
        }

        let mut athletes = HashMap::new();
        for row in &snapshot.athletes {
            let account_id = pick(row, field::athlete::ACCOUNT_ID);
            if !account_id.is_empty() {
                athletes.insert(account_id, row);
            }
        }

        let mut partners = HashMap::new();
        for row in &snapshot.partners {
            let account_id = pick(row, field::partner::ACCOUNT_ID);
            if !account_id.is_empty() {
                partners.insert(account_id, row);
            }
        }

        Self {
            roles,
            athletes,
            partners,
        }
    }

    pub fn role(&self, account_id: &str) -> Role {
        self.roles.get(account_id).copied().unwrap_or(Role::Unassigned)
    }

    pub fn resolve(&self, account_id: &str) -> Track<'a> {
        match self.role(account_id) {
            Role::Admin => Track::Excluded,
            Role::Unassigned => Track::Account,
            Role::Athlete => Track::Athlete {
                profile: self.athletes.get(account_id).copied(),
            },
            Role::Partner => Track::Partner {
                profile: self.partners.get(account_id).copied(),
            },
        }
    }

    /// The athlete profile id of a linked profile row, if non-blank.
    pub fn athlete_profile_id(profile: &'a Row) -> Option<&'a str> {
        let id = pick(profile, field::athlete::ID);
        (!id.is_empty()).then_some(id)
    }
}
