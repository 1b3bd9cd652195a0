//! Cross-reference indices over the fact tables, keyed by athlete profile id.
//!
//! Rows with a blank foreign key are ignored. Rows whose foreign key does
//! not match any known athlete are excluded as well — an unresolved key must
//! never inflate counts for a nonexistent athlete.

use std::collections::{HashMap, HashSet};

use crate::{
    config::ActivationTagConfig,
    dataset::Row,
    field::{self, pick},
    snapshot::Snapshot,
    types::ProfileId,
};

/// Number of fact rows per athlete profile id.
#[derive(Debug, Default, Clone)]
pub struct CountIndex(HashMap<ProfileId, u64>);

impl CountIndex {
    pub fn build(name: &str, rows: &[Row], known_keys: &HashSet<ProfileId>) -> Self {
        let mut map: HashMap<ProfileId, u64> = HashMap::new();
        for row in rows {
            let key = pick(row, field::fact::FOREIGN_KEY);
            if key.is_empty() {
                continue;
            }
            if !known_keys.contains(key) {
                log::debug!("{name}: dropping row with unresolved athlete key '{key}'");
                continue;
            }
            *map.entry(key.to_string()).or_insert(0) += 1;
        }
        Self(map)
    }

    pub fn count(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn has_any(&self, key: &str) -> bool {
        self.count(key) > 0
    }
}

/// Per-athlete set of activation type ids, from the activations fact table.
#[derive(Debug, Default, Clone)]
pub struct TagSetIndex(HashMap<ProfileId, HashSet<String>>);

impl TagSetIndex {
    pub fn build(rows: &[Row], known_keys: &HashSet<ProfileId>) -> Self {
        let mut map: HashMap<ProfileId, HashSet<String>> = HashMap::new();
        for row in rows {
            let key = pick(row, field::fact::FOREIGN_KEY);
            if key.is_empty() || !known_keys.contains(key) {
                continue;
            }
            let tag = pick(row, field::fact::ACTIVATION_TYPE);
            if tag.is_empty() {
                continue;
            }
            map.entry(key.to_string()).or_default().insert(tag.to_string());
        }
        Self(map)
    }

    pub fn contains(&self, key: &str, tag: &str) -> bool {
        self.0.get(key).is_some_and(|tags| tags.contains(tag))
    }

    pub fn contains_any<'a, I>(&self, key: &str, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        let Some(set) = self.0.get(key) else {
            return false;
        };
        tags.into_iter().any(|t| set.contains(t))
    }
}

/// All indices one scoring pass consumes, built once per snapshot.
#[derive(Debug, Clone)]
pub struct FactIndices {
    pub achievements: CountIndex,
    pub activations: CountIndex,
    pub causes: CountIndex,
    pub education: CountIndex,
    pub media: CountIndex,
    pub results: CountIndex,
    pub ranking: CountIndex,
    pub partnerships: CountIndex,
    pub social_actions: CountIndex,
    pub activation_tags: TagSetIndex,
}

impl FactIndices {
    pub fn build(snapshot: &Snapshot, known_keys: &HashSet<ProfileId>) -> Self {
        Self {
            achievements: CountIndex::build("achievements", &snapshot.achievements, known_keys),
            activations: CountIndex::build("activations", &snapshot.activations, known_keys),
            causes: CountIndex::build("causes", &snapshot.causes, known_keys),
            education: CountIndex::build("education", &snapshot.education, known_keys),
            media: CountIndex::build("media", &snapshot.media, known_keys),
            results: CountIndex::build("results", &snapshot.results, known_keys),
            ranking: CountIndex::build("ranking", &snapshot.ranking, known_keys),
            partnerships: CountIndex::build("partnerships", &snapshot.partnerships, known_keys),
            social_actions: CountIndex::build(
                "social_actions",
                &snapshot.social_actions,
                known_keys,
            ),
            activation_tags: TagSetIndex::build(&snapshot.activations, known_keys),
        }
    }

    pub fn has_talk_mentorship(&self, key: &str, config: &ActivationTagConfig) -> bool {
        self.activation_tags.contains(key, &config.talk_mentor_id)
    }

    pub fn has_brand_event(&self, key: &str, config: &ActivationTagConfig) -> bool {
        self.activation_tags.contains_any(key, &config.brand_event_ids)
    }
}
