//! One in-memory snapshot: all thirteen datasets, loaded before any scoring
//! begins. Scoring is a pure function of the snapshot; no step revisits
//! prior snapshots.

use std::fs;
use std::path::Path;

use crate::{
    dataset::{parse_table, DatasetKind, Row},
    error::{ScoreError, ScoreResult},
};

#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    pub accounts: Vec<Row>,
    pub roles: Vec<Row>,
    pub athletes: Vec<Row>,
    pub partners: Vec<Row>,
    pub achievements: Vec<Row>,
    pub activations: Vec<Row>,
    pub causes: Vec<Row>,
    pub education: Vec<Row>,
    pub media: Vec<Row>,
    pub partnerships: Vec<Row>,
    pub ranking: Vec<Row>,
    pub results: Vec<Row>,
    pub social_actions: Vec<Row>,
}

/// Raw dataset texts, one per logical dataset. Used by tests and by callers
/// that already hold the file contents.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnapshotTexts<'a> {
    pub accounts: &'a str,
    pub roles: &'a str,
    pub athletes: &'a str,
    pub partners: &'a str,
    pub achievements: &'a str,
    pub activations: &'a str,
    pub causes: &'a str,
    pub education: &'a str,
    pub media: &'a str,
    pub partnerships: &'a str,
    pub ranking: &'a str,
    pub results: &'a str,
    pub social_actions: &'a str,
}

impl Snapshot {
    pub fn from_texts(texts: &SnapshotTexts<'_>) -> ScoreResult<Self> {
        Ok(Self {
            accounts: parse_table("accounts", texts.accounts)?,
            roles: parse_table("account_roles", texts.roles)?,
            athletes: parse_table("athletes", texts.athletes)?,
            partners: parse_table("partners", texts.partners)?,
            achievements: parse_table("achievements", texts.achievements)?,
            activations: parse_table("activations", texts.activations)?,
            causes: parse_table("causes", texts.causes)?,
            education: parse_table("education", texts.education)?,
            media: parse_table("media", texts.media)?,
            partnerships: parse_table("partnerships", texts.partnerships)?,
            ranking: parse_table("ranking", texts.ranking)?,
            results: parse_table("results", texts.results)?,
            social_actions: parse_table("social_actions", texts.social_actions)?,
        })
    }

    /// Load a snapshot from a directory of CSV files.
    ///
    /// Every dataset is required: if none of its candidate file names exists
    /// the whole run aborts before anything is scored or written.
    pub fn load_dir(dir: &Path) -> ScoreResult<Self> {
        let mut loaded: Vec<Vec<Row>> = Vec::with_capacity(DatasetKind::ALL.len());
        for kind in DatasetKind::ALL {
            let path = kind
                .file_candidates()
                .iter()
                .map(|f| dir.join(f))
                .find(|p| p.is_file())
                .ok_or(ScoreError::MissingDataset { name: kind.name() })?;
            let text = fs::read_to_string(&path)?;
            let rows = parse_table(kind.name(), &text)?;
            log::info!("{}: {} rows from {}", kind.name(), rows.len(), path.display());
            loaded.push(rows);
        }

        let mut it = loaded.into_iter();
        // Same order as DatasetKind::ALL.
        Ok(Self {
            accounts: it.next().unwrap_or_default(),
            roles: it.next().unwrap_or_default(),
            athletes: it.next().unwrap_or_default(),
            partners: it.next().unwrap_or_default(),
            achievements: it.next().unwrap_or_default(),
            activations: it.next().unwrap_or_default(),
            causes: it.next().unwrap_or_default(),
            education: it.next().unwrap_or_default(),
            media: it.next().unwrap_or_default(),
            partnerships: it.next().unwrap_or_default(),
            ranking: it.next().unwrap_or_default(),
            results: it.next().unwrap_or_default(),
            social_actions: it.next().unwrap_or_default(),
        })
    }
}
