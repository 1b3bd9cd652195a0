//! Activation tag configuration.
//!
//! The scorers never embed raw activation type identifiers: the mapping from
//! identifier to semantic category (talk/mentorship, brand/presence event)
//! is configuration data, loadable from the data directory and injected into
//! the scoring pass.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::TagId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationTagConfig {
    /// "Palestras e Mentorias" — one id covers both talk and mentoring.
    pub talk_mentor_id: TagId,
    /// Brand presence activations: in-person events, photo sessions,
    /// content creation, digital/advertising campaigns, workshops.
    pub brand_event_ids: BTreeSet<TagId>,
}

impl Default for ActivationTagConfig {
    fn default() -> Self {
        Self {
            talk_mentor_id: "ed814423-9e20-4184-880c-f45be1383c40".into(),
            brand_event_ids: [
                "ef3f5b58-56a3-40bf-bd8c-e828d5507551",
                "17d496f1-c463-4521-af3b-9cec0b4376cf",
                "32cf2527-2e88-4178-a22e-a148c685a9d9",
                "5d464c2d-224a-43e1-9e06-9d9520addf6a",
                "75231237-6474-4386-8756-9f6184865dfb",
                "a3ae4e4b-1b6a-4b1e-bd4b-b3bb70e03eba",
                "fe313495-64b6-405a-a070-f8050f292c62",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl ActivationTagConfig {
    /// Load `activation_tags.json` from the data directory. Falls back to
    /// the compiled-in production identifiers when the file is absent.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = Path::new(data_dir).join("activation_tags.json");
        if !path.is_file() {
            log::info!(
                "no activation tag config at {}; using built-in identifiers",
                path.display()
            );
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }
}
