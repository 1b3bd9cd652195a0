//! Shared primitive types used across the entire engine.

/// An account identifier (`profiles.id` in the source extracts).
pub type AccountId = String;

/// An athlete profile identifier — the foreign key every fact table carries.
pub type ProfileId = String;

/// An activation type identifier.
pub type TagId = String;

/// The canonical import-run identifier.
pub type RunId = String;
