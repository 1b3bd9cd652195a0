//! soulscore-core: onboarding completion and commercial scoring over CSV
//! snapshot extracts.
//!
//! One run loads thirteen tabular datasets into a [`snapshot::Snapshot`],
//! builds cross-reference indices, resolves each account onto a scoring
//! track, and derives onboarding and commercial score records that the
//! [`store::ScoreStore`] upserts with conflict-safe, transactional
//! semantics. Re-running over an unchanged snapshot reproduces identical
//! record sets.

pub mod commercial;
pub mod completion;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod field;
pub mod index;
pub mod report;
pub mod resolver;
pub mod snapshot;
pub mod store;
pub mod types;
