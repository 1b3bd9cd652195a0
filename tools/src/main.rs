//! score-runner: headless import-and-score runner.
//!
//! Usage:
//!   score-runner --data-dir ./data/export --db scores.db
//!   score-runner --data-dir ./data/export            (in-memory, summary only)

use std::collections::HashMap;
use std::env;
use std::path::Path;

use anyhow::Result;
use soulscore_core::{
    config::ActivationTagConfig,
    engine::ScoreEngine,
    report,
    snapshot::Snapshot,
    store::{ImportRunRecord, ScoreStore},
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let tags_dir = flag_value(&args, "--tags").unwrap_or(data_dir);

    println!("score-runner");
    println!("  data_dir: {data_dir}");
    println!("  db:       {db}");
    println!();

    let snapshot = Snapshot::load_dir(Path::new(data_dir))?;
    let config = ActivationTagConfig::load(tags_dir)?;

    let store = ScoreStore::open(db)?;
    store.migrate()?;

    let engine = ScoreEngine::new(config);
    let output = engine.run(&snapshot);
    engine.persist(&output, &store)?;

    let run = ImportRunRecord::for_output(&output, snapshot.accounts.len());
    store.insert_import_run(&run)?;
    log::info!("import run {} persisted to {db}", run.run_id);

    print_summary(&store, &run)?;
    Ok(())
}

fn print_summary(store: &ScoreStore, run: &ImportRunRecord) -> Result<()> {
    println!("=== IMPORT SUMMARY ===");
    println!("  run_id:      {}", run.run_id);
    println!("  started_at:  {}", run.started_at);
    println!("  accounts:    {}", run.account_count);
    println!("  onboarding:  {}", store.onboarding_count()?);
    println!("  commercial:  {}", store.commercial_score_count()?);

    println!();
    println!("=== COMPLETION STATUS ===");
    for (status, count) in store.status_breakdown()? {
        println!("  {status:<12} {count}");
    }

    println!();
    println!("=== COMMERCIAL TIERS ===");
    let tiers = store.tier_breakdown()?;
    if tiers.is_empty() {
        println!("  (no athlete profiles scored)");
    } else {
        for (tier, count) in tiers {
            println!("  {tier:<32} {count}");
        }
    }

    println!();
    println!("=== TOP MISSING MUST-HAVES ===");
    let mut counts: HashMap<String, i64> = HashMap::new();
    for row in store.all_onboarding()? {
        let labels: Vec<&str> = row.missing_fields.iter().map(String::as_str).collect();
        let (must, _nice) = report::split_missing(labels.iter().copied());
        for field in must {
            *counts.entry(field.to_string()).or_default() += 1;
        }
    }
    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    if ranked.is_empty() {
        println!("  (nothing missing)");
    } else {
        for (field, count) in ranked.iter().take(10) {
            println!("  {field:<20} {count}");
        }
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
