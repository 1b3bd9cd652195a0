//! Commercial scorer tests: the five sub-scores, their clamps, and tiers.

use std::collections::HashSet;

use soulscore_core::commercial::{
    p1_performance, p2_narrative, p3_maturity, p4_activation, p5_fit, score_athlete, Tier,
};
use soulscore_core::completion::CompletionStatus;
use soulscore_core::config::ActivationTagConfig;
use soulscore_core::dataset::Row;
use soulscore_core::index::FactIndices;
use soulscore_core::snapshot::Snapshot;

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn fact_rows(id: &str, n: usize) -> Vec<Row> {
    (0..n).map(|_| row(&[("athlete_id", id)])).collect()
}

fn indices_for(snapshot: &Snapshot) -> FactIndices {
    let known: HashSet<String> = ["ath-1".to_string()].into_iter().collect();
    FactIndices::build(snapshot, &known)
}

/// P1 ladder: 0 / 10 / 18 / 25 by distinct performance tables present.
#[test]
fn p1_performance_ladder() {
    let empty = indices_for(&Snapshot::default());
    assert_eq!(p1_performance("ath-1", &empty), 0);

    let one = indices_for(&Snapshot {
        ranking: fact_rows("ath-1", 3),
        ..Default::default()
    });
    assert_eq!(p1_performance("ath-1", &one), 10, "row count is irrelevant");

    let two = indices_for(&Snapshot {
        ranking: fact_rows("ath-1", 1),
        results: fact_rows("ath-1", 1),
        ..Default::default()
    });
    assert_eq!(p1_performance("ath-1", &two), 18);

    let three = indices_for(&Snapshot {
        ranking: fact_rows("ath-1", 1),
        results: fact_rows("ath-1", 1),
        achievements: fact_rows("ath-1", 1),
        ..Default::default()
    });
    assert_eq!(p1_performance("ath-1", &three), 25);
}

/// P2 ladder: 8 for 1-2 causes, 12 for 3-5, 15 for 6+.
#[test]
fn p2_narrative_cause_ladder() {
    let profile = row(&[("id", "ath-1")]);
    for (count, expected) in [(1, 8), (2, 8), (3, 12), (5, 12), (6, 15), (12, 15)] {
        let indices = indices_for(&Snapshot {
            causes: fact_rows("ath-1", count),
            ..Default::default()
        });
        assert_eq!(
            p2_narrative(&profile, "ath-1", &indices),
            expected,
            "cause count {count}"
        );
    }
}

/// The description bonus applies only when at least one cause exists.
#[test]
fn p2_description_bonus_gated_on_causes() {
    let long_desc = "x".repeat(80);
    let profile = row(&[("id", "ath-1"), ("valores_descricao", long_desc.as_str())]);

    let none = indices_for(&Snapshot::default());
    assert_eq!(p2_narrative(&profile, "ath-1", &none), 0);

    let one = indices_for(&Snapshot {
        causes: fact_rows("ath-1", 1),
        ..Default::default()
    });
    assert_eq!(p2_narrative(&profile, "ath-1", &one), 13, "8 + 5 bonus");

    let short = row(&[("id", "ath-1"), ("valores_descricao", "short")]);
    assert_eq!(p2_narrative(&short, "ath-1", &one), 8, "bonus needs 80 chars");
}

/// P3 is gated on every must-have being filled.
#[test]
fn p3_gated_on_must_completion() {
    let indices = indices_for(&Snapshot {
        education: fact_rows("ath-1", 1),
        partnerships: fact_rows("ath-1", 1),
        ..Default::default()
    });

    assert_eq!(p3_maturity(CompletionStatus::Almost, "ath-1", &indices), 0);
    assert_eq!(
        p3_maturity(CompletionStatus::Incomplete, "ath-1", &indices),
        0
    );
    assert_eq!(
        p3_maturity(CompletionStatus::Acceptable, "ath-1", &indices),
        20,
        "10 base + 5 education + 5 partnerships"
    );
    assert_eq!(p3_maturity(CompletionStatus::Complete, "ath-1", &indices), 20);

    let bare = indices_for(&Snapshot::default());
    assert_eq!(p3_maturity(CompletionStatus::Complete, "ath-1", &bare), 10);
}

/// P4 automatic bonus: +5 talk/mentorship, +2 brand event.
#[test]
fn p4_activation_bonuses() {
    let config = ActivationTagConfig::default();
    let brand = config.brand_event_ids.iter().next().unwrap().clone();

    let talk_only = indices_for(&Snapshot {
        activations: vec![row(&[
            ("athlete_id", "ath-1"),
            ("activation_type_id", config.talk_mentor_id.as_str()),
        ])],
        ..Default::default()
    });
    assert_eq!(p4_activation("ath-1", &talk_only, &config), 5);

    let brand_only = indices_for(&Snapshot {
        activations: vec![row(&[
            ("athlete_id", "ath-1"),
            ("activation_type_id", brand.as_str()),
        ])],
        ..Default::default()
    });
    assert_eq!(p4_activation("ath-1", &brand_only, &config), 2);

    let both = indices_for(&Snapshot {
        activations: vec![
            row(&[
                ("athlete_id", "ath-1"),
                ("activation_type_id", config.talk_mentor_id.as_str()),
            ]),
            row(&[("athlete_id", "ath-1"), ("activation_type_id", brand.as_str())]),
        ],
        ..Default::default()
    });
    assert_eq!(p4_activation("ath-1", &both, &config), 7);

    let none = indices_for(&Snapshot::default());
    assert_eq!(p4_activation("ath-1", &none, &config), 0);
}

/// P5: +3 only when both city and state are filled.
#[test]
fn p5_fit_requires_city_and_state() {
    let both = row(&[("cidade", "Santos"), ("estado", "SP")]);
    assert_eq!(p5_fit(&both), 3);

    let city_only = row(&[("cidade", "Santos")]);
    assert_eq!(p5_fit(&city_only), 0);

    let neither = row(&[("bio", "x")]);
    assert_eq!(p5_fit(&neither), 0);
}

/// Tier thresholds at 90 / 75 / 60.
#[test]
fn tier_thresholds() {
    assert_eq!(Tier::from_total(100), Tier::Anchor);
    assert_eq!(Tier::from_total(90), Tier::Anchor);
    assert_eq!(Tier::from_total(89), Tier::StrongCommercial);
    assert_eq!(Tier::from_total(75), Tier::StrongCommercial);
    assert_eq!(Tier::from_total(74), Tier::PotentialCommercial);
    assert_eq!(Tier::from_total(60), Tier::PotentialCommercial);
    assert_eq!(Tier::from_total(59), Tier::NotYetCommercializable);
    assert_eq!(Tier::from_total(0), Tier::NotYetCommercializable);
}

/// A full record: sub-scores, total, tier, and the reserved manual fields.
#[test]
fn full_record_composition() {
    let config = ActivationTagConfig::default();
    let long_desc = "x".repeat(100);
    let profile = row(&[
        ("id", "ath-1"),
        ("cidade", "Santos"),
        ("estado", "SP"),
        ("valores_descricao", long_desc.as_str()),
    ]);
    let indices = indices_for(&Snapshot {
        ranking: fact_rows("ath-1", 1),
        results: fact_rows("ath-1", 1),
        achievements: fact_rows("ath-1", 2),
        causes: fact_rows("ath-1", 1),
        education: fact_rows("ath-1", 1),
        partnerships: fact_rows("ath-1", 1),
        activations: vec![row(&[
            ("athlete_id", "ath-1"),
            ("activation_type_id", config.talk_mentor_id.as_str()),
        ])],
        ..Default::default()
    });

    let record = score_athlete(
        &profile,
        "ath-1",
        "acc-1",
        CompletionStatus::Complete,
        &indices,
        &config,
    );

    assert_eq!(record.p1_performance, 25);
    assert_eq!(record.p2_narrative, 13);
    assert_eq!(record.p3_maturity, 20);
    assert_eq!(record.p4_activation, 5);
    assert_eq!(record.p5_fit, 3);
    assert_eq!(record.total_score, 66);
    assert_eq!(record.tier, Tier::PotentialCommercial);
    assert!(record.notes.is_none());
    assert!(record.updated_by.is_none());
}

/// A mid-field athlete: two performance tables, three causes with a short
/// description, full maturity, both activation tags, located.
#[test]
fn mid_field_athlete_lands_at_sixty() {
    let config = ActivationTagConfig::default();
    let brand = config.brand_event_ids.iter().next().unwrap().clone();
    let profile = row(&[
        ("id", "ath-1"),
        ("cidade", "Santos"),
        ("estado", "SP"),
        ("valores_descricao", "short"),
    ]);
    let indices = indices_for(&Snapshot {
        ranking: fact_rows("ath-1", 1),
        results: fact_rows("ath-1", 1),
        causes: fact_rows("ath-1", 3),
        education: fact_rows("ath-1", 1),
        partnerships: fact_rows("ath-1", 1),
        activations: vec![
            row(&[
                ("athlete_id", "ath-1"),
                ("activation_type_id", config.talk_mentor_id.as_str()),
            ]),
            row(&[("athlete_id", "ath-1"), ("activation_type_id", brand.as_str())]),
        ],
        ..Default::default()
    });

    let record = score_athlete(
        &profile,
        "ath-1",
        "acc-1",
        CompletionStatus::Complete,
        &indices,
        &config,
    );

    assert_eq!(record.p1_performance, 18);
    assert_eq!(record.p2_narrative, 12);
    assert_eq!(record.p3_maturity, 20);
    assert_eq!(record.p4_activation, 7);
    assert_eq!(record.p5_fit, 3);
    assert_eq!(record.total_score, 60);
    assert_eq!(record.tier, Tier::PotentialCommercial);
    assert_eq!(record.tier.as_str(), "Potential Commercial Athlete");
}

/// Every sub-score stays inside its documented range.
#[test]
fn sub_scores_within_bounds() {
    let config = ActivationTagConfig::default();
    let long_desc = "y".repeat(500);
    let profile = row(&[
        ("id", "ath-1"),
        ("cidade", "Santos"),
        ("estado", "SP"),
        ("valores_descricao", long_desc.as_str()),
    ]);
    let indices = indices_for(&Snapshot {
        ranking: fact_rows("ath-1", 50),
        results: fact_rows("ath-1", 50),
        achievements: fact_rows("ath-1", 50),
        causes: fact_rows("ath-1", 50),
        education: fact_rows("ath-1", 50),
        partnerships: fact_rows("ath-1", 50),
        ..Default::default()
    });

    let record = score_athlete(
        &profile,
        "ath-1",
        "acc-1",
        CompletionStatus::Complete,
        &indices,
        &config,
    );

    assert!(record.p1_performance <= 25);
    assert!(record.p2_narrative <= 20);
    assert!(record.p3_maturity <= 20);
    assert!(record.p4_activation <= 20);
    assert!(record.p5_fit <= 15);
    assert!((0..=100).contains(&record.total_score));
}
