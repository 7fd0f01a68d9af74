//! End-to-end scheduling scenarios through the public API.

use std::collections::HashMap;

use chrono::Days;
use phrase_drill::clock::{Clock, FixedClock};
use phrase_drill::config::MIN_EASE;
use phrase_drill::domain::{Catalog, LearnerProfile, PhraseCatalogEntry};
use phrase_drill::progress::{JsonFileStore, MemoryStore, Progress, ProgressKey, ProgressStore};
use phrase_drill::session::StudyContext;
use phrase_drill::testing;
use phrase_drill::DrillError;
use rand::Rng;
use tempfile::TempDir;

fn two_language_context() -> StudyContext<FixedClock> {
    StudyContext::with_clock(
        testing::catalog_with(&[("es", 3), ("fr", 3)]),
        LearnerProfile::new("Ana", "en", &["es", "it", "pt"]),
        FixedClock::new(testing::day_one()),
    )
}

#[test]
fn fifty_sessions_cover_non_priority_language() {
    let ctx = two_language_context();
    let mut rng = testing::seeded_rng(2024);
    let mut progress = Progress::new();
    let mut chosen: HashMap<String, usize> = HashMap::new();

    for _ in 0..50 {
        let plan = ctx.plan(&progress, 10, &mut rng).unwrap();
        *chosen.entry(plan.language.clone()).or_default() += 1;

        assert!(plan.exercises.len() >= 10);
        let phrase_count = ctx.catalog().get(&plan.language).unwrap().len();
        for exercise in &plan.exercises {
            assert!(exercise.phrase_index < phrase_count);
            let answer = if rng.random_bool(0.6) {
                exercise.expected_answer.clone()
            } else {
                "no idea".to_string()
            };
            ctx.record_answer(exercise, &answer, &mut progress).unwrap();
        }
        ctx.clock().advance_days(1);
    }

    assert!(chosen.get("fr").copied().unwrap_or(0) >= 1);
    assert!(chosen.get("es").copied().unwrap_or(0) > chosen.get("fr").copied().unwrap_or(0));
}

#[test]
fn four_phrase_language_pads_to_ten() {
    let ctx = StudyContext::with_clock(
        testing::catalog_with(&[("es", 4)]),
        testing::sample_profile(),
        FixedClock::new(testing::day_one()),
    );
    let mut rng = testing::seeded_rng(9);

    for _ in 0..25 {
        let exercises = ctx
            .generate_exercises("es", &Progress::new(), 10, &mut rng)
            .unwrap();
        assert_eq!(exercises.len(), 10);

        let mut per_phrase = [0usize; 4];
        for exercise in &exercises {
            per_phrase[exercise.phrase_index] += 1;
        }
        // Every phrase contributes both directions before padding kicks in
        assert!(per_phrase.iter().all(|&n| n >= 2));
    }
}

#[test]
fn ease_never_drops_below_floor_over_a_year() {
    let ctx = StudyContext::with_clock(
        testing::catalog_with(&[("es", 1)]),
        testing::sample_profile(),
        FixedClock::new(testing::day_one()),
    );
    let mut progress = Progress::new();
    let mut rng = testing::seeded_rng(17);

    for _ in 0..365 {
        let exercises = ctx.generate_exercises("es", &progress, 2, &mut rng).unwrap();
        for exercise in &exercises {
            let outcome = ctx.record_answer(exercise, "wrong", &mut progress).unwrap();
            assert!(outcome.state.ef >= MIN_EASE);
            assert_eq!(outcome.state.interval, 1);
        }
        ctx.clock().advance_days(1);
    }

    let state = progress.slot(&ProgressKey::new("es", 0));
    assert!((state.state().unwrap().ef - MIN_EASE).abs() < 1e-9);
}

#[test]
fn correct_answers_push_review_out() {
    let ctx = StudyContext::with_clock(
        testing::catalog_with(&[("es", 2)]),
        testing::sample_profile(),
        FixedClock::new(testing::day_one()),
    );
    let mut progress = Progress::new();
    let mut rng = testing::seeded_rng(3);

    // Day one: both phrases unseen, answer everything correctly
    for exercise in ctx.generate_exercises("es", &progress, 4, &mut rng).unwrap() {
        ctx.record_answer(&exercise, &exercise.expected_answer, &mut progress).unwrap();
    }
    assert_eq!(progress.due_count("es", 2, ctx.clock().today()), 0);

    // Each phrase was answered twice: cold start (1 day) then round(1 * 2.6) = 3 days
    let state = progress.slot(&ProgressKey::new("es", 0)).state().copied().unwrap();
    assert_eq!(state.interval, 3);

    ctx.clock().advance_days(2);
    assert_eq!(progress.due_count("es", 2, ctx.clock().today()), 0);
    ctx.clock().advance_days(1);
    assert_eq!(progress.due_count("es", 2, ctx.clock().today()), 2);
}

#[test]
fn progress_survives_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("progress.json"));
    let ctx = two_language_context();
    let mut rng = testing::seeded_rng(5);

    let mut progress = store.load().unwrap();
    let plan = ctx.plan(&progress, 10, &mut rng).unwrap();
    for exercise in &plan.exercises {
        ctx.record_answer(exercise, &exercise.expected_answer, &mut progress).unwrap();
    }
    store.save(&progress).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, progress);
    assert_eq!(reloaded.len(), 3);
}

#[test]
fn shifting_days_makes_reviewed_phrases_due() {
    let ctx = two_language_context();
    let store = MemoryStore::default();
    let mut progress = store.load().unwrap();
    let today = ctx.clock().today();

    let exercises = ctx
        .generate_exercises("fr", &progress, 6, &mut testing::seeded_rng(8))
        .unwrap();
    for exercise in &exercises {
        ctx.record_answer(exercise, "?", &mut progress).unwrap();
    }
    assert_eq!(progress.due_count("fr", 3, today), 0);

    progress.shift_days(1);
    store.save(&progress).unwrap();
    let progress = store.load().unwrap();
    assert_eq!(progress.due_count("fr", 3, today), 3);
    let state = progress.slot(&ProgressKey::new("fr", 1)).state().copied().unwrap();
    assert_eq!(state.last_seen, today - Days::new(1));
}

#[test]
fn malformed_catalogs_fail_fast() {
    let mismatched = PhraseCatalogEntry {
        code: "es".into(),
        name: "Spanish".into(),
        tokens: vec!["hola".into(), "adiós".into()],
        translations: vec!["hello".into()],
    };
    assert!(matches!(
        Catalog::new(vec![mismatched]),
        Err(DrillError::MismatchedLengths { .. })
    ));
    assert!(matches!(Catalog::from_json("[]"), Err(DrillError::EmptyCatalog)));
    assert!(matches!(Catalog::from_json("{"), Err(DrillError::Json(_))));
}
