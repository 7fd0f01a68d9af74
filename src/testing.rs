//! Fixtures shared by unit and integration tests.
//!
//! Compiled for unit tests and, outside them, only with the `testing` feature.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{Catalog, LearnerProfile, PhraseCatalogEntry};

/// Three languages with a handful of real phrases each
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        PhraseCatalogEntry::new(
            "es",
            "Spanish",
            &[
                ("hola", "hello"),
                ("gracias", "thank you"),
                ("buenos días", "good morning"),
                ("¿dónde está el baño?", "where is the bathroom?"),
            ],
        ),
        PhraseCatalogEntry::new(
            "fr",
            "French",
            &[("bonjour", "hello"), ("merci", "thank you"), ("au revoir", "goodbye")],
        ),
        PhraseCatalogEntry::new(
            "de",
            "German",
            &[("hallo", "hello"), ("danke", "thank you"), ("tschüss", "bye")],
        ),
    ])
    .expect("sample catalog is valid")
}

/// Catalog with `count` generated phrases per language code
pub fn catalog_with(languages: &[(&str, usize)]) -> Catalog {
    let entries = languages
        .iter()
        .map(|(code, count)| PhraseCatalogEntry {
            code: code.to_string(),
            name: code.to_uppercase(),
            tokens: (0..*count).map(|i| format!("{} phrase {}", code, i)).collect(),
            translations: (0..*count).map(|i| format!("meaning {}", i)).collect(),
        })
        .collect();
    Catalog::new(entries).expect("generated catalog is valid")
}

/// Learner favoring Spanish, Italian and Portuguese
pub fn sample_profile() -> LearnerProfile {
    LearnerProfile::new("Sam", "en", &["es", "it", "pt"])
}

pub fn day_one() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
