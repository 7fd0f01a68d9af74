//! Per-learner review history keyed by language and phrase index.
//!
//! Entries are created on a phrase's first answer and never removed; the
//! scheduler only reads slots and writes back whole states.

pub mod store;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{is_due, ReviewSlot, ReviewState};

pub use store::{JsonFileStore, MemoryStore, ProgressStore};

/// Review states of one language, by phrase index
pub type LanguageProgress = BTreeMap<usize, ReviewState>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgressKey {
  pub language: String,
  pub phrase_index: usize,
}

impl ProgressKey {
  pub fn new(language: &str, phrase_index: usize) -> Self {
    Self {
      language: language.to_string(),
      phrase_index,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
  languages: BTreeMap<String, LanguageProgress>,
}

impl Progress {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn slot(&self, key: &ProgressKey) -> ReviewSlot {
    self
      .languages
      .get(&key.language)
      .and_then(|lang| lang.get(&key.phrase_index))
      .copied()
      .into()
  }

  pub fn language_slice(&self, language: &str) -> Option<&LanguageProgress> {
    self.languages.get(language)
  }

  /// Store a state, creating the language's slice on demand
  pub fn put(&mut self, key: ProgressKey, state: ReviewState) {
    self
      .languages
      .entry(key.language)
      .or_default()
      .insert(key.phrase_index, state);
  }

  /// Number of phrases with a recorded state, across all languages
  pub fn len(&self) -> usize {
    self.languages.values().map(BTreeMap::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Phrases of `language` due on `today`, counting never-answered ones
  pub fn due_count(&self, language: &str, phrase_count: usize, today: NaiveDate) -> usize {
    let slice = self.language_slice(language);
    (0..phrase_count)
      .filter(|i| is_due(slice.and_then(|s| s.get(i)), today))
      .count()
  }

  /// Move every `last_seen` back by `days`, as if that many days had passed.
  ///
  /// Administrative helper for trying out the schedule; returns the number of
  /// states touched.
  pub fn shift_days(&mut self, days: u64) -> usize {
    let mut count = 0;
    for state in self.languages.values_mut().flat_map(BTreeMap::values_mut) {
      state.last_seen = state
        .last_seen
        .checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN);
      count += 1;
    }
    count
  }
}
