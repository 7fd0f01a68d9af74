//! Weighted language selection and due-first candidate ranking.
//!
//! Priority languages are favored 3:1 over the rest of the catalog, but every
//! cataloged language keeps a nonzero chance of being picked.

use rand::Rng;

use crate::config::{BASE_WEIGHT, PRIORITY_WEIGHT};
use crate::domain::{Catalog, LearnerProfile, PhraseCatalogEntry};

/// A language with its selection weight
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageWeight<'a> {
  pub entry: &'a PhraseCatalogEntry,
  pub weight: u32,
}

/// Weight every cataloged language for this learner, in catalog order
pub fn language_weights<'a>(profile: &LearnerProfile, catalog: &'a Catalog) -> Vec<LanguageWeight<'a>> {
  catalog
    .languages()
    .iter()
    .map(|entry| LanguageWeight {
      entry,
      weight: if profile.is_priority(&entry.code) {
        PRIORITY_WEIGHT
      } else {
        BASE_WEIGHT
      },
    })
    .collect()
}

/// Draw one language with probability proportional to its weight.
///
/// Equivalent to drawing uniformly from a pool where each language appears
/// `weight` times, using a binary search over cumulative weights instead.
pub fn weighted_random_select<'a, R: Rng + ?Sized>(
  weights: &[LanguageWeight<'a>],
  rng: &mut R,
) -> Option<&'a PhraseCatalogEntry> {
  let mut cumulative = Vec::with_capacity(weights.len());
  let mut total = 0u64;
  for w in weights {
    total += u64::from(w.weight);
    cumulative.push(total);
  }

  if total == 0 {
    return None;
  }

  let target = rng.random_range(0..total);
  // First language whose cumulative weight exceeds the draw
  let idx = cumulative.partition_point(|&c| c <= target);
  weights.get(idx).map(|w| w.entry)
}

/// Pick the language to study today.
pub fn choose_language<'a, R: Rng + ?Sized>(
  profile: &LearnerProfile,
  catalog: &'a Catalog,
  rng: &mut R,
) -> Option<&'a PhraseCatalogEntry> {
  for code in profile.priorities.iter().filter(|p| !catalog.contains(p)) {
    tracing::debug!("Priority language {} is not in the catalog", code);
  }

  let weights = language_weights(profile, catalog);
  let chosen = weighted_random_select(&weights, rng);
  if let Some(entry) = chosen {
    tracing::debug!(
      "Chose language {} (priority: {})",
      entry.code,
      profile.is_priority(&entry.code)
    );
  }
  chosen
}

/// Order phrase indices so due phrases come first.
///
/// Stable: indices keep their catalog order within the due and not-due groups.
pub fn rank_candidates(phrase_count: usize, is_due: impl Fn(usize) -> bool) -> Vec<usize> {
  let (mut due, not_due): (Vec<usize>, Vec<usize>) = (0..phrase_count).partition(|&i| is_due(i));
  tracing::debug!("{} of {} phrases due", due.len(), phrase_count);
  due.extend(not_due);
  due
}
