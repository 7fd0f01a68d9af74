//! Study sessions: picking the day's language, building its exercise list
//! and recording answers.
//!
//! A [`StudyContext`] carries the catalog, the learner and the clock, so
//! independent sessions never share state. Progress is passed in per call.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock::{Clock, SystemClock};
use crate::domain::{is_due, Catalog, Direction, Exercise, LearnerProfile, PhraseCatalogEntry, ReviewState};
use crate::error::{DrillError, Result};
use crate::progress::{Progress, ProgressKey};
use crate::srs::{self, rank_candidates};
use crate::validation::answers_match;

/// Exercises for one sitting in one language
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SessionPlan {
  pub language: String,
  pub exercises: Vec<Exercise>,
}

/// Result of checking one answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerOutcome {
  pub correct: bool,
  /// State now stored for the exercise's phrase
  pub state: ReviewState,
}

/// Running tally for the current sitting
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStats {
  pub answered: u32,
  pub correct: u32,
}

impl SessionStats {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, outcome: &AnswerOutcome) {
    self.answered += 1;
    if outcome.correct {
      self.correct += 1;
    }
  }

  pub fn accuracy(&self) -> Option<f64> {
    (self.answered > 0).then(|| f64::from(self.correct) / f64::from(self.answered))
  }
}

pub struct StudyContext<C: Clock = SystemClock> {
  catalog: Catalog,
  profile: LearnerProfile,
  clock: C,
}

impl StudyContext<SystemClock> {
  pub fn new(catalog: Catalog, profile: LearnerProfile) -> Self {
    Self::with_clock(catalog, profile, SystemClock)
  }
}

impl<C: Clock> StudyContext<C> {
  pub fn with_clock(catalog: Catalog, profile: LearnerProfile, clock: C) -> Self {
    Self {
      catalog,
      profile,
      clock,
    }
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn profile(&self) -> &LearnerProfile {
    &self.profile
  }

  pub fn clock(&self) -> &C {
    &self.clock
  }

  /// Weighted pick of today's language; priorities count three times.
  pub fn choose_language<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&PhraseCatalogEntry> {
    srs::choose_language(&self.profile, &self.catalog, rng).ok_or(DrillError::EmptyCatalog)
  }

  /// Build at least `min_count` exercises for `language`, due phrases first.
  ///
  /// Each ranked phrase contributes a to-native then a from-native exercise
  /// until `min_count` is reached, possibly stopping mid-pair. If the language
  /// runs out of phrases first, random phrases and directions are drawn with
  /// replacement to fill the gap. The result is shuffled.
  pub fn generate_exercises<R: Rng + ?Sized>(
    &self,
    language: &str,
    progress: &Progress,
    min_count: usize,
    rng: &mut R,
  ) -> Result<Vec<Exercise>> {
    let entry = self.catalog.get(language)?;
    entry.validate()?;

    let today = self.clock.today();
    let slice = progress.language_slice(language);
    let ranked = rank_candidates(entry.len(), |i| is_due(slice.and_then(|s| s.get(&i)), today));

    let mut exercises = Vec::with_capacity(min_count);

    'fill: for index in ranked {
      for direction in Direction::BOTH {
        if exercises.len() >= min_count {
          break 'fill;
        }
        exercises.push(build_exercise(entry, index, direction, exercises.len())?);
      }
    }

    let primary = exercises.len();
    while exercises.len() < min_count {
      let index = rng.random_range(0..entry.len());
      let direction = Direction::BOTH[rng.random_range(0..Direction::BOTH.len())];
      exercises.push(build_exercise(entry, index, direction, exercises.len())?);
    }
    if exercises.len() > primary {
      tracing::debug!(
        "Padded {} with {} random exercises",
        language,
        exercises.len() - primary
      );
    }

    exercises.shuffle(rng);
    Ok(exercises)
  }

  /// Choose today's language and build its exercise list.
  pub fn plan<R: Rng + ?Sized>(
    &self,
    progress: &Progress,
    min_count: usize,
    rng: &mut R,
  ) -> Result<SessionPlan> {
    let language = self.choose_language(rng)?.code.clone();
    let exercises = self.generate_exercises(&language, progress, min_count, rng)?;
    let entry = self.catalog.get(&language)?;
    tracing::info!(
      "Session for {}: {} exercises, {} of {} phrases due",
      language,
      exercises.len(),
      progress.due_count(&language, entry.len(), self.clock.today()),
      entry.len()
    );
    Ok(SessionPlan {
      language,
      exercises,
    })
  }

  /// Check an answer and reschedule the exercise's phrase.
  ///
  /// The phrase is rescheduled whether or not the answer was right. Nothing is
  /// written if the exercise does not match the catalog.
  pub fn record_answer(
    &self,
    exercise: &Exercise,
    user_answer: &str,
    progress: &mut Progress,
  ) -> Result<AnswerOutcome> {
    let entry = self.catalog.get(&exercise.language)?;
    entry.phrase(exercise.phrase_index)?;

    let correct = answers_match(user_answer, &exercise.expected_answer);
    let key = ProgressKey::new(&exercise.language, exercise.phrase_index);
    let state = srs::advance(progress.slot(&key), correct, self.clock.today());
    progress.put(key, state);

    tracing::debug!(
      "Answer for {} was {}; next review in {} day(s)",
      exercise.id,
      if correct { "correct" } else { "wrong" },
      state.interval
    );
    Ok(AnswerOutcome { correct, state })
  }
}

fn build_exercise(
  entry: &PhraseCatalogEntry,
  index: usize,
  direction: Direction,
  ordinal: usize,
) -> Result<Exercise> {
  let (token, translation) = entry.phrase(index)?;
  Ok(Exercise::for_phrase(&entry.code, index, token, translation, direction, ordinal))
}
