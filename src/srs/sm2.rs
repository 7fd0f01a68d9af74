use chrono::NaiveDate;

use crate::config::{EASE_BONUS, EASE_PENALTY, MAX_INTERVAL_DAYS, MIN_EASE, MIN_INTERVAL_DAYS};
use crate::domain::{ReviewSlot, ReviewState};

/// Compute the next review state after one pass/fail answer.
///
/// The first answer on an unseen phrase always schedules a one-day review at
/// the initial ease, whether or not it was correct. After that:
/// - correct: ease grows by 0.1, interval multiplies by the new ease (capped
///   at `MAX_INTERVAL_DAYS`)
/// - wrong: ease drops by 0.2 (floored at 1.3), interval resets to one day
pub fn advance(slot: ReviewSlot, correct: bool, today: NaiveDate) -> ReviewState {
  let state = match slot {
    ReviewSlot::Unseen => return ReviewState::first_seen(today),
    ReviewSlot::Seen(state) => state,
  };

  if correct {
    let ef = (state.ef + EASE_BONUS).max(MIN_EASE);
    let grown = (f64::from(state.interval) * ef).round() as u32;
    ReviewState {
      interval: grown.clamp(MIN_INTERVAL_DAYS, MAX_INTERVAL_DAYS),
      last_seen: today,
      ef,
    }
  } else {
    ReviewState {
      interval: MIN_INTERVAL_DAYS,
      last_seen: today,
      ef: (state.ef - EASE_PENALTY).max(MIN_EASE),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::INITIAL_EASE;
  use chrono::Days;
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
  }

  fn seen(interval: u32, ef: f64) -> ReviewSlot {
    ReviewSlot::Seen(ReviewState {
      interval,
      last_seen: today() - Days::new(30),
      ef,
    })
  }

  #[test]
  fn test_cold_start_correct() {
    let result = advance(ReviewSlot::Unseen, true, today());
    assert_eq!(result.interval, 1);
    assert_eq!(result.last_seen, today());
    assert!((result.ef - INITIAL_EASE).abs() < f64::EPSILON);
  }

  #[test]
  fn test_cold_start_ignores_outcome() {
    assert_eq!(
      advance(ReviewSlot::Unseen, true, today()),
      advance(ReviewSlot::Unseen, false, today())
    );
  }

  #[test]
  fn test_correct_grows_interval() {
    let result = advance(seen(1, 2.5), true, today());
    assert!((result.ef - 2.6).abs() < 1e-9);
    // round(1 * 2.6) = 3
    assert_eq!(result.interval, 3);
    assert_eq!(result.last_seen, today());
  }

  #[test]
  fn test_correct_compounds() {
    let second = advance(seen(3, 2.6), true, today());
    // round(3 * 2.7) = 8
    assert_eq!(second.interval, 8);
    let third = advance(ReviewSlot::Seen(second), true, today());
    // round(8 * 2.8) = 22
    assert_eq!(third.interval, 22);
  }

  #[test]
  fn test_zero_interval_floors_to_one() {
    let result = advance(seen(0, 2.5), true, today());
    assert_eq!(result.interval, 1);
  }

  #[test]
  fn test_failure_resets_interval() {
    let result = advance(seen(40, 2.5), false, today());
    assert_eq!(result.interval, 1);
    assert!((result.ef - 2.3).abs() < 1e-9);
    assert_eq!(result.last_seen, today());
  }

  #[test]
  fn test_ease_factor_floor() {
    let mut slot = seen(10, 2.5);
    for _ in 0..20 {
      let next = advance(slot, false, today());
      assert!(next.ef >= MIN_EASE);
      slot = ReviewSlot::Seen(next);
    }
    let ef = slot.state().unwrap().ef;
    assert!((ef - MIN_EASE).abs() < 1e-9);
  }

  #[test]
  fn test_below_floor_ease_recovers_to_floor() {
    // A hand-edited store could hold an ease below the floor
    let result = advance(seen(2, 1.0), true, today());
    assert!((result.ef - MIN_EASE).abs() < 1e-9);
  }

  #[test]
  fn test_huge_interval_is_capped_and_not_due_same_day() {
    let result = advance(seen(u32::MAX, 2.5), true, today());
    assert_eq!(result.interval, MAX_INTERVAL_DAYS);
    assert!(!result.is_due(today()));
    assert!(result.is_due(result.next_due()));
  }

  #[test]
  fn test_cap_holds_over_long_streak() {
    let mut slot = seen(1, 2.5);
    for _ in 0..60 {
      let next = advance(slot, true, today());
      assert!(next.interval <= MAX_INTERVAL_DAYS);
      assert!(!next.is_due(today()));
      slot = ReviewSlot::Seen(next);
    }
    assert_eq!(slot.state().unwrap().interval, MAX_INTERVAL_DAYS);
  }

  #[test]
  fn test_random_sequences_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut slot = ReviewSlot::Unseen;
    let mut day = today();
    for _ in 0..500 {
      let next = advance(slot, rng.random_bool(0.7), day);
      assert!(next.ef >= MIN_EASE);
      assert!(next.interval >= 1);
      assert!(!next.is_due(day));
      day = next.next_due();
      assert!(next.is_due(day));
      slot = ReviewSlot::Seen(next);
    }
  }
}
