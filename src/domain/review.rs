use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{INITIAL_EASE, MIN_INTERVAL_DAYS};

/// Review schedule of one phrase in one language.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
  /// Days until the next review, counted from `last_seen`
  pub interval: u32,
  pub last_seen: NaiveDate,
  /// Ease factor
  pub ef: f64,
}

impl ReviewState {
  /// State recorded on a phrase's first answer
  pub fn first_seen(today: NaiveDate) -> Self {
    Self {
      interval: MIN_INTERVAL_DAYS,
      last_seen: today,
      ef: INITIAL_EASE,
    }
  }

  /// Date the phrase becomes due again, or `None` if that lies past the
  /// calendar's range. A zero interval counts as one day.
  pub fn checked_next_due(&self) -> Option<NaiveDate> {
    let days = self.interval.max(MIN_INTERVAL_DAYS);
    self.last_seen.checked_add_days(Days::new(u64::from(days)))
  }

  /// Date the phrase becomes due again, saturating at `NaiveDate::MAX`
  pub fn next_due(&self) -> NaiveDate {
    self.checked_next_due().unwrap_or(NaiveDate::MAX)
  }

  /// A review scheduled past the end of the calendar never comes due.
  pub fn is_due(&self, today: NaiveDate) -> bool {
    self.checked_next_due().is_some_and(|due| today >= due)
  }
}

/// Stored review state of a phrase, or the marker for a phrase never answered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReviewSlot {
  Unseen,
  Seen(ReviewState),
}

impl ReviewSlot {
  /// Unseen phrases are always due.
  pub fn is_due(&self, today: NaiveDate) -> bool {
    match self {
      Self::Unseen => true,
      Self::Seen(state) => state.is_due(today),
    }
  }

  pub fn state(&self) -> Option<&ReviewState> {
    match self {
      Self::Unseen => None,
      Self::Seen(state) => Some(state),
    }
  }
}

impl From<Option<ReviewState>> for ReviewSlot {
  fn from(state: Option<ReviewState>) -> Self {
    state.map_or(Self::Unseen, Self::Seen)
  }
}

/// Due check over an optional state, for callers holding a plain lookup result.
pub fn is_due(state: Option<&ReviewState>, today: NaiveDate) -> bool {
  state.is_none_or(|s| s.is_due(today))
}
