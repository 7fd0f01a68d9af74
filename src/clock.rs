//! Source of "today" for the scheduler.
//!
//! All scheduling happens at calendar-day granularity, so the clock hands out
//! `NaiveDate` and never a timestamp.

use chrono::{Days, Local, NaiveDate};
use std::cell::Cell;

pub trait Clock {
  fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine running the session
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

/// Clock pinned to a date, for tests and replays
#[derive(Debug, Clone)]
pub struct FixedClock {
  date: Cell<NaiveDate>,
}

impl FixedClock {
  pub fn new(date: NaiveDate) -> Self {
    Self { date: Cell::new(date) }
  }

  pub fn advance_days(&self, days: u64) {
    let next = self.date.get() + Days::new(days);
    self.date.set(next);
  }
}

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    self.date.get()
  }
}
