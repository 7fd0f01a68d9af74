use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::{MAX_PRIORITIES, MIN_PRIORITIES};
use crate::error::{DrillError, Result};

/// Who is studying and which languages they favor.
///
/// Read-only for the scheduler; only language selection looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
  pub name: String,
  /// Reference language the learner answers in
  pub native: String,
  /// Ordered set of favored language codes
  pub priorities: Vec<String>,
}

impl LearnerProfile {
  pub fn new(name: &str, native: &str, priorities: &[&str]) -> Self {
    Self {
      name: name.to_string(),
      native: native.to_string(),
      priorities: priorities.iter().map(|p| p.to_string()).collect(),
    }
  }

  pub fn is_priority(&self, code: &str) -> bool {
    self.priorities.iter().any(|p| p == code)
  }

  /// Onboarding rules: a name, and 3 to 5 distinct priority languages.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(DrillError::InvalidProfile("name is empty".to_string()));
    }
    let count = self.priorities.len();
    if !(MIN_PRIORITIES..=MAX_PRIORITIES).contains(&count) {
      return Err(DrillError::InvalidProfile(format!(
        "expected {}-{} priority languages, got {}",
        MIN_PRIORITIES, MAX_PRIORITIES, count
      )));
    }
    let distinct: HashSet<&str> = self.priorities.iter().map(String::as_str).collect();
    if distinct.len() != count {
      return Err(DrillError::InvalidProfile("priority languages repeat".to_string()));
    }
    Ok(())
  }
}
