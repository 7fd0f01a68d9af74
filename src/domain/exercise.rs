use serde::{Deserialize, Serialize};

/// Which way a phrase is tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
  ToNative,   // target phrase → reference translation
  FromNative, // reference translation → target phrase
}

impl Direction {
  pub const BOTH: [Direction; 2] = [Direction::ToNative, Direction::FromNative];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::ToNative => "to_native",
      Self::FromNative => "from_native",
    }
  }
}

/// A single prompt shown during a session. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
  pub id: String,
  pub language: String,
  pub phrase_index: usize,
  pub prompt: String,
  pub expected_answer: String,
  pub direction: Direction,
}

impl Exercise {
  /// Build the exercise for one direction of an aligned phrase pair.
  ///
  /// `ordinal` keeps ids unique when the same phrase and direction repeat.
  pub fn for_phrase(
    language: &str,
    phrase_index: usize,
    token: &str,
    translation: &str,
    direction: Direction,
    ordinal: usize,
  ) -> Self {
    let (prompt, expected_answer) = match direction {
      Direction::ToNative => (token, translation),
      Direction::FromNative => (translation, token),
    };
    Self {
      id: format!("{}-{}-{}-{}", language, phrase_index, direction.as_str(), ordinal),
      language: language.to_string(),
      phrase_index,
      prompt: prompt.to_string(),
      expected_answer: expected_answer.to_string(),
      direction,
    }
  }
}
