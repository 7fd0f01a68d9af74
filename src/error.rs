//! Error type shared by the scheduler core and its collaborators.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
  #[error("catalog contains no languages")]
  EmptyCatalog,

  #[error("language '{0}' has no phrases")]
  EmptyLanguage(String),

  #[error("language '{code}' has {tokens} tokens but {translations} translations")]
  MismatchedLengths {
    code: String,
    tokens: usize,
    translations: usize,
  },

  #[error("language '{0}' appears more than once in the catalog")]
  DuplicateLanguage(String),

  #[error("unknown language: {0}")]
  UnknownLanguage(String),

  #[error("phrase index {index} out of range for '{code}' ({len} phrases)")]
  PhraseOutOfRange {
    code: String,
    index: usize,
    len: usize,
  },

  #[error("invalid learner profile: {0}")]
  InvalidProfile(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("configuration error: {0}")]
  Config(String),
}

impl DrillError {
  /// Returns a user-facing message without exposing filesystem details.
  pub fn user_message(&self) -> &str {
    match self {
      Self::EmptyCatalog | Self::EmptyLanguage(_) => "No phrases are available to study",
      Self::MismatchedLengths { .. } | Self::DuplicateLanguage(_) => "The phrase catalog is malformed",
      Self::UnknownLanguage(_) => "That language is not in the catalog",
      Self::PhraseOutOfRange { .. } => "That exercise no longer matches the catalog",
      Self::InvalidProfile(_) => "Please finish setting up your profile",
      Self::Io(_) | Self::Json(_) => "Failed to read or save your progress",
      Self::Config(_) => "The configuration is invalid",
    }
  }

  /// True for caller mistakes (bad catalog, bad input), as opposed to I/O failures.
  pub fn is_precondition(&self) -> bool {
    !matches!(self, Self::Io(_) | Self::Json(_) | Self::Config(_))
  }
}

pub type Result<T> = std::result::Result<T, DrillError>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
  /// Log the error at warn level and return the default
  fn log_warn_default(self, context: &str) -> T
  where
    T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }

  fn log_warn_default(self, context: &str) -> T
  where
    T: Default,
  {
    self.log_warn(context).unwrap_or_default()
  }
}
