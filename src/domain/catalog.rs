use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DrillError, Result};

/// One language's phrase list, index-aligned with its reference translations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseCatalogEntry {
  pub code: String,
  pub name: String,
  pub tokens: Vec<String>,
  pub translations: Vec<String>,
}

impl PhraseCatalogEntry {
  pub fn new(code: &str, name: &str, pairs: &[(&str, &str)]) -> Self {
    Self {
      code: code.to_string(),
      name: name.to_string(),
      tokens: pairs.iter().map(|(t, _)| t.to_string()).collect(),
      translations: pairs.iter().map(|(_, r)| r.to_string()).collect(),
    }
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  /// Target-language text and its reference translation at `index`
  pub fn phrase(&self, index: usize) -> Result<(&str, &str)> {
    match (self.tokens.get(index), self.translations.get(index)) {
      (Some(token), Some(translation)) => Ok((token.as_str(), translation.as_str())),
      _ => Err(DrillError::PhraseOutOfRange {
        code: self.code.clone(),
        index,
        len: self.len(),
      }),
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.tokens.len() != self.translations.len() {
      return Err(DrillError::MismatchedLengths {
        code: self.code.clone(),
        tokens: self.tokens.len(),
        translations: self.translations.len(),
      });
    }
    if self.tokens.is_empty() {
      return Err(DrillError::EmptyLanguage(self.code.clone()));
    }
    Ok(())
  }
}

/// The full, pre-loaded phrase catalog. Read-only for the duration of a session.
///
/// Only constructed through validation, so every entry is non-empty and aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
  languages: Vec<PhraseCatalogEntry>,
}

impl Catalog {
  /// Build a catalog, failing fast on any malformed entry.
  pub fn new(languages: Vec<PhraseCatalogEntry>) -> Result<Self> {
    let catalog = Self { languages };
    catalog.validate()?;
    Ok(catalog)
  }

  /// Parse a JSON array of language records and validate it.
  pub fn from_json(json: &str) -> Result<Self> {
    let languages: Vec<PhraseCatalogEntry> = serde_json::from_str(json)?;
    Self::new(languages)
  }

  pub fn validate(&self) -> Result<()> {
    if self.languages.is_empty() {
      return Err(DrillError::EmptyCatalog);
    }
    let mut seen = HashSet::new();
    for entry in &self.languages {
      if !seen.insert(entry.code.as_str()) {
        return Err(DrillError::DuplicateLanguage(entry.code.clone()));
      }
      entry.validate()?;
    }
    Ok(())
  }

  pub fn languages(&self) -> &[PhraseCatalogEntry] {
    &self.languages
  }

  pub fn get(&self, code: &str) -> Result<&PhraseCatalogEntry> {
    self
      .languages
      .iter()
      .find(|l| l.code == code)
      .ok_or_else(|| DrillError::UnknownLanguage(code.to_string()))
  }

  pub fn contains(&self, code: &str) -> bool {
    self.languages.iter().any(|l| l.code == code)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn spanish() -> PhraseCatalogEntry {
    PhraseCatalogEntry::new("es", "Spanish", &[("hola", "hello"), ("adiós", "goodbye")])
  }

  #[test]
  fn test_phrase_lookup() {
    let es = spanish();
    assert_eq!(es.phrase(1).unwrap(), ("adiós", "goodbye"));
    assert!(matches!(
      es.phrase(2),
      Err(DrillError::PhraseOutOfRange { index: 2, len: 2, .. })
    ));
  }

  #[test]
  fn test_mismatched_lengths_rejected() {
    let mut es = spanish();
    es.translations.pop();
    assert!(matches!(
      Catalog::new(vec![es]),
      Err(DrillError::MismatchedLengths { tokens: 2, translations: 1, .. })
    ));
  }

  #[test]
  fn test_empty_language_rejected() {
    let empty = PhraseCatalogEntry::new("fr", "French", &[]);
    assert!(matches!(
      Catalog::new(vec![spanish(), empty]),
      Err(DrillError::EmptyLanguage(code)) if code == "fr"
    ));
  }

  #[test]
  fn test_empty_catalog_rejected() {
    assert!(matches!(Catalog::new(vec![]), Err(DrillError::EmptyCatalog)));
  }

  #[test]
  fn test_duplicate_language_rejected() {
    assert!(matches!(
      Catalog::new(vec![spanish(), spanish()]),
      Err(DrillError::DuplicateLanguage(_))
    ));
  }

  #[test]
  fn test_from_json() {
    let json = r#"[
      {"code": "es", "name": "Spanish", "tokens": ["hola"], "translations": ["hello"]},
      {"code": "fr", "name": "French", "tokens": ["bonjour"], "translations": ["hello"]}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.languages().len(), 2);
    assert_eq!(catalog.get("fr").unwrap().name, "French");
    assert!(matches!(catalog.get("de"), Err(DrillError::UnknownLanguage(_))));
  }
}
