//! Application configuration constants.
//!
//! Scheduling constants live here alongside the file locations used by the
//! command-line collaborator.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{DrillError, Result};

// ==================== Scheduling Configuration ====================

/// Ease factor assigned on first exposure
pub const INITIAL_EASE: f64 = 2.5;

/// Hard floor for the ease factor
pub const MIN_EASE: f64 = 1.3;

/// Ease added after a correct answer
pub const EASE_BONUS: f64 = 0.1;

/// Ease removed after a wrong answer
pub const EASE_PENALTY: f64 = 0.2;

/// Interval used on first exposure and after any failure
pub const MIN_INTERVAL_DAYS: u32 = 1;

/// Longest interval a correct answer can schedule (about a century)
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

// ==================== Session Configuration ====================

/// Minimum number of exercises per session
pub const DEFAULT_SESSION_SIZE: usize = 10;

/// Selection weight of a priority language
pub const PRIORITY_WEIGHT: u32 = 3;

/// Selection weight of every other cataloged language
pub const BASE_WEIGHT: u32 = 1;

// ==================== Profile Configuration ====================

pub const MIN_PRIORITIES: usize = 3;
pub const MAX_PRIORITIES: usize = 5;

// ==================== File Configuration ====================

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
pub const DEFAULT_PROGRESS_PATH: &str = "data/progress.json";
pub const DEFAULT_PROFILE_PATH: &str = "data/profile.json";

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    drill: Option<DrillSection>,
}

#[derive(Debug, Default, Deserialize)]
struct DrillSection {
    catalog_path: Option<String>,
    progress_path: Option<String>,
    profile_path: Option<String>,
    session_size: Option<usize>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DrillConfig {
    pub catalog_path: PathBuf,
    pub progress_path: PathBuf,
    pub profile_path: PathBuf,
    pub session_size: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            progress_path: PathBuf::from(DEFAULT_PROGRESS_PATH),
            profile_path: PathBuf::from(DEFAULT_PROFILE_PATH),
            session_size: DEFAULT_SESSION_SIZE,
        }
    }
}

/// Load configuration with priority: config.toml > .env / environment > default
pub fn load() -> Result<DrillConfig> {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    load_from(Path::new("config.toml"), |key| std::env::var(key).ok())
}

/// Resolve configuration from a toml file and an environment lookup.
///
/// A missing file is not an error; a file that fails to parse is.
pub fn load_from(
    toml_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<DrillConfig> {
    let section = match std::fs::read_to_string(toml_path) {
        Ok(contents) => toml::from_str::<FileConfig>(&contents)
            .map_err(|e| DrillError::Config(format!("{}: {}", toml_path.display(), e)))?
            .drill
            .unwrap_or_default(),
        Err(_) => DrillSection::default(),
    };

    let defaults = DrillConfig::default();

    let catalog_path = resolve_path("catalog", section.catalog_path, env("DRILL_CATALOG"), defaults.catalog_path);
    let progress_path = resolve_path("progress", section.progress_path, env("DRILL_PROGRESS"), defaults.progress_path);
    let profile_path = resolve_path("profile", section.profile_path, env("DRILL_PROFILE"), defaults.profile_path);

    let env_size = env("DRILL_SESSION_SIZE")
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| DrillError::Config(format!("DRILL_SESSION_SIZE is not a number: {}", raw)))
        })
        .transpose()?;
    let session_size = section.session_size.or(env_size).unwrap_or(defaults.session_size);
    if session_size == 0 {
        return Err(DrillError::Config("session_size must be at least 1".to_string()));
    }

    Ok(DrillConfig {
        catalog_path,
        progress_path,
        profile_path,
        session_size,
    })
}

fn resolve_path(
    name: &str,
    from_file: Option<String>,
    from_env: Option<String>,
    default: PathBuf,
) -> PathBuf {
    // Priority 1: config.toml
    if let Some(path) = from_file {
        tracing::info!("Using {} from config.toml: {}", name, path);
        return PathBuf::from(path);
    }

    // Priority 2: environment
    if let Some(path) = from_env {
        tracing::info!("Using {} from environment: {}", name, path);
        return PathBuf::from(path);
    }

    tracing::info!("Using default {} path: {}", name, default.display());
    default
}
