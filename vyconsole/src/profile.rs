//! Diff review profiles.
//!
//! A profile lists config line prefixes the review view treats as noise,
//! such as volatile system state the router rewrites on every commit.
//! Profiles are TOML files; a built-in default ships embedded in the
//! binary.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// A named set of ignore rules for diff review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiffProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ignore_prefixes: Vec<String>,
}

/// Errors returned when loading profile files.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profile file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load a diff profile from a TOML file.
pub fn load_profile(path: &Path) -> Result<DiffProfile, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_profile(&raw, path.display().to_string())
}

/// Built-in fallback profile.
pub fn default_profile() -> DiffProfile {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/profiles/default.toml"
    ));
    match parse_profile(embedded, "embedded profile".to_string()) {
        Ok(profile) if !profile.ignore_prefixes.is_empty() => profile,
        _ => fallback_profile(),
    }
}

fn parse_profile(raw: &str, path: String) -> Result<DiffProfile, ProfileLoadError> {
    toml::from_str(raw).map_err(|source| ProfileLoadError::Parse { path, source })
}

fn fallback_profile() -> DiffProfile {
    DiffProfile {
        name: "default".to_string(),
        ignore_prefixes: vec![
            "set system login user".to_string(),
            "set system task-scheduler".to_string(),
            "set service ntp server".to_string(),
        ],
    }
}
