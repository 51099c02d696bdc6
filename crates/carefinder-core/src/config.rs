//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `carefinder.toml` + `carefinder.<env>.toml` +
//! `CAREFINDER_*` env vars (`__` separates nested keys). Provides helpers to
//! expand `~` and `${VAR}` and to resolve relative paths against a known base
//! directory.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::GeoPoint;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("carefinder.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("carefinder.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("carefinder.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("carefinder.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("CAREFINDER_").split("__"));

        let config = Self::from_figment(figment);
        config.validate()?;
        Ok(config)
    }

    /// Wrap an already assembled figment (used by tests and embedders).
    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    /// Typed view of every known key, with defaults for anything unset.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract::<Settings>()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))
    }

    fn validate(&self) -> anyhow::Result<()> {
        let settings = self.settings()?;
        settings.search.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub search: SearchSettings,
}

/// Where the JSON fixtures live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub dir: String,
    pub hospitals_file: String,
    pub cmchis_file: String,
    pub coverage_file: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
            hospitals_file: "hospitalsData.json".to_string(),
            cmchis_file: "cmchisHospitals.json".to_string(),
            coverage_file: "coverageData.json".to_string(),
        }
    }
}

impl DataSettings {
    /// Resolve `(hospitals, cmchis, coverage)` fixture paths against `base`.
    pub fn fixture_paths(&self, base: &Path) -> (PathBuf, PathBuf, PathBuf) {
        let dir = resolve_with_base(base, &self.dir);
        (
            resolve_with_base(&dir, &self.hospitals_file),
            resolve_with_base(&dir, &self.cmchis_file),
            resolve_with_base(&dir, &self.coverage_file),
        )
    }
}

/// Query limits and fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub default_radius_km: f64,
    pub result_cap: usize,
    pub browse_cap: usize,
    pub policy_cap: usize,
    /// Search centre for emergency requests that arrive without a location.
    pub fallback_location: GeoPoint,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_km: 50.0,
            result_cap: 50,
            browse_cap: 20,
            policy_cap: 5,
            fallback_location: GeoPoint::new(11.0168, 76.9558),
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(self.default_radius_km.is_finite() && self.default_radius_km > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "search.default_radius_km must be positive, got {}",
                self.default_radius_km
            )));
        }
        for (key, cap) in [
            ("search.result_cap", self.result_cap),
            ("search.browse_cap", self.browse_cap),
            ("search.policy_cap", self.policy_cap),
        ] {
            if cap == 0 {
                return Err(Error::InvalidConfig(format!("{key} must be at least 1")));
            }
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
