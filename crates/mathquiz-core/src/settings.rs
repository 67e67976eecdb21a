//! Runtime settings loaded from an explicit settings file and the environment.
//!
//! Settings never change the quiz protocol itself; they control seeding,
//! report format, and log verbosity.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Environment variable overriding the generator seed.
pub const SEED_ENV: &str = "MATHQUIZ_SEED";

/// How the final report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Fixed seed for reproducible questions; clock-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            seed: None,
            format: OutputFormat::Text,
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "mathquiz=warn".to_string()
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<QuizSettings, QuizError> {
    toml::from_str(content).map_err(|e| QuizError::Settings(e.to_string()))
}

/// Load settings from `path`, or start from defaults when no path is given.
///
/// No file is ever looked up implicitly, so a run without `--config` cannot
/// fail on settings.
pub fn load_settings_from(path: Option<&Path>) -> Result<QuizSettings> {
    let mut settings = match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            parse_settings(&content)
                .with_context(|| format!("failed to parse settings: {}", path.display()))?
        }
        None => QuizSettings::default(),
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(settings: &mut QuizSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(raw) = lookup(SEED_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => settings.seed = Some(seed),
            Err(_) => tracing::warn!("ignoring {SEED_ENV}={raw:?}: not an unsigned integer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = QuizSettings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.log_filter, "mathquiz=warn");
    }

    #[test]
    fn parse_full_settings() {
        let settings = parse_settings(
            r#"
seed = 42
format = "json"
log_filter = "mathquiz=debug"
"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.log_filter, "mathquiz=debug");
    }

    #[test]
    fn parse_partial_settings_fills_defaults() {
        let settings = parse_settings("seed = 7").unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.log_filter, "mathquiz=warn");
    }

    #[test]
    fn parse_rejects_unknown_format() {
        let err = parse_settings("format = \"xml\"").unwrap_err();
        assert!(matches!(err, QuizError::Settings(_)));
    }

    #[test]
    fn load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "seed = 99\nformat = \"json\"\n").unwrap();

        let settings = load_settings_from(Some(&path)).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn load_without_path_uses_defaults() {
        let settings = load_settings_from(None).unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.log_filter, "mathquiz=warn");
    }

    #[test]
    fn load_from_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings_from(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read settings"));
    }

    #[test]
    fn env_seed_overrides_file() {
        let mut settings = parse_settings("seed = 1").unwrap();
        apply_env_overrides(&mut settings, |key| {
            (key == SEED_ENV).then(|| " 1234 ".to_string())
        });
        assert_eq!(settings.seed, Some(1234));
    }

    #[test]
    fn unparsable_env_seed_is_ignored() {
        let mut settings = parse_settings("seed = 1").unwrap();
        apply_env_overrides(&mut settings, |_| Some("soon".to_string()));
        assert_eq!(settings.seed, Some(1));
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
