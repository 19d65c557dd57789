//! User configuration loaded from `.leadmap.toml`.
//!
//! Every knob has a default in code; the config file only overrides.
//! A malformed file is logged and ignored rather than failing the run.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::fields;
use crate::core::parsing::FillPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadmapConfig {
    pub parser: ParserConfig,
    pub reports: ReportsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Fill value for short data rows.
    pub fill: FillPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// Fields counted by the follow-up frequency report.
    pub follow_up_fields: Vec<String>,
    /// Field keys audited by the completeness report; the built-in
    /// checklist applies when unset.
    pub checklist: Option<Vec<String>>,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            follow_up_fields: vec![
                fields::VISIT_DAYS.to_string(),
                fields::SECOND_VISIT.to_string(),
                fields::THIRD_VISIT.to_string(),
                fields::FOURTH_VISIT.to_string(),
            ],
            checklist: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub default_format: String,
    /// Default row limit for ranked/grouped tables; unset shows everything.
    pub top: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "terminal".to_string(),
            top: None,
        }
    }
}

static CONFIG: OnceLock<LeadmapConfig> = OnceLock::new();

fn try_load_config_from_path(path: &Path) -> Option<LeadmapConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(error) => {
            log::warn!(
                "Ignoring malformed config {}: {}",
                path.display(),
                error
            );
            None
        }
    }
}

/// Search the working directory and its ancestors for `.leadmap.toml`,
/// falling back to defaults.
pub fn load_config() -> LeadmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(error) => {
            log::warn!("Failed to get current directory: {error}. Using default config.");
            return LeadmapConfig::default();
        }
    };

    current
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".leadmap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Get the cached configuration
pub fn get_config() -> &'static LeadmapConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_knob() {
        let config = LeadmapConfig::default();
        assert_eq!(config.parser.fill, FillPolicy::NotAvailable);
        assert_eq!(config.reports.follow_up_fields.len(), 4);
        assert_eq!(config.reports.checklist, None);
        assert_eq!(config.output.default_format, "terminal");
        assert_eq!(config.output.top, None);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: LeadmapConfig = toml::from_str(
            r#"
            [parser]
            fill = "empty"
            "#,
        )
        .unwrap();
        assert_eq!(config.parser.fill, FillPolicy::Empty);
        assert_eq!(config.output.default_format, "terminal");
    }

    #[test]
    fn checklist_and_follow_ups_are_overridable() {
        let config: LeadmapConfig = toml::from_str(
            r#"
            [reports]
            follow_up_fields = ["VisitDays"]
            checklist = ["CustomerName", "District"]
            "#,
        )
        .unwrap();
        assert_eq!(config.reports.follow_up_fields, vec!["VisitDays"]);
        assert_eq!(
            config.reports.checklist,
            Some(vec!["CustomerName".to_string(), "District".to_string()])
        );
    }
}
