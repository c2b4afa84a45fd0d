use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::DateRules;
use crate::utils::ValidatorError;

/// Site-level reservation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub booking_open: bool,
    #[serde(deserialize_with = "list_or_csv")]
    pub campuses: Vec<String>,
    #[serde(deserialize_with = "list_or_csv")]
    pub visit_times: Vec<String>,
    pub visit_dates: DateRules,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            booking_open: true,
            campuses: vec!["Main Campus".to_string(), "New Campus".to_string()],
            visit_times: vec!["09:00-11:00".to_string(), "14:00-16:00".to_string()],
            visit_dates: DateRules::default(),
        }
    }
}

impl ValidatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ValidatorError> {
        let config: ValidatorConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ValidatorError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ValidatorError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<(), ValidatorError> {
        if self.campuses.is_empty() {
            return Err(ValidatorError::ConfigError(
                "at least one campus is required".to_string(),
            ));
        }
        if self.visit_times.is_empty() {
            return Err(ValidatorError::ConfigError(
                "at least one visit time is required".to_string(),
            ));
        }
        if let (Some(min), Some(max)) = (self.visit_dates.min_date, self.visit_dates.max_date) {
            if min > max {
                return Err(ValidatorError::ConfigError(format!(
                    "visit_dates.min_date {} is after max_date {}",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

/// Splits the comma-separated form used by the admin settings page.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrCsv {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match ListOrCsv::deserialize(deserializer)? {
        ListOrCsv::List(items) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        ListOrCsv::Csv(raw) => parse_list(&raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_drops_blanks() {
        assert_eq!(
            parse_list(" Main Campus, ,New Campus,"),
            vec!["Main Campus".to_string(), "New Campus".to_string()]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn empty_object_gives_defaults() {
        let config = ValidatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert!(config.booking_open);
    }

    #[test]
    fn csv_and_list_forms() {
        let config = ValidatorConfig::from_json_str(
            r#"{"campuses": "East,West", "visit_times": ["10:00-12:00 "]}"#,
        )
        .unwrap();
        assert_eq!(config.campuses, vec!["East", "West"]);
        assert_eq!(config.visit_times, vec!["10:00-12:00"]);
    }

    #[test]
    fn rejects_unknown_keys_and_empty_lists() {
        assert!(matches!(
            ValidatorConfig::from_json_str(r#"{"daily_limit": 50}"#),
            Err(ValidatorError::JsonError(_))
        ));
        assert!(matches!(
            ValidatorConfig::from_json_str(r#"{"campuses": ""}"#),
            Err(ValidatorError::ConfigError(_))
        ));
    }

    #[test]
    fn rejects_inverted_date_bounds() {
        let result = ValidatorConfig::from_json_str(
            r#"{"visit_dates": {"min_date": "2024-06-01", "max_date": "2024-05-01"}}"#,
        );
        assert!(matches!(result, Err(ValidatorError::ConfigError(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ValidatorConfig::from_file(Path::new("/nonexistent/visitcheck.json"));
        assert!(matches!(result, Err(ValidatorError::IoError(_))));
    }
}
