//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for roomfit:
//! the default snapshot file, combination search limits, generator
//! defaults and the report format.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::allocation::SearchBudget;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// one another.
///
/// # Examples
///
/// ```
/// use roomfit::config::{Config, SearchConfig};
///
/// let config = Config {
///     search: Some(SearchConfig {
///         max_steps: Some(50_000),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.search_budget().max_steps(), Some(50_000));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default room snapshot file.
    pub rooms_file: Option<PathBuf>,

    /// Combination search limits.
    pub search: Option<SearchConfig>,

    /// Defaults for the snapshot generator.
    pub generator: Option<GeneratorConfig>,

    /// Report format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Builds the search budget described by the `search` section.
    ///
    /// A missing section yields an unlimited budget.
    #[must_use]
    pub fn search_budget(&self) -> SearchBudget {
        let Some(search) = &self.search else {
            return SearchBudget::unlimited();
        };

        let mut budget = SearchBudget::unlimited();
        if let Some(steps) = search.max_steps {
            budget = budget.with_max_steps(steps);
        }
        if let Some(ms) = search.time_limit_ms {
            budget = budget.with_time_limit(Duration::from_millis(ms));
        }
        if let Some(interval) = search.check_interval {
            budget = budget.with_check_interval(interval);
        }
        budget
    }

    /// The configured output format, or JSON.
    #[must_use]
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Limits for a single combination search.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum number of rooms examined.
    pub max_steps: Option<u64>,

    /// Wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,

    /// Steps between clock reads.
    pub check_interval: Option<u64>,
}

/// Defaults for `roomfit generate`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// RNG seed.
    pub seed: Option<u64>,

    /// Number of rooms.
    pub count: Option<usize>,

    /// Probability that a room is available.
    pub available_ratio: Option<f64>,
}

/// Output format for reports.
///
/// # Examples
///
/// ```
/// use roomfit::config::OutputFormat;
///
/// let format: OutputFormat = "csv".parse().unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.to_string(), "csv");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    #[default]
    Json,
    /// Human-readable text.
    Human,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" => Ok(Self::Human),
            "csv" => Ok(Self::Csv),
            _ => Err(format!(
                "invalid output format: '{s}' (expected json, human or csv)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let yaml = r"
rooms_file: data/rooms.json
search:
  max_steps: 1000
  time_limit_ms: 250
  check_interval: 16
generator:
  seed: 7
  count: 200
  available_ratio: 0.8
output_format: human
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.rooms_file, Some(PathBuf::from("data/rooms.json")));
        assert_eq!(config.search.as_ref().unwrap().max_steps, Some(1000));
        assert_eq!(config.generator.as_ref().unwrap().count, Some(200));
        assert_eq!(config.output_format, Some(OutputFormat::Human));
    }

    #[test]
    fn test_minimal_config() {
        let config: Config = serde_yaml::from_str("rooms_file: rooms.json\n").unwrap();
        assert!(config.search.is_none());
        assert!(config.generator.is_none());
    }

    #[test]
    fn test_config_deny_unknown_fields() {
        let yaml = "rooms_file: a.json\nports: 5000\n";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());

        let yaml = "search:\n  max_depth: 3\n";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_budget_conversion() {
        let config = Config {
            search: Some(SearchConfig {
                max_steps: Some(10),
                time_limit_ms: Some(500),
                check_interval: None,
            }),
            ..Default::default()
        };
        let budget = config.search_budget();
        assert_eq!(budget.max_steps(), Some(10));
        assert_eq!(budget.time_limit(), Some(Duration::from_millis(500)));

        assert!(Config::default().search_budget().is_unlimited());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" human ".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(Config::default().output_format_or_default(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_yaml::from_str("csv").unwrap();
        assert_eq!(format, OutputFormat::Csv);
        let serialized = serde_yaml::to_string(&OutputFormat::Human).unwrap();
        assert!(serialized.contains("human"));
    }
}
