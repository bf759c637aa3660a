//! Configuration merging and precedence handling.
//!
//! Nested sections are merged field by field so that a higher-precedence
//! file can override a single search limit without restating the rest.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, GeneratorConfig, SearchConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use roomfit::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Csv), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Csv));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Top-level scalars are replaced when set in `source`; the `search` and
    /// `generator` sections merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.rooms_file.is_some() {
            target.rooms_file.clone_from(&source.rooms_file);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_search) = source.search {
            target.search = Some(match &target.search {
                Some(target_search) => Self::merge_search(target_search, source_search),
                None => source_search.clone(),
            });
        }

        if let Some(ref source_generator) = source.generator {
            target.generator = Some(match &target.generator {
                Some(target_generator) => Self::merge_generator(target_generator, source_generator),
                None => source_generator.clone(),
            });
        }
    }

    fn merge_search(target: &SearchConfig, source: &SearchConfig) -> SearchConfig {
        SearchConfig {
            max_steps: source.max_steps.or(target.max_steps),
            time_limit_ms: source.time_limit_ms.or(target.time_limit_ms),
            check_interval: source.check_interval.or(target.check_interval),
        }
    }

    fn merge_generator(target: &GeneratorConfig, source: &GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            seed: source.seed.or(target.seed),
            count: source.count.or(target.count),
            available_ratio: source.available_ratio.or(target.available_ratio),
        }
    }
}
