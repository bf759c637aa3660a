//! Configuration validation.
//!
//! Serde already rejects unknown keys and wrong types; this module checks
//! the ranges and cross-field rules that the schema cannot express.

use crate::config::schema::{Config, GeneratorConfig, SearchConfig};
use crate::error::{Error, Result};

/// Largest snapshot `roomfit generate` will produce.
pub const MAX_GENERATED_ROOMS: usize = 1_000_000;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use roomfit::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref rooms_file) = config.rooms_file {
            if rooms_file.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "rooms_file".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref search) = config.search {
            Self::validate_search(search)?;
        }

        if let Some(ref generator) = config.generator {
            Self::validate_generator(generator)?;
        }

        Ok(())
    }

    fn validate_search(search: &SearchConfig) -> Result<()> {
        if search.max_steps == Some(0) {
            return Err(Error::Validation {
                field: "search.max_steps".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if search.time_limit_ms == Some(0) {
            return Err(Error::Validation {
                field: "search.time_limit_ms".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if search.check_interval == Some(0) {
            return Err(Error::Validation {
                field: "search.check_interval".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if search.check_interval.is_some() && search.time_limit_ms.is_none() {
            return Err(Error::Validation {
                field: "search.check_interval".into(),
                message: "Only meaningful together with search.time_limit_ms".into(),
            });
        }

        Ok(())
    }

    fn validate_generator(generator: &GeneratorConfig) -> Result<()> {
        if let Some(count) = generator.count {
            if count == 0 || count > MAX_GENERATED_ROOMS {
                return Err(Error::Validation {
                    field: "generator.count".into(),
                    message: format!("Must be between 1 and {MAX_GENERATED_ROOMS}"),
                });
            }
        }

        if let Some(ratio) = generator.available_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::Validation {
                    field: "generator.available_ratio".into(),
                    message: format!("Must be between 0 and 1 (got {ratio})"),
                });
            }
        }

        Ok(())
    }
}
