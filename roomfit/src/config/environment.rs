//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOMFIT_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Overrides the default snapshot file.
pub const ROOMS_FILE_ENV: &str = "ROOMFIT_ROOMS_FILE";
/// Overrides `search.max_steps`.
pub const MAX_STEPS_ENV: &str = "ROOMFIT_MAX_STEPS";
/// Overrides `search.time_limit_ms`.
pub const TIME_LIMIT_ENV: &str = "ROOMFIT_TIME_LIMIT_MS";
/// Overrides `generator.seed`.
pub const SEED_ENV: &str = "ROOMFIT_SEED";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "ROOMFIT_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use roomfit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g. a non-numeric step limit or an unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(path) = Self::read(ROOMS_FILE_ENV) {
            config.rooms_file = Some(PathBuf::from(path));
        }

        if let Some(val) = Self::read(MAX_STEPS_ENV) {
            let search = config.search.get_or_insert_with(Default::default);
            search.max_steps = Some(Self::parse_number(MAX_STEPS_ENV, &val)?);
        }

        if let Some(val) = Self::read(TIME_LIMIT_ENV) {
            let search = config.search.get_or_insert_with(Default::default);
            search.time_limit_ms = Some(Self::parse_number(TIME_LIMIT_ENV, &val)?);
        }

        if let Some(val) = Self::read(SEED_ENV) {
            let generator = config.generator.get_or_insert_with(Default::default);
            generator.seed = Some(Self::parse_number(SEED_ENV, &val)?);
        }

        if let Some(val) = Self::read(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(OutputFormat::from_str(&val).map_err(|message| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                })?);
        }

        Ok(())
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parse a non-negative integer.
    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid value: '{s}' (expected a non-negative integer)"),
        })
    }
}
