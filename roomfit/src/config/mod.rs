//! Configuration system for roomfit.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of ranges and cross-field rules
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOMFIT_*`)
//! 3. Private project config (`roomfit.local.yaml`)
//! 4. Project config (`roomfit.yaml`)
//! 5. User config (`~/.roomfit/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use roomfit::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("rooms file: {:?}", config.rooms_file);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use roomfit::config::{Config, ConfigBuilder, SearchConfig};
//!
//! let custom = Config {
//!     search: Some(SearchConfig {
//!         max_steps: Some(1_000),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.search_budget().max_steps(), Some(1_000));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, GeneratorConfig, OutputFormat, SearchConfig};
pub use validator::ConfigValidator;
