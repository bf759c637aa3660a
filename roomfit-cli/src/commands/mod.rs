//! CLI command implementations.
//!
//! - `combine`: Find one bundle of rooms satisfying a list of requests
//! - `optimize`: Split a stay across priced rooms at minimum cost
//! - `generate`: Generate a synthetic room snapshot
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod combine;
pub mod completions;
pub mod generate;
pub mod optimize;
pub mod validate;

pub use combine::CombineCommand;
pub use completions::CompletionsCommand;
pub use generate::GenerateCommand;
pub use optimize::OptimizeCommand;
pub use validate::ValidateCommand;
