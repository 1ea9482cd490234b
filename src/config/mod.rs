//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment key/values (+ CLI overrides)
//!     → loader.rs (parse into SentinelConfig)
//!     → validation.rs (semantic checks)
//!     → SentinelConfig (validated, immutable)
//!     → read by the health loop for the whole run
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a run never reconfigures itself
//! - All fields have defaults so the agent starts with zero configuration
//! - Validation separates syntactic (loader) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_env, from_vars, region_from_target, ConfigError};
pub use schema::SentinelConfig;
pub use validation::{validate_config, ValidationError};
