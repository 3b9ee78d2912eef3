//! gestao-config
//!
//! The restaurant's configuration record: tax and fee rates, cost allocation,
//! target margin, daily goal, and support contacts. Owns validation of the
//! pricing percentages plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
