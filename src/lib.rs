#![doc(test(attr(deny(warnings))))]

//! Gestao Facil turns a restaurant's ingredient prices, recipes, sales and
//! fixed costs into dish pricing, daily goal tracking and a monthly income
//! statement (DRE).
//!
//! The engines live in `gestao-core`; this crate wires them to a
//! [`DataProvider`] and sets up logging.

pub mod overview;
pub mod utils;

use std::sync::Once;

pub use gestao_config as config;
pub use gestao_core as engine;
pub use gestao_domain as domain;
pub use gestao_storage_json as storage;

pub use gestao_config::{Config, ConfigManager};
pub use gestao_core::{public_api, CoreError, DataProvider, InMemoryProvider};
pub use gestao_storage_json::JsonDataProvider;
pub use overview::{DayOverview, DishAlert, MonthlyOverview};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Gestao Facil tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
