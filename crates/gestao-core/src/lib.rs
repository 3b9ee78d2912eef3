//! gestao-core
//!
//! Cost, pricing, income statement and period engines plus the catalog
//! services that keep derived dish figures current.
//! Depends on gestao-domain and gestao-config. No terminal I/O, no direct
//! file storage.

pub mod cost_service;
pub mod dish_service;
pub mod dre_service;
pub mod error;
pub mod expense_service;
pub mod fixed_cost_service;
pub mod format;
pub mod ingredient_service;
pub mod period_service;
pub mod pricing_service;
pub mod public_api;
pub mod sale_service;
pub mod storage;
pub mod time;
mod validation;

pub use cost_service::*;
pub use dish_service::*;
pub use dre_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use fixed_cost_service::*;
pub use format::*;
pub use ingredient_service::*;
pub use period_service::*;
pub use pricing_service::*;
pub use sale_service::*;
pub use storage::*;
pub use time::*;
