//! gestao-domain
//!
//! Pure domain records (Ingredient, Dish, Sale, FixedCost, NonOperationalExpense)
//! plus the report shapes produced by the engines. No I/O, no storage.

pub mod common;
pub mod dish;
pub mod expense;
pub mod fixed_cost;
pub mod ingredient;
pub mod report;
pub mod sale;
pub mod snapshot;

pub use common::*;
pub use dish::*;
pub use expense::*;
pub use fixed_cost::*;
pub use ingredient::*;
pub use report::*;
pub use sale::*;
pub use snapshot::*;
