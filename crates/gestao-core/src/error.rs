use gestao_config::ConfigError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(Uuid),
    #[error("Dish not found: {0}")]
    DishNotFound(Uuid),
    #[error("Sale not found: {0}")]
    SaleNotFound(Uuid),
    #[error("Fixed cost not found: {0}")]
    FixedCostNotFound(Uuid),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    /// The pricing percentages leave no room for a markup divisor.
    #[error("Invalid configuration: pricing percentages sum to {percent_sum}, must stay below 100")]
    InvalidConfiguration { percent_sum: f64 },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
