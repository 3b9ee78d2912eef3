use std::{
    collections::HashSet,
    sync::{PoisonError, RwLock},
};

use gestao_config::Config;
use gestao_domain::Snapshot;

use crate::CoreError;

/// Abstraction over persistence backends holding the restaurant records and
/// the pricing configuration.
pub trait DataProvider: Send + Sync {
    fn load_snapshot(&self) -> Result<Snapshot, CoreError>;
    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), CoreError>;
    fn load_config(&self) -> Result<Config, CoreError>;
    fn save_config(&self, config: &Config) -> Result<(), CoreError>;
}

/// Keeps everything in process memory. Used by tests and embedders that
/// persist on their own.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    snapshot: RwLock<Snapshot>,
    config: RwLock<Config>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(snapshot: Snapshot, config: Config) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            config: RwLock::new(config),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> CoreError {
    CoreError::Storage("in-memory provider lock poisoned".into())
}

impl DataProvider for InMemoryProvider {
    fn load_snapshot(&self) -> Result<Snapshot, CoreError> {
        Ok(self.snapshot.read().map_err(poisoned)?.clone())
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        *self.snapshot.write().map_err(poisoned)? = snapshot.clone();
        Ok(())
    }

    fn load_config(&self) -> Result<Config, CoreError> {
        Ok(self.config.read().map_err(poisoned)?.clone())
    }

    fn save_config(&self, config: &Config) -> Result<(), CoreError> {
        config.validate()?;
        *self.config.write().map_err(poisoned)? = config.clone();
        Ok(())
    }
}

/// Detects dangling references and other anomalies within a snapshot.
pub fn snapshot_warnings(snapshot: &Snapshot) -> Vec<String> {
    let ingredient_ids: HashSet<_> = snapshot.ingredients.iter().map(|i| i.id).collect();
    let dish_ids: HashSet<_> = snapshot.dishes.iter().map(|d| d.id).collect();
    let mut warnings = Vec::new();

    for dish in &snapshot.dishes {
        for line in &dish.recipe {
            if !ingredient_ids.contains(&line.ingredient_id) {
                warnings.push(format!(
                    "dish {} references unknown ingredient {}",
                    dish.id, line.ingredient_id
                ));
            }
        }
    }
    for sale in &snapshot.sales {
        for item in &sale.items {
            if !dish_ids.contains(&item.dish_id) {
                warnings.push(format!(
                    "sale {} references unknown dish {}",
                    sale.id, item.dish_id
                ));
            }
        }
    }
    for expense in &snapshot.expenses {
        if expense.installment_index > expense.total_installments {
            warnings.push(format!(
                "expense {} installment {}/{} out of range",
                expense.id, expense.installment_index, expense.total_installments
            ));
        }
    }
    warnings
}
