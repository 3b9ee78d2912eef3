//! Recurring monthly costs that do not vary with sales.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, ingredient::default_active};

pub const FIXED_COST_CATEGORIES: [&str; 5] = [
    "Infraestrutura",
    "Pessoal",
    "Servicos",
    "Impostos",
    "Outros",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedCost {
    pub id: Uuid,
    pub name: String,
    pub monthly_value: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u8>,
    #[serde(default = "default_active")]
    pub recurring: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl FixedCost {
    pub fn new(name: impl Into<String>, monthly_value: f64, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            monthly_value,
            category: category.into(),
            due_day: None,
            recurring: true,
            active: true,
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Identifiable for FixedCost {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for FixedCost {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for FixedCost {
    fn amount(&self) -> f64 {
        self.monthly_value
    }
}

impl Activatable for FixedCost {
    fn is_active(&self) -> bool {
        self.active
    }
}
