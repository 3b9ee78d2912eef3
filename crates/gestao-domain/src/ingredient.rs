//! Ingredient records and their units of measure.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A purchasable input priced per unit of measure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub unit: UnitOfMeasure,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

pub(crate) fn default_active() -> bool {
    true
}

impl Ingredient {
    pub fn new(name: impl Into<String>, unit: UnitOfMeasure, unit_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit,
            unit_price,
            supplier: None,
            active: true,
        }
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Cost of `quantity` units at the current price.
    pub fn cost_of(&self, quantity: f64) -> f64 {
        self.unit_price * quantity
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Identifiable for Ingredient {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Ingredient {
    fn amount(&self) -> f64 {
        self.unit_price
    }
}

impl Activatable for Ingredient {
    fn is_active(&self) -> bool {
        self.active
    }
}

impl Displayable for Ingredient {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.unit.abbreviation())
    }
}

/// Supported purchasing units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UnitOfMeasure {
    #[serde(rename = "KG")]
    Kilogram,
    #[serde(rename = "G")]
    Gram,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "ML")]
    Milliliter,
    #[serde(rename = "UN")]
    Unit,
    #[serde(rename = "PCT")]
    Package,
    #[serde(rename = "CX")]
    Box,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 7] = [
        UnitOfMeasure::Kilogram,
        UnitOfMeasure::Gram,
        UnitOfMeasure::Liter,
        UnitOfMeasure::Milliliter,
        UnitOfMeasure::Unit,
        UnitOfMeasure::Package,
        UnitOfMeasure::Box,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            UnitOfMeasure::Kilogram => "kg",
            UnitOfMeasure::Gram => "g",
            UnitOfMeasure::Liter => "L",
            UnitOfMeasure::Milliliter => "ml",
            UnitOfMeasure::Unit => "un",
            UnitOfMeasure::Package => "pct",
            UnitOfMeasure::Box => "cx",
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnitOfMeasure::Kilogram => "Quilograma (kg)",
            UnitOfMeasure::Gram => "Grama (g)",
            UnitOfMeasure::Liter => "Litro (L)",
            UnitOfMeasure::Milliliter => "Mililitro (ml)",
            UnitOfMeasure::Unit => "Unidade",
            UnitOfMeasure::Package => "Pacote",
            UnitOfMeasure::Box => "Caixa",
        };
        f.write_str(label)
    }
}
