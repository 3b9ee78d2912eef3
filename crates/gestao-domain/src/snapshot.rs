//! The in-memory collection set the engines operate on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Dish, FixedCost, Ingredient, NonOperationalExpense, Sale};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// All restaurant records at one moment in time.
///
/// Callers hand a consistent snapshot to the engines; nothing here locks or
/// detects staleness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub fixed_costs: Vec<FixedCost>,
    #[serde(default)]
    pub expenses: Vec<NonOperationalExpense>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Snapshot::schema_version_default")]
    pub schema_version: u8,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self {
            ingredients: Vec::new(),
            dishes: Vec::new(),
            sales: Vec::new(),
            fixed_costs: Vec::new(),
            expenses: Vec::new(),
            updated_at: Utc::now(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Uuid {
        let id = ingredient.id;
        self.ingredients.push(ingredient);
        self.touch();
        id
    }

    pub fn add_dish(&mut self, dish: Dish) -> Uuid {
        let id = dish.id;
        self.dishes.push(dish);
        self.touch();
        id
    }

    /// Sales are kept newest first, matching how they are listed.
    pub fn add_sale(&mut self, sale: Sale) -> Uuid {
        let id = sale.id;
        self.sales.insert(0, sale);
        self.touch();
        id
    }

    pub fn add_fixed_cost(&mut self, cost: FixedCost) -> Uuid {
        let id = cost.id;
        self.fixed_costs.push(cost);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: NonOperationalExpense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn ingredient(&self, id: Uuid) -> Option<&Ingredient> {
        self.ingredients.iter().find(|item| item.id == id)
    }

    pub fn ingredient_mut(&mut self, id: Uuid) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|item| item.id == id)
    }

    pub fn dish(&self, id: Uuid) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    pub fn dish_mut(&mut self, id: Uuid) -> Option<&mut Dish> {
        self.dishes.iter_mut().find(|dish| dish.id == id)
    }

    pub fn sale(&self, id: Uuid) -> Option<&Sale> {
        self.sales.iter().find(|sale| sale.id == id)
    }

    pub fn sale_mut(&mut self, id: Uuid) -> Option<&mut Sale> {
        self.sales.iter_mut().find(|sale| sale.id == id)
    }

    pub fn fixed_cost(&self, id: Uuid) -> Option<&FixedCost> {
        self.fixed_costs.iter().find(|cost| cost.id == id)
    }

    pub fn fixed_cost_mut(&mut self, id: Uuid) -> Option<&mut FixedCost> {
        self.fixed_costs.iter_mut().find(|cost| cost.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&NonOperationalExpense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
