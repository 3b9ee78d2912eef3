//! Dish records and their recipes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, ingredient::default_active, Ingredient, UnitOfMeasure};

/// Menu sections offered when registering a dish.
pub const DISH_CATEGORIES: [&str; 6] = [
    "Pratos Principais",
    "Lanches",
    "Bebidas",
    "Sobremesas",
    "Porcoes",
    "Outros",
];

/// A menu item with its recipe and pricing figures.
///
/// `total_cost`, `suggested_price` and `real_margin` are a display cache
/// written by the pricing engine; reports recompute them from the live
/// ingredient catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub suggested_price: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub real_margin: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Dish {
    pub fn new(name: impl Into<String>, category: impl Into<String>, sale_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            description: None,
            recipe: Vec::new(),
            total_cost: 0.0,
            suggested_price: 0.0,
            sale_price,
            real_margin: 0.0,
            active: true,
        }
    }

    /// Adds `quantity` of `ingredient` to the recipe.
    ///
    /// An ingredient already on the recipe has its quantity increased instead
    /// of gaining a second line.
    pub fn add_ingredient(&mut self, ingredient: &Ingredient, quantity: f64) {
        if let Some(line) = self
            .recipe
            .iter_mut()
            .find(|line| line.ingredient_id == ingredient.id)
        {
            line.quantity += quantity;
            return;
        }
        self.recipe.push(RecipeLine::for_ingredient(ingredient, quantity));
    }

    pub fn with_ingredient(mut self, ingredient: &Ingredient, quantity: f64) -> Self {
        self.add_ingredient(ingredient, quantity);
        self
    }

    /// Drops the recipe line for `ingredient_id`, returning whether one existed.
    pub fn remove_ingredient(&mut self, ingredient_id: Uuid) -> bool {
        let before = self.recipe.len();
        self.recipe.retain(|line| line.ingredient_id != ingredient_id);
        self.recipe.len() != before
    }

    pub fn uses_ingredient(&self, ingredient_id: Uuid) -> bool {
        self.recipe
            .iter()
            .any(|line| line.ingredient_id == ingredient_id)
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Identifiable for Dish {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Dish {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Dish {
    fn amount(&self) -> f64 {
        self.sale_price
    }
}

impl Activatable for Dish {
    fn is_active(&self) -> bool {
        self.active
    }
}

impl Displayable for Dish {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.category)
    }
}

/// One ingredient and quantity within a dish recipe.
///
/// Name and unit are copied from the ingredient when the line is added so the
/// recipe still reads sensibly if the ingredient is later removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeLine {
    pub ingredient_id: Uuid,
    #[serde(default)]
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: UnitOfMeasure,
}

impl RecipeLine {
    pub fn new(ingredient_id: Uuid, quantity: f64, unit: UnitOfMeasure) -> Self {
        Self {
            ingredient_id,
            ingredient_name: String::new(),
            quantity,
            unit,
        }
    }

    pub fn for_ingredient(ingredient: &Ingredient, quantity: f64) -> Self {
        Self {
            ingredient_id: ingredient.id,
            ingredient_name: ingredient.name.clone(),
            quantity,
            unit: ingredient.unit,
        }
    }
}
