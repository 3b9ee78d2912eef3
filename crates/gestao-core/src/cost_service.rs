//! Ingredient cost roll-up for dish recipes.

use std::collections::HashMap;

use uuid::Uuid;

use gestao_domain::{Dish, Ingredient, RecipeLine};

pub struct CostService;

impl CostService {
    /// Sums `unit_price * quantity` over the recipe.
    ///
    /// Lines whose ingredient is no longer in the catalog contribute nothing.
    pub fn dish_cost(recipe: &[RecipeLine], ingredients: &[Ingredient]) -> f64 {
        recipe
            .iter()
            .map(|line| Self::line_cost(line, ingredients))
            .sum()
    }

    pub fn line_cost(line: &RecipeLine, ingredients: &[Ingredient]) -> f64 {
        ingredients
            .iter()
            .find(|ingredient| ingredient.id == line.ingredient_id)
            .map_or(0.0, |ingredient| ingredient.cost_of(line.quantity))
    }
}

/// Live cost of every dish in a catalog, keyed by dish id.
#[derive(Debug, Clone, Default)]
pub struct DishCostIndex {
    costs: HashMap<Uuid, f64>,
}

impl DishCostIndex {
    /// Recomputes each dish's cost from the current ingredient prices.
    pub fn live(dishes: &[Dish], ingredients: &[Ingredient]) -> Self {
        let prices: HashMap<Uuid, f64> = ingredients
            .iter()
            .map(|ingredient| (ingredient.id, ingredient.unit_price))
            .collect();
        let costs = dishes
            .iter()
            .map(|dish| {
                let cost = dish
                    .recipe
                    .iter()
                    .filter_map(|line| {
                        prices
                            .get(&line.ingredient_id)
                            .map(|price| price * line.quantity)
                    })
                    .sum();
                (dish.id, cost)
            })
            .collect();
        Self { costs }
    }

    /// Unknown dishes cost nothing.
    pub fn cost_of(&self, dish_id: Uuid) -> f64 {
        self.costs.get(&dish_id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
