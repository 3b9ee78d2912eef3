use tracing::warn;
use uuid::Uuid;

use gestao_config::Config;
use gestao_domain::{Dish, DishPricing, Ingredient, Snapshot};

use crate::{
    cost_service::CostService,
    pricing_service::PricingService,
    validation::{require_positive, require_text},
    CoreError,
};

pub struct DishService;

impl DishService {
    /// Validates the dish, fills its derived pricing fields and stores it.
    pub fn add(
        snapshot: &mut Snapshot,
        mut dish: Dish,
        config: &Config,
    ) -> Result<DishPricing, CoreError> {
        Self::validate(&dish)?;
        let pricing = PricingService::reprice_dish(&mut dish, &snapshot.ingredients, config)?;
        snapshot.add_dish(dish);
        Ok(pricing)
    }

    pub fn update(
        snapshot: &mut Snapshot,
        id: Uuid,
        changes: Dish,
        config: &Config,
    ) -> Result<DishPricing, CoreError> {
        Self::validate(&changes)?;
        let pricing = PricingService::price_dish(&changes, &snapshot.ingredients, config)?;
        let dish = snapshot.dish_mut(id).ok_or(CoreError::DishNotFound(id))?;
        dish.name = changes.name;
        dish.category = changes.category;
        dish.description = changes.description;
        dish.recipe = changes.recipe;
        dish.sale_price = changes.sale_price;
        dish.active = changes.active;
        dish.total_cost = pricing.total_cost;
        dish.suggested_price = pricing.suggested_price;
        dish.real_margin = pricing.real_margin;
        snapshot.touch();
        Ok(pricing)
    }

    pub fn deactivate(snapshot: &mut Snapshot, id: Uuid) -> Result<(), CoreError> {
        let dish = snapshot.dish_mut(id).ok_or(CoreError::DishNotFound(id))?;
        dish.deactivate();
        snapshot.touch();
        Ok(())
    }

    pub fn list_active(snapshot: &Snapshot) -> Vec<&Dish> {
        snapshot.dishes.iter().filter(|dish| dish.active).collect()
    }

    /// Recomputes the cached pricing of every dish. Returns how many dishes
    /// were refreshed.
    pub fn reprice_all(snapshot: &mut Snapshot, config: &Config) -> Result<usize, CoreError> {
        PricingService::markup_factor(config)?;
        let ingredients = &snapshot.ingredients;
        for dish in snapshot.dishes.iter_mut() {
            PricingService::reprice_dish(dish, ingredients, config)?;
        }
        snapshot.touch();
        Ok(snapshot.dishes.len())
    }

    /// Refreshes dishes whose recipe references `ingredient_id`.
    ///
    /// With an unusable configuration the cost and margin are still
    /// refreshed and the suggested price is cleared.
    pub(crate) fn refresh_dishes_using(
        snapshot: &mut Snapshot,
        ingredient_id: Uuid,
        config: &Config,
    ) -> usize {
        let ingredients = &snapshot.ingredients;
        let mut refreshed = 0;
        for dish in snapshot
            .dishes
            .iter_mut()
            .filter(|dish| dish.uses_ingredient(ingredient_id))
        {
            Self::refresh(dish, ingredients, config);
            refreshed += 1;
        }
        refreshed
    }

    fn refresh(dish: &mut Dish, ingredients: &[Ingredient], config: &Config) {
        if let Err(err) = PricingService::reprice_dish(dish, ingredients, config) {
            warn!("dish `{}` repriced without markup: {}", dish.name, err);
            dish.total_cost = CostService::dish_cost(&dish.recipe, ingredients);
            dish.suggested_price = 0.0;
            dish.real_margin = PricingService::real_margin(dish.sale_price, dish.total_cost, config);
        }
    }

    fn validate(dish: &Dish) -> Result<(), CoreError> {
        require_text("dish name", &dish.name, 2)?;
        require_text("dish category", &dish.category, 1)?;
        if dish.recipe.is_empty() {
            return Err(CoreError::Validation(
                "dish recipe needs at least one ingredient".into(),
            ));
        }
        for line in &dish.recipe {
            require_positive("recipe quantity", line.quantity)?;
        }
        require_positive("sale price", dish.sale_price)
    }
}
