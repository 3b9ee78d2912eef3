use uuid::Uuid;

use gestao_config::Config;
use gestao_domain::{Ingredient, Snapshot};

use crate::{
    dish_service::DishService,
    validation::{require_non_negative, require_text},
    CoreError,
};

pub struct IngredientService;

impl IngredientService {
    pub fn add(snapshot: &mut Snapshot, ingredient: Ingredient) -> Result<Uuid, CoreError> {
        Self::validate(&ingredient)?;
        Ok(snapshot.add_ingredient(ingredient))
    }

    /// Applies `changes` and refreshes the cached pricing of every dish that
    /// uses the ingredient. Returns how many dishes were refreshed.
    pub fn update(
        snapshot: &mut Snapshot,
        id: Uuid,
        changes: Ingredient,
        config: &Config,
    ) -> Result<usize, CoreError> {
        Self::validate(&changes)?;
        let ingredient = snapshot
            .ingredient_mut(id)
            .ok_or(CoreError::IngredientNotFound(id))?;
        ingredient.name = changes.name;
        ingredient.unit = changes.unit;
        ingredient.unit_price = changes.unit_price;
        ingredient.supplier = changes.supplier;
        ingredient.active = changes.active;
        snapshot.touch();
        Ok(DishService::refresh_dishes_using(snapshot, id, config))
    }

    /// Soft-deletes the ingredient; recipes keep their reference.
    pub fn deactivate(snapshot: &mut Snapshot, id: Uuid) -> Result<(), CoreError> {
        let ingredient = snapshot
            .ingredient_mut(id)
            .ok_or(CoreError::IngredientNotFound(id))?;
        ingredient.deactivate();
        snapshot.touch();
        Ok(())
    }

    pub fn list_active(snapshot: &Snapshot) -> Vec<&Ingredient> {
        snapshot
            .ingredients
            .iter()
            .filter(|ingredient| ingredient.active)
            .collect()
    }

    fn validate(ingredient: &Ingredient) -> Result<(), CoreError> {
        require_text("ingredient name", &ingredient.name, 1)?;
        require_non_negative("unit price", ingredient.unit_price)
    }
}
