//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! Frontends that only need the figures call these instead of reaching for
//! the individual services.

use gestao_config::Config;
use gestao_domain::{
    DailySummary, Dish, DreReport, FixedCost, Ingredient, NonOperationalExpense, RecipeLine, Sale,
    SeriesPoint,
};

use crate::{
    cost_service::CostService,
    dre_service::{DreInput, DreService},
    period_service::PeriodService,
    pricing_service::PricingService,
    time::{Clock, SystemClock},
    CoreError,
};

/// Ingredient cost of `recipe` priced against the current catalog.
pub fn compute_dish_cost(recipe: &[RecipeLine], ingredients: &[Ingredient]) -> f64 {
    CostService::dish_cost(recipe, ingredients)
}

/// Markup price for a dish costing `total_cost`.
pub fn suggested_price(total_cost: f64, config: &Config) -> Result<f64, CoreError> {
    PricingService::suggested_price(total_cost, config)
}

/// Margin percentage left at `actual_price`.
pub fn real_margin(actual_price: f64, total_cost: f64, config: &Config) -> f64 {
    PricingService::real_margin(actual_price, total_cost, config)
}

/// Income statement over records the caller already narrowed to one period.
pub fn compute_dre(
    sales: &[Sale],
    dishes: &[Dish],
    ingredients: &[Ingredient],
    fixed_costs: &[FixedCost],
    expenses: &[NonOperationalExpense],
    config: &Config,
) -> DreReport {
    let input = DreInput {
        sales,
        dishes,
        ingredients,
        fixed_costs,
        expenses,
    };
    DreService::compute(&input, config)
}

pub fn daily_summary(sales: &[Sale], goal: f64) -> DailySummary {
    PeriodService::daily_summary(sales, goal)
}

/// `days` entries ending today on the local calendar.
pub fn sales_series(sales: &[Sale], days: usize) -> Vec<SeriesPoint> {
    sales_series_at(sales, days, &SystemClock)
}

pub fn sales_series_at(sales: &[Sale], days: usize, clock: &dyn Clock) -> Vec<SeriesPoint> {
    PeriodService::sales_series_at(sales, days, clock)
}
