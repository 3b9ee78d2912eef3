//! Markup pricing and real-margin analysis.

use gestao_config::{Config, ConfigError};
use gestao_domain::{Dish, DishPricing, Ingredient, MarginHealth};

use crate::{cost_service::CostService, CoreError};

pub struct PricingService;

impl PricingService {
    /// `100 / (100 - (tax + card fee + fixed allocation + desired profit))`.
    ///
    /// Fails with [`CoreError::InvalidConfiguration`] when the percentages
    /// reach 100, where the divisor would be zero or negative.
    pub fn markup_factor(config: &Config) -> Result<f64, CoreError> {
        config.validate_markup().map_err(|err| match err {
            ConfigError::MarkupUndefined { sum } => CoreError::InvalidConfiguration { percent_sum: sum },
            other => CoreError::Config(other),
        })?;
        Ok(100.0 / (100.0 - config.markup_percent()))
    }

    /// Price that covers cost, deductions and the desired profit.
    ///
    /// The configuration is checked before the cost, so an unusable
    /// configuration is reported even for a costless dish.
    pub fn suggested_price(total_cost: f64, config: &Config) -> Result<f64, CoreError> {
        let factor = Self::markup_factor(config)?;
        if total_cost.is_nan() || total_cost <= 0.0 {
            return Ok(0.0);
        }
        Ok(total_cost * factor)
    }

    /// Profit left after cost, tax, card fee and fixed-cost allocation, as a
    /// percentage of `actual_price`. Negative for loss-making prices.
    pub fn real_margin(actual_price: f64, total_cost: f64, config: &Config) -> f64 {
        if actual_price.is_nan() || actual_price <= 0.0 {
            return 0.0;
        }
        let deductions = actual_price * config.deduction_percent() / 100.0;
        let profit = actual_price - total_cost - deductions;
        profit / actual_price * 100.0
    }

    /// A priced dish whose margin falls below the attention threshold.
    pub fn is_margin_too_low(actual_price: f64, margin: f64) -> bool {
        actual_price > 0.0 && margin < MarginHealth::ATTENTION_THRESHOLD
    }

    /// Recomputes every derived figure for `dish` from the live catalog.
    pub fn price_dish(
        dish: &Dish,
        ingredients: &[Ingredient],
        config: &Config,
    ) -> Result<DishPricing, CoreError> {
        let total_cost = CostService::dish_cost(&dish.recipe, ingredients);
        let suggested_price = Self::suggested_price(total_cost, config)?;
        let real_margin = Self::real_margin(dish.sale_price, total_cost, config);
        Ok(DishPricing {
            total_cost,
            suggested_price,
            real_margin,
            health: MarginHealth::from_margin(real_margin),
        })
    }

    /// Writes freshly computed figures into the dish's cached fields.
    pub fn reprice_dish(
        dish: &mut Dish,
        ingredients: &[Ingredient],
        config: &Config,
    ) -> Result<DishPricing, CoreError> {
        let pricing = Self::price_dish(dish, ingredients, config)?;
        dish.total_cost = pricing.total_cost;
        dish.suggested_price = pricing.suggested_price;
        dish.real_margin = pricing.real_margin;
        Ok(pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            tax_rate: 7.0,
            card_fee_rate: 3.0,
            fixed_cost_percent: 30.0,
            desired_profit_percent: 15.0,
            ..Config::default()
        }
    }

    #[test]
    fn markup_factor_for_default_rates() {
        let factor = PricingService::markup_factor(&config()).unwrap();
        assert!((factor - 100.0 / 45.0).abs() < 1e-12);
    }

    #[test]
    fn suggested_price_scenario() {
        let price = PricingService::suggested_price(4.74, &config()).unwrap();
        assert!((price - 10.5333).abs() < 1e-3, "got {price}");
    }

    #[test]
    fn costless_dish_has_no_suggested_price() {
        assert_eq!(PricingService::suggested_price(0.0, &config()).unwrap(), 0.0);
        assert_eq!(PricingService::suggested_price(-3.0, &config()).unwrap(), 0.0);
        assert_eq!(
            PricingService::suggested_price(f64::NAN, &config()).unwrap(),
            0.0
        );
    }

    #[test]
    fn suggested_price_increases_with_cost() {
        let cfg = config();
        let mut previous = 0.0;
        for step in 1..50 {
            let price = PricingService::suggested_price(step as f64 * 0.75, &cfg).unwrap();
            assert!(price > previous);
            previous = price;
        }
    }

    #[test]
    fn percentages_reaching_hundred_are_a_configuration_error() {
        let cfg = Config {
            desired_profit_percent: 60.0,
            ..config()
        };
        let err = PricingService::suggested_price(5.0, &cfg).expect_err("invalid");
        match err {
            CoreError::InvalidConfiguration { percent_sum } => assert_eq!(percent_sum, 100.0),
            other => panic!("unexpected error: {other}"),
        }

        let over = Config {
            desired_profit_percent: 70.0,
            ..config()
        };
        assert!(matches!(
            PricingService::markup_factor(&over),
            Err(CoreError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn real_margin_excludes_desired_profit() {
        // 20.00 price, 5.00 cost, 40 % deductions → 7.00 profit → 35 %.
        let margin = PricingService::real_margin(20.0, 5.0, &config());
        assert!((margin - 35.0).abs() < 1e-9);
    }

    #[test]
    fn real_margin_is_zero_without_price_and_negative_for_losses() {
        assert_eq!(PricingService::real_margin(0.0, 5.0, &config()), 0.0);
        assert!(PricingService::real_margin(6.0, 5.0, &config()) < 0.0);
    }

    #[test]
    fn real_margin_approaches_hundred_minus_deductions() {
        let cfg = config();
        let low = PricingService::real_margin(10.0, 4.0, &cfg);
        let high = PricingService::real_margin(1000.0, 4.0, &cfg);
        assert!(high > low);
        assert!(high < 100.0);
    }

    #[test]
    fn low_margin_flag_requires_a_price() {
        assert!(PricingService::is_margin_too_low(10.0, 12.0));
        assert!(!PricingService::is_margin_too_low(0.0, 0.0));
        assert!(!PricingService::is_margin_too_low(10.0, 15.0));
    }
}
