use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Global business parameters read by every pricing and reporting engine.
///
/// All rates are percentages (`7.0` means 7 %).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_company_name")]
    pub company_name: String,
    /// Simplified-regime tax charged on all revenue.
    #[serde(default = "Config::default_tax_rate")]
    pub tax_rate: f64,
    /// Processing fee charged on card revenue only.
    #[serde(default = "Config::default_card_fee_rate")]
    pub card_fee_rate: f64,
    /// Estimated share of each sale consumed by fixed costs.
    #[serde(default = "Config::default_fixed_cost_percent")]
    pub fixed_cost_percent: f64,
    #[serde(default = "Config::default_desired_profit_percent")]
    pub desired_profit_percent: f64,
    #[serde(default = "Config::default_daily_goal")]
    pub daily_goal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_whatsapp: Option<String>,
    #[serde(default)]
    pub tutorial_completed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: Self::default_company_name(),
            tax_rate: Self::default_tax_rate(),
            card_fee_rate: Self::default_card_fee_rate(),
            fixed_cost_percent: Self::default_fixed_cost_percent(),
            desired_profit_percent: Self::default_desired_profit_percent(),
            daily_goal: Self::default_daily_goal(),
            support_phone: None,
            support_whatsapp: None,
            tutorial_completed: false,
        }
    }
}

impl Config {
    pub fn default_company_name() -> String {
        "Meu Restaurante".into()
    }

    pub fn default_tax_rate() -> f64 {
        7.0
    }

    pub fn default_card_fee_rate() -> f64 {
        3.0
    }

    pub fn default_fixed_cost_percent() -> f64 {
        30.0
    }

    pub fn default_desired_profit_percent() -> f64 {
        15.0
    }

    pub fn default_daily_goal() -> f64 {
        2000.0
    }

    /// Percentages deducted from every sale price before profit.
    pub fn deduction_percent(&self) -> f64 {
        self.tax_rate + self.card_fee_rate + self.fixed_cost_percent
    }

    /// Percentages the markup divisor has to cover, profit included.
    pub fn markup_percent(&self) -> f64 {
        self.deduction_percent() + self.desired_profit_percent
    }

    /// Checks that the markup denominator stays positive.
    pub fn validate_markup(&self) -> Result<(), ConfigError> {
        let sum = self.markup_percent();
        if !sum.is_finite() || sum >= 100.0 {
            return Err(ConfigError::MarkupUndefined { sum });
        }
        Ok(())
    }

    /// Full validation applied before a configuration is persisted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("tax_rate", self.tax_rate),
            ("card_fee_rate", self.card_fee_rate),
            ("fixed_cost_percent", self.fixed_cost_percent),
            ("desired_profit_percent", self.desired_profit_percent),
        ];
        for (field, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::PercentOutOfRange { field, value });
            }
        }
        if self.daily_goal < 0.0 || self.daily_goal.is_nan() {
            return Err(ConfigError::NegativeGoal(self.daily_goal));
        }
        self.validate_markup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.markup_percent(), 55.0);
        assert_eq!(config.deduction_percent(), 40.0);
    }

    #[test]
    fn markup_sum_at_hundred_is_rejected() {
        let config = Config {
            desired_profit_percent: 60.0,
            ..Config::default()
        };
        match config.validate_markup() {
            Err(ConfigError::MarkupUndefined { sum }) => assert_eq!(sum, 100.0),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_percent_names_the_field() {
        let config = Config {
            card_fee_rate: -1.0,
            ..Config::default()
        };
        let err = config.validate().expect_err("negative rate");
        assert!(err.to_string().contains("card_fee_rate"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"company_name":"Bistro"}"#).unwrap();
        assert_eq!(config.company_name, "Bistro");
        assert_eq!(config.tax_rate, 7.0);
        assert_eq!(config.daily_goal, 2000.0);
    }
}
