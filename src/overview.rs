//! Provider-backed views that bundle engine output for a frontend.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use gestao_core::{
    storage::snapshot_warnings, BrazilianFormatter, Clock, CoreError, CostService,
    CurrencyFormatter, DataProvider, DreService, PeriodService, PricingService, SaleService,
};
use gestao_domain::{
    DailySummary, DreOutcome, DreReport, GoalStatus, MarginHealth, MonthKey, SeriesSummary,
    StatementLine, StatementLineKind,
};

/// Income statement for one month plus the context a dashboard shows next
/// to it.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyOverview {
    pub company_name: String,
    pub month: MonthKey,
    pub report: DreReport,
    pub outcome: DreOutcome,
    pub lines: Vec<StatementLine>,
    pub dish_alerts: Vec<DishAlert>,
    pub warnings: Vec<String>,
}

/// An active dish whose live margin sits below the attention threshold.
///
/// `suggested_price` is `None` while the configuration leaves no room for a
/// markup.
#[derive(Debug, Clone, Serialize)]
pub struct DishAlert {
    pub name: String,
    pub sale_price: f64,
    pub suggested_price: Option<f64>,
    pub real_margin: f64,
    pub health: MarginHealth,
}

impl MonthlyOverview {
    pub fn load(provider: &dyn DataProvider, month: MonthKey) -> Result<Self, CoreError> {
        let snapshot = provider.load_snapshot()?;
        let config = provider.load_config()?;

        let report = DreService::for_month(&snapshot, month, &config);
        let mut warnings = snapshot_warnings(&snapshot);
        if let Err(err) = PricingService::markup_factor(&config) {
            warnings.push(err.to_string());
        }

        let mut dish_alerts = Vec::new();
        for dish in snapshot.dishes.iter().filter(|dish| dish.active) {
            let total_cost = CostService::dish_cost(&dish.recipe, &snapshot.ingredients);
            let real_margin = PricingService::real_margin(dish.sale_price, total_cost, &config);
            if PricingService::is_margin_too_low(dish.sale_price, real_margin) {
                dish_alerts.push(DishAlert {
                    name: dish.name.clone(),
                    sale_price: dish.sale_price,
                    suggested_price: PricingService::suggested_price(total_cost, &config).ok(),
                    real_margin,
                    health: MarginHealth::from_margin(real_margin),
                });
            }
        }

        if !warnings.is_empty() {
            warn!("{} data warnings while building {} overview", warnings.len(), month);
        }
        info!(
            "overview for {}: {} sales, outcome {}",
            month,
            report.sale_count,
            report.outcome()
        );

        Ok(Self {
            company_name: config.company_name,
            month,
            outcome: report.outcome(),
            lines: report.statement_lines(),
            report,
            dish_alerts,
            warnings,
        })
    }

    /// Plain-text statement, one row per line, indented by level.
    pub fn render_statement(&self, formatter: &BrazilianFormatter) -> Vec<String> {
        let mut rows = vec![format!(
            "{} - DRE {}",
            self.company_name,
            formatter.month_label(self.month)
        )];
        for line in &self.lines {
            let indent = "  ".repeat(line.level as usize);
            let label = match line.kind {
                StatementLineKind::Item => format!("{indent}(-) {}", line.label),
                StatementLineKind::Subtotal => format!("{indent}(=) {}", line.label),
                StatementLineKind::Total => format!("{indent}{}", line.label),
            };
            let amount = formatter.format_amount(line.value, "BRL");
            match line.percent {
                Some(percent) => rows.push(format!(
                    "{label:<40} {amount:>16} {:>8}",
                    formatter.format_percent(percent, 1)
                )),
                None => rows.push(format!("{label:<40} {amount:>16}")),
            }
        }
        rows.push(format!("Resultado: {}", self.outcome));
        rows
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|err| CoreError::Storage(err.to_string()))
    }
}

/// Today's goal progress and the trailing sales series.
#[derive(Debug, Clone, Serialize)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub summary: DailySummary,
    pub goal_status: GoalStatus,
    pub series: SeriesSummary,
}

impl DayOverview {
    pub fn load(
        provider: &dyn DataProvider,
        clock: &dyn Clock,
        series_days: usize,
    ) -> Result<Self, CoreError> {
        let snapshot = provider.load_snapshot()?;
        let config = provider.load_config()?;
        let date = clock.today();

        let todays_sales: Vec<_> = SaleService::on_date(&snapshot, date)
            .into_iter()
            .cloned()
            .collect();
        let summary = PeriodService::daily_summary(&todays_sales, config.daily_goal);

        Ok(Self {
            date,
            goal_status: summary.goal_status(),
            summary,
            series: PeriodService::series_summary(&snapshot.sales, series_days, date),
        })
    }
}
