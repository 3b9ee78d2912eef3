//! Monthly income statement (DRE) aggregation.

use tracing::debug;

use gestao_config::Config;
use gestao_domain::{
    common::percent_of, BreakEven, Dish, DreReport, FixedCost, Ingredient, MonthKey,
    NonOperationalExpense, PaymentBreakdown, ReportLine, Sale, Snapshot,
};

use crate::{cost_service::DishCostIndex, period_service::PeriodService};

/// Records feeding one income statement, already narrowed to the period.
#[derive(Debug, Clone, Copy)]
pub struct DreInput<'a> {
    pub sales: &'a [Sale],
    pub dishes: &'a [Dish],
    pub ingredients: &'a [Ingredient],
    pub fixed_costs: &'a [FixedCost],
    pub expenses: &'a [NonOperationalExpense],
}

pub struct DreService;

impl DreService {
    /// Builds the income statement for the supplied records.
    ///
    /// Dish costs are recomputed from `ingredients`, never read from the
    /// cached `Dish::total_cost`. Inactive fixed costs are ignored. Every
    /// percentage is taken against gross revenue and is zero when there is
    /// no revenue.
    pub fn compute(input: &DreInput<'_>, config: &Config) -> DreReport {
        let costs = DishCostIndex::live(input.dishes, input.ingredients);

        let gross_revenue: f64 = input.sales.iter().map(|sale| sale.total).sum();
        let cogs: f64 = input
            .sales
            .iter()
            .flat_map(|sale| sale.items.iter())
            .map(|item| costs.cost_of(item.dish_id) * item.quantity as f64)
            .sum();
        let revenue_by_method = PaymentBreakdown::from_sales(input.sales);

        let tax = gross_revenue * config.tax_rate / 100.0;
        let card_fee = revenue_by_method.card * config.card_fee_rate / 100.0;
        let variable_costs = cogs + tax + card_fee;

        let contribution_margin = gross_revenue - variable_costs;
        let contribution_percent = percent_of(contribution_margin, gross_revenue);

        let fixed_costs: f64 = input
            .fixed_costs
            .iter()
            .filter(|cost| cost.active)
            .map(|cost| cost.monthly_value)
            .sum();
        let operating_profit = contribution_margin - fixed_costs;

        let non_operational: f64 = input
            .expenses
            .iter()
            .map(|expense| expense.installment_value)
            .sum();
        let net_result = operating_profit - non_operational;

        let desired_profit = gross_revenue * config.desired_profit_percent / 100.0;
        let break_even = BreakEven {
            revenue: break_even_revenue(fixed_costs, contribution_percent),
            revenue_with_desired_profit: break_even_revenue(
                fixed_costs + desired_profit,
                contribution_percent,
            ),
        };

        let sale_count = input.sales.len();
        let average_ticket = if sale_count > 0 {
            gross_revenue / sale_count as f64
        } else {
            0.0
        };

        debug!(
            "dre computed over {} sales: gross {:.2}, operating {:.2}",
            sale_count, gross_revenue, operating_profit
        );

        DreReport {
            gross_revenue,
            revenue_by_method,
            cogs: ReportLine::of(cogs, gross_revenue),
            tax: ReportLine::of(tax, gross_revenue),
            card_fee: ReportLine::of(card_fee, gross_revenue),
            variable_costs: ReportLine::of(variable_costs, gross_revenue),
            contribution_margin: ReportLine {
                value: contribution_margin,
                percent: contribution_percent,
            },
            fixed_costs: ReportLine::of(fixed_costs, gross_revenue),
            operating_profit: ReportLine::of(operating_profit, gross_revenue),
            non_operational_expenses: ReportLine::of(non_operational, gross_revenue),
            net_result: ReportLine::of(net_result, gross_revenue),
            break_even,
            sale_count,
            average_ticket,
        }
    }

    /// Statement for `month`: sales dated in the month, expenses keyed to it,
    /// and the currently active fixed costs.
    pub fn for_month(snapshot: &Snapshot, month: MonthKey, config: &Config) -> DreReport {
        let sales: Vec<Sale> = PeriodService::sales_in_month(&snapshot.sales, month)
            .into_iter()
            .cloned()
            .collect();
        let fixed_costs: Vec<FixedCost> = snapshot
            .fixed_costs
            .iter()
            .filter(|cost| cost.active)
            .cloned()
            .collect();
        let expenses: Vec<NonOperationalExpense> = snapshot
            .expenses
            .iter()
            .filter(|expense| expense.month == month)
            .cloned()
            .collect();
        let input = DreInput {
            sales: &sales,
            dishes: &snapshot.dishes,
            ingredients: &snapshot.ingredients,
            fixed_costs: &fixed_costs,
            expenses: &expenses,
        };
        Self::compute(&input, config)
    }
}

/// Revenue at which `to_cover` is paid by the contribution margin; zero when
/// the margin is not positive.
fn break_even_revenue(to_cover: f64, contribution_percent: f64) -> f64 {
    if contribution_percent > 0.0 {
        to_cover / (contribution_percent / 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_period_yields_zeroed_report() {
        let input = DreInput {
            sales: &[],
            dishes: &[],
            ingredients: &[],
            fixed_costs: &[FixedCost::new("Aluguel", 2500.0, "Infraestrutura")],
            expenses: &[],
        };
        let report = DreService::compute(&input, &Config::default());

        assert_eq!(report.gross_revenue, 0.0);
        assert_eq!(report.fixed_costs.value, 2500.0);
        assert_eq!(report.operating_profit.value, -2500.0);
        for line in [
            report.cogs,
            report.tax,
            report.card_fee,
            report.variable_costs,
            report.contribution_margin,
            report.fixed_costs,
            report.operating_profit,
            report.non_operational_expenses,
            report.net_result,
        ] {
            assert_eq!(line.percent, 0.0);
        }
        assert_eq!(report.break_even, BreakEven::default());
        assert_eq!(report.average_ticket, 0.0);
    }

    #[test]
    fn break_even_guard_handles_non_positive_margin() {
        assert_eq!(break_even_revenue(1000.0, 0.0), 0.0);
        assert_eq!(break_even_revenue(1000.0, -12.0), 0.0);
        assert!((break_even_revenue(1000.0, 50.0) - 2000.0).abs() < 1e-9);
    }
}
