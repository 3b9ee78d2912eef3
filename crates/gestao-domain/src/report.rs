//! Report shapes produced by the pricing, income statement and period engines.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{common::percent_of, PaymentMethod, Sale};

/// Revenue split across the accepted payment methods.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentBreakdown {
    pub digital_transfer: f64,
    pub card: f64,
    pub cash: f64,
}

impl PaymentBreakdown {
    pub fn from_sales<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> Self {
        sales
            .into_iter()
            .fold(Self::default(), |mut acc, sale| {
                acc.add(sale.payment_method, sale.total);
                acc
            })
    }

    pub fn add(&mut self, method: PaymentMethod, amount: f64) {
        match method {
            PaymentMethod::DigitalTransfer => self.digital_transfer += amount,
            PaymentMethod::Card => self.card += amount,
            PaymentMethod::Cash => self.cash += amount,
        }
    }

    pub fn get(&self, method: PaymentMethod) -> f64 {
        match method {
            PaymentMethod::DigitalTransfer => self.digital_transfer,
            PaymentMethod::Card => self.card,
            PaymentMethod::Cash => self.cash,
        }
    }

    pub fn total(&self) -> f64 {
        self.digital_transfer + self.card + self.cash
    }
}

/// A statement value together with its share of gross revenue.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportLine {
    pub value: f64,
    pub percent: f64,
}

impl ReportLine {
    /// Builds a line whose percentage is taken against `gross_revenue`.
    pub fn of(value: f64, gross_revenue: f64) -> Self {
        Self {
            value,
            percent: percent_of(value, gross_revenue),
        }
    }
}

/// Revenue levels needed to cover fixed costs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BreakEven {
    pub revenue: f64,
    pub revenue_with_desired_profit: f64,
}

/// Monthly income statement (DRE).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DreReport {
    pub gross_revenue: f64,
    pub revenue_by_method: PaymentBreakdown,
    pub cogs: ReportLine,
    pub tax: ReportLine,
    pub card_fee: ReportLine,
    pub variable_costs: ReportLine,
    pub contribution_margin: ReportLine,
    pub fixed_costs: ReportLine,
    pub operating_profit: ReportLine,
    pub non_operational_expenses: ReportLine,
    pub net_result: ReportLine,
    pub break_even: BreakEven,
    pub sale_count: usize,
    pub average_ticket: f64,
}

impl DreReport {
    pub fn outcome(&self) -> DreOutcome {
        let profit = self.operating_profit.value;
        if profit > 0.0 {
            DreOutcome::Profit
        } else if profit < 0.0 {
            DreOutcome::Loss
        } else {
            DreOutcome::BreakEven
        }
    }

    /// Flattens the report into statement rows in presentation order.
    ///
    /// Non-operational expenses and the net result only appear when the month
    /// carries any non-operational expense.
    pub fn statement_lines(&self) -> Vec<StatementLine> {
        let mut lines = vec![
            StatementLine::total(
                "Faturamento Bruto",
                self.gross_revenue,
                Some(if self.gross_revenue > 0.0 { 100.0 } else { 0.0 }),
                0,
            ),
            StatementLine::item("CMV (Custo Mercadoria)", self.cogs),
            StatementLine::item("Simples Nacional", self.tax),
            StatementLine::item("Taxa Cartao", self.card_fee),
            StatementLine::subtotal("Total Custos Variaveis", self.variable_costs),
            StatementLine::subtotal("Margem de Contribuicao", self.contribution_margin),
            StatementLine::subtotal("Total Custos Fixos", self.fixed_costs),
            StatementLine::subtotal("Lucro Operacional", self.operating_profit),
        ];
        if self.non_operational_expenses.value > 0.0 {
            lines.push(StatementLine {
                label: "Emprestimos/Parcelamentos".into(),
                value: self.non_operational_expenses.value,
                percent: None,
                level: 1,
                kind: StatementLineKind::Item,
            });
            lines.push(StatementLine::subtotal("Resultado Liquido", self.net_result));
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DreOutcome {
    Profit,
    Loss,
    BreakEven,
}

impl fmt::Display for DreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DreOutcome::Profit => "Lucro",
            DreOutcome::Loss => "Prejuizo",
            DreOutcome::BreakEven => "Equilibrio",
        };
        f.write_str(label)
    }
}

/// One row of the rendered income statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementLine {
    pub label: String,
    pub value: f64,
    pub percent: Option<f64>,
    /// Indentation depth; detail rows sit one level below their section.
    pub level: u8,
    pub kind: StatementLineKind,
}

impl StatementLine {
    fn item(label: &str, line: ReportLine) -> Self {
        Self {
            label: label.into(),
            value: line.value,
            percent: Some(line.percent),
            level: 1,
            kind: StatementLineKind::Item,
        }
    }

    fn subtotal(label: &str, line: ReportLine) -> Self {
        Self {
            label: label.into(),
            value: line.value,
            percent: Some(line.percent),
            level: 0,
            kind: StatementLineKind::Subtotal,
        }
    }

    fn total(label: &str, value: f64, percent: Option<f64>, level: u8) -> Self {
        Self {
            label: label.into(),
            value,
            percent,
            level,
            kind: StatementLineKind::Total,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatementLineKind {
    Item,
    Subtotal,
    Total,
}

/// Derived pricing figures for a single dish.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DishPricing {
    pub total_cost: f64,
    pub suggested_price: f64,
    pub real_margin: f64,
    pub health: MarginHealth,
}

/// Traffic-light reading of a dish's real margin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MarginHealth {
    Healthy,
    Attention,
    Low,
}

impl MarginHealth {
    pub const HEALTHY_THRESHOLD: f64 = 30.0;
    pub const ATTENTION_THRESHOLD: f64 = 15.0;

    pub fn from_margin(margin: f64) -> Self {
        if margin >= Self::HEALTHY_THRESHOLD {
            MarginHealth::Healthy
        } else if margin >= Self::ATTENTION_THRESHOLD {
            MarginHealth::Attention
        } else {
            MarginHealth::Low
        }
    }
}

impl fmt::Display for MarginHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarginHealth::Healthy => "Healthy",
            MarginHealth::Attention => "Attention",
            MarginHealth::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Totals for a single trading day measured against the daily goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    pub sale_count: usize,
    pub revenue: f64,
    pub average_ticket: f64,
    pub goal: f64,
    pub goal_percent: f64,
    pub goal_met: bool,
    pub by_payment_method: PaymentBreakdown,
}

impl DailySummary {
    pub fn goal_status(&self) -> GoalStatus {
        GoalStatus::from_percent(self.goal_percent)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalStatus {
    Met,
    Close,
    OnTrack,
    Low,
}

impl GoalStatus {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            GoalStatus::Met
        } else if percent >= 80.0 {
            GoalStatus::Close
        } else if percent < 50.0 {
            GoalStatus::Low
        } else {
            GoalStatus::OnTrack
        }
    }
}

/// One day of a dense sales time series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub weekday_label: String,
    pub revenue: f64,
    pub sale_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesSummary {
    pub points: Vec<SeriesPoint>,
    pub total: f64,
    pub daily_average: f64,
}

impl SeriesSummary {
    pub fn from_points(points: Vec<SeriesPoint>) -> Self {
        let total: f64 = points.iter().map(|point| point.revenue).sum();
        let daily_average = if points.is_empty() {
            0.0
        } else {
            total / points.len() as f64
        };
        Self {
            points,
            total,
            daily_average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_hides_net_result_without_expenses() {
        let report = DreReport::default();
        let labels: Vec<_> = report
            .statement_lines()
            .into_iter()
            .map(|line| line.label)
            .collect();
        assert!(!labels.iter().any(|label| label == "Resultado Liquido"));

        let with_expense = DreReport {
            non_operational_expenses: ReportLine::of(500.0, 0.0),
            ..DreReport::default()
        };
        let lines = with_expense.statement_lines();
        let last = lines.last().unwrap();
        assert_eq!(last.label, "Resultado Liquido");
        assert_eq!(last.kind, StatementLineKind::Subtotal);
    }

    #[test]
    fn statement_percentages_are_zero_without_revenue() {
        let lines = DreReport::default().statement_lines();
        assert!(lines.iter().all(|line| line.percent == Some(0.0)));

        let sold = DreReport {
            gross_revenue: 250.0,
            ..DreReport::default()
        };
        assert_eq!(sold.statement_lines()[0].percent, Some(100.0));
    }

    #[test]
    fn margin_health_thresholds() {
        assert_eq!(MarginHealth::from_margin(30.0), MarginHealth::Healthy);
        assert_eq!(MarginHealth::from_margin(29.9), MarginHealth::Attention);
        assert_eq!(MarginHealth::from_margin(15.0), MarginHealth::Attention);
        assert_eq!(MarginHealth::from_margin(-4.0), MarginHealth::Low);
    }

    #[test]
    fn goal_status_thresholds() {
        assert_eq!(GoalStatus::from_percent(120.0), GoalStatus::Met);
        assert_eq!(GoalStatus::from_percent(85.0), GoalStatus::Close);
        assert_eq!(GoalStatus::from_percent(60.0), GoalStatus::OnTrack);
        assert_eq!(GoalStatus::from_percent(10.0), GoalStatus::Low);
    }

    #[test]
    fn series_summary_averages_over_all_days() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let points = vec![
            SeriesPoint {
                date: day,
                weekday_label: "Qua".into(),
                revenue: 90.0,
                sale_count: 2,
            },
            SeriesPoint {
                date: day.succ_opt().unwrap(),
                weekday_label: "Qui".into(),
                revenue: 0.0,
                sale_count: 0,
            },
        ];
        let summary = SeriesSummary::from_points(points);
        assert_eq!(summary.total, 90.0);
        assert_eq!(summary.daily_average, 45.0);
    }
}
