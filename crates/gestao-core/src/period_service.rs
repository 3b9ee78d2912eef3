//! Daily goal tracking and dense per-day sales series.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use gestao_domain::{
    common::percent_of, DailySummary, MonthKey, PaymentBreakdown, Sale, SeriesPoint,
    SeriesSummary,
};

use crate::{
    format::{BrazilianFormatter, DateFormatter},
    time::Clock,
};

pub struct PeriodService;

impl PeriodService {
    /// Summarises one day's sales against `goal`.
    pub fn daily_summary(sales: &[Sale], goal: f64) -> DailySummary {
        let sale_count = sales.len();
        let revenue: f64 = sales.iter().map(|sale| sale.total).sum();
        let average_ticket = if sale_count > 0 {
            revenue / sale_count as f64
        } else {
            0.0
        };
        DailySummary {
            sale_count,
            revenue,
            average_ticket,
            goal,
            goal_percent: percent_of(revenue, goal),
            goal_met: revenue >= goal,
            by_payment_method: PaymentBreakdown::from_sales(sales),
        }
    }

    /// Exactly `days` points ending at `today`, oldest first, with pt-BR
    /// weekday labels. Days without sales report zero. A window reaching
    /// past the earliest representable date starts at that date instead.
    pub fn sales_series(sales: &[Sale], days: usize, today: NaiveDate) -> Vec<SeriesPoint> {
        Self::sales_series_with(sales, days, today, &BrazilianFormatter)
    }

    pub fn sales_series_with(
        sales: &[Sale],
        days: usize,
        today: NaiveDate,
        formatter: &dyn DateFormatter,
    ) -> Vec<SeriesPoint> {
        let mut per_day: HashMap<NaiveDate, (f64, usize)> = HashMap::new();
        for sale in sales {
            let entry = per_day.entry(sale.date).or_insert((0.0, 0));
            entry.0 += sale.total;
            entry.1 += 1;
        }

        let representable = today.signed_duration_since(NaiveDate::MIN).num_days() as usize + 1;
        (0..days.min(representable))
            .rev()
            .filter_map(|offset| today.checked_sub_signed(Duration::days(offset as i64)))
            .map(|date| {
                let (revenue, sale_count) = per_day.get(&date).copied().unwrap_or((0.0, 0));
                SeriesPoint {
                    date,
                    weekday_label: formatter.weekday_short(date.weekday()),
                    revenue,
                    sale_count,
                }
            })
            .collect()
    }

    /// Series ending at the clock's current day.
    pub fn sales_series_at(sales: &[Sale], days: usize, clock: &dyn Clock) -> Vec<SeriesPoint> {
        Self::sales_series(sales, days, clock.today())
    }

    /// Series plus its total and per-day average.
    pub fn series_summary(sales: &[Sale], days: usize, today: NaiveDate) -> SeriesSummary {
        SeriesSummary::from_points(Self::sales_series(sales, days, today))
    }

    pub fn sales_on(sales: &[Sale], date: NaiveDate) -> Vec<&Sale> {
        sales.iter().filter(|sale| sale.date == date).collect()
    }

    pub fn sales_in_month(sales: &[Sale], month: MonthKey) -> Vec<&Sale> {
        sales.iter().filter(|sale| month.contains(sale.date)).collect()
    }
}
