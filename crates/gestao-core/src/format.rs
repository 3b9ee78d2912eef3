use chrono::{Datelike, NaiveDate, Weekday};

use gestao_domain::MonthKey;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;

    /// Abbreviated weekday name used as a chart label.
    fn weekday_short(&self, weekday: Weekday) -> String;
}

const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Marco", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// pt-BR conventions: `R$ 1.234,56`, `12,5%`, `31/01/2025`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilianFormatter;

impl BrazilianFormatter {
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let fixed = format!("{:.*}", decimals, value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };
        let mut out = String::new();
        if value < 0.0 && fixed.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
            out.push('-');
        }
        out.push_str(&group_thousands(integer, '.'));
        if let Some(fraction) = fraction {
            out.push(',');
            out.push_str(fraction);
        }
        out
    }

    pub fn format_percent(&self, value: f64, decimals: usize) -> String {
        format!("{}%", self.format_number(value, decimals))
    }

    pub fn month_label(&self, month: MonthKey) -> String {
        let name = MONTH_NAMES[(month.month() as usize - 1) % 12];
        format!("{} {}", name, month.year())
    }
}

impl CurrencyFormatter for BrazilianFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let symbol = match currency {
            "BRL" => "R$",
            other => other,
        };
        let number = self.format_number(amount, 2);
        match number.strip_prefix('-') {
            Some(unsigned) => format!("-{symbol} {unsigned}"),
            None => format!("{symbol} {number}"),
        }
    }
}

impl DateFormatter for BrazilianFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
    }

    fn weekday_short(&self, weekday: Weekday) -> String {
        let label = match weekday {
            Weekday::Sun => "Dom",
            Weekday::Mon => "Seg",
            Weekday::Tue => "Ter",
            Weekday::Wed => "Qua",
            Weekday::Thu => "Qui",
            Weekday::Fri => "Sex",
            Weekday::Sat => "Sab",
        };
        label.to_string()
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_brl_amounts() {
        let fmt = BrazilianFormatter;
        assert_eq!(fmt.format_amount(1234.5, "BRL"), "R$ 1.234,50");
        assert_eq!(fmt.format_amount(-52.0, "BRL"), "-R$ 52,00");
        assert_eq!(fmt.format_amount(0.0, "BRL"), "R$ 0,00");
        assert_eq!(fmt.format_amount(f64::NAN, "BRL"), "R$ 0,00");
        assert_eq!(fmt.format_amount(1_000_000.0, "BRL"), "R$ 1.000.000,00");
    }

    #[test]
    fn negative_values_that_round_to_zero_drop_the_sign() {
        let fmt = BrazilianFormatter;
        assert_eq!(fmt.format_number(-0.001, 2), "0,00");
    }

    #[test]
    fn formats_percent_and_dates() {
        let fmt = BrazilianFormatter;
        assert_eq!(fmt.format_percent(12.345, 1), "12,3%");
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(fmt.format_date(date), "31/01/2025");
        assert_eq!(fmt.weekday_short(date.weekday()), "Sex");
        assert_eq!(
            fmt.month_label(MonthKey::new(2025, 3).unwrap()),
            "Marco 2025"
        );
    }
}
