//! Sale records, their line items, and payment methods.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, Dish};

/// A completed customer order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub payment_method: PaymentMethod,
    pub items: Vec<SaleItem>,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Sale {
    /// Builds a sale whose total is the sum of the item subtotals.
    pub fn new(date: NaiveDate, payment_method: PaymentMethod, items: Vec<SaleItem>) -> Self {
        let mut sale = Self {
            id: Uuid::new_v4(),
            date,
            time: None,
            payment_method,
            items,
            total: 0.0,
            note: None,
        };
        sale.recalculate();
        sale
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Refreshes every line subtotal and the sale total.
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.recalculate();
        }
        self.total = self.items.iter().map(|item| item.subtotal).sum();
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

impl Identifiable for Sale {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Sale {
    fn amount(&self) -> f64 {
        self.total
    }
}

impl Displayable for Sale {
    fn display_label(&self) -> String {
        format!("sale:{} {} [{}]", self.id, self.date, self.payment_method)
    }
}

/// A dish and quantity sold within a [`Sale`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleItem {
    pub dish_id: Uuid,
    #[serde(default)]
    pub dish_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl SaleItem {
    pub fn new(dish_id: Uuid, dish_name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            dish_id,
            dish_name: dish_name.into(),
            quantity,
            unit_price,
            subtotal: unit_price * quantity as f64,
        }
    }

    /// Prices the line at the dish's current sale price.
    pub fn for_dish(dish: &Dish, quantity: u32) -> Self {
        Self::new(dish.id, dish.name.clone(), quantity, dish.sale_price)
    }

    pub fn recalculate(&mut self) {
        self.subtotal = self.unit_price * self.quantity as f64;
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Instant bank transfer (PIX).
    DigitalTransfer,
    Card,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::DigitalTransfer,
        PaymentMethod::Card,
        PaymentMethod::Cash,
    ];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::DigitalTransfer => "PIX",
            PaymentMethod::Card => "Cartao",
            PaymentMethod::Cash => "Dinheiro",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_total_is_sum_of_subtotals() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let items = vec![
            SaleItem::new(Uuid::new_v4(), "Prato Feito", 2, 18.0),
            SaleItem::new(Uuid::new_v4(), "Suco", 1, 7.5),
        ];
        let sale = Sale::new(date, PaymentMethod::Cash, items);

        assert_eq!(sale.items[0].subtotal, 36.0);
        assert_eq!(sale.total, 43.5);
        assert_eq!(sale.item_count(), 3);
    }

    #[test]
    fn recalculate_discards_stale_subtotals() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut sale = Sale::new(
            date,
            PaymentMethod::Card,
            vec![SaleItem::new(Uuid::new_v4(), "Lanche", 1, 12.0)],
        );
        sale.items[0].quantity = 3;
        sale.items[0].subtotal = 999.0;
        sale.recalculate();

        assert_eq!(sale.total, 36.0);
    }

    #[test]
    fn payment_method_serializes_screaming_case() {
        let json = serde_json::to_string(&PaymentMethod::DigitalTransfer).unwrap();
        assert_eq!(json, "\"DIGITAL_TRANSFER\"");
    }
}
