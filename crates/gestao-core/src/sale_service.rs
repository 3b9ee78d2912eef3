use chrono::NaiveDate;
use uuid::Uuid;

use gestao_domain::{MonthKey, PaymentMethod, Sale, SaleItem, Snapshot};

use crate::{period_service::PeriodService, CoreError};

pub struct SaleService;

impl SaleService {
    /// Stores a sale after recomputing its subtotals and total from the lines.
    pub fn record(snapshot: &mut Snapshot, mut sale: Sale) -> Result<Uuid, CoreError> {
        Self::validate(&sale)?;
        sale.recalculate();
        Ok(snapshot.add_sale(sale))
    }

    /// Rings up `(dish id, quantity)` pairs at each dish's current sale price.
    /// Zero quantities are skipped.
    pub fn sell(
        snapshot: &mut Snapshot,
        date: NaiveDate,
        payment_method: PaymentMethod,
        lines: &[(Uuid, u32)],
    ) -> Result<Uuid, CoreError> {
        let mut items = Vec::with_capacity(lines.len());
        for &(dish_id, quantity) in lines.iter().filter(|(_, quantity)| *quantity > 0) {
            let dish = snapshot
                .dish(dish_id)
                .ok_or(CoreError::DishNotFound(dish_id))?;
            items.push(SaleItem::for_dish(dish, quantity));
        }
        Self::record(snapshot, Sale::new(date, payment_method, items))
    }

    pub fn update(snapshot: &mut Snapshot, id: Uuid, changes: Sale) -> Result<(), CoreError> {
        Self::validate(&changes)?;
        let sale = snapshot.sale_mut(id).ok_or(CoreError::SaleNotFound(id))?;
        sale.date = changes.date;
        sale.time = changes.time;
        sale.payment_method = changes.payment_method;
        sale.items = changes.items;
        sale.note = changes.note;
        sale.recalculate();
        snapshot.touch();
        Ok(())
    }

    pub fn delete(snapshot: &mut Snapshot, id: Uuid) -> Result<(), CoreError> {
        let before = snapshot.sales.len();
        snapshot.sales.retain(|sale| sale.id != id);
        if snapshot.sales.len() == before {
            return Err(CoreError::SaleNotFound(id));
        }
        snapshot.touch();
        Ok(())
    }

    pub fn on_date(snapshot: &Snapshot, date: NaiveDate) -> Vec<&Sale> {
        PeriodService::sales_on(&snapshot.sales, date)
    }

    pub fn in_month(snapshot: &Snapshot, month: MonthKey) -> Vec<&Sale> {
        PeriodService::sales_in_month(&snapshot.sales, month)
    }

    fn validate(sale: &Sale) -> Result<(), CoreError> {
        if sale.items.is_empty() {
            return Err(CoreError::Validation(
                "sale needs at least one item".into(),
            ));
        }
        if sale.items.iter().any(|item| item.quantity == 0) {
            return Err(CoreError::Validation(
                "sale item quantity must be at least 1".into(),
            ));
        }
        if sale
            .items
            .iter()
            .any(|item| !item.unit_price.is_finite() || item.unit_price < 0.0)
        {
            return Err(CoreError::Validation(
                "sale item price must be a non-negative amount".into(),
            ));
        }
        Ok(())
    }
}
