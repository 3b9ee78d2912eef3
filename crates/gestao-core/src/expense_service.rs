use uuid::Uuid;

use gestao_domain::{MonthKey, NonOperationalExpense, Snapshot};

use crate::{
    validation::{require_non_negative, require_text},
    CoreError,
};

pub struct ExpenseService;

impl ExpenseService {
    pub fn add(snapshot: &mut Snapshot, expense: NonOperationalExpense) -> Result<Uuid, CoreError> {
        require_text("expense name", &expense.name, 1)?;
        require_non_negative("installment value", expense.installment_value)?;
        if expense.total_installments == 0
            || expense.installment_index == 0
            || expense.installment_index > expense.total_installments
        {
            return Err(CoreError::Validation(format!(
                "installment {}/{} is out of range",
                expense.installment_index, expense.total_installments
            )));
        }
        Ok(snapshot.add_expense(expense))
    }

    pub fn remove(snapshot: &mut Snapshot, id: Uuid) -> Result<(), CoreError> {
        let before = snapshot.expenses.len();
        snapshot.expenses.retain(|expense| expense.id != id);
        if snapshot.expenses.len() == before {
            return Err(CoreError::ExpenseNotFound(id));
        }
        snapshot.touch();
        Ok(())
    }

    pub fn for_month(snapshot: &Snapshot, month: MonthKey) -> Vec<&NonOperationalExpense> {
        snapshot
            .expenses
            .iter()
            .filter(|expense| expense.month == month)
            .collect()
    }

    pub fn total_for_month(snapshot: &Snapshot, month: MonthKey) -> f64 {
        Self::for_month(snapshot, month)
            .iter()
            .map(|expense| expense.installment_value)
            .sum()
    }
}
