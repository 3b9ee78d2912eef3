//! Non-operational expenses such as loan and financing installments.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// One installment of a financing commitment, booked against a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NonOperationalExpense {
    pub id: Uuid,
    pub name: String,
    pub kind: ExpenseKind,
    pub installment_value: f64,
    pub installment_index: u32,
    pub total_installments: u32,
    pub month: MonthKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NonOperationalExpense {
    pub fn new(
        name: impl Into<String>,
        kind: ExpenseKind,
        installment_value: f64,
        month: MonthKey,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            installment_value,
            installment_index: 1,
            total_installments: 1,
            month,
            note: None,
        }
    }

    pub fn with_installments(mut self, index: u32, total: u32) -> Self {
        self.installment_index = index;
        self.total_installments = total;
        self
    }

    /// Installments still due after this one.
    pub fn remaining_installments(&self) -> u32 {
        self.total_installments.saturating_sub(self.installment_index)
    }
}

impl Identifiable for NonOperationalExpense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for NonOperationalExpense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for NonOperationalExpense {
    fn amount(&self) -> f64 {
        self.installment_value
    }
}

impl Displayable for NonOperationalExpense {
    fn display_label(&self) -> String {
        format!(
            "{} ({}/{}) {}",
            self.name, self.installment_index, self.total_installments, self.month
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseKind {
    Loan,
    Investment,
    Installment,
    Other,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseKind::Loan => "Emprestimo",
            ExpenseKind::Investment => "Investimento",
            ExpenseKind::Installment => "Parcelamento",
            ExpenseKind::Other => "Outros",
        };
        f.write_str(label)
    }
}
