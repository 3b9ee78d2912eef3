use std::collections::BTreeMap;

use uuid::Uuid;

use gestao_domain::{FixedCost, Snapshot};

use crate::{
    validation::{require_non_negative, require_text},
    CoreError,
};

pub struct FixedCostService;

impl FixedCostService {
    pub fn add(snapshot: &mut Snapshot, cost: FixedCost) -> Result<Uuid, CoreError> {
        Self::validate(&cost)?;
        Ok(snapshot.add_fixed_cost(cost))
    }

    pub fn update(snapshot: &mut Snapshot, id: Uuid, changes: FixedCost) -> Result<(), CoreError> {
        Self::validate(&changes)?;
        let cost = snapshot
            .fixed_cost_mut(id)
            .ok_or(CoreError::FixedCostNotFound(id))?;
        cost.name = changes.name;
        cost.monthly_value = changes.monthly_value;
        cost.category = changes.category;
        cost.due_day = changes.due_day;
        cost.recurring = changes.recurring;
        cost.active = changes.active;
        snapshot.touch();
        Ok(())
    }

    pub fn deactivate(snapshot: &mut Snapshot, id: Uuid) -> Result<(), CoreError> {
        let cost = snapshot
            .fixed_cost_mut(id)
            .ok_or(CoreError::FixedCostNotFound(id))?;
        cost.deactivate();
        snapshot.touch();
        Ok(())
    }

    pub fn active(snapshot: &Snapshot) -> Vec<&FixedCost> {
        snapshot
            .fixed_costs
            .iter()
            .filter(|cost| cost.active)
            .collect()
    }

    pub fn monthly_total(snapshot: &Snapshot) -> f64 {
        Self::active(snapshot)
            .iter()
            .map(|cost| cost.monthly_value)
            .sum()
    }

    /// Active monthly totals grouped by category, in category order.
    pub fn totals_by_category(snapshot: &Snapshot) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for cost in Self::active(snapshot) {
            *totals.entry(cost.category.clone()).or_insert(0.0) += cost.monthly_value;
        }
        totals
    }

    fn validate(cost: &FixedCost) -> Result<(), CoreError> {
        require_text("fixed cost name", &cost.name, 1)?;
        require_text("fixed cost category", &cost.category, 1)?;
        require_non_negative("monthly value", cost.monthly_value)?;
        if let Some(day) = cost.due_day {
            if !(1..=31).contains(&day) {
                return Err(CoreError::Validation(format!(
                    "due day must be between 1 and 31, got {day}"
                )));
            }
        }
        Ok(())
    }
}
