//! Linear savings-goal projection

use serde::{Deserialize, Serialize};

use crate::model::GoalEntry;

/// Percent of the target already saved, clamped to `0..=100`.
#[must_use]
pub fn goal_progress(current_amount: f64, target_amount: f64) -> f64 {
    if target_amount <= 0.0 {
        return 0.0;
    }
    (current_amount / target_amount * 100.0).clamp(0.0, 100.0)
}

/// Months of contributions until the target is reached.
///
/// `Some(0)` when already reached, `None` when nothing is being contributed.
#[must_use]
pub fn months_to_goal(
    target_amount: f64,
    current_amount: f64,
    monthly_contribution: f64,
) -> Option<u32> {
    let remaining = target_amount - current_amount;
    if remaining <= 0.0 {
        return Some(0);
    }
    if monthly_contribution <= 0.0 {
        return None;
    }
    Some((remaining / monthly_contribution).ceil() as u32)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub id: String,
    pub name: String,
    pub progress: f64,
    pub remaining: f64,
    pub months_to_goal: Option<u32>,
}

impl GoalProjection {
    #[must_use]
    pub fn for_goal(goal: &GoalEntry) -> Self {
        Self {
            id: goal.id.clone(),
            name: goal.name.clone(),
            progress: goal_progress(goal.current_amount, goal.target_amount),
            remaining: (goal.target_amount - goal.current_amount).max(0.0),
            months_to_goal: months_to_goal(
                goal.target_amount,
                goal.current_amount,
                goal.monthly_contribution,
            ),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.months_to_goal == Some(0)
    }
}

/// Projections for every goal, in priority order.
#[must_use]
pub fn project_goals(goals: &[GoalEntry]) -> Vec<GoalProjection> {
    let mut ordered: Vec<&GoalEntry> = goals.iter().collect();
    ordered.sort_by_key(|g| g.order);
    ordered.into_iter().map(GoalProjection::for_goal).collect()
}
