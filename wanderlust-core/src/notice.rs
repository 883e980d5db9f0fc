//! Short user-facing messages emitted by plan actions (toast content).
use serde::{Deserialize, Serialize};

use crate::plan::{Plan, PlanStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
        }
    }

    #[must_use]
    pub fn added(plan: &Plan) -> Self {
        Self::new(
            "Added to your plan!",
            format!("{} has been added to your travel plan.", plan.name()),
        )
    }

    #[must_use]
    pub fn duplicate(plan: &Plan) -> Self {
        Self::new(
            "Already in your plan",
            format!("{} is already in your travel plan.", plan.name()),
        )
    }

    #[must_use]
    pub fn removed(plan: &Plan) -> Self {
        Self::new(
            "Removed from your plan",
            format!("{} has been removed from your travel plan.", plan.name()),
        )
    }

    #[must_use]
    pub fn status_changed(plan: &Plan, status: PlanStatus) -> Self {
        let description = match status {
            PlanStatus::Selected => format!("{} is back on your wishlist.", plan.name()),
            PlanStatus::Ongoing => format!("Enjoy your trip to {}!", plan.name()),
            PlanStatus::Completed => format!("{} is marked as completed.", plan.name()),
        };
        Self::new("Plan updated", description)
    }
}
