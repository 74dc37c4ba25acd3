use crate::domain::plan::{FeeSchedule, Plan};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The plan catalog doubles as the pricing table: every fee lookup is keyed
/// by plan id and dependent count.
///
/// Unknown plan ids price at `Decimal::ZERO` instead of failing. Plan
/// selection is validated upstream, so a miss here prices an empty cart.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// The production catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            Plan {
                id: "quality".to_string(),
                name: "Quality".to_string(),
                description: "Full coverage with no waiting period.".to_string(),
                copay: false,
                fees: FeeSchedule::new_unchecked(
                    vec![dec!(72), dec!(66), dec!(62), dec!(60)],
                    vec![dec!(18), dec!(16), dec!(14), dec!(13)],
                ),
            },
            Plan {
                id: "quality-plus".to_string(),
                name: "Quality Plus".to_string(),
                description: "Same coverage as Quality at a lower fee, with a 90-day waiting period.".to_string(),
                copay: false,
                fees: FeeSchedule::new_unchecked(
                    vec![dec!(48), dec!(44), dec!(42), dec!(40)],
                    vec![dec!(16), dec!(14), dec!(12), dec!(11)],
                ),
            },
            Plan {
                id: "smart".to_string(),
                name: "Smart".to_string(),
                description: "Low monthly fee with small per-service charges.".to_string(),
                copay: true,
                fees: FeeSchedule::new_unchecked(
                    vec![dec!(30), dec!(28), dec!(27), dec!(26)],
                    vec![dec!(14), dec!(12), dec!(10), dec!(9)],
                ),
            },
            Plan {
                id: "kids".to_string(),
                name: "Kids".to_string(),
                description: "Pediatric coverage at low cost.".to_string(),
                copay: false,
                fees: FeeSchedule::new_unchecked(
                    vec![dec!(22), dec!(21), dec!(20), dec!(20)],
                    vec![dec!(12), dec!(10), dec!(8), dec!(8)],
                ),
            },
            Plan {
                id: "light-plus".to_string(),
                name: "Light Plus".to_string(),
                description: "Entry-level preventive coverage.".to_string(),
                copay: true,
                fees: FeeSchedule::new_unchecked(
                    vec![dec!(10), dec!(9), dec!(8), dec!(7)],
                    vec![dec!(5), dec!(5), dec!(5), dec!(5)],
                ),
            },
        ])
    }

    pub fn get(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Per-person monthly fee for the tier matching `dependents`, clamped to
    /// the last tier. Zero for unknown plan ids.
    pub fn monthly_fee(&self, plan_id: &str, dependents: u32) -> Decimal {
        self.get(plan_id)
            .map(|plan| plan.fees.monthly_fee(dependents))
            .unwrap_or(Decimal::ZERO)
    }

    /// Per-person enrollment fee, same tier rules as `monthly_fee`.
    pub fn enrollment_fee(&self, plan_id: &str, dependents: u32) -> Decimal {
        self.get(plan_id)
            .map(|plan| plan.fees.enrollment_fee(dependents))
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
