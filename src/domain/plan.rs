use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Billing cycle chosen together with the plan.
///
/// Controls which total-due formula applies; per-person fee lookups are
/// unaffected by it.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            other => Err(CheckoutError::Validation(format!(
                "Unknown billing cycle {other:?}, expected monthly or yearly"
            ))),
        }
    }
}

/// Per-person fees tiered by dependent count.
///
/// Index 0 holds the zero-dependent rate; both sequences are non-empty and
/// non-increasing, and counts past the last tier reuse it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FeeSchedule {
    monthly: Vec<Decimal>,
    enrollment: Vec<Decimal>,
}

impl FeeSchedule {
    pub fn new(monthly: Vec<Decimal>, enrollment: Vec<Decimal>) -> Result<Self> {
        for tiers in [&monthly, &enrollment] {
            if tiers.is_empty() {
                return Err(CheckoutError::Validation(
                    "Fee schedule must have at least one tier".to_string(),
                ));
            }
            if tiers.windows(2).any(|pair| pair[1] > pair[0]) {
                return Err(CheckoutError::Validation(
                    "Tier fees must not increase with dependent count".to_string(),
                ));
            }
        }
        Ok(Self {
            monthly,
            enrollment,
        })
    }

    /// Caller guarantees the tier invariants hold.
    pub(crate) fn new_unchecked(monthly: Vec<Decimal>, enrollment: Vec<Decimal>) -> Self {
        Self {
            monthly,
            enrollment,
        }
    }

    fn tier(tiers: &[Decimal], dependents: u32) -> Decimal {
        let index = (dependents as usize).min(tiers.len() - 1);
        tiers[index]
    }

    pub fn monthly_fee(&self, dependents: u32) -> Decimal {
        Self::tier(&self.monthly, dependents)
    }

    pub fn enrollment_fee(&self, dependents: u32) -> Decimal {
        Self::tier(&self.enrollment, dependents)
    }

    pub fn tier_count(&self) -> usize {
        self.monthly.len()
    }
}

/// A purchasable insurance product from the catalog.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Charges per-service fees on top of the monthly fee.
    pub copay: bool,
    pub fees: FeeSchedule,
}

impl Plan {
    /// Reference monthly fee at zero dependents.
    pub fn base_price(&self) -> Decimal {
        self.fees.monthly_fee(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_schedule_rejects_empty_tiers() {
        let result = FeeSchedule::new(vec![], vec![dec!(10)]);
        assert!(matches!(result, Err(CheckoutError::Validation(_))));
    }

    #[test]
    fn test_schedule_rejects_increasing_tiers() {
        let result = FeeSchedule::new(vec![dec!(10), dec!(12)], vec![dec!(5)]);
        assert!(matches!(result, Err(CheckoutError::Validation(_))));
    }

    #[test]
    fn test_schedule_allows_flat_tiers() {
        let schedule = FeeSchedule::new(vec![dec!(5), dec!(5)], vec![dec!(5), dec!(5)]).unwrap();
        assert_eq!(schedule.monthly_fee(0), dec!(5));
        assert_eq!(schedule.monthly_fee(1), dec!(5));
    }

    #[test]
    fn test_tier_clamps_to_last() {
        let schedule = FeeSchedule::new(
            vec![dec!(72), dec!(66), dec!(62), dec!(60)],
            vec![dec!(18), dec!(16), dec!(14), dec!(13)],
        )
        .unwrap();

        assert_eq!(schedule.monthly_fee(3), dec!(60));
        assert_eq!(schedule.monthly_fee(9), dec!(60));
        assert_eq!(schedule.enrollment_fee(9), dec!(13));
    }

    #[test]
    fn test_base_price_is_zero_dependent_tier() {
        let plan = Plan {
            id: "quality".to_string(),
            name: "Quality".to_string(),
            description: String::new(),
            copay: false,
            fees: FeeSchedule::new(vec![dec!(72), dec!(66)], vec![dec!(18)]).unwrap(),
        };
        assert_eq!(plan.base_price(), dec!(72));
    }

    #[test]
    fn test_billing_cycle_parsing() {
        assert_eq!("monthly".parse::<BillingCycle>().unwrap(), BillingCycle::Monthly);
        assert_eq!("yearly".parse::<BillingCycle>().unwrap(), BillingCycle::Yearly);
        assert!("weekly".parse::<BillingCycle>().is_err());
    }

    #[test]
    fn test_billing_cycle_serde_lowercase() {
        assert_eq!(serde_json::to_string(&BillingCycle::Yearly).unwrap(), "\"yearly\"");
        let parsed: BillingCycle = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, BillingCycle::Monthly);
    }
}
