use crate::domain::catalog::PlanCatalog;
use crate::domain::plan::BillingCycle;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Full financial breakdown for a cart selection.
///
/// All monetary fields are non-negative for non-negative table inputs.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FinancialQuote {
    /// Per-person monthly fee at the matched tier.
    pub base_fee: Decimal,
    /// Per-person enrollment fee (unit price, not the total).
    pub enrollment_fee: Decimal,
    /// Proportional charge for the remainder of the first month.
    pub pro_rata_amount: Decimal,
    /// What each future monthly invoice will be, regardless of cycle.
    pub monthly_total: Decimal,
    /// First-year total after the yearly-commitment discount.
    pub annual_total: Decimal,
    /// Amount charged at checkout for the selected cycle.
    pub total_due_now: Decimal,
    /// Holder plus dependents.
    pub people_count: u32,
}

/// Derives a quote from the plan tier, dependent count, billing cycle and
/// quote date.
///
/// Pure and clock-free: `as_of` is an explicit input, so identical inputs
/// always produce identical output. There is no failure path; unknown plan
/// ids degrade to a zero-priced quote.
pub fn compute_quote(
    catalog: &PlanCatalog,
    plan_id: &str,
    dependents_count: u32,
    billing_cycle: BillingCycle,
    as_of: NaiveDate,
) -> FinancialQuote {
    let people_count = dependents_count + 1;
    let people = Decimal::from(people_count);

    let fee = catalog.monthly_fee(plan_id, dependents_count);
    let enrollment = catalog.enrollment_fee(plan_id, dependents_count);

    // Commercial month: 30 days flat, 28 in February, regardless of the
    // calendar. Billed amounts depend on this exact day base.
    let days_in_month = if as_of.month() == 2 { 28 } else { 30 };
    let remaining_days = (i64::from(days_in_month) - i64::from(as_of.day())).max(0);

    let pro_rata_amount =
        Decimal::from(remaining_days) * (fee / Decimal::from(days_in_month)) * people;

    // First contract year: 11 full months plus the opening pro-rata period,
    // with a flat 10% discount for the yearly commitment.
    let annual_base = fee * people * dec!(11) + pro_rata_amount;
    let annual_total = annual_base * dec!(0.90);

    let enrollment_total = enrollment * people;
    let total_due_now = match billing_cycle {
        BillingCycle::Yearly => annual_total + enrollment_total,
        BillingCycle::Monthly => pro_rata_amount + enrollment_total,
    };

    FinancialQuote {
        base_fee: fee,
        enrollment_fee: enrollment,
        pro_rata_amount,
        monthly_total: fee * people,
        annual_total,
        total_due_now,
        people_count,
    }
}
