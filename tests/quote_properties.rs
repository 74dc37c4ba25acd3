use chrono::NaiveDate;
use dental_checkout::domain::catalog::PlanCatalog;
use dental_checkout::domain::plan::BillingCycle;
use dental_checkout::domain::quote::compute_quote;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

#[test]
fn test_monthly_due_never_exceeds_yearly_before_month_end() {
    let catalog = PlanCatalog::builtin();
    for plan in catalog.plans() {
        for day in 1..=27 {
            let as_of = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
            for dependents in 0..6 {
                let monthly =
                    compute_quote(&catalog, &plan.id, dependents, BillingCycle::Monthly, as_of);
                let yearly =
                    compute_quote(&catalog, &plan.id, dependents, BillingCycle::Yearly, as_of);
                assert!(
                    monthly.total_due_now <= yearly.total_due_now,
                    "monthly due {} exceeded yearly due {} for {} with {} dependents on day {}",
                    monthly.total_due_now,
                    yearly.total_due_now,
                    plan.id,
                    dependents,
                    day
                );
            }
        }
    }
}

#[test]
fn test_fee_lookups_are_non_increasing_in_dependents() {
    let catalog = PlanCatalog::builtin();
    let as_of = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    for plan in catalog.plans() {
        let mut previous: Option<(Decimal, Decimal)> = None;
        for dependents in 0..12 {
            let quote =
                compute_quote(&catalog, &plan.id, dependents, BillingCycle::Monthly, as_of);
            if let Some((fee, enrollment)) = previous {
                assert!(quote.base_fee <= fee);
                assert!(quote.enrollment_fee <= enrollment);
            }
            previous = Some((quote.base_fee, quote.enrollment_fee));
        }
    }
}

#[test]
fn test_quotes_are_reproducible_for_sampled_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    let catalog = PlanCatalog::builtin();
    let plan_ids = [
        "quality",
        "quality-plus",
        "smart",
        "kids",
        "light-plus",
        "platinum",
    ];

    for _ in 0..200 {
        let plan = plan_ids.choose(&mut rng).unwrap();
        let dependents = rng.gen_range(0..12);
        let cycle = if rng.gen_bool(0.5) {
            BillingCycle::Monthly
        } else {
            BillingCycle::Yearly
        };
        let month = rng.gen_range(1..=12);
        let day = rng.gen_range(1..=28);
        let as_of = NaiveDate::from_ymd_opt(2026, month, day).unwrap();

        let first = compute_quote(&catalog, plan, dependents, cycle, as_of);
        let second = compute_quote(&catalog, plan, dependents, cycle, as_of);

        assert_eq!(first, second);
        assert_eq!(first.people_count, dependents + 1);
        assert!(first.total_due_now >= Decimal::ZERO);
        assert!(first.pro_rata_amount >= Decimal::ZERO);
        assert!(first.annual_total >= Decimal::ZERO);
    }
}
