use crate::domain::identity::NationalId;
use crate::domain::plan::{BillingCycle, Plan};
use serde::{Deserialize, Serialize};

/// The financially responsible party.
///
/// Either the holder pays, or a third party identified by all four contact
/// fields; a partially filled payer is unrepresentable.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum PayerInfo {
    #[default]
    Holder,
    ThirdParty {
        full_name: String,
        national_id: NationalId,
        email: String,
        phone: String,
    },
}

/// In-progress checkout selection, alive for one browsing session.
///
/// Plan and cycle are always replaced together, so downstream readers never
/// observe one without the other.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct CartState {
    pub selected_plan: Option<Plan>,
    pub billing_cycle: BillingCycle,
    pub dependents_count: u32,
    pub payer: PayerInfo,
}

impl CartState {
    /// Atomic replace of plan and cycle.
    pub fn set_plan(&mut self, plan: Plan, cycle: BillingCycle) {
        self.selected_plan = Some(plan);
        self.billing_cycle = cycle;
    }

    /// Replaces the count outright with the current list length; never
    /// incremented or decremented independently.
    pub fn set_dependents_count(&mut self, count: u32) {
        self.dependents_count = count;
    }

    pub fn set_payer(&mut self, payer: PayerInfo) {
        self.payer = payer;
    }

    /// Resets plan, dependents and payer. The billing cycle survives a
    /// clear; pending product sign-off on whether it should.
    pub fn clear(&mut self) {
        self.selected_plan = None;
        self.dependents_count = 0;
        self.payer = PayerInfo::Holder;
    }
}
