use crate::domain::cart::{CartState, PayerInfo};
use crate::domain::plan::{BillingCycle, Plan};
use crate::domain::ports::SessionStoreBox;
use crate::error::Result;
use tracing::debug;

/// Dependency-injected cart handle, persisted on every mutation.
///
/// The store is read once when the session opens and is write-only
/// afterwards. Readers only ever see fully-applied state: plan and cycle
/// change together, and the pricing engine works from a snapshot copy.
pub struct CartSession {
    cart: CartState,
    store: SessionStoreBox,
}

impl CartSession {
    /// Restores the persisted cart, or starts from defaults.
    pub fn open(store: SessionStoreBox) -> Result<Self> {
        let cart = store.load()?.unwrap_or_default();
        Ok(Self { cart, store })
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Consistent copy for the pricing engine; never a live reference.
    pub fn snapshot(&self) -> CartState {
        self.cart.clone()
    }

    pub fn set_plan(&mut self, plan: Plan, cycle: BillingCycle) -> Result<()> {
        debug!(plan = %plan.id, cycle = %cycle, "plan selected");
        self.cart.set_plan(plan, cycle);
        self.persist()
    }

    /// Observationally idempotent: an unchanged count skips the store write.
    pub fn set_dependents_count(&mut self, count: u32) -> Result<()> {
        if self.cart.dependents_count == count {
            return Ok(());
        }
        debug!(count, "dependents count updated");
        self.cart.set_dependents_count(count);
        self.persist()
    }

    pub fn set_payer(&mut self, payer: PayerInfo) -> Result<()> {
        self.cart.set_payer(payer);
        self.persist()
    }

    pub fn clear(&mut self) -> Result<()> {
        debug!("cart cleared");
        self.cart.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.cart)
    }
}
