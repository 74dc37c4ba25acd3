//! Application layer orchestrating the checkout flow.
//!
//! `CartSession` wraps the cart state with persistence on every mutation,
//! and `CheckoutWizard` sequences the three-step flow on top of it. Both are
//! dependency-injected with the collaborator ports from `domain::ports`.

pub mod lookup;
pub mod session;
pub mod wizard;
