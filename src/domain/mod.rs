//! Domain model for plan pricing and checkout state.
//!
//! Everything here is pure: the quote engine is a plain function of its
//! inputs, and the collaborator contracts (registry, address source, session
//! storage) are traits implemented under `infrastructure`.

pub mod cart;
pub mod catalog;
pub mod coverage;
pub mod identity;
pub mod person;
pub mod plan;
pub mod ports;
pub mod quote;
