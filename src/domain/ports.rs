use crate::domain::cart::CartState;
use crate::domain::identity::{NationalId, PostalCode};
use crate::domain::person::PersonRecord;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Address resolved from a postal code by the upstream address source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    pub street: String,
    pub district: String,
    pub locality: String,
    pub region: String,
}

/// National registry lookups keyed by national id.
///
/// `Ok(None)` is a clean miss, `Err` a transport failure. Reads are
/// idempotent and safe to repeat.
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    async fn find_by_national_id(&self, national_id: &NationalId)
        -> Result<Option<PersonRecord>>;
}

/// Postal-code resolution against the upstream address source.
#[async_trait]
pub trait AddressDirectory: Send + Sync {
    async fn find_by_postal_code(&self, postal_code: &PostalCode)
        -> Result<Option<ResolvedAddress>>;
}

/// Session-scoped persistence for the cart snapshot.
///
/// Written on every state mutation, read once when the session opens.
pub trait SessionStore: Send + Sync {
    fn save(&self, cart: &CartState) -> Result<()>;
    fn load(&self) -> Result<Option<CartState>>;
}

pub type PersonDirectoryBox = Box<dyn PersonDirectory>;
pub type AddressDirectoryBox = Box<dyn AddressDirectory>;
pub type SessionStoreBox = Box<dyn SessionStore>;
