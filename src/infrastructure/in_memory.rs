use crate::domain::cart::CartState;
use crate::domain::identity::{NationalId, PostalCode};
use crate::domain::person::PersonRecord;
use crate::domain::ports::{AddressDirectory, PersonDirectory, ResolvedAddress, SessionStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage key for the cart snapshot blob.
pub const CART_STORAGE_KEY: &str = "checkout-cart";

/// Session store over a shared in-memory key-value map.
///
/// `Clone` shares the underlying map, so a store handed to a second session
/// simulates the same browser session surviving a page reload.
#[derive(Clone)]
pub struct InMemorySessionStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
    key: String,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            blobs: Arc::default(),
            key: CART_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            blobs: Arc::default(),
            key: key.into(),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, cart: &CartState) -> Result<()> {
        let blob = serde_json::to_string(cart)?;
        let mut blobs = self.blobs.write().unwrap_or_else(|e| e.into_inner());
        blobs.insert(self.key.clone(), blob);
        Ok(())
    }

    fn load(&self) -> Result<Option<CartState>> {
        let blobs = self.blobs.read().unwrap_or_else(|e| e.into_inner());
        match blobs.get(&self.key) {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }
}

/// In-memory national registry, for tests and fixtures.
///
/// `Clone` shares the underlying records, so a test can keep a handle and
/// insert entries behind a wizard-owned box.
#[derive(Default, Clone)]
pub struct InMemoryPersonDirectory {
    people: Arc<tokio::sync::RwLock<HashMap<NationalId, PersonRecord>>>,
}

impl InMemoryPersonDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, national_id: NationalId, record: PersonRecord) {
        let mut people = self.people.write().await;
        people.insert(national_id, record);
    }
}

#[async_trait]
impl PersonDirectory for InMemoryPersonDirectory {
    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<PersonRecord>> {
        let people = self.people.read().await;
        Ok(people.get(national_id).cloned())
    }
}

/// In-memory postal-code directory, for tests and fixtures.
#[derive(Default, Clone)]
pub struct InMemoryAddressDirectory {
    addresses: Arc<tokio::sync::RwLock<HashMap<PostalCode, ResolvedAddress>>>,
}

impl InMemoryAddressDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, postal_code: PostalCode, address: ResolvedAddress) {
        let mut addresses = self.addresses.write().await;
        addresses.insert(postal_code, address);
    }
}

#[async_trait]
impl AddressDirectory for InMemoryAddressDirectory {
    async fn find_by_postal_code(
        &self,
        postal_code: &PostalCode,
    ) -> Result<Option<ResolvedAddress>> {
        let addresses = self.addresses.read().await;
        Ok(addresses.get(postal_code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_store_round_trip() {
        let store = InMemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        let cart = CartState::default();
        store.save(&cart).unwrap();
        assert_eq!(store.load().unwrap(), Some(cart));
    }

    #[test]
    fn test_cloned_store_shares_storage() {
        let store = InMemorySessionStore::new();
        let clone = store.clone();

        store.save(&CartState::default()).unwrap();
        assert!(clone.load().unwrap().is_some());
    }

    #[test]
    fn test_stores_with_distinct_keys_are_isolated() {
        let first = InMemorySessionStore::with_key("cart-a");
        let second = InMemorySessionStore::with_key("cart-b");

        first.save(&CartState::default()).unwrap();
        assert!(second.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_person_directory_lookup() {
        let directory = InMemoryPersonDirectory::new();
        let id = NationalId::parse("12345678909").unwrap();
        let record =
            PersonRecord::from_registry("Maria Souza", None, "03/02/1996", 2, None).unwrap();

        directory.insert(id.clone(), record.clone()).await;

        let found = directory.find_by_national_id(&id).await.unwrap();
        assert_eq!(found, Some(record));

        let missing = NationalId::parse("98765432100").unwrap();
        assert!(directory.find_by_national_id(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_address_directory_lookup() {
        let directory = InMemoryAddressDirectory::new();
        let code = PostalCode::parse("74000000").unwrap();
        let address = ResolvedAddress {
            street: "Rua 7 de Setembro".to_string(),
            district: "Centro".to_string(),
            locality: "Goiânia".to_string(),
            region: "GO".to_string(),
        };

        directory.insert(code.clone(), address.clone()).await;

        let found = directory.find_by_postal_code(&code).await.unwrap();
        assert_eq!(found, Some(address));
    }
}
