use crate::domain::cart::CartState;
use crate::domain::ports::SessionStore;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Session store persisting the cart snapshot as a JSON file.
///
/// A missing file loads as an empty session; every save rewrites the whole
/// blob. The snapshot is small enough that nothing smarter is needed.
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for JsonFileSessionStore {
    fn save(&self, cart: &CartState) -> Result<()> {
        let blob = serde_json::to_string_pretty(cart)?;
        fs::write(&self.path, blob)?;
        debug!(path = %self.path.display(), "cart snapshot written");
        Ok(())
    }

    fn load(&self) -> Result<Option<CartState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&blob)?))
    }
}
