use crate::wizard::WizardSnapshot;

/// Fixed storage key for the onboarding draft. Entries under this key are
/// never garbage-collected or expired.
pub const STORAGE_KEY: &str = "onboarding-storage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    StorageUnavailable,
    Corrupt(String),
    Io(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::StorageUnavailable => write!(f, "browser storage unavailable"),
            StoreError::Corrupt(msg) => write!(f, "onboarding draft corrupt: {msg}"),
            StoreError::Io(msg) => write!(f, "onboarding storage error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence boundary for the wizard's surviving state.
pub trait DraftStore {
    fn load(&self) -> Result<Option<WizardSnapshot>, StoreError>;
    fn save(&mut self, snapshot: &WizardSnapshot) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<bool, StoreError>;
}

/// In-memory store for native targets and tests.
#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    snapshot: Option<WizardSnapshot>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn load(&self) -> Result<Option<WizardSnapshot>, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &WizardSnapshot) -> Result<(), StoreError> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<bool, StoreError> {
        Ok(self.snapshot.take().is_some())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{DraftStore, STORAGE_KEY, StoreError};
    use crate::wizard::WizardSnapshot;

    /// Browser local-storage store for the onboarding draft.
    #[derive(Debug)]
    pub struct LocalStorageDraftStore {
        key: String,
    }

    impl LocalStorageDraftStore {
        pub fn new() -> Result<Self, StoreError> {
            Self::with_key(STORAGE_KEY)
        }

        pub fn with_key(key: impl Into<String>) -> Result<Self, StoreError> {
            // Fail fast when storage is unreachable.
            window_local_storage()?;
            Ok(Self { key: key.into() })
        }
    }

    impl DraftStore for LocalStorageDraftStore {
        fn load(&self) -> Result<Option<WizardSnapshot>, StoreError> {
            let storage = window_local_storage()?;
            let raw = storage
                .get_item(&self.key)
                .map_err(|e| StoreError::Io(format!("get_item failed: {:?}", e)))?;

            let Some(raw) = raw else {
                return Ok(None);
            };
            if raw.trim().is_empty() {
                return Ok(None);
            }
            serde_json::from_str::<WizardSnapshot>(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(e.to_string()))
        }

        fn save(&mut self, snapshot: &WizardSnapshot) -> Result<(), StoreError> {
            let storage = window_local_storage()?;
            let raw = serde_json::to_string(snapshot).map_err(|e| StoreError::Io(e.to_string()))?;
            storage
                .set_item(&self.key, &raw)
                .map_err(|e| StoreError::Io(format!("set_item failed: {:?}", e)))
        }

        fn clear(&mut self) -> Result<bool, StoreError> {
            let storage = window_local_storage()?;
            let existed = storage
                .get_item(&self.key)
                .map_err(|e| StoreError::Io(format!("get_item failed: {:?}", e)))?
                .is_some();
            if existed {
                storage
                    .remove_item(&self.key)
                    .map_err(|e| StoreError::Io(format!("remove_item failed: {:?}", e)))?;
            }
            Ok(existed)
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, StoreError> {
        let win = web_sys::window().ok_or(StoreError::StorageUnavailable)?;
        win.local_storage()
            .map_err(|e| StoreError::Io(format!("localStorage error: {:?}", e)))?
            .ok_or(StoreError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStorageDraftStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct LocalStorageDraftStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorageDraftStore {
    pub fn new() -> Result<Self, StoreError> {
        Err(StoreError::StorageUnavailable)
    }

    pub fn with_key(_key: impl Into<String>) -> Result<Self, StoreError> {
        Err(StoreError::StorageUnavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DraftStore for LocalStorageDraftStore {
    fn load(&self) -> Result<Option<WizardSnapshot>, StoreError> {
        Err(StoreError::StorageUnavailable)
    }

    fn save(&mut self, _snapshot: &WizardSnapshot) -> Result<(), StoreError> {
        Err(StoreError::StorageUnavailable)
    }

    fn clear(&mut self) -> Result<bool, StoreError> {
        Err(StoreError::StorageUnavailable)
    }
}
