use std::sync::{Arc, Mutex};

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

use super::TimezoneId;

pub const TIMEZONE_STORAGE_KEY: &str = "portfolio-timezone";

/// Key/value persistence for the chosen timezone. Best effort: failures are
/// absorbed by the implementation and never reach the caller.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Option<TimezoneId>;
    fn save(&self, id: &TimezoneId);
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    value: Mutex<Option<TimezoneId>>,
}

impl MemoryPreferences {
    pub fn with_value(id: TimezoneId) -> Self {
        Self {
            value: Mutex::new(Some(id)),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<TimezoneId> {
        self.value.lock().ok().and_then(|v| v.clone())
    }

    fn save(&self, id: &TimezoneId) {
        if let Ok(mut v) = self.value.lock() {
            *v = Some(id.clone());
        }
    }
}

/// Browser local storage through `leptos-use`. Storage errors (quota,
/// private mode) are handled inside `use_local_storage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
pub struct LocalStoragePreferences {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

#[cfg(feature = "hydrate")]
impl LocalStoragePreferences {
    pub fn new() -> Self {
        use codee::string::FromToStringCodec;
        use leptos_use::storage::use_local_storage;

        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(TIMEZONE_STORAGE_KEY);
        Self { stored, set_stored }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStoragePreferences {
    fn load(&self) -> Option<TimezoneId> {
        let value = self.stored.get_untracked();
        if value.trim().is_empty() {
            None
        } else {
            Some(TimezoneId::from(value))
        }
    }

    fn save(&self, id: &TimezoneId) {
        self.set_stored.set(id.to_string());
    }
}

/// The committed timezone and the store it is persisted to.
pub struct Selection {
    current: TimezoneId,
    default: TimezoneId,
    store: Arc<dyn PreferenceStore>,
}

impl Selection {
    /// Starts from the stored preference, or `default` when nothing is stored.
    pub fn restore(store: Arc<dyn PreferenceStore>, default: TimezoneId) -> Self {
        let current = store.load().unwrap_or_else(|| default.clone());
        Self {
            current,
            default,
            store,
        }
    }

    pub fn current(&self) -> &TimezoneId {
        &self.current
    }

    /// Re-reads the store, e.g. once browser storage becomes readable after
    /// hydration.
    pub fn reload(&mut self) -> &TimezoneId {
        self.current = self
            .store
            .load()
            .unwrap_or_else(|| self.default.clone());
        &self.current
    }

    /// Makes `id` current and persists it.
    pub fn commit(&mut self, id: TimezoneId) {
        self.store.save(&id);
        self.current = id;
    }
}
