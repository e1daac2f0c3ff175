mod catalog;
mod selection;
mod selector;

pub use catalog::{
    normalize, TimezoneCatalog, FALLBACK_TIMEZONES, GLOBAL_TIMEZONE_CATALOG, MAX_SUGGESTIONS,
};
#[cfg(feature = "hydrate")]
pub use selection::LocalStoragePreferences;
pub use selection::{MemoryPreferences, PreferenceStore, Selection, TIMEZONE_STORAGE_KEY};
pub use selector::{Key, SearchState, TimezoneSelector};

use std::fmt;

use serde::{Deserialize, Serialize};

/// An IANA timezone name such as `America/New_York`.
///
/// Equality and matching always use the raw name; [`TimezoneId::label`] is
/// only for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimezoneId(String);

impl TimezoneId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> String {
        format_label(&self.0)
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimezoneId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TimezoneId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// `America/New_York` -> `America / New York`
pub fn format_label(name: &str) -> String {
    name.replace('_', " ").replace('/', " / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("America/New_York"), "America / New York");
        assert_eq!(
            format_label("America/Argentina/Buenos_Aires"),
            "America / Argentina / Buenos Aires"
        );
        assert_eq!(format_label("UTC"), "UTC");
    }

    #[test]
    fn test_label_does_not_affect_equality() {
        let id = TimezoneId::from("Europe/London");
        assert_eq!(id.label(), "Europe / London");
        assert_eq!(id, TimezoneId::new("Europe/London".to_string()));
        assert_ne!(id, TimezoneId::from("Europe / London"));
        assert_eq!(id.to_string(), "Europe/London");
    }
}
