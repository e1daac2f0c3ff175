use std::sync::{Arc, LazyLock};

use super::TimezoneId;

/// Upper bound on suggestions returned by a search. Order follows the catalog.
pub const MAX_SUGGESTIONS: usize = 8;

/// Used when the host cannot enumerate its timezone database.
pub const FALLBACK_TIMEZONES: [&str; 6] = [
    "America/New_York",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Asia/Tokyo",
    "UTC",
];

pub static GLOBAL_TIMEZONE_CATALOG: LazyLock<Arc<TimezoneCatalog>> =
    LazyLock::new(|| Arc::new(TimezoneCatalog::system()));

#[derive(Debug, Clone)]
struct Entry {
    id: TimezoneId,
    normalized: String,
}

/// Sorted, duplicate-free and never empty.
#[derive(Debug, Clone)]
pub struct TimezoneCatalog {
    entries: Vec<Entry>,
}

impl TimezoneCatalog {
    /// Catalog backed by the IANA database compiled into `chrono-tz`,
    /// limited to geographic `Area/Location` zones plus `UTC`.
    pub fn system() -> Self {
        Self::from_source(Some(
            chrono_tz::TZ_VARIANTS
                .iter()
                .map(|tz| tz.name())
                .filter(|name| is_geographic(name))
                .map(String::from),
        ))
    }

    /// Builds a catalog from an enumeration capability. `None`, or a source
    /// that yields nothing, falls back to [`FALLBACK_TIMEZONES`].
    pub fn from_source<I>(source: Option<I>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut names = source
            .map(|s| {
                s.into_iter()
                    .filter(|name| !name.trim().is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        if names.is_empty() {
            log::debug!("timezone enumeration unavailable, using fallback list");
            names = FALLBACK_TIMEZONES.iter().map(|s| s.to_string()).collect();
        }
        names.sort();
        names.dedup();

        let entries = names
            .into_iter()
            .map(|name| Entry {
                normalized: normalize(&name),
                id: TimezoneId::from(name),
            })
            .collect();
        Self { entries }
    }

    pub fn list(&self) -> Vec<TimezoneId> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &TimezoneId) -> bool {
        self.entries
            .binary_search_by(|e| e.id.cmp(id))
            .is_ok()
    }

    /// Substring search over normalized names, truncated to
    /// [`MAX_SUGGESTIONS`]. An empty normalized query matches nothing.
    pub fn search(&self, query: &str) -> Vec<TimezoneId> {
        let q = normalize(query);
        if q.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| e.normalized.contains(&q))
            .take(MAX_SUGGESTIONS)
            .map(|e| e.id.clone())
            .collect()
    }
}

const GEOGRAPHIC_AREAS: [&str; 10] = [
    "Africa",
    "America",
    "Antarctica",
    "Arctic",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
];

/// Drops legacy aliases such as `US/Eastern`, `EST5EDT` and `Etc/GMT+5`.
fn is_geographic(name: &str) -> bool {
    name == "UTC"
        || name
            .split_once('/')
            .is_some_and(|(area, _)| GEOGRAPHIC_AREAS.contains(&area))
}

/// Lower-cases and strips whitespace and `_`, so "new york" and "New_York"
/// compare equal.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
