use std::sync::Arc;

use super::{TimezoneCatalog, TimezoneId};

/// Keys the selector reacts to. Everything else is typed text and arrives
/// through [`TimezoneSelector::on_query_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match value {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Closed,
    Open {
        query: String,
        matches: Vec<TimezoneId>,
        highlighted: Option<usize>,
    },
}

impl SearchState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn matches(&self) -> &[TimezoneId] {
        match self {
            Self::Open { matches, .. } => matches,
            Self::Closed => &[],
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self {
            Self::Open { highlighted, .. } => *highlighted,
            Self::Closed => None,
        }
    }
}

/// Search-as-you-type picker over a [`TimezoneCatalog`].
///
/// Holds the text shown in the input, the committed identifier and the
/// [`SearchState`]. Every handler runs to completion synchronously; a commit
/// is reported by returning the new identifier, and persisting it is left to
/// the caller.
#[derive(Debug, Clone)]
pub struct TimezoneSelector {
    catalog: Arc<TimezoneCatalog>,
    committed: TimezoneId,
    text: String,
    state: SearchState,
}

impl TimezoneSelector {
    pub fn new(catalog: Arc<TimezoneCatalog>, committed: TimezoneId) -> Self {
        let text = committed.label();
        Self {
            catalog,
            committed,
            text,
            state: SearchState::Closed,
        }
    }

    /// Text currently displayed in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn committed(&self) -> &TimezoneId {
        &self.committed
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn matches(&self) -> &[TimezoneId] {
        self.state.matches()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted()
    }

    pub fn on_query_change(&mut self, text: &str) -> &SearchState {
        self.text = text.to_string();
        self.state = SearchState::Open {
            query: text.to_string(),
            matches: self.catalog.search(text),
            highlighted: None,
        };
        &self.state
    }

    /// Focusing always starts a fresh search.
    pub fn on_focus(&mut self) -> &SearchState {
        self.text.clear();
        self.state = SearchState::Open {
            query: String::new(),
            matches: Vec::new(),
            highlighted: None,
        };
        &self.state
    }

    /// Returns the newly committed identifier when the key commits one.
    pub fn on_key(&mut self, key: Key) -> Option<TimezoneId> {
        match key {
            Key::ArrowDown => {
                self.step_highlight(|i, len| match i {
                    Some(i) if i + 1 < len => i + 1,
                    _ => 0,
                });
                None
            }
            Key::ArrowUp => {
                self.step_highlight(|i, len| match i {
                    Some(i) if i > 0 => i - 1,
                    _ => len - 1,
                });
                None
            }
            Key::Enter => {
                let SearchState::Open {
                    matches,
                    highlighted,
                    ..
                } = &self.state
                else {
                    return None;
                };
                let chosen = highlighted
                    .and_then(|i| matches.get(i))
                    .or_else(|| matches.first())
                    .cloned()?;
                Some(self.commit(chosen))
            }
            Key::Escape => {
                self.revert();
                None
            }
            Key::Other => None,
        }
    }

    /// Pointer hover over the suggestion at `index`.
    pub fn on_hover(&mut self, index: usize) {
        if let SearchState::Open {
            matches,
            highlighted,
            ..
        } = &mut self.state
        {
            if index < matches.len() {
                *highlighted = Some(index);
            }
        }
    }

    /// Focus left the widget without a commit.
    pub fn on_blur_outside(&mut self) -> &SearchState {
        self.revert();
        &self.state
    }

    /// Pointer selection of one of the current suggestions. Identifiers
    /// that are not among the open suggestions are ignored.
    pub fn select_direct(&mut self, id: &TimezoneId) -> Option<TimezoneId> {
        if !self.matches().contains(id) {
            return None;
        }
        Some(self.commit(id.clone()))
    }

    /// The committed value changed elsewhere (e.g. restored from storage).
    pub fn set_committed(&mut self, id: TimezoneId) {
        if !self.is_open() {
            self.text = id.label();
        }
        self.committed = id;
    }

    fn step_highlight(&mut self, next: impl Fn(Option<usize>, usize) -> usize) {
        if let SearchState::Open {
            matches,
            highlighted,
            ..
        } = &mut self.state
        {
            if matches.is_empty() {
                return;
            }
            *highlighted = Some(next(*highlighted, matches.len()));
        }
    }

    fn commit(&mut self, id: TimezoneId) -> TimezoneId {
        log::debug!("timezone selected: {id}");
        self.text = id.label();
        self.state = SearchState::Closed;
        self.committed = id.clone();
        id
    }

    fn revert(&mut self) {
        self.text = self.committed.label();
        self.state = SearchState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<TimezoneCatalog> {
        Arc::new(TimezoneCatalog::from_source(Some(
            [
                "America/New_York",
                "America/North_Dakota/New_Salem",
                "Europe/London",
                "Europe/Paris",
                "Asia/Tokyo",
                "UTC",
            ]
            .into_iter()
            .map(String::from),
        )))
    }

    fn selector() -> TimezoneSelector {
        TimezoneSelector::new(catalog(), TimezoneId::from("Europe/London"))
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!(Key::from("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from("Enter"), Key::Enter);
        assert_eq!(Key::from("Escape"), Key::Escape);
        assert_eq!(Key::from("a"), Key::Other);
        assert_eq!(Key::from("Tab"), Key::Other);
        assert_eq!(Key::from("Down"), Key::Other);
        assert_eq!(Key::from("Esc"), Key::Other);
    }

    #[test]
    fn test_initial_state() {
        let s = selector();
        assert_eq!(s.state(), &SearchState::Closed);
        assert_eq!(s.text(), "Europe / London");
        assert_eq!(s.committed().as_str(), "Europe/London");
    }

    #[test]
    fn test_query_change_opens_and_filters() {
        let mut s = selector();
        s.on_query_change("new york");
        assert!(s.is_open());
        assert_eq!(s.text(), "new york");
        assert_eq!(s.matches(), &[TimezoneId::from("America/New_York")]);
        assert_eq!(s.highlighted(), None);

        s.on_query_change("eu");
        assert_eq!(s.matches().len(), 2);
    }

    #[test]
    fn test_query_change_resets_highlight() {
        let mut s = selector();
        s.on_query_change("new");
        s.on_key(Key::ArrowDown);
        assert_eq!(s.highlighted(), Some(0));
        s.on_query_change("new_");
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_whitespace_query_has_no_matches() {
        let mut s = selector();
        s.on_query_change("   ");
        assert!(s.is_open());
        assert!(s.matches().is_empty());
    }

    #[test]
    fn test_focus_starts_fresh_search() {
        let mut s = selector();
        s.on_query_change("tokyo");
        s.on_key(Key::ArrowDown);
        s.on_focus();
        assert_eq!(s.text(), "");
        assert!(s.is_open());
        assert!(s.matches().is_empty());
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_arrow_down_wraps() {
        let mut s = selector();
        s.on_query_change("new");
        assert_eq!(s.matches().len(), 2);
        s.on_key(Key::ArrowDown);
        assert_eq!(s.highlighted(), Some(0));
        s.on_key(Key::ArrowDown);
        assert_eq!(s.highlighted(), Some(1));
        s.on_key(Key::ArrowDown);
        assert_eq!(s.highlighted(), Some(0));
    }

    #[test]
    fn test_arrow_up_wraps() {
        let mut s = selector();
        s.on_query_change("new");
        s.on_key(Key::ArrowUp);
        assert_eq!(s.highlighted(), Some(1));
        s.on_key(Key::ArrowUp);
        assert_eq!(s.highlighted(), Some(0));
        s.on_key(Key::ArrowUp);
        assert_eq!(s.highlighted(), Some(1));
    }

    #[test]
    fn test_arrows_noop_when_empty_or_closed() {
        let mut s = selector();
        s.on_key(Key::ArrowDown);
        assert_eq!(s.state(), &SearchState::Closed);

        s.on_query_change("zzz");
        s.on_key(Key::ArrowDown);
        s.on_key(Key::ArrowUp);
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_enter_commits_first_without_highlight() {
        let mut s = selector();
        s.on_query_change("new");
        let committed = s.on_key(Key::Enter);
        assert_eq!(committed, Some(TimezoneId::from("America/New_York")));
        assert_eq!(s.state(), &SearchState::Closed);
        assert_eq!(s.text(), "America / New York");
        assert_eq!(s.committed().as_str(), "America/New_York");
    }

    #[test]
    fn test_enter_commits_highlighted() {
        let mut s = selector();
        s.on_query_change("new");
        s.on_key(Key::ArrowUp);
        let committed = s.on_key(Key::Enter);
        assert_eq!(
            committed,
            Some(TimezoneId::from("America/North_Dakota/New_Salem"))
        );
        assert_eq!(s.text(), "America / North Dakota / New Salem");
    }

    #[test]
    fn test_enter_noop_without_matches() {
        let mut s = selector();
        s.on_query_change("atlantis");
        assert_eq!(s.on_key(Key::Enter), None);
        assert!(s.is_open());
        assert_eq!(s.committed().as_str(), "Europe/London");

        s.on_key(Key::Escape);
        assert_eq!(s.on_key(Key::Enter), None);
    }

    #[test]
    fn test_escape_reverts() {
        let mut s = selector();
        s.on_focus();
        s.on_query_change("par");
        s.on_key(Key::ArrowDown);
        assert_eq!(s.on_key(Key::Escape), None);
        assert_eq!(s.state(), &SearchState::Closed);
        assert_eq!(s.text(), "Europe / London");
        assert_eq!(s.committed().as_str(), "Europe/London");
    }

    #[test]
    fn test_blur_outside_reverts() {
        let mut s = selector();
        s.on_focus();
        s.on_query_change("tok");
        s.on_blur_outside();
        assert_eq!(s.state(), &SearchState::Closed);
        assert_eq!(s.text(), "Europe / London");
        assert_eq!(s.committed().as_str(), "Europe/London");
    }

    #[test]
    fn test_other_key_noop() {
        let mut s = selector();
        s.on_query_change("eu");
        let before = s.state().clone();
        assert_eq!(s.on_key(Key::Other), None);
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn test_hover_moves_highlight() {
        let mut s = selector();
        s.on_query_change("new");
        s.on_hover(1);
        assert_eq!(s.highlighted(), Some(1));
        s.on_hover(5);
        assert_eq!(s.highlighted(), Some(1));
    }

    #[test]
    fn test_select_direct() {
        let mut s = selector();
        s.on_query_change("eu");
        let paris = TimezoneId::from("Europe/Paris");
        assert_eq!(s.select_direct(&paris), Some(paris.clone()));
        assert_eq!(s.committed(), &paris);
        assert_eq!(s.text(), "Europe / Paris");
        assert!(!s.is_open());
    }

    #[test]
    fn test_select_direct_rejects_non_suggestion() {
        let mut s = selector();
        s.on_query_change("eu");
        assert_eq!(s.select_direct(&TimezoneId::from("Asia/Tokyo")), None);
        assert_eq!(s.committed().as_str(), "Europe/London");
        assert!(s.is_open());
    }

    #[test]
    fn test_set_committed_updates_text_when_closed() {
        let mut s = selector();
        s.set_committed(TimezoneId::from("Asia/Tokyo"));
        assert_eq!(s.text(), "Asia / Tokyo");

        s.on_query_change("par");
        s.set_committed(TimezoneId::from("UTC"));
        assert_eq!(s.text(), "par");
        s.on_key(Key::Escape);
        assert_eq!(s.text(), "UTC");
    }
}
