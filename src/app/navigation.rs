//! Navigation - Pages Available in the Workspace

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Counter widget with the fixed data table
    #[default]
    Counter,
    /// Archive submission form
    Archive,
    /// Welcome card with its own click counter
    Welcome,
}

impl ActivePage {
    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Counter => "nav-counter",
            ActivePage::Archive => "nav-archive",
            ActivePage::Welcome => "nav-welcome",
        }
    }

    /// Keyboard shortcut that opens the page
    pub fn shortcut(&self) -> &'static str {
        match self {
            ActivePage::Counter => "secondary-1",
            ActivePage::Archive => "secondary-2",
            ActivePage::Welcome => "secondary-3",
        }
    }

    /// Get all available pages for sidebar
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::Counter, ActivePage::Archive, ActivePage::Welcome]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_default_page() {
        assert_eq!(ActivePage::default(), ActivePage::Counter);
        assert_eq!(ActivePage::all().first(), Some(&ActivePage::Counter));
    }

    #[test]
    fn test_shortcuts_are_unique() {
        let mut keys: Vec<_> = ActivePage::all().iter().map(|p| p.shortcut()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ActivePage::all().len());
    }
}
