//! NavState - Active Page Selection

use crate::app::navigation::ActivePage;

/// State for page navigation
#[derive(Debug, Default)]
pub struct NavState {
    /// Currently active page
    pub active_page: ActivePage,
}

impl NavState {
    pub fn new(start_page: ActivePage) -> Self {
        Self {
            active_page: start_page,
        }
    }

    /// Set the active page. Returns false if it was already active.
    pub fn set_active_page(&mut self, page: ActivePage) -> bool {
        if self.active_page == page {
            return false;
        }
        self.active_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_active_page() {
        let mut nav = NavState::default();
        assert_eq!(nav.active_page, ActivePage::Counter);

        assert!(nav.set_active_page(ActivePage::Archive));
        assert_eq!(nav.active_page, ActivePage::Archive);

        assert!(!nav.set_active_page(ActivePage::Archive));
        assert_eq!(nav.active_page, ActivePage::Archive);
    }
}
