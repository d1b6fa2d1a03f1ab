//! Page navigation for the station UI.
//!
//! The nav switch cycles through the four frames; the select switch acts on
//! whichever page is current (hold gestures on the update and reset pages).
//!
//! # Pages
//!
//! - [`Page::Main`]: temperature sparkline plus live temperature, humidity,
//!   and pressure readouts
//! - [`Page::Network`]: IP address and device hostname
//! - [`Page::UpdateEnable`]: firmware update enable/disable gesture
//! - [`Page::FactoryReset`]: configuration erase gesture

/// Available pages, in carousel order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Sparkline and live environmental readings.
    #[default]
    Main,

    /// IP address and hostname.
    Network,

    /// Hold-to-enable firmware updates.
    UpdateEnable,

    /// Hold-to-erase configuration and restart.
    FactoryReset,
}

/// Number of pages in the carousel.
pub const PAGE_COUNT: usize = 4;

impl Page {
    /// Advance to the next page (cycles: Main → Network → UpdateEnable →
    /// FactoryReset → Main).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Main => Self::Network,
            Self::Network => Self::UpdateEnable,
            Self::UpdateEnable => Self::FactoryReset,
            Self::FactoryReset => Self::Main,
        }
    }

    /// Position in the frame table.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Network => 1,
            Self::UpdateEnable => 2,
            Self::FactoryReset => 3,
        }
    }

    /// Short name for logging.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Network => "network",
            Self::UpdateEnable => "update-enable",
            Self::FactoryReset => "factory-reset",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Main);
    }

    #[test]
    fn test_page_cycle() {
        let mut page = Page::Main;
        for _ in 0..PAGE_COUNT {
            page = page.next();
        }
        assert_eq!(page, Page::Main);
    }

    #[test]
    fn test_page_indices_are_distinct() {
        let pages = [Page::Main, Page::Network, Page::UpdateEnable, Page::FactoryReset];
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.index(), i);
        }
    }
}
