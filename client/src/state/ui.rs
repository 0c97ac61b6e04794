//! Dashboard chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs of the dashboard shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Home,
    Crawler,
    Assistant,
    Widget,
    Billing,
    Settings,
}

impl DashboardTab {
    /// All tabs in sidebar order.
    #[must_use]
    pub fn all() -> [Self; 6] {
        [Self::Home, Self::Crawler, Self::Assistant, Self::Widget, Self::Billing, Self::Settings]
    }

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Crawler => "Website Crawler",
            Self::Assistant => "Assistant Creator",
            Self::Widget => "Widget Generator",
            Self::Billing => "Billing",
            Self::Settings => "Settings",
        }
    }

    /// Header title shown while the tab is active.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Dashboard",
            other => other.label(),
        }
    }
}

/// UI state for the dashboard shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: DashboardTab,
}
