#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the home shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: HomeTab,
}

/// Tabs on the home page. Every panel is a placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomeTab {
    #[default]
    Servers,
    Zones,
    ServerStatistics,
}

impl HomeTab {
    /// Tab bar order.
    pub const ALL: [Self; 3] = [Self::Servers, Self::Zones, Self::ServerStatistics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Servers => "Servers",
            Self::Zones => "Zones",
            Self::ServerStatistics => "Server Statistics",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Servers => "Server management tools and list go here.",
            Self::Zones => "Zone management section.",
            Self::ServerStatistics => "Performance graphs and metrics appear here.",
        }
    }
}
