use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_servers() {
    assert_eq!(UiState::default().active_tab, HomeTab::Servers);
}

// =============================================================
// HomeTab
// =============================================================

#[test]
fn tabs_are_listed_in_display_order() {
    let labels: Vec<_> = HomeTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Servers", "Zones", "Server Statistics"]);
}

#[test]
fn each_tab_has_its_own_placeholder() {
    assert_eq!(HomeTab::Servers.placeholder(), "Server management tools and list go here.");
    assert_eq!(HomeTab::Zones.placeholder(), "Zone management section.");
    assert_eq!(HomeTab::ServerStatistics.placeholder(), "Performance graphs and metrics appear here.");
}
