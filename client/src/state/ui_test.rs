use super::*;

#[test]
fn home_is_the_default_tab() {
    assert_eq!(UiState::default().active_tab, DashboardTab::Home);
}

#[test]
fn home_title_differs_from_its_label() {
    assert_eq!(DashboardTab::Home.label(), "Home");
    assert_eq!(DashboardTab::Home.title(), "Dashboard");
    assert_eq!(DashboardTab::Crawler.title(), "Website Crawler");
}

#[test]
fn sidebar_lists_all_six_tabs_in_order() {
    let tabs = DashboardTab::all();
    assert_eq!(tabs.len(), 6);
    assert_eq!(tabs[0], DashboardTab::Home);
    assert_eq!(tabs[5], DashboardTab::Settings);
}
