#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_page_url_is_none_off_browser() {
    assert!(current_page_url().is_none());
}

#[test]
fn navigate_to_is_noop_but_callable() {
    navigate_to("/");
}
