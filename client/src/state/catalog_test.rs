use super::*;

fn system(n: usize) -> SystemView {
    SystemView {
        id: format!("s{n}"),
        kind: "systems".to_owned(),
        name: format!("System {n}"),
        currency: "ARS".to_owned(),
        image_url: format!("https://img/s{n}.big.webp"),
    }
}

fn loaded(n: usize) -> CatalogState {
    let mut state = CatalogState::default();
    state.finish_load((0..n).map(system).collect());
    state
}

#[test]
fn default_is_loading_on_first_page() {
    let state = CatalogState::default();
    assert!(state.loading);
    assert_eq!(state.page, 1);
    assert!(state.current_items().is_empty());
}

#[test]
fn finish_load_clears_loading_and_error() {
    let mut state = CatalogState::default();
    state.fail("boom".to_owned());
    state.begin_load();
    assert!(state.loading);
    assert_eq!(state.error, None);
    state.finish_load(vec![system(0)]);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn fail_records_error_and_stops_loading() {
    let mut state = CatalogState::default();
    state.fail("catalog responded with status 500".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("catalog responded with status 500"));
}

#[test]
fn empty_catalog_has_no_pages() {
    let state = loaded(0);
    assert_eq!(state.total_pages(), 0);
    assert!(state.current_items().is_empty());
}

#[test]
fn ten_items_split_nine_and_one() {
    let mut state = loaded(10);
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.current_items().len(), 9);
    assert!(state.set_page(2));
    assert_eq!(state.current_items(), &[system(9)]);
}

#[test]
fn eighteen_items_fill_two_pages_in_order() {
    let mut state = loaded(18);
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.current_items().first(), Some(&system(0)));
    state.set_page(2);
    assert_eq!(state.current_items().first(), Some(&system(9)));
    assert_eq!(state.current_items().last(), Some(&system(17)));
}

#[test]
fn set_page_rejects_missing_pages() {
    let mut state = loaded(9);
    assert!(!state.set_page(0));
    assert!(!state.set_page(2));
    assert_eq!(state.page, 1);
}

#[test]
fn reload_resets_to_first_page() {
    let mut state = loaded(18);
    state.set_page(2);
    state.finish_load((0..18).map(system).collect());
    assert_eq!(state.page, 1);
}

#[test]
fn find_by_id() {
    let state = loaded(3);
    assert_eq!(state.find("s2").map(|s| s.name.as_str()), Some("System 2"));
    assert!(state.find("missing").is_none());
}
