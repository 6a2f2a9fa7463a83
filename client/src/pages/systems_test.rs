use super::*;
use crate::net::types::SystemView;
use crate::state::session::StoredUser;

fn signed_in() -> SessionState {
    SessionState { user: Some(StoredUser { name: "Ana".to_owned(), email: None }), loading: false }
}

fn loaded_catalog() -> CatalogState {
    let mut catalog = CatalogState::default();
    catalog.finish_load(vec![SystemView {
        id: "bitcoin".to_owned(),
        kind: "systems".to_owned(),
        name: "Bitcoin".to_owned(),
        currency: "BTC".to_owned(),
        image_url: "https://api.saldo.com.ar/img/sistemas2/bitcoin.big.webp".to_owned(),
    }]);
    catalog
}

#[test]
fn page_phase_loading_while_session_unresolved() {
    assert_eq!(page_phase(&SessionState::default(), &loaded_catalog()), PagePhase::Loading);
}

#[test]
fn page_phase_loading_without_user() {
    let session = SessionState::from_raw(None);
    assert_eq!(page_phase(&session, &loaded_catalog()), PagePhase::Loading);
}

#[test]
fn page_phase_loading_while_catalog_in_flight() {
    assert_eq!(page_phase(&signed_in(), &CatalogState::default()), PagePhase::Loading);
}

#[test]
fn page_phase_failed_after_error() {
    let mut catalog = CatalogState::default();
    catalog.fail("catalog responded with status 502".to_owned());
    assert_eq!(page_phase(&signed_in(), &catalog), PagePhase::Failed);
}

#[test]
fn page_phase_ready_with_session_and_catalog() {
    assert_eq!(page_phase(&signed_in(), &loaded_catalog()), PagePhase::Ready);
}

#[test]
fn should_load_catalog_only_for_resolved_session() {
    assert!(!should_load_catalog(&SessionState::default()));
    assert!(!should_load_catalog(&SessionState::from_raw(None)));
    assert!(should_load_catalog(&signed_in()));
}
