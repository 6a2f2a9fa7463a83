//! Systems listing page: the authenticated catalog grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards on the stored session, requests the catalog once the session is
//! known, then renders the current page of cards with a pager. Fetch failures
//! are logged and surfaced with a retry action.

#[cfg(test)]
#[path = "systems_test.rs"]
mod systems_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::pager::Pager;
use crate::components::session_bar::SessionBar;
use crate::components::system_card::SystemCard;
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// What a catalog-backed route should currently show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PagePhase {
    Loading,
    Failed,
    Ready,
}

pub(crate) fn page_phase(session: &SessionState, catalog: &CatalogState) -> PagePhase {
    if session.loading || !session.is_authenticated() || catalog.loading {
        PagePhase::Loading
    } else if catalog.error.is_some() {
        PagePhase::Failed
    } else {
        PagePhase::Ready
    }
}

/// The catalog is requested only for a resolved, present session.
pub(crate) fn should_load_catalog(session: &SessionState) -> bool {
    !session.loading && session.is_authenticated()
}

/// Start a single catalog request and record its outcome in `catalog`.
pub(crate) fn load_catalog(catalog: RwSignal<CatalogState>) {
    catalog.update(CatalogState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_systems().await {
            Ok(items) => catalog.update(|c| c.finish_load(items)),
            Err(e) => {
                log::error!("catalog request failed: {e}");
                catalog.update(|c| c.fail(e.to_string()));
            }
        }
    });
}

/// Request the catalog the first time the session resolves to a user.
pub(crate) fn install_catalog_loader(session_state: RwSignal<SessionState>, catalog: RwSignal<CatalogState>) {
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        if !should_load_catalog(&session_state.get()) {
            return;
        }
        requested.set(true);
        load_catalog(catalog);
    });
}

#[component]
pub(crate) fn CatalogLoading() -> impl IntoView {
    view! {
        <div class="page-loading">
            <p>"Cargando..."</p>
        </div>
    }
}

#[component]
pub(crate) fn CatalogError(catalog: RwSignal<CatalogState>) -> impl IntoView {
    view! {
        <div class="page-error">
            <p>"No se pudo cargar la lista de activos."</p>
            <p class="page-error__detail">{move || catalog.get().error.unwrap_or_default()}</p>
            <button class="btn" on:click=move |_| load_catalog(catalog)>
                "Reintentar"
            </button>
        </div>
    }
}

/// Systems page — session bar, catalog grid, and pager.
/// Redirects to `/login` if no session entry exists.
#[component]
pub fn SystemsPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let catalog = RwSignal::new(CatalogState::default());

    install_unauth_redirect(session_state, use_navigate());
    install_catalog_loader(session_state, catalog);

    let phase = move || session_state.with(|s| catalog.with(|c| page_phase(s, c)));

    view! {
        <div class="systems-page">
            {move || match phase() {
                PagePhase::Loading => view! { <CatalogLoading/> }.into_any(),
                PagePhase::Failed => view! { <CatalogError catalog=catalog/> }.into_any(),
                PagePhase::Ready => {
                    view! {
                        <SessionBar/>
                        <h1 class="systems-page__title">"Lista de Activos Disponibles"</h1>
                        <div class="systems-grid">
                            {move || {
                                catalog
                                    .get()
                                    .current_items()
                                    .iter()
                                    .cloned()
                                    .map(|system| view! { <SystemCard system=system/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <Pager catalog=catalog/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
