//! Detail route for a single system, reached from a catalog card.
//!
//! The catalog exposes no per-system endpoint here, so the page loads the
//! same list as `/systems` and picks the record by id.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::SystemView;
use crate::pages::systems::{CatalogError, CatalogLoading, PagePhase, install_catalog_loader, page_phase};
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn SystemDetailPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let catalog = RwSignal::new(CatalogState::default());
    let params = use_params_map();

    install_unauth_redirect(session_state, use_navigate());
    install_catalog_loader(session_state, catalog);

    let phase = move || session_state.with(|s| catalog.with(|c| page_phase(s, c)));
    let selected = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        catalog.with(|c| c.find(&id).cloned())
    };

    view! {
        <div class="system-detail-page">
            {move || match phase() {
                PagePhase::Loading => view! { <CatalogLoading/> }.into_any(),
                PagePhase::Failed => view! { <CatalogError catalog=catalog/> }.into_any(),
                PagePhase::Ready => match selected() {
                    Some(system) => view! { <SystemDetail system=system/> }.into_any(),
                    None => view! { <p class="system-detail-page__missing">"Activo no encontrado."</p> }.into_any(),
                },
            }}
            <a class="system-detail-page__back" href="/systems">
                "Volver a la lista"
            </a>
        </div>
    }
}

#[component]
fn SystemDetail(system: SystemView) -> impl IntoView {
    let alt = system.name.clone();
    view! {
        <article class="system-detail">
            <h1 class="system-detail__name">{system.name}</h1>
            <img class="system-detail__image" src=system.image_url alt=alt width="200" height="200"/>
            <p class="system-detail__currency">"Moneda: " {system.currency}</p>
            <p class="system-detail__id">{system.id}</p>
        </article>
    }
}
