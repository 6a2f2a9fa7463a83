//! Card component for one catalog system.

use leptos::prelude::*;

use crate::net::types::SystemView;

/// A clickable card linking to the system's detail route.
#[component]
pub fn SystemCard(system: SystemView) -> impl IntoView {
    let href = system.href();
    let alt = system.name.clone();

    view! {
        <div class="system-card">
            <a class="system-card__link" href=href>
                <div class="system-card__head">
                    <h2 class="system-card__name">{system.name}</h2>
                    <img
                        class="system-card__image"
                        src=system.image_url
                        alt=alt
                        width="100"
                        height="100"
                    />
                </div>
                <p class="system-card__currency">"Moneda: " {system.currency}</p>
            </a>
        </div>
    }
}
