//! Header bar with the user greeting and the logout action.

use leptos::prelude::*;

use crate::state::session::{self, SessionState, StoredUser};

/// Greets the signed-in user and offers logout.
///
/// Logout removes the session entry and reloads the page, so the route guard
/// runs again from a clean state and sends the visitor to `/login`.
#[component]
pub fn SessionBar() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    let greeting = move || session_state.with(|s| s.user.as_ref().map(StoredUser::greeting)).unwrap_or_default();

    let on_logout = move |_| {
        session_state.update(session::logout);
        #[cfg(feature = "hydrate")]
        {
            log::info!("session cleared, reloading");
            if let Some(w) = web_sys::window() {
                let _ = w.location().reload();
            }
        }
    };

    view! {
        <header class="session-bar">
            <p class="session-bar__greeting">{greeting}</p>
            <button class="btn btn--danger session-bar__logout" on:click=on_logout>
                "Cerrar Sesión"
            </button>
        </header>
    }
}
