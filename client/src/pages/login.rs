//! Login page that records the session entry in browser storage.
//!
//! There is no credential check: signing in stores the visitor's name (and
//! optional email) under the session key, which is all the catalog routes
//! look for.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState, StoredUser};

/// Route visited after a successful sign in.
pub const HOME_PATH: &str = "/systems";

pub(crate) fn validate_login_input(name: &str, email: &str) -> Result<StoredUser, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Ingresá tu nombre.");
    }
    let email = email.trim();
    if !email.is_empty() && !email.contains('@') {
        return Err("El email no es válido.");
    }
    Ok(StoredUser { name: name.to_owned(), email: (!email.is_empty()).then(|| email.to_owned()) })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Already signed in: go straight to the catalog.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = session_state.get();
        if !state.loading && state.is_authenticated() {
            navigate_home(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&name.get(), &email.get()) {
            Ok(user) => {
                session::store_user(&user);
                info.set(String::new());
                session_state.set(SessionState { user: Some(user), loading: false });
                navigate(HOME_PATH, NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Saldo"</h1>
                <p class="login-card__subtitle">"Iniciar Sesión"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nombre"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="tu@ejemplo.com (opcional)"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Ingresar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
