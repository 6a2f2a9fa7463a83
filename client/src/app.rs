//! Root component, HTML shell, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders `shell` for every route; `App` provides the session
//! signal that page guards read. The session starts in the loading state and
//! is resolved from browser storage once the app runs in the browser.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::login::LoginPage;
use crate::pages::system_detail::SystemDetailPage;
use crate::pages::systems::SystemsPage;
use crate::state::session::{self, SessionState};

/// Document shell used by the SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_state = RwSignal::new(SessionState::default());
    provide_context(session_state);

    // Effects only run in the browser, where storage exists.
    Effect::new(move || {
        session_state.set(session::read_session());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/saldo.css"/>
        <Title text="Saldo"/>
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Página no encontrada."</p> }>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/systems") view=SystemsPage/>
                    <Route path=path!("/systems/:id") view=SystemDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
