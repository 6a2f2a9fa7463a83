//! Page selector rendered below the catalog grid.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;

use crate::state::catalog::CatalogState;

/// CSS class list for the button of `page`.
pub(crate) fn page_button_class(page: usize, current: usize) -> &'static str {
    if page == current { "pager__button pager__button--active" } else { "pager__button" }
}

/// One numbered button per page; clicking switches the catalog page.
#[component]
pub fn Pager(catalog: RwSignal<CatalogState>) -> impl IntoView {
    view! {
        <nav class="pager" aria-label="Páginas">
            {move || {
                let state = catalog.get();
                (1..=state.total_pages())
                    .map(|page| {
                        view! {
                            <button
                                class=page_button_class(page, state.page)
                                aria-current=(page == state.page).then_some("page")
                                on:click=move |_| {
                                    catalog.update(|c| {
                                        c.set_page(page);
                                    });
                                }
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
