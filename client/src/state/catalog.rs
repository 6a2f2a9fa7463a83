//! Systems catalog state for the listing and detail routes.
//!
//! DESIGN
//! ======
//! The catalog is fetched once per page load and held here together with the
//! current page number. Pagination is pure slicing over `items`.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::SystemView;
use crate::util::pagination::{self, ITEMS_PER_PAGE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    pub items: Vec<SystemView>,
    pub loading: bool,
    pub error: Option<String>,
    /// 1-based page currently shown.
    pub page: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, page: 1 }
    }
}

impl CatalogState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, items: Vec<SystemView>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.page = 1;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.items.len(), ITEMS_PER_PAGE)
    }

    pub fn current_items(&self) -> &[SystemView] {
        pagination::page_slice(&self.items, self.page, ITEMS_PER_PAGE)
    }

    /// Switch to `page`. Returns `false` and keeps the current page when
    /// `page` does not exist.
    pub fn set_page(&mut self, page: usize) -> bool {
        if !pagination::is_valid_page(page, ITEMS_PER_PAGE, self.items.len()) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn find(&self, id: &str) -> Option<&SystemView> {
        self.items.iter().find(|s| s.id == id)
    }
}
