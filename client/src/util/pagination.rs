//! Client-side pagination over an already-fetched list.
//!
//! Pages are 1-based. Any page outside `1..=total_pages` maps to an empty
//! slice rather than panicking.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

/// Catalog cards shown per page.
pub const ITEMS_PER_PAGE: usize = 9;

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 { 0 } else { len.div_ceil(per_page) }
}

/// Index range of `page` within a list of `len` items.
pub fn page_range(page: usize, per_page: usize, len: usize) -> Range<usize> {
    let Some(first) = page.checked_sub(1).and_then(|p| p.checked_mul(per_page)) else {
        return 0..0;
    };
    if first >= len {
        return 0..0;
    }
    let last = first.saturating_add(per_page).min(len);
    first..last
}

/// Items shown on `page`.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    &items[page_range(page, per_page, items.len())]
}

/// Whether `page` addresses a real page for `len` items.
pub fn is_valid_page(page: usize, per_page: usize, len: usize) -> bool {
    page >= 1 && page <= total_pages(len, per_page)
}
