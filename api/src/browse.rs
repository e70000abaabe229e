//! The filter/paginate stage.
//!
//! Everything here is a pure function of the loaded catalog and the current
//! [`FilterState`]; screens recompute it on every render.

use std::ops::Range;

use crate::category::CategorySelection;
use crate::listing::Listing;

/// Search, category and page selected on one browsing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_query: String,
    selected_category: CategorySelection,
    current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_category: CategorySelection::All,
            current_page: 1,
        }
    }
}

impl FilterState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &CategorySelection {
        &self.selected_category
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replaces the search query and returns to the first page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Replaces the category and returns to the first page.
    pub fn set_category(&mut self, category: CategorySelection) {
        self.selected_category = category;
        self.current_page = 1;
    }

    /// Moves to `page`, clamped to `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }

}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Case-insensitive substring match against any of `fields`.
///
/// An empty query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    fields_contain(&query.to_lowercase(), fields)
}

/// `needle` must already be lowercase.
fn fields_contain(needle: &str, fields: &[&str]) -> bool {
    needle.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Items passing both the search query and the category, in original order.
pub fn filter_listings<'a, T: Listing>(
    items: &'a [T],
    query: &str,
    category: &CategorySelection,
) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields_contain(&needle, &item.search_fields())
                && category.admits(item.classification())
        })
        .collect()
}

/// The slice of a filtered list shown on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub range: Range<usize>,
}

impl PageWindow {
    /// Window over `len` items for `requested_page`, clamped into range.
    pub fn new(len: usize, requested_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = len.div_ceil(page_size);
        let current_page = clamp_page(requested_page, total_pages);
        let start = ((current_page - 1) * page_size).min(len);
        let end = (current_page * page_size).min(len);
        Self {
            current_page,
            total_pages,
            page_size,
            range: start..end,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Where the category selection is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// Filter the loaded list by classification.
    InMemory,
    /// The endpoint already narrowed the list; only search applies locally.
    Upstream,
}

/// Everything a screen needs to render one page.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView<'a, T> {
    pub items: Vec<&'a T>,
    pub filtered_count: usize,
    pub window: PageWindow,
}

impl<'a, T: Listing> BrowseView<'a, T> {
    pub fn compute(
        catalog: &'a [T],
        filter: &FilterState,
        scope: CategoryScope,
        page_size: usize,
    ) -> Self {
        let category = match scope {
            CategoryScope::InMemory => filter.selected_category().clone(),
            CategoryScope::Upstream => CategorySelection::All,
        };
        let filtered = filter_listings(catalog, filter.search_query(), &category);
        let window = PageWindow::new(filtered.len(), filter.current_page(), page_size);
        let items = filtered[window.range.clone()].to_vec();
        Self {
            items,
            filtered_count: filtered.len(),
            window,
        }
    }
}

impl<T> BrowseView<'_, T> {
    /// Nothing matched the search and category.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// Pagination is only shown when there is more than one page.
    pub fn show_pagination(&self) -> bool {
        self.filtered_count > self.window.page_size
    }
}
