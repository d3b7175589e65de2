//! # Listing Sessions
//!
//! A listing view's state is the tuple `(filters, search, sort, page, view)`.
//! Every user interaction is an [`Action`], and [`reduce`] maps the old state
//! and an action to a new state without touching anything else. After each
//! transition the view is recomputed from scratch by the
//! [pipeline](crate::pipeline).
//!
//! ## Page Resets
//!
//! Changing what is shown (a filter, the search box, the layout, or clearing
//! everything) sends the user back to page 1. Changing only the order keeps
//! the current page.
//!
//! [`reduce`] does not know the catalog, so it cannot bound `NextPage`.
//! [`Listing::dispatch`] clamps the page into `1..=total_pages` afterwards.

use serde::Serialize;

use crate::config::ViewSizes;
use crate::filter::{FilterState, FilterValue};
use crate::model::ViewMode;
use crate::pipeline::{self, active_filter_count, apply_filters};
use crate::schema::{CatalogSchema, Listable, SortContext, SortKey};

/// Everything the user has selected in one listing view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub filters: FilterState,
    pub search: String,
    pub sort: SortKey,
    /// 1-based.
    pub page: usize,
    pub view: ViewMode,
}

impl ListingState {
    /// Initial state: no filters, empty search, page 1, the schema's default
    /// sort.
    pub fn for_schema<T>(schema: &CatalogSchema<T>) -> Self {
        Self {
            filters: FilterState::new(),
            search: String::new(),
            sort: schema.default_sort,
            page: 1,
            view: ViewMode::default(),
        }
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFilter(String, FilterValue),
    ClearFilter(String),
    ToggleTag { key: String, tag: String },
    SetSearch(String),
    SetSort(SortKey),
    SetPage(usize),
    NextPage,
    PrevPage,
    SetView(ViewMode),
    /// The "clear all filters" escape hatch of the empty-results state.
    ClearAll,
}

/// Applies `action` to `state`.
pub fn reduce(state: &ListingState, action: Action) -> ListingState {
    let mut next = state.clone();
    match action {
        Action::SetFilter(key, value) => {
            next.filters.set(key, value);
            next.page = 1;
        }
        Action::ClearFilter(key) => {
            next.filters.remove(&key);
            next.page = 1;
        }
        Action::ToggleTag { key, tag } => {
            next.filters.toggle_tag(&key, &tag);
            next.page = 1;
        }
        Action::SetSearch(query) => {
            next.search = query;
            next.page = 1;
        }
        Action::SetSort(key) => next.sort = key,
        Action::SetPage(page) => next.page = page.max(1),
        Action::NextPage => next.page = state.page.saturating_add(1),
        Action::PrevPage => next.page = state.page.saturating_sub(1).max(1),
        Action::SetView(view) => {
            next.view = view;
            next.page = 1;
        }
        Action::ClearAll => {
            next.filters.clear();
            next.search.clear();
            next.page = 1;
        }
    }
    next
}

/// What a listing view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView<'a, T> {
    pub items: Vec<&'a T>,
    pub total_filtered: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub active_filter_count: usize,
    pub catalog_size: usize,
    /// The no-results state. Distinct from an out-of-range page on a
    /// non-empty result.
    pub is_empty: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

/// A catalog plus the state of the view browsing it.
pub struct Listing<'a, T: Listable> {
    catalog: &'a [T],
    page_sizes: ViewSizes,
    state: ListingState,
}

impl<'a, T: Listable> Listing<'a, T> {
    pub fn new(catalog: &'a [T], page_sizes: ViewSizes) -> Self {
        Self {
            catalog,
            page_sizes,
            state: ListingState::for_schema(T::schema()),
        }
    }

    /// Start from a given state. The page is not clamped until the next
    /// dispatch, so an out-of-range page yields an empty view.
    pub fn with_state(mut self, state: ListingState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_sizes.get(self.state.view)
    }

    fn filtered_count(&self) -> usize {
        apply_filters(
            self.catalog,
            T::schema(),
            &self.state.filters,
            &self.state.search,
        )
        .len()
    }

    /// Reduce, then clamp the page to the pages that exist (page 1 when the
    /// result is empty).
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
        let pages = pipeline::total_pages(self.filtered_count(), self.page_size());
        self.state.page = self.state.page.clamp(1, pages.max(1));
    }

    /// Run the full pipeline for the current state.
    pub fn view(&self, ctx: &SortContext) -> ListingView<'a, T> {
        let schema = T::schema();
        let page = pipeline::run(
            self.catalog,
            schema,
            &self.state.filters,
            &self.state.search,
            self.state.sort,
            self.state.page,
            self.page_size(),
            ctx,
        );

        ListingView {
            is_empty: page.total_items == 0,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            items: page.items,
            total_filtered: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            page_size: page.page_size,
            active_filter_count: active_filter_count(
                schema,
                &self.state.filters,
                &self.state.search,
            ),
            catalog_size: self.catalog.len(),
        }
    }
}
