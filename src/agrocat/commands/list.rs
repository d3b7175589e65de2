use crate::commands::{CmdMessage, CmdResult, ListingPage, Record};
use crate::config::AgrocatConfig;
use crate::error::{CatalogError, Result};
use crate::filter::FilterValue;
use crate::listing::{Action, Listing};
use crate::model::{CatalogKind, ViewMode};
use crate::schema::{Listable, SortContext, SortKey};
use crate::store::Catalogs;

/// What the user asked to see.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: String,
    /// Raw `key=value` pairs, in the order given.
    pub filters: Vec<(String, String)>,
    pub sort: Option<SortKey>,
    pub page: Option<usize>,
    pub view: Option<ViewMode>,
}

/// Splits a `key=value` filter argument.
pub fn parse_filter_arg(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg.split_once('=').ok_or_else(|| CatalogError::InvalidFilter {
        key: arg.to_string(),
        reason: "expected key=value".to_string(),
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CatalogError::InvalidFilter {
            key: arg.to_string(),
            reason: "missing filter key".to_string(),
        });
    }
    Ok((key.to_string(), value.trim().to_string()))
}

pub fn run(
    catalogs: &Catalogs,
    config: &AgrocatConfig,
    kind: CatalogKind,
    query: &ListQuery,
    ctx: &SortContext,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let page = match kind {
        CatalogKind::Programs => list_catalog(&catalogs.programs, config, query, ctx, &mut result)?,
        CatalogKind::Courses => list_catalog(&catalogs.courses, config, query, ctx, &mut result)?,
        CatalogKind::Products => list_catalog(&catalogs.products, config, query, ctx, &mut result)?,
        CatalogKind::News => list_catalog(&catalogs.news, config, query, ctx, &mut result)?,
    };

    Ok(result.with_listing(page))
}

fn list_catalog<T>(
    catalog: &[T],
    config: &AgrocatConfig,
    query: &ListQuery,
    ctx: &SortContext,
    result: &mut CmdResult,
) -> Result<ListingPage>
where
    T: Listable,
    Record: for<'r> From<&'r T>,
{
    let schema = T::schema();
    let mut listing = Listing::new(catalog, *config.page_sizes.for_kind(schema.kind));
    listing.dispatch(Action::SetView(query.view.unwrap_or(config.default_view)));

    for (key, raw) in &query.filters {
        let Some(def) = schema.filter(key) else {
            let available: Vec<_> = schema.filter_keys().collect();
            result.add_message(CmdMessage::warning(format!(
                "Unknown filter \"{}\" for {} ignored (available: {})",
                key,
                schema.kind,
                available.join(", ")
            )));
            continue;
        };
        let value = FilterValue::parse(def.kind, raw).map_err(|reason| CatalogError::InvalidFilter {
            key: key.clone(),
            reason,
        })?;
        listing.dispatch(Action::SetFilter(key.clone(), value));
    }

    if !query.search.trim().is_empty() {
        listing.dispatch(Action::SetSearch(query.search.clone()));
    }

    if let Some(sort) = query.sort {
        if !schema.supports_sort(sort) {
            return Err(CatalogError::UnsupportedSort {
                kind: schema.kind,
                sort: sort.to_string(),
            });
        }
        listing.dispatch(Action::SetSort(sort));
    }

    let requested = query.page.unwrap_or(1);
    listing.dispatch(Action::SetPage(requested));

    let state = listing.state().clone();
    let computed = listing.view(ctx);
    if computed.total_pages > 0 && state.page != requested {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is out of range, showing page {} of {}",
            requested, state.page, computed.total_pages
        )));
    }

    Ok(ListingPage {
        kind: schema.kind,
        items: computed.items.iter().map(|item| Record::from(*item)).collect(),
        total_filtered: computed.total_filtered,
        total_pages: computed.total_pages,
        page: computed.page,
        page_size: computed.page_size,
        active_filter_count: computed.active_filter_count,
        catalog_size: computed.catalog_size,
        is_empty: computed.is_empty,
        has_previous: computed.has_previous,
        has_next: computed.has_next,
        sort: state.sort,
        view: state.view,
        search: state.search,
        default_sort: schema.default_sort,
        default_view: config.default_view,
    })
}
