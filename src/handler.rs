//! The order-total filter handler: option contribution and predicate
//! building.
//!
//! Two-state framing, no persistence between calls. A search either enters
//! the total-match path (`search_filter` is the order-total id and the
//! parsed, possibly overridden term is positive) or passes the incoming
//! predicate through unchanged. Nothing on this path can fail: every
//! degenerate input degrades to pass-through.

use std::sync::Arc;

use log::debug;

use crate::error::OrderSearchError;
use crate::filter::{FilterOptions, ORDER_TOTAL_FILTER_ID};
use crate::hooks::TotalSearchHooks;
use crate::i18n::{MessageCatalog, keys};
use crate::predicate::Predicate;
use crate::storage::OrderStorage;
use crate::term;

/// Host request context forwarded through the where filter.
///
/// Carried for signature compatibility with the host's extension point;
/// this handler does not consult it.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    /// 1-based page of the admin order list being rendered.
    pub page: usize,
    /// Rows per page requested by the host.
    pub per_page: usize,
}

/// The order total filter handler.
///
/// Holds its storage capability and hooks by value; the host constructs one
/// instance at startup and registers its two methods as filter callbacks.
pub struct TotalSearchHandler {
    storage: Arc<dyn OrderStorage>,
    hooks: TotalSearchHooks,
    catalog: MessageCatalog,
}

impl TotalSearchHandler {
    pub fn new(storage: Arc<dyn OrderStorage>) -> Self {
        Self {
            storage,
            hooks: TotalSearchHooks::new(),
            catalog: MessageCatalog::new(),
        }
    }

    /// Install extension-point callbacks.
    pub fn with_hooks(mut self, hooks: TotalSearchHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Install a translation catalog for the user-facing strings.
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Contribute the order-total option at the front of the dropdown,
    /// preserving the relative order of the existing options.
    ///
    /// Pure transform; always succeeds, including when the option is
    /// already present (the new entry replaces it, see
    /// [`FilterOptions::insert_front`]).
    pub fn add_total_search_filter(&self, mut options: FilterOptions) -> FilterOptions {
        let default = self.catalog.text(keys::ORDER_TOTAL_LABEL, "Order Total");
        let label = self.hooks.apply_label(default.to_string());
        options.insert_front(ORDER_TOTAL_FILTER_ID, label);
        options
    }

    /// Translate the raw search term into an order-total predicate.
    ///
    /// Returns `where_clause` unchanged unless `search_filter` selects the
    /// order-total option and the term resolves to a positive number. The
    /// term override runs after parsing and before the positivity guard, so
    /// an override may veto the match by returning a value ≤ 0.
    pub fn handle_total_search(
        &self,
        where_clause: Predicate,
        search_term: &str,
        search_filter: &str,
        _query: &QueryContext,
    ) -> Predicate {
        if search_filter != ORDER_TOTAL_FILTER_ID {
            return where_clause;
        }

        let total = self.hooks.apply_term(term::parse(search_term));
        if total <= 0.0 {
            debug!("order total search: term {search_term:?} resolved to {total}, passing through");
            return where_clause;
        }

        let predicate = self.storage.total_match_predicate(total);
        self.hooks.apply_predicate(predicate, total)
    }

    /// Admin-visible text for a registration failure, looked up through the
    /// handler's catalog with the error's display text as the fallback.
    pub fn notice(&self, error: &OrderSearchError) -> String {
        let key = match error {
            OrderSearchError::PlatformInactive => keys::PLATFORM_MISSING_NOTICE,
            OrderSearchError::HighPerformanceStorageDisabled => keys::STORAGE_MODE_NOTICE,
        };
        let fallback = error.to_string();
        self.catalog.text(key, &fallback).to_string()
    }
}
