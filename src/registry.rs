//! Host-side extension point registry and the activation gate.
//!
//! [`SearchFilterRegistry`] is an explicit model of the host's named filter
//! hooks: the host owns one for the process lifetime and folds registered
//! callbacks over its values when rendering the admin search. [`register`]
//! wires a [`TotalSearchHandler`] into both hooks, gated on the platform
//! preconditions checked once at initialization.

use std::sync::Arc;

use log::{info, warn};
use parking_lot::RwLock;

use crate::error::{OrderSearchError, Result};
use crate::filter::FilterOptions;
use crate::handler::{QueryContext, TotalSearchHandler};
use crate::predicate::Predicate;
use crate::storage::PlatformFeatures;

pub type OptionsFilter = Arc<dyn Fn(FilterOptions) -> FilterOptions + Send + Sync>;
pub type WhereFilter = Arc<dyn Fn(Predicate, &str, &str, &QueryContext) -> Predicate + Send + Sync>;

/// The host's named extension points for the admin order search.
///
/// Callbacks run synchronously in registration order; each receives the
/// previous callback's output.
#[derive(Default)]
pub struct SearchFilterRegistry {
    options_filters: RwLock<Vec<OptionsFilter>>,
    where_filters: RwLock<Vec<WhereFilter>>,
}

impl SearchFilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback on the filter-options hook.
    pub fn add_options_filter(
        &self,
        filter: impl Fn(FilterOptions) -> FilterOptions + Send + Sync + 'static,
    ) {
        self.options_filters.write().push(Arc::new(filter));
    }

    /// Register a callback on the search-where hook.
    pub fn add_where_filter(
        &self,
        filter: impl Fn(Predicate, &str, &str, &QueryContext) -> Predicate + Send + Sync + 'static,
    ) {
        self.where_filters.write().push(Arc::new(filter));
    }

    /// Fold the registered option filters over the host's current options.
    pub fn apply_options(&self, options: FilterOptions) -> FilterOptions {
        self.options_filters
            .read()
            .iter()
            .fold(options, |options, filter| filter(options))
    }

    /// Fold the registered where filters over the host's default predicate.
    pub fn apply_where(
        &self,
        where_clause: Predicate,
        search_term: &str,
        search_filter: &str,
        query: &QueryContext,
    ) -> Predicate {
        self.where_filters
            .read()
            .iter()
            .fold(where_clause, |clause, filter| {
                filter(clause, search_term, search_filter, query)
            })
    }

    /// Number of callbacks on the filter-options hook.
    pub fn options_filter_count(&self) -> usize {
        self.options_filters.read().len()
    }

    /// Number of callbacks on the search-where hook.
    pub fn where_filter_count(&self) -> usize {
        self.where_filters.read().len()
    }
}

/// Wire the handler's two functions into the host registry.
///
/// The gate checks, once, that the platform is active and that
/// high-performance order storage is enabled. When either precondition is
/// missing, nothing is registered and the corresponding error is returned;
/// its notice text (see [`TotalSearchHandler::notice`]) is what the host
/// should surface in the admin screen.
pub fn register(
    handler: Arc<TotalSearchHandler>,
    features: &dyn PlatformFeatures,
    registry: &SearchFilterRegistry,
) -> Result<()> {
    let gate = if !features.platform_active() {
        Some(OrderSearchError::PlatformInactive)
    } else if !features.high_performance_storage_enabled() {
        Some(OrderSearchError::HighPerformanceStorageDisabled)
    } else {
        None
    };

    if let Some(error) = gate {
        warn!("order total search not registered: {}", handler.notice(&error));
        return Err(error);
    }

    let options_handler = Arc::clone(&handler);
    registry.add_options_filter(move |options| options_handler.add_total_search_filter(options));
    registry.add_where_filter(move |where_clause, search_term, search_filter, query| {
        handler.handle_total_search(where_clause, search_term, search_filter, query)
    });

    info!("order total search filter registered");
    Ok(())
}
