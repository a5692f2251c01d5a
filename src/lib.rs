//! # Order Total Search
//!
//! Adds an "Order Total" option to a host order-management admin search and
//! translates the numeric search term into a parameterized predicate over
//! the orders table.
//!
//! ## Features
//!
//! - Pure, request-scoped filter handler with no owned state
//! - Parameterized predicates (user input is never inlined into SQL)
//! - Label, term, and predicate extension points
//! - Explicit activation gate over host feature flags
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use order_total_search::{
//!     FilterOptions, OrdersTable, Predicate, QueryContext, SearchFilterRegistry,
//!     StaticFeatures, TotalSearchHandler, register,
//! };
//!
//! let registry = SearchFilterRegistry::new();
//! let handler = Arc::new(TotalSearchHandler::new(Arc::new(OrdersTable::new(
//!     "wp_wc_orders",
//! ))));
//! register(handler, &StaticFeatures::all_enabled(), &registry)?;
//!
//! // The host applies the hooks when rendering the admin search.
//! let options = registry.apply_options(FilterOptions::new());
//! assert_eq!(options.iter().next(), Some(("order_total", "Order Total")));
//!
//! let predicate = registry.apply_where(
//!     Predicate::raw("1=0"),
//!     "99.99",
//!     "order_total",
//!     &QueryContext::default(),
//! );
//! assert!(predicate.sql().contains("total_amount = ?"));
//! # Ok::<(), order_total_search::OrderSearchError>(())
//! ```

mod error;
mod filter;
mod handler;
pub mod hooks;
pub mod i18n;
mod predicate;
pub mod registry;
pub mod storage;
pub mod term;

// Re-exports for the public API
pub use error::{OrderSearchError, Result};
pub use filter::{FilterOptions, ORDER_TOTAL_FILTER_ID};
pub use handler::{QueryContext, TotalSearchHandler};
pub use hooks::TotalSearchHooks;
pub use predicate::{Predicate, SqlValue};
pub use registry::{SearchFilterRegistry, register};
pub use storage::{OrderStorage, OrdersTable, PlatformFeatures, StaticFeatures};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
