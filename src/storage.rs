//! Capability interfaces supplied by the host at construction.
//!
//! The handler never reaches into ambient host state. Everything it needs
//! from the platform arrives through these two traits: predicate building
//! against the orders table, and the feature flags checked once at
//! registration.

use crate::predicate::{Predicate, SqlValue};

/// Read-only access to the orders table, expressed as predicate building.
pub trait OrderStorage: Send + Sync {
    /// Predicate selecting orders whose `total_amount` exactly equals
    /// `total`.
    ///
    /// Exact equality per the storage engine's numeric comparison; there is
    /// no tolerance band, so totals stored with rounding drift will not
    /// match.
    fn total_match_predicate(&self, total: f64) -> Predicate;
}

/// Host feature flags consulted by the activation gate.
pub trait PlatformFeatures: Send + Sync {
    /// Whether the host e-commerce platform is installed and active.
    fn platform_active(&self) -> bool;

    /// Whether order records live in the dedicated high-performance table,
    /// making `total_amount` directly queryable.
    fn high_performance_storage_enabled(&self) -> bool;
}

/// Standard [`OrderStorage`] over the host's orders table.
#[derive(Debug, Clone)]
pub struct OrdersTable {
    table: String,
}

impl OrdersTable {
    /// `table` is the fully prefixed orders table name, e.g.
    /// `"wp_wc_orders"`. It comes from host configuration, not user input.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The configured orders table name.
    pub fn table(&self) -> &str {
        &self.table
    }
}

impl OrderStorage for OrdersTable {
    fn total_match_predicate(&self, total: f64) -> Predicate {
        let sql = format!(
            "{table}.id IN (SELECT id FROM {table} WHERE total_amount = ?)",
            table = self.table
        );
        Predicate::new(sql, vec![SqlValue::Float(total)])
    }
}

/// Fixed feature flags, for hosts with static configuration and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFeatures {
    pub platform_active: bool,
    pub high_performance_storage: bool,
}

impl StaticFeatures {
    /// Flags for a fully provisioned host.
    pub fn all_enabled() -> Self {
        Self {
            platform_active: true,
            high_performance_storage: true,
        }
    }
}

impl PlatformFeatures for StaticFeatures {
    fn platform_active(&self) -> bool {
        self.platform_active
    }

    fn high_performance_storage_enabled(&self) -> bool {
        self.high_performance_storage
    }
}
