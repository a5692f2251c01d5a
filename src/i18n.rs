//! Minimal message catalog for the crate's user-facing strings.
//!
//! Only a handful of strings ever reach the admin screen (the option label
//! and the two activation notices), so the catalog is a flat key-to-text
//! map with a per-call fallback rather than a full localization framework.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Catalog keys used by this crate.
pub mod keys {
    /// Default dropdown label, "Order Total".
    pub const ORDER_TOTAL_LABEL: &str = "order_total_label";
    /// Notice shown when the e-commerce platform is missing.
    pub const PLATFORM_MISSING_NOTICE: &str = "platform_missing_notice";
    /// Notice shown when high-performance order storage is disabled.
    pub const STORAGE_MODE_NOTICE: &str = "storage_mode_notice";
}

/// A flat translation map. Missing keys fall back to the caller-supplied
/// default text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON object of `key → translation`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Add or replace a translation.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }

    /// Translation for `key`, or `default` when the catalog has none.
    pub fn text<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.messages.get(key).map_or(default, String::as_str)
    }
}
