//! Ordered filter-option mapping contributed to the host search dropdown.

use serde::{Deserialize, Serialize};

/// Identifier of the order-total filter option.
pub const ORDER_TOTAL_FILTER_ID: &str = "order_total";

/// An ordered mapping from filter identifier to display label.
///
/// The host renders the options in mapping order, so insertion position is
/// part of the contract. Duplicate policy: inserting an identifier that is
/// already present replaces the old entry entirely, and the new entry wins
/// both its label and its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterOptions {
    entries: Vec<(String, String)>,
}

impl FilterOptions {
    /// Create an empty option mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a label by filter identifier.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, label)| label.as_str())
    }

    /// Append an option at the end of the mapping.
    pub fn push(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        self.remove(&id);
        self.entries.push((id, label.into()));
    }

    /// Insert an option at the front of the mapping, preserving the relative
    /// order of all other entries.
    pub fn insert_front(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        self.remove(&id);
        self.entries.insert(0, (id, label.into()));
    }

    /// Remove an option. Returns the removed label, if any.
    pub fn remove(&mut self, id: &str) -> Option<String> {
        let position = self.entries.iter().position(|(entry_id, _)| entry_id == id)?;
        Some(self.entries.remove(position).1)
    }

    /// Iterate `(id, label)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_str()))
    }
}

impl FromIterator<(String, String)> for FilterOptions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (id, label) in iter {
            options.push(id, label);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilterOptions {
        let mut options = FilterOptions::new();
        options.push("order_id", "Order ID");
        options.push("customer_email", "Customer Email");
        options
    }

    #[test]
    fn test_insert_front_preserves_existing_order() {
        let mut options = sample();
        options.insert_front(ORDER_TOTAL_FILTER_ID, "Order Total");

        let ids: Vec<&str> = options.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![ORDER_TOTAL_FILTER_ID, "order_id", "customer_email"]);
    }

    #[test]
    fn test_insert_front_into_empty_mapping() {
        let mut options = FilterOptions::new();
        options.insert_front(ORDER_TOTAL_FILTER_ID, "Order Total");

        assert_eq!(options.len(), 1);
        assert_eq!(options.get(ORDER_TOTAL_FILTER_ID), Some("Order Total"));
    }

    #[test]
    fn test_duplicate_insert_replaces_entry() {
        let mut options = sample();
        options.insert_front(ORDER_TOTAL_FILTER_ID, "Order Total");
        options.insert_front(ORDER_TOTAL_FILTER_ID, "Total (incl. tax)");

        // The new entry wins both label and position; no duplicate remains.
        assert_eq!(options.len(), 3);
        assert_eq!(options.get(ORDER_TOTAL_FILTER_ID), Some("Total (incl. tax)"));
        assert_eq!(options.iter().next(), Some((ORDER_TOTAL_FILTER_ID, "Total (incl. tax)")));
    }

    #[test]
    fn test_push_replaces_in_place() {
        let mut options = sample();
        options.push("order_id", "Order Number");

        assert_eq!(options.len(), 2);
        assert_eq!(options.get("order_id"), Some("Order Number"));
    }

    #[test]
    fn test_remove() {
        let mut options = sample();
        assert_eq!(options.remove("order_id"), Some("Order ID".to_string()));
        assert_eq!(options.remove("order_id"), None);
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let mut options = sample();
        options.insert_front(ORDER_TOTAL_FILTER_ID, "Order Total");

        let json = serde_json::to_string(&options).unwrap();
        let restored: FilterOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, options);
    }
}
