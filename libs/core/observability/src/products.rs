//! Catalog metrics for product operations.

use metrics::{counter, gauge, histogram};

/// Product metrics recorder
pub struct ProductMetrics;

impl ProductMetrics {
    fn record_operation(operation: &'static str, outcome: &'static str) {
        counter!(
            "product_operations_total",
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);
    }

    pub fn record_listed() {
        Self::record_operation("list", "success");
    }

    pub fn record_created() {
        Self::record_operation("create", "success");
    }

    pub fn record_updated() {
        Self::record_operation("update", "success");
    }

    pub fn record_deleted() {
        Self::record_operation("delete", "success");
    }

    /// Record a search and how many products it matched
    pub fn record_search(results: usize) {
        Self::record_operation("search", "success");
        histogram!("product_search_results").record(results as f64);
    }

    /// Record a request rejected by validation
    pub fn record_rejected(operation: &'static str) {
        Self::record_operation(operation, "rejected");
    }

    /// Record a lookup of an id that does not exist
    pub fn record_not_found(operation: &'static str) {
        Self::record_operation(operation, "not_found");
    }

    pub fn set_catalog_size(size: usize) {
        gauge!("products_in_catalog").set(size as f64);
    }
}
