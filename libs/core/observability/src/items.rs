//! Item operation metrics.

use metrics::counter;

/// Item metrics recorder
pub struct ItemMetrics;

impl ItemMetrics {
    pub fn record_created() {
        counter!("items_operations_total", "operation" => "create", "outcome" => "ok").increment(1);
    }

    pub fn record_updated() {
        counter!("items_operations_total", "operation" => "update", "outcome" => "ok").increment(1);
    }

    pub fn record_deleted() {
        counter!("items_operations_total", "operation" => "delete", "outcome" => "ok").increment(1);
    }

    /// Record a lookup that found nothing for `operation` (get, update, delete)
    pub fn record_not_found(operation: &'static str) {
        counter!("items_operations_total", "operation" => operation, "outcome" => "not_found")
            .increment(1);
    }
}
