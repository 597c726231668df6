use serde::{Deserialize, Serialize};

/// Coarse lifecycle status of a laundry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    New,
    Received,
    InProgress,
    ReadyForCollect,
    Collected,
    Delivered,
    Cancelled,
    /// Legacy value still found in older stored rows
    Completed,
}

/// Label used when the status code is not recognised
pub const FALLBACK_LABEL: &str = "New Order";

impl OrderStatus {
    /// Wire code, as stored in order rows and in the assignment record
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Received => "received",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::ReadyForCollect => "ready-for-collect",
            OrderStatus::Collected => "collected",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Completed => "completed",
        }
    }

    /// Canonical badge label
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "New Order",
            OrderStatus::Received => "Order Received",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::ReadyForCollect => "Ready for collection",
            OrderStatus::Collected => "Collected",
            OrderStatus::Delivered => "Order Delivered",
            OrderStatus::Cancelled => "Order cancelled",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Short label used by the status filter tabs
    pub fn tab_label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Received => "Received",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::ReadyForCollect => "Ready for Collection",
            OrderStatus::Collected => "Collected",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Completed => "Completed",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::New => "status-new",
            OrderStatus::Received => "status-received",
            OrderStatus::InProgress => "status-in-progress",
            OrderStatus::ReadyForCollect => "status-ready",
            OrderStatus::Collected => "status-in-progress",
            OrderStatus::Delivered | OrderStatus::Completed => "status-delivered",
            OrderStatus::Cancelled => "status-cancelled",
        }
    }

    /// The lifecycle statuses an order can be in today (without the legacy value)
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::Received,
            OrderStatus::InProgress,
            OrderStatus::ReadyForCollect,
            OrderStatus::Collected,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(OrderStatus::New),
            "received" => Some(OrderStatus::Received),
            "in-progress" => Some(OrderStatus::InProgress),
            "ready-for-collect" => Some(OrderStatus::ReadyForCollect),
            "collected" => Some(OrderStatus::Collected),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    pub fn is_ready_for_collect(&self) -> bool {
        matches!(self, OrderStatus::ReadyForCollect)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonical label for a raw status code.
///
/// Unknown codes are logged and shown as "New Order".
pub fn canonical_label(code: &str) -> &'static str {
    match OrderStatus::from_code(code) {
        Some(status) => status.display_name(),
        None => {
            log::warn!("Unknown order status: {}", code);
            FALLBACK_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_every_status() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("completed"), Some(OrderStatus::Completed));
    }

    #[test]
    fn test_canonical_labels() {
        assert_eq!(canonical_label("new"), "New Order");
        assert_eq!(canonical_label("received"), "Order Received");
        assert_eq!(canonical_label("in-progress"), "In Progress");
        assert_eq!(canonical_label("ready-for-collect"), "Ready for collection");
        assert_eq!(canonical_label("delivered"), "Order Delivered");
        assert_eq!(canonical_label("cancelled"), "Order cancelled");
        assert_eq!(canonical_label("completed"), "Completed");
        assert_eq!(canonical_label("collected"), "Collected");
    }

    #[test]
    fn test_unknown_status_defaults_to_new_order() {
        assert_eq!(canonical_label("Pending"), FALLBACK_LABEL);
        assert_eq!(canonical_label(""), FALLBACK_LABEL);
    }

    #[test]
    fn test_serde_uses_kebab_codes() {
        let json = serde_json::to_string(&OrderStatus::ReadyForCollect).unwrap();
        assert_eq!(json, "\"ready-for-collect\"");
        let parsed: OrderStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, OrderStatus::InProgress);
    }
}
