use crate::domain::a003_driver_assignment::AssignedOrder;
use crate::enums::{OrderStatus, WashType};
use crate::shared::address;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Laundry order as held by the mock dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_date: String,
    pub customer: String,
    pub status: OrderStatus,
    pub studio: String,
    #[serde(default)]
    pub driver: Option<String>,
    pub total: f64,
    #[serde(default)]
    pub delivery_date: Option<String>,
    pub wash_type: WashType,
    #[serde(default)]
    pub assigned: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub studio_address: Option<String>,

    // Trip progress, when the driver app has reported it
    #[serde(default)]
    pub picked_up: Option<bool>,
    #[serde(default)]
    pub picked_up_time: Option<String>,
    #[serde(default)]
    pub dropped: Option<bool>,
    #[serde(default)]
    pub dropped_time: Option<String>,
}

impl Order {
    /// Customer address, generated from the order id when the dataset has none
    pub fn customer_address_or_generated(&self) -> String {
        self.customer_address
            .clone()
            .unwrap_or_else(|| address::generate_address(&self.id))
    }

    pub fn studio_address_or_default(&self) -> String {
        self.studio_address
            .clone()
            .unwrap_or_else(|| address::studio_address_or_default(&self.studio))
    }
}

// ============================================================================
// Table row
// ============================================================================

/// Flattened order used by the assignment tables and dialogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub order_id: String,
    pub date: String,
    pub customer: String,
    pub phone: String,
    pub customer_address: String,
    pub studio_address: String,
    pub studio: String,
    pub wash_type: String,
    pub distance: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl OrderRow {
    pub fn from_order(order: &Order) -> Self {
        let customer_address = order.customer_address_or_generated();
        let studio_address = order.studio_address_or_default();
        let distance = address::estimate_distance(&customer_address, &studio_address);

        Self {
            id: order.id.clone(),
            order_id: order.id.clone(),
            date: order.order_date.clone(),
            customer: order.customer.clone(),
            phone: order
                .phone
                .clone()
                .unwrap_or_else(|| address::generate_phone(&order.id)),
            customer_address,
            studio_address,
            studio: order.studio.clone(),
            wash_type: order.wash_type.display_name().to_string(),
            distance,
            status: Some(order.status.code().to_string()),
        }
    }

    pub fn from_orders(orders: &[Order]) -> Vec<Self> {
        orders.iter().map(Self::from_order).collect()
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status.as_deref().and_then(OrderStatus::from_code)
    }

    /// Shape persisted in the assignment record
    pub fn to_assigned(&self) -> AssignedOrder {
        AssignedOrder {
            id: self.id.clone(),
            order_id: self.order_id.clone(),
            customer: Some(self.customer.clone()),
            customer_address: Some(self.customer_address.clone()),
            studio: Some(self.studio.clone()),
            studio_address: Some(self.studio_address.clone()),
            date: Some(self.date.clone()),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            order_date: "2025-03-10".to_string(),
            customer: "Rajesh Kumar".to_string(),
            status: OrderStatus::New,
            studio: "UClean".to_string(),
            driver: None,
            total: 950.0,
            delivery_date: None,
            wash_type: WashType::Express,
            assigned: false,
            phone: None,
            customer_address: None,
            studio_address: None,
            picked_up: None,
            picked_up_time: None,
            dropped: None,
            dropped_time: None,
        }
    }

    #[test]
    fn test_row_mapping_fills_missing_fields() {
        let row = OrderRow::from_order(&order("ORD-0042"));
        assert_eq!(row.id, "ORD-0042");
        assert_eq!(row.order_id, "ORD-0042");
        assert_eq!(row.wash_type, "Express Wash");
        assert_eq!(row.studio_address, "UClean, KPHB Colony, Kukatpally");
        assert!(row.customer_address.ends_with("Hyderabad, India"));
        assert!(row.phone.starts_with("+91 "));
        assert_eq!(row.status.as_deref(), Some("new"));
        assert!(row.distance.ends_with(" km"));
    }

    #[test]
    fn test_row_mapping_keeps_provided_fields() {
        let mut o = order("ORD-0001");
        o.studio = "Unlisted".to_string();
        o.customer_address = Some("42, Jubilee Hills, Hyderabad".to_string());
        o.phone = Some("+91 9876543210".to_string());
        let row = OrderRow::from_order(&o);
        assert_eq!(row.customer_address, "42, Jubilee Hills, Hyderabad");
        assert_eq!(row.phone, "+91 9876543210");
        assert_eq!(row.studio_address, "Unlisted Studio, Hyderabad");
    }

    #[test]
    fn test_to_assigned_keeps_identity_and_status() {
        let row = OrderRow::from_order(&order("ORD-0005"));
        let assigned = row.to_assigned();
        assert_eq!(assigned.id, "ORD-0005");
        assert_eq!(assigned.order_id, "ORD-0005");
        assert_eq!(assigned.status.as_deref(), Some("new"));
        assert_eq!(assigned.studio.as_deref(), Some("UClean"));
    }
}
