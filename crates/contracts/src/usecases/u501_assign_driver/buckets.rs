use std::collections::HashSet;

use crate::domain::a001_order::{Order, OrderRow};
use crate::enums::OrderStatus;

/// Tabs of the order assignment page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssignmentTab {
    New,
    Ready,
    Rescheduled,
}

impl AssignmentTab {
    pub fn code(&self) -> &'static str {
        match self {
            AssignmentTab::New => "new",
            AssignmentTab::Ready => "ready",
            AssignmentTab::Rescheduled => "rescheduled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssignmentTab::New => "New Orders",
            AssignmentTab::Ready => "Ready for Collection",
            AssignmentTab::Rescheduled => "Rescheduled",
        }
    }

    /// Counter shown next to the table title, e.g. "3 Orders Pending"
    pub fn count_caption(&self, count: usize) -> String {
        let suffix = match self {
            AssignmentTab::New => "Pending",
            AssignmentTab::Ready => "Ready",
            AssignmentTab::Rescheduled => "Rescheduled",
        };
        format!("{} Orders {}", count, suffix)
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            AssignmentTab::New => "No new orders",
            AssignmentTab::Ready => "No orders ready for collection",
            AssignmentTab::Rescheduled => "No rescheduled orders",
        }
    }

    pub fn all() -> [AssignmentTab; 3] {
        [
            AssignmentTab::New,
            AssignmentTab::Ready,
            AssignmentTab::Rescheduled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(AssignmentTab::New),
            "ready" => Some(AssignmentTab::Ready),
            "rescheduled" => Some(AssignmentTab::Rescheduled),
            _ => None,
        }
    }
}

/// Bucket a rescheduled order also counts toward: ready only when its status
/// is exactly `ready-for-collect`, new otherwise
pub fn classify_rescheduled(row: &OrderRow) -> AssignmentTab {
    match row.status() {
        Some(OrderStatus::ReadyForCollect) => AssignmentTab::Ready,
        _ => AssignmentTab::New,
    }
}

/// Rows of the three assignment tabs, without already assigned orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBuckets {
    pub new_orders: Vec<OrderRow>,
    pub ready_orders: Vec<OrderRow>,
    pub rescheduled_orders: Vec<OrderRow>,
}

impl OrderBuckets {
    pub fn build(orders: &[Order], rescheduled: &[Order], assigned: &HashSet<String>) -> Self {
        let open = |o: &&Order| !assigned.contains(&o.id);
        let rows_with = |status: OrderStatus| -> Vec<OrderRow> {
            orders
                .iter()
                .filter(|o| o.status == status)
                .filter(open)
                .map(OrderRow::from_order)
                .collect()
        };

        Self {
            new_orders: rows_with(OrderStatus::New),
            ready_orders: rows_with(OrderStatus::ReadyForCollect),
            rescheduled_orders: rescheduled
                .iter()
                .filter(open)
                .map(OrderRow::from_order)
                .collect(),
        }
    }

    pub fn rows(&self, tab: AssignmentTab) -> &[OrderRow] {
        match tab {
            AssignmentTab::New => &self.new_orders,
            AssignmentTab::Ready => &self.ready_orders,
            AssignmentTab::Rescheduled => &self.rescheduled_orders,
        }
    }

    /// First tab, in page order, holding `id`
    pub fn tab_of(&self, id: &str) -> Option<AssignmentTab> {
        AssignmentTab::all()
            .into_iter()
            .find(|tab| self.rows(*tab).iter().any(|r| r.id == id))
    }

    pub fn find(&self, id: &str) -> Option<&OrderRow> {
        AssignmentTab::all()
            .into_iter()
            .find_map(|tab| self.rows(tab).iter().find(|r| r.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::WashType;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            order_date: "2025-03-10".to_string(),
            customer: "Customer".to_string(),
            status,
            studio: "UClean".to_string(),
            driver: None,
            total: 0.0,
            delivery_date: None,
            wash_type: WashType::Standard,
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
    fn test_buckets_exclude_assigned() {
        let orders = vec![
            order("ORD-1", OrderStatus::New),
            order("ORD-2", OrderStatus::New),
            order("ORD-3", OrderStatus::ReadyForCollect),
            order("ORD-4", OrderStatus::Delivered),
        ];
        let rescheduled = vec![order("ORD-R1", OrderStatus::New)];
        let assigned: HashSet<String> = ["ORD-2".to_string()].into_iter().collect();

        let buckets = OrderBuckets::build(&orders, &rescheduled, &assigned);
        assert_eq!(buckets.new_orders.len(), 1);
        assert_eq!(buckets.new_orders[0].id, "ORD-1");
        assert_eq!(buckets.ready_orders[0].id, "ORD-3");
        assert_eq!(buckets.rescheduled_orders[0].id, "ORD-R1");
        assert_eq!(buckets.tab_of("ORD-R1"), Some(AssignmentTab::Rescheduled));
        assert_eq!(buckets.tab_of("ORD-4"), None);
    }

    #[test]
    fn test_classify_rescheduled() {
        let ready = OrderRow::from_order(&order("R1", OrderStatus::ReadyForCollect));
        let received = OrderRow::from_order(&order("R2", OrderStatus::Received));
        let mut no_status = received.clone();
        no_status.status = None;
        assert_eq!(classify_rescheduled(&ready), AssignmentTab::Ready);
        assert_eq!(classify_rescheduled(&received), AssignmentTab::New);
        assert_eq!(classify_rescheduled(&no_status), AssignmentTab::New);
    }

    #[test]
    fn test_count_caption() {
        assert_eq!(AssignmentTab::New.count_caption(3), "3 Orders Pending");
        assert_eq!(AssignmentTab::Rescheduled.count_caption(1), "1 Orders Rescheduled");
    }
}
