use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use super::aggregate::Driver;
use crate::domain::a003_driver_assignment::{AssignedOrder, AssignmentRecord};
use crate::shared::address;

const PLACEHOLDER_STUDIOS: [&str; 8] = [
    "PKC Laundries",
    "MagicKlean",
    "Cleanovo",
    "UClean",
    "Tumbledry",
    "Washmart",
    "We Washh",
    "The Laundry Basket",
];

const PLACEHOLDER_STATUSES: [&str; 5] = [
    "new",
    "in-progress",
    "ready-for-collect",
    "collected",
    "delivered",
];

/// Tabs of the drivers page, plus the status filters used elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverTab {
    All,
    Active,
    Inactive,
    WithAssignments,
    Available,
}

impl DriverTab {
    pub fn code(&self) -> &'static str {
        match self {
            DriverTab::All => "all",
            DriverTab::Active => "active",
            DriverTab::Inactive => "inactive",
            DriverTab::WithAssignments => "assignments",
            DriverTab::Available => "available",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DriverTab::All => "Drivers List",
            DriverTab::Active => "Active",
            DriverTab::Inactive => "Inactive",
            DriverTab::WithAssignments => "Order Assignments",
            DriverTab::Available => "Available Drivers",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "active" => DriverTab::Active,
            "inactive" => DriverTab::Inactive,
            "assignments" => DriverTab::WithAssignments,
            "available" => DriverTab::Available,
            _ => DriverTab::All,
        }
    }

    pub fn matches(&self, driver: &Driver) -> bool {
        match self {
            DriverTab::All => true,
            DriverTab::Active => driver.is_active(),
            DriverTab::Inactive => !driver.is_active(),
            DriverTab::WithAssignments => driver.has_assignments(),
            DriverTab::Available => driver.is_available(),
        }
    }
}

/// Badge shown next to a driver in the assignment dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverBadge {
    Unavailable,
    Orders(usize),
    Free,
}

impl DriverBadge {
    pub fn for_driver(driver: &Driver) -> Self {
        if !driver.is_active() {
            DriverBadge::Unavailable
        } else if driver.has_assignments() {
            DriverBadge::Orders(driver.assigned_orders)
        } else {
            DriverBadge::Free
        }
    }

    pub fn text(&self) -> String {
        match self {
            DriverBadge::Unavailable => "Unavailable".to_string(),
            DriverBadge::Orders(n) => format!("{} Orders", n),
            DriverBadge::Free => "✓".to_string(),
        }
    }
}

/// One row of the "Order Assignments" tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedOrderListing {
    pub driver_id: String,
    pub driver_name: String,
    pub order: AssignedOrder,
}

impl AssignedOrderListing {
    /// Studio if known, else the customer
    pub fn party(&self) -> &str {
        self.order
            .studio
            .as_deref()
            .or(self.order.customer.as_deref())
            .unwrap_or("")
    }

    pub fn address(&self) -> &str {
        self.order
            .studio_address
            .as_deref()
            .or(self.order.customer_address.as_deref())
            .unwrap_or("")
    }
}

/// Driver list held by a view, with the derived assignment counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverRoster {
    drivers: Vec<Driver>,
    /// Orders seen per driver, keyed by driver id
    assignments: BTreeMap<String, Vec<AssignedOrder>>,
}

impl DriverRoster {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self {
            drivers,
            assignments: BTreeMap::new(),
        }
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn find(&self, driver_id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == driver_id)
    }

    pub fn filtered(&self, tab: DriverTab) -> Vec<Driver> {
        self.drivers
            .iter()
            .filter(|d| tab.matches(d))
            .cloned()
            .collect()
    }

    pub fn available_count(&self) -> usize {
        self.drivers.iter().filter(|d| d.is_available()).count()
    }

    pub fn total(&self) -> usize {
        self.drivers.len()
    }

    pub fn toggle_status(&mut self, driver_id: &str) {
        if let Some(driver) = self.drivers.iter_mut().find(|d| d.id == driver_id) {
            driver.toggle_status();
        }
    }

    /// Fold an assignment record into the counters.
    ///
    /// Returns the number of orders applied, or `None` when the record is
    /// empty and nothing changed.
    pub fn apply_assignment(&mut self, record: &AssignmentRecord) -> Option<usize> {
        if record.is_empty() {
            return None;
        }
        let count = record.order_count();
        self.assignments
            .insert(record.driver_id.clone(), record.orders.clone());
        if let Some(driver) = self
            .drivers
            .iter_mut()
            .find(|d| d.id == record.driver_id)
        {
            driver.assigned_orders = count;
        }
        Some(count)
    }

    /// Every order seen across all drivers, flattened with driver names
    pub fn assigned_orders(&self) -> Vec<AssignedOrderListing> {
        self.assignments
            .iter()
            .flat_map(|(driver_id, orders)| {
                let driver_name = self
                    .find(driver_id)
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                orders.iter().map(move |order| AssignedOrderListing {
                    driver_id: driver_id.clone(),
                    driver_name: driver_name.clone(),
                    order: order.clone(),
                })
            })
            .collect()
    }

    /// Order of the assignment dialog: idle drivers first, then active
    /// before inactive, then by name
    pub fn sorted_for_dialog(&self) -> Vec<Driver> {
        let mut drivers = self.drivers.clone();
        drivers.sort_by(dialog_order);
        drivers
    }

    /// Orders listed on a driver's assigned-orders page: the stored record
    /// when it belongs to that driver, else placeholders sized by the
    /// driver's assigned count. Unknown drivers get nothing.
    pub fn orders_for(
        &self,
        driver_id: &str,
        stored: Option<&AssignmentRecord>,
    ) -> Vec<AssignedOrder> {
        if let Some(record) = stored.filter(|r| r.belongs_to(driver_id)) {
            return record.orders.clone();
        }
        self.find(driver_id)
            .map(placeholder_orders)
            .unwrap_or_default()
    }
}

/// Deterministic stand-in orders for a driver whose assignments were not
/// recorded in this browser
pub fn placeholder_orders(driver: &Driver) -> Vec<AssignedOrder> {
    let number: u64 = driver
        .id
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0);
    let base = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap_or_default();

    (0..driver.assigned_orders)
        .map(|i| {
            let id = format!("order-{}-{}", driver.id, i + 1);
            let seed = address::seed_of(&id);
            let studio = PLACEHOLDER_STUDIOS[(seed % PLACEHOLDER_STUDIOS.len() as u64) as usize];
            let status =
                PLACEHOLDER_STATUSES[((seed >> 8) % PLACEHOLDER_STATUSES.len() as u64) as usize];
            let date = base - Duration::days(((seed >> 16) % 7) as i64);

            AssignedOrder {
                order_id: format!("ORD-{}", 10_000 + number * 100 + i as u64),
                customer: Some(format!("Customer {}", i + 1)),
                customer_address: Some(address::generate_address(&id)),
                studio: Some(studio.to_string()),
                studio_address: Some(address::studio_address_or_default(studio)),
                date: Some(date.format("%Y-%m-%d").to_string()),
                status: Some(status.to_string()),
                id,
            }
        })
        .collect()
}

fn dialog_order(a: &Driver, b: &Driver) -> Ordering {
    let a_busy = a.assigned_orders != 0;
    let b_busy = b.assigned_orders != 0;
    a_busy
        .cmp(&b_busy)
        .then_with(|| (!a.is_active()).cmp(&!b.is_active()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DriverStatus;

    fn driver(id: &str, name: &str, status: DriverStatus, assigned: usize) -> Driver {
        Driver {
            id: id.to_string(),
            name: name.to_string(),
            phone: String::new(),
            location: String::new(),
            status,
            assigned_orders: assigned,
            total_deliveries: 0,
            rating: 4.5,
        }
    }

    fn roster() -> DriverRoster {
        DriverRoster::new(vec![
            driver("D-1001", "Raj Kumar", DriverStatus::Active, 0),
            driver("D-1002", "Priya Sharma", DriverStatus::Active, 2),
            driver("D-1005", "Vikram Singh", DriverStatus::Inactive, 0),
            driver("D-1006", "Sneha Reddy", DriverStatus::Active, 0),
        ])
    }

    #[test]
    fn test_tab_filters() {
        let r = roster();
        assert_eq!(r.filtered(DriverTab::All).len(), 4);
        assert_eq!(r.filtered(DriverTab::Inactive).len(), 1);
        assert_eq!(r.filtered(DriverTab::WithAssignments)[0].id, "D-1002");
        let available: Vec<_> = r
            .filtered(DriverTab::Available)
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(available, vec!["D-1001", "D-1006"]);
        assert_eq!(r.available_count(), 2);
    }

    #[test]
    fn test_dialog_sort() {
        let names: Vec<_> = roster()
            .sorted_for_dialog()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec!["Raj Kumar", "Sneha Reddy", "Vikram Singh", "Priya Sharma"]
        );
    }

    #[test]
    fn test_apply_assignment_updates_count() {
        let mut r = roster();
        let record = AssignmentRecord::new("D-1001", vec![AssignedOrder::with_id("O1")]);
        assert_eq!(r.apply_assignment(&record), Some(1));
        assert_eq!(r.find("D-1001").unwrap().assigned_orders, 1);
        assert!(!r.find("D-1001").unwrap().is_available());
    }

    #[test]
    fn test_apply_assignment_ignores_empty_records() {
        let mut r = roster();
        assert_eq!(r.apply_assignment(&AssignmentRecord::new("", vec![AssignedOrder::with_id("O1")])), None);
        assert_eq!(r.apply_assignment(&AssignmentRecord::new("D-1001", vec![])), None);
        assert_eq!(r, roster());
    }

    #[test]
    fn test_assigned_orders_unknown_driver() {
        let mut r = roster();
        let mut order = AssignedOrder::with_id("O7");
        order.customer = Some("Rajesh Kumar".to_string());
        order.customer_address = Some("42, Jubilee Hills".to_string());
        r.apply_assignment(&AssignmentRecord::new("D-9999", vec![order]));
        r.apply_assignment(&AssignmentRecord::new("D-1006", vec![AssignedOrder::with_id("O8")]));

        let rows = r.assigned_orders();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].driver_name, "Sneha Reddy");
        assert_eq!(rows[1].driver_name, "Unknown");
        assert_eq!(rows[1].party(), "Rajesh Kumar");
        assert_eq!(rows[1].address(), "42, Jubilee Hills");
    }

    #[test]
    fn test_badges() {
        let r = roster();
        assert_eq!(DriverBadge::for_driver(r.find("D-1005").unwrap()), DriverBadge::Unavailable);
        assert_eq!(DriverBadge::for_driver(r.find("D-1002").unwrap()).text(), "2 Orders");
        assert_eq!(DriverBadge::for_driver(r.find("D-1001").unwrap()), DriverBadge::Free);
    }

    #[test]
    fn test_orders_for_prefers_stored_record() {
        let r = roster();
        let record = AssignmentRecord::new("D-1002", vec![AssignedOrder::with_id("ORD-0004")]);
        let orders = r.orders_for("D-1002", Some(&record));
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, "ORD-0004");
    }

    #[test]
    fn test_orders_for_placeholders() {
        let r = roster();
        let record = AssignmentRecord::new("D-1001", vec![AssignedOrder::with_id("ORD-0004")]);
        let orders = r.orders_for("D-1002", Some(&record));
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "order-D-1002-1");
        assert_eq!(orders[0].order_id, "ORD-110200");
        assert_eq!(orders[1].customer.as_deref(), Some("Customer 2"));
        // Stable across calls
        assert_eq!(orders, r.orders_for("D-1002", None));
        assert!(r.orders_for("D-1001", None).is_empty());
        assert!(r.orders_for("D-4040", None).is_empty());
    }

    #[test]
    fn test_tab_codes() {
        assert_eq!(DriverTab::from_code("assignments"), DriverTab::WithAssignments);
        assert_eq!(DriverTab::from_code("whatever"), DriverTab::All);
    }
}
