use contracts::domain::a001_order::Order;
use contracts::enums::{OrderStatus, WashType};
use once_cell::sync::Lazy;

struct Seed {
    id: &'static str,
    date: &'static str,
    customer: &'static str,
    status: OrderStatus,
    studio: &'static str,
    driver: Option<&'static str>,
    total: f64,
    delivery_date: Option<&'static str>,
    wash_type: WashType,
    phone: &'static str,
    customer_address: &'static str,
    studio_address: &'static str,
}

impl Seed {
    fn into_order(self) -> Order {
        Order {
            id: self.id.to_string(),
            order_date: self.date.to_string(),
            customer: self.customer.to_string(),
            status: self.status,
            studio: self.studio.to_string(),
            assigned: self.driver.is_some(),
            driver: self.driver.map(str::to_string),
            total: self.total,
            delivery_date: self.delivery_date.map(str::to_string),
            wash_type: self.wash_type,
            phone: Some(self.phone.to_string()),
            customer_address: Some(self.customer_address.to_string()),
            studio_address: Some(self.studio_address.to_string()),
            picked_up: None,
            picked_up_time: None,
            dropped: None,
            dropped_time: None,
        }
    }
}

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Seed {
            id: "ORD-0001",
            date: "2025-03-02",
            customer: "Rajesh Kumar",
            status: OrderStatus::Delivered,
            studio: "PKC Laundries",
            driver: Some("Anand Reddy"),
            total: 950.0,
            delivery_date: Some("2025-03-05"),
            wash_type: WashType::Standard,
            phone: "+91 9876543210",
            customer_address: "42, Jubilee Hills, Hyderabad",
            studio_address: "PKC Laundries, Road No. 5, Banjara Hills",
        },
        Seed {
            id: "ORD-0002",
            date: "2025-03-04",
            customer: "Priya Sharma",
            status: OrderStatus::InProgress,
            studio: "MagicKlean",
            driver: Some("Kavya Singh"),
            total: 755.0,
            delivery_date: None,
            wash_type: WashType::Express,
            phone: "+91 8765432109",
            customer_address: "28, Madhapur, Hyderabad",
            studio_address: "MagicKlean, Ayyappa Society, Madhapur",
        },
        Seed {
            id: "ORD-0003",
            date: "2025-03-05",
            customer: "Arun Verma",
            status: OrderStatus::ReadyForCollect,
            studio: "Cleanovo",
            driver: Some("Ravi Teja"),
            total: 1200.0,
            delivery_date: None,
            wash_type: WashType::Both,
            phone: "+91 7654321098",
            customer_address: "15, Gachibowli, Hyderabad",
            studio_address: "Cleanovo, Kothaguda Cross Roads, Kondapur",
        },
        Seed {
            id: "ORD-0004",
            date: "2025-03-08",
            customer: "Deepika Reddy",
            status: OrderStatus::New,
            studio: "UClean",
            driver: None,
            total: 890.0,
            delivery_date: None,
            wash_type: WashType::Standard,
            phone: "+91 6543210987",
            customer_address: "72, Kukatpally, Hyderabad",
            studio_address: "UClean, KPHB Colony, Kukatpally",
        },
        Seed {
            id: "ORD-0005",
            date: "2025-03-01",
            customer: "Venkat Rao",
            status: OrderStatus::Cancelled,
            studio: "Tumbledry",
            driver: None,
            total: 0.0,
            delivery_date: None,
            wash_type: WashType::Express,
            phone: "+91 5432109876",
            customer_address: "39, Ameerpet, Hyderabad",
            studio_address: "Tumbledry, SR Nagar, Hyderabad",
        },
        Seed {
            id: "ORD-0006",
            date: "2025-03-09",
            customer: "Sneha Reddy",
            status: OrderStatus::Received,
            studio: "Washmart",
            driver: None,
            total: 675.0,
            delivery_date: None,
            wash_type: WashType::Standard,
            phone: "+91 4321098765",
            customer_address: "56, Secunderabad, Hyderabad",
            studio_address: "Washmart, Paradise Circle, Secunderabad",
        },
        Seed {
            id: "ORD-0007",
            date: "2025-02-20",
            customer: "Rahul Chowdary",
            status: OrderStatus::Delivered,
            studio: "We Washh",
            driver: Some("Srinivas Kumar"),
            total: 1450.0,
            delivery_date: Some("2025-02-23"),
            wash_type: WashType::Both,
            phone: "+91 9876543211",
            customer_address: "23, Hitech City, Hyderabad",
            studio_address: "We Washh, Cyber Towers, Hitech City",
        },
        Seed {
            id: "ORD-0008",
            date: "2025-02-22",
            customer: "Neha Singh",
            status: OrderStatus::Delivered,
            studio: "The Laundry Basket",
            driver: Some("Anand Reddy"),
            total: 875.0,
            delivery_date: Some("2025-02-25"),
            wash_type: WashType::Standard,
            phone: "+91 8765432110",
            customer_address: "48, Manikonda, Hyderabad",
            studio_address: "The Laundry Basket, OU Colony, Shaikpet",
        },
        Seed {
            id: "ORD-0009",
            date: "2025-02-24",
            customer: "Kiran Reddy",
            status: OrderStatus::Delivered,
            studio: "FABO",
            driver: Some("Kavya Singh"),
            total: 1100.0,
            delivery_date: Some("2025-02-26"),
            wash_type: WashType::Express,
            phone: "+91 7654321099",
            customer_address: "84, Miyapur, Hyderabad",
            studio_address: "FABO, Miyapur X Roads, Miyapur",
        },
        Seed {
            id: "ORD-0010",
            date: "2025-02-26",
            customer: "Ananya Desai",
            status: OrderStatus::Delivered,
            studio: "Sunshine",
            driver: Some("Ravi Teja"),
            total: 1150.0,
            delivery_date: Some("2025-03-01"),
            wash_type: WashType::Both,
            phone: "+91 6543210988",
            customer_address: "33, Begumpet, Hyderabad",
            studio_address: "Sunshine, Prakash Nagar, Begumpet",
        },
        Seed {
            id: "ORD-0011",
            date: "2025-03-10",
            customer: "Vikram Malhotra",
            status: OrderStatus::New,
            studio: "Bhavani BAND BOX",
            driver: None,
            total: 780.0,
            delivery_date: None,
            wash_type: WashType::Standard,
            phone: "+91 5432109877",
            customer_address: "12, Somajiguda, Hyderabad",
            studio_address: "Bhavani BAND BOX, Khairatabad X Roads, Somajiguda",
        },
        Seed {
            id: "ORD-0012",
            date: "2025-03-07",
            customer: "Aarti Patel",
            status: OrderStatus::ReadyForCollect,
            studio: "Balus Modern",
            driver: Some("Kavya Singh"),
            total: 1320.0,
            delivery_date: None,
            wash_type: WashType::Express,
            phone: "+91 4321098766",
            customer_address: "62, Tarnaka, Hyderabad",
            studio_address: "Balus Modern, Habsiguda, Tarnaka",
        },
    ]
    .into_iter()
    .map(Seed::into_order)
    .collect()
});

/// Orders whose pickup or delivery slot was moved
static RESCHEDULED: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Seed {
            id: "ORD-R001",
            date: "2025-03-06",
            customer: "Sanjay Mehta",
            status: OrderStatus::New,
            studio: "Laundry Express",
            driver: None,
            total: 640.0,
            delivery_date: None,
            wash_type: WashType::Express,
            phone: "+91 9123456780",
            customer_address: "18, Banjara Hills, Hyderabad",
            studio_address: "Laundry Express, Road No. 12, Banjara Hills",
        },
        Seed {
            id: "ORD-R002",
            date: "2025-03-03",
            customer: "Deepika Reddy",
            status: OrderStatus::ReadyForCollect,
            studio: "UClean",
            driver: None,
            total: 910.0,
            delivery_date: None,
            wash_type: WashType::Standard,
            phone: "+91 6543210987",
            customer_address: "72, Kukatpally, Hyderabad",
            studio_address: "UClean, KPHB Colony, Kukatpally",
        },
    ]
    .into_iter()
    .map(Seed::into_order)
    .collect()
});

pub fn all_orders() -> Vec<Order> {
    ORDERS.clone()
}

pub fn rescheduled_orders() -> Vec<Order> {
    RESCHEDULED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all_orders()
            .into_iter()
            .chain(rescheduled_orders())
            .map(|o| o.id)
            .collect();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_unassigned_orders() {
        let unassigned: Vec<_> = all_orders()
            .into_iter()
            .filter(|o| !o.assigned)
            .map(|o| o.id)
            .collect();
        assert_eq!(unassigned, vec!["ORD-0004", "ORD-0005", "ORD-0006", "ORD-0011"]);
    }
}
