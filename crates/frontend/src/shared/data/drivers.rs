use contracts::domain::a002_driver::Driver;
use contracts::enums::DriverStatus;

#[allow(clippy::too_many_arguments)]
fn driver(
    id: &str,
    name: &str,
    phone: &str,
    location: &str,
    status: DriverStatus,
    assigned_orders: usize,
    total_deliveries: u32,
    rating: f32,
) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
        status,
        assigned_orders,
        total_deliveries,
        rating,
    }
}

/// Driver roster as loaded by every page
pub fn sample_drivers() -> Vec<Driver> {
    use DriverStatus::{Active, Inactive};
    vec![
        driver("D-1001", "Raj Kumar", "+91 9876501001", "Banjara Hills, Hyderabad", Active, 0, 245, 4.8),
        driver("D-1002", "Priya Sharma", "+91 9876501002", "Jubilee Hills, Hyderabad", Active, 2, 189, 4.9),
        driver("D-1003", "Arjun Reddy", "+91 9876501003", "Gachibowli, Hyderabad", Active, 1, 302, 4.7),
        driver("D-1004", "Ananya Patel", "+91 9876501004", "Ameerpet, Hyderabad", Active, 3, 156, 4.6),
        driver("D-1005", "Vikram Singh", "+91 9876501005", "Madhapur, Hyderabad", Inactive, 0, 210, 4.5),
        driver("D-1006", "Sneha Reddy", "+91 9876501006", "Kondapur, Hyderabad", Active, 0, 178, 4.8),
        driver("D-1007", "Rahul Verma", "+91 9876501007", "HITEC City, Hyderabad", Active, 0, 225, 4.7),
        driver("D-1008", "Neha Sharma", "+91 9876501008", "Kukatpally, Hyderabad", Active, 0, 267, 4.9),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_driver::DriverRoster;

    #[test]
    fn test_dialog_counts() {
        let roster = DriverRoster::new(sample_drivers());
        assert_eq!(roster.total(), 8);
        // Idle active drivers: D-1001, D-1006, D-1007, D-1008
        assert_eq!(roster.available_count(), 4);
    }
}
