use crate::enums::DriverStatus;
use serde::{Deserialize, Serialize};

/// Delivery driver from the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub status: DriverStatus,
    /// Denormalized, kept in sync by whoever handles an assignment
    #[serde(default)]
    pub assigned_orders: usize,
    #[serde(default)]
    pub total_deliveries: u32,
    pub rating: f32,
}

impl Driver {
    pub fn is_active(&self) -> bool {
        self.status == DriverStatus::Active
    }

    /// Active and not carrying any order
    pub fn is_available(&self) -> bool {
        self.is_active() && self.assigned_orders == 0
    }

    pub fn has_assignments(&self) -> bool {
        self.assigned_orders > 0
    }

    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Initials for the avatar circle
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
