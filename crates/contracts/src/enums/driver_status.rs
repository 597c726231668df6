use serde::{Deserialize, Serialize};

/// Whether a driver is currently taking work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    Inactive,
}

impl DriverStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Active",
            DriverStatus::Inactive => "Inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DriverStatus::Active => DriverStatus::Inactive,
            DriverStatus::Inactive => DriverStatus::Active,
        }
    }
}
