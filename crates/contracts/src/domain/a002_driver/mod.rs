pub mod aggregate;
pub mod roster;

pub use aggregate::Driver;
pub use roster::{placeholder_orders, AssignedOrderListing, DriverBadge, DriverRoster, DriverTab};
