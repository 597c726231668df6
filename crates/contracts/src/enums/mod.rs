pub mod driver_status;
pub mod order_status;
pub mod wash_type;

pub use driver_status::DriverStatus;
pub use order_status::OrderStatus;
pub use wash_type::WashType;
