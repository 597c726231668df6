pub mod a001_order;
pub mod a002_driver;
pub mod a003_driver_assignment;
