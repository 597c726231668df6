pub mod u501_assign_driver;
