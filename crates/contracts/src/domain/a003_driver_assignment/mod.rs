pub mod aggregate;

pub use aggregate::{AssignPolicy, AssignedOrder, AssignmentRecord};
