use super::selection::ResolvedSelection;
use crate::domain::a003_driver_assignment::AssignedOrder;

/// Confirmed assign-driver dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignDriverRequest {
    pub driver_id: String,
    pub orders: Vec<AssignedOrder>,
}

impl AssignDriverRequest {
    pub fn from_selection(driver_id: &str, selection: &ResolvedSelection) -> Self {
        Self {
            driver_id: driver_id.to_string(),
            orders: selection.orders.iter().map(|r| r.to_assigned()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.driver_id.is_empty() || self.orders.is_empty()
    }

    /// Toast text after a successful assignment
    pub fn success_message(&self) -> String {
        let noun = if self.orders.len() == 1 { "order" } else { "orders" };
        format!("Successfully assigned driver to {} {}", self.orders.len(), noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_assign_driver::Selection;

    #[test]
    fn test_success_message() {
        let one = AssignDriverRequest {
            driver_id: "D-1001".to_string(),
            orders: vec![AssignedOrder::with_id("O1")],
        };
        assert_eq!(one.success_message(), "Successfully assigned driver to 1 order");

        let empty = AssignDriverRequest::from_selection("D-1001", &Selection::empty().resolve());
        assert!(empty.is_empty());
        assert_eq!(empty.success_message(), "Successfully assigned driver to 0 orders");
    }
}
