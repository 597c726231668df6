use crate::shared::data::drivers::sample_drivers;
use contracts::domain::a002_driver::{DriverRoster, DriverTab};
use contracts::domain::a003_driver_assignment::AssignmentRecord;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct DriverListState {
    pub roster: DriverRoster,
    pub active_tab: DriverTab,
}

impl Default for DriverListState {
    fn default() -> Self {
        Self {
            roster: DriverRoster::new(sample_drivers()),
            active_tab: DriverTab::All,
        }
    }
}

impl DriverListState {
    /// Tabs shown on the page
    pub const TABS: [DriverTab; 3] = [
        DriverTab::All,
        DriverTab::WithAssignments,
        DriverTab::Available,
    ];

    /// Folds a broadcast record into the roster; returns the toast text when
    /// something changed
    pub fn on_assignment(&mut self, record: &AssignmentRecord) -> Option<String> {
        self.roster
            .apply_assignment(record)
            .map(|count| format!("{} orders assigned to driver successfully", count))
    }
}

pub fn create_state() -> RwSignal<DriverListState> {
    RwSignal::new(DriverListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_driver_assignment::AssignedOrder;

    #[test]
    fn test_assignment_updates_counts_and_tabs() {
        let mut state = DriverListState::default();
        assert_eq!(state.roster.available_count(), 4);

        let record = AssignmentRecord::new(
            "D-1001",
            vec![AssignedOrder::with_id("O1"), AssignedOrder::with_id("O2")],
        );
        let message = state.on_assignment(&record);
        assert_eq!(
            message.as_deref(),
            Some("2 orders assigned to driver successfully")
        );
        assert_eq!(state.roster.find("D-1001").map(|d| d.assigned_orders), Some(2));
        assert_eq!(state.roster.available_count(), 3);
        assert!(state
            .roster
            .filtered(DriverTab::WithAssignments)
            .iter()
            .any(|d| d.id == "D-1001"));
        assert_eq!(state.roster.assigned_orders().len(), 2);
    }

    #[test]
    fn test_empty_record_is_ignored() {
        let mut state = DriverListState::default();
        assert!(state.on_assignment(&AssignmentRecord::default()).is_none());
        assert!(state
            .on_assignment(&AssignmentRecord::new("D-1001", vec![]))
            .is_none());
        assert!(state.roster.assigned_orders().is_empty());
    }
}
