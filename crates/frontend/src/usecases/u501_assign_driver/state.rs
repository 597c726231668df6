use crate::shared::data::orders::{all_orders, rescheduled_orders};
use contracts::domain::a001_order::OrderRow;
use contracts::usecases::u501_assign_driver::{
    AssignmentTab, OrderBuckets, OrderFilter, Selection, TabSelection,
};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct AssignDriverState {
    pub active_tab: AssignmentTab,
    pub filter: OrderFilter,
    pub selection: TabSelection,
    /// Orders already handed to a driver; hidden from every tab
    pub assigned_ids: HashSet<String>,
    pub buckets: OrderBuckets,
    /// Orders shown in the open dialog
    pub dialog: Option<Selection>,
}

impl Default for AssignDriverState {
    fn default() -> Self {
        let assigned_ids = HashSet::new();
        Self {
            active_tab: AssignmentTab::New,
            filter: OrderFilter::default(),
            selection: TabSelection::default(),
            buckets: OrderBuckets::build(&all_orders(), &rescheduled_orders(), &assigned_ids),
            assigned_ids,
            dialog: None,
        }
    }
}

impl AssignDriverState {
    /// Hide `ids` from the tabs and drop them from the selection
    pub fn mark_assigned(&mut self, ids: impl IntoIterator<Item = String>) {
        self.assigned_ids.extend(ids);
        self.buckets =
            OrderBuckets::build(&all_orders(), &rescheduled_orders(), &self.assigned_ids);

        let mut kept = TabSelection::default();
        for tab in AssignmentTab::all() {
            for id in self.selection.ids(tab) {
                if self.buckets.rows(tab).iter().any(|r| &r.id == id) {
                    kept.toggle(tab, id);
                }
            }
        }
        self.selection = kept;
    }

    /// Rows of the active tab after search and wash-type filtering
    pub fn visible(&self) -> Vec<OrderRow> {
        self.filter.apply(self.buckets.rows(self.active_tab))
    }

    pub fn count(&self, tab: AssignmentTab) -> usize {
        self.buckets.rows(tab).len()
    }

    pub fn toggle_all_visible(&mut self) {
        let visible = self.visible();
        self.selection.toggle_all(self.active_tab, &visible);
    }

    pub fn all_visible_selected(&self) -> bool {
        self.selection
            .all_selected(self.active_tab, &self.visible())
    }

    /// Open the dialog for everything checked across tabs
    pub fn open_for_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.dialog = Some(self.selection.to_selection(&self.buckets));
    }

    /// Open the dialog for one row; other checks are cleared
    pub fn open_for_single(&mut self, id: &str) {
        let Some(tab) = self.buckets.tab_of(id) else {
            return;
        };
        self.selection.select_single(tab, id);
        self.dialog = Some(TabSelection::single_selection(&self.buckets, id));
    }
}

pub fn create_state() -> RwSignal<AssignDriverState> {
    RwSignal::new(AssignDriverState::default())
}
