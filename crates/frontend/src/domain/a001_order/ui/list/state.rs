use contracts::domain::a001_order::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use std::collections::HashSet;

pub const TAB_ALL: &str = "all";
pub const TAB_ASSIGNED: &str = "assigned";

#[derive(Clone, Debug)]
pub struct OrderListState {
    pub items: Vec<Order>,
    /// "all", "assigned" or an order status code
    pub active_tab: String,
    pub search_query: String,
    /// Ids found in the stored driver assignment
    pub stored_assigned: HashSet<String>,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            active_tab: TAB_ALL.to_string(),
            search_query: String::new(),
            stored_assigned: HashSet::new(),
        }
    }
}

impl OrderListState {
    /// Tab keys with their captions, in display order
    pub fn tabs() -> Vec<(String, &'static str)> {
        let mut tabs = vec![(TAB_ALL.to_string(), "All Orders")];
        tabs.extend(
            OrderStatus::all()
                .into_iter()
                .map(|s| (s.code().to_string(), s.tab_label())),
        );
        tabs.push((TAB_ASSIGNED.to_string(), "Assigned"));
        tabs
    }

    fn is_assigned(&self, order: &Order) -> bool {
        order.assigned || self.stored_assigned.contains(&order.id)
    }

    fn in_tab(&self, order: &Order, tab: &str) -> bool {
        match tab {
            TAB_ALL => true,
            TAB_ASSIGNED => self.is_assigned(order),
            code => order.status.code() == code,
        }
    }

    fn matches_search(&self, order: &Order) -> bool {
        let query = self.search_query.trim().to_lowercase();
        query.is_empty()
            || [&order.id, &order.customer, &order.studio]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn visible(&self) -> Vec<Order> {
        self.items
            .iter()
            .filter(|o| self.in_tab(o, &self.active_tab) && self.matches_search(o))
            .cloned()
            .collect()
    }

    pub fn count(&self, tab: &str) -> usize {
        self.items.iter().filter(|o| self.in_tab(o, tab)).count()
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::orders::all_orders;

    fn loaded() -> OrderListState {
        OrderListState {
            items: all_orders(),
            ..OrderListState::default()
        }
    }

    #[test]
    fn test_tabs_in_order() {
        let keys: Vec<String> = OrderListState::tabs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys.first().map(String::as_str), Some("all"));
        assert_eq!(keys.last().map(String::as_str), Some("assigned"));
        assert!(keys.contains(&"ready-for-collect".to_string()));
        assert!(!keys.contains(&"completed".to_string()));
    }

    #[test]
    fn test_status_tab_and_search() {
        let mut state = loaded();
        assert_eq!(state.visible().len(), 12);

        state.active_tab = "delivered".to_string();
        assert_eq!(state.count("delivered"), 5);
        assert_eq!(state.visible().len(), 5);

        state.search_query = "RAJESH".to_string();
        let ids: Vec<String> = state.visible().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["ORD-0001".to_string()]);
    }

    #[test]
    fn test_assigned_tab_includes_stored_assignment() {
        let mut state = loaded();
        let before = state.count(TAB_ASSIGNED);
        assert_eq!(before, 8);

        state.stored_assigned.insert("ORD-0004".to_string());
        state.stored_assigned.insert("ORD-0001".to_string());
        assert_eq!(state.count(TAB_ASSIGNED), before + 1);
    }
}
