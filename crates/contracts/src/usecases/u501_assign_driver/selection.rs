use std::collections::{BTreeSet, HashMap, HashSet};

use super::buckets::{classify_rescheduled, AssignmentTab, OrderBuckets};
use crate::domain::a001_order::OrderRow;

// ============================================================================
// Per-tab selection
// ============================================================================

/// Checked order ids, one list per assignment tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSelection {
    new_ids: Vec<String>,
    ready_ids: Vec<String>,
    rescheduled_ids: Vec<String>,
}

impl TabSelection {
    fn ids_mut(&mut self, tab: AssignmentTab) -> &mut Vec<String> {
        match tab {
            AssignmentTab::New => &mut self.new_ids,
            AssignmentTab::Ready => &mut self.ready_ids,
            AssignmentTab::Rescheduled => &mut self.rescheduled_ids,
        }
    }

    pub fn ids(&self, tab: AssignmentTab) -> &[String] {
        match tab {
            AssignmentTab::New => &self.new_ids,
            AssignmentTab::Ready => &self.ready_ids,
            AssignmentTab::Rescheduled => &self.rescheduled_ids,
        }
    }

    pub fn is_selected(&self, tab: AssignmentTab, id: &str) -> bool {
        self.ids(tab).iter().any(|s| s == id)
    }

    pub fn toggle(&mut self, tab: AssignmentTab, id: &str) {
        let ids = self.ids_mut(tab);
        if let Some(pos) = ids.iter().position(|s| s == id) {
            ids.remove(pos);
        } else {
            ids.push(id.to_string());
        }
    }

    /// Select every visible row, or clear the tab when all of them already are
    pub fn toggle_all(&mut self, tab: AssignmentTab, visible: &[OrderRow]) {
        let all_selected =
            !visible.is_empty() && visible.iter().all(|r| self.is_selected(tab, &r.id));
        let ids = self.ids_mut(tab);
        if all_selected {
            ids.clear();
        } else {
            *ids = visible.iter().map(|r| r.id.clone()).collect();
        }
    }

    pub fn all_selected(&self, tab: AssignmentTab, visible: &[OrderRow]) -> bool {
        !visible.is_empty() && visible.iter().all(|r| self.is_selected(tab, &r.id))
    }

    pub fn clear(&mut self) {
        self.new_ids.clear();
        self.ready_ids.clear();
        self.rescheduled_ids.clear();
    }

    /// Keep only `id`, checked in `tab`
    pub fn select_single(&mut self, tab: AssignmentTab, id: &str) {
        self.clear();
        self.ids_mut(tab).push(id.to_string());
    }

    /// Selected ids across all tabs, in tab order
    pub fn total(&self) -> usize {
        self.new_ids.len() + self.ready_ids.len() + self.rescheduled_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Bucketed selection for the dialog
    pub fn to_selection(&self, buckets: &OrderBuckets) -> Selection {
        let pick = |tab: AssignmentTab| -> Vec<OrderRow> {
            buckets
                .rows(tab)
                .iter()
                .filter(|r| self.is_selected(tab, &r.id))
                .cloned()
                .collect()
        };
        Selection::Bucketed {
            new_orders: pick(AssignmentTab::New),
            ready_orders: pick(AssignmentTab::Ready),
            rescheduled_orders: pick(AssignmentTab::Rescheduled),
        }
    }

    /// Selection for a single "Assign" click on row `id`
    pub fn single_selection(buckets: &OrderBuckets, id: &str) -> Selection {
        let Some(tab) = buckets.tab_of(id) else {
            return Selection::empty();
        };
        let Some(row) = buckets.find(id).cloned() else {
            return Selection::empty();
        };

        match tab {
            AssignmentTab::Rescheduled => {
                let class = classify_rescheduled(&row);
                Selection::Bucketed {
                    new_orders: if class == AssignmentTab::New { vec![row.clone()] } else { vec![] },
                    ready_orders: if class == AssignmentTab::Ready { vec![row.clone()] } else { vec![] },
                    rescheduled_orders: vec![row],
                }
            }
            AssignmentTab::New => Selection::Bucketed {
                new_orders: vec![row],
                ready_orders: vec![],
                rescheduled_orders: vec![],
            },
            AssignmentTab::Ready => Selection::Bucketed {
                new_orders: vec![],
                ready_orders: vec![row],
                rescheduled_orders: vec![],
            },
        }
    }
}

// ============================================================================
// Dialog input
// ============================================================================

/// Orders handed to the assign-driver dialog
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Flat(Vec<OrderRow>),
    Bucketed {
        new_orders: Vec<OrderRow>,
        ready_orders: Vec<OrderRow>,
        rescheduled_orders: Vec<OrderRow>,
    },
}

/// Canonical order list plus the buckets each order came from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSelection {
    pub orders: Vec<OrderRow>,
    pub classification: HashMap<String, BTreeSet<AssignmentTab>>,
}

impl ResolvedSelection {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.orders.iter().map(|o| o.id.clone()).collect()
    }

    pub fn tabs_of(&self, id: &str) -> Option<&BTreeSet<AssignmentTab>> {
        self.classification.get(id)
    }
}

impl Selection {
    pub fn empty() -> Self {
        Selection::Flat(Vec::new())
    }

    /// Flatten into one list, first occurrence wins, rescheduled rows also
    /// counted toward their reclassified bucket
    pub fn resolve(&self) -> ResolvedSelection {
        let mut seen = HashSet::new();
        let mut resolved = ResolvedSelection::default();

        let mut push = |row: &OrderRow, tab: Option<AssignmentTab>| {
            if seen.insert(row.id.clone()) {
                resolved.orders.push(row.clone());
            }
            let tabs = resolved.classification.entry(row.id.clone()).or_default();
            if let Some(tab) = tab {
                tabs.insert(tab);
            }
        };

        match self {
            Selection::Flat(rows) => {
                for row in rows {
                    push(row, None);
                }
            }
            Selection::Bucketed {
                new_orders,
                ready_orders,
                rescheduled_orders,
            } => {
                for row in new_orders {
                    push(row, Some(AssignmentTab::New));
                }
                for row in ready_orders {
                    push(row, Some(AssignmentTab::Ready));
                }
                for row in rescheduled_orders {
                    push(row, Some(AssignmentTab::Rescheduled));
                    push(row, Some(classify_rescheduled(row)));
                }
            }
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::Order;
    use crate::enums::{OrderStatus, WashType};

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            order_date: "2025-03-10".to_string(),
            customer: "Customer".to_string(),
            status,
            studio: "UClean".to_string(),
            driver: None,
            total: 0.0,
            delivery_date: None,
            wash_type: WashType::Standard,
            assigned: false,
            phone: None,
            customer_address: None,
            studio_address: None,
            picked_up: None,
            picked_up_time: None,
            dropped: None,
            dropped_time: None,
        }
    }

    fn buckets() -> OrderBuckets {
        OrderBuckets::build(
            &[
                order("ORD-1", OrderStatus::New),
                order("ORD-2", OrderStatus::New),
                order("ORD-3", OrderStatus::ReadyForCollect),
            ],
            &[
                order("ORD-R1", OrderStatus::New),
                order("ORD-R2", OrderStatus::ReadyForCollect),
            ],
            &HashSet::new(),
        )
    }

    #[test]
    fn test_toggle_one() {
        let mut sel = TabSelection::default();
        sel.toggle(AssignmentTab::New, "ORD-1");
        assert!(sel.is_selected(AssignmentTab::New, "ORD-1"));
        assert!(!sel.is_selected(AssignmentTab::Ready, "ORD-1"));
        sel.toggle(AssignmentTab::New, "ORD-1");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_all_selects_then_clears() {
        let b = buckets();
        let mut sel = TabSelection::default();
        sel.toggle(AssignmentTab::New, "ORD-1");
        sel.toggle_all(AssignmentTab::New, &b.new_orders);
        assert_eq!(sel.ids(AssignmentTab::New), &["ORD-1".to_string(), "ORD-2".to_string()]);
        assert!(sel.all_selected(AssignmentTab::New, &b.new_orders));
        sel.toggle_all(AssignmentTab::New, &b.new_orders);
        assert!(sel.ids(AssignmentTab::New).is_empty());
    }

    #[test]
    fn test_select_single_clears_other_tabs() {
        let mut sel = TabSelection::default();
        sel.toggle(AssignmentTab::New, "ORD-1");
        sel.toggle(AssignmentTab::Ready, "ORD-3");
        sel.select_single(AssignmentTab::Rescheduled, "ORD-R1");
        assert_eq!(sel.total(), 1);
        assert!(sel.is_selected(AssignmentTab::Rescheduled, "ORD-R1"));
    }

    #[test]
    fn test_bucketed_selection_dedupes() {
        let b = buckets();
        let row = b.rescheduled_orders[0].clone();
        let selection = Selection::Bucketed {
            new_orders: vec![row.clone()],
            ready_orders: vec![],
            rescheduled_orders: vec![row],
        };
        let resolved = selection.resolve();
        assert_eq!(resolved.ids(), vec!["ORD-R1"]);
        let tabs = resolved.tabs_of("ORD-R1").unwrap();
        assert!(tabs.contains(&AssignmentTab::New));
        assert!(tabs.contains(&AssignmentTab::Rescheduled));
    }

    #[test]
    fn test_single_rescheduled_ready_order() {
        let selection = TabSelection::single_selection(&buckets(), "ORD-R2");
        match &selection {
            Selection::Bucketed {
                new_orders,
                ready_orders,
                rescheduled_orders,
            } => {
                assert!(new_orders.is_empty());
                assert_eq!(ready_orders.len(), 1);
                assert_eq!(rescheduled_orders.len(), 1);
            }
            Selection::Flat(_) => panic!("expected bucketed selection"),
        }
        let resolved = selection.resolve();
        assert_eq!(resolved.len(), 1);
        assert!(resolved.tabs_of("ORD-R2").unwrap().contains(&AssignmentTab::Ready));
    }

    #[test]
    fn test_single_unknown_order_is_empty() {
        assert!(TabSelection::single_selection(&buckets(), "nope").resolve().is_empty());
    }

    #[test]
    fn test_flat_selection() {
        let b = buckets();
        let selection = Selection::Flat(vec![b.new_orders[0].clone(), b.new_orders[0].clone()]);
        let resolved = selection.resolve();
        assert_eq!(resolved.len(), 1);
        assert!(resolved.tabs_of("ORD-1").unwrap().is_empty());
    }

    #[test]
    fn test_to_selection_follows_checks() {
        let b = buckets();
        let mut sel = TabSelection::default();
        sel.toggle(AssignmentTab::New, "ORD-2");
        sel.toggle(AssignmentTab::Ready, "ORD-3");
        let resolved = sel.to_selection(&b).resolve();
        assert_eq!(resolved.ids(), vec!["ORD-2", "ORD-3"]);
    }
}
