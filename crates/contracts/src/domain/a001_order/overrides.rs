use std::collections::HashMap;

use super::status::PickupState;

/// Name and address shown for one side of a trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyOverride {
    pub name: String,
    pub address: String,
}

impl PartyOverride {
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
        }
    }
}

/// Literal text for one timeline step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOverride {
    pub label: String,
    pub note: Option<String>,
}

impl StepOverride {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

/// Per-order display override. Every field is optional; unset fields fall
/// through to the general rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderOverride {
    pub picked_up: Option<bool>,
    pub picked_up_time: Option<String>,
    pub dropped: Option<bool>,
    pub dropped_time: Option<String>,
    pub badge_label: Option<String>,
    pub detail_label: Option<String>,
    pub pickup_party: Option<PartyOverride>,
    pub delivery_party: Option<PartyOverride>,
    pub created_date: Option<String>,
    pub trip_status: Option<String>,
    pub pickup_step: Option<StepOverride>,
    pub drop_step: Option<StepOverride>,
}

impl OrderOverride {
    fn picked(time: &str) -> Self {
        Self {
            picked_up: Some(true),
            picked_up_time: Some(time.to_string()),
            ..Self::default()
        }
    }

    fn picked_and_dropped(picked_time: &str, dropped_time: &str) -> Self {
        Self {
            dropped: Some(true),
            dropped_time: Some(dropped_time.to_string()),
            ..Self::picked(picked_time)
        }
    }
}

/// Lookup table consulted before the general status rules
#[derive(Debug, Clone, Default)]
pub struct StatusOverrides {
    entries: HashMap<String, OrderOverride>,
}

impl StatusOverrides {
    pub fn insert(&mut self, order_id: &str, entry: OrderOverride) {
        self.entries.insert(order_id.to_string(), entry);
    }

    pub fn get(&self, order_id: &str) -> Option<&OrderOverride> {
        self.entries.get(order_id)
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.entries.contains_key(order_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Trip progress with the override's flags and times layered on top
    pub fn apply(&self, order_id: &str, base: &PickupState) -> PickupState {
        let Some(ov) = self.get(order_id) else {
            return base.clone();
        };
        PickupState {
            picked_up: ov.picked_up.unwrap_or(base.picked_up),
            picked_up_time: ov
                .picked_up_time
                .clone()
                .or_else(|| base.picked_up_time.clone()),
            dropped: ov.dropped.unwrap_or(base.dropped),
            dropped_time: ov.dropped_time.clone().or_else(|| base.dropped_time.clone()),
        }
    }

    /// Fixtures shown by the demo dataset
    pub fn demo() -> Self {
        let mut table = Self::default();

        table.insert(
            "ORD-0003",
            OrderOverride {
                pickup_step: Some(StepOverride::label("Collection pending")),
                drop_step: Some(StepOverride::label("Delivery pending")),
                ..OrderOverride::default()
            },
        );

        table.insert(
            "ORD-0004",
            OrderOverride {
                pickup_step: Some(StepOverride::label("Picked Up Pending")),
                drop_step: Some(StepOverride::label("Dropped Off Pending")),
                ..OrderOverride::default()
            },
        );

        table.insert(
            "ORD-0011",
            OrderOverride {
                created_date: Some("2025-02-20".to_string()),
                trip_status: Some("Pickup In Progress".to_string()),
                pickup_party: Some(PartyOverride::new(
                    "Vikram Malhotra",
                    "12, Somajiguda, Hyderabad",
                )),
                delivery_party: Some(PartyOverride::new(
                    "Bhavani BAND BOX",
                    "Bhavani BAND BOX, Khairatabad X Roads, Somajiguda",
                )),
                pickup_step: Some(StepOverride::label("✓ Picked Up at 06:40 on 17/03/2025")),
                drop_step: Some(StepOverride::label("Dropped Off Pending").with_note("Pending")),
                ..OrderOverride::picked("06:40 on 17/03/2025")
            },
        );

        table.insert(
            "ORD-R001",
            OrderOverride {
                detail_label: Some("Ready for pickup".to_string()),
                pickup_party: Some(PartyOverride::new(
                    "Sanjay Mehta",
                    "27, Film Nagar, Hyderabad",
                )),
                delivery_party: Some(PartyOverride::new(
                    "Laundry Express",
                    "Laundry Express, Road No. 12, Banjara Hills",
                )),
                pickup_step: Some(StepOverride::label("✅ Picked Up at 06:40 on 17/03/2025")),
                drop_step: Some(StepOverride::label("✅ Dropped Off at 07:40 on 17/03/2025")),
                ..OrderOverride::picked_and_dropped("06:40 on 17/03/2025", "07:40 on 17/03/2025")
            },
        );

        table.insert(
            "ORD-0012",
            OrderOverride {
                pickup_step: Some(StepOverride::label("✅ Collected at 12:40 on 17/03/2025")),
                ..OrderOverride::picked("12:40 on 17/03/2025")
            },
        );

        table.insert(
            "ORD-R002",
            OrderOverride {
                pickup_party: Some(PartyOverride::new(
                    "UClean",
                    "UClean, KPHB Colony, Kukatpally",
                )),
                delivery_party: Some(PartyOverride::new(
                    "Deepika Reddy",
                    "72, Kukatpally, Hyderabad",
                )),
                pickup_step: Some(StepOverride::label("✅ Collected at 12:40 on 17/03/2025")),
                drop_step: Some(StepOverride::label("✅ Delivered at 01:20 on 17/03/2025")),
                ..OrderOverride::picked_and_dropped("12:40 on 17/03/2025", "01:20 on 17/03/2025")
            },
        );

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::status::{
        derive_badge_for, detail_status, trip_timeline, LabelContext,
    };

    #[test]
    fn test_apply_layers_override_flags() {
        let table = StatusOverrides::demo();
        let state = table.apply("ORD-R001", &PickupState::default());
        assert!(state.picked_up);
        assert!(state.dropped);
        assert_eq!(state.dropped_time.as_deref(), Some("07:40 on 17/03/2025"));

        let untouched = PickupState {
            picked_up: true,
            ..PickupState::default()
        };
        assert_eq!(table.apply("ORD-0001", &untouched), untouched);
    }

    #[test]
    fn test_ord_0011_timeline() {
        let table = StatusOverrides::demo();
        let t = trip_timeline("ORD-0011", "new", "2025-03-10", &PickupState::default(), &table);
        assert_eq!(t.created, "2025-02-20");
        assert_eq!(t.trip_status.as_deref(), Some("Pickup In Progress"));
        assert_eq!(t.pickup.label, "✓ Picked Up at 06:40 on 17/03/2025");
        assert!(t.pickup.done);
        assert_eq!(t.drop.label, "Dropped Off Pending");
        assert_eq!(t.drop.note.as_deref(), Some("Pending"));
        assert!(!t.drop.done);
    }

    #[test]
    fn test_ord_r002_timeline() {
        let table = StatusOverrides::demo();
        let t = trip_timeline(
            "ORD-R002",
            "ready-for-collect",
            "2025-03-01",
            &PickupState::default(),
            &table,
        );
        assert_eq!(t.pickup.label, "✅ Collected at 12:40 on 17/03/2025");
        assert_eq!(t.drop.label, "✅ Delivered at 01:20 on 17/03/2025");
        assert!(t.drop.done);
        assert_eq!(t.drop.note, None);
    }

    #[test]
    fn test_detail_label_override() {
        let table = StatusOverrides::demo();
        let ctx = LabelContext::default();
        let line = detail_status("ORD-R001", "new", &PickupState::default(), &ctx, &table);
        assert_eq!(line.text, "Ready for pickup");

        let line = detail_status("ORD-0012", "ready-for-collect", &PickupState::default(), &ctx, &table);
        assert_eq!(line.text, "Collected: 12:40 on 17/03/2025");
    }

    #[test]
    fn test_overrides_feed_badge_rules() {
        let table = StatusOverrides::demo();
        let ctx = LabelContext::default();
        let badge = derive_badge_for("ORD-0012", "ready-for-collect", &PickupState::default(), &ctx, &table);
        assert_eq!(badge.text, "Collected");

        let original = derive_badge_for(
            "ORD-0012",
            "ready-for-collect",
            &PickupState::default(),
            &LabelContext::original(),
            &table,
        );
        assert_eq!(original.text, "Ready for collection");
    }

    #[test]
    fn test_party_overrides() {
        let table = StatusOverrides::demo();
        let r002 = table.get("ORD-R002").unwrap();
        assert_eq!(r002.pickup_party.as_ref().unwrap().name, "UClean");
        assert_eq!(r002.delivery_party.as_ref().unwrap().name, "Deepika Reddy");
        assert!(!table.contains("ORD-0001"));
    }
}
