//! Status badge text and pickup/delivery roles for an order.
//!
//! The badge rules are evaluated top to bottom and the first match wins:
//!
//! 1. `show_original_status` → canonical label of the coarse status
//! 2. driver-orders view, status `new` or `ready-for-collect` → "Ready for collection"
//! 3. `new`/`ready-for-collect` picked up but not dropped → "Picked up" / "Collected"
//! 4. `new` → "New Order" (unless `time_aware_new` is set)
//! 5. rescheduled tab → "Ready for collection" / "New Order"
//! 6. `new`/`ready-for-collect` → drop time, pickup, or "Ready for …"
//! 7. canonical label
//!
//! Per-order literal overrides are applied before any of this, see
//! [`StatusOverrides`](super::overrides::StatusOverrides).

use super::aggregate::Order;
use super::overrides::StatusOverrides;
use crate::enums::order_status::{canonical_label, FALLBACK_LABEL};
use crate::enums::OrderStatus;

/// View flags that change how the badge is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelContext {
    pub show_original_status: bool,
    pub driver_orders_view: bool,
    pub rescheduled_tab: bool,
    /// Show pickup/drop progress for `new` orders instead of "New Order".
    /// This is how the badge behaved before the "always New Order" change.
    pub time_aware_new: bool,
}

impl LabelContext {
    pub fn original() -> Self {
        Self {
            show_original_status: true,
            ..Self::default()
        }
    }

    pub fn driver_orders() -> Self {
        Self {
            driver_orders_view: true,
            ..Self::default()
        }
    }

    pub fn rescheduled() -> Self {
        Self {
            rescheduled_tab: true,
            ..Self::default()
        }
    }
}

/// Trip progress reported for an order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickupState {
    pub picked_up: bool,
    pub picked_up_time: Option<String>,
    pub dropped: bool,
    pub dropped_time: Option<String>,
}

impl PickupState {
    pub fn from_order(order: &Order) -> Self {
        Self {
            picked_up: order.picked_up.unwrap_or(false),
            picked_up_time: order.picked_up_time.clone(),
            dropped: order.dropped.unwrap_or(false),
            dropped_time: order.dropped_time.clone(),
        }
    }

    fn pickup_time(&self) -> Option<&str> {
        self.picked_up_time.as_deref().filter(|t| !t.is_empty())
    }

    fn drop_time(&self) -> Option<&str> {
        self.dropped_time.as_deref().filter(|t| !t.is_empty())
    }
}

/// Badge text plus its CSS modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabel {
    pub text: String,
    pub class: &'static str,
}

impl StatusLabel {
    fn new(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }

    fn canonical(code: &str) -> Self {
        let class = OrderStatus::from_code(code)
            .map(|s| s.badge_class())
            .unwrap_or("status-new");
        Self::new(canonical_label(code), class)
    }
}

/// Badge for a raw status code and trip progress
pub fn derive_badge(status: &str, state: &PickupState, ctx: &LabelContext) -> StatusLabel {
    if ctx.show_original_status {
        return StatusLabel::canonical(status);
    }

    let parsed = OrderStatus::from_code(status);
    let is_new = parsed == Some(OrderStatus::New);
    let is_ready = parsed == Some(OrderStatus::ReadyForCollect);
    let collectable = is_new || is_ready;

    if ctx.driver_orders_view && collectable {
        return StatusLabel::new("Ready for collection", "status-ready");
    }

    if collectable && state.picked_up && !state.dropped {
        let text = if is_ready { "Collected" } else { "Picked up" };
        return StatusLabel::new(text, "status-in-progress");
    }

    if is_new && !ctx.time_aware_new {
        return StatusLabel::new(FALLBACK_LABEL, "status-new");
    }

    if ctx.rescheduled_tab {
        if is_ready {
            return StatusLabel::new("Ready for collection", "status-ready");
        }
        if is_new {
            return StatusLabel::new(FALLBACK_LABEL, "status-new");
        }
    }

    if collectable {
        if state.dropped {
            if let Some(time) = state.drop_time() {
                let verb = if is_ready { "Delivered" } else { "Dropped" };
                return StatusLabel::new(format!("{}: {}", verb, time), "status-delivered");
            }
        }
        if state.picked_up && state.pickup_time().is_some() {
            let text = if is_ready { "Collected" } else { "Picked up" };
            return StatusLabel::new(text, "status-in-progress");
        }
        let text = if is_ready {
            "Ready for collection"
        } else {
            "Ready for pickup"
        };
        return StatusLabel::new(text, "status-ready");
    }

    StatusLabel::canonical(status)
}

/// Badge text for a raw status code and trip progress
pub fn derive_label(status: &str, state: &PickupState, ctx: &LabelContext) -> String {
    derive_badge(status, state, ctx).text
}

/// Badge for a concrete order, with the override table consulted first
pub fn derive_badge_for(
    order_id: &str,
    status: &str,
    state: &PickupState,
    ctx: &LabelContext,
    overrides: &StatusOverrides,
) -> StatusLabel {
    if !ctx.show_original_status {
        if let Some(text) = overrides.get(order_id).and_then(|o| o.badge_label.clone()) {
            return StatusLabel::new(text, "status-in-progress");
        }
    }
    let state = overrides.apply(order_id, state);
    derive_badge(status, &state, ctx)
}

// ============================================================================
// Roles
// ============================================================================

/// Counterparty of a trip leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    Customer,
    Studio,
}

/// Which party the driver picks up from and which one receives the order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePair {
    pub pickup: Party,
    pub delivery: Party,
}

/// Ready-for-collect orders wait at the studio and go to the customer;
/// everything else is collected from the customer and taken to the studio.
pub fn derive_roles(status: &str) -> RolePair {
    if OrderStatus::from_code(status) == Some(OrderStatus::ReadyForCollect) {
        RolePair {
            pickup: Party::Studio,
            delivery: Party::Customer,
        }
    } else {
        RolePair {
            pickup: Party::Customer,
            delivery: Party::Studio,
        }
    }
}

/// Heading of the pickup block on an order card
pub fn pickup_heading(status: &str) -> &'static str {
    if is_ready(status) {
        "Collect"
    } else {
        "Pickup"
    }
}

/// Heading of the delivery block on an order card
pub fn delivery_heading(status: &str) -> &'static str {
    if OrderStatus::from_code(status) == Some(OrderStatus::New) {
        "Drop"
    } else {
        "Delivery"
    }
}

/// Heading of the pickup section in the details dialog
pub fn pickup_details_heading(status: &str) -> &'static str {
    if is_ready(status) {
        "Collection Details"
    } else {
        "Pickup Details"
    }
}

/// Heading of the drop section in the details dialog
pub fn drop_details_heading(status: &str) -> &'static str {
    if is_ready(status) {
        "Delivery Details"
    } else {
        "Drop Details"
    }
}

fn is_ready(status: &str) -> bool {
    OrderStatus::from_code(status) == Some(OrderStatus::ReadyForCollect)
}

// ============================================================================
// Details dialog
// ============================================================================

/// Status line of the order details dialog
pub fn detail_status(
    order_id: &str,
    status: &str,
    state: &PickupState,
    ctx: &LabelContext,
    overrides: &StatusOverrides,
) -> StatusLabel {
    if ctx.show_original_status {
        return StatusLabel::canonical(status);
    }
    if let Some(text) = overrides.get(order_id).and_then(|o| o.detail_label.clone()) {
        return StatusLabel::new(text, "status-ready");
    }

    let state = overrides.apply(order_id, state);
    let ready = is_ready(status);
    match (state.picked_up, state.pickup_time()) {
        (true, Some(time)) => {
            let verb = if ready { "Collected" } else { "Picked up" };
            StatusLabel::new(format!("{}: {}", verb, time), "status-in-progress")
        }
        _ => {
            let what = if ready { "collection" } else { "pickup" };
            StatusLabel::new(format!("Ready for {}", what), "status-ready")
        }
    }
}

/// One step of the trip tracking timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub label: String,
    pub done: bool,
    /// Secondary line under the label (the time, or "Pending")
    pub note: Option<String>,
}

/// Trip tracking block of the order details dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripTimeline {
    pub created: String,
    pub pickup: TimelineStep,
    pub drop: TimelineStep,
    pub trip_status: Option<String>,
}

pub fn trip_timeline(
    order_id: &str,
    status: &str,
    created: &str,
    state: &PickupState,
    overrides: &StatusOverrides,
) -> TripTimeline {
    let ov = overrides.get(order_id);
    let state = overrides.apply(order_id, state);
    let ready = is_ready(status);

    let pickup_noun = if ready { "Collected" } else { "Picked Up" };
    let drop_noun = if ready { "Delivered" } else { "Dropped Off" };

    let pickup = match ov.and_then(|o| o.pickup_step.clone()) {
        Some(step) => TimelineStep {
            label: step.label,
            done: state.picked_up,
            note: step.note,
        },
        None => match (state.picked_up, state.pickup_time()) {
            (true, Some(time)) => TimelineStep {
                label: format!("✅ {} at {}", pickup_noun, time),
                done: true,
                note: Some(time.to_string()),
            },
            _ => TimelineStep {
                label: format!(
                    "{} Pending",
                    if ready { "Collection" } else { pickup_noun }
                ),
                done: state.picked_up,
                note: Some("Pending".to_string()),
            },
        },
    };

    let drop = match ov.and_then(|o| o.drop_step.clone()) {
        Some(step) => TimelineStep {
            label: step.label,
            done: state.dropped,
            note: step.note,
        },
        None => match (state.dropped, state.drop_time()) {
            (true, Some(time)) => TimelineStep {
                label: format!("✅ {} at {}", drop_noun, time),
                done: true,
                note: Some(time.to_string()),
            },
            _ => TimelineStep {
                label: format!("{} Pending", if ready { "Delivery" } else { drop_noun }),
                done: state.dropped,
                note: Some("Pending".to_string()),
            },
        },
    };

    TripTimeline {
        created: ov
            .and_then(|o| o.created_date.clone())
            .unwrap_or_else(|| created.to_string()),
        pickup,
        drop,
        trip_status: ov.and_then(|o| o.trip_status.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(picked: bool, picked_time: Option<&str>, dropped: bool, dropped_time: Option<&str>) -> PickupState {
        PickupState {
            picked_up: picked,
            picked_up_time: picked_time.map(String::from),
            dropped,
            dropped_time: dropped_time.map(String::from),
        }
    }

    #[test]
    fn test_original_status_ignores_trip_progress() {
        let busy = state(true, Some("06:40"), true, Some("07:40"));
        let ctx = LabelContext::original();
        for status in OrderStatus::all() {
            assert_eq!(
                derive_label(status.code(), &busy, &ctx),
                status.display_name(),
                "status {}",
                status
            );
        }
        assert_eq!(derive_label("completed", &busy, &ctx), "Completed");
        assert_eq!(derive_label("mystery", &busy, &ctx), "New Order");
    }

    #[test]
    fn test_driver_orders_view_overrides_pickup() {
        let ctx = LabelContext::driver_orders();
        let picked = state(true, Some("06:40"), false, None);
        assert_eq!(
            derive_label("ready-for-collect", &picked, &ctx),
            "Ready for collection"
        );
        assert_eq!(derive_label("new", &picked, &ctx), "Ready for collection");
        assert_eq!(
            derive_label("delivered", &picked, &ctx),
            "Order Delivered"
        );
    }

    #[test]
    fn test_picked_up_not_dropped() {
        let ctx = LabelContext::default();
        let picked = state(true, None, false, None);
        assert_eq!(derive_label("new", &picked, &ctx), "Picked up");
        assert_eq!(derive_label("ready-for-collect", &picked, &ctx), "Collected");
    }

    #[test]
    fn test_new_always_new_order() {
        let ctx = LabelContext::default();
        let dropped = state(true, Some("06:40"), true, Some("07:40"));
        assert_eq!(derive_label("new", &dropped, &ctx), "New Order");
        assert_eq!(derive_label("new", &PickupState::default(), &ctx), "New Order");
    }

    #[test]
    fn test_time_aware_new() {
        let ctx = LabelContext {
            time_aware_new: true,
            ..LabelContext::default()
        };
        let dropped = state(true, Some("06:40"), true, Some("07:40"));
        assert_eq!(derive_label("new", &dropped, &ctx), "Dropped: 07:40");
        assert_eq!(
            derive_label("new", &PickupState::default(), &ctx),
            "Ready for pickup"
        );
    }

    #[test]
    fn test_rescheduled_tab() {
        let ctx = LabelContext::rescheduled();
        let dropped = state(true, Some("06:40"), true, Some("07:40"));
        assert_eq!(
            derive_label("ready-for-collect", &dropped, &ctx),
            "Ready for collection"
        );
        assert_eq!(derive_label("new", &dropped, &ctx), "New Order");
    }

    #[test]
    fn test_ready_for_collect_progress() {
        let ctx = LabelContext::default();
        assert_eq!(
            derive_label("ready-for-collect", &state(true, Some("06:40"), true, Some("07:40")), &ctx),
            "Delivered: 07:40"
        );
        assert_eq!(
            derive_label("ready-for-collect", &state(true, Some("06:40"), true, None), &ctx),
            "Collected"
        );
        assert_eq!(
            derive_label("ready-for-collect", &PickupState::default(), &ctx),
            "Ready for collection"
        );
    }

    #[test]
    fn test_other_statuses_use_canonical_label() {
        let ctx = LabelContext::default();
        let s = PickupState::default();
        assert_eq!(derive_label("received", &s, &ctx), "Order Received");
        assert_eq!(derive_label("cancelled", &s, &ctx), "Order cancelled");
        let badge = derive_badge("bogus", &s, &ctx);
        assert_eq!(badge.text, "New Order");
        assert_eq!(badge.class, "status-new");
    }

    #[test]
    fn test_roles() {
        let ready = derive_roles("ready-for-collect");
        assert_eq!(ready.pickup, Party::Studio);
        assert_eq!(ready.delivery, Party::Customer);

        for status in OrderStatus::all()
            .into_iter()
            .filter(|s| !s.is_ready_for_collect())
        {
            let roles = derive_roles(status.code());
            assert_eq!(roles.pickup, Party::Customer, "status {}", status);
            assert_eq!(roles.delivery, Party::Studio, "status {}", status);
        }
    }

    #[test]
    fn test_headings() {
        assert_eq!(pickup_heading("ready-for-collect"), "Collect");
        assert_eq!(pickup_heading("new"), "Pickup");
        assert_eq!(delivery_heading("new"), "Drop");
        assert_eq!(delivery_heading("ready-for-collect"), "Delivery");
    }

    #[test]
    fn test_detail_status_general_rules() {
        let none = StatusOverrides::default();
        let ctx = LabelContext::default();
        let picked = state(true, Some("09:15 on 18/03/2025"), false, None);
        assert_eq!(
            detail_status("ORD-9", "ready-for-collect", &picked, &ctx, &none).text,
            "Collected: 09:15 on 18/03/2025"
        );
        assert_eq!(
            detail_status("ORD-9", "new", &PickupState::default(), &ctx, &none).text,
            "Ready for pickup"
        );
        assert_eq!(
            detail_status("ORD-9", "new", &picked, &LabelContext::original(), &none).text,
            "New Order"
        );
    }

    #[test]
    fn test_timeline_general_rules() {
        let none = StatusOverrides::default();
        let t = trip_timeline(
            "ORD-9",
            "new",
            "2025-03-01",
            &state(true, Some("10:00"), false, None),
            &none,
        );
        assert_eq!(t.created, "2025-03-01");
        assert_eq!(t.pickup.label, "✅ Picked Up at 10:00");
        assert!(t.pickup.done);
        assert_eq!(t.drop.label, "Dropped Off Pending");
        assert_eq!(t.drop.note.as_deref(), Some("Pending"));
        assert_eq!(t.trip_status, None);

        let r = trip_timeline("ORD-9", "ready-for-collect", "2025-03-01", &PickupState::default(), &none);
        assert_eq!(r.pickup.label, "Collection Pending");
        assert_eq!(r.drop.label, "Delivery Pending");
    }
}
