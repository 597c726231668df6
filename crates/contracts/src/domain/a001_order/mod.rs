pub mod aggregate;
pub mod overrides;
pub mod status;

pub use aggregate::{Order, OrderRow};
pub use overrides::{OrderOverride, PartyOverride, StatusOverrides, StepOverride};
pub use status::{
    delivery_heading, derive_badge, derive_badge_for, derive_label, derive_roles, detail_status,
    drop_details_heading, pickup_details_heading, pickup_heading, trip_timeline, LabelContext,
    Party, PickupState, RolePair, StatusLabel, TimelineStep, TripTimeline,
};
