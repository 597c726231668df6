use crate::shared::data::STATUS_OVERRIDES;
use contracts::domain::a001_order::{derive_badge_for, LabelContext, PickupState};
use leptos::prelude::*;

/// Status pill of an order card or table row
#[component]
pub fn StatusBadge(
    order_id: String,
    /// Raw status code, e.g. "ready-for-collect"
    status: String,
    #[prop(optional)] state: PickupState,
    #[prop(optional)] ctx: LabelContext,
) -> impl IntoView {
    let label = derive_badge_for(&order_id, &status, &state, &ctx, &STATUS_OVERRIDES);

    view! {
        <span class=format!("status-badge {}", label.class) title=status>
            {label.text}
        </span>
    }
}
