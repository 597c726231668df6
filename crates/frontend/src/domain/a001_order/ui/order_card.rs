use super::status_badge::StatusBadge;
use crate::shared::data::STATUS_OVERRIDES;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_order::{
    delivery_heading, derive_roles, detail_status, drop_details_heading, pickup_details_heading,
    pickup_heading, trip_timeline, LabelContext, Order, Party, PickupState, TimelineStep,
};
use leptos::prelude::*;
use thaw::*;

/// Name and address of one side of a trip
#[derive(Debug, Clone, PartialEq)]
struct PartyInfo {
    party: Party,
    name: String,
    address: String,
}

impl PartyInfo {
    fn of(order: &Order, party: Party) -> Self {
        match party {
            Party::Customer => Self {
                party,
                name: order.customer.clone(),
                address: order.customer_address_or_generated(),
            },
            Party::Studio => Self {
                party,
                name: order.studio.clone(),
                address: order.studio_address_or_default(),
            },
        }
    }

    fn icon_name(&self) -> &'static str {
        match self.party {
            Party::Customer => "user",
            Party::Studio => "layers",
        }
    }
}

fn party_block(heading: &'static str, heading_icon: &'static str, info: PartyInfo) -> impl IntoView {
    view! {
        <div class="order-card__party">
            <div class="order-card__party-heading">
                {icon(heading_icon)}
                <span>{heading}</span>
            </div>
            <div class="order-card__party-name">
                {icon(info.icon_name())}
                <span>{info.name}</span>
            </div>
            <div class="order-card__party-address">
                {icon("map-pin")}
                <span>{info.address}</span>
            </div>
        </div>
    }
}

/// Order summary card with pickup and delivery sides and a trip details dialog
#[component]
pub fn OrderCard(order: Order, #[prop(optional)] ctx: LabelContext) -> impl IntoView {
    let (show_details, set_show_details) = signal(false);

    let status = order.status.code().to_string();
    let state = PickupState::from_order(&order);
    let roles = derive_roles(&status);
    let pickup = PartyInfo::of(&order, roles.pickup);
    let delivery = PartyInfo::of(&order, roles.delivery);
    let trip_status = trip_timeline(&order.id, &status, &order.order_date, &state, &STATUS_OVERRIDES)
        .trip_status;

    let order_id = order.id.clone();
    let stored_order = StoredValue::new(order);

    view! {
        <div class="order-card">
            <div class="order-card__header">
                <div>
                    <h3 class="order-card__id">{order_id.clone()}</h3>
                    {trip_status.map(|text| view! {
                        <div class="order-card__trip-status">{icon("truck")}{text}</div>
                    })}
                </div>
                <StatusBadge
                    order_id=order_id
                    status=status.clone()
                    state=state
                    ctx=ctx
                />
            </div>

            <div class="order-card__body">
                {party_block(pickup_heading(&status), "map-pin", pickup)}
                {party_block(delivery_heading(&status), "truck", delivery)}
            </div>

            <div class="order-card__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| set_show_details.set(true)
                >
                    {icon("eye")}
                    " Trip Details"
                </Button>
            </div>
        </div>

        <Show when=move || show_details.get()>
            <TripDetailsDialog
                order=stored_order.get_value()
                ctx=ctx
                on_close=Callback::new(move |_| set_show_details.set(false))
            />
        </Show>
    }
}

fn timeline_step(step: TimelineStep, pending_icon: &'static str) -> impl IntoView {
    let icon_name = if step.done { "check-circle" } else { pending_icon };
    let label_class = if step.done {
        "trip-step__label trip-step__label--done"
    } else {
        "trip-step__label"
    };

    view! {
        <div class="trip-step">
            <div class="trip-step__icon">{icon(icon_name)}</div>
            <div>
                <div class=label_class>{step.label}</div>
                {step.note.map(|note| view! { <div class="trip-step__note">{note}</div> })}
            </div>
        </div>
    }
}

/// "Order Details" dialog: status line, both trip parties and the tracking timeline
#[component]
fn TripDetailsDialog(order: Order, ctx: LabelContext, on_close: Callback<()>) -> impl IntoView {
    let status = order.status.code().to_string();
    let state = PickupState::from_order(&order);
    let roles = derive_roles(&status);
    let overrides = STATUS_OVERRIDES.get(&order.id);

    let mut pickup = PartyInfo::of(&order, roles.pickup);
    let mut delivery = PartyInfo::of(&order, roles.delivery);
    if let Some(p) = overrides.and_then(|o| o.pickup_party.clone()) {
        pickup.name = p.name;
        pickup.address = p.address;
    }
    if let Some(p) = overrides.and_then(|o| o.delivery_party.clone()) {
        delivery.name = p.name;
        delivery.address = p.address;
    }

    let headline = detail_status(&order.id, &status, &state, &ctx, &STATUS_OVERRIDES);
    let timeline = trip_timeline(&order.id, &status, &order.order_date, &state, &STATUS_OVERRIDES);
    let status_view = if ctx.show_original_status {
        view! {
            <StatusBadge order_id=order.id.clone() status=status.clone() ctx=ctx />
        }
        .into_any()
    } else {
        view! {
            <span class=format!("status-badge {}", headline.class)>{headline.text}</span>
        }
        .into_any()
    };

    view! {
        <ModalFrame on_close=on_close modal_class="trip-details">
            <div class="modal__header">
                <div>
                    <h2 class="modal__title">"Order Details"</h2>
                    <div class="modal__subtitle">{order.id.clone()}</div>
                </div>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal__body trip-details__body">
                <div class="trip-details__row">
                    <span class="trip-details__caption">"Status:"</span>
                    {status_view}
                </div>

                {timeline.trip_status.clone().map(|text| view! {
                    <div class="trip-details__row">
                        <span class="trip-details__caption">"Trip Status:"</span>
                        <span class="status-badge status-trip">{text}</span>
                    </div>
                })}

                <section class="trip-details__section">
                    <h4>{icon("map-pin")}{pickup_details_heading(&status)}</h4>
                    <div class="trip-details__row">
                        <span class="trip-details__caption">"Name:"</span>
                        <span>{pickup.name}</span>
                    </div>
                    <div class="trip-details__row">
                        <span class="trip-details__caption">"Address:"</span>
                        <span class="trip-details__address">{pickup.address}</span>
                    </div>
                </section>

                <section class="trip-details__section">
                    <h4>{icon("truck")}{drop_details_heading(&status)}</h4>
                    <div class="trip-details__row">
                        <span class="trip-details__caption">"Name:"</span>
                        <span>{delivery.name}</span>
                    </div>
                    <div class="trip-details__row">
                        <span class="trip-details__caption">"Address:"</span>
                        <span class="trip-details__address">{delivery.address}</span>
                    </div>
                </section>

                <section class="trip-details__section trip-details__timeline">
                    <h4>"Trip Tracking"</h4>
                    <div class="trip-step">
                        <div class="trip-step__icon">{icon("calendar")}</div>
                        <div>
                            <div class="trip-step__label">"Order Created"</div>
                            <div class="trip-step__note">{format_date(&timeline.created)}</div>
                        </div>
                    </div>
                    {timeline_step(timeline.pickup, "package")}
                    {timeline_step(timeline.drop, "package")}
                </section>
            </div>
        </ModalFrame>
    }
}
