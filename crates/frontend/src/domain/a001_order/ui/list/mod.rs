mod state;

use self::state::{create_state, OrderListState};
use super::order_card::OrderCard;
use crate::shared::assignment_store::AssignmentStore;
use crate::shared::data::orders::all_orders;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let store = use_context::<AssignmentStore>().expect("AssignmentStore not found");
    let state = create_state();

    state.update(|s| s.items = all_orders());

    let subscription = store.subscribe(move |record| {
        log!("📦 Orders: assignment for {} received", record.driver_id);
        let ids = record.assigned_ids();
        state.update(|s| s.stored_assigned.extend(ids));
    });
    on_cleanup(move || drop(subscription));

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible()));

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("package")}
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
                    <div style="min-width: 280px;">
                        <Input value=search_query placeholder="Search by order ID, customer or studio..." />
                    </div>
                </div>
            </div>

            <div class="page__tabs">
                {OrderListState::tabs()
                    .into_iter()
                    .map(|(key, caption)| {
                        let key_for_class = key.clone();
                        let key_for_count = key.clone();
                        view! {
                            <button
                                class="page__tab"
                                class:page__tab--active=move || {
                                    state.with(|s| s.active_tab == key_for_class)
                                }
                                on:click=move |_| state.update(|s| s.active_tab = key.clone())
                            >
                                {caption}
                                <span class="page__tab-count">
                                    {move || state.with(|s| s.count(&key_for_count))}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="page__content">
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <div class="page__empty">"No orders found"</div> }
                >
                    <div class="order-grid">
                        <For
                            each=move || visible.get()
                            key=|order| order.id.clone()
                            children=move |order| view! { <OrderCard order=order /> }
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
