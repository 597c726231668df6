use super::redirect_unknown_driver;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{driver_orders_key, tab_label_for_key};
use crate::shared::assignment_store::AssignmentStore;
use crate::shared::data::drivers::sample_drivers;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a002_driver::{Driver, DriverRoster};
use leptos::prelude::*;
use thaw::*;

fn field(caption: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__caption">{caption}</span>
            <span class="detail-field__value">{value}</span>
        </div>
    }
}

#[component]
pub fn DriverDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_context::<AssignmentStore>().expect("AssignmentStore not found");
    let toast = use_toast();

    let roster = RwSignal::new(DriverRoster::new(sample_drivers()));
    if roster.with_untracked(|r| r.find(&id).is_none()) {
        redirect_unknown_driver(&id, toast, tabs_store, on_close);
    }

    let subscription = store.subscribe(move |record| {
        roster.update(|r| {
            r.apply_assignment(record);
        });
    });
    on_cleanup(move || drop(subscription));

    let stored_id = StoredValue::new(id);
    let driver = Memo::new(move |_| {
        stored_id.with_value(|id| roster.with(|r| r.find(id).cloned()))
    });

    let open_orders = move |_: leptos::ev::MouseEvent| {
        let key = stored_id.with_value(|id| driver_orders_key(id));
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let render = move |d: Driver| {
        let status_class = format!("detail-field__value driver-status--{}", d.status.code());
        let rating = if d.rating > 0.0 {
            format!("{:.1} ⭐", d.rating)
        } else {
            "N/A".to_string()
        };
        view! {
            <div class="detail-grid">
                <section class="detail-card">
                    <h3 class="detail-card__title">{icon("user")}"Personal Information"</h3>
                    {field("Name", d.name.clone())}
                    <div class="detail-field">
                        <span class="detail-field__caption">"Status"</span>
                        <span class=status_class>{d.status.display_name()}</span>
                    </div>
                    {field("Location", d.location.clone())}
                </section>

                <section class="detail-card">
                    <h3 class="detail-card__title">{icon("phone")}"Contact Information"</h3>
                    {field("Phone Number", d.phone.clone())}
                    {field("Driver ID", d.id.clone())}
                </section>

                <section class="detail-card detail-card--wide">
                    <h3 class="detail-card__title">{icon("truck")}"Delivery Statistics"</h3>
                    <div class="detail-card__row">
                        {field("Assigned Orders", d.assigned_orders.to_string())}
                        {field("Total Deliveries", d.total_deliveries.to_string())}
                        {field("Rating", rating)}
                    </div>
                </section>
            </div>
        }
    };

    view! {
        <PageFrame page_id="a002_driver--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                        " Back to Drivers"
                    </Button>
                    <h1 class="page__title">"Driver Details"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_orders>
                        {icon("package")}
                        " Assigned Orders"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match driver.get() {
                    Some(d) => render(d).into_any(),
                    None => view! { <div class="page__empty">"Loading driver details..."</div> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
