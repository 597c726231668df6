use super::redirect_unknown_driver;
use crate::domain::a001_order::ui::status_badge::StatusBadge;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{driver_detail_key, tab_label_for_key};
use crate::shared::assignment_store::AssignmentStore;
use crate::shared::data::drivers::sample_drivers;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a001_order::{derive_roles, LabelContext, Party};
use contracts::domain::a002_driver::DriverRoster;
use contracts::domain::a003_driver_assignment::AssignedOrder;
use leptos::prelude::*;
use thaw::*;

/// (pickup, delivery) addresses of a listed order
fn trip_addresses(order: &AssignedOrder) -> (String, String) {
    let status = order.status.as_deref().unwrap_or_default();
    let roles = derive_roles(status);
    let address_of = |party: Party| match party {
        Party::Customer => order.customer_address.clone().unwrap_or_default(),
        Party::Studio => order.studio_address.clone().unwrap_or_default(),
    };
    (address_of(roles.pickup), address_of(roles.delivery))
}

/// Orders carried by one driver
#[component]
pub fn DriverOrders(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_context::<AssignmentStore>().expect("AssignmentStore not found");
    let toast = use_toast();

    let roster = DriverRoster::new(sample_drivers());
    if roster.find(&id).is_none() {
        redirect_unknown_driver(&id, toast, tabs_store, on_close);
    }

    let orders = RwSignal::new(roster.orders_for(&id, store.get().as_ref()));

    let driver_id = id.clone();
    let subscription = store.subscribe(move |record| {
        if record.belongs_to(&driver_id) {
            orders.set(record.orders.clone());
        }
    });
    on_cleanup(move || drop(subscription));

    let back_key = driver_detail_key(&id);
    let back_to_driver = move |_: leptos::ev::MouseEvent| {
        tabs_store.open_tab(&back_key, &tab_label_for_key(&back_key));
        on_close.run(());
    };

    view! {
        <PageFrame page_id="a002_driver--orders" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <Button appearance=ButtonAppearance::Secondary on_click=back_to_driver>
                        {icon("arrow-left")}
                        " Back to Driver"
                    </Button>
                    <h1 class="page__title">"Assigned Orders"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__meta">
                        {move || format!("Total Assigned Orders: {}", orders.with(|o| o.len()))}
                    </span>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    let list = orders.get();
                    if list.is_empty() {
                        return view! {
                            <div class="page__empty">"This driver has no assigned orders."</div>
                        }
                        .into_any();
                    }

                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=60.0>"S.NO"</TableHeaderCell>
                                    <TableHeaderCell>"ORDER ID"</TableHeaderCell>
                                    <TableHeaderCell>"DATE"</TableHeaderCell>
                                    <TableHeaderCell>"CUSTOMER"</TableHeaderCell>
                                    <TableHeaderCell>"PICKUP FROM"</TableHeaderCell>
                                    <TableHeaderCell>"DELIVER TO"</TableHeaderCell>
                                    <TableHeaderCell>"STATUS"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {list
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, order)| {
                                        let (pickup, delivery) = trip_addresses(&order);
                                        let date = order.date.as_deref().map(format_date).unwrap_or_default();
                                        let display_id = order.display_id().to_string();
                                        let badge_order_id = display_id.clone();
                                        let customer = order.customer.clone().unwrap_or_default();
                                        let status = order.status.clone().unwrap_or_default();
                                        let pickup_title = pickup.clone();
                                        let delivery_title = delivery.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{index + 1}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{display_id}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{icon("calendar")}{date}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{customer}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true attr:title=pickup_title>
                                                        {icon("map-pin")}{pickup}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true attr:title=delivery_title>
                                                        {icon("map-pin")}{delivery}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge
                                                        order_id=badge_order_id
                                                        status=status
                                                        ctx=LabelContext::driver_orders()
                                                    />
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
