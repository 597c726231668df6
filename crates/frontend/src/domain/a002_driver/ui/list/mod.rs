mod state;

use self::state::{create_state, DriverListState};
use super::status_toggle::DriverStatusToggle;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{driver_detail_key, driver_orders_key, tab_label_for_key};
use crate::shared::assignment_store::AssignmentStore;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a002_driver::{Driver, DriverTab};
use contracts::enums::DriverStatus;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DriverList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_context::<AssignmentStore>().expect("AssignmentStore not found");
    let toast = use_toast();
    let state = create_state();

    let subscription = store.subscribe(move |record| {
        log!("🚚 Drivers: assignment for {} received", record.driver_id);
        let mut message = None;
        state.update(|s| message = s.on_assignment(record));
        if let Some(description) = message {
            toast.success("Orders Assigned", &description);
        }
    });
    on_cleanup(move || drop(subscription));

    let open_details = move |driver: &Driver| {
        let key = driver_detail_key(&driver.id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };
    let open_orders = move |driver_id: &str| {
        let key = driver_orders_key(driver_id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };
    let toggle_status = move |driver_id: String| {
        state.update(|s| s.roster.toggle_status(&driver_id));
    };

    let driver_rows = move |tab: DriverTab| {
        let status_of = move |id: String| {
            Signal::derive(move || {
                state.with(|s| {
                    s.roster
                        .find(&id)
                        .map(|d| d.status)
                        .unwrap_or(DriverStatus::Inactive)
                })
            })
        };

        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"DRIVER"</TableHeaderCell>
                        <TableHeaderCell>"STATUS"</TableHeaderCell>
                        <TableHeaderCell>"PHONE NUMBER"</TableHeaderCell>
                        <TableHeaderCell>
                            {if tab == DriverTab::Available { "TOTAL DELIVERIES" } else { "ASSIGNED ORDERS" }}
                        </TableHeaderCell>
                        <TableHeaderCell>"ACTIONS"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.roster.filtered(tab))
                        key=|d| format!("{}:{}:{}", d.id, d.status.code(), d.assigned_orders)
                        children=move |driver: Driver| {
                            let id_for_toggle = driver.id.clone();
                            let id_for_orders = driver.id.clone();
                            let counter = if tab == DriverTab::Available {
                                driver.total_deliveries.to_string()
                            } else {
                                driver.assigned_orders.to_string()
                            };
                            let stored = StoredValue::new(driver.clone());
                            let initials = driver.initials();
                            let name = driver.name.clone();
                            let status = status_of(driver.id.clone());
                            let phone = driver.phone.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                href="#"
                                                class="table__link driver-cell"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    stored.with_value(|d| open_details(d));
                                                }
                                            >
                                                <span class="avatar">{initials}</span>
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <DriverStatusToggle
                                            status=status
                                            on_toggle=Callback::new(move |_| toggle_status(id_for_toggle.clone()))
                                        />
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{phone}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{counter}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| open_orders(&id_for_orders)
                                        >
                                            {icon("package")}
                                            " Orders"
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        }
    };

    let assignments_table = move || {
        let listings = state.with(|s| s.roster.assigned_orders());
        if listings.is_empty() {
            return view! {
                <div class="page__empty">"No orders have been assigned to drivers yet"</div>
            }
            .into_any();
        }

        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ORDER ID"</TableHeaderCell>
                        <TableHeaderCell>"DRIVER"</TableHeaderCell>
                        <TableHeaderCell>"CUSTOMER/STUDIO"</TableHeaderCell>
                        <TableHeaderCell>"ADDRESS"</TableHeaderCell>
                        <TableHeaderCell>"ACTIONS"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {listings
                        .into_iter()
                        .map(|listing| {
                            let driver_id = listing.driver_id.clone();
                            let display_id = listing.order.display_id().to_string();
                            let driver_name = listing.driver_name.clone();
                            let party = listing.party().to_string();
                            let address = listing.address().to_string();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {icon("package")}
                                            {display_id}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{driver_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{party}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{address}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| open_orders(&driver_id)
                                        >
                                            {icon("eye")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a002_driver--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Drivers"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__meta">
                        {move || state.with(|s| format!(
                            "{} Available / {} Total",
                            s.roster.available_count(),
                            s.roster.total()
                        ))}
                    </span>
                </div>
            </div>

            <div class="page__tabs">
                {DriverListState::TABS
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class="page__tab"
                            class:page__tab--active=move || state.with(|s| s.active_tab == tab)
                            on:click=move |_| state.update(|s| s.active_tab = tab)
                        >
                            {tab.display_name()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="page__content">
                {move || match state.with(|s| s.active_tab) {
                    DriverTab::WithAssignments => assignments_table(),
                    tab => driver_rows(tab).into_any(),
                }}
            </div>
        </PageFrame>
    }
}
