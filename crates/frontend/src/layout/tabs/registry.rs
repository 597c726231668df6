//! Tab key → view. Every page reachable from the shell is listed here.

use super::tab_labels::{DRIVER_DETAIL_PREFIX, DRIVER_ORDERS_PREFIX};
use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_driver::ui::details::DriverDetails;
use crate::domain::a002_driver::ui::list::DriverList;
use crate::domain::a002_driver::ui::orders::DriverOrders;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_assign_driver::AssignDriverView;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab.
///
/// `tabs_store` is handed to detail views so they can close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // a001: Orders
        "a001_order" => view! { <OrderList /> }.into_any(),

        // a002: Drivers
        "a002_driver" => view! { <DriverList /> }.into_any(),
        k if k.starts_with(DRIVER_DETAIL_PREFIX) => {
            let id = k[DRIVER_DETAIL_PREFIX.len()..].to_string();
            log!("✅ Creating DriverDetails with id: {}", id);
            view! {
                <DriverDetails
                    id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }
        k if k.starts_with(DRIVER_ORDERS_PREFIX) => {
            let id = k[DRIVER_ORDERS_PREFIX.len()..].to_string();
            log!("✅ Creating DriverOrders with id: {}", id);
            view! {
                <DriverOrders
                    id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }

        // u501: Order assignment
        "u501_assign_driver" => view! { <AssignDriverView /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
