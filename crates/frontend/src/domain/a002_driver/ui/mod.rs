pub mod details;
pub mod list;
pub mod orders;
pub mod status_toggle;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::ToastService;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Error toast, close the calling tab and fall back to the drivers list.
///
/// Runs on the next tick: the tab is still being mounted when the lookup fails.
pub(crate) fn redirect_unknown_driver(
    driver_id: &str,
    toast: ToastService,
    tabs_store: AppGlobalContext,
    on_close: Callback<()>,
) {
    log::warn!("Driver '{}' not found", driver_id);
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        toast.error("Driver Not Found", "Could not find the selected driver.");
        on_close.run(());
        tabs_store.open_tab("a002_driver", "Drivers");
    });
}
