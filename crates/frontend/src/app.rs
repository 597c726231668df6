use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::assignment_store::{AssignmentStore, LocalStorageBackend};
use crate::shared::config::DashboardConfig;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    provide_context(ToastService::new(config.ui.toast_duration_ms));

    // One store per app; every page subscribes to it instead of reading storage itself.
    let store = AssignmentStore::new(
        LocalStorageBackend,
        &config.storage.assignment_key,
        config.storage.write_policy,
    );
    provide_context(store.clone());
    provide_context(config);

    // Writes made in other browser tabs
    let _ = window_event_listener(leptos::ev::storage, move |e| {
        store.handle_storage_event(e.key(), e.new_value());
    });

    view! {
        <AppShell />
    }
}
