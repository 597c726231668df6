//! Application shell: sidebar, tab strip and the open tab pages.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::toast::ToastHost;
use leptos::logging::log;
use leptos::prelude::*;

/// Main application layout.
///
/// Initializes router integration so the active tab follows `?active=...`.
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("👶 opening tab page '{}'", tab.key);
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
        <ToastHost />
    }
}
