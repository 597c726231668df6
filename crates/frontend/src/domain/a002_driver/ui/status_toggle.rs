use contracts::enums::DriverStatus;
use leptos::prelude::*;

/// Active/Inactive pill that flips the driver's status on click
#[component]
pub fn DriverStatusToggle(
    #[prop(into)] status: Signal<DriverStatus>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || format!("driver-status driver-status--{}", status.get().code())
            title=move || format!("Mark as {}", status.get().toggled().display_name())
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            <span class="driver-status__dot"></span>
            {move || status.get().display_name()}
        </button>
    }
}
