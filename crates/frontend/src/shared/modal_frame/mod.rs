use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned surface. Dialogs render their own header and
/// footer inside.
///
/// Closes on a click that starts and ends on the overlay, and on Escape.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Extra class for the surface (`div.modal`)
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Removing the overlay inside its own click dispatch trips Leptos event
    // delegation, so the close runs on the next tick
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close_deferred();
        }
    });
    on_cleanup(move || escape_handle.remove());

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=move |ev| {
                let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
                overlay_mouse_down.set(false);
                if should_close {
                    close_deferred();
                }
            }
        >
            <div class=surface_class on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
