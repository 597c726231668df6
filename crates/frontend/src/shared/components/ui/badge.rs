use leptos::prelude::*;

/// Small rounded label
#[component]
pub fn Badge(
    /// "success", "info", "warning", "error" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "success" => "badge--success",
        "info" => "badge--info",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span
            class=move || format!("badge {} {}", variant_class(), class.get().unwrap_or_default())
            title=move || title.get()
        >
            {children()}
        </span>
    }
}
