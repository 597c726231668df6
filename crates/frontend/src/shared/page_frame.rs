//! Root wrapper for every page rendered inside a tab.
//!
//! Sets `id="{entity}--{category}"` and `data-page-category` on the root
//! element, e.g. `<PageFrame page_id="a002_driver--list" category=PAGE_CAT_LIST>`.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_order--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
