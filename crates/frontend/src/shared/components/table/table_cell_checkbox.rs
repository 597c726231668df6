//! Row selection checkbox
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     selected=selected_ids
//!     on_change=Callback::new(move |(id, checked)| toggle(id, checked))
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Checkbox cell bound to a set of selected ids.
///
/// Clicks do not reach the row, so a row click handler stays usable.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)] item_id: String,
    #[prop(into)] selected: Signal<HashSet<String>>,
    /// (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&id_for_checked))
                on:change=move |ev| {
                    on_change.run((item_id.clone(), event_target_checked(&ev)));
                }
            />
        </TableCell>
    }
}
