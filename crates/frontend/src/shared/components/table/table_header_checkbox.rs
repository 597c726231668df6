//! Select-all checkbox for a table header

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn state_of(visible: &[String], selected: &HashSet<String>) -> CheckboxState {
    let count = visible.iter().filter(|id| selected.contains(*id)).count();
    if count == 0 {
        CheckboxState::Unchecked
    } else if count == visible.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Header checkbox over the visible rows: unchecked, checked or
/// indeterminate. `on_change(true)` means select all.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows currently shown
    #[prop(into)]
    visible: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<HashSet<String>>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || selected.with(|sel| visible.with(|v| state_of(v, sel))));
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a DOM property only
    Effect::new(move |_| {
        let indeterminate = state.get() == CheckboxState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckboxState::Checked
                prop:disabled=move || visible.with(|v| v.is_empty())
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_states() {
        let visible = ids(&["A", "B"]);
        let none = HashSet::new();
        let one: HashSet<String> = ids(&["A"]).into_iter().collect();
        let both: HashSet<String> = ids(&["A", "B", "Z"]).into_iter().collect();
        assert_eq!(state_of(&visible, &none), CheckboxState::Unchecked);
        assert_eq!(state_of(&visible, &one), CheckboxState::Indeterminate);
        assert_eq!(state_of(&visible, &both), CheckboxState::Checked);
        assert_eq!(state_of(&[], &both), CheckboxState::Unchecked);
    }
}
