use super::dialog::AssignDriverDialog;
use super::state::create_state;
use crate::domain::a001_order::ui::status_badge::StatusBadge;
use crate::shared::assignment_store::AssignmentStore;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::toast::use_toast;
use contracts::domain::a001_order::{LabelContext, OrderRow};
use contracts::enums::WashType;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_assign_driver::{AssignDriver, AssignDriverRequest, AssignmentTab, OrderFilter};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

fn tab_icon(tab: AssignmentTab) -> &'static str {
    match tab {
        AssignmentTab::New => "package",
        AssignmentTab::Ready => "check-circle",
        AssignmentTab::Rescheduled => "calendar",
    }
}

#[component]
pub fn AssignDriverView() -> impl IntoView {
    let store = use_context::<AssignmentStore>().expect("AssignmentStore not found");
    let toast = use_toast();
    let state = create_state();

    let subscription = store.subscribe(move |record| {
        log!("🧺 Assignment page: {} order(s) now with {}", record.order_count(), record.driver_id);
        let ids = record.assigned_ids();
        state.update(|s| s.mark_assigned(ids));
    });
    on_cleanup(move || drop(subscription));

    let search_query = RwSignal::new(String::new());
    let wash_type = RwSignal::new("all".to_string());
    Effect::new(move || {
        let filter = OrderFilter::new(&search_query.get(), &wash_type.get());
        untrack(move || state.update(|s| s.filter = filter));
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let visible_ids = Signal::derive(move || visible.with(|rows| rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>()));
    let selected_ids = Signal::derive(move || {
        state.with(|s| {
            s.selection
                .ids(s.active_tab)
                .iter()
                .cloned()
                .collect::<HashSet<String>>()
        })
    });
    let dialog = Memo::new(move |_| state.with(|s| s.dialog.clone()));

    let toggle_row = move |(id, checked): (String, bool)| {
        state.update(|s| {
            let tab = s.active_tab;
            if s.selection.is_selected(tab, &id) != checked {
                s.selection.toggle(tab, &id);
            }
        });
    };

    let close_dialog = Callback::new(move |_: ()| state.update(|s| s.dialog = None));

    let on_assign = Callback::new(move |request: AssignDriverRequest| {
        let record = store.assign(&request.driver_id, request.orders.clone());
        log!("✅ Stored {} order(s) for {}", record.order_count(), record.driver_id);
        toast.success("Driver Assigned", &request.success_message());
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            state.update(|s| {
                s.selection.clear();
                s.dialog = None;
            });
        });
    });

    let highlighted = move |text: String| {
        move || state.with(|s| highlight_matches(&text, &s.filter.query))
    };

    let order_row = move |row: OrderRow| {
        let id_for_assign = row.id.clone();
        let order_id_badge = row.order_id.clone();
        let ctx = if state.with_untracked(|s| s.active_tab) == AssignmentTab::Rescheduled {
            LabelContext::rescheduled()
        } else {
            LabelContext::default()
        };

        view! {
            <TableRow>
                <TableCellCheckbox
                    item_id=row.id.clone()
                    selected=selected_ids
                    on_change=Callback::new(toggle_row)
                />
                <TableCell>
                    <TableCellLayout>{highlighted(row.order_id.clone())}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{format_date(&row.date)}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <div>{highlighted(row.customer.clone())}</div>
                        <div class="table__secondary">{row.phone.clone()}</div>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{row.customer_address.clone()}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <div>{highlighted(row.studio.clone())}</div>
                        <div class="table__secondary">{row.studio_address.clone()}</div>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{row.wash_type.clone()}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{row.distance.clone()}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <StatusBadge
                        order_id=order_id_badge
                        status=row.status.clone().unwrap_or_default()
                        ctx=ctx
                    />
                </TableCell>
                <TableCell>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.open_for_single(&id_for_assign))
                    >
                        "Assign"
                    </Button>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="u501_assign_driver--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("truck")}
                    <h1 class="page__title">{AssignDriver::display_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || visible.with(|v| v.is_empty()))
                        on_click=move |_| state.update(|s| s.toggle_all_visible())
                    >
                        {move || if state.with(|s| s.all_visible_selected()) { "Deselect All" } else { "Select All" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || state.with(|s| s.selection.is_empty()))
                        on_click=move |_| state.update(|s| s.open_for_selection())
                    >
                        {icon("truck")}
                        {move || format!(" Assign Selected ({})", state.with(|s| s.selection.total()))}
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 360px;">
                        <Input value=search_query placeholder="Search by order ID, customer or studio..." />
                    </div>
                    <Select value=wash_type>
                        <option value="all">"All Wash Types"</option>
                        {WashType::all()
                            .into_iter()
                            .map(|w| view! { <option value=w.code()>{w.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </Flex>
            </div>

            <div class="page__tabs">
                {AssignmentTab::all()
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class="page__tab"
                            class:page__tab--active=move || state.with(|s| s.active_tab == tab)
                            on:click=move |_| state.update(|s| s.active_tab = tab)
                        >
                            {icon(tab_icon(tab))}
                            {tab.display_name()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="page__content">
                <div class="table-caption">
                    {move || {
                        let (tab, count) = state.with(|s| (s.active_tab, s.count(s.active_tab)));
                        view! {
                            <span class="table-caption__title">{icon(tab_icon(tab))}{tab.display_name()}</span>
                            <span class="table-caption__counter">{tab.count_caption(count)}</span>
                        }
                    }}
                </div>

                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=move || view! {
                        <div class="page__empty">{move || state.with(|s| s.active_tab.empty_text())}</div>
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 1100px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCheckbox
                                        visible=visible_ids
                                        selected=selected_ids
                                        on_change=Callback::new(move |_: bool| state.update(|s| s.toggle_all_visible()))
                                    />
                                    <TableHeaderCell min_width=100.0>"ORDER ID"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"DATE"</TableHeaderCell>
                                    <TableHeaderCell min_width=150.0>"CUSTOMER"</TableHeaderCell>
                                    <TableHeaderCell min_width=200.0>"ADDRESS"</TableHeaderCell>
                                    <TableHeaderCell min_width=180.0>"STUDIO"</TableHeaderCell>
                                    <TableHeaderCell min_width=110.0>"WASH TYPE"</TableHeaderCell>
                                    <TableHeaderCell min_width=80.0>"DISTANCE"</TableHeaderCell>
                                    <TableHeaderCell min_width=140.0>"STATUS"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0>"ACTION"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || visible.get()
                                    key=|row| row.id.clone()
                                    children=order_row
                                />
                            </TableBody>
                        </Table>
                    </div>
                </Show>
            </div>

            {move || dialog.get().map(|selection| view! {
                <AssignDriverDialog
                    selection=selection.resolve()
                    on_close=close_dialog
                    on_assign=on_assign
                />
            })}
        </PageFrame>
    }
}
