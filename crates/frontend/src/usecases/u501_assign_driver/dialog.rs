use crate::shared::assignment_store::AssignmentStore;
use crate::shared::components::ui::Badge;
use crate::shared::data::drivers::sample_drivers;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_driver::{Driver, DriverBadge, DriverRoster};
use contracts::usecases::u501_assign_driver::{AssignDriverRequest, ResolvedSelection};
use leptos::prelude::*;
use thaw::*;

fn badge_variant(badge: &DriverBadge) -> &'static str {
    match badge {
        DriverBadge::Unavailable => "error",
        DriverBadge::Orders(_) => "info",
        DriverBadge::Free => "success",
    }
}

/// Driver picker for the checked orders
#[component]
pub fn AssignDriverDialog(
    selection: ResolvedSelection,
    on_close: Callback<()>,
    on_assign: Callback<AssignDriverRequest>,
) -> impl IntoView {
    let store = use_context::<AssignmentStore>().expect("AssignmentStore not found");

    let roster = RwSignal::new(DriverRoster::new(sample_drivers()));
    let subscription = store.subscribe(move |record| {
        roster.update(|r| {
            r.apply_assignment(record);
        });
    });
    on_cleanup(move || drop(subscription));

    let selected_driver = RwSignal::new(None::<String>);
    let count = selection.len();
    let noun = if count == 1 { "order" } else { "orders" };
    let stored_selection = StoredValue::new(selection);

    let confirm = move |_: leptos::ev::MouseEvent| {
        let Some(driver_id) = selected_driver.get_untracked() else {
            return;
        };
        let request =
            stored_selection.with_value(|s| AssignDriverRequest::from_selection(&driver_id, s));
        if request.is_empty() {
            return;
        }
        on_assign.run(request);
    };

    let driver_row = move |driver: Driver| {
        let badge = DriverBadge::for_driver(&driver);
        let selectable = driver.is_available();
        let id_for_class = driver.id.clone();
        let id_for_click = driver.id.clone();

        view! {
            <div
                class="driver-option"
                class:driver-option--selected=move || {
                    selected_driver.with(|s| s.as_deref() == Some(id_for_class.as_str()))
                }
                class:driver-option--disabled=!selectable
                on:click=move |_| {
                    if selectable {
                        selected_driver.set(Some(id_for_click.clone()));
                    }
                }
            >
                {icon("user")}
                <div class="driver-option__info">
                    <div class="driver-option__name">{driver.name.clone()}</div>
                    <div class="driver-option__id">{format!("ID: {}", driver.id)}</div>
                </div>
                <Badge variant=badge_variant(&badge).to_string()>{badge.text()}</Badge>
            </div>
        }
    };

    view! {
        <ModalFrame on_close=on_close modal_class="assign-driver">
            <div class="modal__header">
                <div>
                    <h2 class="modal__title">{icon("truck")}"Assign Driver to Orders"</h2>
                    <div class="modal__subtitle">
                        {format!("Select a driver to assign {} {}", count, noun)}
                    </div>
                </div>
            </div>

            <div class="modal__body">
                <h3 class="assign-driver__section">"Selected Orders"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Order ID"</TableHeaderCell>
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <TableHeaderCell>"Address"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {stored_selection
                            .with_value(|s| s.orders.clone())
                            .into_iter()
                            .map(|row| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.order_id}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.customer}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{row.customer_address}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>

                <div class="assign-driver__drivers-header">
                    <h3 class="assign-driver__section">"Available Drivers"</h3>
                    <span class="assign-driver__counter">
                        {move || roster.with(|r| format!("{} Available / {} Total", r.available_count(), r.total()))}
                    </span>
                </div>
                <div class="assign-driver__drivers">
                    {move || {
                        roster
                            .with(|r| r.sorted_for_dialog())
                            .into_iter()
                            .map(driver_row)
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || selected_driver.with(|s| s.is_none()))
                    on_click=confirm
                >
                    {icon("user")}
                    " Assign Driver"
                </Button>
            </div>
        </ModalFrame>
    }
}
