//! Tab titles, one place for every key the registry knows.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_assign_driver::AssignDriver;

pub const DRIVER_DETAIL_PREFIX: &str = "a002_driver_detail_";
pub const DRIVER_ORDERS_PREFIX: &str = "a002_driver_orders_";

/// Readable title for a tab key. Unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    match key {
        "a001_order" => "Orders".to_string(),
        "a002_driver" => "Drivers".to_string(),
        "u501_assign_driver" => AssignDriver::display_name().to_string(),
        k if k.starts_with(DRIVER_DETAIL_PREFIX) => {
            detail_tab_label("Driver", &k[DRIVER_DETAIL_PREFIX.len()..])
        }
        k if k.starts_with(DRIVER_ORDERS_PREFIX) => {
            detail_tab_label("Assigned Orders", &k[DRIVER_ORDERS_PREFIX.len()..])
        }
        _ => key.to_string(),
    }
}

/// Detail tab title: «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn driver_detail_key(driver_id: &str) -> String {
    format!("{}{}", DRIVER_DETAIL_PREFIX, driver_id)
}

pub fn driver_orders_key(driver_id: &str) -> String {
    format!("{}{}", DRIVER_ORDERS_PREFIX, driver_id)
}
