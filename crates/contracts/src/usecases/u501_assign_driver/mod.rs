pub mod buckets;
pub mod filter;
pub mod request;
pub mod selection;

pub use buckets::{classify_rescheduled, AssignmentTab, OrderBuckets};
pub use filter::OrderFilter;
pub use request::AssignDriverRequest;
pub use selection::{ResolvedSelection, Selection, TabSelection};

use crate::usecases::common::UseCaseMetadata;

pub struct AssignDriver;

impl UseCaseMetadata for AssignDriver {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "assign_driver"
    }

    fn display_name() -> &'static str {
        "Order Assignment"
    }

    fn description() -> &'static str {
        "Assign new, ready and rescheduled orders to a delivery driver"
    }
}
