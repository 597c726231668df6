//! Mock datasets the dashboard runs on

pub mod drivers;
pub mod orders;

use contracts::domain::a001_order::StatusOverrides;
use once_cell::sync::Lazy;

/// Per-order trip fixtures that go with the mock order dataset
pub static STATUS_OVERRIDES: Lazy<StatusOverrides> = Lazy::new(StatusOverrides::demo);
