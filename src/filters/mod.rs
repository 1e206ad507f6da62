// src/filters/mod.rs
//
// The filtering, sorting and filter-state core shared by the orders and
// deliveries views. Everything here is a pure transformation over an
// in-memory collection; the clock is always passed in from the caller.

pub mod config;
pub mod engine;
pub mod sort;
pub mod state;

pub use config::{FilterConfig, SortKey, SortOrder};
pub use engine::apply_filters;
pub use sort::sort_records;
pub use state::FilterState;

use crate::domain::delivery::Delivery;
use crate::domain::logic::{derive_delivery_display_status, derive_order_display_status};
use crate::domain::order::Order;
use chrono::NaiveDate;

/// The seam that lets orders and deliveries share the engine.
///
/// Date accessors return the raw backend strings; parsing happens inside the
/// engine so the unparsable-date policies live in one place.
pub trait Record {
    fn id(&self) -> &str;
    fn entry_date(&self) -> Option<&str>;
    fn exit_date(&self) -> Option<&str>;
    fn assignee(&self) -> Option<&str>;
    /// Sort weight of the *display* status for the given date.
    fn status_priority(&self, today: NaiveDate) -> u32;
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
    fn entry_date(&self) -> Option<&str> {
        self.entry_date.as_deref()
    }
    fn exit_date(&self) -> Option<&str> {
        self.exit_date.as_deref()
    }
    fn assignee(&self) -> Option<&str> {
        self.carpenter.as_deref()
    }
    fn status_priority(&self, today: NaiveDate) -> u32 {
        derive_order_display_status(self, today).priority()
    }
}

impl Record for Delivery {
    fn id(&self) -> &str {
        &self.id
    }
    fn entry_date(&self) -> Option<&str> {
        self.created_date.as_deref()
    }
    fn exit_date(&self) -> Option<&str> {
        self.delivery_date.as_deref()
    }
    fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }
    fn status_priority(&self, today: NaiveDate) -> u32 {
        derive_delivery_display_status(self, today).priority()
    }
}
