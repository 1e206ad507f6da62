// src/domain/delivery.rs

use crate::domain::carpenter::{resolve_carpenter_name, Carpenter};
use crate::domain::logic::derive_delivery_display_status;
use crate::domain::status::DeliveryStatus;
use chrono::NaiveDate;

/// A delivery, structurally a sibling of `Order`: same raw date strings, same
/// weak assignee reference, its own status vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: String,
    pub created_date: Option<String>,
    pub delivery_date: Option<String>,
    pub status: DeliveryStatus,
    pub assignee: Option<String>,
}

/// Display row for the deliveries table.
#[derive(Debug)]
pub struct DeliveryRow {
    pub delivery: Delivery,
    pub display_status: DeliveryStatus,
    pub assignee_name: Option<String>,
}

impl DeliveryRow {
    pub fn build(
        deliveries: Vec<Delivery>,
        roster: &[Carpenter],
        today: NaiveDate,
    ) -> Vec<DeliveryRow> {
        deliveries
            .into_iter()
            .map(|delivery| {
                let display_status = derive_delivery_display_status(&delivery, today);
                let assignee_name = delivery
                    .assignee
                    .as_deref()
                    .map(|key| resolve_carpenter_name(roster, key).to_string());
                DeliveryRow {
                    delivery,
                    display_status,
                    assignee_name,
                }
            })
            .collect()
    }
}
