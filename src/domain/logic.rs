// src/domain/logic.rs

use crate::dates::parse_date;
use crate::domain::delivery::Delivery;
use crate::domain::order::Order;
use crate::domain::status::{DeliveryStatus, OrderStatus};
use chrono::NaiveDate;

/// Computes the status an order should *display*, overlaying the stored
/// status with urgency derived from the due date. The order of checks
/// determines the precedence of the lifecycle.
///
/// Never writes back: the stored status stays authoritative and the overlay
/// is recomputed on every request with a fresh `today`.
pub fn derive_order_display_status(order: &Order, today: NaiveDate) -> OrderStatus {
    if order.status.is_terminal() {
        return order.status.clone();
    }
    // An unreadable due date means no overlay, not an error.
    let due = match order.exit_date.as_deref().and_then(parse_date) {
        Some(due) => due,
        None => return order.status.clone(),
    };
    if due < today {
        return OrderStatus::Atrasada;
    }
    if due == today {
        return OrderStatus::ParaHoje;
    }
    order.status.clone()
}

/// Same derivation for deliveries, against the scheduled delivery date.
pub fn derive_delivery_display_status(delivery: &Delivery, today: NaiveDate) -> DeliveryStatus {
    if delivery.status.is_terminal() {
        return delivery.status.clone();
    }
    let due = match delivery.delivery_date.as_deref().and_then(parse_date) {
        Some(due) => due,
        None => return delivery.status.clone(),
    };
    if due < today {
        return DeliveryStatus::Atrasada;
    }
    if due == today {
        return DeliveryStatus::ParaHoje;
    }
    delivery.status.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(exit_date: Option<&str>, status: OrderStatus) -> Order {
        Order {
            id: "OS-1".into(),
            entry_date: None,
            exit_date: exit_date.map(str::to_string),
            status,
            carpenter: None,
            materials: Vec::new(),
        }
    }

    #[test]
    fn past_due_becomes_atrasada() {
        let o = order(Some("05/01/2024"), OrderStatus::Recebida);
        assert_eq!(
            derive_order_display_status(&o, day(2024, 1, 8)),
            OrderStatus::Atrasada
        );
    }

    #[test]
    fn due_today_becomes_para_hoje() {
        let o = order(Some("2024-01-08"), OrderStatus::EmProcesso);
        assert_eq!(
            derive_order_display_status(&o, day(2024, 1, 8)),
            OrderStatus::ParaHoje
        );
    }

    #[test]
    fn future_due_keeps_stored_status() {
        let o = order(Some("2024-01-10"), OrderStatus::Recebida);
        assert_eq!(
            derive_order_display_status(&o, day(2024, 1, 8)),
            OrderStatus::Recebida
        );
    }

    #[test]
    fn concluida_is_never_recomputed() {
        let o = order(Some("05/01/2020"), OrderStatus::Concluida);
        assert_eq!(
            derive_order_display_status(&o, day(2024, 1, 8)),
            OrderStatus::Concluida
        );
    }

    #[test]
    fn unparsable_due_date_means_no_overlay() {
        let o = order(Some("not-a-date"), OrderStatus::Recebida);
        assert_eq!(
            derive_order_display_status(&o, day(2024, 1, 8)),
            OrderStatus::Recebida
        );
        let o = order(None, OrderStatus::EmProcesso);
        assert_eq!(
            derive_order_display_status(&o, day(2024, 1, 8)),
            OrderStatus::EmProcesso
        );
    }

    #[test]
    fn delivered_and_cancelled_keep_stored_status() {
        let base = Delivery {
            id: "E-1".into(),
            created_date: None,
            delivery_date: Some("01/01/2020".into()),
            status: DeliveryStatus::Entregue,
            assignee: None,
        };
        assert_eq!(
            derive_delivery_display_status(&base, day(2024, 1, 8)),
            DeliveryStatus::Entregue
        );
        let cancelled = Delivery {
            status: DeliveryStatus::Cancelada,
            ..base
        };
        assert_eq!(
            derive_delivery_display_status(&cancelled, day(2024, 1, 8)),
            DeliveryStatus::Cancelada
        );
    }

    #[test]
    fn pending_delivery_past_date_is_atrasada() {
        let d = Delivery {
            id: "E-2".into(),
            created_date: None,
            delivery_date: Some("2024-01-05".into()),
            status: DeliveryStatus::EmRota,
            assignee: None,
        };
        assert_eq!(
            derive_delivery_display_status(&d, day(2024, 1, 8)),
            DeliveryStatus::Atrasada
        );
    }
}
