// src/domain/order.rs

use crate::domain::carpenter::{resolve_carpenter_name, Carpenter};
use crate::domain::logic::derive_order_display_status;
use crate::domain::status::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A service order as the shop sees it.
///
/// Dates stay as the raw strings the backend sent (the two API generations
/// disagree on format); `dates::parse_date` is applied wherever a real date
/// is needed. The carpenter field is a weak reference — an id or a plain
/// name — resolved against the roster only for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub entry_date: Option<String>,
    pub exit_date: Option<String>,
    pub status: OrderStatus,
    pub carpenter: Option<String>,
    pub materials: Vec<Material>,
}

/// One consumed material line. The list is always edited and saved as a
/// whole (replace-on-save), never diffed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    // Wire names follow the relational backend; the legacy English names are
    // still accepted on the way in.
    #[serde(rename = "descricao", alias = "description")]
    pub description: String,
    #[serde(default, rename = "quantidade", alias = "quantity")]
    pub quantity: f64,
}

impl Material {
    /// "2x Folha de MDF" style label; whole quantities drop the decimals.
    pub fn summary(&self) -> String {
        if self.quantity.fract() == 0.0 {
            format!("{}x {}", self.quantity as i64, self.description)
        } else {
            format!("{}x {}", self.quantity, self.description)
        }
    }
}

/// Row-level view of an order after the engine pipeline has run: the derived
/// display status and the resolved carpenter name, ready for the table, the
/// spreadsheet export and the reminder message alike.
#[derive(Debug)]
pub struct OrderRow {
    pub order: Order,
    pub display_status: OrderStatus,
    pub carpenter_name: Option<String>,
}

impl OrderRow {
    pub fn build(orders: Vec<Order>, roster: &[Carpenter], today: NaiveDate) -> Vec<OrderRow> {
        orders
            .into_iter()
            .map(|order| {
                let display_status = derive_order_display_status(&order, today);
                let carpenter_name = order
                    .carpenter
                    .as_deref()
                    .map(|key| resolve_carpenter_name(roster, key).to_string());
                OrderRow {
                    order,
                    display_status,
                    carpenter_name,
                }
            })
            .collect()
    }

    pub fn materials_summary(&self) -> String {
        self.order
            .materials
            .iter()
            .map(Material::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
