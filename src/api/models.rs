// src/api/models.rs

use crate::domain::delivery::Delivery;
use crate::domain::order::{Material, Order};
use crate::domain::status::{DeliveryStatus, OrderStatus};
use serde::Deserialize;

// Two API generations feed this dashboard: the legacy flat "orders" backend
// (English-ish field names, dd/mm/yyyy strings) and the relational "ordens"
// backend (Portuguese names, ISO dates). The aliases below accept both;
// dates are kept as raw strings on purpose and only parsed by the engine.

#[derive(Debug, Deserialize)]
pub struct OrderDto {
    #[serde(alias = "numero", alias = "orderId")]
    pub id: String,
    #[serde(default, alias = "dataEntrada", alias = "entryDate")]
    pub entry_date: Option<String>,
    #[serde(default, alias = "dataSaida", alias = "exitDate")]
    pub exit_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "marceneiro", alias = "carpenter")]
    pub carpenter: Option<String>,
    #[serde(default, alias = "materiais")]
    pub materials: Vec<Material>,
}

impl OrderDto {
    /// Boundary where free-form status tokens become the closed enum; an
    /// absent status counts as freshly received.
    pub fn into_domain(self) -> Order {
        let status = self
            .status
            .as_deref()
            .map(OrderStatus::from_token)
            .unwrap_or(OrderStatus::Recebida);
        Order {
            id: self.id,
            entry_date: self.entry_date,
            exit_date: self.exit_date,
            status,
            carpenter: self.carpenter,
            materials: self.materials,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeliveryDto {
    #[serde(alias = "numero")]
    pub id: String,
    #[serde(default, alias = "dataCriacao", alias = "creationDate")]
    pub created_date: Option<String>,
    #[serde(default, alias = "dataEntrega", alias = "deliveryDate")]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "responsavel", alias = "assignee")]
    pub assignee: Option<String>,
}

impl DeliveryDto {
    pub fn into_domain(self) -> Delivery {
        let status = self
            .status
            .as_deref()
            .map(DeliveryStatus::from_token)
            .unwrap_or(DeliveryStatus::Pendente);
        Delivery {
            id: self.id,
            created_date: self.created_date,
            delivery_date: self.delivery_date,
            status,
            assignee: self.assignee,
        }
    }
}
