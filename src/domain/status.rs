// src/domain/status.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle status of a service order.
///
/// `Atrasada` and `ParaHoje` are normally *derived* overlays computed from the
/// due date (see `domain::logic`), but the legacy backend also stores them, so
/// they are full variants here.
///
/// Tokens the backend has never taught us land in `Unknown`, keeping the raw
/// string around so the UI can still show it. That mapping happens only at
/// the deserialization boundary; everywhere else the enum is matched
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Atrasada,
    ParaHoje,
    EmProcesso,
    Recebida,
    Concluida,
    Unknown(String),
}

impl OrderStatus {
    pub fn from_token(raw: &str) -> Self {
        match raw {
            "atrasada" => OrderStatus::Atrasada,
            "paraHoje" => OrderStatus::ParaHoje,
            "emProcesso" => OrderStatus::EmProcesso,
            "recebida" => OrderStatus::Recebida,
            "concluida" => OrderStatus::Concluida,
            other => OrderStatus::Unknown(other.to_string()),
        }
    }

    /// Wire form, as the backend spells it.
    pub fn token(&self) -> &str {
        match self {
            OrderStatus::Atrasada => "atrasada",
            OrderStatus::ParaHoje => "paraHoje",
            OrderStatus::EmProcesso => "emProcesso",
            OrderStatus::Recebida => "recebida",
            OrderStatus::Concluida => "concluida",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Human label for badges, exports and messages.
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Atrasada => "Atrasada",
            OrderStatus::ParaHoje => "Para hoje",
            OrderStatus::EmProcesso => "Em processo",
            OrderStatus::Recebida => "Recebida",
            OrderStatus::Concluida => "Concluída",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Sort weight: urgent work first, finished work last.
    pub fn priority(&self) -> u32 {
        match self {
            OrderStatus::Atrasada => 1,
            OrderStatus::ParaHoje => 2,
            OrderStatus::EmProcesso => 3,
            OrderStatus::Recebida => 4,
            OrderStatus::Concluida => 5,
            OrderStatus::Unknown(_) => 999,
        }
    }

    /// A completed order is never recomputed against its due date.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Concluida)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Atrasada => "badge badge-red",
            OrderStatus::ParaHoje => "badge badge-orange",
            OrderStatus::EmProcesso => "badge badge-blue",
            OrderStatus::Recebida => "badge badge-gray",
            OrderStatus::Concluida => "badge badge-green",
            OrderStatus::Unknown(_) => "badge badge-gray",
        }
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OrderStatus::from_token(&raw))
    }
}

/// Lifecycle status of a delivery. Same shape as `OrderStatus`, different
/// vocabulary; `entregue` and `cancelada` are both terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Atrasada,
    ParaHoje,
    Pendente,
    EmRota,
    Entregue,
    Cancelada,
    Unknown(String),
}

impl DeliveryStatus {
    pub fn from_token(raw: &str) -> Self {
        match raw {
            "atrasada" => DeliveryStatus::Atrasada,
            "paraHoje" => DeliveryStatus::ParaHoje,
            "pendente" => DeliveryStatus::Pendente,
            "em_rota" => DeliveryStatus::EmRota,
            "entregue" => DeliveryStatus::Entregue,
            "cancelada" => DeliveryStatus::Cancelada,
            other => DeliveryStatus::Unknown(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            DeliveryStatus::Atrasada => "atrasada",
            DeliveryStatus::ParaHoje => "paraHoje",
            DeliveryStatus::Pendente => "pendente",
            DeliveryStatus::EmRota => "em_rota",
            DeliveryStatus::Entregue => "entregue",
            DeliveryStatus::Cancelada => "cancelada",
            DeliveryStatus::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DeliveryStatus::Atrasada => "Atrasada",
            DeliveryStatus::ParaHoje => "Para hoje",
            DeliveryStatus::Pendente => "Pendente",
            DeliveryStatus::EmRota => "Em rota",
            DeliveryStatus::Entregue => "Entregue",
            DeliveryStatus::Cancelada => "Cancelada",
            DeliveryStatus::Unknown(raw) => raw,
        }
    }

    pub fn priority(&self) -> u32 {
        match self {
            DeliveryStatus::Atrasada => 1,
            DeliveryStatus::ParaHoje => 2,
            DeliveryStatus::Pendente => 3,
            DeliveryStatus::EmRota => 4,
            DeliveryStatus::Entregue => 5,
            DeliveryStatus::Cancelada => 6,
            DeliveryStatus::Unknown(_) => 999,
        }
    }

    /// Delivered and cancelled deliveries keep whatever was stored.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Entregue | DeliveryStatus::Cancelada)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DeliveryStatus::Atrasada => "badge badge-red",
            DeliveryStatus::ParaHoje => "badge badge-orange",
            DeliveryStatus::Pendente => "badge badge-gray",
            DeliveryStatus::EmRota => "badge badge-blue",
            DeliveryStatus::Entregue => "badge badge-green",
            DeliveryStatus::Cancelada => "badge badge-gray",
            DeliveryStatus::Unknown(_) => "badge badge-gray",
        }
    }
}

impl Serialize for DeliveryStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for DeliveryStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DeliveryStatus::from_token(&raw))
    }
}
