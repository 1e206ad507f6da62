// src/api/client.rs

use crate::api::models::{DeliveryDto, OrderDto};
use crate::api::ApiError;
use crate::domain::carpenter::Carpenter;
use crate::domain::delivery::Delivery;
use crate::domain::order::{Material, Order};
use crate::domain::status::OrderStatus;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Blocking client for the ordens/entregas/marceneiros REST backend. All
/// authoritative data lives there; this program only reads collections and
/// forwards edits.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        let dtos: Vec<OrderDto> = self.get_json("/ordens")?;
        Ok(dtos.into_iter().map(OrderDto::into_domain).collect())
    }

    pub fn fetch_deliveries(&self) -> Result<Vec<Delivery>, ApiError> {
        let dtos: Vec<DeliveryDto> = self.get_json("/entregas")?;
        Ok(dtos.into_iter().map(DeliveryDto::into_domain).collect())
    }

    pub fn fetch_carpenters(&self) -> Result<Vec<Carpenter>, ApiError> {
        self.get_json("/marceneiros")
    }

    /// Forwards a manual status change. The stored status is authoritative
    /// once set; display overlays are never written back through here.
    pub fn update_order_status(&self, id: &str, status: &OrderStatus) -> Result<(), ApiError> {
        let url = format!("{}/ordens/{}", self.base_url, id);
        let resp = self
            .client
            .patch(&url)
            .json(&json!({ "status": status.token() }))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&resp)
    }

    /// Replaces an order's whole material list (replace-on-save; the backend
    /// does not take diffs).
    pub fn replace_materials(&self, id: &str, materials: &[Material]) -> Result<(), ApiError> {
        let url = format!("{}/ordens/{}/materiais", self.base_url, id);
        let resp = self
            .client
            .put(&url)
            .json(&materials)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&resp)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&resp)?;
        resp.json::<T>().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn check_status(resp: &reqwest::blocking::Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Http(status.as_u16()))
        }
    }
}
