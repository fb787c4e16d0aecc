//! Warehouses, delivery services and business stock updates.

use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::validate;

pub const WAREHOUSES: Endpoint = Endpoint::get("logistics.warehouses", "warehouses");
pub const DELIVERY_SERVICES: Endpoint =
    Endpoint::get("logistics.delivery_services", "delivery/services");
pub const UPDATE_STOCKS: Endpoint =
    Endpoint::post("logistics.update_stocks", "businesses/{business_id}/stocks")
        .body(&["warehouseId", "stocks"]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[WAREHOUSES, DELIVERY_SERVICES, UPDATE_STOCKS];

#[derive(Debug, Clone, Copy)]
pub struct Logistics<'a> {
    client: &'a MarketClient,
}

impl<'a> Logistics<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Market fulfillment (FBY) warehouses.
    pub fn warehouses(&self) -> Option<Value> {
        self.client.call(&WAREHOUSES, Args::new())
    }

    pub fn delivery_services(&self) -> Option<Value> {
        self.client.call(&DELIVERY_SERVICES, Args::new())
    }

    /// Replace stock levels of one seller warehouse.
    pub fn update_stocks(&self, business_id: u64, warehouse_id: u64, stocks: &[Value]) -> Option<Value> {
        self.client.call_checked(&UPDATE_STOCKS, || {
            validate::non_empty("stocks", stocks)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("warehouseId", warehouse_id)
                .field("stocks", stocks))
        })
    }
}
