//! Marketplace fee calculation.

use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::types::TariffParameters;
use crate::validate;

pub const CALCULATE: Endpoint =
    Endpoint::post("tariffs.calculate", "tariffs/calculate").body(&["offers", "parameters"]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[CALCULATE];

#[derive(Debug, Clone, Copy)]
pub struct Tariffs<'a> {
    client: &'a MarketClient,
}

impl<'a> Tariffs<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Marketplace fees for the described offers. `parameters` is always
    /// sent, `{}` when every field is absent.
    pub fn calculate(&self, offers: &[Value], parameters: &TariffParameters) -> Option<Value> {
        self.client.call_checked(&CALCULATE, || {
            validate::non_empty("offers", offers)?;
            Ok(Args::new()
                .field("offers", offers)
                .field("parameters", parameters))
        })
    }
}
