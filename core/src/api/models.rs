//! Market models: lookup, batch lookup, offers and search.

use serde_json::Value;

use crate::api::DEFAULT_CURRENCY;
use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::types::SortOrder;
use crate::validate;

/// Largest batch `POST models` accepts.
pub const MAX_MODELS_PER_REQUEST: usize = 100;
/// Largest page of `models/{id}/offers`.
pub const MAX_OFFERS_PER_PAGE: u32 = 100;

pub const GET: Endpoint =
    Endpoint::get("models.get", "models/{model_id}").query(&["regionId", "currency"]);
pub const BATCH: Endpoint = Endpoint::post("models.batch", "models")
    .query(&["regionId", "currency"])
    .body(&["models"]);
pub const OFFERS: Endpoint = Endpoint::get("models.offers", "models/{model_id}/offers").query(&[
    "regionId",
    "count",
    "currency",
    "page",
    "orderByPrice",
]);
pub const SEARCH: Endpoint = Endpoint::get("models.search", "models").query(&[
    "query",
    "regionId",
    "currency",
    "page",
    "pageSize",
]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[GET, BATCH, OFFERS, SEARCH];

/// Page selection for model offers and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            size: 10,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Models<'a> {
    client: &'a MarketClient,
}

impl<'a> Models<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// `currency` defaults to RUR.
    pub fn get(&self, model_id: u64, region_id: u64, currency: Option<&str>) -> Option<Value> {
        self.client.call(
            &GET,
            Args::new()
                .path("model_id", model_id)
                .query("regionId", region_id)
                .query("currency", currency.unwrap_or(DEFAULT_CURRENCY)),
        )
    }

    /// Up to `MAX_MODELS_PER_REQUEST` models in one call.
    pub fn batch(&self, model_ids: &[u64], region_id: u64, currency: Option<&str>) -> Option<Value> {
        self.client.call_checked(&BATCH, || {
            validate::bounded("model_ids", model_ids, MAX_MODELS_PER_REQUEST)?;
            Ok(Args::new()
                .query("regionId", region_id)
                .query("currency", currency.unwrap_or(DEFAULT_CURRENCY))
                .field("models", model_ids))
        })
    }

    /// Offers of a model; `page.size` is the vendor's `count` (1 to 100).
    pub fn offers(
        &self,
        model_id: u64,
        region_id: u64,
        page: Page,
        currency: Option<&str>,
        order_by_price: Option<SortOrder>,
    ) -> Option<Value> {
        self.client.call_checked(&OFFERS, || {
            validate::in_range("count", page.size, 1..=MAX_OFFERS_PER_PAGE)?;
            Ok(Args::new()
                .path("model_id", model_id)
                .query("regionId", region_id)
                .query("count", page.size)
                .query("currency", currency.unwrap_or(DEFAULT_CURRENCY))
                .query("page", page.number)
                .query("orderByPrice", order_by_price.map(SortOrder::as_str)))
        })
    }

    pub fn search(
        &self,
        query: &str,
        region_id: u64,
        page: Page,
        currency: Option<&str>,
    ) -> Option<Value> {
        self.client.call_checked(&SEARCH, || {
            validate::not_blank("query", query)?;
            Ok(Args::new()
                .query("query", query)
                .query("regionId", region_id)
                .query("currency", currency.unwrap_or(DEFAULT_CURRENCY))
                .query("page", page.number)
                .query("pageSize", page.size))
        })
    }
}
