//! Market category tree and category metadata.

use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::validate;

pub const TREE: Endpoint = Endpoint::post("categories.tree", "categories/tree").body(&["language"]);
pub const MAX_SALE_QUANTUM: Endpoint =
    Endpoint::post("categories.max_sale_quantum", "categories/max-sale-quantum")
        .body(&["marketCategoryIds"]);
pub const PARAMETERS: Endpoint =
    Endpoint::post("categories.parameters", "category/{category_id}/parameters");

pub(crate) const ENDPOINTS: &[Endpoint] = &[TREE, MAX_SALE_QUANTUM, PARAMETERS];

#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    client: &'a MarketClient,
}

impl<'a> Categories<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Full category tree; `language` defaults to `RU`.
    pub fn tree(&self, language: Option<&str>) -> Option<Value> {
        self.client
            .call(&TREE, Args::new().field("language", language.unwrap_or("RU")))
    }

    pub fn max_sale_quantum(&self, category_ids: &[u64]) -> Option<Value> {
        self.client.call_checked(&MAX_SALE_QUANTUM, || {
            validate::non_empty("category_ids", category_ids)?;
            Ok(Args::new().field("marketCategoryIds", category_ids))
        })
    }

    /// Characteristics a card in this category can carry.
    pub fn parameters(&self, category_id: u64) -> Option<Value> {
        self.client
            .call(&PARAMETERS, Args::new().path("category_id", category_id))
    }
}
