//! Campaigns (stores): settings, orders, returns, store offers and prices,
//! hidden offers, stocks and statistics.

use serde_json::{json, Map, Value};

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::types::OrdersStatsQuery;
use crate::validate;

pub const LIST: Endpoint = Endpoint::get("campaigns.list", "campaigns");
pub const GET: Endpoint = Endpoint::get("campaigns.get", "campaigns/{campaign_id}");
pub const SETTINGS: Endpoint =
    Endpoint::get("campaigns.settings", "campaigns/{campaign_id}/settings");
pub const ORDERS: Endpoint = Endpoint::get("campaigns.orders", "campaigns/{campaign_id}/orders")
    .query(&["limit", "page_token"]);
pub const ORDER: Endpoint =
    Endpoint::get("campaigns.order", "campaigns/{campaign_id}/orders/{order_id}");
pub const RETURNS: Endpoint =
    Endpoint::get("campaigns.returns", "campaigns/{campaign_id}/returns").any_query();
pub const RETURN: Endpoint = Endpoint::get(
    "campaigns.return",
    "campaigns/{campaign_id}/orders/{order_id}/returns/{return_id}",
);
pub const OFFERS: Endpoint = Endpoint::post("campaigns.offers", "campaigns/{campaign_id}/offers")
    .any_query()
    .any_body();
pub const UPDATE_OFFERS: Endpoint =
    Endpoint::post("campaigns.update_offers", "campaigns/{campaign_id}/offers/update")
        .body(&["offers"]);
pub const DELETE_OFFERS: Endpoint =
    Endpoint::post("campaigns.delete_offers", "campaigns/{campaign_id}/offers/delete")
        .body(&["offerIds"]);
pub const PRICE_QUARANTINE: Endpoint =
    Endpoint::post("campaigns.price_quarantine", "campaigns/{campaign_id}/price-quarantine")
        .any_query()
        .any_body();
pub const PRICES: Endpoint =
    Endpoint::post("campaigns.prices", "campaigns/{campaign_id}/offer-prices").body(&["offerIds"]);
pub const UPDATE_PRICES: Endpoint =
    Endpoint::post("campaigns.update_prices", "campaigns/{campaign_id}/offer-prices/updates")
        .body(&["offers"]);
pub const HIDDEN_OFFERS: Endpoint =
    Endpoint::get("campaigns.hidden_offers", "campaigns/{campaign_id}/hidden-offers");
pub const HIDE_OFFERS: Endpoint =
    Endpoint::post("campaigns.hide_offers", "campaigns/{campaign_id}/hidden-offers")
        .body(&["hiddenOffers"]);
pub const UNHIDE_OFFERS: Endpoint =
    Endpoint::post("campaigns.unhide_offers", "campaigns/{campaign_id}/hidden-offers/delete")
        .body(&["hiddenOffers"]);
pub const STOCKS: Endpoint = Endpoint::post("campaigns.stocks", "campaigns/{campaign_id}/offers/stocks")
    .any_query()
    .any_body();
pub const ORDERS_STATS: Endpoint =
    Endpoint::post("campaigns.orders_stats", "campaigns/{campaign_id}/stats/orders")
        .body(&["dateFrom", "dateTo", "statuses", "hasCis"]);
pub const SKU_STATS: Endpoint =
    Endpoint::post("campaigns.sku_stats", "campaigns/{campaign_id}/stats/skus").body(&["shopSkus"]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[
    LIST,
    GET,
    SETTINGS,
    ORDERS,
    ORDER,
    RETURNS,
    RETURN,
    OFFERS,
    UPDATE_OFFERS,
    DELETE_OFFERS,
    PRICE_QUARANTINE,
    PRICES,
    UPDATE_PRICES,
    HIDDEN_OFFERS,
    HIDE_OFFERS,
    UNHIDE_OFFERS,
    STOCKS,
    ORDERS_STATS,
    SKU_STATS,
];

/// Operations scoped to one campaign (store).
#[derive(Debug, Clone, Copy)]
pub struct Campaigns<'a> {
    client: &'a MarketClient,
}

impl<'a> Campaigns<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Every campaign the key has access to.
    pub fn list(&self) -> Option<Value> {
        self.client.call(&LIST, Args::new())
    }

    pub fn get(&self, campaign_id: u64) -> Option<Value> {
        self.client.call(&GET, Args::new().path("campaign_id", campaign_id))
    }

    pub fn settings(&self, campaign_id: u64) -> Option<Value> {
        self.client
            .call(&SETTINGS, Args::new().path("campaign_id", campaign_id))
    }

    pub fn orders(
        &self,
        campaign_id: u64,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Option<Value> {
        self.client.call(
            &ORDERS,
            Args::new()
                .path("campaign_id", campaign_id)
                .query("limit", limit)
                .query("page_token", page_token),
        )
    }

    pub fn order(&self, campaign_id: u64, order_id: u64) -> Option<Value> {
        self.client.call(
            &ORDER,
            Args::new()
                .path("campaign_id", campaign_id)
                .path("order_id", order_id),
        )
    }

    pub fn returns(&self, campaign_id: u64, params: Option<&Map<String, Value>>) -> Option<Value> {
        self.client.call(
            &RETURNS,
            Args::new().path("campaign_id", campaign_id).query_map(params),
        )
    }

    pub fn return_info(&self, campaign_id: u64, order_id: u64, return_id: u64) -> Option<Value> {
        self.client.call(
            &RETURN,
            Args::new()
                .path("campaign_id", campaign_id)
                .path("order_id", order_id)
                .path("return_id", return_id),
        )
    }

    /// Store offers. The vendor requires a body even when it is `{}`.
    pub fn offers(
        &self,
        campaign_id: u64,
        params: Option<&Map<String, Value>>,
        body: Option<Value>,
    ) -> Option<Value> {
        self.client.call(
            &OFFERS,
            Args::new()
                .path("campaign_id", campaign_id)
                .query_map(params)
                .body(Some(body.filter(|b| !b.is_null()).unwrap_or_else(|| json!({})))),
        )
    }

    /// Store-level offer conditions (quantum, availability, ...).
    pub fn update_offers(&self, campaign_id: u64, offers: &[Value]) -> Option<Value> {
        self.client.call_checked(&UPDATE_OFFERS, || {
            validate::non_empty("offers", offers)?;
            Ok(Args::new().path("campaign_id", campaign_id).field("offers", offers))
        })
    }

    pub fn delete_offers(&self, campaign_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.client.call_checked(&DELETE_OFFERS, || {
            validate::non_empty("offer_ids", offer_ids)?;
            Ok(Args::new()
                .path("campaign_id", campaign_id)
                .field("offerIds", offer_ids))
        })
    }

    pub fn price_quarantine(
        &self,
        campaign_id: u64,
        params: Option<&Map<String, Value>>,
        body: Option<Value>,
    ) -> Option<Value> {
        self.client.call(
            &PRICE_QUARANTINE,
            Args::new()
                .path("campaign_id", campaign_id)
                .query_map(params)
                .body(body),
        )
    }

    /// Store prices of the given offers.
    pub fn prices(&self, campaign_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.client.call(
            &PRICES,
            Args::new()
                .path("campaign_id", campaign_id)
                .field("offerIds", offer_ids),
        )
    }

    /// Store prices; each entry is `{"offerId": .., "price": {..}}`.
    pub fn update_prices(&self, campaign_id: u64, offers: &[Value]) -> Option<Value> {
        self.client.call_checked(&UPDATE_PRICES, || {
            validate::non_empty("offers", offers)?;
            Ok(Args::new().path("campaign_id", campaign_id).field("offers", offers))
        })
    }

    pub fn hidden_offers(&self, campaign_id: u64) -> Option<Value> {
        self.client
            .call(&HIDDEN_OFFERS, Args::new().path("campaign_id", campaign_id))
    }

    pub fn hide_offers(&self, campaign_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.client.call_checked(&HIDE_OFFERS, || {
            validate::non_empty("offer_ids", offer_ids)?;
            Ok(Args::new()
                .path("campaign_id", campaign_id)
                .field("hiddenOffers", hidden_offer_list(offer_ids)))
        })
    }

    pub fn unhide_offers(&self, campaign_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.client.call_checked(&UNHIDE_OFFERS, || {
            validate::non_empty("offer_ids", offer_ids)?;
            Ok(Args::new()
                .path("campaign_id", campaign_id)
                .field("hiddenOffers", hidden_offer_list(offer_ids)))
        })
    }

    pub fn stocks(
        &self,
        campaign_id: u64,
        params: Option<&Map<String, Value>>,
        body: Option<Value>,
    ) -> Option<Value> {
        self.client.call(
            &STOCKS,
            Args::new()
                .path("campaign_id", campaign_id)
                .query_map(params)
                .body(body),
        )
    }

    pub fn orders_stats(&self, campaign_id: u64, query: &OrdersStatsQuery) -> Option<Value> {
        self.client.call_checked(&ORDERS_STATS, || {
            validate::not_blank("date_from", &query.date_from)?;
            validate::not_blank("date_to", &query.date_to)?;
            Ok(Args::new().path("campaign_id", campaign_id).fields(query))
        })
    }

    pub fn sku_stats(&self, campaign_id: u64, shop_skus: &[String]) -> Option<Value> {
        self.client.call_checked(&SKU_STATS, || {
            validate::non_empty("shop_skus", shop_skus)?;
            Ok(Args::new()
                .path("campaign_id", campaign_id)
                .field("shopSkus", shop_skus))
        })
    }
}

fn hidden_offer_list(offer_ids: &[String]) -> Vec<Value> {
    offer_ids
        .iter()
        .map(|offer_id| json!({ "offerId": offer_id }))
        .collect()
}
