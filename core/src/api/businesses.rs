//! Business (seller cabinet) settings, ratings, bids and business prices.

use serde_json::{Map, Value};

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::types::PriceRecommendationsFilter;
use crate::validate;

pub const SETTINGS: Endpoint =
    Endpoint::post("businesses.settings", "businesses/{business_id}/settings").any_body();
pub const QUALITY_RATING: Endpoint =
    Endpoint::post("businesses.quality_rating", "businesses/{business_id}/ratings/quality")
        .body(&["campaignIds"]);
pub const BIDS_INFO: Endpoint =
    Endpoint::post("businesses.bids_info", "businesses/{business_id}/bids/info")
        .query(&["limit", "page_token"])
        .body(&["skus"]);
pub const BID_RECOMMENDATIONS: Endpoint = Endpoint::post(
    "businesses.bid_recommendations",
    "businesses/{business_id}/bids/recommendations",
)
.body(&["skus"]);
pub const PUT_BIDS: Endpoint =
    Endpoint::put("businesses.put_bids", "businesses/{business_id}/bids").body(&["bids"]);
pub const PRICE_QUARANTINE: Endpoint =
    Endpoint::post("businesses.price_quarantine", "businesses/{business_id}/price-quarantine")
        .any_query()
        .any_body();
pub const UPDATE_PRICES: Endpoint =
    Endpoint::post("businesses.update_prices", "businesses/{business_id}/offer-prices/updates")
        .body(&["offers"]);
pub const PRICE_RECOMMENDATIONS: Endpoint = Endpoint::post(
    "businesses.price_recommendations",
    "businesses/{business_id}/offers/recommendations",
)
.query(&["limit", "page_token"])
.body(&[
    "offerIds",
    "cofinancePriceFilter",
    "recommendedCofinancePriceFilter",
    "competitivenessFilter",
]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[
    SETTINGS,
    QUALITY_RATING,
    BIDS_INFO,
    BID_RECOMMENDATIONS,
    PUT_BIDS,
    PRICE_QUARANTINE,
    UPDATE_PRICES,
    PRICE_RECOMMENDATIONS,
];

/// Operations scoped to one business id.
#[derive(Debug, Clone, Copy)]
pub struct Businesses<'a> {
    client: &'a MarketClient,
}

impl<'a> Businesses<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    pub fn settings(&self, business_id: u64, body: Option<Value>) -> Option<Value> {
        self.client
            .call(&SETTINGS, Args::new().path("business_id", business_id).body(body))
    }

    pub fn quality_rating(&self, business_id: u64, campaign_ids: &[u64]) -> Option<Value> {
        self.client.call_checked(&QUALITY_RATING, || {
            validate::non_empty("campaign_ids", campaign_ids)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("campaignIds", campaign_ids))
        })
    }

    /// Bids currently set. Without `skus`, every offer with a bid.
    pub fn bids_info(
        &self,
        business_id: u64,
        skus: &[String],
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Option<Value> {
        self.client.call(
            &BIDS_INFO,
            Args::new()
                .path("business_id", business_id)
                .query("limit", limit)
                .query("page_token", page_token)
                .opt_field("skus", skus),
        )
    }

    pub fn bid_recommendations(&self, business_id: u64, skus: &[String]) -> Option<Value> {
        self.client.call_checked(&BID_RECOMMENDATIONS, || {
            validate::non_empty("skus", skus)?;
            Ok(Args::new().path("business_id", business_id).field("skus", skus))
        })
    }

    /// Set bids; each entry is `{"sku": .., "bid": ..}`.
    pub fn put_bids(&self, business_id: u64, bids: &[Value]) -> Option<Value> {
        self.client.call_checked(&PUT_BIDS, || {
            validate::non_empty("bids", bids)?;
            Ok(Args::new().path("business_id", business_id).field("bids", bids))
        })
    }

    /// Offers held in price quarantine across the business.
    pub fn price_quarantine(
        &self,
        business_id: u64,
        params: Option<&Map<String, Value>>,
        body: Option<Value>,
    ) -> Option<Value> {
        self.client.call(
            &PRICE_QUARANTINE,
            Args::new()
                .path("business_id", business_id)
                .query_map(params)
                .body(body),
        )
    }

    /// Base prices for every store of the business.
    pub fn update_prices(&self, business_id: u64, offers: &[Value]) -> Option<Value> {
        self.client.call_checked(&UPDATE_PRICES, || {
            validate::non_empty("offers", offers)?;
            Ok(Args::new().path("business_id", business_id).field("offers", offers))
        })
    }

    pub fn price_recommendations(
        &self,
        business_id: u64,
        filter: &PriceRecommendationsFilter,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Option<Value> {
        self.client.call(
            &PRICE_RECOMMENDATIONS,
            Args::new()
                .path("business_id", business_id)
                .query("limit", limit)
                .query("page_token", page_token)
                .fields(filter),
        )
    }
}
