//! Marketplace promos and offer participation.

use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::validate;

pub const LIST: Endpoint =
    Endpoint::post("promos.list", "businesses/{business_id}/promos").any_body();
pub const OFFERS: Endpoint = Endpoint::post("promos.offers", "businesses/{business_id}/promos/offers")
    .query(&["limit", "page_token"])
    .body(&["promoId", "statusType"]);
pub const UPDATE_OFFERS: Endpoint =
    Endpoint::post("promos.update_offers", "businesses/{business_id}/promos/offers/update")
        .body(&["promoId", "offers"]);
pub const DELETE_OFFERS: Endpoint =
    Endpoint::post("promos.delete_offers", "businesses/{business_id}/promos/offers/delete")
        .body(&["promoId", "offerIds", "deleteAllOffers"]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[LIST, OFFERS, UPDATE_OFFERS, DELETE_OFFERS];

/// Which offers leave a promo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoRemoval<'a> {
    Offers(&'a [String]),
    All,
}

#[derive(Debug, Clone, Copy)]
pub struct Promos<'a> {
    client: &'a MarketClient,
}

impl<'a> Promos<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    pub fn list(&self, business_id: u64, body: Option<Value>) -> Option<Value> {
        self.client
            .call(&LIST, Args::new().path("business_id", business_id).body(body))
    }

    /// Offers in a promo, optionally filtered by participation status.
    pub fn offers(
        &self,
        business_id: u64,
        promo_id: &str,
        status_type: Option<&str>,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Option<Value> {
        self.client.call_checked(&OFFERS, || {
            validate::not_blank("promo_id", promo_id)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .query("limit", limit)
                .query("page_token", page_token)
                .field("promoId", promo_id)
                .opt_field("statusType", status_type))
        })
    }

    /// Add offers to a promo or change their promo prices.
    pub fn update_offers(&self, business_id: u64, promo_id: &str, offers: &[Value]) -> Option<Value> {
        self.client.call_checked(&UPDATE_OFFERS, || {
            validate::not_blank("promo_id", promo_id)?;
            validate::non_empty("offers", offers)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("promoId", promo_id)
                .field("offers", offers))
        })
    }

    pub fn delete_offers(
        &self,
        business_id: u64,
        promo_id: &str,
        removal: PromoRemoval<'_>,
    ) -> Option<Value> {
        let (offer_ids, delete_all) = match removal {
            PromoRemoval::Offers(ids) => (ids, false),
            PromoRemoval::All => (&[][..], true),
        };
        self.delete_offers_raw(business_id, promo_id, offer_ids, delete_all)
    }

    /// Same as `delete_offers` with the vendor's two fields given
    /// separately. Exactly one of a non-empty `offer_ids` and `delete_all`
    /// must be set.
    pub fn delete_offers_raw(
        &self,
        business_id: u64,
        promo_id: &str,
        offer_ids: &[String],
        delete_all: bool,
    ) -> Option<Value> {
        self.client.call_checked(&DELETE_OFFERS, || {
            validate::not_blank("promo_id", promo_id)?;
            validate::exactly_one("offer_ids|delete_all", !offer_ids.is_empty(), delete_all)?;
            let args = Args::new()
                .path("business_id", business_id)
                .field("promoId", promo_id);
            Ok(if delete_all {
                args.field("deleteAllOffers", true)
            } else {
                args.field("offerIds", offer_ids)
            })
        })
    }
}
