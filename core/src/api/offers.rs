//! The business catalog: offer mappings, archive and content cards.

use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::validate;

pub const MAPPINGS: Endpoint =
    Endpoint::post("offers.mappings", "businesses/{business_id}/offer-mappings").any_body();
pub const ARCHIVE: Endpoint =
    Endpoint::post("offers.archive", "businesses/{business_id}/offer-mappings/archive")
        .body(&["offerIds"]);
pub const UNARCHIVE: Endpoint =
    Endpoint::post("offers.unarchive", "businesses/{business_id}/offer-mappings/unarchive")
        .body(&["offerIds"]);
pub const DELETE: Endpoint =
    Endpoint::post("offers.delete", "businesses/{business_id}/offer-mappings/delete")
        .body(&["offerIds"]);
pub const UPDATE_MAPPINGS: Endpoint =
    Endpoint::post("offers.update_mappings", "businesses/{business_id}/offer-mappings/update")
        .body(&["offerMappings", "onlyPartnerMediaContent"]);
pub const SUGGESTIONS: Endpoint = Endpoint::post(
    "offers.suggestions",
    "businesses/{business_id}/offer-mappings/suggestions",
)
.body(&["offers"]);
pub const CARDS: Endpoint =
    Endpoint::post("offers.cards", "businesses/{business_id}/offer-cards").any_body();
pub const UPDATE_CARDS: Endpoint =
    Endpoint::post("offers.update_cards", "businesses/{business_id}/offer-cards/update")
        .body(&["offersContent"]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[
    MAPPINGS,
    ARCHIVE,
    UNARCHIVE,
    DELETE,
    UPDATE_MAPPINGS,
    SUGGESTIONS,
    CARDS,
    UPDATE_CARDS,
];

/// Catalog operations of one business.
#[derive(Debug, Clone, Copy)]
pub struct Offers<'a> {
    client: &'a MarketClient,
}

impl<'a> Offers<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    pub fn mappings(&self, business_id: u64, body: Option<Value>) -> Option<Value> {
        self.client
            .call(&MAPPINGS, Args::new().path("business_id", business_id).body(body))
    }

    pub fn archive(&self, business_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.by_ids(&ARCHIVE, business_id, offer_ids)
    }

    pub fn unarchive(&self, business_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.by_ids(&UNARCHIVE, business_id, offer_ids)
    }

    /// Remove offers from the catalog for good.
    pub fn delete(&self, business_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.by_ids(&DELETE, business_id, offer_ids)
    }

    /// Add or edit catalog offers. With `only_partner_media_content` the
    /// vendor keeps only the pictures sent here.
    pub fn update_mappings(
        &self,
        business_id: u64,
        offer_mappings: &[Value],
        only_partner_media_content: bool,
    ) -> Option<Value> {
        self.client.call_checked(&UPDATE_MAPPINGS, || {
            validate::non_empty("offer_mappings", offer_mappings)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("offerMappings", offer_mappings)
                .field("onlyPartnerMediaContent", only_partner_media_content))
        })
    }

    /// Market cards that match the described offers.
    pub fn suggestions(&self, business_id: u64, offers: &[Value]) -> Option<Value> {
        self.client.call_checked(&SUGGESTIONS, || {
            validate::non_empty("offers", offers)?;
            Ok(Args::new().path("business_id", business_id).field("offers", offers))
        })
    }

    /// Content status of offer cards.
    pub fn cards(&self, business_id: u64, body: Option<Value>) -> Option<Value> {
        self.client
            .call(&CARDS, Args::new().path("business_id", business_id).body(body))
    }

    pub fn update_cards(&self, business_id: u64, offers_content: &[Value]) -> Option<Value> {
        self.client.call_checked(&UPDATE_CARDS, || {
            validate::non_empty("offers_content", offers_content)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("offersContent", offers_content))
        })
    }

    fn by_ids(&self, endpoint: &Endpoint, business_id: u64, offer_ids: &[String]) -> Option<Value> {
        self.client.call_checked(endpoint, || {
            validate::non_empty("offer_ids", offer_ids)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("offerIds", offer_ids))
        })
    }
}
