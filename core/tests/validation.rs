//! Argument validation and request shape, observed through a recording
//! transport. Nothing here touches the network.

use std::sync::{Arc, Mutex};

use market_core::types::{PricesReport, ShowsSalesReport, TariffParameters};
use market_core::{
    ApiError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, MarketClient, Page,
    PromoRemoval, ReportFormat, Transport,
};
use serde_json::{json, Value};
use tracing_test::traced_test;

/// Records every request and answers with a fixed response.
#[derive(Clone)]
struct Recording {
    sent: Arc<Mutex<Vec<HttpRequest>>>,
    status: u16,
    body: &'static str,
}

impl Recording {
    fn ok() -> Self {
        Self::answering(200, r#"{"status":"OK"}"#)
    }

    fn answering(status: u16, body: &'static str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            status,
            body,
        }
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for Recording {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body: self.body.to_string(),
        })
    }
}

fn client(transport: &Recording) -> MarketClient {
    let config = ClientConfig::new("client-1", "secret").with_base_url("https://api.test/v2");
    MarketClient::with_transport(config, transport.clone())
}

fn body(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

#[test]
fn model_batch_is_capped_at_one_hundred() {
    let transport = Recording::ok();
    let client = client(&transport);

    let too_many: Vec<u64> = (1..=101).collect();
    assert!(client.models().batch(&too_many, 213, None).is_none());
    assert!(client.models().batch(&[], 213, None).is_none());
    assert!(transport.sent().is_empty());

    let enough: Vec<u64> = (1..=100).collect();
    assert!(client.models().batch(&enough, 213, None).is_some());
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(body(&sent[0])["models"].as_array().unwrap().len(), 100);
    assert_eq!(
        sent[0].query,
        [
            ("regionId".to_string(), "213".to_string()),
            ("currency".to_string(), "RUR".to_string()),
        ]
    );
}

#[test]
fn model_offer_page_size_is_bounded() {
    let transport = Recording::ok();
    let client = client(&transport);

    let page = Page { number: 1, size: 0 };
    assert!(client.models().offers(7, 213, page, None, None).is_none());
    let page = Page { number: 1, size: 101 };
    assert!(client.models().offers(7, 213, page, None, None).is_none());
    assert!(transport.sent().is_empty());

    assert!(client.models().offers(7, 213, Page::default(), None, None).is_some());
    let sent = transport.sent();
    assert_eq!(sent[0].url, "https://api.test/v2/models/7/offers");
    assert!(sent[0].query.iter().all(|(key, _)| key != "orderByPrice"));
}

#[test]
fn promo_removal_needs_exactly_one_selector() {
    let transport = Recording::ok();
    let client = client(&transport);
    let ids = ["SKU-1".to_string()];

    assert!(client.promos().delete_offers_raw(1001, "promo", &ids, true).is_none());
    assert!(client.promos().delete_offers_raw(1001, "promo", &[], false).is_none());
    assert!(transport.sent().is_empty());

    client.promos().delete_offers(1001, "promo", PromoRemoval::All).unwrap();
    client
        .promos()
        .delete_offers(1001, "promo", PromoRemoval::Offers(&ids))
        .unwrap();
    let sent = transport.sent();
    assert_eq!(body(&sent[0]), json!({"promoId": "promo", "deleteAllOffers": true}));
    assert_eq!(body(&sent[1]), json!({"promoId": "promo", "offerIds": ["SKU-1"]}));
}

#[test]
fn shows_sales_needs_business_or_campaign_but_not_both() {
    let transport = Recording::ok();
    let client = client(&transport);
    let base = ShowsSalesReport {
        date_from: "2024-01-01".to_string(),
        date_to: "2024-01-31".to_string(),
        grouping: "OFFERS".to_string(),
        ..Default::default()
    };

    assert!(client.reports().shows_sales(&base, ReportFormat::File).is_none());
    let both = ShowsSalesReport {
        business_id: Some(1),
        campaign_id: Some(2),
        ..base.clone()
    };
    assert!(client.reports().shows_sales(&both, ReportFormat::File).is_none());
    assert!(transport.sent().is_empty());

    let by_campaign = ShowsSalesReport {
        campaign_id: Some(2),
        ..base
    };
    client
        .reports()
        .shows_sales(&by_campaign, ReportFormat::Csv)
        .unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].query, [("format".to_string(), "CSV".to_string())]);
    assert_eq!(body(&sent[0])["campaignId"], 2);
    assert!(body(&sent[0]).get("businessId").is_none());
}

#[test]
fn prices_report_needs_an_owner() {
    let transport = Recording::ok();
    let client = client(&transport);

    assert!(client
        .reports()
        .prices(&PricesReport::default(), ReportFormat::File)
        .is_none());
    assert!(transport.sent().is_empty());
}

#[test]
fn report_id_cannot_escape_its_path_segment() {
    let transport = Recording::ok();
    let client = client(&transport);

    client.reports().info("abc/../../campaigns?x=1");
    assert!(client.reports().info("..").is_none());

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].url,
        "https://api.test/v2/reports/info/abc%2F..%2F..%2Fcampaigns%3Fx%3D1"
    );
    assert!(sent[0].query.is_empty());
}

#[test]
fn null_free_form_body_is_not_sent() {
    let transport = Recording::ok();
    let client = client(&transport);

    client.businesses().settings(1001, Some(Value::Null));

    let sent = transport.sent();
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert!(sent[0].body.is_none());
}

#[test]
fn every_request_carries_auth_and_content_type() {
    let transport = Recording::ok();
    let client = client(&transport);

    client.campaigns().list();
    client.regions().search("Москва");
    client.logistics().warehouses();
    client
        .tariffs()
        .calculate(&[json!({"categoryId": 1})], &TariffParameters::default());

    let sent = transport.sent();
    assert_eq!(sent.len(), 4);
    for request in &sent {
        assert_eq!(request.header("api-key"), Some("secret"));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }
    assert_eq!(body(&sent[3])["parameters"], json!({}));
}

#[test]
fn absent_optionals_are_not_sent() {
    let transport = Recording::ok();
    let client = client(&transport);

    client.campaigns().orders(21000001, None, None);
    client.campaigns().orders(21000001, Some(50), Some(""));
    client.campaigns().offers(21000001, None, None);
    client.campaigns().offers(21000001, None, Some(Value::Null));

    let sent = transport.sent();
    assert_eq!(sent[0].method, HttpMethod::Get);
    assert!(sent[0].query.is_empty());
    assert!(sent[0].body.is_none());
    assert_eq!(sent[1].query, [("limit".to_string(), "50".to_string())]);
    assert_eq!(sent[2].body.as_deref(), Some("{}"));
    assert_eq!(sent[3].body.as_deref(), Some("{}"));
}

#[traced_test]
#[test]
fn rejected_arguments_are_logged() {
    let transport = Recording::ok();
    let client = client(&transport);

    assert!(client.models().search("   ", 213, Page::default(), None).is_none());

    assert!(transport.sent().is_empty());
    assert!(logs_contain("request rejected before sending"));
    assert!(logs_contain("models.search"));
}

#[traced_test]
#[test]
fn error_status_is_logged_with_body() {
    let transport = Recording::answering(
        420,
        r#"{"status":"ERROR","errors":[{"code":"LIMIT_EXCEEDED","message":"slow down"}]}"#,
    );
    let client = client(&transport);

    assert!(client.campaigns().get(21000001).is_none());

    assert_eq!(transport.sent().len(), 1);
    assert!(logs_contain("HTTP error"));
    assert!(logs_contain("LIMIT_EXCEEDED"));
    assert!(logs_contain("https://api.test/v2/campaigns/21000001"));
}
