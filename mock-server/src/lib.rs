//! In-memory stand-in for the partner API, used by the client's integration
//! tests and for local experiments.
//!
//! Routes live under `/v2` like the real service and require the `Api-Key`
//! header. Failures answer with the vendor's error envelope
//! `{"status":"ERROR","errors":[{"code":..,"message":..}]}`.

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, warn};
use uuid::Uuid;

/// Key accepted when none is configured.
pub const DEFAULT_API_KEY: &str = "mock-api-key";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: u64,
    pub domain: String,
    pub business_id: u64,
    pub placement_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

#[derive(Clone, Debug)]
struct Report {
    kind: String,
    format: String,
}

#[derive(Debug, Default)]
pub struct Store {
    campaigns: Vec<Campaign>,
    regions: Vec<Region>,
    hidden: HashMap<u64, BTreeSet<String>>,
    archived: HashMap<u64, BTreeSet<String>>,
    reports: HashMap<Uuid, Report>,
}

impl Store {
    /// Two campaigns of one business and a small region tree.
    pub fn seeded() -> Self {
        let campaign = |id, domain: &str, placement: &str| Campaign {
            id,
            domain: domain.to_string(),
            business_id: 1001,
            placement_type: placement.to_string(),
        };
        let region = |id, name: &str, kind: &str, parent_id| Region {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            parent_id,
        };
        Self {
            campaigns: vec![
                campaign(21000001, "shop.example", "FBS"),
                campaign(21000002, "express.shop.example", "EXPRESS"),
            ],
            regions: vec![
                region(225, "Россия", "COUNTRY", None),
                region(213, "Москва", "CITY", Some(225)),
                region(2, "Санкт-Петербург", "CITY", Some(225)),
            ],
            ..Self::default()
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    db: Db,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HiddenOffer {
    offer_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HiddenOffersBody {
    hidden_offers: Vec<HiddenOffer>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OfferIdsBody {
    offer_ids: Vec<String>,
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        db: Arc::new(RwLock::new(Store::seeded())),
    };
    let api = Router::new()
        .route("/campaigns", get(list_campaigns))
        .route("/campaigns/{campaign_id}", get(get_campaign))
        .route(
            "/campaigns/{campaign_id}/hidden-offers",
            get(list_hidden_offers).post(hide_offers),
        )
        .route(
            "/campaigns/{campaign_id}/hidden-offers/delete",
            post(unhide_offers),
        )
        .route(
            "/businesses/{business_id}/offer-mappings/archive",
            post(archive_offers),
        )
        .route(
            "/businesses/{business_id}/offer-mappings/unarchive",
            post(unarchive_offers),
        )
        .route("/regions", get(search_regions))
        .route("/regions/{region_id}", get(get_region))
        .route("/regions/{region_id}/children", get(region_children))
        .route("/reports/{kind}/generate", post(generate_report))
        .route("/reports/info/{report_id}", get(report_info))
        .route("/warehouses", get(warehouses))
        .route("/models/{model_id}", get(get_model))
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state);
    Router::new().nest("/v2", api)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    let body = json!({
        "status": "ERROR",
        "errors": [{ "code": code, "message": message.into() }],
    });
    (status, Json(body)).into_response()
}

fn ok(result: Value) -> Json<Value> {
    Json(json!({ "status": "OK", "result": result }))
}

async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get("Api-Key")
        .and_then(|value| value.to_str().ok());
    if presented != Some(state.api_key.as_ref()) {
        warn!(uri = %request.uri(), "rejected request with a missing or wrong API key");
        return api_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "API key is missing or invalid");
    }
    next.run(request).await
}

async fn list_campaigns(State(state): State<AppState>) -> Json<Value> {
    let store = state.db.read().await;
    Json(json!({
        "campaigns": store.campaigns,
        "pager": { "total": store.campaigns.len(), "currentPage": 1 },
    }))
}

async fn get_campaign(State(state): State<AppState>, Path(campaign_id): Path<u64>) -> Response {
    let store = state.db.read().await;
    match store.campaigns.iter().find(|c| c.id == campaign_id) {
        Some(campaign) => Json(json!({ "campaign": campaign })).into_response(),
        None => campaign_not_found(campaign_id),
    }
}

fn campaign_not_found(campaign_id: u64) -> Response {
    api_error(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("campaign {campaign_id} not found"),
    )
}

async fn list_hidden_offers(
    State(state): State<AppState>,
    Path(campaign_id): Path<u64>,
) -> Response {
    let store = state.db.read().await;
    if !store.campaigns.iter().any(|c| c.id == campaign_id) {
        return campaign_not_found(campaign_id);
    }
    let offers: Vec<Value> = store
        .hidden
        .get(&campaign_id)
        .into_iter()
        .flatten()
        .map(|offer_id| json!({ "offerId": offer_id }))
        .collect();
    ok(json!({ "hiddenOffers": offers })).into_response()
}

async fn hide_offers(
    State(state): State<AppState>,
    Path(campaign_id): Path<u64>,
    Json(input): Json<HiddenOffersBody>,
) -> Response {
    let mut store = state.db.write().await;
    if !store.campaigns.iter().any(|c| c.id == campaign_id) {
        return campaign_not_found(campaign_id);
    }
    let hidden = store.hidden.entry(campaign_id).or_default();
    hidden.extend(input.hidden_offers.into_iter().map(|o| o.offer_id));
    debug!(campaign_id, total = hidden.len(), "offers hidden");
    Json(json!({ "status": "OK" })).into_response()
}

async fn unhide_offers(
    State(state): State<AppState>,
    Path(campaign_id): Path<u64>,
    Json(input): Json<HiddenOffersBody>,
) -> Response {
    let mut store = state.db.write().await;
    if !store.campaigns.iter().any(|c| c.id == campaign_id) {
        return campaign_not_found(campaign_id);
    }
    if let Some(hidden) = store.hidden.get_mut(&campaign_id) {
        for offer in input.hidden_offers {
            hidden.remove(&offer.offer_id);
        }
    }
    Json(json!({ "status": "OK" })).into_response()
}

async fn archive_offers(
    State(state): State<AppState>,
    Path(business_id): Path<u64>,
    Json(input): Json<OfferIdsBody>,
) -> Json<Value> {
    let mut store = state.db.write().await;
    store
        .archived
        .entry(business_id)
        .or_default()
        .extend(input.offer_ids);
    ok(json!({ "notArchivedOffers": [] }))
}

async fn unarchive_offers(
    State(state): State<AppState>,
    Path(business_id): Path<u64>,
    Json(input): Json<OfferIdsBody>,
) -> Json<Value> {
    let mut store = state.db.write().await;
    let archived = store.archived.entry(business_id).or_default();
    let not_unarchived: Vec<Value> = input
        .offer_ids
        .into_iter()
        .filter(|offer_id| !archived.remove(offer_id))
        .map(|offer_id| json!({ "offerId": offer_id }))
        .collect();
    ok(json!({ "notUnarchivedOffers": not_unarchived }))
}

async fn search_regions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let store = state.db.read().await;
    let name = params.get("name").map(|n| n.to_lowercase()).unwrap_or_default();
    let regions: Vec<&Region> = store
        .regions
        .iter()
        .filter(|r| {
            if name.is_empty() {
                r.parent_id.is_none()
            } else {
                r.name.to_lowercase().contains(&name)
            }
        })
        .collect();
    Json(json!({ "regions": regions }))
}

async fn get_region(State(state): State<AppState>, Path(region_id): Path<u64>) -> Response {
    let store = state.db.read().await;
    match store.regions.iter().find(|r| r.id == region_id) {
        Some(region) => Json(json!({ "regions": [region] })).into_response(),
        None => region_not_found(region_id),
    }
}

async fn region_children(State(state): State<AppState>, Path(region_id): Path<u64>) -> Response {
    let store = state.db.read().await;
    let Some(region) = store.regions.iter().find(|r| r.id == region_id) else {
        return region_not_found(region_id);
    };
    let children: Vec<&Region> = store
        .regions
        .iter()
        .filter(|r| r.parent_id == Some(region_id))
        .collect();
    Json(json!({ "regions": { "id": region.id, "name": region.name, "children": children } }))
        .into_response()
}

fn region_not_found(region_id: u64) -> Response {
    api_error(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("region {region_id} not found"),
    )
}

async fn generate_report(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(_filter): Json<Value>,
) -> Response {
    let format = params.get("format").map(String::as_str).unwrap_or("FILE");
    if format != "FILE" && format != "CSV" {
        return api_error(
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            format!("unsupported report format {format}"),
        );
    }
    let report_id = Uuid::new_v4();
    let report = Report {
        kind,
        format: format.to_string(),
    };
    debug!(%report_id, kind = %report.kind, "report generation requested");
    state.db.write().await.reports.insert(report_id, report);
    ok(json!({ "reportId": report_id, "estimatedGenerationTime": 0 })).into_response()
}

async fn report_info(State(state): State<AppState>, Path(report_id): Path<String>) -> Response {
    let store = state.db.read().await;
    let report = Uuid::parse_str(&report_id)
        .ok()
        .and_then(|id| store.reports.get(&id));
    let Some(report) = report else {
        return api_error(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("report {report_id} not found"),
        );
    };
    let extension = if report.format == "CSV" { "zip" } else { "xlsx" };
    ok(json!({
        "status": "DONE",
        "subStatus": null,
        "file": format!("https://download.example/reports/{}/{report_id}.{extension}", report.kind),
    }))
    .into_response()
}

async fn warehouses() -> Json<Value> {
    ok(json!({
        "warehouses": [
            { "id": 147, "name": "Ростов-на-Дону", "address": { "city": "Ростов-на-Дону" } },
            { "id": 172, "name": "Софьино", "address": { "city": "Софьино" } },
        ]
    }))
}

/// Echoes the model id and query so callers can see what was sent.
async fn get_model(
    Path(model_id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    Json(json!({
        "models": [{ "id": model_id, "name": format!("Model {model_id}") }],
        "regionId": params.get("regionId"),
        "currency": params.get("currency"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_campaigns_and_regions() {
        let store = Store::seeded();
        assert_eq!(store.campaigns.len(), 2);
        assert!(store.regions.iter().any(|r| r.id == 213 && r.parent_id == Some(225)));
        assert!(store.hidden.is_empty());
    }

    #[test]
    fn campaign_serializes_with_vendor_keys() {
        let json = serde_json::to_value(&Store::seeded().campaigns[0]).unwrap();
        assert_eq!(json["businessId"], 1001);
        assert_eq!(json["placementType"], "FBS");
    }

    #[test]
    fn top_level_region_omits_parent() {
        let json = serde_json::to_value(&Store::seeded().regions[0]).unwrap();
        assert_eq!(json["type"], "COUNTRY");
        assert!(json.get("parentId").is_none());
    }

    #[test]
    fn hidden_offers_body_uses_camel_case() {
        let body: HiddenOffersBody =
            serde_json::from_str(r#"{"hiddenOffers":[{"offerId":"SKU-1"}]}"#).unwrap();
        assert_eq!(body.hidden_offers[0].offer_id, "SKU-1");
    }
}
