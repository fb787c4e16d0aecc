use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

const KEY: &str = "test-key";

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header("Api-Key", KEY)
        .body(String::new())
        .unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Api-Key", KEY)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_key_returns_401_envelope() {
    let resp = app(KEY)
        .oneshot(Request::builder().uri("/v2/campaigns").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "ERROR");
    assert_eq!(json["errors"][0]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn wrong_key_returns_401() {
    let resp = app(KEY)
        .oneshot(
            Request::builder()
                .uri("/v2/campaigns")
                .header("Api-Key", "other")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- campaigns ---

#[tokio::test]
async fn list_campaigns() {
    let resp = app(KEY).oneshot(get("/v2/campaigns")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["campaigns"].as_array().unwrap().len(), 2);
    assert_eq!(json["pager"]["total"], 2);
}

#[tokio::test]
async fn get_campaign_not_found() {
    let resp = app(KEY).oneshot(get("/v2/campaigns/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = body_json(resp).await;
    assert_eq!(json["errors"][0]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn get_campaign_bad_id_returns_400() {
    let resp = app(KEY).oneshot(get("/v2/campaigns/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- hidden offers ---

#[tokio::test]
async fn hide_then_list_hidden_offers() {
    let app = app(KEY);
    let resp = app
        .clone()
        .oneshot(json_request(
            "/v2/campaigns/21000001/hidden-offers",
            r#"{"hiddenOffers":[{"offerId":"SKU-1"},{"offerId":"SKU-2"}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get("/v2/campaigns/21000001/hidden-offers"))
        .await
        .unwrap();
    let json = body_json(resp).await;
    let ids: Vec<&str> = json["result"]["hiddenOffers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["offerId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["SKU-1", "SKU-2"]);
}

#[tokio::test]
async fn hide_offers_malformed_body_returns_422() {
    let resp = app(KEY)
        .oneshot(json_request(
            "/v2/campaigns/21000001/hidden-offers",
            r#"{"offerIds":["SKU-1"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn hidden_offers_unknown_campaign() {
    let resp = app(KEY)
        .oneshot(get("/v2/campaigns/5/hidden-offers"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- archive ---

#[tokio::test]
async fn unarchive_reports_offers_that_were_not_archived() {
    let app = app(KEY);
    app.clone()
        .oneshot(json_request(
            "/v2/businesses/1001/offer-mappings/archive",
            r#"{"offerIds":["A"]}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(json_request(
            "/v2/businesses/1001/offer-mappings/unarchive",
            r#"{"offerIds":["A","B"]}"#,
        ))
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["result"]["notUnarchivedOffers"][0]["offerId"], "B");
    assert_eq!(json["result"]["notUnarchivedOffers"].as_array().unwrap().len(), 1);
}

// --- regions ---

#[tokio::test]
async fn search_regions_by_name() {
    let resp = app(KEY)
        .oneshot(get("/v2/regions?name=%D0%BC%D0%BE%D1%81%D0%BA%D0%B2%D0%B0"))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["regions"][0]["id"], 213);
}

#[tokio::test]
async fn region_children() {
    let resp = app(KEY)
        .oneshot(get("/v2/regions/225/children"))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["regions"]["children"].as_array().unwrap().len(), 2);
}

// --- reports ---

#[tokio::test]
async fn generated_report_is_known_to_info() {
    let app = app(KEY);
    let resp = app
        .clone()
        .oneshot(json_request(
            "/v2/reports/united-orders/generate?format=CSV",
            r#"{"businessId":1001}"#,
        ))
        .await
        .unwrap();
    let json = body_json(resp).await;
    let report_id = json["result"]["reportId"].as_str().unwrap().to_string();

    let resp = app
        .oneshot(get(&format!("/v2/reports/info/{report_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["result"]["status"], "DONE");
    assert!(json["result"]["file"].as_str().unwrap().ends_with(".zip"));
}

#[tokio::test]
async fn unknown_report_format_returns_400() {
    let resp = app(KEY)
        .oneshot(json_request("/v2/reports/prices/generate?format=PDF", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_info_unknown_id() {
    let resp = app(KEY)
        .oneshot(get("/v2/reports/info/not-a-report"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = body_bytes(resp).await;
    assert!(!bytes.is_empty());
}

// --- models ---

#[tokio::test]
async fn model_echoes_query() {
    let resp = app(KEY)
        .oneshot(get("/v2/models/42?regionId=213&currency=RUR"))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["models"][0]["id"], 42);
    assert_eq!(json["regionId"], "213");
    assert_eq!(json["currency"], "RUR");
}

#[tokio::test]
async fn warehouses_are_listed() {
    let resp = app(KEY).oneshot(get("/v2/warehouses")).await.unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["result"]["warehouses"].as_array().unwrap().len(), 2);
}
