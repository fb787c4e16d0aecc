//! Request payloads for operations with many optional fields.
//!
//! # Design
//! Field names follow the vendor's camelCase keys through serde. Absent
//! options and empty lists are skipped when serializing, so a payload never
//! carries a null key. Everything the vendor returns stays a
//! `serde_json::Value`; nothing here describes a response.

use serde::{Deserialize, Serialize};

/// Output format of a generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportFormat {
    #[default]
    File,
    Csv,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::File => "FILE",
            ReportFormat::Csv => "CSV",
        }
    }
}

/// Price ordering for model offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filter for `campaigns/{id}/stats/orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersStatsQuery {
    pub date_from: String,
    pub date_to: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_cis: Option<bool>,
}

/// Filter for `businesses/{id}/offers/recommendations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecommendationsFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offer_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cofinance_price_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_cofinance_price_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitiveness_filter: Option<String>,
}

/// Placement parameters for tariff calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<u64>,
    /// `FBY`, `FBS`, `DBS`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_program: Option<String>,
    /// `DAILY`, `WEEKLY`, `MONTHLY`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// "Sales analytics". Exactly one of `business_id` and `campaign_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowsSalesReport {
    pub date_from: String,
    pub date_to: String,
    /// `CATEGORIES` or `OFFERS`.
    pub grouping: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostConsolidatedReport {
    pub business_id: u64,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsMovementReport {
    pub campaign_id: u64,
    pub date_from: String,
    pub date_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_sku: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitedOrdersReport {
    pub business_id: u64,
    pub date_from: String,
    pub date_to: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub campaign_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorsPositionReport {
    pub business_id: u64,
    pub category_id: u64,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsTurnoverReport {
    pub campaign_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StocksOnWarehousesReport {
    pub campaign_id: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warehouse_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_stocks: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitedNettingReport {
    pub business_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_order_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub campaign_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placement_programs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfStatisticsReport {
    pub business_id: u64,
    pub date_from: String,
    pub date_to: String,
    /// `CLICKS` or `SHOWS`.
    pub attribution_type: String,
}

impl ShelfStatisticsReport {
    /// Report attributed by clicks, the vendor default.
    pub fn by_clicks(business_id: u64, date_from: &str, date_to: &str) -> Self {
        Self {
            business_id,
            date_from: date_from.to_string(),
            date_to: date_to.to_string(),
            attribution_type: "CLICKS".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsRealizationReport {
    pub campaign_id: u64,
    pub year: u16,
    pub month: u8,
}

/// Either `date_from`/`date_to` or `year`/`month` must be complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitedMarketplaceServicesReport {
    pub business_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub campaign_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inns: Vec<String>,
}

/// At least one of `business_id` and `campaign_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date_to: Option<String>,
}
