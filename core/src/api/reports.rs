//! Asynchronous report generation and report status.
//!
//! Every `generate` endpoint answers with a report id; poll `info` until the
//! report is ready and carries a download link.

use serde::Serialize;
use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{
    BoostConsolidatedReport, CompetitorsPositionReport, GoodsMovementReport,
    GoodsRealizationReport, GoodsTurnoverReport, PricesReport, ReportFormat, ShelfStatisticsReport,
    ShowsSalesReport, StocksOnWarehousesReport, UnitedMarketplaceServicesReport,
    UnitedNettingReport, UnitedOrdersReport,
};
use crate::validate;

const FORMAT: &[&str] = &["format"];

pub const GOODS_FEEDBACK: Endpoint =
    Endpoint::post("reports.goods_feedback", "reports/goods-feedback/generate")
        .query(FORMAT)
        .body(&["businessId"]);
pub const SHOWS_SALES: Endpoint =
    Endpoint::post("reports.shows_sales", "reports/shows-sales/generate")
        .query(FORMAT)
        .body(&["dateFrom", "dateTo", "grouping", "businessId", "campaignId"]);
pub const BOOST_CONSOLIDATED: Endpoint =
    Endpoint::post("reports.boost_consolidated", "reports/boost-consolidated/generate")
        .query(FORMAT)
        .body(&["businessId", "dateFrom", "dateTo"]);
pub const GOODS_MOVEMENT: Endpoint =
    Endpoint::post("reports.goods_movement", "reports/goods-movement/generate")
        .query(FORMAT)
        .body(&["campaignId", "dateFrom", "dateTo", "shopSku"]);
pub const UNITED_ORDERS: Endpoint =
    Endpoint::post("reports.united_orders", "reports/united-orders/generate")
        .query(FORMAT)
        .body(&["businessId", "dateFrom", "dateTo", "campaignIds", "promoId"]);
pub const COMPETITORS_POSITION: Endpoint =
    Endpoint::post("reports.competitors_position", "reports/competitors-position/generate")
        .query(FORMAT)
        .body(&["businessId", "categoryId", "dateFrom", "dateTo"]);
pub const GOODS_TURNOVER: Endpoint =
    Endpoint::post("reports.goods_turnover", "reports/goods-turnover/generate")
        .query(FORMAT)
        .body(&["campaignId", "date"]);
pub const STOCKS_ON_WAREHOUSES: Endpoint =
    Endpoint::post("reports.stocks_on_warehouses", "reports/stocks-on-warehouses/generate")
        .query(FORMAT)
        .body(&["campaignId", "warehouseIds", "reportDate", "categoryIds", "hasStocks"]);
pub const UNITED_NETTING: Endpoint =
    Endpoint::post("reports.united_netting", "reports/united-netting/generate")
        .query(FORMAT)
        .body(&[
            "businessId",
            "dateFrom",
            "dateTo",
            "bankOrderId",
            "bankOrderDateTime",
            "campaignIds",
            "inns",
            "placementPrograms",
        ]);
pub const SHELF_STATISTICS: Endpoint =
    Endpoint::post("reports.shelf_statistics", "reports/shelf-statistics/generate")
        .query(FORMAT)
        .body(&["businessId", "dateFrom", "dateTo", "attributionType"]);
pub const GOODS_REALIZATION: Endpoint =
    Endpoint::post("reports.goods_realization", "reports/goods-realization/generate")
        .query(FORMAT)
        .body(&["campaignId", "year", "month"]);
pub const UNITED_MARKETPLACE_SERVICES: Endpoint = Endpoint::post(
    "reports.united_marketplace_services",
    "reports/united-marketplace-services/generate",
)
.query(FORMAT)
.body(&[
    "businessId",
    "dateFrom",
    "dateTo",
    "year",
    "month",
    "campaignIds",
    "inns",
]);
pub const PRICES: Endpoint = Endpoint::post("reports.prices", "reports/prices/generate")
    .query(FORMAT)
    .body(&[
        "businessId",
        "campaignId",
        "categoryIds",
        "creationDateFrom",
        "creationDateTo",
    ]);
pub const INFO: Endpoint = Endpoint::get("reports.info", "reports/info/{report_id}");

pub(crate) const ENDPOINTS: &[Endpoint] = &[
    GOODS_FEEDBACK,
    SHOWS_SALES,
    BOOST_CONSOLIDATED,
    GOODS_MOVEMENT,
    UNITED_ORDERS,
    COMPETITORS_POSITION,
    GOODS_TURNOVER,
    STOCKS_ON_WAREHOUSES,
    UNITED_NETTING,
    SHELF_STATISTICS,
    GOODS_REALIZATION,
    UNITED_MARKETPLACE_SERVICES,
    PRICES,
    INFO,
];

#[derive(Debug, Clone, Copy)]
pub struct Reports<'a> {
    client: &'a MarketClient,
}

impl<'a> Reports<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    pub fn goods_feedback(&self, business_id: u64, format: ReportFormat) -> Option<Value> {
        self.client.call(
            &GOODS_FEEDBACK,
            Args::new()
                .query("format", format.as_str())
                .field("businessId", business_id),
        )
    }

    /// "Sales analytics"; exactly one of business and campaign id.
    pub fn shows_sales(&self, report: &ShowsSalesReport, format: ReportFormat) -> Option<Value> {
        self.generate(&SHOWS_SALES, format, report, || {
            validate::exactly_one(
                "business_id|campaign_id",
                report.business_id.is_some(),
                report.campaign_id.is_some(),
            )
        })
    }

    pub fn boost_consolidated(
        &self,
        report: &BoostConsolidatedReport,
        format: ReportFormat,
    ) -> Option<Value> {
        self.generate(&BOOST_CONSOLIDATED, format, report, || Ok(()))
    }

    pub fn goods_movement(&self, report: &GoodsMovementReport, format: ReportFormat) -> Option<Value> {
        self.generate(&GOODS_MOVEMENT, format, report, || Ok(()))
    }

    pub fn united_orders(&self, report: &UnitedOrdersReport, format: ReportFormat) -> Option<Value> {
        self.generate(&UNITED_ORDERS, format, report, || Ok(()))
    }

    pub fn competitors_position(
        &self,
        report: &CompetitorsPositionReport,
        format: ReportFormat,
    ) -> Option<Value> {
        self.generate(&COMPETITORS_POSITION, format, report, || Ok(()))
    }

    pub fn goods_turnover(&self, report: &GoodsTurnoverReport, format: ReportFormat) -> Option<Value> {
        self.generate(&GOODS_TURNOVER, format, report, || Ok(()))
    }

    pub fn stocks_on_warehouses(
        &self,
        report: &StocksOnWarehousesReport,
        format: ReportFormat,
    ) -> Option<Value> {
        self.generate(&STOCKS_ON_WAREHOUSES, format, report, || Ok(()))
    }

    pub fn united_netting(&self, report: &UnitedNettingReport, format: ReportFormat) -> Option<Value> {
        self.generate(&UNITED_NETTING, format, report, || Ok(()))
    }

    pub fn shelf_statistics(
        &self,
        report: &ShelfStatisticsReport,
        format: ReportFormat,
    ) -> Option<Value> {
        self.generate(&SHELF_STATISTICS, format, report, || Ok(()))
    }

    pub fn goods_realization(
        &self,
        report: &GoodsRealizationReport,
        format: ReportFormat,
    ) -> Option<Value> {
        self.generate(&GOODS_REALIZATION, format, report, || {
            validate::in_range("month", report.month, 1..=12)
        })
    }

    /// Either a complete date range or a complete year and month.
    pub fn united_marketplace_services(
        &self,
        report: &UnitedMarketplaceServicesReport,
        format: ReportFormat,
    ) -> Option<Value> {
        self.generate(&UNITED_MARKETPLACE_SERVICES, format, report, || {
            let by_dates = report.date_from.is_some() && report.date_to.is_some();
            let by_month = report.year.is_some() && report.month.is_some();
            if !by_dates && !by_month {
                return Err(ApiError::invalid(
                    "date_from|date_to|year|month",
                    "give either date_from and date_to, or year and month",
                ));
            }
            match report.month {
                Some(month) => validate::in_range("month", month, 1..=12),
                None => Ok(()),
            }
        })
    }

    pub fn prices(&self, report: &PricesReport, format: ReportFormat) -> Option<Value> {
        self.generate(&PRICES, format, report, || {
            validate::at_least_one(
                "business_id|campaign_id",
                report.business_id.is_some(),
                report.campaign_id.is_some(),
            )
        })
    }

    /// Generation status and, once ready, the file link.
    pub fn info(&self, report_id: &str) -> Option<Value> {
        self.client.call_checked(&INFO, || {
            validate::not_blank("report_id", report_id)?;
            Ok(Args::new().path("report_id", report_id))
        })
    }

    fn generate(
        &self,
        endpoint: &Endpoint,
        format: ReportFormat,
        report: &impl Serialize,
        check: impl FnOnce() -> Result<(), ApiError>,
    ) -> Option<Value> {
        self.client.call_checked(endpoint, || {
            check()?;
            Ok(Args::new().query("format", format.as_str()).fields(report))
        })
    }
}
