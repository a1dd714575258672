//! Dashboard endpoints. Metrics and reports are computed server-side; the
//! client only fetches and displays them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use facturo_core::ProductId;

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: u64,
    pub invoices: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Amounts in smallest currency unit.
    pub total_invoiced: u64,
    pub total_invoices: u64,
    pub average_invoice_value: u64,
    pub top_products: Vec<TopProduct>,
    pub trends: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    pub period: ReportPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub date: NaiveDate,
    pub invoices: u64,
    pub total: u64,
    pub products: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub period: ReportPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub data: Vec<ReportRow>,
}

impl ApiClient {
    /// `GET /dashboard/metrics`
    pub async fn metrics(&self, range: DateRange) -> Result<Metrics, ApiError> {
        self.get_with_query("/dashboard/metrics", &range).await
    }

    /// `GET /dashboard/reports`
    pub async fn reports(&self, filters: ReportFilters) -> Result<Report, ApiError> {
        self.get_with_query("/dashboard/reports", &filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_deserialize_from_backend_shape() {
        let body = serde_json::json!({
            "totalInvoiced": 125000,
            "totalInvoices": 42,
            "averageInvoiceValue": 2976,
            "topProducts": [
                {"id": 1, "name": "Widget", "quantity": 30, "total": 45000}
            ],
            "trends": [
                {"date": "2024-03-01", "value": 10000, "invoices": 4}
            ]
        });

        let metrics: Metrics = serde_json::from_value(body).unwrap();
        assert_eq!(metrics.total_invoices, 42);
        assert_eq!(metrics.top_products[0].id, ProductId::new(1));
        assert_eq!(
            metrics.trends[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn report_period_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ReportPeriod::Monthly).unwrap(),
            serde_json::json!("monthly")
        );
    }
}
