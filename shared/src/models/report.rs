//! Report catalogue and filters (Excel downloads)

use serde::{Deserialize, Serialize};

/// Default `days` for the recent-orders report
pub const DEFAULT_REPORT_DAYS: u32 = 7;
/// Default `limit` for the top-N reports
pub const DEFAULT_REPORT_LIMIT: u32 = 10;

/// Extra query parameter a report accepts on top of the common filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportExtraParam {
    Days,
    Limit,
}

/// Excel reports exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Orders,
    DateRange,
    Customers,
    Manufacturers,
    Qualities,
    Users,
    GstSummary,
    RecentOrders,
    TopCustomers,
    TopManufacturers,
    Ledger,
}

impl ReportKind {
    pub const ALL: [ReportKind; 11] = [
        Self::Orders,
        Self::DateRange,
        Self::Customers,
        Self::Manufacturers,
        Self::Qualities,
        Self::Users,
        Self::GstSummary,
        Self::RecentOrders,
        Self::TopCustomers,
        Self::TopManufacturers,
        Self::Ledger,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::DateRange => "date-range",
            Self::Customers => "customers",
            Self::Manufacturers => "manufacturers",
            Self::Qualities => "qualities",
            Self::Users => "users",
            Self::GstSummary => "gst-summary",
            Self::RecentOrders => "recent-orders",
            Self::TopCustomers => "top-customers",
            Self::TopManufacturers => "top-manufacturers",
            Self::Ledger => "ledger",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Orders => "Orders Report",
            Self::DateRange => "Date Range Summary",
            Self::Customers => "Customer Summary",
            Self::Manufacturers => "Manufacturer Summary",
            Self::Qualities => "Quality Summary",
            Self::Users => "User Activity",
            Self::GstSummary => "GST Summary",
            Self::RecentOrders => "Recent Orders",
            Self::TopCustomers => "Top Customers",
            Self::TopManufacturers => "Top Manufacturers",
            Self::Ledger => "Ledger Report",
        }
    }

    /// Path segment under `/reports/`
    pub fn endpoint(&self) -> String {
        format!("{}.xlsx", self.key())
    }

    /// Suggested download file name
    pub const fn filename(&self) -> &'static str {
        match self {
            Self::Orders => "orders-report.xlsx",
            Self::DateRange => "date-range-summary.xlsx",
            Self::Customers => "customer-summary.xlsx",
            Self::Manufacturers => "manufacturer-summary.xlsx",
            Self::Qualities => "quality-summary.xlsx",
            Self::Users => "user-activity.xlsx",
            Self::GstSummary => "gst-summary.xlsx",
            Self::RecentOrders => "recent-orders.xlsx",
            Self::TopCustomers => "top-customers.xlsx",
            Self::TopManufacturers => "top-manufacturers.xlsx",
            Self::Ledger => "ledger-report.xlsx",
        }
    }

    pub const fn extra_param(&self) -> Option<ReportExtraParam> {
        match self {
            Self::RecentOrders => Some(ReportExtraParam::Days),
            Self::TopCustomers | Self::TopManufacturers => Some(ReportExtraParam::Limit),
            _ => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Filters shared by every report download
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    pub from: Option<String>,
    pub to: Option<String>,
    pub customer_id: Option<String>,
    pub manufacturer_id: Option<String>,
    pub quality_id: Option<String>,
    pub user_id: Option<String>,
    pub days: Option<u32>,
    pub limit: Option<u32>,
}

impl ReportFilters {
    /// Query string pairs for `kind`; blank filters are left out and the
    /// report-specific parameter falls back to its default.
    pub fn query_pairs(&self, kind: ReportKind) -> Vec<(&'static str, String)> {
        let common = [
            ("from", &self.from),
            ("to", &self.to),
            ("customerId", &self.customer_id),
            ("manufacturerId", &self.manufacturer_id),
            ("qualityId", &self.quality_id),
            ("userId", &self.user_id),
        ];
        let mut pairs: Vec<(&'static str, String)> = common
            .into_iter()
            .filter_map(|(key, value)| {
                let v = value.as_deref()?.trim();
                (!v.is_empty()).then(|| (key, v.to_string()))
            })
            .collect();

        match kind.extra_param() {
            Some(ReportExtraParam::Days) => pairs.push((
                "days",
                self.days.unwrap_or(DEFAULT_REPORT_DAYS).to_string(),
            )),
            Some(ReportExtraParam::Limit) => pairs.push((
                "limit",
                self.limit.unwrap_or(DEFAULT_REPORT_LIMIT).to_string(),
            )),
            None => {}
        }
        pairs
    }
}
