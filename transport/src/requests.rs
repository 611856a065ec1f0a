use chrono::{DateTime, Utc};

/// Cursor-paginated history query. `after` is the opaque cursor returned by
/// the previous page; omitted on page 1.
#[derive(Debug, Clone, Default)]
pub struct GetOrdersRequest {
    pub account_id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct GetBillsRequest {
    pub account_id: String,
    pub bill_type: Option<String>,
    pub inst_id: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct GetPositionHistoryRequest {
    pub account_id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct GetEquityCurveRequest {
    pub account_id: String,
    pub days: Option<u32>,
    pub interval: Option<String>,
}
