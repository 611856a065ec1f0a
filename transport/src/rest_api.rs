use crate::errors::*;
use crate::models::*;
use crate::requests::*;
use log::error;
use std::time::Duration;

/// Pull-channel client for the account aggregator service.
pub struct RestApi {
    client: Option<reqwest::Client>,
    base_url: String,
    timeout_milli_secs: u64,
}

impl RestApi {
    pub fn new(base_url: String, timeout_milli_secs: u64) -> Self {
        RestApi {
            client: None,
            base_url,
            timeout_milli_secs,
        }
    }

    pub fn init(&mut self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(TransportError::ParametersInvalid {
                message: "base_url is empty".to_string(),
            });
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(self.timeout_milli_secs))
            .build()
            .map_err(|e| TransportError::ParametersInvalid {
                message: format!("build client failed: {}", e),
            })?;
        self.client = Some(client);
        Ok(())
    }

    pub async fn get_accounts(&self) -> Result<Vec<Account>> {
        let text = self.send_request("/api/accounts", vec![]).await?;
        Self::parse(&text)
    }

    pub async fn get_summary(&self) -> Result<Vec<AccountSummary>> {
        let text = self.send_request("/api/summary", vec![]).await?;
        Self::parse(&text)
    }

    pub async fn get_balance(&self, account_id: &str) -> Result<Balance> {
        let path = format!("/api/accounts/{}/balance", account_id);
        let text = self.send_request(&path, vec![]).await?;
        Self::parse(&text)
    }

    pub async fn get_positions(&self, account_id: &str) -> Result<Vec<Position>> {
        let path = format!("/api/accounts/{}/positions", account_id);
        let text = self.send_request(&path, vec![]).await?;
        Self::parse(&text)
    }

    pub async fn get_pending_orders(&self, account_id: &str) -> Result<Vec<PendingOrder>> {
        let path = format!("/api/accounts/{}/pending-orders", account_id);
        let text = self.send_request(&path, vec![]).await?;
        Self::parse(&text)
    }

    pub async fn get_orders(&self, req: GetOrdersRequest) -> Result<Paginated<Order>> {
        let path = format!("/api/accounts/{}/orders", req.account_id);
        let mut params = vec![("limit", req.limit.unwrap_or(50).to_string())];
        if let Some(start) = req.start {
            params.push(("start", start.to_rfc3339()));
        }
        if let Some(end) = req.end {
            params.push(("end", end.to_rfc3339()));
        }
        if let Some(after) = req.after {
            params.push(("after", after));
        }
        let text = self.send_request(&path, params).await?;
        Self::parse(&text)
    }

    pub async fn get_bills(&self, req: GetBillsRequest) -> Result<Paginated<Bill>> {
        let path = format!("/api/accounts/{}/bills", req.account_id);
        let mut params = vec![("limit", req.limit.unwrap_or(50).to_string())];
        if let Some(bill_type) = req.bill_type {
            params.push(("bill_type", bill_type));
        }
        if let Some(inst_id) = req.inst_id {
            params.push(("inst_id", inst_id));
        }
        if let Some(start) = req.start {
            params.push(("start", start.to_rfc3339()));
        }
        if let Some(end) = req.end {
            params.push(("end", end.to_rfc3339()));
        }
        if let Some(after) = req.after {
            params.push(("after", after));
        }
        let text = self.send_request(&path, params).await?;
        Self::parse(&text)
    }

    pub async fn get_position_history(
        &self,
        req: GetPositionHistoryRequest,
    ) -> Result<Paginated<ClosedPosition>> {
        let path = format!("/api/accounts/{}/positions-history", req.account_id);
        let mut params = vec![("limit", req.limit.unwrap_or(50).to_string())];
        if let Some(start) = req.start {
            params.push(("start", start.to_rfc3339()));
        }
        if let Some(end) = req.end {
            params.push(("end", end.to_rfc3339()));
        }
        if let Some(after) = req.after {
            params.push(("after", after));
        }
        let text = self.send_request(&path, params).await?;
        Self::parse(&text)
    }

    pub async fn get_equity_curve(&self, req: GetEquityCurveRequest) -> Result<EquityCurve> {
        let path = format!("/api/accounts/{}/equity-curve", req.account_id);
        let mut params = vec![("days", req.days.unwrap_or(30).to_string())];
        if let Some(interval) = req.interval {
            params.push(("interval", interval));
        }
        let text = self.send_request(&path, params).await?;
        Self::parse(&text)
    }

    async fn send_request(&self, path: &str, params: Vec<(&str, String)>) -> Result<String> {
        let client = self.client.as_ref().ok_or(TransportError::ClientError {
            message: "RestApi not initialized".to_string(),
        })?;

        let resp = client
            .get(format!("{}{}", self.base_url, path))
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Network error on {}: {:?}", path, e);
                TransportError::NetworkError {
                    message: e.to_string(),
                }
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            error!("Network error reading body of {}: {:?}", path, e);
            TransportError::NetworkError {
                message: e.to_string(),
            }
        })?;

        if !status.is_success() {
            error!("Request {} failed with status {}: {}", path, status, text);
            return Err(TransportError::StatusError {
                code: status.as_u16(),
                message: text,
            });
        }

        Ok(text)
    }

    fn parse<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
        json::loads(text).map_err(|e| {
            error!("Parse result: {:?} error: {:?}", text, e);
            TransportError::ParseResultError {
                message: e.to_string(),
            }
        })
    }
}
