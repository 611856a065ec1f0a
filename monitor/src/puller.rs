use log::debug;
use std::sync::Arc;
use sync::kind::DataKind;
use sync::store::KindData;
use sync::{FetchCommand, FetchOutcome, FetchPayload};
use tokio::sync::mpsc::UnboundedSender;
use transport::RestApi;
use transport::requests::{
    GetBillsRequest, GetEquityCurveRequest, GetOrdersRequest, GetPositionHistoryRequest,
};

/// Executes fetch commands against the pull channel. Each command runs in its
/// own task; outcomes flow back into the engine loop, which discards any that
/// a newer command superseded.
pub struct Puller {
    api: Arc<RestApi>,
    page_limit: u32,
    outcome_tx: UnboundedSender<FetchOutcome>,
}

impl Puller {
    pub fn new(api: Arc<RestApi>, page_limit: u32, outcome_tx: UnboundedSender<FetchOutcome>) -> Self {
        Puller {
            api,
            page_limit,
            outcome_tx,
        }
    }

    pub fn spawn(&self, command: FetchCommand) {
        let api = self.api.clone();
        let outcome_tx = self.outcome_tx.clone();
        let page_limit = self.page_limit;
        tokio::spawn(async move {
            let result = Self::execute(&api, &command, page_limit).await;
            if outcome_tx.send(FetchOutcome { command, result }).is_err() {
                debug!("engine loop gone, dropping pull result");
            }
        });
    }

    async fn execute(
        api: &RestApi,
        command: &FetchCommand,
        page_limit: u32,
    ) -> std::result::Result<FetchPayload, String> {
        let account_id = command.account_id.clone();
        match command.kind {
            DataKind::Balance => api
                .get_balance(&account_id)
                .await
                .map(|b| Self::unpaged(KindData::Balance(b)))
                .map_err(|e| e.to_string()),
            DataKind::Positions => api
                .get_positions(&account_id)
                .await
                .map(|p| Self::unpaged(KindData::Positions(p)))
                .map_err(|e| e.to_string()),
            DataKind::PendingOrders => api
                .get_pending_orders(&account_id)
                .await
                .map(|p| Self::unpaged(KindData::PendingOrders(p)))
                .map_err(|e| e.to_string()),
            DataKind::Orders => {
                let req = GetOrdersRequest {
                    account_id,
                    after: command.cursor.clone(),
                    limit: Some(page_limit),
                    ..Default::default()
                };
                api.get_orders(req)
                    .await
                    .map(|p| FetchPayload {
                        data: KindData::Orders(p.items),
                        has_more: p.has_more,
                        last_cursor: p.last_id,
                    })
                    .map_err(|e| e.to_string())
            }
            DataKind::Bills => {
                let req = GetBillsRequest {
                    account_id,
                    after: command.cursor.clone(),
                    limit: Some(page_limit),
                    ..Default::default()
                };
                api.get_bills(req)
                    .await
                    .map(|p| FetchPayload {
                        data: KindData::Bills(p.items),
                        has_more: p.has_more,
                        last_cursor: p.last_id,
                    })
                    .map_err(|e| e.to_string())
            }
            DataKind::PositionHistory => {
                let req = GetPositionHistoryRequest {
                    account_id,
                    after: command.cursor.clone(),
                    limit: Some(page_limit),
                    ..Default::default()
                };
                api.get_position_history(req)
                    .await
                    .map(|p| FetchPayload {
                        data: KindData::PositionHistory(p.items),
                        has_more: p.has_more,
                        last_cursor: p.last_id,
                    })
                    .map_err(|e| e.to_string())
            }
            DataKind::EquityCurve => {
                let req = GetEquityCurveRequest {
                    account_id,
                    ..Default::default()
                };
                api.get_equity_curve(req)
                    .await
                    .map(|c| Self::unpaged(KindData::EquityCurve(c)))
                    .map_err(|e| e.to_string())
            }
        }
    }

    fn unpaged(data: KindData) -> FetchPayload {
        FetchPayload {
            data,
            has_more: false,
            last_cursor: None,
        }
    }
}
