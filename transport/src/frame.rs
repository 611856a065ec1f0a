use crate::models::{Balance, PendingOrder, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One push-channel frame. `pending_orders` frames always carry the complete
/// current working-order list for the account, so applying one is a wholesale
/// replacement, never a delta merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushFrame {
    Balance {
        account_id: String,
        data: Balance,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
    Positions {
        account_id: String,
        data: Vec<Position>,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
    PendingOrders {
        account_id: String,
        data: Vec<PendingOrder>,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
    Error {
        account_id: String,
        message: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
}

impl PushFrame {
    pub fn account_id(&self) -> &str {
        match self {
            PushFrame::Balance { account_id, .. } => account_id,
            PushFrame::Positions { account_id, .. } => account_id,
            PushFrame::PendingOrders { account_id, .. } => account_id,
            PushFrame::Error { account_id, .. } => account_id,
        }
    }

    pub fn parse(text: &str) -> json::Result<Self> {
        json::loads(text)
    }
}
