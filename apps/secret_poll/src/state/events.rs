use ethers::types::{H256, U64};
use serde::Serialize;

use crate::error::ErrorCode;

/// Transient user-facing message produced by every create, vote and close outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(ErrorCode),
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification::Success(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }

    pub fn error(&self) -> Option<&ErrorCode> {
        match self {
            Notification::Error(err) => Some(err),
            Notification::Success(_) => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notification::Success(message) => message.clone(),
            Notification::Error(err) => err.to_string(),
        }
    }
}

impl From<ErrorCode> for Notification {
    fn from(err: ErrorCode) -> Self {
        Notification::Error(err)
    }
}

/// Settled write transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TxOutcome {
    pub tx_hash: H256,
    pub block_number: Option<U64>,
}
