use log::{debug, info, warn};

use crate::error::ErrorCode;
use crate::gateway::PollGateway;
use crate::state::Notification;
use crate::wallet::WalletSession;

/// Close action for a poll the connected account created.
///
/// Whether the caller may close the poll is decided by the contract.
#[derive(Debug, Default, Clone)]
pub struct ClosePoll {
    submitting: bool,
}

impl ClosePoll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the close control is enabled.
    pub fn can_close(&self, session: &WalletSession) -> bool {
        session.is_connected() && !self.submitting
    }

    pub async fn close<G: PollGateway>(
        &mut self,
        poll_id: u64,
        session: &WalletSession,
        gateway: &G,
    ) -> Notification {
        if !session.is_connected() {
            debug!("close poll {poll_id} without a wallet");
            return ErrorCode::NotConnected.into();
        }
        if self.submitting {
            return ErrorCode::AlreadySubmitting.into();
        }

        info!("Closing poll {poll_id}");
        self.submitting = true;
        let result = gateway.close_poll(poll_id).await;
        self.submitting = false;

        match result {
            Ok(outcome) => {
                info!("Poll {poll_id} closed in {:?}", outcome.tx_hash);
                Notification::success("Poll closed successfully!")
            }
            Err(err) => {
                warn!("Error closing poll {poll_id}: {err:?}");
                err.into()
            }
        }
    }
}
