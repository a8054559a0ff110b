use std::collections::{HashMap, HashSet};

use encrypted_input::{EncryptionContext, VoteEncryptor};
use ethers::types::{Address, U256};
use log::{debug, info, warn};

use crate::display::{option_views, OptionView};
use crate::error::ErrorCode;
use crate::gateway::{voted_status, GatewayResult, PollGateway};
use crate::state::{Notification, Poll};
use crate::wallet::WalletSession;

/// Voting state of a single poll.
///
/// Tracks which accounts have voted in this session; once an account is marked it
/// stays marked.
#[derive(Debug, Clone)]
pub struct VoteForm {
    poll: Poll,
    selected_options: HashMap<Address, String>,
    voted_accounts: HashSet<Address>,
    submitting: bool,
}

impl VoteForm {
    pub fn new(poll: Poll) -> Self {
        Self {
            poll,
            selected_options: HashMap::new(),
            voted_accounts: HashSet::new(),
            submitting: false,
        }
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    /// Option the connected account voted for in this session.
    pub fn selected_option(&self, session: &WalletSession) -> Option<&str> {
        session
            .address()
            .and_then(|account| self.selected_options.get(&account))
            .map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn has_voted(&self, session: &WalletSession) -> bool {
        session
            .address()
            .is_some_and(|account| self.voted_accounts.contains(&account))
    }

    /// Syncs the voted flag of the connected account with the contract.
    ///
    /// Disconnected sessions are not queried. A `false` from the contract never clears
    /// a vote recorded in this session.
    pub async fn refresh_has_voted<G: PollGateway>(
        &mut self,
        session: &WalletSession,
        gateway: &G,
    ) -> GatewayResult<bool> {
        if let (Some(account), Some(true)) =
            (session.address(), voted_status(gateway, session, self.poll.id).await?)
        {
            self.voted_accounts.insert(account);
        }
        Ok(self.has_voted(session))
    }

    /// Option controls are disabled once the account has voted or while a vote is in
    /// flight; counts stay hidden while the poll is active.
    pub fn option_views(&self, session: &WalletSession) -> Vec<OptionView> {
        option_views(&self.poll, self.has_voted(session) || self.submitting)
    }

    /// Casts an encrypted vote for `option_id`.
    ///
    /// Returns `None` when the click is ignored: the account already voted or a vote is
    /// still in flight. Every other outcome produces a notification.
    pub async fn vote<G, E>(
        &mut self,
        option_id: &str,
        session: &WalletSession,
        gateway: &G,
        encryptor: &E,
    ) -> Option<Notification>
    where
        G: PollGateway,
        E: VoteEncryptor,
    {
        let Some(account) = session.address() else {
            debug!("vote on poll {} without a wallet", self.poll.id);
            return Some(ErrorCode::NotConnected.into());
        };
        if self.has_voted(session) || self.submitting {
            return None;
        }

        let Some(index) = self
            .poll
            .option_index(option_id)
            .and_then(|index| u8::try_from(index).ok())
        else {
            warn!("option {option_id} is not part of poll {}", self.poll.id);
            return Some(ErrorCode::InvalidOption(option_id.to_string()).into());
        };

        let ctx = EncryptionContext {
            contract: gateway.contract_address(),
            account,
            poll_id: U256::from(self.poll.id),
        };
        let choice = match encryptor.encrypt_choice(&ctx, index) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("Error encrypting vote: {e}");
                return Some(ErrorCode::Encryption(e.to_string()).into());
            }
        };

        info!("Casting encrypted vote on poll {}", self.poll.id);
        self.submitting = true;
        let result = gateway
            .cast_vote(self.poll.id, choice.ciphertext, choice.input_proof)
            .await;
        self.submitting = false;

        Some(match result {
            Ok(outcome) => {
                info!("Vote cast in {:?}", outcome.tx_hash);
                self.voted_accounts.insert(account);
                self.selected_options.insert(account, option_id.to_string());
                Notification::success("Vote cast successfully!")
            }
            Err(err) => {
                warn!("Error casting vote: {err:?}");
                err.into()
            }
        })
    }
}
