use std::sync::Arc;

use ethers::abi::Detokenize;
use ethers::contract::{abigen, ContractCall};
use ethers::providers::Middleware;
use ethers::types::{Address, Bytes, U256, U64};
use log::{debug, info, warn};

use crate::error::{Action, ErrorCode};
use crate::state::{PollInfo, TxOutcome};
use crate::wallet::WalletSession;

abigen!(
    SecretPollContract,
    r#"[
        function createPoll(string _question, string[] _options, uint256 _duration) external returns (uint256)
        function castVote(uint256 _pollId, bytes _optionIndex, bytes _inputProof) external returns (uint256)
        function closePoll(uint256 _pollId) external
        function getPollInfo(uint256 _pollId) external view returns (string question, string[] options, uint8 totalVotes, bool isActive, bool isClosed, address creator, uint256 startTime, uint256 endTime)
        function hasUserVoted(address _user, uint256 _pollId) external view returns (bool)
    ]"#
);

pub type GatewayResult<T> = Result<T, ErrorCode>;

/// Typed façade over the poll contract.
///
/// Every failure (transport, revert, rejected signature) comes back as
/// `ErrorCode::RemoteCall`; implementations never swallow one.
#[allow(async_fn_in_trait)]
pub trait PollGateway {
    /// Address of the contract the gateway talks to.
    fn contract_address(&self) -> Address;

    async fn create_poll(
        &self,
        question: String,
        options: Vec<String>,
        duration_seconds: u64,
    ) -> GatewayResult<TxOutcome>;

    async fn cast_vote(
        &self,
        poll_id: u64,
        encrypted_option_index: Bytes,
        input_proof: Bytes,
    ) -> GatewayResult<TxOutcome>;

    async fn close_poll(&self, poll_id: u64) -> GatewayResult<TxOutcome>;

    async fn get_poll_info(&self, poll_id: u64) -> GatewayResult<PollInfo>;

    async fn has_user_voted(&self, user: Address, poll_id: u64) -> GatewayResult<bool>;
}

/// Reads `hasUserVoted` for the connected account.
///
/// Returns `Ok(None)` without touching the gateway when no wallet is connected.
pub async fn voted_status<G: PollGateway>(
    gateway: &G,
    session: &WalletSession,
    poll_id: u64,
) -> GatewayResult<Option<bool>> {
    match session.address() {
        Some(user) => gateway.has_user_voted(user, poll_id).await.map(Some),
        None => Ok(None),
    }
}

/// Gateway backed by an ethers middleware stack.
pub struct EthersPollGateway<M> {
    contract: SecretPollContract<M>,
}

impl<M: Middleware + 'static> EthersPollGateway<M> {
    pub fn new(address: Address, client: Arc<M>) -> Self {
        Self {
            contract: SecretPollContract::new(address, client),
        }
    }
}

/// Sends a write call and waits for its receipt.
async fn settle<M, D>(call: ContractCall<M, D>, action: Action) -> GatewayResult<TxOutcome>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    let pending = call.send().await.map_err(|e| {
        warn!("{action} was not submitted: {e}");
        ErrorCode::remote(action, e)
    })?;
    info!("{action} submitted as {:?}", pending.tx_hash());

    let receipt = pending
        .await
        .map_err(|e| ErrorCode::remote(action, e))?
        .ok_or_else(|| ErrorCode::remote(action, "transaction dropped from mempool"))?;

    if receipt.status == Some(U64::zero()) {
        warn!("{action} reverted in {:?}", receipt.transaction_hash);
        return Err(ErrorCode::remote(action, "transaction reverted"));
    }

    Ok(TxOutcome {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
    })
}

impl<M: Middleware + 'static> PollGateway for EthersPollGateway<M> {
    fn contract_address(&self) -> Address {
        self.contract.address()
    }

    async fn create_poll(
        &self,
        question: String,
        options: Vec<String>,
        duration_seconds: u64,
    ) -> GatewayResult<TxOutcome> {
        debug!("createPoll with {} options for {duration_seconds}s", options.len());
        let call = self
            .contract
            .create_poll(question, options, U256::from(duration_seconds));
        settle(call, Action::CreatePoll).await
    }

    async fn cast_vote(
        &self,
        poll_id: u64,
        encrypted_option_index: Bytes,
        input_proof: Bytes,
    ) -> GatewayResult<TxOutcome> {
        debug!("castVote on poll {poll_id}");
        let call = self
            .contract
            .cast_vote(U256::from(poll_id), encrypted_option_index, input_proof);
        settle(call, Action::CastVote).await
    }

    async fn close_poll(&self, poll_id: u64) -> GatewayResult<TxOutcome> {
        debug!("closePoll on poll {poll_id}");
        let call = self.contract.close_poll(U256::from(poll_id));
        settle(call, Action::ClosePoll).await
    }

    async fn get_poll_info(&self, poll_id: u64) -> GatewayResult<PollInfo> {
        self.contract
            .get_poll_info(U256::from(poll_id))
            .call()
            .await
            .map(PollInfo::from)
            .map_err(|e| {
                warn!("getPollInfo({poll_id}) failed: {e}");
                ErrorCode::remote(Action::ReadPoll, e)
            })
    }

    async fn has_user_voted(&self, user: Address, poll_id: u64) -> GatewayResult<bool> {
        self.contract
            .has_user_voted(user, U256::from(poll_id))
            .call()
            .await
            .map_err(|e| {
                warn!("hasUserVoted({user:?}, {poll_id}) failed: {e}");
                ErrorCode::remote(Action::ReadVoted, e)
            })
    }
}
