//! In-memory collaborators for controller tests.

use std::cell::{Cell, RefCell};

use encrypted_input::{EncryptedChoice, EncryptionContext, EncryptionError, VoteEncryptor};
use ethers::types::{Address, Bytes, H256, U64};

use crate::error::{Action, ErrorCode};
use crate::gateway::{GatewayResult, PollGateway};
use crate::state::{PollInfo, TxOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreatePoll {
        question: String,
        options: Vec<String>,
        duration_seconds: u64,
    },
    CastVote {
        poll_id: u64,
        ciphertext: Bytes,
        proof: Bytes,
    },
    ClosePoll(u64),
    GetPollInfo(u64),
    HasUserVoted(Address, u64),
}

/// Records every call; fails all of them while `failing` is set.
#[derive(Default)]
pub struct FakeGateway {
    pub calls: RefCell<Vec<Call>>,
    pub failing: Cell<bool>,
    pub polls: RefCell<Vec<(u64, PollInfo)>>,
    pub voted: RefCell<Vec<(Address, u64)>>,
}

impl FakeGateway {
    pub fn failing() -> Self {
        let gateway = Self::default();
        gateway.failing.set(true);
        gateway
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: Call, action: Action) -> GatewayResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.get() {
            Err(ErrorCode::remote(action, "user rejected the request"))
        } else {
            Ok(())
        }
    }

    fn outcome(&self) -> TxOutcome {
        TxOutcome {
            tx_hash: H256::from_low_u64_be(self.call_count() as u64),
            block_number: Some(U64::from(1)),
        }
    }
}

impl PollGateway for FakeGateway {
    fn contract_address(&self) -> Address {
        Address::repeat_byte(0xfe)
    }

    async fn create_poll(
        &self,
        question: String,
        options: Vec<String>,
        duration_seconds: u64,
    ) -> GatewayResult<TxOutcome> {
        self.record(
            Call::CreatePoll {
                question,
                options,
                duration_seconds,
            },
            Action::CreatePoll,
        )?;
        Ok(self.outcome())
    }

    async fn cast_vote(
        &self,
        poll_id: u64,
        encrypted_option_index: Bytes,
        input_proof: Bytes,
    ) -> GatewayResult<TxOutcome> {
        self.record(
            Call::CastVote {
                poll_id,
                ciphertext: encrypted_option_index,
                proof: input_proof,
            },
            Action::CastVote,
        )?;
        Ok(self.outcome())
    }

    async fn close_poll(&self, poll_id: u64) -> GatewayResult<TxOutcome> {
        self.record(Call::ClosePoll(poll_id), Action::ClosePoll)?;
        Ok(self.outcome())
    }

    async fn get_poll_info(&self, poll_id: u64) -> GatewayResult<PollInfo> {
        self.record(Call::GetPollInfo(poll_id), Action::ReadPoll)?;
        self.polls
            .borrow()
            .iter()
            .find(|(id, _)| *id == poll_id)
            .map(|(_, info)| info.clone())
            .ok_or_else(|| ErrorCode::remote(Action::ReadPoll, "execution reverted"))
    }

    async fn has_user_voted(&self, user: Address, poll_id: u64) -> GatewayResult<bool> {
        self.record(Call::HasUserVoted(user, poll_id), Action::ReadVoted)?;
        Ok(self.voted.borrow().contains(&(user, poll_id)))
    }
}

/// Encodes the option index into the first ciphertext byte so tests can see it.
#[derive(Default)]
pub struct FakeEncryptor {
    pub contexts: RefCell<Vec<EncryptionContext>>,
    pub broken: bool,
}

impl VoteEncryptor for FakeEncryptor {
    fn encrypt_choice(
        &self,
        ctx: &EncryptionContext,
        option_index: u8,
    ) -> Result<EncryptedChoice, EncryptionError> {
        if self.broken {
            return Err(EncryptionError::Backend("relayer unavailable".to_string()));
        }
        self.contexts.borrow_mut().push(*ctx);
        Ok(EncryptedChoice {
            ciphertext: Bytes::from(vec![option_index]),
            input_proof: Bytes::from(vec![0xaa]),
        })
    }
}
