//! Client for confidential polls whose votes are encrypted with FHE.
//!
//! The contract and the encryption scheme are external; this crate holds the wallet
//! session, a typed gateway over the contract ABI and the controllers behind the
//! create-poll, vote, close and feed views.

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod sample;
pub mod state;
pub mod wallet;

#[cfg(test)]
mod testing;

pub use config::AppConfig;
pub use error::{Action, ErrorCode};
pub use gateway::{voted_status, EthersPollGateway, GatewayResult, PollGateway};
pub use handlers::{ClosePoll, CreatePollForm, CreatePollRequest, Feed, VoteForm};
pub use state::{Notification, Poll, PollInfo, PollOption, Tab, TxOutcome};
pub use wallet::{WalletConfig, WalletSession};

pub use encrypted_input::{PlaceholderEncryptor, VoteEncryptor};
