use std::fmt;

use thiserror::Error;

/// Remote action a gateway call was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreatePoll,
    CastVote,
    ClosePoll,
    ReadPoll,
    ReadVoted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::CreatePoll => "create poll",
            Action::CastVote => "cast vote",
            Action::ClosePoll => "close poll",
            Action::ReadPoll => "load poll",
            Action::ReadVoted => "check vote status",
        };
        f.write_str(label)
    }
}

/// Every failure a controller can surface. The display text is the user-facing
/// notification message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("Please fill in all fields")]
    Validation,
    #[error("Please connect your wallet first")]
    NotConnected,
    #[error("Invalid option")]
    InvalidOption(String),
    #[error("Failed to {action}")]
    RemoteCall { action: Action, reason: String },
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error("Failed to encrypt vote: {0}")]
    Encryption(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unsupported chain id {0}")]
    UnsupportedChain(u64),
}

impl ErrorCode {
    pub fn remote(action: Action, reason: impl ToString) -> Self {
        ErrorCode::RemoteCall {
            action,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_call_message_hides_reason() {
        let err = ErrorCode::remote(Action::CreatePoll, "execution reverted");
        assert_eq!(err.to_string(), "Failed to create poll");
    }
}
