use ethers::types::{Address, Bytes, U256};
use thiserror::Error;

/// Polls never carry more than six options, so a valid choice fits in `0..6`.
pub const MAX_OPTION_INDEX: u8 = 6;

/// Byte length of the placeholder ciphertext and proof buffers.
pub const PLACEHOLDER_LEN: usize = 32;

/// Binds an encrypted vote to the contract, the voting account and the poll.
///
/// A real FHE client derives its ciphertext and input proof from these values so
/// that a vote cannot be replayed against another poll or by another account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptionContext {
    pub contract: Address,
    pub account: Address,
    pub poll_id: U256,
}

/// An encrypted option index together with its correctness proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedChoice {
    pub ciphertext: Bytes,
    pub input_proof: Bytes,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncryptionError {
    #[error("option index {0} is out of range")]
    IndexOutOfRange(u8),
    #[error("encryption backend failed: {0}")]
    Backend(String),
}

/// Produces the encrypted payload sent with `castVote`.
pub trait VoteEncryptor {
    /// Encrypts the position of the chosen option.
    ///
    /// # Arguments
    /// * `ctx` - Contract, account and poll the vote is bound to
    /// * `option_index` - Position of the chosen option in the poll
    ///
    /// # Returns
    /// The ciphertext of the index and the proof that it encrypts a valid choice
    fn encrypt_choice(
        &self,
        ctx: &EncryptionContext,
        option_index: u8,
    ) -> Result<EncryptedChoice, EncryptionError>;
}

/// Stand-in for the FHE client: zero-filled ciphertext and proof.
///
/// The contract cannot decrypt these buffers, so this is only useful against test
/// deployments that accept any payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderEncryptor;

impl VoteEncryptor for PlaceholderEncryptor {
    fn encrypt_choice(
        &self,
        _ctx: &EncryptionContext,
        option_index: u8,
    ) -> Result<EncryptedChoice, EncryptionError> {
        if option_index >= MAX_OPTION_INDEX {
            return Err(EncryptionError::IndexOutOfRange(option_index));
        }

        Ok(EncryptedChoice {
            ciphertext: Bytes::from(vec![0u8; PLACEHOLDER_LEN]),
            input_proof: Bytes::from(vec![0u8; PLACEHOLDER_LEN]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EncryptionContext {
        EncryptionContext {
            contract: Address::zero(),
            account: Address::repeat_byte(0x11),
            poll_id: U256::from(7u64),
        }
    }

    #[test]
    fn placeholder_is_zero_filled() {
        let choice = PlaceholderEncryptor.encrypt_choice(&ctx(), 3).unwrap();

        assert_eq!(choice.ciphertext.len(), PLACEHOLDER_LEN);
        assert_eq!(choice.input_proof.len(), PLACEHOLDER_LEN);
        assert!(choice.ciphertext.iter().all(|b| *b == 0));
        assert!(choice.input_proof.iter().all(|b| *b == 0));
    }

    #[test]
    fn placeholder_rejects_out_of_range_index() {
        let err = PlaceholderEncryptor.encrypt_choice(&ctx(), 6).unwrap_err();
        assert_eq!(err, EncryptionError::IndexOutOfRange(6));
    }
}
