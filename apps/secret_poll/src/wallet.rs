use ethers::signers::Signer;
use ethers::types::{Address, Chain};

use crate::config::AppConfig;
use crate::constants::APP_NAME;
use crate::error::ErrorCode;

/// The only chain the client talks to.
pub const SUPPORTED_CHAIN: Chain = Chain::Sepolia;

/// Connected account as seen by the controllers.
///
/// The session is owned by whatever manages the wallet connection and is only ever
/// borrowed by controllers. A missing address means no wallet is connected, which
/// blocks every write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletSession {
    address: Option<Address>,
}

impl WalletSession {
    pub fn connected(address: Address) -> Self {
        Self {
            address: Some(address),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn from_signer<S: Signer>(signer: &S) -> Self {
        Self::connected(signer.address())
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

/// Wallet-connector settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    pub app_name: &'static str,
    pub project_id: String,
    pub chain: Chain,
}

impl WalletConfig {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            app_name: APP_NAME,
            project_id: config.project_id.clone(),
            chain: SUPPORTED_CHAIN,
        }
    }

    pub fn ensure_supported_chain(&self, chain_id: u64) -> Result<(), ErrorCode> {
        if chain_id == self.chain as u64 {
            Ok(())
        } else {
            Err(ErrorCode::UnsupportedChain(chain_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use ethers::signers::LocalWallet;

    use super::*;

    #[test]
    fn session_reports_connection() {
        let account = Address::repeat_byte(0x42);

        assert!(!WalletSession::disconnected().is_connected());
        assert_eq!(WalletSession::disconnected().address(), None);
        assert!(WalletSession::connected(account).is_connected());
        assert_eq!(WalletSession::connected(account).address(), Some(account));
    }

    #[test]
    fn session_from_signer_uses_signer_address() {
        // Anvil's first development key
        let wallet: LocalWallet = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            .parse()
            .unwrap();
        let session = WalletSession::from_signer(&wallet);
        assert_eq!(session.address(), Some(wallet.address()));
    }

    #[test]
    fn only_sepolia_is_supported() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        let wallet = WalletConfig::new(&config);

        assert_eq!(wallet.app_name, "Secret Poll Verse");
        assert!(wallet.ensure_supported_chain(11_155_111).is_ok());
        assert_eq!(
            wallet.ensure_supported_chain(1),
            Err(ErrorCode::UnsupportedChain(1))
        );
    }
}
