// Bounds of the create-poll draft
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 6;
pub const MIN_DURATION_HOURS: u64 = 1;
pub const MAX_DURATION_HOURS: u64 = 168;
pub const DEFAULT_DURATION_HOURS: u64 = 24;

pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_DAY: u64 = 86_400;

pub const APP_NAME: &str = "Secret Poll Verse";

// Fallbacks used when the environment leaves a setting unset
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
pub const DEFAULT_PROJECT_ID: &str = "your_wallet_connect_project_id_here";
pub const DEFAULT_RPC_URL: &str = "https://rpc.sepolia.org";

pub const CONTRACT_ADDRESS_VAR: &str = "POLL_CONTRACT_ADDRESS";
pub const PROJECT_ID_VAR: &str = "WALLET_CONNECT_PROJECT_ID";
pub const RPC_URL_VAR: &str = "RPC_URL";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
