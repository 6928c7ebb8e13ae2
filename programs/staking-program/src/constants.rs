//! PDA seed namespaces.

/// Seed of the singleton vault token account holding all staked funds.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of the singleton config account binding the deployment to a mint.
pub const VAULT_CONFIG_SEED: &[u8] = b"vault_config";

/// Seed prefix of the per-staker stake record, discriminated by the
/// staker's pubkey.
pub const STAKE_INFO_SEED: &[u8] = b"stake_info";
