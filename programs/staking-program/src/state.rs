//! Persisted account state.
//!
//! The vault token account itself carries no program state beyond its SPL
//! balance, which is the authoritative custody amount. Everything the
//! program tracks lives in the two accounts below.

use anchor_lang::prelude::*;

/// Singleton configuration, created once by `initialize`.
///
/// `mint == Pubkey::default()` marks a config that has been allocated but
/// never initialized; `initialize` relies on this to reject a second call.
#[account]
#[derive(InitSpace)]
pub struct VaultConfig {
    /// The one mint this deployment stakes. All custody and stake records
    /// are denominated in it.
    pub mint: Pubkey,
    /// Canonical bump of the vault token account PDA.
    pub vault_bump: u8,
    /// Canonical bump of this config PDA.
    pub bump: u8,
}

/// Per-staker accounting record, created lazily on first stake.
#[account]
#[derive(InitSpace)]
pub struct StakeInfo {
    /// Set exactly once, on creation. Every later mutation must be signed
    /// by this key.
    pub owner: Pubkey,
    /// Cumulative staked base units. Only grows in this program; unstaking
    /// belongs to a future extension.
    pub staked_amount: u64,
    /// Unix timestamp of the most recent stake, kept for future reward
    /// accrual.
    pub last_stake_ts: i64,
    /// Canonical bump of this record's PDA.
    pub bump: u8,
}
