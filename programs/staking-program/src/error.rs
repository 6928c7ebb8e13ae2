//! Error definitions.
//!
//! Only the custom variants the handlers can actually raise live here.
//! Missing accounts, wrong PDA derivations and malformed mints are rejected
//! by Anchor's account validation before any handler runs.

use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Vault is already initialized")]
    AlreadyInitialized,
    #[msg("Stake amount must be greater than zero")]
    InvalidAmount,
    #[msg("Staker balance is less than the stake amount")]
    InsufficientBalance,
    #[msg("Stake record is owned by a different staker")]
    OwnershipMismatch,
    #[msg("Mint does not match the vault's bound mint")]
    MintMismatch,
    #[msg("Staked amount overflow")]
    Overflow,
}
