use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct TokensStaked {
    pub staker: Pubkey,
    pub amount: u64,
    /// Cumulative staked amount after this deposit.
    pub total_staked: u64,
}
