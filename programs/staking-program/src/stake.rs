use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::{STAKE_INFO_SEED, VAULT_CONFIG_SEED, VAULT_SEED};
use crate::error::StakingError;
use crate::events::TokensStaked;
use crate::state::{StakeInfo, VaultConfig};

// ---------------------------------------------------------------------------
// Stake
// ---------------------------------------------------------------------------
// Moves `amount` base units from the staker's token account into the shared
// vault and credits the staker's stake record, creating the record on first
// use. Record update and transfer commit together or not at all; the
// runtime rolls back the whole transaction on any failure.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    /// Fails with AccountNotInitialized until `initialize` has run.
    #[account(
        seeds = [VAULT_CONFIG_SEED],
        bump = config.bump,
        constraint = config.mint == mint.key() @ StakingError::MintMismatch,
    )]
    pub config: Account<'info, VaultConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = config.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = staker,
        space = 8 + StakeInfo::INIT_SPACE,
        seeds = [STAKE_INFO_SEED, staker.key().as_ref()],
        bump
    )]
    pub stake_info: Account<'info, StakeInfo>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = staker,
    )]
    pub staker_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Stake<'info> {
    pub fn stake(&mut self, bumps: &StakeBumps, amount: u64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);
        require!(
            self.staker_token_account.amount >= amount,
            StakingError::InsufficientBalance
        );

        if self.stake_info.owner == Pubkey::default() {
            // Freshly created by init_if_needed: claim it for the signer.
            self.stake_info.owner = self.staker.key();
            self.stake_info.bump = bumps.stake_info;
        } else {
            require_keys_eq!(
                self.stake_info.owner,
                self.staker.key(),
                StakingError::OwnershipMismatch
            );
        }

        // Amounts are in the mint's base units; the recorded amount and the
        // transferred amount are the same number.
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.staker_token_account.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.staker.to_account_info(),
                },
            ),
            amount,
        )?;

        self.stake_info.staked_amount = self
            .stake_info
            .staked_amount
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;
        self.stake_info.last_stake_ts = Clock::get()?.unix_timestamp;

        emit!(TokensStaked {
            staker: self.staker.key(),
            amount,
            total_staked: self.stake_info.staked_amount,
        });
        msg!(
            "{} staked {} (total {})",
            self.staker.key(),
            amount,
            self.stake_info.staked_amount
        );
        Ok(())
    }
}
