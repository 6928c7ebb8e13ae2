use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{VAULT_CONFIG_SEED, VAULT_SEED};
use crate::error::StakingError;
use crate::events::VaultInitialized;
use crate::state::VaultConfig;

// ---------------------------------------------------------------------------
// Initialize Vault
// ---------------------------------------------------------------------------
// Creates the singleton config PDA and the shared vault token account,
// binding the deployment to one mint. The vault is its own authority, so
// only program-signed CPIs can ever move funds out of it. Runs once; a
// second call fails with AlreadyInitialized and changes nothing.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for account creation. No authority over the vault afterwards.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + VaultConfig::INIT_SPACE,
        seeds = [VAULT_CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, VaultConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        seeds = [VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = vault,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        // init_if_needed leaves an existing config untouched, so a set mint
        // means a previous initialize already ran.
        require_keys_eq!(
            self.config.mint,
            Pubkey::default(),
            StakingError::AlreadyInitialized
        );

        self.config.mint = self.mint.key();
        self.config.vault_bump = bumps.vault;
        self.config.bump = bumps.config;

        emit!(VaultInitialized {
            mint: self.mint.key(),
            vault: self.vault.key(),
        });
        msg!("Vault initialized for mint {}", self.mint.key());
        Ok(())
    }
}
