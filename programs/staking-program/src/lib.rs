//! Token Staking Program
//!
//! Custody and accounting state machine for staking a single SPL asset.
//! A one-time `initialize` creates the program's shared vault; each `stake`
//! moves tokens from the staker into the vault and records the cumulative
//! amount on a per-staker PDA.
//!
//! Unstake and reward logic are a follow-on extension, not part of this
//! program.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod initialize;
pub mod stake;
pub mod state;

use initialize::*;
use stake::*;

declare_id!("F7redRAGEYPYHMzn6s3JWTY2BEsB3THFsSPxgyxhAFDb");

#[program]
pub mod staking_program {
    use super::*;

    /// Creates the vault config and the shared custody token account,
    /// binding the deployment to one mint. No funds move here.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Deposits `amount` base units of the bound mint into the vault and
    /// credits the staker's stake record, creating it on first use.
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        ctx.accounts.stake(&ctx.bumps, amount)
    }
}
