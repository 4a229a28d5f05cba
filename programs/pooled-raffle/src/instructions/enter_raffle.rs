use anchor_lang::prelude::*;

use crate::{
    constants::TREASURY_SEED,
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when a deposit is admitted into the pool
#[event]
pub struct EntryAccepted {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The entrant's address
    pub entrant: Pubkey,
    /// Deposited lamports
    pub amount: u64,
}

/// Instruction to enter the raffle with a deposit
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `deposit_amount` - Lamports moved into the treasury, at least the entrance fee
///
/// # Security Considerations
/// 1. Rejects deposits below the entrance fee, whatever the raffle state
/// 2. Rejects entries while a draw is in progress
/// 3. Verifies the treasury account matches the one stored in raffle
/// 4. Verifies the treasury balance grew by exactly the deposit
///
/// # Implementation Notes
/// - The same entrant may enter several times; each entry is one slot in the pool
/// - The whole deposit counts towards the prize, not just the fee
pub fn enter_raffle(ctx: Context<EnterRaffle>, deposit_amount: u64) -> Result<()> {
    require!(
        ctx.accounts.treasury.key() == ctx.accounts.raffle.treasury,
        RaffleError::InvalidTreasury,
    );

    let entrant = ctx.accounts.signer.key();
    ctx.accounts.raffle.record_entry(entrant, deposit_amount)?;

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &entrant,
            &ctx.accounts.treasury.key(),
            deposit_amount,
        ),
        &[
            ctx.accounts.signer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(deposit_amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(EntryAccepted {
        raffle: ctx.accounts.raffle.key(),
        entrant,
        amount: deposit_amount,
    });

    Ok(())
}

/// Accounts required for the enter_raffle instruction
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(mut)]
    pub raffle: Account<'info, Raffle>,

    /// The account entering and paying the deposit
    #[account(mut)]
    pub signer: Signer<'info>,

    /// Treasury PDA that receives the deposit
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}
