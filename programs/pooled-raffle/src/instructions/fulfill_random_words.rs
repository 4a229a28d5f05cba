use anchor_lang::prelude::*;

use crate::{
    constants::TREASURY_SEED,
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when a draw is settled and the pot paid out
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub amount: u64,
    /// The request this draw answered
    pub request_id: u64,
}

/// Callback from the randomness provider that completes a draw.
///
/// Execution requirements:
/// 1. The signer is the raffle's configured `vrf_coordinator`
/// 2. `request_id` is the id of the pending draw
/// 3. `random_words` holds at least one word
/// 4. `winner` is the account of the entrant at `random_words[0] mod entrants`
///
/// The raffle is reset (recent winner set, pool cleared, balance zeroed,
/// state Open, timestamp updated) before any lamports move. The pot then
/// leaves the treasury for the winner. A failed transfer restores the raffle
/// and the instruction fails with `TransferFailed`.
///
/// # Errors
/// - `OnlyProviderCanFulfill` if the signer is not the provider
/// - `RequestIdMismatch` if no draw is pending under `request_id`
/// - `MissingRandomWords` if `random_words` is empty
/// - `WinnerAccountMismatch` if `winner` is not the drawn entrant
/// - `TransferFailed` if the payout cannot be completed
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();

    let (_, drawn) = ctx.accounts.raffle.drawn_winner(request_id, &random_words)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        drawn,
        RaffleError::WinnerAccountMismatch
    );

    let treasury = ctx.accounts.treasury.to_account_info();
    let winner = ctx.accounts.winner.to_account_info();

    let outcome = ctx.accounts.raffle.settle_draw(
        request_id,
        &random_words,
        clock.unix_timestamp,
        |_, outcome| {
            let pre_transfer_balance = winner.lamports();

            // Direct lamport moves work because the treasury is a PDA owned by this program
            treasury.sub_lamports(outcome.payout)?;
            winner.add_lamports(outcome.payout)?;

            require!(
                winner.lamports()
                    == pre_transfer_balance
                        .checked_add(outcome.payout)
                        .ok_or(RaffleError::Overflow)?,
                RaffleError::TransferFailed
            );
            Ok(())
        },
    )?;

    emit!(WinnerPicked {
        raffle: raffle_key,
        winner: outcome.winner,
        amount: outcome.payout,
        request_id: outcome.request_id,
    });

    msg!(
        "Winner picked: {} receives {} lamports",
        outcome.winner,
        outcome.payout
    );

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury PDA holding the pot
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: compared against the drawn entrant in the handler
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// The randomness provider configured on the raffle
    #[account(
        address = raffle.draw_config.vrf_coordinator @ RaffleError::OnlyProviderCanFulfill,
    )]
    pub vrf_coordinator: Signer<'info>,
}
