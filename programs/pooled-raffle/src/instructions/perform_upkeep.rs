use anchor_lang::{error::ErrorCode, prelude::*, solana_program::program::set_return_data};

use crate::state::Raffle;

/// Request picked up by the off-chain randomness provider. Carries every
/// parameter the provider needs to answer with `fulfill_random_words`.
#[event]
pub struct RandomWordsRequested {
    pub raffle: Pubkey,
    pub request_id: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
    pub requested_slot: u64,
}

/// Event emitted when the raffle enters Calculating
#[event]
pub struct DrawRequested {
    pub raffle: Pubkey,
    pub request_id: u64,
}

/// Triggers a draw once the raffle is eligible.
///
/// Anyone may call this. Eligibility is re-checked on-chain, so a stale,
/// duplicated or hostile call fails with `UpkeepNotNeeded` and changes
/// nothing. On success the raffle moves to Calculating and a randomness
/// request is published for the configured provider.
///
/// A rejected call leaves the `UpkeepCheck` it was decided from in the
/// return data, so a simulating caller can see why without parsing logs.
///
/// # Errors
/// - `UpkeepNotNeeded` if the raffle is not open, the interval has not
///   elapsed, or the pool is empty
/// - `Overflow` if the request nonce is exhausted
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();
    let raffle = &mut ctx.accounts.raffle;

    let check = raffle.check_upkeep(clock.unix_timestamp);
    if !check.upkeep_needed {
        let mut data = Vec::new();
        check
            .serialize(&mut data)
            .map_err(|_| ErrorCode::AccountDidNotSerialize)?;
        set_return_data(&data);
    }

    let pending = raffle.begin_draw(clock.unix_timestamp, clock.slot)?;
    let draw_config = &raffle.draw_config;

    emit!(RandomWordsRequested {
        raffle: raffle_key,
        request_id: pending.request_id,
        key_hash: draw_config.key_hash,
        subscription_id: draw_config.subscription_id,
        request_confirmations: draw_config.request_confirmations,
        callback_compute_limit: draw_config.callback_compute_limit,
        num_words: draw_config.num_words,
        requested_slot: pending.requested_slot,
    });
    emit!(DrawRequested {
        raffle: raffle_key,
        request_id: pending.request_id,
    });

    msg!(
        "Draw requested: request {} for {} entrants, pot {}",
        pending.request_id,
        raffle.entrant_count(),
        raffle.prize_balance
    );

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(mut)]
    pub raffle: Account<'info, Raffle>,
}
