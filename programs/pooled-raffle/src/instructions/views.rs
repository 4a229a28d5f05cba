use anchor_lang::prelude::*;

use crate::state::{Raffle, RaffleSummary};

pub fn get_raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
    Ok(ctx.accounts.raffle.summary())
}

/// Fails with `EntrantIndexOutOfRange` once the pool has been reset.
pub fn get_entrant(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.entrant(index)
}

#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    pub raffle: Account<'info, Raffle>,
}
