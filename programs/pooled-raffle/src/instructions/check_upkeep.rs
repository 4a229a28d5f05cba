use anchor_lang::prelude::*;

use crate::state::{Raffle, UpkeepCheck};

/// Reports whether a draw may be triggered now, with the balance, entrant
/// count and state it was decided from. Read-only; the result is delivered
/// as return data so automation can simulate it freely.
pub fn check_upkeep(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.raffle.check_upkeep(clock.unix_timestamp))
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    pub raffle: Account<'info, Raffle>,
}
