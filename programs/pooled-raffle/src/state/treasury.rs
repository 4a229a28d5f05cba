use anchor_lang::prelude::*;

// 8 discriminator, 32 raffle, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned vault that holds the deposited lamports of one raffle.
/// Everything above its rent-exempt minimum is prize money.
#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    pub bump: u8,
}
