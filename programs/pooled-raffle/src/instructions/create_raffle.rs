use crate::{
    constants::{CONFIG_SEED, NUM_WORDS, RAFFLE_SEED, REQUEST_CONFIRMATIONS, TREASURY_SEED},
    error::RaffleError,
    state::{Config, DrawConfig, Raffle, Treasury, RAFFLE_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};
use anchor_lang::prelude::*;

/// Event emitted when a raffle is created
#[event]
pub struct RaffleCreated {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// Minimum deposit in lamports
    pub entrance_fee: u64,
    /// Seconds between draws
    pub interval: i64,
    /// Key allowed to deliver randomness
    pub vrf_coordinator: Pubkey,
    /// Provider subscription billed for requests
    pub subscription_id: u64,
    /// When the raffle was created
    pub creation_time: i64,
}

/// Instruction to create a new raffle with its immutable draw configuration
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `entrance_fee` - Minimum deposit per entry in lamports (must be > 0)
/// * `interval` - Minimum seconds between draws (0 < interval <= 30 days)
/// * `vrf_coordinator` - The randomness provider key, the only signer allowed to fulfill draws
/// * `key_hash` - Provider lane identifier forwarded with every request
/// * `subscription_id` - Provider subscription forwarded with every request
/// * `callback_compute_limit` - Compute budget the provider should attach to the fulfillment
///
/// # Security Considerations
/// 1. Validates caller is the management authority via config PDA
/// 2. Rejects a zero entrance fee and an out of range interval
/// 3. Rejects an unset provider key and a zero callback budget
/// 4. Uses a PDA for the treasury with proper seeds
///
/// # Implementation Notes
/// - Initializes the raffle in Open state with an empty pool
/// - The first draw interval is measured from the creation time
/// - Request confirmations and word count are program constants
pub fn create_raffle(
    ctx: Context<CreateRaffle>,
    entrance_fee: u64,
    interval: i64,
    vrf_coordinator: Pubkey,
    key_hash: [u8; 32],
    subscription_id: u64,
    callback_compute_limit: u32,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    let draw_config = DrawConfig {
        entrance_fee,
        interval,
        vrf_coordinator,
        key_hash,
        subscription_id,
        callback_compute_limit,
        request_confirmations: REQUEST_CONFIRMATIONS,
        num_words: NUM_WORDS,
    };
    draw_config.validate()?;

    ctx.accounts.raffle.set_inner(Raffle::init(
        ctx.accounts.treasury.key(),
        draw_config,
        current_time,
        ctx.bumps.raffle,
    ));
    ctx.accounts.treasury.bump = ctx.bumps.treasury;
    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();

    // Increment the raffle counter
    ctx.accounts.config.raffle_counter = ctx
        .accounts
        .config
        .raffle_counter
        .checked_add(1)
        .ok_or(RaffleError::Overflow)?;

    emit!(RaffleCreated {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee,
        interval,
        vrf_coordinator,
        subscription_id,
        creation_time: current_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = management_authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            RAFFLE_SEED,
            config.raffle_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    #[account(
        init,
        payer = management_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The config account storing the management authority and raffle counter
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = management_authority @ RaffleError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
