use crate::{
    constants::CONFIG_SEED,
    state::{Config, CONFIG_ACCOUNT_SIZE},
};
use anchor_lang::prelude::*;

/// Instruction to initialize the program configuration
/// This should be called once during program deployment
///
/// # Security Considerations
/// - Creates a PDA with seed "config" holding the management authority and the raffle counter
/// - Only needs to be called once during deployment
/// - The caller only pays for the account, it gains no rights over it
/// - The management authority will be set and locked
///
/// # Account Validations
/// * Config - New PDA initialized with proper space allocation
/// * Payer - Signer paying for the config account
/// * Management Authority - Account becomes the only key allowed to create raffles
pub fn init_config(ctx: Context<InitConfig>) -> Result<()> {
    ctx.accounts.config.management_authority = ctx.accounts.management_authority.key();
    ctx.accounts.config.bump = ctx.bumps.config;
    ctx.accounts.config.raffle_counter = 0;

    msg!(
        "Config initialized, management authority {}",
        ctx.accounts.config.management_authority
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = payer,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub management_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
