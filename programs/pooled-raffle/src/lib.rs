use anchor_lang::prelude::*;
use instructions::*;
use state::{RaffleSummary, UpkeepCheck};

pub mod constants;
pub mod error;
pub mod instructions;
pub mod randomness;
pub mod state;

declare_id!("ET2hMqRNADa53UR5tmMin7bNzmCG7VueD36PjjMCApmq");

#[program]
pub mod pooled_raffle {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>) -> Result<()> {
        instructions::init_config::init_config(ctx)
    }

    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        entrance_fee: u64,
        interval: i64,
        vrf_coordinator: Pubkey,
        key_hash: [u8; 32],
        subscription_id: u64,
        callback_compute_limit: u32,
    ) -> Result<()> {
        instructions::create_raffle::create_raffle(
            ctx,
            entrance_fee,
            interval,
            vrf_coordinator,
            key_hash,
            subscription_id,
            callback_compute_limit,
        )
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, deposit_amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, deposit_amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        instructions::check_upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
        instructions::views::get_raffle_summary(ctx)
    }

    pub fn get_entrant(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
        instructions::views::get_entrant(ctx, index)
    }
}
