use anchor_lang::prelude::*;

#[constant]
pub const CONFIG_SEED: &[u8] = b"config";

#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

#[constant]
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Upper bound on entries held in one draw cycle. Sizes the raffle account.
pub const MAX_ENTRANTS: usize = 256;

/// Block confirmations the randomness provider waits before answering.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words requested per draw. Only the first one is consumed.
pub const NUM_WORDS: u32 = 1;

/// Longest allowed interval between draws (30 days in seconds)
pub const MAX_INTERVAL: i64 = 30 * 24 * 60 * 60;
