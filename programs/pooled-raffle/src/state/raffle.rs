use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_ENTRANTS, MAX_INTERVAL},
    error::RaffleError,
    randomness::winner_index,
};

// Space calculation:
// 8 (entrance_fee) +
// 8 (interval) +
// 32 (vrf_coordinator) +
// 32 (key_hash) +
// 8 (subscription_id) +
// 4 (callback_compute_limit) +
// 2 (request_confirmations) +
// 4 (num_words) =
// 98 total bytes
pub const DRAW_CONFIG_SIZE: usize = 8 + 8 + 32 + 32 + 8 + 4 + 2 + 4;

// Space calculation:
// 8 (discriminator) +
// 32 (treasury) +
// 98 (draw_config) +
// 1 (raffle_state) +
// 4 + 32 * MAX_ENTRANTS (entrants) +
// 8 (prize_balance) +
// 25 (pending_draw: Option<PendingDraw>) +
// 8 (request_nonce) +
// 33 (recent_winner: Option<Pubkey>) +
// 8 (last_draw_timestamp) +
// 8 (creation_time) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 32 + DRAW_CONFIG_SIZE + 1 + (4 + 32 * MAX_ENTRANTS) + 8 + (1 + 24) + 8 + 33 + 8 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open,
    Calculating,
}

/// Parameters fixed when the raffle is created. There is no instruction that
/// changes them afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DrawConfig {
    /// Minimum deposit in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between two draws
    pub interval: i64,
    /// The only key allowed to deliver random words
    pub vrf_coordinator: Pubkey,
    /// Provider lane the request is routed to
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_compute_limit: u32,
    pub request_confirmations: u16,
    pub num_words: u32,
}

/// The outstanding randomness request. Its presence is what `Calculating` means.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDraw {
    pub request_id: u64,
    pub requested_at: i64,
    pub requested_slot: u64,
}

#[account]
#[derive(Debug, PartialEq)]
pub struct Raffle {
    pub treasury: Pubkey,
    pub draw_config: DrawConfig,
    pub raffle_state: RaffleState,
    pub entrants: Vec<Pubkey>,
    pub prize_balance: u64,
    pub pending_draw: Option<PendingDraw>,
    pub request_nonce: u64,
    pub recent_winner: Option<Pubkey>,
    pub last_draw_timestamp: i64,
    pub creation_time: i64,
    pub bump: u8,
}

/// Result of the eligibility predicate together with the values it was computed from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub balance: u64,
    pub entrant_count: u64,
    pub raffle_state: RaffleState,
    pub perform_data: Vec<u8>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSummary {
    pub raffle_state: RaffleState,
    pub entrance_fee: u64,
    pub interval: i64,
    pub recent_winner: Option<Pubkey>,
    pub entrant_count: u64,
    pub prize_balance: u64,
    pub last_draw_timestamp: i64,
    pub pending_request_id: Option<u64>,
}

/// What a settled draw committed, handed to the payout step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub request_id: u64,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub payout: u64,
    pub settled_at: i64,
}

impl DrawConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::EntranceFeeTooLow);
        require!(
            self.interval > 0 && self.interval <= MAX_INTERVAL,
            RaffleError::InvalidInterval
        );
        require!(
            self.callback_compute_limit > 0,
            RaffleError::InvalidCallbackLimit
        );
        require!(
            self.vrf_coordinator != Pubkey::default(),
            RaffleError::InvalidCoordinator
        );
        Ok(())
    }
}

impl Raffle {
    pub fn init(treasury: Pubkey, draw_config: DrawConfig, now: i64, bump: u8) -> Self {
        Self {
            treasury,
            draw_config,
            raffle_state: RaffleState::Open,
            entrants: Vec::new(),
            prize_balance: 0,
            pending_draw: None,
            request_nonce: 0,
            recent_winner: None,
            last_draw_timestamp: now,
            creation_time: now,
            bump,
        }
    }

    pub fn entrance_fee(&self) -> u64 {
        self.draw_config.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.draw_config.interval
    }

    pub fn entrant_count(&self) -> u64 {
        self.entrants.len() as u64
    }

    pub fn entrant(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.entrants.get(index))
            .copied()
            .ok_or_else(|| RaffleError::EntrantIndexOutOfRange.into())
    }

    pub fn summary(&self) -> RaffleSummary {
        RaffleSummary {
            raffle_state: self.raffle_state,
            entrance_fee: self.entrance_fee(),
            interval: self.interval(),
            recent_winner: self.recent_winner,
            entrant_count: self.entrant_count(),
            prize_balance: self.prize_balance,
            last_draw_timestamp: self.last_draw_timestamp,
            pending_request_id: self.pending_draw.map(|pending| pending.request_id),
        }
    }

    /// Draw eligibility: open, interval elapsed, money in the pot and at least one entrant.
    pub fn upkeep_needed(&self, now: i64) -> bool {
        let is_open = self.raffle_state == RaffleState::Open;
        let time_passed = now.saturating_sub(self.last_draw_timestamp) >= self.interval();
        let has_balance = self.prize_balance > 0;
        let has_entrants = !self.entrants.is_empty();

        is_open && time_passed && has_balance && has_entrants
    }

    pub fn check_upkeep(&self, now: i64) -> UpkeepCheck {
        UpkeepCheck {
            upkeep_needed: self.upkeep_needed(now),
            balance: self.prize_balance,
            entrant_count: self.entrant_count(),
            raffle_state: self.raffle_state,
            perform_data: Vec::new(),
        }
    }

    /// Admits one deposit. Nothing changes unless every check passes.
    pub fn record_entry(&mut self, entrant: Pubkey, deposit_amount: u64) -> Result<()> {
        require!(
            deposit_amount >= self.entrance_fee(),
            RaffleError::InsufficientPayment
        );
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::RaffleNotOpen
        );
        require!(self.entrants.len() < MAX_ENTRANTS, RaffleError::RaffleFull);

        let prize_balance = self
            .prize_balance
            .checked_add(deposit_amount)
            .ok_or(RaffleError::Overflow)?;

        self.entrants.push(entrant);
        self.prize_balance = prize_balance;

        Ok(())
    }

    /// Moves an eligible raffle into `Calculating` and issues the next request id.
    ///
    /// The eligibility predicate is evaluated here again, whatever the caller
    /// saw in `check_upkeep`.
    pub fn begin_draw(&mut self, now: i64, slot: u64) -> Result<PendingDraw> {
        if !self.upkeep_needed(now) {
            msg!(
                "Upkeep not needed: balance={}, entrants={}, state={:?}",
                self.prize_balance,
                self.entrant_count(),
                self.raffle_state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        let pending = PendingDraw {
            request_id,
            requested_at: now,
            requested_slot: slot,
        };

        self.request_nonce = request_id;
        self.raffle_state = RaffleState::Calculating;
        self.pending_draw = Some(pending);

        Ok(pending)
    }

    /// Index and key of the entrant the random words select for `request_id`.
    /// Read-only; fails exactly where `settle_draw` would before committing.
    pub fn drawn_winner(&self, request_id: u64, random_words: &[[u8; 32]]) -> Result<(u64, Pubkey)> {
        let pending = self
            .pending_draw
            .filter(|pending| pending.request_id == request_id)
            .ok_or(RaffleError::RequestIdMismatch)?;
        require!(
            self.raffle_state == RaffleState::Calculating,
            RaffleError::RequestIdMismatch
        );

        let random_word = random_words.first().ok_or(RaffleError::MissingRandomWords)?;
        let index = winner_index(random_word, self.entrant_count()).ok_or(RaffleError::NoEntrants)?;
        msg!(
            "Request {}: word mod {} entrants selects index {}",
            pending.request_id,
            self.entrant_count(),
            index
        );

        Ok((index, self.entrant(index)?))
    }

    /// Consumes the random words for the pending request, resets the raffle
    /// and then runs `pay_winner`.
    ///
    /// All state is committed before `pay_winner` is called, so anything it
    /// triggers sees an open, empty raffle. If `pay_winner` fails the raffle
    /// is restored to its pre-settlement value and `TransferFailed` is returned.
    pub fn settle_draw<F>(
        &mut self,
        request_id: u64,
        random_words: &[[u8; 32]],
        now: i64,
        pay_winner: F,
    ) -> Result<DrawOutcome>
    where
        F: FnOnce(&Raffle, &DrawOutcome) -> Result<()>,
    {
        let (index, winner) = self.drawn_winner(request_id, random_words)?;

        let snapshot = self.clone();

        let outcome = DrawOutcome {
            request_id,
            winner,
            winner_index: index,
            payout: self.prize_balance,
            settled_at: now,
        };
        self.recent_winner = Some(winner);
        self.entrants.clear();
        self.prize_balance = 0;
        self.pending_draw = None;
        self.raffle_state = RaffleState::Open;
        self.last_draw_timestamp = now;

        if let Err(transfer_error) = pay_winner(self, &outcome) {
            msg!("Prize transfer failed: {}", transfer_error);
            *self = snapshot;
            return err!(RaffleError::TransferFailed);
        }

        Ok(outcome)
    }
}
