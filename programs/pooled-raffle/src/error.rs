use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    InvalidTreasury,
    #[msg("Raffle is not accepting entries while a draw is in progress")]
    RaffleNotOpen,
    #[msg("Deposit is below the entrance fee")]
    InsufficientPayment,
    #[msg("Entrant pool is full for this draw cycle")]
    RaffleFull,
    #[msg("Upkeep not needed: interval, balance, entrants or state check failed")]
    UpkeepNotNeeded,
    #[msg("Only the configured randomness provider can fulfill a draw")]
    OnlyProviderCanFulfill,
    #[msg("Request id does not match the pending draw")]
    RequestIdMismatch,
    #[msg("Fulfillment carried no random words")]
    MissingRandomWords,
    #[msg("Entrant pool is empty")]
    NoEntrants,
    #[msg("Winner account does not match the drawn entrant")]
    WinnerAccountMismatch,
    #[msg("Prize transfer failed")]
    TransferFailed,
    #[msg("No entrant at this index")]
    EntrantIndexOutOfRange,
    #[msg("Only the program management authority can create raffles")]
    NotProgramManagementAuthority,
    #[msg("Entrance fee must be greater than zero")]
    EntranceFeeTooLow,
    #[msg("Draw interval must be positive and at most 30 days")]
    InvalidInterval,
    #[msg("Callback compute limit must be greater than zero")]
    InvalidCallbackLimit,
    #[msg("Randomness provider address must be set")]
    InvalidCoordinator,
}
