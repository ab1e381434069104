pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 500;
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;
