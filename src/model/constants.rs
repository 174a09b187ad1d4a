/// Ticker of the Zeitgeist native currency.
pub const ZTG: &str = "ZTG";

/// Trade group shared by every staking reward row.
pub const STAKING_TRADE_GROUP: &str = "ZeitgeistPM Staking";

// Reward amounts are not derived from chain state yet.
pub const STAKING_PLACEHOLDER_AMOUNT: &str = "0";

/// CoinTracking truncates the `exchange` column beyond this many characters. Callers are
/// responsible for shortening wallet addresses, e.g. `ZTG Wallet dE17ow...vQ7o`.
pub const EXCHANGE_LABEL_LIMIT: usize = 32;
