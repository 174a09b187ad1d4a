use crate::model::constants::{STAKING_PLACEHOLDER_AMOUNT, STAKING_TRADE_GROUP, ZTG};
use crate::model::{CoinTrackingScheme, CoinTrackingStaking};
use tracing::debug;


/// Staking rewards credited to `account_id`.
///
/// The account id is echoed verbatim into the `exchange` column. The amount is always `"0"` and
/// the date is always empty: no reward history is consulted yet.
pub fn get_staking_rewards(account_id: &str) -> Vec<CoinTrackingScheme> {
    let staking = CoinTrackingStaking {
        buy_amount: STAKING_PLACEHOLDER_AMOUNT.to_string(),
        buy_currency: ZTG.to_string(),
        exchange: account_id.to_string(),
        trade_group: STAKING_TRADE_GROUP.to_string(),
        date: String::new(),
    };
    debug!("Staking reward for {account_id:?}: {staking:?}");

    vec![staking.into()]
}
