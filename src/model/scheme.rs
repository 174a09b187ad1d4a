//! Row shapes accepted by the CoinTracking importer.
//!
//! Every column is text. Amounts are kept as decimal strings (e.g. `"42.0"`) and dates as
//! `DD.MM.YYYY HH:MM:SS` in UTC so that nothing is reformatted on the way to the importer.

use crate::model::TxType;
use serde::{Deserialize, Serialize};

/// A single CoinTracking import row, tagged with its transaction category.
///
/// Each variant only carries the columns that are meaningful for its category. Columns outside of
/// a variant are absent, while nullable columns inside a variant are `None`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CoinTrackingScheme {
    Trade(CoinTrackingTrade),
    Deposit(CoinTrackingDeposit),
    Withdrawal(CoinTrackingWithdrawal),
    Staking(CoinTrackingStaking),
    #[serde(rename = "Other Fee")]
    OtherFee(CoinTrackingOtherFee),
}

impl CoinTrackingScheme {
    pub fn tx_type(&self) -> TxType {
        match self {
            Self::Trade(_) => TxType::Trade,
            Self::Deposit(_) => TxType::Deposit,
            Self::Withdrawal(_) => TxType::Withdrawal,
            Self::Staking(_) => TxType::Staking,
            Self::OtherFee(_) => TxType::OtherFee,
        }
    }
}

/// Swap on the Zeitgeist AMM.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTrackingTrade {
    pub buy_amount: String,   // "42.0"
    pub buy_currency: String, // "ZTG-TOK"
    pub sell_amount: String,
    pub sell_currency: String, // "ZTG", "DOT", "USDC", etc.
    /// `None` when the swap fee is already included in the resulting price.
    pub fee_amount: Option<String>,
    pub fee_currency: Option<String>,
    pub exchange: String,    // "ZeitgeistPM AMM"
    pub trade_group: String, // "ZTG-MID21-COI2" for market 21, categorical outcome 2
    pub comment: String,
    pub date: String,
    pub liquidity_pool: Option<String>, // "ZTG-PID42"
    pub tx_id: String,
    /// Only used when `buy_currency` has no price data of its own.
    pub buy_value_in_account_currency: Option<String>,
    /// Only used when `sell_currency` has no price data of its own.
    pub sell_value_in_account_currency: Option<String>,
}

/// Funds received. The amount excludes transaction fees.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTrackingDeposit {
    pub buy_amount: String,
    pub buy_currency: String,
    pub exchange: String, // "ZTG Wallet dE17ow...vQ7o"
    pub comment: String,  // "Extrinsic Hash: '0x8d58...6c16', Extrinsic Name: 'Utility.batch'"
    pub date: String,
    pub tx_id: String, // Extrinsic hash
}

/// Funds sent. `fee_amount` is already included in `sell_amount` and is stated for clarity.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTrackingWithdrawal {
    pub sell_amount: String,
    pub sell_currency: String,
    pub fee_amount: Option<String>,
    pub fee_currency: Option<String>,
    pub exchange: String,
    pub comment: String,
    pub date: String,
    pub tx_id: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTrackingStaking {
    pub buy_amount: String,
    pub buy_currency: String,
    pub exchange: String,
    pub trade_group: String, // "ZeitgeistPM Staking"
    pub date: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTrackingOtherFee {
    pub sell_amount: String,
    pub sell_currency: String, // "ZTG" or another fee asset
    pub exchange: String,
    pub comment: String,
    pub date: String,
    pub tx_id: String,
}

impl From<CoinTrackingTrade> for CoinTrackingScheme {
    fn from(value: CoinTrackingTrade) -> Self {
        Self::Trade(value)
    }
}

impl From<CoinTrackingDeposit> for CoinTrackingScheme {
    fn from(value: CoinTrackingDeposit) -> Self {
        Self::Deposit(value)
    }
}

impl From<CoinTrackingWithdrawal> for CoinTrackingScheme {
    fn from(value: CoinTrackingWithdrawal) -> Self {
        Self::Withdrawal(value)
    }
}

impl From<CoinTrackingStaking> for CoinTrackingScheme {
    fn from(value: CoinTrackingStaking) -> Self {
        Self::Staking(value)
    }
}

impl From<CoinTrackingOtherFee> for CoinTrackingScheme {
    fn from(value: CoinTrackingOtherFee) -> Self {
        Self::OtherFee(value)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use similar_asserts::assert_eq;

    const TX_HASH: &str = "0x8d5835b4ceea65cd55c4ca6c0dcc11123e1a55d58aef464de26f18bd81636c16";

    pub(crate) fn swap() -> CoinTrackingTrade {
        CoinTrackingTrade {
            buy_amount: "42.0".to_string(),
            buy_currency: "ZTG-MID21-COI2".to_string(),
            sell_amount: "10.5".to_string(),
            sell_currency: "ZTG".to_string(),
            fee_amount: None,
            fee_currency: None,
            exchange: "ZeitgeistPM AMM".to_string(),
            trade_group: "ZTG-MID21-COI2".to_string(),
            comment: format!("Extrinsic Hash: '{TX_HASH}', Extrinsic Name: 'Swaps.swap_exact_amount_in'"),
            date: "30.01.2018 15:20:25".to_string(),
            liquidity_pool: Some("ZTG-PID42".to_string()),
            tx_id: TX_HASH.to_string(),
            buy_value_in_account_currency: None,
            sell_value_in_account_currency: None,
        }
    }

    pub(crate) fn fee() -> CoinTrackingOtherFee {
        CoinTrackingOtherFee {
            sell_amount: "0.0125".to_string(),
            sell_currency: "ZTG".to_string(),
            exchange: "ZTG Wallet dE17ow...vQ7o".to_string(),
            comment: format!("Extrinsic Hash: '{TX_HASH}', Extrinsic Name: 'Utility.batch'"),
            date: "30.01.2018 15:20:25".to_string(),
            tx_id: TX_HASH.to_string(),
        }
    }

    #[test]
    fn test_trade_json_keeps_nulls() {
        let record = CoinTrackingScheme::from(swap());

        assert_eq!(record.tx_type(), TxType::Trade);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "type": "Trade",
                "buyAmount": "42.0",
                "buyCurrency": "ZTG-MID21-COI2",
                "sellAmount": "10.5",
                "sellCurrency": "ZTG",
                "feeAmount": null,
                "feeCurrency": null,
                "exchange": "ZeitgeistPM AMM",
                "tradeGroup": "ZTG-MID21-COI2",
                "comment": format!("Extrinsic Hash: '{TX_HASH}', Extrinsic Name: 'Swaps.swap_exact_amount_in'"),
                "date": "30.01.2018 15:20:25",
                "liquidityPool": "ZTG-PID42",
                "txId": TX_HASH,
                "buyValueInAccountCurrency": null,
                "sellValueInAccountCurrency": null,
            }),
        );
    }

    #[test]
    fn test_deposit_json_omits_other_columns() {
        let record = CoinTrackingScheme::from(CoinTrackingDeposit {
            buy_amount: "100".to_string(),
            buy_currency: "ZTG".to_string(),
            exchange: "ZTG Wallet dE17ow...vQ7o".to_string(),
            comment: String::new(),
            date: "01.02.2023 00:00:00".to_string(),
            tx_id: TX_HASH.to_string(),
        });

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            [
                "buyAmount",
                "buyCurrency",
                "comment",
                "date",
                "exchange",
                "txId",
                "type"
            ],
        );
        assert_eq!(object["type"], "Deposit");
    }

    #[test]
    fn test_withdrawal_fee_is_stated() {
        let record = CoinTrackingScheme::from(CoinTrackingWithdrawal {
            sell_amount: "5".to_string(),
            sell_currency: "ZTG".to_string(),
            fee_amount: Some("0.01".to_string()),
            fee_currency: Some("ZTG".to_string()),
            exchange: "ZTG Wallet dE17ow...vQ7o".to_string(),
            comment: String::new(),
            date: "01.02.2023 00:00:00".to_string(),
            tx_id: TX_HASH.to_string(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Withdrawal");
        assert_eq!(value["feeAmount"], "0.01");
        assert_eq!(value["feeCurrency"], "ZTG");
        assert!(value.get("buyAmount").is_none());
    }

    #[test]
    fn test_other_fee_tag() {
        let record = CoinTrackingScheme::from(fee());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with(r#"{"type":"Other Fee","#), "{json}");

        let parsed: CoinTrackingScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.tx_type(), TxType::OtherFee);
    }

    #[test]
    fn test_nullable_columns_may_be_missing() {
        let parsed: CoinTrackingScheme = serde_json::from_value(json!({
            "type": "Withdrawal",
            "sellAmount": "5",
            "sellCurrency": "ZTG",
            "exchange": "ZTG Wallet",
            "comment": "",
            "date": "",
            "txId": "",
        }))
        .unwrap();

        let CoinTrackingScheme::Withdrawal(withdrawal) = parsed else {
            panic!("expected a withdrawal, found {parsed:?}");
        };
        assert_eq!(withdrawal.fee_amount, None);
        assert_eq!(withdrawal.fee_currency, None);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_value::<CoinTrackingScheme>(json!({
            "type": "Income",
            "buyAmount": "1",
        }));

        assert!(result.is_err());
    }
}
