use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction category understood by the CoinTracking importer.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum TxType {
    /// Swap of one asset for another.
    Trade,

    /// Asset received into a wallet.
    Deposit,

    /// Asset sent out of a wallet. Fees are charged from the sell amount.
    Withdrawal,

    /// Staking reward credited to a wallet.
    Staking,

    /// Fee paid outside of a trade or withdrawal.
    #[serde(rename = "Other Fee")]
    OtherFee,
}

impl TxType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trade => "Trade",
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::Staking => "Staking",
            Self::OtherFee => "Other Fee",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
