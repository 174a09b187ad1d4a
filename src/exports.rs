//! Serialize import rows for the CoinTracking "custom exchange import".

use crate::model::CoinTrackingScheme;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV Error")]
    Csv(#[from] csv::Error),

    #[error("JSON Error")]
    Json(#[from] serde_json::Error),

    #[error("I/O Error")]
    Io(#[from] std::io::Error),
}

/// Column headers, in the order CoinTracking expects them.
pub const CSV_HEADERS: [&str; 15] = [
    "Type",
    "Buy Amount",
    "Buy Currency",
    "Sell Amount",
    "Sell Currency",
    "Fee",
    "Fee Currency",
    "Exchange",
    "Trade-Group",
    "Comment",
    "Date",
    "Liquidity pool",
    "Tx-ID",
    "Buy Value in Account Currency",
    "Sell Value in Account Currency",
];

/// Flattened CSV row. Columns that a category does not use, and nullable columns without a
/// value, are written as empty strings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CoinTrackingCsvRow {
    pub tx_type: String,
    pub buy_amount: String,
    pub buy_currency: String,
    pub sell_amount: String,
    pub sell_currency: String,
    pub fee_amount: String,
    pub fee_currency: String,
    pub exchange: String,
    pub trade_group: String,
    pub comment: String,
    pub date: String,
    pub liquidity_pool: String,
    pub tx_id: String,
    pub buy_value_in_account_currency: String,
    pub sell_value_in_account_currency: String,
}

impl From<&CoinTrackingScheme> for CoinTrackingCsvRow {
    fn from(record: &CoinTrackingScheme) -> Self {
        let tx_type = record.tx_type().to_string();

        match record {
            CoinTrackingScheme::Trade(trade) => Self {
                tx_type,
                buy_amount: trade.buy_amount.clone(),
                buy_currency: trade.buy_currency.clone(),
                sell_amount: trade.sell_amount.clone(),
                sell_currency: trade.sell_currency.clone(),
                fee_amount: trade.fee_amount.clone().unwrap_or_default(),
                fee_currency: trade.fee_currency.clone().unwrap_or_default(),
                exchange: trade.exchange.clone(),
                trade_group: trade.trade_group.clone(),
                comment: trade.comment.clone(),
                date: trade.date.clone(),
                liquidity_pool: trade.liquidity_pool.clone().unwrap_or_default(),
                tx_id: trade.tx_id.clone(),
                buy_value_in_account_currency: trade
                    .buy_value_in_account_currency
                    .clone()
                    .unwrap_or_default(),
                sell_value_in_account_currency: trade
                    .sell_value_in_account_currency
                    .clone()
                    .unwrap_or_default(),
            },
            CoinTrackingScheme::Deposit(deposit) => Self {
                tx_type,
                buy_amount: deposit.buy_amount.clone(),
                buy_currency: deposit.buy_currency.clone(),
                exchange: deposit.exchange.clone(),
                comment: deposit.comment.clone(),
                date: deposit.date.clone(),
                tx_id: deposit.tx_id.clone(),
                ..Default::default()
            },
            CoinTrackingScheme::Withdrawal(withdrawal) => Self {
                tx_type,
                sell_amount: withdrawal.sell_amount.clone(),
                sell_currency: withdrawal.sell_currency.clone(),
                fee_amount: withdrawal.fee_amount.clone().unwrap_or_default(),
                fee_currency: withdrawal.fee_currency.clone().unwrap_or_default(),
                exchange: withdrawal.exchange.clone(),
                comment: withdrawal.comment.clone(),
                date: withdrawal.date.clone(),
                tx_id: withdrawal.tx_id.clone(),
                ..Default::default()
            },
            CoinTrackingScheme::Staking(staking) => Self {
                tx_type,
                buy_amount: staking.buy_amount.clone(),
                buy_currency: staking.buy_currency.clone(),
                exchange: staking.exchange.clone(),
                trade_group: staking.trade_group.clone(),
                date: staking.date.clone(),
                ..Default::default()
            },
            CoinTrackingScheme::OtherFee(fee) => Self {
                tx_type,
                sell_amount: fee.sell_amount.clone(),
                sell_currency: fee.sell_currency.clone(),
                exchange: fee.exchange.clone(),
                comment: fee.comment.clone(),
                date: fee.date.clone(),
                tx_id: fee.tx_id.clone(),
                ..Default::default()
            },
        }
    }
}

/// Write a CSV with a header row followed by one row per record. Every field is quoted.
pub fn write_csv<W: Write>(writer: W, records: &[CoinTrackingScheme]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        let row = CoinTrackingCsvRow::from(record);
        debug!("Writing CSV row: {row:?}");

        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the records as a pretty-printed JSON array, tagged by `type`.
pub fn write_json<W: Write>(
    mut writer: W,
    records: &[CoinTrackingScheme],
) -> Result<(), ExportError> {
    debug!("Writing {} JSON records", records.len());
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
