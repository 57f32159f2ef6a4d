use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day (or intraday slice) of an IEX chart response.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct IexHistoricalPrice {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}
