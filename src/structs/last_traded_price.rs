use serde::{Deserialize, Serialize};

/// Most recent trade for one symbol, as returned by the IEX TOPS `last`
/// endpoint. `time` is epoch milliseconds.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct IexLastTradedPrice {
    pub symbol: String,
    pub price: f64,
    pub size: u64,
    pub time: u64,
}
