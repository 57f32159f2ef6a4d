use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry from the IEX reference-data symbol listing, passed through
/// verbatim. Only `symbol` and `name` are always present upstream.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IexSymbol {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, rename = "type")]
    pub symbol_type: Option<String>,
    #[serde(default)]
    pub iex_id: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub is_enabled: Option<bool>,
}
