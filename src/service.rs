use std::sync::Arc;

use crate::client::{ClientError, IexClient};
use crate::structs::{ChartWindow, IexHistoricalPrice, IexLastTradedPrice, IexSymbol};

/// Validation in front of the IEX client. Invalid input is recovered
/// silently as an empty list, never as an error; only valid requests reach
/// upstream.
#[derive(Clone)]
pub struct IexService {
    client: Arc<dyn IexClient>,
}

impl IexService {
    pub fn new(client: Arc<dyn IexClient>) -> Self {
        Self { client }
    }

    pub async fn all_symbols(&self) -> Result<Vec<IexSymbol>, ClientError> {
        self.client.all_symbols().await
    }

    /// One batched upstream call for the whole list; an empty list never
    /// goes upstream.
    pub async fn last_traded_price(
        &self,
        symbols: &[String],
    ) -> Result<Vec<IexLastTradedPrice>, ClientError> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        self.client.last_traded_price(symbols).await
    }

    pub async fn historical_price(
        &self,
        symbol: &str,
        range: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<IexHistoricalPrice>, ClientError> {
        tracing::info!(symbol, range = ?range, date = ?date, "retrieving historical price");
        if !symbol_is_valid(symbol) {
            return Ok(Vec::new());
        }
        match ChartWindow::from_params(range, date) {
            Some(window) => self.client.chart(symbol, &window).await,
            None => Ok(Vec::new()),
        }
    }
}

// Tickers are letters only; anything else short-circuits to an empty result.
fn symbol_is_valid(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_alphabetic())
}
