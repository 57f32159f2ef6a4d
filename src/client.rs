use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::structs::{ChartWindow, IexHistoricalPrice, IexLastTradedPrice, IexSymbol};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request to IEX failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IEX returned status {0} for {1}")]
    Status(StatusCode, String),
}

/// Outbound contract for the IEX market-data endpoints this gateway fronts.
/// `chart` takes the already-selected [`ChartWindow`] so all four historical
/// URL variants live in one implementation.
#[async_trait]
pub trait IexClient: Send + Sync {
    async fn all_symbols(&self) -> Result<Vec<IexSymbol>, ClientError>;

    async fn last_traded_price(
        &self,
        symbols: &[String],
    ) -> Result<Vec<IexLastTradedPrice>, ClientError>;

    async fn chart(
        &self,
        symbol: &str,
        window: &ChartWindow,
    ) -> Result<Vec<IexHistoricalPrice>, ClientError>;
}

/// reqwest-backed [`IexClient`] issuing templated GETs with the API token
/// attached as a query parameter. No retry or circuit breaking; failures
/// propagate to the caller.
pub struct IexHttpClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl IexHttpClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn symbols_url(&self) -> String {
        format!("{}/ref-data/symbols?token={}", self.base_url, self.token)
    }

    fn last_traded_price_url(&self, symbols: &[String]) -> String {
        format!(
            "{}/tops/last?symbols={}&token={}",
            self.base_url,
            symbols.join(","),
            self.token
        )
    }

    fn chart_url(&self, symbol: &str, window: &ChartWindow) -> String {
        format!(
            "{}/stock/{}/chart{}?token={}",
            self.base_url,
            symbol,
            window.path_suffix(),
            self.token
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        let redacted = redact_token(&url);
        tracing::debug!(url = %redacted, "GET upstream");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status(), redacted));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl IexClient for IexHttpClient {
    async fn all_symbols(&self) -> Result<Vec<IexSymbol>, ClientError> {
        self.get_json(self.symbols_url()).await
    }

    async fn last_traded_price(
        &self,
        symbols: &[String],
    ) -> Result<Vec<IexLastTradedPrice>, ClientError> {
        self.get_json(self.last_traded_price_url(symbols)).await
    }

    async fn chart(
        &self,
        symbol: &str,
        window: &ChartWindow,
    ) -> Result<Vec<IexHistoricalPrice>, ClientError> {
        self.get_json(self.chart_url(symbol, window)).await
    }
}

// The token is a credential; it never reaches logs or error messages.
fn redact_token(url: &str) -> String {
    match url.split_once("token=") {
        Some((head, _)) => format!("{head}token=<redacted>"),
        None => url.to_owned(),
    }
}
