use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::client::ClientError;
use crate::service::IexService;
use crate::structs::{IexHistoricalPrice, IexLastTradedPrice, IexSymbol};

#[derive(Clone)]
pub struct AppState {
    pub iex: IexService,
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/iex/symbols", get(get_all_symbols))
        .route("/iex/lastTradedPrice", get(get_last_traded_price))
        .route("/iex/historicalPrice", get(get_historical_price))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Upstream(#[from] ClientError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Upstream(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
        };
        tracing::error!(%status, %message, "request failed");
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

async fn get_all_symbols(State(state): State<AppState>) -> ApiResult<Json<Vec<IexSymbol>>> {
    Ok(Json(state.iex.all_symbols().await?))
}

async fn get_last_traded_price(
    State(state): State<AppState>,
    // collected by hand so both repeated `symbols=A&symbols=B` and
    // comma-separated `symbols=A,B` bind
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<IexLastTradedPrice>>> {
    let symbols: Vec<String> = params
        .iter()
        .filter(|(key, _)| key == "symbols")
        .flat_map(|(_, value)| value.split(','))
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_owned)
        .collect();
    Ok(Json(state.iex.last_traded_price(&symbols).await?))
}

#[derive(Deserialize)]
struct HistoricalPriceParams {
    // required; a missing symbol is rejected by the extractor with a 400
    symbol: String,
    range: Option<String>,
    date: Option<String>,
}

async fn get_historical_price(
    State(state): State<AppState>,
    Query(params): Query<HistoricalPriceParams>,
) -> ApiResult<Json<Vec<IexHistoricalPrice>>> {
    let prices = state
        .iex
        .historical_price(
            &params.symbol,
            params.range.as_deref(),
            params.date.as_deref(),
        )
        .await?;
    Ok(Json(prices))
}
