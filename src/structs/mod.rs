mod chart_range;
mod chart_window;
mod historical_price;
mod last_traded_price;
mod symbol;

pub use chart_range::ChartRange;
pub use chart_window::ChartWindow;
pub use historical_price::IexHistoricalPrice;
pub use last_traded_price::IexLastTradedPrice;
pub use symbol::IexSymbol;
