use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Lookback windows accepted by the IEX chart endpoint.
/// See https://iexcloud.io/docs/api/#historical-prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRange {
    Max,
    FiveYears,
    TwoYears,
    OneYear,
    YearToDate,
    SixMonths,
    ThreeMonths,
    OneMonth,
    OneMonthThirtyMinute,
    FiveDays,
    FiveDaysTenMinute,
    Date,
    Dynamic,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized chart range")]
pub struct InvalidChartRange;

impl ChartRange {
    /// The token as it appears in the upstream URL path.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::FiveYears => "5y",
            Self::TwoYears => "2y",
            Self::OneYear => "1y",
            Self::YearToDate => "ytd",
            Self::SixMonths => "6m",
            Self::ThreeMonths => "3m",
            Self::OneMonth => "1m",
            Self::OneMonthThirtyMinute => "1mm",
            Self::FiveDays => "5d",
            Self::FiveDaysTenMinute => "5dm",
            Self::Date => "date",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = InvalidChartRange;

    // Upstream tokens are lowercase; callers may send any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "5y" => Ok(Self::FiveYears),
            "2y" => Ok(Self::TwoYears),
            "1y" => Ok(Self::OneYear),
            "ytd" => Ok(Self::YearToDate),
            "6m" => Ok(Self::SixMonths),
            "3m" => Ok(Self::ThreeMonths),
            "1m" => Ok(Self::OneMonth),
            "1mm" => Ok(Self::OneMonthThirtyMinute),
            "5d" => Ok(Self::FiveDays),
            "5dm" => Ok(Self::FiveDaysTenMinute),
            "date" => Ok(Self::Date),
            "dynamic" => Ok(Self::Dynamic),
            _ => Err(InvalidChartRange),
        }
    }
}
