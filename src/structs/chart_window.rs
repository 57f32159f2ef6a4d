use chrono::NaiveDate;

use crate::structs::ChartRange;

/// Basic ISO calendar date, e.g. `20210601`.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Which of the four historical-price endpoint variants a request maps to,
/// decided by which optional parameters were supplied and whether they
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartWindow {
    Full,
    ByRange(ChartRange),
    ByDate(NaiveDate),
    ByRangeAndDate(ChartRange, NaiveDate),
}

impl ChartWindow {
    /// Validates the raw query values and picks the endpoint variant.
    /// `None` means some present value failed validation and the caller
    /// should return an empty result instead of going upstream.
    pub fn from_params(range: Option<&str>, date: Option<&str>) -> Option<Self> {
        let range = match range {
            Some(raw) => Some(raw.parse::<ChartRange>().ok()?),
            None => None,
        };
        let date = match date {
            Some(raw) => Some(NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?),
            None => None,
        };
        Some(match (range, date) {
            (None, None) => Self::Full,
            (Some(range), None) => Self::ByRange(range),
            (None, Some(date)) => Self::ByDate(date),
            (Some(range), Some(date)) => Self::ByRangeAndDate(range, date),
        })
    }

    /// Path segments appended to `/stock/{symbol}/chart`.
    pub fn path_suffix(&self) -> String {
        match self {
            Self::Full => String::new(),
            Self::ByRange(range) => format!("/{range}"),
            Self::ByDate(date) => format!("/{}", date.format(DATE_FORMAT)),
            Self::ByRangeAndDate(range, date) => {
                format!("/{range}/{}", date.format(DATE_FORMAT))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_follows_present_parameters() {
        assert_eq!(ChartWindow::from_params(None, None), Some(ChartWindow::Full));
        assert_eq!(
            ChartWindow::from_params(Some("1m"), None),
            Some(ChartWindow::ByRange(ChartRange::OneMonth))
        );
        assert!(matches!(
            ChartWindow::from_params(None, Some("20210601")),
            Some(ChartWindow::ByDate(_))
        ));
        assert!(matches!(
            ChartWindow::from_params(Some("5d"), Some("20210601")),
            Some(ChartWindow::ByRangeAndDate(ChartRange::FiveDays, _))
        ));
    }

    #[test]
    fn invalid_parts_fail_the_whole_window() {
        assert_eq!(ChartWindow::from_params(Some("4m"), None), None);
        assert_eq!(ChartWindow::from_params(None, Some("00000000")), None);
        assert_eq!(ChartWindow::from_params(None, Some("2021-06-01")), None);
        // one bad part poisons the pair in either position
        assert_eq!(ChartWindow::from_params(Some("4m"), Some("20210601")), None);
        assert_eq!(ChartWindow::from_params(Some("1m"), Some("99999999")), None);
    }

    #[test]
    fn path_suffix_matches_upstream_layout() {
        assert_eq!(ChartWindow::from_params(None, None).unwrap().path_suffix(), "");
        assert_eq!(
            ChartWindow::from_params(Some("1m"), None).unwrap().path_suffix(),
            "/1m"
        );
        assert_eq!(
            ChartWindow::from_params(None, Some("20210601")).unwrap().path_suffix(),
            "/20210601"
        );
        assert_eq!(
            ChartWindow::from_params(Some("1m"), Some("20210601"))
                .unwrap()
                .path_suffix(),
            "/1m/20210601"
        );
    }
}
