use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Listing filter understood by the `/realestate` endpoint.
///
/// The filter space is closed; any fetch is issued with exactly one of
/// these values as the `filter` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyFilter {
    /// Rentals only.
    #[serde(rename = "rent")]
    ShowRent,
    /// Listings for sale only.
    #[serde(rename = "buy")]
    ShowBuy,
    /// Every listing.
    #[default]
    #[serde(rename = "all")]
    ShowAll,
}

impl PropertyFilter {
    /// Value sent as the `filter` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::ShowRent => "rent",
            Self::ShowBuy => "buy",
            Self::ShowAll => "all",
        }
    }
}

impl fmt::Display for PropertyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for PropertyFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rent" => Ok(Self::ShowRent),
            "buy" => Ok(Self::ShowBuy),
            "all" => Ok(Self::ShowAll),
            other => Err(DomainError::InvalidFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_filters() {
        assert_eq!("rent".parse::<PropertyFilter>().unwrap(), PropertyFilter::ShowRent);
        assert_eq!("buy".parse::<PropertyFilter>().unwrap(), PropertyFilter::ShowBuy);
        assert_eq!("all".parse::<PropertyFilter>().unwrap(), PropertyFilter::ShowAll);
    }

    #[test]
    fn rejects_unknown_filter() {
        let err = "cheap".parse::<PropertyFilter>().unwrap_err();
        assert!(err.to_string().contains("cheap"));
    }

    #[test]
    fn default_is_show_all() {
        assert_eq!(PropertyFilter::default(), PropertyFilter::ShowAll);
    }
}
