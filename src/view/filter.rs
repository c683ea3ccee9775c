//! Discount filter

use std::str::FromStr;

use thiserror::Error;

use crate::cabins::Cabin;

/// Filter mode selected by the `discount` view parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscountFilter {
    /// Keep every cabin.
    #[default]
    All,

    /// Keep cabins without a discount.
    NoDiscount,

    /// Keep discounted cabins.
    WithDiscount,
}

/// Unrecognised `discount` parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown discount filter: {0}")]
pub struct UnknownDiscountFilter(pub String);

impl DiscountFilter {
    /// Read the filter from an optional parameter value.
    ///
    /// Missing, empty and unrecognised values all fall back to [`DiscountFilter::All`].
    pub fn from_param(value: Option<&str>) -> Self {
        value
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Parameter value for this filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::NoDiscount => "no-discount",
            Self::WithDiscount => "with-discount",
        }
    }

    /// Whether `cabin` passes the filter.
    pub fn matches(self, cabin: &Cabin) -> bool {
        match self {
            Self::All => true,
            Self::NoDiscount => cabin.discount == 0,
            Self::WithDiscount => cabin.discount > 0,
        }
    }
}

impl FromStr for DiscountFilter {
    type Err = UnknownDiscountFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "no-discount" => Ok(Self::NoDiscount),
            "with-discount" => Ok(Self::WithDiscount),
            other => Err(UnknownDiscountFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cabins::CabinId;

    use super::*;

    fn cabin(discount: u64) -> Cabin {
        Cabin {
            id: CabinId::new(1),
            name: "001".to_string(),
            max_capacity: 2,
            regular_price: 250,
            discount,
            description: None,
            image: None,
        }
    }

    #[test]
    fn unrecognised_values_default_to_all() {
        assert_eq!(DiscountFilter::from_param(None), DiscountFilter::All);
        assert_eq!(DiscountFilter::from_param(Some("")), DiscountFilter::All);
        assert_eq!(DiscountFilter::from_param(Some("half-off")), DiscountFilter::All);
        assert_eq!(
            DiscountFilter::from_param(Some("with-discount")),
            DiscountFilter::WithDiscount
        );
    }

    #[test]
    fn strict_parse_rejects_unknown_values() {
        assert_eq!(
            "half-off".parse::<DiscountFilter>(),
            Err(UnknownDiscountFilter("half-off".to_string()))
        );
    }

    #[test]
    fn zero_discount_is_only_kept_by_no_discount_and_all() {
        let free = cabin(0);

        assert!(DiscountFilter::All.matches(&free));
        assert!(DiscountFilter::NoDiscount.matches(&free));
        assert!(!DiscountFilter::WithDiscount.matches(&free));
    }

    #[test]
    fn positive_discount_is_only_kept_by_with_discount_and_all() {
        let discounted = cabin(10);

        assert!(DiscountFilter::All.matches(&discounted));
        assert!(!DiscountFilter::NoDiscount.matches(&discounted));
        assert!(DiscountFilter::WithDiscount.matches(&discounted));
    }
}
