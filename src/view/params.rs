//! View parameters

use url::form_urlencoded;

use crate::view::{filter::DiscountFilter, sort::SortBy};

/// Query string key holding the discount filter.
pub const DISCOUNT_PARAM: &str = "discount";

/// Query string key holding the sort key.
pub const SORT_BY_PARAM: &str = "sortBy";

/// Filter and sort settings read from the navigational query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    /// Discount filter mode.
    pub discount: DiscountFilter,

    /// Sort key.
    pub sort_by: SortBy,
}

impl ViewParams {
    /// Build parameters from raw optional values.
    pub fn new(discount: Option<&str>, sort_by: Option<&str>) -> Self {
        Self {
            discount: DiscountFilter::from_param(discount),
            sort_by: SortBy::from_param(sort_by),
        }
    }

    /// Read parameters from a query string such as `?discount=all&sortBy=discount-asc`.
    ///
    /// Values are form-urlencoded. Unknown keys are ignored; when a key
    /// repeats, the first value wins.
    pub fn from_query(query: &str) -> Self {
        let values = QueryValues::parse(query);

        Self::new(values.discount.as_deref(), values.sort_by.as_deref())
    }
}

/// Decoded, not yet interpreted view parameter values of a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    /// Raw `discount` value.
    pub discount: Option<String>,

    /// Raw `sortBy` value.
    pub sort_by: Option<String>,
}

impl QueryValues {
    /// Decode the view parameters of `query`, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let mut values = Self::default();

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let slot = match key.as_ref() {
                DISCOUNT_PARAM => &mut values.discount,
                SORT_BY_PARAM => &mut values.sort_by,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        values
    }
}

#[cfg(test)]
mod tests {
    use crate::view::sort::{SortDirection, SortField};

    use super::*;

    #[test]
    fn reads_both_parameters_from_query_string() {
        let params = ViewParams::from_query("?discount=with-discount&sortBy=regularPrice-desc");

        assert_eq!(params.discount, DiscountFilter::WithDiscount);
        assert_eq!(params.sort_by.field, SortField::RegularPrice);
        assert_eq!(params.sort_by.direction, SortDirection::Descending);
    }

    #[test]
    fn empty_query_uses_defaults() {
        assert_eq!(ViewParams::from_query(""), ViewParams::default());
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let params = ViewParams::from_query("discount=&sortBy=");

        assert_eq!(params, ViewParams::default());
    }

    #[test]
    fn first_occurrence_wins() {
        let params = ViewParams::from_query("discount=no-discount&discount=with-discount");

        assert_eq!(params.discount, DiscountFilter::NoDiscount);
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let params = ViewParams::from_query("?discount=with%2Ddiscount&sortBy=regularPrice%2Ddesc");

        assert_eq!(params.discount, DiscountFilter::WithDiscount);
        assert_eq!(params.sort_by.field, SortField::RegularPrice);
        assert_eq!(params.sort_by.direction, SortDirection::Descending);
    }

    #[test]
    fn raw_values_keep_unrecognised_input() {
        let values = QueryValues::parse("sortBy=name+asc&discount=half%20price&page=2");

        assert_eq!(values.discount.as_deref(), Some("half price"));
        assert_eq!(values.sort_by.as_deref(), Some("name asc"));
    }
}
