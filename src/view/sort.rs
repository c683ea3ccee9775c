//! Sort order

use std::cmp::Ordering;

use crate::cabins::Cabin;

/// Sort key used when the `sortBy` parameter is absent.
pub const DEFAULT_SORT_BY: &str = "startDate-asc";

/// Field named by the `sortBy` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
    /// Cabin identifier.
    Id,

    /// Maximum capacity.
    MaxCapacity,

    /// Regular price.
    RegularPrice,

    /// Discount.
    Discount,

    /// Any other field. These have no numeric value, so they impose no order.
    Unsupported(String),
}

impl SortField {
    /// Resolve a field name as it appears in the parameter.
    pub fn from_name(name: &str) -> Self {
        match name {
            "id" => Self::Id,
            "maxCapacity" => Self::MaxCapacity,
            "regularPrice" => Self::RegularPrice,
            "discount" => Self::Discount,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Parameter name of the field.
    pub fn name(&self) -> &str {
        match self {
            Self::Id => "id",
            Self::MaxCapacity => "maxCapacity",
            Self::RegularPrice => "regularPrice",
            Self::Discount => "discount",
            Self::Unsupported(name) => name,
        }
    }

    /// Numeric value of the field on `cabin`.
    pub fn value(&self, cabin: &Cabin) -> Option<i128> {
        match self {
            Self::Id => Some(i128::from(cabin.id.get())),
            Self::MaxCapacity => Some(i128::from(cabin.max_capacity)),
            Self::RegularPrice => Some(i128::from(cabin.regular_price)),
            Self::Discount => Some(i128::from(cabin.discount)),
            Self::Unsupported(_) => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,

    /// Largest first.
    Descending,
}

impl SortDirection {
    /// `asc` is ascending; anything else, including a missing token, is descending.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("asc") => Self::Ascending,
            _ => Self::Descending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Compound `"<field>-<direction>"` sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    /// Field to compare.
    pub field: SortField,

    /// Direction of the comparison.
    pub direction: SortDirection,
}

impl SortBy {
    /// Parse a `sortBy` value, falling back to [`DEFAULT_SORT_BY`] when absent or empty.
    pub fn from_param(value: Option<&str>) -> Self {
        let value = value
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_SORT_BY);

        let mut parts = value.split('-');
        let field = SortField::from_name(parts.next().unwrap_or_default());
        let direction = SortDirection::from_token(parts.next());

        Self { field, direction }
    }

    /// Whether the key imposes an order at all.
    pub fn is_orderable(&self) -> bool {
        !matches!(self.field, SortField::Unsupported(_))
    }

    /// Compare two cabins under this key.
    ///
    /// Cabins compare equal on unsupported fields.
    pub fn compare(&self, a: &Cabin, b: &Cabin) -> Ordering {
        match (self.field.value(a), self.field.value(b)) {
            (Some(a), Some(b)) => self.direction.apply(a.cmp(&b)),
            _ => Ordering::Equal,
        }
    }

    /// Stable sort of `cabins` in place.
    pub fn sort(&self, cabins: &mut [&Cabin]) {
        if !self.is_orderable() {
            return;
        }

        cabins.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::from_param(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_start_date_ascending() {
        let sort_by = SortBy::default();

        assert_eq!(sort_by.field, SortField::Unsupported("startDate".to_string()));
        assert_eq!(sort_by.direction, SortDirection::Ascending);
        assert!(!sort_by.is_orderable());
    }

    #[test]
    fn direction_other_than_asc_is_descending() {
        assert_eq!(
            SortBy::from_param(Some("regularPrice-desc")).direction,
            SortDirection::Descending
        );
        assert_eq!(
            SortBy::from_param(Some("regularPrice-sideways")).direction,
            SortDirection::Descending
        );
        assert_eq!(
            SortBy::from_param(Some("regularPrice")).direction,
            SortDirection::Descending
        );
    }

    #[test]
    fn only_first_two_segments_are_used() {
        let sort_by = SortBy::from_param(Some("maxCapacity-asc-extra"));

        assert_eq!(sort_by.field, SortField::MaxCapacity);
        assert_eq!(sort_by.direction, SortDirection::Ascending);
    }

    #[test]
    fn field_names_round_trip() {
        for name in ["id", "maxCapacity", "regularPrice", "discount", "name"] {
            assert_eq!(SortField::from_name(name).name(), name);
        }
    }
}
