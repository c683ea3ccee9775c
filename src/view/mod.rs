//! List view pipeline
//!
//! Filters the cached collection, orders what is left and decides which of
//! the empty, loading or table states to show.

pub mod filter;
pub mod params;
pub mod sort;

use crate::cabins::Cabin;

pub use filter::{DiscountFilter, UnknownDiscountFilter};
pub use params::{QueryValues, ViewParams};
pub use sort::{DEFAULT_SORT_BY, SortBy, SortDirection, SortField};

/// Filter then sort `cabins` into a new working set.
///
/// The input slice is never reordered.
pub fn working_set<'a>(cabins: &'a [Cabin], params: &ViewParams) -> Vec<&'a Cabin> {
    let mut working: Vec<&Cabin> = cabins
        .iter()
        .filter(|cabin| params.discount.matches(cabin))
        .collect();

    params.sort_by.sort(&mut working);

    working
}

/// What the list view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDisplay<'a> {
    /// Nothing to show.
    Empty,

    /// Waiting for the collection.
    Loading,

    /// One row per cabin, in order.
    Table(Vec<&'a Cabin>),
}

impl<'a> ListDisplay<'a> {
    /// Pick the display state.
    ///
    /// Missing or empty data is checked before the loading flag, so an empty
    /// cache shows [`ListDisplay::Empty`] even while a fetch is running.
    pub fn new(cabins: Option<&'a [Cabin]>, is_loading: bool, params: &ViewParams) -> Self {
        let Some(cabins) = cabins.filter(|cabins| !cabins.is_empty()) else {
            return Self::Empty;
        };

        if is_loading {
            return Self::Loading;
        }

        Self::Table(working_set(cabins, params))
    }

    /// Rows to render, empty unless showing the table.
    pub fn rows(&self) -> &[&'a Cabin] {
        match self {
            Self::Table(rows) => rows,
            Self::Empty | Self::Loading => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cabins::CabinId;

    use super::*;

    fn cabin(id: i64, regular_price: u64, discount: u64) -> Cabin {
        Cabin {
            id: CabinId::new(id),
            name: format!("{id:03}"),
            max_capacity: 2,
            regular_price,
            discount,
            description: None,
            image: None,
        }
    }

    #[test]
    fn working_set_leaves_the_collection_untouched() {
        let cabins = vec![cabin(1, 300, 0), cabin(2, 100, 10), cabin(3, 200, 0)];
        let params = ViewParams::new(None, Some("regularPrice-asc"));

        let ids: Vec<i64> = working_set(&cabins, &params)
            .iter()
            .map(|cabin| cabin.id.get())
            .collect();

        assert_eq!(ids, vec![2, 3, 1]);

        let original: Vec<i64> = cabins.iter().map(|cabin| cabin.id.get()).collect();

        assert_eq!(original, vec![1, 2, 3]);
    }

    #[test]
    fn unsupported_sort_field_keeps_filtered_order() {
        let cabins = vec![cabin(3, 300, 5), cabin(1, 100, 0), cabin(2, 200, 10)];
        let params = ViewParams::new(Some("with-discount"), Some("name-asc"));

        let ids: Vec<i64> = working_set(&cabins, &params)
            .iter()
            .map(|cabin| cabin.id.get())
            .collect();

        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn empty_collection_shows_empty_state() {
        let cabins: Vec<Cabin> = vec![];

        assert_eq!(
            ListDisplay::new(Some(&cabins), false, &ViewParams::default()),
            ListDisplay::Empty
        );
    }

    #[test]
    fn missing_data_shows_empty_state_even_while_loading() {
        assert_eq!(
            ListDisplay::new(None, true, &ViewParams::default()),
            ListDisplay::Empty
        );
    }

    #[test]
    fn loading_with_data_shows_loading_state() {
        let cabins = vec![cabin(1, 100, 0)];

        assert_eq!(
            ListDisplay::new(Some(&cabins), true, &ViewParams::default()),
            ListDisplay::Loading
        );
    }

    #[test]
    fn loaded_data_shows_table() {
        let cabins = vec![cabin(1, 100, 0), cabin(2, 200, 20)];
        let display = ListDisplay::new(Some(&cabins), false, &ViewParams::default());

        assert_eq!(display.rows().len(), 2);
    }
}
