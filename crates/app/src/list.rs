//! Cabin list loader.

use std::sync::Arc;

use tracing::{debug, warn};

use cabins::{
    cabins::Cabin,
    table,
    view::{DiscountFilter, ListDisplay, QueryValues, ViewParams},
};

use crate::{
    cabins::{CabinsService, CabinsServiceError},
    query::{CABINS_QUERY_KEY, QueryCache},
};

/// Read `discount`/`sortBy` values, logging filter values that fall back to `all`.
#[must_use]
pub fn view_params(discount: Option<&str>, sort_by: Option<&str>) -> ViewParams {
    if let Some(raw) = discount.filter(|raw| !raw.is_empty())
        && let Err(error) = raw.parse::<DiscountFilter>()
    {
        warn!("{error}, showing all cabins");
    }

    ViewParams::new(discount, sort_by)
}

/// Read view parameters from a query string, with the same fallback logging as [`view_params`].
#[must_use]
pub fn view_params_from_query(query: &str) -> ViewParams {
    let values = QueryValues::parse(query);

    view_params(values.discount.as_deref(), values.sort_by.as_deref())
}

/// Loads the cabins collection through the query cache and renders it.
pub struct CabinTable {
    service: Arc<dyn CabinsService>,
    cache: Arc<QueryCache<Vec<Cabin>>>,
}

impl CabinTable {
    #[must_use]
    pub fn new(service: Arc<dyn CabinsService>, cache: Arc<QueryCache<Vec<Cabin>>>) -> Self {
        Self { service, cache }
    }

    /// Fetch the collection, reusing cached data when it is still fresh.
    ///
    /// # Errors
    ///
    /// Returns the service error when the fetch fails.
    pub async fn load(&self) -> Result<Arc<Vec<Cabin>>, CabinsServiceError> {
        self.cache
            .fetch(CABINS_QUERY_KEY, || self.service.list_cabins())
            .await
    }

    /// Render whatever the cache currently holds without fetching.
    #[must_use]
    pub fn render_current(&self, params: &ViewParams) -> String {
        let state = self.cache.snapshot(CABINS_QUERY_KEY);
        let list = ListDisplay::new(
            state.data.as_deref().map(Vec::as_slice),
            state.is_loading(),
            params,
        );
        let rows = list.rows().len();

        debug!(rows, status = ?state.status, "rendering cabins");

        table::render(&list)
    }

    /// Load the collection and render the working set.
    ///
    /// # Errors
    ///
    /// Returns the service error when the fetch fails.
    pub async fn render(&self, params: &ViewParams) -> Result<String, CabinsServiceError> {
        self.load().await?;

        Ok(self.render_current(params))
    }
}
