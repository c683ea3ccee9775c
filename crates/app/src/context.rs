//! App Context

use std::{sync::Arc, time::Duration};

use cabins::cabins::Cabin;

use crate::{
    cabins::{CabinRowActions, CabinsService, RemoteCabinsService},
    form::CabinFormController,
    list::CabinTable,
    notify::{ConsoleNotifier, Notifier},
    query::QueryCache,
    supabase::{SupabaseClient, SupabaseConfig},
};

/// Services shared by the list, form and row actions.
#[derive(Clone)]
pub struct AppContext {
    pub cabins: Arc<dyn CabinsService>,
    pub cache: Arc<QueryCache<Vec<Cabin>>>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        cabins: Arc<dyn CabinsService>,
        cache: Arc<QueryCache<Vec<Cabin>>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cabins,
            cache,
            notifier,
        }
    }

    /// Build application context talking to a Supabase project.
    #[must_use]
    pub fn from_supabase(config: SupabaseConfig, bucket: &str, stale_time: Duration) -> Self {
        Self::new(
            Arc::new(RemoteCabinsService::supabase(SupabaseClient::new(config), bucket)),
            Arc::new(QueryCache::new(stale_time)),
            Arc::new(ConsoleNotifier),
        )
    }

    #[must_use]
    pub fn table(&self) -> CabinTable {
        CabinTable::new(Arc::clone(&self.cabins), Arc::clone(&self.cache))
    }

    /// Form in edit mode when `cabin_to_edit` is given.
    #[must_use]
    pub fn form(&self, cabin_to_edit: Option<&Cabin>) -> CabinFormController {
        CabinFormController::new(
            Arc::clone(&self.cabins),
            Arc::clone(&self.cache),
            Arc::clone(&self.notifier),
            cabin_to_edit,
        )
    }

    #[must_use]
    pub fn row_actions(&self) -> CabinRowActions {
        CabinRowActions::new(
            Arc::clone(&self.cabins),
            Arc::clone(&self.cache),
            Arc::clone(&self.notifier),
        )
    }
}
