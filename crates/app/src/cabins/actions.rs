//! Per-row cabin actions.

use std::sync::Arc;

use tracing::info;

use cabins::cabins::{Cabin, CabinDraft, CabinId};

use crate::{
    cabins::{CabinsService, CabinsServiceError},
    form::CREATED_MESSAGE,
    notify::Notifier,
    query::{CABINS_QUERY_KEY, Mutation, QueryCache},
};

pub const DELETED_MESSAGE: &str = "Cabin successfully deleted";

/// Delete and duplicate actions offered on each table row.
pub struct CabinRowActions {
    service: Arc<dyn CabinsService>,
    cache: Arc<QueryCache<Vec<Cabin>>>,
    notifier: Arc<dyn Notifier>,
    delete: Mutation,
    duplicate: Mutation,
}

impl CabinRowActions {
    #[must_use]
    pub fn new(
        service: Arc<dyn CabinsService>,
        cache: Arc<QueryCache<Vec<Cabin>>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            cache,
            notifier,
            delete: Mutation::new(),
            duplicate: Mutation::new(),
        }
    }

    /// Delete `cabin`.
    ///
    /// # Errors
    ///
    /// Returns the service error after notifying it.
    pub async fn delete(&self, cabin: CabinId) -> Result<(), CabinsServiceError> {
        let result = self
            .delete
            .run(|| self.service.delete_cabin(cabin))
            .await;

        self.settle(result, DELETED_MESSAGE).await?;

        info!(cabin_id = %cabin, "{DELETED_MESSAGE}");

        Ok(())
    }

    /// Create a copy of `cabin` named "Copy of <name>", sharing its photo.
    ///
    /// # Errors
    ///
    /// Returns the service error after notifying it.
    pub async fn duplicate(&self, cabin: &Cabin) -> Result<Cabin, CabinsServiceError> {
        let draft = CabinDraft::duplicate_of(cabin);

        let result = self
            .duplicate
            .run(|| self.service.upsert_cabin(draft, None))
            .await;

        let copy = self.settle(result, CREATED_MESSAGE).await?;

        info!(cabin_id = %copy.id, source_id = %cabin.id, "duplicated cabin");

        Ok(copy)
    }

    async fn settle<T>(
        &self,
        result: Result<T, CabinsServiceError>,
        success: &str,
    ) -> Result<T, CabinsServiceError> {
        match result {
            Ok(value) => {
                self.cache.invalidate(CABINS_QUERY_KEY).await;
                self.notifier.success(success);

                Ok(value)
            }
            Err(error) => {
                self.notifier.error(&error.to_string());

                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use cabins::cabins::CabinImage;

    use crate::{
        cabins::MockCabinsService, notify::MockNotifier, query::MutationStatus,
        supabase::SupabaseError, test::make_cabin,
    };

    use super::*;

    fn actions(service: MockCabinsService, notifier: MockNotifier) -> CabinRowActions {
        CabinRowActions::new(
            Arc::new(service),
            Arc::new(QueryCache::default()),
            Arc::new(notifier),
        )
    }

    #[tokio::test]
    async fn delete_notifies_success() -> TestResult {
        let mut service = MockCabinsService::new();
        let mut notifier = MockNotifier::new();

        service
            .expect_delete_cabin()
            .once()
            .withf(|cabin| *cabin == CabinId::new(3))
            .return_once(|_| Ok(()));

        notifier
            .expect_success()
            .once()
            .withf(|message| message == DELETED_MESSAGE)
            .return_const(());

        let actions = actions(service, notifier);

        actions.delete(CabinId::new(3)).await?;

        assert_eq!(actions.delete.status(), MutationStatus::Success);

        Ok(())
    }

    #[tokio::test]
    async fn delete_failure_notifies_the_error() {
        let mut service = MockCabinsService::new();
        let mut notifier = MockNotifier::new();

        service.expect_delete_cabin().once().return_once(|_| {
            Err(CabinsServiceError::Delete(SupabaseError::UnexpectedResponse {
                status: 409,
                body: "referenced by bookings".to_string(),
            }))
        });

        notifier.expect_success().never();
        notifier
            .expect_error()
            .once()
            .withf(|message| message == "We couldn't delete the cabin from the database")
            .return_const(());

        let result = actions(service, notifier).delete(CabinId::new(3)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn duplicate_creates_a_copy_with_the_same_photo() -> TestResult {
        let mut service = MockCabinsService::new();
        let mut notifier = MockNotifier::new();
        let source = make_cabin(2);

        let expected_image = source.image.clone().map(CabinImage::Existing);

        service
            .expect_upsert_cabin()
            .once()
            .withf(move |draft, cabin| {
                cabin.is_none() && draft.name == "Copy of 002" && draft.image == expected_image
            })
            .return_once(|_, _| Ok(make_cabin(9)));

        notifier
            .expect_success()
            .once()
            .withf(|message| message == CREATED_MESSAGE)
            .return_const(());

        let actions = actions(service, notifier);
        let copy = actions.duplicate(&source).await?;

        assert_eq!(copy.id, CabinId::new(9));
        assert_eq!(actions.duplicate.status(), MutationStatus::Success);

        Ok(())
    }
}
