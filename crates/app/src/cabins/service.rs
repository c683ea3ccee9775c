//! Cabins service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{error, info, warn};
use uuid::Uuid;

use cabins::cabins::{Cabin, CabinDraft, CabinId, CabinImage, ImageUpload};

use crate::{
    cabins::{
        errors::CabinsServiceError,
        repository::{CabinPayload, CabinsRepository, SupabaseCabinsRepository},
        storage::{ImageStorage, SupabaseImageStorage},
    },
    supabase::SupabaseClient,
};

#[derive(Clone)]
pub struct RemoteCabinsService {
    repository: Arc<dyn CabinsRepository>,
    storage: Arc<dyn ImageStorage>,
}

impl RemoteCabinsService {
    #[must_use]
    pub fn new(repository: Arc<dyn CabinsRepository>, storage: Arc<dyn ImageStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// Service backed by a Supabase project, storing photos in `bucket`.
    #[must_use]
    pub fn supabase(client: SupabaseClient, bucket: &str) -> Self {
        Self::new(
            Arc::new(SupabaseCabinsRepository::new(client.clone())),
            Arc::new(SupabaseImageStorage::new(client, bucket)),
        )
    }

    /// Work out the stored image path and, for new files, what still has to be uploaded.
    fn resolve_image(&self, image: Option<CabinImage>) -> (Option<String>, Option<(String, ImageUpload)>) {
        match image {
            None => (None, None),
            Some(CabinImage::Existing(reference)) => (Some(reference), None),
            Some(CabinImage::Upload(upload)) => {
                let name = upload.object_name(&Uuid::now_v7().simple().to_string());

                (Some(self.storage.public_url(&name)), Some((name, upload)))
            }
        }
    }

    async fn roll_back_create(&self, cabin: CabinId) {
        if let Err(source) = self.repository.delete_cabin(cabin).await {
            warn!(cabin_id = %cabin, "failed to remove cabin after image upload failure: {source}");
        }
    }
}

#[async_trait]
impl CabinsService for RemoteCabinsService {
    #[tracing::instrument(name = "cabins.list", skip(self))]
    async fn list_cabins(&self) -> Result<Vec<Cabin>, CabinsServiceError> {
        self.repository.list_cabins().await.map_err(|source| {
            error!("failed to fetch cabins: {source}");

            CabinsServiceError::Fetch(source)
        })
    }

    #[tracing::instrument(name = "cabins.get", skip(self), fields(cabin_id = %cabin))]
    async fn get_cabin(&self, cabin: CabinId) -> Result<Cabin, CabinsServiceError> {
        self.repository.get_cabin(cabin).await.map_err(|source| {
            error!("failed to fetch cabin: {source}");

            CabinsServiceError::NotFound(source)
        })
    }

    #[tracing::instrument(
        name = "cabins.upsert",
        skip(self, draft),
        fields(cabin_id = tracing::field::Empty, name = %draft.name)
    )]
    async fn upsert_cabin(
        &self,
        draft: CabinDraft,
        cabin: Option<CabinId>,
    ) -> Result<Cabin, CabinsServiceError> {
        let CabinDraft {
            name,
            max_capacity,
            regular_price,
            discount,
            description,
            image,
        } = draft;

        let (image, pending_upload) = self.resolve_image(image);

        let payload = CabinPayload {
            name,
            max_capacity,
            regular_price,
            discount,
            description,
            image,
        };

        let stored = match cabin {
            None => self.repository.insert_cabin(payload).await.map_err(|source| {
                error!("failed to create cabin: {source}");

                CabinsServiceError::Create(source)
            })?,
            Some(id) => self
                .repository
                .update_cabin(id, payload)
                .await
                .map_err(|source| {
                    error!(cabin_id = %id, "failed to edit cabin: {source}");

                    CabinsServiceError::Edit(source)
                })?,
        };

        tracing::Span::current().record("cabin_id", tracing::field::display(stored.id));

        if let Some((name, upload)) = pending_upload {
            if let Err(source) = self.storage.upload(&name, upload).await {
                error!(cabin_id = %stored.id, "failed to upload cabin image {name}: {source}");

                if cabin.is_some() {
                    return Err(CabinsServiceError::EditImageUpload(source));
                }

                self.roll_back_create(stored.id).await;

                return Err(CabinsServiceError::CreateImageUpload(source));
            }
        }

        info!(cabin_id = %stored.id, "saved cabin");

        Ok(stored)
    }

    #[tracing::instrument(name = "cabins.delete", skip(self), fields(cabin_id = %cabin))]
    async fn delete_cabin(&self, cabin: CabinId) -> Result<(), CabinsServiceError> {
        self.repository.delete_cabin(cabin).await.map_err(|source| {
            error!("failed to delete cabin: {source}");

            CabinsServiceError::Delete(source)
        })?;

        info!("deleted cabin");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CabinsService: Send + Sync {
    /// Retrieves all cabins.
    async fn list_cabins(&self) -> Result<Vec<Cabin>, CabinsServiceError>;

    /// Retrieve a single cabin.
    async fn get_cabin(&self, cabin: CabinId) -> Result<Cabin, CabinsServiceError>;

    /// Creates a cabin when `cabin` is `None`, otherwise replaces its fields.
    async fn upsert_cabin(
        &self,
        draft: CabinDraft,
        cabin: Option<CabinId>,
    ) -> Result<Cabin, CabinsServiceError>;

    /// Deletes a cabin.
    async fn delete_cabin(&self, cabin: CabinId) -> Result<(), CabinsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        cabins::{repository::MockCabinsRepository, storage::MockImageStorage},
        supabase::SupabaseError,
        test::make_cabin,
    };

    use super::*;

    const PUBLIC_PREFIX: &str = "https://project.supabase.co/storage/v1/object/public/cabin-images/";

    fn remote_error() -> SupabaseError {
        SupabaseError::UnexpectedResponse {
            status: 500,
            body: "boom".to_string(),
        }
    }

    fn storage_with_public_urls() -> MockImageStorage {
        let mut storage = MockImageStorage::new();

        storage
            .expect_public_url()
            .returning(|name| format!("{PUBLIC_PREFIX}{name}"));

        storage
    }

    fn service(repository: MockCabinsRepository, storage: MockImageStorage) -> RemoteCabinsService {
        RemoteCabinsService::new(Arc::new(repository), Arc::new(storage))
    }

    fn draft(image: Option<CabinImage>) -> CabinDraft {
        CabinDraft {
            name: "009".to_string(),
            max_capacity: 3,
            regular_price: 275,
            discount: 25,
            description: "Quiet cabin close to the river".to_string(),
            image,
        }
    }

    #[tokio::test]
    async fn list_cabins_returns_remote_rows() -> TestResult {
        let mut repository = MockCabinsRepository::new();

        repository
            .expect_list_cabins()
            .once()
            .return_once(|| Ok(vec![make_cabin(1), make_cabin(2)]));

        let cabins = service(repository, MockImageStorage::new())
            .list_cabins()
            .await?;

        assert_eq!(cabins.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn list_cabins_failure_uses_fixed_message() {
        let mut repository = MockCabinsRepository::new();

        repository
            .expect_list_cabins()
            .once()
            .return_once(|| Err(remote_error()));

        let result = service(repository, MockImageStorage::new())
            .list_cabins()
            .await;

        assert!(
            matches!(&result, Err(CabinsServiceError::Fetch(_))),
            "expected Fetch, got {result:?}"
        );
        assert_eq!(
            result.err().map(|error| error.to_string()).as_deref(),
            Some("We couldn't get the cabins from the database")
        );
    }

    #[tokio::test]
    async fn create_with_upload_stores_public_url_then_uploads() -> TestResult {
        let mut repository = MockCabinsRepository::new();
        let mut storage = storage_with_public_urls();

        repository
            .expect_insert_cabin()
            .once()
            .withf(|payload| {
                payload.name == "009"
                    && payload.image.as_deref().is_some_and(|image| {
                        image.starts_with(PUBLIC_PREFIX) && image.ends_with("-cabin-009.jpg")
                    })
            })
            .return_once(|_| Ok(make_cabin(9)));

        storage
            .expect_upload()
            .once()
            .withf(|name, image| name.ends_with("-cabin-009.jpg") && image.bytes == vec![1, 2, 3])
            .return_once(|_, _| Ok(()));

        repository.expect_update_cabin().never();
        repository.expect_delete_cabin().never();

        let upload = ImageUpload::new("cabin-009.jpg", vec![1, 2, 3]);

        let created = service(repository, storage)
            .upsert_cabin(draft(Some(CabinImage::Upload(upload))), None)
            .await?;

        assert_eq!(created.id, CabinId::new(9));

        Ok(())
    }

    #[tokio::test]
    async fn edit_with_existing_image_skips_upload() -> TestResult {
        let mut repository = MockCabinsRepository::new();
        let mut storage = MockImageStorage::new();

        repository
            .expect_update_cabin()
            .once()
            .withf(|cabin, payload| {
                *cabin == CabinId::new(7)
                    && payload.image.as_deref() == Some("https://example.com/7.jpg")
            })
            .return_once(|_, _| Ok(make_cabin(7)));

        repository.expect_insert_cabin().never();
        storage.expect_public_url().never();
        storage.expect_upload().never();

        let existing = CabinImage::Existing("https://example.com/7.jpg".to_string());

        let edited = service(repository, storage)
            .upsert_cabin(draft(Some(existing)), Some(CabinId::new(7)))
            .await?;

        assert_eq!(edited.id, CabinId::new(7));

        Ok(())
    }

    #[tokio::test]
    async fn failed_upload_after_create_removes_the_cabin() {
        let mut repository = MockCabinsRepository::new();
        let mut storage = storage_with_public_urls();

        repository
            .expect_insert_cabin()
            .once()
            .return_once(|_| Ok(make_cabin(9)));

        storage
            .expect_upload()
            .once()
            .return_once(|_, _| Err(remote_error()));

        repository
            .expect_delete_cabin()
            .once()
            .withf(|cabin| *cabin == CabinId::new(9))
            .return_once(|_| Ok(()));

        let upload = ImageUpload::new("cabin-009.jpg", vec![1]);

        let result = service(repository, storage)
            .upsert_cabin(draft(Some(CabinImage::Upload(upload))), None)
            .await;

        assert!(
            matches!(result, Err(CabinsServiceError::CreateImageUpload(_))),
            "expected CreateImageUpload, got {result:?}"
        );
    }

    #[tokio::test]
    async fn failed_upload_after_edit_keeps_the_cabin() {
        let mut repository = MockCabinsRepository::new();
        let mut storage = storage_with_public_urls();

        repository
            .expect_update_cabin()
            .once()
            .return_once(|_, _| Ok(make_cabin(4)));

        storage
            .expect_upload()
            .once()
            .return_once(|_, _| Err(remote_error()));

        repository.expect_delete_cabin().never();

        let upload = ImageUpload::new("cabin-004.jpg", vec![1]);

        let result = service(repository, storage)
            .upsert_cabin(draft(Some(CabinImage::Upload(upload))), Some(CabinId::new(4)))
            .await;

        assert!(
            matches!(result, Err(CabinsServiceError::EditImageUpload(_))),
            "expected EditImageUpload, got {result:?}"
        );
    }

    #[tokio::test]
    async fn failed_insert_reports_create_error() {
        let mut repository = MockCabinsRepository::new();

        repository
            .expect_insert_cabin()
            .once()
            .return_once(|_| Err(remote_error()));

        let result = service(repository, MockImageStorage::new())
            .upsert_cabin(draft(None), None)
            .await;

        assert_eq!(
            result.err().map(|error| error.to_string()).as_deref(),
            Some("Cabin could not be created")
        );
    }

    #[tokio::test]
    async fn delete_failure_uses_fixed_message() {
        let mut repository = MockCabinsRepository::new();

        repository
            .expect_delete_cabin()
            .once()
            .withf(|cabin| *cabin == CabinId::new(3))
            .return_once(|_| Err(remote_error()));

        let result = service(repository, MockImageStorage::new())
            .delete_cabin(CabinId::new(3))
            .await;

        assert_eq!(
            result.err().map(|error| error.to_string()).as_deref(),
            Some("We couldn't delete the cabin from the database")
        );
    }
}
