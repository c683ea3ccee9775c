//! Cabin image storage.

use async_trait::async_trait;
use mockall::automock;

use cabins::cabins::ImageUpload;

use crate::supabase::{SupabaseClient, SupabaseError};

/// Default bucket holding cabin photos.
pub const DEFAULT_IMAGE_BUCKET: &str = "cabin-images";

#[derive(Debug, Clone)]
pub struct SupabaseImageStorage {
    client: SupabaseClient,
    bucket: String,
}

impl SupabaseImageStorage {
    #[must_use]
    pub fn new(client: SupabaseClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ImageStorage for SupabaseImageStorage {
    fn public_url(&self, name: &str) -> String {
        self.client.public_object_url(&self.bucket, name)
    }

    async fn upload(&self, name: &str, image: ImageUpload) -> Result<(), SupabaseError> {
        self.client
            .upload(&self.bucket, name, &image.content_type, image.bytes)
            .await
    }
}

#[automock]
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Public URL the object `name` is served from once uploaded.
    fn public_url(&self, name: &str) -> String;

    /// Upload `image` as object `name`.
    async fn upload(&self, name: &str, image: ImageUpload) -> Result<(), SupabaseError>;
}
