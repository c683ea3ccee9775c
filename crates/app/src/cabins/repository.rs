//! Cabins Repository

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;

use cabins::cabins::{Cabin, CabinId};

use crate::supabase::{SupabaseClient, SupabaseError};

/// Remote collection holding the cabins.
pub const CABINS_TABLE: &str = "cabins";

/// Row written on insert and update.
///
/// Every field is sent; a missing image leaves the stored column untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinPayload {
    pub name: String,
    pub max_capacity: u32,
    pub regular_price: u64,
    pub discount: u64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SupabaseCabinsRepository {
    client: SupabaseClient,
}

impl SupabaseCabinsRepository {
    #[must_use]
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CabinsRepository for SupabaseCabinsRepository {
    async fn list_cabins(&self) -> Result<Vec<Cabin>, SupabaseError> {
        self.client.select_all(CABINS_TABLE).await
    }

    async fn get_cabin(&self, cabin: CabinId) -> Result<Cabin, SupabaseError> {
        self.client.select_by_id(CABINS_TABLE, cabin.get()).await
    }

    async fn insert_cabin(&self, payload: CabinPayload) -> Result<Cabin, SupabaseError> {
        self.client.insert(CABINS_TABLE, &payload).await
    }

    async fn update_cabin(
        &self,
        cabin: CabinId,
        payload: CabinPayload,
    ) -> Result<Cabin, SupabaseError> {
        self.client.update(CABINS_TABLE, cabin.get(), &payload).await
    }

    async fn delete_cabin(&self, cabin: CabinId) -> Result<(), SupabaseError> {
        self.client.delete(CABINS_TABLE, cabin.get()).await
    }
}

#[automock]
#[async_trait]
pub trait CabinsRepository: Send + Sync {
    /// Fetch every cabin.
    async fn list_cabins(&self) -> Result<Vec<Cabin>, SupabaseError>;

    /// Fetch a single cabin.
    async fn get_cabin(&self, cabin: CabinId) -> Result<Cabin, SupabaseError>;

    /// Insert a new cabin row.
    async fn insert_cabin(&self, payload: CabinPayload) -> Result<Cabin, SupabaseError>;

    /// Replace the fields of an existing row.
    async fn update_cabin(
        &self,
        cabin: CabinId,
        payload: CabinPayload,
    ) -> Result<Cabin, SupabaseError>;

    /// Delete a row.
    async fn delete_cabin(&self, cabin: CabinId) -> Result<(), SupabaseError>;
}
