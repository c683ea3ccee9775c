//! Supabase REST and storage client.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{
    Client, RequestBuilder, Response,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use zeroize::Zeroizing;

use crate::supabase::errors::SupabaseError;

/// Ask PostgREST to answer with a single object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Escaped in object names so they stay a single path segment.
const OBJECT_NAME: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Configuration for connecting to a Supabase project.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `"https://abcd.supabase.co"`.
    pub url: String,

    /// Anon or service-role API key.
    pub key: Zeroizing<String>,
}

impl Debug for SupabaseConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the PostgREST and storage endpoints of a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    http: Client,
}

impl SupabaseClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(mut config: SupabaseConfig) -> Self {
        config.url = config.url.trim_end_matches('/').to_string();

        Self {
            config,
            http: Client::new(),
        }
    }

    /// URL of a table endpoint.
    #[must_use]
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.url)
    }

    /// URL objects are uploaded to.
    #[must_use]
    pub fn object_url(&self, bucket: &str, name: &str) -> String {
        format!(
            "{}/storage/v1/object/{bucket}/{}",
            self.config.url,
            utf8_percent_encode(name, OBJECT_NAME)
        )
    }

    /// Public URL an uploaded object is served from.
    #[must_use]
    pub fn public_object_url(&self, bucket: &str, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{}",
            self.config.url,
            utf8_percent_encode(name, OBJECT_NAME)
        )
    }

    /// Fetch every row of `table`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn select_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, SupabaseError> {
        let response = self
            .authorized(self.http.get(self.table_url(table)))
            .query(&[("select", "*")])
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Fetch the row of `table` with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, when no row matches, or on an unexpected body.
    pub async fn select_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
    ) -> Result<T, SupabaseError> {
        let response = self
            .authorized(self.http.get(self.table_url(table)))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Insert `row` into `table` and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn insert<B, T>(&self, table: &str, row: &B) -> Result<T, SupabaseError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .authorized(self.http.post(self.table_url(table)))
            .query(&[("select", "*")])
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Replace the fields of the row with the given id and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, when no row matches, or on an unexpected body.
    pub async fn update<B, T>(&self, table: &str, id: i64, row: &B) -> Result<T, SupabaseError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .authorized(self.http.patch(self.table_url(table)))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Delete the row with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure.
    pub async fn delete(&self, table: &str, id: i64) -> Result<(), SupabaseError> {
        let response = self
            .authorized(self.http.delete(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        ensure_success(response).await?;

        Ok(())
    }

    /// Upload `bytes` as object `name` in `bucket`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when storage rejects the object.
    pub async fn upload(
        &self,
        bucket: &str,
        name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), SupabaseError> {
        let response = self
            .authorized(self.http.post(self.object_url(bucket, name)))
            .header(CONTENT_TYPE, content_type)
            .header("cache-control", "3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        ensure_success(response).await?;

        Ok(())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.config.key.as_str())
            .bearer_auth(self.config.key.as_str())
    }
}

async fn ensure_success(response: Response) -> Result<Response, SupabaseError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    Err(SupabaseError::UnexpectedResponse { status, body })
}
