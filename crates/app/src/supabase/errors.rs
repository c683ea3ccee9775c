//! Supabase client errors.

use thiserror::Error;

/// Errors that can occur when communicating with Supabase.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Supabase returned a non-2xx response.
    #[error("unexpected response from Supabase ({status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code.
        status: u16,

        /// Response body, as text.
        body: String,
    },
}
