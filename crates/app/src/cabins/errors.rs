//! Cabins service errors.
//!
//! Display strings are user-facing and shown as-is in notifications.

use thiserror::Error;

use crate::supabase::SupabaseError;

#[derive(Debug, Error)]
pub enum CabinsServiceError {
    #[error("We couldn't get the cabins from the database")]
    Fetch(#[source] SupabaseError),

    #[error("Cabin could not be found")]
    NotFound(#[source] SupabaseError),

    #[error("Cabin could not be created")]
    Create(#[source] SupabaseError),

    #[error("Cabin could not be edited")]
    Edit(#[source] SupabaseError),

    #[error("Cabin image could not be uploaded and the cabin was not created")]
    CreateImageUpload(#[source] SupabaseError),

    #[error("Cabin image could not be uploaded")]
    EditImageUpload(#[source] SupabaseError),

    #[error("We couldn't delete the cabin from the database")]
    Delete(#[source] SupabaseError),
}
