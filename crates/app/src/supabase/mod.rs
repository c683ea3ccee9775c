//! Supabase

mod client;
mod errors;

pub use client::{SupabaseClient, SupabaseConfig};
pub use errors::SupabaseError;
