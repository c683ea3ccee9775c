//! Supabase Config

use clap::Args;
use zeroize::Zeroizing;

use crate::{
    cabins::storage::DEFAULT_IMAGE_BUCKET,
    supabase::SupabaseConfig,
};

/// Supabase project settings.
#[derive(Debug, Args)]
pub struct SupabaseArgs {
    /// Supabase project URL
    #[arg(long = "supabase-url", env = "SUPABASE_URL")]
    pub url: String,

    /// Supabase API key
    #[arg(long = "supabase-key", env = "SUPABASE_KEY", hide_env_values = true)]
    pub key: String,

    /// Storage bucket holding cabin photos
    #[arg(long = "supabase-bucket", env = "SUPABASE_BUCKET", default_value = DEFAULT_IMAGE_BUCKET)]
    pub bucket: String,
}

impl SupabaseArgs {
    #[must_use]
    pub fn client_config(&self) -> SupabaseConfig {
        SupabaseConfig {
            url: self.url.clone(),
            key: Zeroizing::new(self.key.clone()),
        }
    }
}
