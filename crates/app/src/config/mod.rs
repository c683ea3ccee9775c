//! CLI configuration

use std::time::Duration;

use clap::Args;

pub(crate) mod observability;
pub(crate) mod supabase;

pub use observability::{LogFormat, LoggingConfig};
pub use supabase::SupabaseArgs;

/// Query cache settings.
#[derive(Debug, Args)]
pub struct CacheConfig {
    /// Milliseconds fetched cabins stay fresh before a read refetches them
    #[arg(long, env = "CACHE_STALE_TIME_MS", default_value_t = 0)]
    pub stale_time_ms: u64,
}

impl CacheConfig {
    #[must_use]
    pub fn stale_time(&self) -> Duration {
        Duration::from_millis(self.stale_time_ms)
    }
}
