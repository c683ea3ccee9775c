use clap::{Parser, Subcommand};

use cabins_app::{
    config::{CacheConfig, LoggingConfig, SupabaseArgs},
    context::AppContext,
    observability,
};

mod create;
mod delete;
mod duplicate;
mod edit;
mod fields;
mod list;

#[derive(Debug, Parser)]
#[command(name = "cabins-app", about = "Cabins admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    supabase: SupabaseArgs,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(flatten)]
    cache: CacheConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List cabins
    List(list::ListArgs),

    /// Create a cabin
    Create(create::CreateArgs),

    /// Edit a cabin
    Edit(edit::EditArgs),

    /// Delete a cabin
    Delete(delete::DeleteArgs),

    /// Duplicate a cabin
    Duplicate(duplicate::DuplicateArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init_subscriber(&self.logging).map_err(|error| error.to_string())?;

        let context = AppContext::from_supabase(
            self.supabase.client_config(),
            &self.supabase.bucket,
            self.cache.stale_time(),
        );

        match self.command {
            Commands::List(args) => list::run(&context, args).await,
            Commands::Create(args) => create::run(&context, args).await,
            Commands::Edit(args) => edit::run(&context, args).await,
            Commands::Delete(args) => delete::run(&context, args).await,
            Commands::Duplicate(args) => duplicate::run(&context, args).await,
        }
    }
}
