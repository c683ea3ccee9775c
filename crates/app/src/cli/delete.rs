use clap::Args;

use cabins::cabins::CabinId;
use cabins_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Cabin to delete
    id: i64,
}

pub(crate) async fn run(context: &AppContext, args: DeleteArgs) -> Result<(), String> {
    context
        .row_actions()
        .delete(CabinId::new(args.id))
        .await
        .map_err(|error| format!("failed to delete cabin {}: {error}", args.id))
}
