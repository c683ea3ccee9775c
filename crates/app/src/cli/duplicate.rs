use clap::Args;

use cabins::cabins::CabinId;
use cabins_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct DuplicateArgs {
    /// Cabin to copy
    id: i64,
}

pub(crate) async fn run(context: &AppContext, args: DuplicateArgs) -> Result<(), String> {
    let cabin = context
        .cabins
        .get_cabin(CabinId::new(args.id))
        .await
        .map_err(|error| error.to_string())?;

    let copy = context
        .row_actions()
        .duplicate(&cabin)
        .await
        .map_err(|error| format!("failed to duplicate cabin {}: {error}", args.id))?;

    println!("cabin_id: {}", copy.id);
    println!("name: {}", copy.name);

    Ok(())
}
