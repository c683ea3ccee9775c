use clap::Args;

use cabins::cabins::CabinId;
use cabins_app::context::AppContext;

use super::fields::{CabinFieldArgs, report};

#[derive(Debug, Args)]
pub(crate) struct EditArgs {
    /// Cabin to edit
    id: i64,

    /// Fields to change; the rest keep their stored values
    #[command(flatten)]
    fields: CabinFieldArgs,
}

pub(crate) async fn run(context: &AppContext, args: EditArgs) -> Result<(), String> {
    let cabin = context
        .cabins
        .get_cabin(CabinId::new(args.id))
        .await
        .map_err(|error| error.to_string())?;

    let form = context.form(Some(&cabin));

    args.fields.apply(&form).await?;

    report(form.submit().await)
}
