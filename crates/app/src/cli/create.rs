use clap::Args;

use cabins_app::context::AppContext;

use super::fields::{CabinFieldArgs, report};

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    #[command(flatten)]
    fields: CabinFieldArgs,
}

pub(crate) async fn run(context: &AppContext, args: CreateArgs) -> Result<(), String> {
    let form = context.form(None);

    args.fields.apply(&form).await?;

    report(form.submit().await)
}
