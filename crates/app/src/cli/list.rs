use clap::Args;

use cabins_app::{
    context::AppContext,
    list::{view_params, view_params_from_query},
};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Discount filter (all, no-discount, with-discount)
    #[arg(long)]
    discount: Option<String>,

    /// Sort key as `<field>-<direction>`, e.g. `regularPrice-desc`
    #[arg(long)]
    sort_by: Option<String>,

    /// Query string such as `?discount=with-discount&sortBy=discount-asc`
    #[arg(long, conflicts_with_all = ["discount", "sort_by"])]
    query: Option<String>,
}

pub(crate) async fn run(context: &AppContext, args: ListArgs) -> Result<(), String> {
    let params = match &args.query {
        Some(query) => view_params_from_query(query),
        None => view_params(args.discount.as_deref(), args.sort_by.as_deref()),
    };

    let rendered = context
        .table()
        .render(&params)
        .await
        .map_err(|error| error.to_string())?;

    println!("{rendered}");

    Ok(())
}
