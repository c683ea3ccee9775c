//! Cabin table rendering

use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use crate::{cabins::Cabin, view::ListDisplay};

/// Text shown when there are no cabins to list.
pub const EMPTY_MESSAGE: &str = "No cabins could be found.";

/// Text shown while cabins are loading.
pub const LOADING_MESSAGE: &str = "Loading cabins...";

const NO_VALUE: &str = "—";

/// Render the list view state as text.
pub fn render(display: &ListDisplay<'_>) -> String {
    match display {
        ListDisplay::Empty => EMPTY_MESSAGE.to_string(),
        ListDisplay::Loading => LOADING_MESSAGE.to_string(),
        ListDisplay::Table(rows) => render_table(rows),
    }
}

fn render_table(rows: &[&Cabin]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["", "Cabin", "Capacity", "Price", "Discount"]);

    for cabin in rows {
        builder.push_record([
            image_label(cabin),
            cabin.name.clone(),
            format!("Fits up to {} guests", cabin.max_capacity),
            format_currency(cabin.regular_price),
            discount_label(cabin),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    table.to_string()
}

/// Format a whole-unit amount as US dollars.
pub fn format_currency(amount: u64) -> String {
    match i64::try_from(amount) {
        Ok(amount) => Money::from_major(amount, iso::USD).to_string(),
        Err(_overflow) => format!("${amount}"),
    }
}

fn discount_label(cabin: &Cabin) -> String {
    if cabin.has_discount() {
        format_currency(cabin.discount)
    } else {
        NO_VALUE.to_string()
    }
}

fn image_label(cabin: &Cabin) -> String {
    cabin
        .image
        .as_deref()
        .and_then(|url| url.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(NO_VALUE)
        .to_string()
}
