//! Test helpers.

mod helpers;

pub(crate) use helpers::make_cabin;
