//! Cabins admin application: Supabase access, query cache, form and list
//! controllers.

pub mod cabins;
pub mod config;
pub mod context;
pub mod form;
pub mod list;
pub mod notify;
pub mod observability;
pub mod query;
pub mod supabase;

#[cfg(test)]
mod test;
