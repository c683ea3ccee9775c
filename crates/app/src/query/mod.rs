//! Query cache and mutation state

pub mod cache;
pub mod mutation;

pub use cache::{CABINS_QUERY_KEY, QueryCache, QueryKey, QueryState, QueryStatus};
pub use mutation::{Mutation, MutationStatus};
