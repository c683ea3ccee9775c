//! Cabins

pub mod actions;
pub mod errors;
pub mod repository;
pub mod service;
pub mod storage;

pub use actions::CabinRowActions;
pub use errors::CabinsServiceError;
pub use service::*;
