//! Cabins
//!
//! Domain core of the cabins administration client: the cabin model, the
//! list view filter/sort pipeline, the create/edit form and table rendering.

pub mod cabins;
pub mod fixtures;
pub mod form;
pub mod prelude;
pub mod table;
pub mod view;
