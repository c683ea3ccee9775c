//! Cabins prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cabins::{Cabin, CabinDraft, CabinId, CabinImage, ImageUpload},
    form::{
        CabinField, CabinForm, CabinFormValues, CabinSubmission, FieldErrors, FormMode,
        ImageField, ValidationError,
    },
    table::render,
    view::{DiscountFilter, ListDisplay, SortBy, SortDirection, SortField, ViewParams, working_set},
};
