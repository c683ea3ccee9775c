//! Form validation errors

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;
use thiserror::Error;

/// Form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CabinField {
    /// Cabin name.
    Name,

    /// Maximum capacity.
    MaxCapacity,

    /// Regular price.
    RegularPrice,

    /// Discount.
    Discount,

    /// Description for the website.
    Description,

    /// Cabin photo.
    Image,
}

impl CabinField {
    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Cabin name",
            Self::MaxCapacity => "Maximum capacity",
            Self::RegularPrice => "Regular price",
            Self::Discount => "Discount",
            Self::Description => "Description for website",
            Self::Image => "Cabin photo",
        }
    }
}

impl Display for CabinField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Reason a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No value given.
    #[error("This field is required")]
    Required,

    /// Value is not a whole number.
    #[error("This field should be a whole number")]
    NotANumber,

    /// Capacity below one guest.
    #[error("Capacity should be at least 1")]
    CapacityTooLow,

    /// Price below one.
    #[error("Price should be at least 1")]
    PriceTooLow,

    /// Discount below zero.
    #[error("Discount cannot be negative")]
    NegativeDiscount,

    /// Discount larger than the regular price.
    #[error("discound should be less than actual price")]
    DiscountExceedsPrice,

    /// Description shorter than ten characters.
    #[error("Description should be at least 10 characters long")]
    DescriptionTooShort,

    /// Value does not fit the stored type.
    #[error("This value is too large")]
    TooLarge,
}

/// A rejected field and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: CabinField,

    /// Reason.
    pub error: ValidationError,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Per-field validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(SmallVec<[FieldError; 6]>);

impl FieldErrors {
    /// Record `error` for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: CabinField, error: ValidationError) {
        self.0.retain(|existing| existing.field != field);
        self.0.push(FieldError { field, error });
    }

    /// The error recorded for `field`.
    pub fn get(&self, field: CabinField) -> Option<ValidationError> {
        self.0
            .iter()
            .find(|existing| existing.field == field)
            .map(|existing| existing.error)
    }

    /// Inline message for `field`.
    pub fn message(&self, field: CabinField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Drop all recorded failures.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            Display::fmt(error, f)?;
        }

        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
