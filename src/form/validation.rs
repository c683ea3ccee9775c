//! Field validation

use crate::{
    cabins::{CabinDraft, CabinImage},
    form::{
        FormMode,
        errors::{CabinField, FieldErrors, ValidationError},
        values::{CabinFormValues, ImageField},
    },
};

const DESCRIPTION_MIN_LENGTH: usize = 10;

/// Validate `values` and assemble the draft to submit.
///
/// All fields are checked so every failure is reported at once. The discount
/// is compared against the regular price currently in the form.
///
/// # Errors
///
/// Returns the per-field failures when any field is invalid.
pub fn validate(values: &CabinFormValues, mode: FormMode) -> Result<CabinDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = values.name.as_str();

    if name.is_empty() {
        errors.insert(CabinField::Name, ValidationError::Required);
    }

    let max_capacity = record(
        &mut errors,
        CabinField::MaxCapacity,
        parse_at_least(&values.max_capacity, 1, ValidationError::CapacityTooLow)
            .and_then(|value| u32::try_from(value).map_err(|_overflow| ValidationError::TooLarge)),
    );

    let regular_price = record(
        &mut errors,
        CabinField::RegularPrice,
        parse_at_least(&values.regular_price, 1, ValidationError::PriceTooLow)
            .and_then(|value| u64::try_from(value).map_err(|_overflow| ValidationError::TooLarge)),
    );

    let discount = record(
        &mut errors,
        CabinField::Discount,
        parse_at_least(&values.discount, 0, ValidationError::NegativeDiscount)
            .and_then(|value| u64::try_from(value).map_err(|_overflow| ValidationError::TooLarge))
            .and_then(|discount| match regular_price {
                Some(price) if discount > price => Err(ValidationError::DiscountExceedsPrice),
                _ => Ok(discount),
            }),
    );

    let description = values.description.as_str();

    if description.is_empty() {
        errors.insert(CabinField::Description, ValidationError::Required);
    } else if description.chars().count() < DESCRIPTION_MIN_LENGTH {
        errors.insert(CabinField::Description, ValidationError::DescriptionTooShort);
    }

    let image = resolve_image(&values.image);

    if image.is_none() && mode.requires_image() {
        errors.insert(CabinField::Image, ValidationError::Required);
    }

    match (max_capacity, regular_price, discount) {
        (Some(max_capacity), Some(regular_price), Some(discount)) if errors.is_empty() => {
            Ok(CabinDraft {
                name: name.to_string(),
                max_capacity,
                regular_price,
                discount,
                description: description.to_string(),
                image,
            })
        }
        _ => Err(errors),
    }
}

/// Turn the raw image field into the image to submit.
///
/// An existing reference is kept as-is; a selection resolves to its first file.
pub fn resolve_image(field: &ImageField) -> Option<CabinImage> {
    match field {
        ImageField::Empty => None,
        ImageField::Existing(reference) if reference.trim().is_empty() => None,
        ImageField::Existing(reference) => Some(CabinImage::Existing(reference.clone())),
        ImageField::Selected(files) => files.first().cloned().map(CabinImage::Upload),
    }
}

fn parse_at_least(raw: &str, min: i64, below_min: ValidationError) -> Result<i64, ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required);
    }

    let value: i64 = raw.parse().map_err(|_invalid| ValidationError::NotANumber)?;

    if value < min {
        return Err(below_min);
    }

    Ok(value)
}

fn record<T>(
    errors: &mut FieldErrors,
    field: CabinField,
    result: Result<T, ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(field, error);
            None
        }
    }
}
