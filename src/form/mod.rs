//! Create/edit form
//!
//! One form serves both modes. The mode is fixed when the form is built:
//! supplying a cabin to edit selects edit mode, otherwise the form creates.

pub mod errors;
pub mod validation;
pub mod values;

use crate::cabins::{Cabin, CabinDraft, CabinId};

pub use errors::{CabinField, FieldError, FieldErrors, ValidationError};
pub use validation::{resolve_image, validate};
pub use values::{CabinFormValues, ImageField};

/// Which mutation a submission feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Create a new cabin.
    Create,

    /// Replace the cabin with this identifier.
    Edit(CabinId),
}

impl FormMode {
    /// Only new cabins must come with a photo.
    pub fn requires_image(self) -> bool {
        matches!(self, Self::Create)
    }
}

/// Validated submission, routed to the matching mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CabinSubmission {
    /// Create a cabin from the draft.
    Create(CabinDraft),

    /// Replace the fields of an existing cabin.
    Edit {
        /// Cabin being edited.
        id: CabinId,

        /// Full replacement field set.
        draft: CabinDraft,
    },
}

impl CabinSubmission {
    /// The submitted field set.
    pub fn draft(&self) -> &CabinDraft {
        match self {
            Self::Create(draft) | Self::Edit { draft, .. } => draft,
        }
    }
}

/// Form state: mode, current values and the last validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinForm {
    mode: FormMode,
    values: CabinFormValues,
    errors: FieldErrors,
}

impl CabinForm {
    /// Build the form, in edit mode when `cabin_to_edit` is given.
    pub fn new(cabin_to_edit: Option<&Cabin>) -> Self {
        match cabin_to_edit {
            Some(cabin) => Self {
                mode: FormMode::Edit(cabin.id),
                values: CabinFormValues::from(cabin),
                errors: FieldErrors::default(),
            },
            None => Self {
                mode: FormMode::Create,
                values: CabinFormValues::default(),
                errors: FieldErrors::default(),
            },
        }
    }

    /// Current mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether the form edits an existing cabin.
    pub fn is_edit_session(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Current values.
    pub fn values(&self) -> &CabinFormValues {
        &self.values
    }

    /// Mutable access to the values, for input handling.
    pub fn values_mut(&mut self) -> &mut CabinFormValues {
        &mut self.values
    }

    /// Failures from the last submission attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Cabin",
            FormMode::Edit(_) => "Edit Cabin",
        }
    }

    /// Validate the current values and route them to a mutation.
    ///
    /// Failures are also kept on the form for inline display.
    ///
    /// # Errors
    ///
    /// Returns the per-field failures when validation fails; no submission is produced.
    pub fn submit(&mut self) -> Result<CabinSubmission, FieldErrors> {
        match validate(&self.values, self.mode) {
            Ok(draft) => {
                self.errors.clear();

                Ok(match self.mode {
                    FormMode::Create => CabinSubmission::Create(draft),
                    FormMode::Edit(id) => CabinSubmission::Edit { id, draft },
                })
            }
            Err(errors) => {
                self.errors = errors.clone();

                Err(errors)
            }
        }
    }

    /// Clear every field back to the blank defaults. The mode is kept.
    pub fn reset(&mut self) {
        self.values = CabinFormValues::default();
        self.errors.clear();
    }
}

impl Default for CabinForm {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cabins::{CabinImage, ImageUpload};

    use super::*;

    fn cabin_7() -> Cabin {
        Cabin {
            id: CabinId::new(7),
            name: "Cabin 7".to_string(),
            max_capacity: 4,
            regular_price: 100,
            discount: 0,
            description: Some("Cosy cabin for a family of four".to_string()),
            image: Some("https://example.com/cabin-images/7.jpg".to_string()),
        }
    }

    #[test]
    fn create_mode_starts_blank_with_zero_discount() {
        let form = CabinForm::new(None);

        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.values().discount, "0");
        assert_eq!(form.values().description, "");
        assert_eq!(form.values().name, "");
        assert_eq!(form.submit_label(), "Create Cabin");
    }

    #[test]
    fn create_submission_with_fresh_file_takes_create_path() -> TestResult {
        let mut form = CabinForm::new(None);

        *form.values_mut() = CabinFormValues {
            name: "008".to_string(),
            max_capacity: "10".to_string(),
            regular_price: "500".to_string(),
            discount: "0".to_string(),
            description: "Large cabin for groups of friends".to_string(),
            image: ImageField::Selected(vec![ImageUpload::new("cabin-008.jpg", vec![1, 2])]),
        };

        let submission = form.submit()?;

        assert!(
            matches!(&submission, CabinSubmission::Create(draft) if draft.name == "008"),
            "expected create submission, got {submission:?}"
        );

        Ok(())
    }

    #[test]
    fn edit_mode_prefills_everything_but_the_identifier() {
        let form = CabinForm::new(Some(&cabin_7()));

        assert_eq!(form.mode(), FormMode::Edit(CabinId::new(7)));
        assert_eq!(form.values().name, "Cabin 7");
        assert_eq!(form.values().regular_price, "100");
        assert_eq!(
            form.values().image,
            ImageField::Existing("https://example.com/cabin-images/7.jpg".to_string())
        );
        assert_eq!(form.submit_label(), "Edit Cabin");
    }

    #[test]
    fn unchanged_image_is_submitted_as_existing_reference() -> TestResult {
        let mut form = CabinForm::new(Some(&cabin_7()));

        let submission = form.submit()?;

        assert_eq!(
            submission,
            CabinSubmission::Edit {
                id: CabinId::new(7),
                draft: CabinDraft {
                    name: "Cabin 7".to_string(),
                    max_capacity: 4,
                    regular_price: 100,
                    discount: 0,
                    description: "Cosy cabin for a family of four".to_string(),
                    image: Some(CabinImage::Existing(
                        "https://example.com/cabin-images/7.jpg".to_string()
                    )),
                },
            }
        );

        Ok(())
    }

    #[test]
    fn rejected_submission_keeps_values_and_records_errors() {
        let mut form = CabinForm::new(Some(&cabin_7()));

        form.values_mut().discount = "150".to_string();

        let result = form.submit();

        assert!(result.is_err(), "discount above price must be rejected");
        assert_eq!(form.values().discount, "150");
        assert_eq!(
            form.errors().message(CabinField::Discount).as_deref(),
            Some("discound should be less than actual price")
        );
    }

    #[test]
    fn reset_clears_fields_and_errors() {
        let mut form = CabinForm::new(Some(&cabin_7()));

        form.values_mut().name = String::new();
        let _rejected = form.submit();

        form.reset();

        assert_eq!(form.values(), &CabinFormValues::default());
        assert!(form.errors().is_empty());
    }
}
