//! Raw form values

use crate::cabins::{Cabin, ImageUpload};

/// Raw image input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageField {
    /// Nothing selected.
    #[default]
    Empty,

    /// Reference to the photo already stored for the cabin.
    Existing(String),

    /// Files picked by the user.
    Selected(Vec<ImageUpload>),
}

/// Field values as entered, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinFormValues {
    /// Cabin name.
    pub name: String,

    /// Maximum capacity.
    pub max_capacity: String,

    /// Regular price.
    pub regular_price: String,

    /// Discount.
    pub discount: String,

    /// Description for the website.
    pub description: String,

    /// Cabin photo.
    pub image: ImageField,
}

impl Default for CabinFormValues {
    /// Blank form: everything empty except a zero discount.
    fn default() -> Self {
        Self {
            name: String::new(),
            max_capacity: String::new(),
            regular_price: String::new(),
            discount: "0".to_string(),
            description: String::new(),
            image: ImageField::Empty,
        }
    }
}

impl From<&Cabin> for CabinFormValues {
    /// Prefill from a stored cabin. The identifier is not a form field.
    fn from(cabin: &Cabin) -> Self {
        Self {
            name: cabin.name.clone(),
            max_capacity: cabin.max_capacity.to_string(),
            regular_price: cabin.regular_price.to_string(),
            discount: cabin.discount.to_string(),
            description: cabin.description.clone().unwrap_or_default(),
            image: cabin
                .image
                .clone()
                .map_or(ImageField::Empty, ImageField::Existing),
        }
    }
}
