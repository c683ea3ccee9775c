//! Cabins

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Deserializer, Serialize};

pub mod image;

pub use image::{CabinImage, ImageUpload};

/// Server-assigned cabin identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CabinId(i64);

impl CabinId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CabinId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for CabinId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Cabin record as stored in the `cabins` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabin {
    /// Unique, immutable identifier.
    pub id: CabinId,

    /// Display name.
    pub name: String,

    /// Maximum number of guests.
    #[serde(deserialize_with = "null_as_zero")]
    pub max_capacity: u32,

    /// Regular nightly price.
    #[serde(deserialize_with = "null_as_zero")]
    pub regular_price: u64,

    /// Discount taken off the regular price.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub discount: u64,

    /// Description shown on the website.
    #[serde(default)]
    pub description: Option<String>,

    /// Public URL of the cabin photo.
    #[serde(default)]
    pub image: Option<String>,
}

/// Stored numeric columns are nullable; a null reads as zero.
fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Cabin {
    /// Whether the cabin is currently discounted.
    pub fn has_discount(&self) -> bool {
        self.discount > 0
    }
}

/// Field set submitted to create or replace a cabin.
///
/// Edits resubmit the whole draft; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinDraft {
    /// Display name.
    pub name: String,

    /// Maximum number of guests.
    pub max_capacity: u32,

    /// Regular nightly price.
    pub regular_price: u64,

    /// Discount taken off the regular price.
    pub discount: u64,

    /// Description shown on the website.
    pub description: String,

    /// Photo to keep or upload. `None` leaves the stored image untouched.
    pub image: Option<CabinImage>,
}

impl CabinDraft {
    /// Draft for a copy of `cabin`, sharing its photo.
    pub fn duplicate_of(cabin: &Cabin) -> Self {
        Self {
            name: format!("Copy of {}", cabin.name),
            max_capacity: cabin.max_capacity,
            regular_price: cabin.regular_price,
            discount: cabin.discount,
            description: cabin.description.clone().unwrap_or_default(),
            image: cabin.image.clone().map(CabinImage::Existing),
        }
    }
}
