use std::{
    error::Error as _,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use clap::Args;

use cabins::{cabins::ImageUpload, form::ImageField};
use cabins_app::form::{CabinFormController, SubmitOutcome};

/// Field values; numbers are taken as typed and validated by the form.
#[derive(Debug, Args)]
pub(crate) struct CabinFieldArgs {
    /// Cabin name
    #[arg(long)]
    name: Option<String>,

    /// Maximum number of guests
    #[arg(long)]
    max_capacity: Option<String>,

    /// Regular price per night
    #[arg(long)]
    regular_price: Option<String>,

    /// Discount off the regular price
    #[arg(long)]
    discount: Option<String>,

    /// Description shown on the website
    #[arg(long)]
    description: Option<String>,

    /// Photo file to upload
    #[arg(long)]
    image: Option<PathBuf>,
}

impl CabinFieldArgs {
    /// Overwrite the form values that were given on the command line.
    pub(crate) async fn apply(self, controller: &CabinFormController) -> Result<(), String> {
        let image = match &self.image {
            Some(path) => Some(read_image(path).await?),
            None => None,
        };

        controller.update(|values| {
            if let Some(name) = self.name {
                values.name = name;
            }

            if let Some(max_capacity) = self.max_capacity {
                values.max_capacity = max_capacity;
            }

            if let Some(regular_price) = self.regular_price {
                values.regular_price = regular_price;
            }

            if let Some(discount) = self.discount {
                values.discount = discount;
            }

            if let Some(description) = self.description {
                values.description = description;
            }

            if let Some(upload) = image {
                values.image = ImageField::Selected(vec![upload]);
            }
        });

        Ok(())
    }
}

async fn read_image(path: &Path) -> Result<ImageUpload, String> {
    let file_name = path
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| format!("invalid image path: {}", path.display()))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    Ok(ImageUpload::new(file_name, bytes))
}

/// Print the saved cabin or turn the failure into the command error.
pub(crate) fn report(outcome: SubmitOutcome) -> Result<(), String> {
    match outcome {
        SubmitOutcome::Saved(cabin) => {
            println!("cabin_id: {}", cabin.id);
            println!("name: {}", cabin.name);

            Ok(())
        }
        SubmitOutcome::Rejected(errors) => Err(errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        // The notifier has already shown the message; surface the cause.
        SubmitOutcome::Failed(error) => Err(error
            .source()
            .map_or_else(|| error.to_string(), |source| format!("caused by: {source}"))),
        SubmitOutcome::Busy => Err("a save is already in progress".to_string()),
    }
}
