//! Create/edit form controller.
//!
//! Wires a [`CabinForm`] to the create and edit mutations: a validated
//! submission is saved through the cabins service, the cached collection is
//! invalidated, the user is notified and the form is cleared.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use cabins::{
    cabins::Cabin,
    form::{CabinForm, CabinFormValues, CabinSubmission, FieldErrors},
};

use crate::{
    cabins::{CabinsService, CabinsServiceError},
    notify::Notifier,
    query::{CABINS_QUERY_KEY, Mutation, QueryCache},
};

pub const CREATED_MESSAGE: &str = "Cabin successfully created";
pub const EDITED_MESSAGE: &str = "Cabin successfully edited";

/// Result of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    Saved(Cabin),

    /// Validation failed; no mutation ran.
    Rejected(FieldErrors),

    /// The mutation failed. The form keeps its values.
    Failed(CabinsServiceError),

    /// A mutation is still pending.
    Busy,
}

pub struct CabinFormController {
    service: Arc<dyn CabinsService>,
    cache: Arc<QueryCache<Vec<Cabin>>>,
    notifier: Arc<dyn Notifier>,
    create: Mutation,
    edit: Mutation,
    form: Mutex<CabinForm>,
}

impl CabinFormController {
    #[must_use]
    pub fn new(
        service: Arc<dyn CabinsService>,
        cache: Arc<QueryCache<Vec<Cabin>>>,
        notifier: Arc<dyn Notifier>,
        cabin_to_edit: Option<&Cabin>,
    ) -> Self {
        Self {
            service,
            cache,
            notifier,
            create: Mutation::new(),
            edit: Mutation::new(),
            form: Mutex::new(CabinForm::new(cabin_to_edit)),
        }
    }

    /// True while either mutation is pending.
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.create.is_pending() || self.edit.is_pending()
    }

    /// Copy of the current form state.
    #[must_use]
    pub fn form(&self) -> CabinForm {
        self.lock_form().clone()
    }

    pub fn update(&self, edit: impl FnOnce(&mut CabinFormValues)) {
        edit(self.lock_form().values_mut());
    }

    /// Validate and save the current values.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_working() {
            debug!("submission refused while a save is pending");

            return SubmitOutcome::Busy;
        }

        let validated = self.lock_form().submit();

        let submission = match validated {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(%errors, "cabin form rejected");

                return SubmitOutcome::Rejected(errors);
            }
        };

        let (mutation, cabin, draft, message) = match submission {
            CabinSubmission::Create(draft) => (&self.create, None, draft, CREATED_MESSAGE),
            CabinSubmission::Edit { id, draft } => (&self.edit, Some(id), draft, EDITED_MESSAGE),
        };

        match mutation
            .run(|| self.service.upsert_cabin(draft, cabin))
            .await
        {
            Ok(saved) => {
                self.cache.invalidate(CABINS_QUERY_KEY).await;
                self.notifier.success(message);
                self.lock_form().reset();

                info!(cabin_id = %saved.id, "{message}");

                SubmitOutcome::Saved(saved)
            }
            Err(error) => {
                self.notifier.error(&error.to_string());

                SubmitOutcome::Failed(error)
            }
        }
    }

    fn lock_form(&self) -> MutexGuard<'_, CabinForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
