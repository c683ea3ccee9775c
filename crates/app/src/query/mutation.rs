//! Mutation status tracking.

use std::{
    future::Future,
    sync::{Mutex, PoisonError},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Tracks the status of one kind of write.
#[derive(Debug, Default)]
pub struct Mutation {
    status: Mutex<MutationStatus>,
}

impl Mutation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> MutationStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status() == MutationStatus::Pending
    }

    /// Run `operation`, marking the mutation pending until it settles.
    ///
    /// # Errors
    ///
    /// Returns the operation's error unchanged.
    pub async fn run<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.set(MutationStatus::Pending);

        let result = operation().await;

        self.set(if result.is_ok() {
            MutationStatus::Success
        } else {
            MutationStatus::Error
        });

        result
    }

    fn set(&self, status: MutationStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn pending_while_running_then_success() -> TestResult {
        let mutation = Mutation::new();

        assert_eq!(mutation.status(), MutationStatus::Idle);

        let value = mutation
            .run(|| async {
                assert!(mutation.is_pending());

                Ok::<_, io::Error>(5)
            })
            .await?;

        assert_eq!(value, 5);
        assert_eq!(mutation.status(), MutationStatus::Success);

        Ok(())
    }

    #[tokio::test]
    async fn failure_marks_error() {
        let mutation = Mutation::new();

        let result = mutation
            .run(|| async { Err::<(), _>("rejected".to_string()) })
            .await;

        assert!(result.is_err());
        assert_eq!(mutation.status(), MutationStatus::Error);
    }
}
