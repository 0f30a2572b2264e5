//! Form state shared between the view and an in-flight submission. The handle
//! is cheap to clone; all clones observe the same values, errors and
//! submission flag. Locks are never held across an await point.

use super::{
    outcome::SubmissionOutcome,
    schema::{FieldErrors, FieldValues, Schema},
};
use crate::common::AppError;
use serde::de::DeserializeOwned;
use std::{
    fmt,
    future::Future,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

#[derive(Clone)]
pub struct FormState {
    shared: Arc<Shared>,
}

struct Shared {
    schema: Schema,
    inner: RwLock<Inner>,
}

struct Inner {
    values: FieldValues,
    errors: FieldErrors,
    failure: Option<AppError>,
    submitting: bool,
    submit_count: u32,
}

impl Inner {
    fn new(schema: &Schema) -> Self {
        Self {
            values: FieldValues::empty(schema),
            errors: FieldErrors::default(),
            failure: None,
            submitting: false,
            submit_count: 0,
        }
    }
}

/// Clears the submission flag when the submit future completes or is dropped.
struct InFlight<'a> {
    state: &'a FormState,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.write().submitting = false;
    }
}

impl FormState {
    /// Creates a state with every schema field set to the empty string.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        let inner = Inner::new(&schema);
        Self {
            shared: Arc::new(Shared {
                schema,
                inner: RwLock::new(inner),
            }),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.shared.schema
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.shared
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.shared
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Updates a field value. Returns false if the schema has no such field.
    ///
    /// Once the form has been submitted, the changed field is re-validated
    /// immediately so its inline error tracks the input.
    pub fn set(&self, field: &str, value: impl Into<String>) -> bool {
        let Some(name) = self.shared.schema.lookup(field) else {
            return false;
        };
        let value = value.into();

        let mut inner = self.write();
        if inner.submit_count > 0 {
            match self.shared.schema.validate_field(name, &value) {
                Some(message) => inner.errors.insert(name, message),
                None => inner.errors.remove(name),
            }
        }
        inner.values.insert(name, value);
        true
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<String> {
        self.read().values.get(field).map(ToString::to_string)
    }

    #[must_use]
    pub fn values(&self) -> FieldValues {
        self.read().values.clone()
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.read().errors.clone()
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<String> {
        self.read().errors.get(field).map(ToString::to_string)
    }

    /// Error of the last finished submission, if it failed.
    #[must_use]
    pub fn failure(&self) -> Option<AppError> {
        self.read().failure.clone()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.read().submitting
    }

    #[must_use]
    pub fn submit_count(&self) -> u32 {
        self.read().submit_count
    }

    /// Restores the initial empty values and clears errors.
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.values = FieldValues::empty(&self.shared.schema);
        inner.errors = FieldErrors::default();
        inner.failure = None;
        inner.submit_count = 0;
    }

    /// Validates the form and, when every field passes, hands the typed values
    /// to `handler` and awaits it.
    ///
    /// Invalid forms store their errors and never call `handler`. While a
    /// handler is running, further calls return [`SubmissionOutcome::Busy`].
    pub async fn submit<V, T, F, Fut>(&self, handler: F) -> SubmissionOutcome<T>
    where
        V: DeserializeOwned,
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let values = {
            let mut inner = self.write();
            if inner.submitting {
                return SubmissionOutcome::Busy;
            }
            inner.submit_count = inner.submit_count.saturating_add(1);

            if let Err(errors) = self.shared.schema.validate(&inner.values) {
                inner.errors = errors.clone();
                return SubmissionOutcome::Invalid(errors);
            }

            inner.errors = FieldErrors::default();
            inner.failure = None;
            inner.submitting = true;
            inner.values.clone()
        };

        let guard = InFlight { state: self };
        let result = match values.decode::<V>() {
            Ok(values) => handler(values).await,
            Err(err) => Err(err),
        };
        drop(guard);

        match result {
            Ok(value) => SubmissionOutcome::Success(value),
            Err(err) => {
                self.write().failure = Some(err.clone());
                SubmissionOutcome::Failed(err)
            }
        }
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        formatter
            .debug_struct("FormState")
            .field("fields", &self.shared.schema.field_names().collect::<Vec<_>>())
            .field("errors", &inner.errors)
            .field("failure", &inner.failure)
            .field("submitting", &inner.submitting)
            .finish_non_exhaustive()
    }
}
