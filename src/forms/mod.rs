//! Generic form engine: a schema, shared state, and a submission that posts the
//! validated values and navigates on success. Concrete forms implement
//! [`FormKind`] and are used through [`AuthForm`].

pub mod outcome;
pub mod schema;
pub mod state;
pub mod submission;

use self::{outcome::SubmissionOutcome, schema::Schema, state::FormState, submission::Submission};
use crate::{
    common::{ApiClient, AppConfig, AppError},
    components::{FormView, Layout},
    routes::Navigator,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, marker::PhantomData, sync::Arc};
use tracing::{debug, error, info, warn};

/// Static description of one form.
pub trait FormKind {
    /// Typed payload decoded from the validated fields and sent as JSON.
    type Values: Serialize + DeserializeOwned + fmt::Debug + Send;
    /// Parsed 2xx response body.
    type Response: DeserializeOwned + Send;

    /// Short name used in logs.
    const NAME: &'static str;

    fn schema() -> Schema;

    fn submission() -> Submission;

    fn layout() -> Layout;

    /// Runs after the response is parsed and before navigation.
    fn on_success(_response: &Self::Response) {}
}

/// A mounted form: state, API client and navigator for one [`FormKind`].
pub struct AuthForm<K: FormKind> {
    state: FormState,
    client: ApiClient,
    navigator: Arc<dyn Navigator>,
    app_base_url: String,
    kind: PhantomData<K>,
}

impl<K: FormKind> AuthForm<K> {
    /// Creates the form with empty values, applying configured message overrides.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the API client cannot be built.
    pub fn new(config: &AppConfig, navigator: Arc<dyn Navigator>) -> Result<Self, AppError> {
        let mut schema = K::schema();
        for entry in &config.messages {
            if !schema.override_message(&entry.field, &entry.message) {
                warn!(form = K::NAME, field = %entry.field, "message override for unknown field");
            }
        }

        Ok(Self {
            state: FormState::new(schema),
            client: ApiClient::new(config)?,
            navigator,
            app_base_url: config.app_base_url.clone(),
            kind: PhantomData,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Updates a field; see [`FormState::set`].
    pub fn set(&self, field: &str, value: impl Into<String>) -> bool {
        self.state.set(field, value)
    }

    /// Validates, posts and navigates.
    ///
    /// Nothing is sent if a field is invalid. Failures are logged and returned;
    /// the form keeps its values and exposes the failure through its view.
    pub async fn submit(&self) -> SubmissionOutcome<K::Response> {
        let submission = K::submission();
        let client = &self.client;
        let navigator = &self.navigator;

        let outcome = self
            .state
            .submit(|values: K::Values| async move {
                info!(form = K::NAME, url = %client.url(submission.endpoint), "sending request");
                debug!(form = K::NAME, payload = ?values, "request payload");

                let response: K::Response = submission.send(client, &values).await?;
                K::on_success(&response);
                navigator.push(submission.success_path);
                Ok(response)
            })
            .await;

        match &outcome {
            SubmissionOutcome::Invalid(errors) => {
                debug!(form = K::NAME, %errors, "validation failed");
            }
            SubmissionOutcome::Failed(err) => {
                error!(form = K::NAME, error = %err, "submission failed");
            }
            SubmissionOutcome::Busy => {
                debug!(form = K::NAME, "submission already in flight");
            }
            SubmissionOutcome::Success(_) => {}
        }

        outcome
    }

    /// Current view model for rendering.
    #[must_use]
    pub fn view(&self) -> FormView {
        FormView::build(&K::layout(), &self.state, &self.app_base_url)
    }
}

impl<K: FormKind> fmt::Debug for AuthForm<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthForm")
            .field("kind", &K::NAME)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
