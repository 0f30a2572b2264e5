use super::types::{RegistrationDetails, RegistrationResponse};
use crate::{
    components::{CrossLink, FieldLayout, InputKind, Layout},
    forms::{
        schema::{Rule, Schema},
        submission::{ErrorBody, Submission},
        FormKind,
    },
    routes,
};
use tracing::info;

use super::login::{EMAIL_MESSAGE, MIN_PASSWORD_LENGTH, PASSWORD_MESSAGE};

pub const ENDPOINT: &str = "/api/v1/users";

/// Shared by both name fields; override `lastName` through configuration for
/// a field-specific message.
pub const NAME_MESSAGE: &str = "First name is required";
/// Reported instead of the response body when registration is rejected.
pub const REJECTED_MESSAGE: &str = "Network response was not ok";

/// Account creation. Navigates to the login page on success.
#[derive(Clone, Copy, Debug)]
pub struct Register;

impl FormKind for Register {
    type Values = RegistrationDetails;
    type Response = RegistrationResponse;

    const NAME: &'static str = "registration";

    fn schema() -> Schema {
        Schema::new()
            .field("firstName", [Rule::min_length(1, NAME_MESSAGE)])
            .field("lastName", [Rule::min_length(1, NAME_MESSAGE)])
            .field("email", [Rule::email(EMAIL_MESSAGE)])
            .field(
                "password",
                [Rule::min_length(MIN_PASSWORD_LENGTH, PASSWORD_MESSAGE)],
            )
    }

    fn submission() -> Submission {
        Submission {
            endpoint: ENDPOINT,
            success_path: routes::LOGIN,
            error_body: ErrorBody::Discard(REJECTED_MESSAGE),
        }
    }

    fn layout() -> Layout {
        Layout {
            title: "Sign Up",
            description: "Enter your information to create an account",
            fields: vec![
                FieldLayout::new("firstName", "First Name", "First name", InputKind::Text),
                FieldLayout::new("lastName", "Last Name", "Last name", InputKind::Text),
                FieldLayout::new("email", "Email Address", "m@example.com", InputKind::Email),
                FieldLayout::new("password", "Password", "Password", InputKind::Password),
            ],
            submit_label: "Create an account",
            pending_label: "Creating account...",
            provider_label: "Sign up with Google",
            cross_link: CrossLink {
                prompt: "Already have an account?",
                label: "Sign in",
                path: routes::LOGIN,
            },
        }
    }

    fn on_success(response: &RegistrationResponse) {
        info!(response = %response, "registration successful");
    }
}

#[cfg(test)]
mod tests {
    use super::{Register, NAME_MESSAGE};
    use crate::forms::{schema::FieldValues, FormKind};

    fn values(first: &str, last: &str) -> FieldValues {
        let schema = Register::schema();
        let mut values = FieldValues::empty(&schema);
        values.insert("firstName", first.to_string());
        values.insert("lastName", last.to_string());
        values.insert("email", "ada@example.com".to_string());
        values.insert("password", "engine1".to_string());
        values
    }

    #[test]
    fn each_name_field_is_required_independently() {
        let schema = Register::schema();
        assert!(schema.validate(&values("Ada", "Lovelace")).is_ok());

        let errors = schema.validate(&values("", "Lovelace")).err().unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("firstName"), Some(NAME_MESSAGE));

        let errors = schema.validate(&values("Ada", "")).err().unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("lastName"), Some(NAME_MESSAGE));
    }

    #[test]
    fn last_name_message_can_be_overridden() {
        let mut schema = Register::schema();
        assert!(schema.override_message("lastName", "Last name is required"));

        let errors = schema.validate(&values("", "")).err().unwrap_or_default();
        assert_eq!(errors.get("firstName"), Some(NAME_MESSAGE));
        assert_eq!(errors.get("lastName"), Some("Last name is required"));
    }

    #[test]
    fn layout_fields_follow_schema_order() {
        let layout = Register::layout();
        let schema = Register::schema();
        let layout_names: Vec<_> = layout.fields.iter().map(|f| f.name).collect();
        let schema_names: Vec<_> = schema.field_names().collect();
        assert_eq!(layout_names, schema_names);
    }
}
