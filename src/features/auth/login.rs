use super::types::{LoginCredentials, LoginResponse};
use crate::{
    components::{CrossLink, FieldLayout, InputKind, Layout},
    forms::{
        schema::{Rule, Schema},
        submission::{ErrorBody, Submission},
        FormKind,
    },
    routes,
};
use tracing::{info, warn};

pub const ENDPOINT: &str = "/api/v1/users/login";

pub const EMAIL_MESSAGE: &str = "Invalid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 6 characters long";
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Email + password sign-in. Navigates home on success.
#[derive(Clone, Copy, Debug)]
pub struct Login;

impl FormKind for Login {
    type Values = LoginCredentials;
    type Response = LoginResponse;

    const NAME: &'static str = "login";

    fn schema() -> Schema {
        Schema::new()
            .field("email", [Rule::email(EMAIL_MESSAGE)])
            .field(
                "password",
                [Rule::min_length(MIN_PASSWORD_LENGTH, PASSWORD_MESSAGE)],
            )
    }

    fn submission() -> Submission {
        Submission {
            endpoint: ENDPOINT,
            success_path: routes::HOME,
            error_body: ErrorBody::Capture,
        }
    }

    fn layout() -> Layout {
        Layout {
            title: "Login",
            description: "Enter your email below to login to your account",
            fields: vec![
                FieldLayout::new("email", "Email Address", "m@example.com", InputKind::Email),
                FieldLayout::new("password", "Password", "Password", InputKind::Password)
                    .with_aside("Forgot your password?", "#"),
            ],
            submit_label: "Login",
            pending_label: "Logging in...",
            provider_label: "Login with Google",
            cross_link: CrossLink {
                prompt: "Don't have an account?",
                label: "Sign up",
                path: routes::REGISTER,
            },
        }
    }

    fn on_success(response: &LoginResponse) {
        if response.has_token() {
            info!("token received, login successful");
        } else {
            warn!("login succeeded but no token received");
        }
    }
}
