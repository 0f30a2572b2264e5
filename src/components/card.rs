//! Card-framed form: header, labeled inputs with inline errors, a primary
//! submit button, an external identity provider placeholder and a cross link
//! to the sibling form.

use super::{
    alert::Alert,
    button::Button,
    input::{Field, InputKind, Link},
};
use crate::{forms::state::FormState, routes};
use serde::Serialize;

/// Static copy and structure of one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldLayout>,
    pub submit_label: &'static str,
    pub pending_label: &'static str,
    pub provider_label: &'static str,
    pub cross_link: CrossLink,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    /// Link shown next to the label, such as password recovery.
    pub aside: Option<(&'static str, &'static str)>,
}

impl FieldLayout {
    #[must_use]
    pub const fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: InputKind,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            kind,
            aside: None,
        }
    }

    #[must_use]
    pub fn with_aside(mut self, label: &'static str, href: &'static str) -> Self {
        self.aside = Some((label, href));
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

/// Everything a renderer needs to draw a form at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub primary: Button,
    pub secondary: Button,
    pub cross_link_prompt: String,
    pub cross_link: Link,
    pub alert: Option<Alert>,
}

impl FormView {
    /// Binds the layout to the current values, errors and submission status.
    #[must_use]
    pub fn build(layout: &Layout, state: &FormState, app_base_url: &str) -> Self {
        let errors = state.errors();
        let fields = layout
            .fields
            .iter()
            .map(|field| Field {
                name: field.name,
                label: field.label.to_string(),
                placeholder: field.placeholder.to_string(),
                kind: field.kind,
                input_type: field.kind.html_type(),
                value: Field::display_value(field.kind, &state.value(field.name).unwrap_or_default()),
                error: errors.get(field.name).map(ToString::to_string),
                aside: field.aside.map(|(label, href)| Link {
                    label: label.to_string(),
                    href: href.to_string(),
                }),
            })
            .collect();

        Self {
            title: layout.title.to_string(),
            description: layout.description.to_string(),
            fields,
            primary: Button::submit(
                layout.submit_label,
                layout.pending_label,
                state.is_submitting(),
            ),
            secondary: Button::outline(layout.provider_label),
            cross_link_prompt: layout.cross_link.prompt.to_string(),
            cross_link: Link {
                label: layout.cross_link.label.to_string(),
                href: routes::href(app_base_url, layout.cross_link.path),
            },
            alert: state.failure().as_ref().map(Alert::error),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{CrossLink, FieldLayout, FormView, Layout};
    use crate::components::InputKind;
    use crate::forms::{schema::Rule, schema::Schema, state::FormState};

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
                path: "/auth/register",
            },
        }
    }

    fn state() -> FormState {
        FormState::new(
            Schema::new()
                .field("email", [Rule::email("Invalid email address")])
                .field("password", [Rule::min_length(6, "too short")]),
        )
    }

    #[test]
    fn binds_values_and_masks_passwords() {
        let state = state();
        state.set("email", "a@b.com");
        state.set("password", "secret1");

        let view = FormView::build(&layout(), &state, "");
        assert_eq!(view.title, "Login");
        assert_eq!(view.field("email").map(|f| f.value.as_str()), Some("a@b.com"));
        assert_eq!(
            view.field("password").map(|f| f.value.as_str()),
            Some("•••••••")
        );
        assert_eq!(
            view.field("password")
                .and_then(|f| f.aside.as_ref())
                .map(|link| link.label.as_str()),
            Some("Forgot your password?")
        );
        assert_eq!(
            view.field("password").map(|f| f.input_type),
            Some("password")
        );
        assert_eq!(view.field("email").map(|f| f.input_type), Some("email"));
        assert_eq!(view.cross_link.href, "/auth/register");
        assert!(view.alert.is_none());
        assert!(!view.primary.disabled);
    }

    #[tokio::test]
    async fn shows_inline_errors_after_submit() {
        let state = state();
        let _ = state
            .submit(|_: serde_json::Value| async { Ok(()) })
            .await;

        let view = FormView::build(&layout(), &state, "http://localhost:3000");
        assert_eq!(
            view.field("email").and_then(|f| f.error.as_deref()),
            Some("Invalid email address")
        );
        assert_eq!(
            view.field("password").and_then(|f| f.error.as_deref()),
            Some("too short")
        );
        assert_eq!(view.cross_link.href, "http://localhost:3000/auth/register");
    }
}
