use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    #[must_use]
    pub const fn html_type(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// A labeled input bound to one form field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub label: String,
    pub placeholder: String,
    pub kind: InputKind,
    /// HTML `type` attribute for web renderers.
    pub input_type: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub aside: Option<Link>,
}

impl Field {
    /// Password values are masked; other values are shown as typed.
    #[must_use]
    pub fn display_value(kind: InputKind, value: &str) -> String {
        match kind {
            InputKind::Password => "•".repeat(value.chars().count()),
            InputKind::Text | InputKind::Email => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, InputKind};

    #[test]
    fn password_values_are_masked() {
        assert_eq!(Field::display_value(InputKind::Password, "secret1"), "•••••••");
        assert_eq!(Field::display_value(InputKind::Email, "a@b.com"), "a@b.com");
        assert_eq!(InputKind::Password.html_type(), "password");
    }
}
