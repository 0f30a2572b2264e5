use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub button_type: &'static str,
    pub disabled: bool,
    pub loading: bool,
}

impl Button {
    /// Primary submit button; disabled and relabeled while a submission is pending.
    #[must_use]
    pub fn submit(label: &str, pending_label: &str, pending: bool) -> Self {
        Self {
            label: if pending { pending_label } else { label }.to_string(),
            variant: ButtonVariant::Primary,
            button_type: "submit",
            disabled: pending,
            loading: pending,
        }
    }

    /// Secondary outline button with no action attached.
    #[must_use]
    pub fn outline(label: &str) -> Self {
        Self {
            label: label.to_string(),
            variant: ButtonVariant::Outline,
            button_type: "button",
            disabled: false,
            loading: false,
        }
    }
}
