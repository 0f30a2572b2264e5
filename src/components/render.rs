//! Terminal rendering of a [`FormView`] as a framed card.

use super::{
    alert::AlertKind,
    button::{Button, ButtonVariant},
    card::FormView,
};

/// Renders the card as plain text, one frame line per row.
#[must_use]
pub fn text(view: &FormView) -> String {
    let mut rows = vec![view.title.clone(), view.description.clone(), String::new()];

    for field in &view.fields {
        match &field.aside {
            Some(link) => rows.push(format!("{}  ({} -> {})", field.label, link.label, link.href)),
            None => rows.push(field.label.clone()),
        }
        if field.value.is_empty() {
            rows.push(format!("[ e.g. {} ]", field.placeholder));
        } else {
            rows.push(format!("[ {} ]", field.value));
        }
        if let Some(error) = &field.error {
            rows.push(format!("  ! {error}"));
        }
    }

    rows.push(String::new());
    rows.push(button(&view.primary));
    rows.push(button(&view.secondary));

    if let Some(alert) = &view.alert {
        let marker = match alert.kind {
            AlertKind::Error => "error",
        };
        rows.push(String::new());
        rows.push(format!("{marker}: {}", alert.message));
    }

    rows.push(String::new());
    rows.push(format!(
        "{} {} <{}>",
        view.cross_link_prompt, view.cross_link.label, view.cross_link.href
    ));

    frame(&rows)
}

fn button(button: &Button) -> String {
    let label = if button.disabled {
        format!("{} (disabled)", button.label)
    } else {
        button.label.clone()
    };
    match button.variant {
        ButtonVariant::Primary => format!("[[ {label} ]]"),
        ButtonVariant::Outline => format!("( {label} )"),
    }
}

fn frame(rows: &[String]) -> String {
    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or_default();
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = String::with_capacity((width + 4) * (rows.len() + 2));
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        let padding = width - row.chars().count();
        out.push_str("| ");
        out.push_str(row);
        out.push_str(&" ".repeat(padding));
        out.push_str(" |\n");
    }
    out.push_str(&border);
    out.push('\n');
    out
}
