//! Line-based prompting for form fields on an interactive terminal.

use crate::components::{FieldLayout, InputKind};
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Writes the field prompt to `output` and reads one line from `input`.
///
/// # Errors
/// Returns an error if writing fails or `input` is closed.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, field: &FieldLayout) -> Result<String> {
    match field.kind {
        // Input is echoed; the hint keeps that from being a surprise.
        InputKind::Password => write!(output, "{} (visible): ", field.label)?,
        InputKind::Text | InputKind::Email => {
            write!(output, "{} [{}]: ", field.label, field.placeholder)?;
        }
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while reading {}", field.label);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
