use super::prompt;
use crate::{
    common::AppConfig,
    components::{render, FieldLayout},
    forms::{outcome::SubmissionOutcome, AuthForm, FormKind},
    routes::{self, History},
};
use anyhow::{bail, Context, Result};
use std::{
    fmt,
    io::{self, IsTerminal},
    sync::Arc,
};
use tracing::debug;

pub struct Args {
    pub config: AppConfig,
    /// Field name and value pairs given on the command line.
    pub values: Vec<(String, String)>,
    pub prompt: bool,
}

impl fmt::Debug for Args {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.values.iter().map(|(name, _)| name.as_str()).collect();
        formatter
            .debug_struct("Args")
            .field("config", &self.config)
            .field("fields", &fields)
            .field("prompt", &self.prompt)
            .finish()
    }
}

/// Submits the form and prints the navigation target.
///
/// # Errors
/// Returns an error if the form stays invalid or the submission fails.
pub async fn execute<K: FormKind>(args: Args) -> Result<()> {
    let interactive = args.prompt && io::stdin().is_terminal();
    let target = submit::<K>(&args, interactive).await?;
    println!("{target}");
    Ok(())
}

/// Fills the form from `args`, submits it and returns the link of the page it
/// navigated to. Prompts for missing and invalid fields when `interactive`.
///
/// # Errors
/// Returns an error if the form stays invalid or the submission fails; the
/// rendered card is written to stderr first.
pub async fn submit<K: FormKind>(args: &Args, interactive: bool) -> Result<String> {
    let history = Arc::new(History::new());
    let form = AuthForm::<K>::new(&args.config, history.clone())?;

    for (field, value) in &args.values {
        if !form.set(field, value.as_str()) {
            debug!(form = K::NAME, field = %field, "ignoring unknown field");
        }
    }

    if interactive {
        let missing: Vec<FieldLayout> = K::layout()
            .fields
            .into_iter()
            .filter(|field| form.state().value(field.name).unwrap_or_default().is_empty())
            .collect();
        ask(&form, &missing)?;
    }

    loop {
        match form.submit().await {
            SubmissionOutcome::Success(_) => {
                let path = history
                    .current()
                    .unwrap_or_else(|| K::submission().success_path.to_string());
                return Ok(routes::href(&args.config.app_base_url, &path));
            }
            SubmissionOutcome::Invalid(errors) => {
                eprint!("{}", render::text(&form.view()));
                if !interactive {
                    bail!("{} form is invalid: {errors}", K::NAME);
                }
                let invalid: Vec<FieldLayout> = K::layout()
                    .fields
                    .into_iter()
                    .filter(|field| errors.contains(field.name))
                    .collect();
                ask(&form, &invalid)?;
            }
            SubmissionOutcome::Failed(err) => {
                eprint!("{}", render::text(&form.view()));
                return Err(err).with_context(|| format!("{} failed", K::NAME));
            }
            SubmissionOutcome::Busy => bail!("{} submission already in flight", K::NAME),
        }
    }
}

fn ask<K: FormKind>(form: &AuthForm<K>, fields: &[FieldLayout]) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();

    for field in fields {
        let value = prompt::ask(&mut input, &mut output, field)?;
        form.set(field.name, value);
    }
    Ok(())
}
