use crate::{
    cli::{
        actions::{render, submit, Action},
        commands::{config as config_args, forms},
    },
    common::{
        config::{normalize_value, ConfigOverrides, MessageOverride},
        AppConfig,
    },
};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;

/// Command line argument and schema field name for each login input.
const LOGIN_FIELDS: &[(&str, &str)] = &[
    (forms::ARG_EMAIL, "email"),
    (forms::ARG_PASSWORD, "password"),
];

const REGISTER_FIELDS: &[(&str, &str)] = &[
    (forms::ARG_FIRST_NAME, "firstName"),
    (forms::ARG_LAST_NAME, "lastName"),
    (forms::ARG_EMAIL, "email"),
    (forms::ARG_PASSWORD, "password"),
];

/// # Errors
/// Returns an error if the subcommand is missing or the configuration is invalid.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((forms::CMD_LOGIN, sub)) => Ok(Action::Login(submit_args(sub, LOGIN_FIELDS)?)),
        Some((forms::CMD_REGISTER, sub)) => {
            Ok(Action::Register(submit_args(sub, REGISTER_FIELDS)?))
        }
        Some((forms::CMD_RENDER, sub)) => Ok(Action::Render(render_args(sub)?)),
        Some((name, _)) => bail!("unknown command: {name}"),
        None => bail!("missing command, see --help"),
    }
}

/// Builds the configuration from the global flags and their environment variables.
///
/// # Errors
/// Returns an error if a `--message` pair is malformed or the API base URL is invalid.
pub fn config(matches: &ArgMatches) -> Result<AppConfig> {
    let messages = matches
        .get_many::<String>(config_args::ARG_MESSAGE)
        .into_iter()
        .flatten()
        .map(|pair| MessageOverride::parse(pair))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --message")?;

    let mut config = AppConfig::default();
    config.apply_overrides(ConfigOverrides {
        api_base_url: matches
            .get_one::<String>(config_args::ARG_API_BASE_URL)
            .and_then(|value| normalize_value(value)),
        app_base_url: matches
            .get_one::<String>(config_args::ARG_APP_BASE_URL)
            .and_then(|value| normalize_value(value)),
        timeout_seconds: matches.get_one::<u64>(config_args::ARG_TIMEOUT).copied(),
        messages,
    });

    config.validate().context("invalid --api-base-url")?;

    Ok(config)
}

fn submit_args(matches: &ArgMatches, fields: &[(&str, &str)]) -> Result<submit::Args> {
    let values = fields
        .iter()
        .filter_map(|(arg, field)| {
            matches
                .get_one::<String>(arg)
                .map(|value| ((*field).to_string(), value.clone()))
        })
        .collect();

    Ok(submit::Args {
        config: config(matches)?,
        values,
        prompt: !matches.get_flag(config_args::ARG_NO_PROMPT),
    })
}

fn render_args(matches: &ArgMatches) -> Result<render::Args> {
    let form = match matches.get_one::<String>(forms::ARG_FORM).map(String::as_str) {
        Some(forms::CMD_LOGIN) => render::Form::Login,
        Some(forms::CMD_REGISTER) => render::Form::Register,
        other => bail!("unknown form: {}", other.unwrap_or_default()),
    };

    let format = match matches.get_one::<String>(forms::ARG_FORMAT).map(String::as_str) {
        Some("json") => render::Format::Json,
        _ => render::Format::Text,
    };

    Ok(render::Args {
        config: config(matches)?,
        form,
        format,
    })
}
