//! Adapter registering flags on a [`clap::Command`] and feeding parsed
//! arguments back into the configuration.
//!
//! [`register`] turns each [`Flag`] into an [`Arg`]. After clap has parsed
//! the command line, [`apply`] sets every flag that appeared, falls back to
//! the flag's environment names for the rest, and reports required flags
//! that remain unset. Environment handling lives here rather than in clap
//! so several fallback names can be honoured in order.
//!
//! ```rust
//! use clap::Command;
//! use sflags::{Describe, Options, cli};
//!
//! #[derive(Describe, Default)]
//! struct Config {
//!     #[sflags(flag = "port p")]
//!     pub port: u16,
//! }
//!
//! let mut config = Config::default();
//! let mut flags = sflags::parse_struct(&mut config, &Options::default())?;
//! let matches = cli::register(Command::new("demo"), &flags).try_get_matches_from(["demo", "-p", "8080"])?;
//! cli::apply_with_env(&mut flags, &matches, |_| None)?;
//! drop(flags);
//! assert_eq!(config.port, 8080);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, warn};

use crate::error::CliError;
use crate::flag::Flag;
use crate::value::Kind;

/// Adds one argument per flag to `command`.
#[must_use]
pub fn register(command: Command, flags: &[Flag<'_>]) -> Command {
    flags.iter().fold(command, |cmd, flag| cmd.arg(to_arg(flag)))
}

fn to_arg(flag: &Flag<'_>) -> Arg {
    let mut arg = Arg::new(flag.name.clone())
        .long(flag.name.clone())
        .help(help_text(flag))
        .hide(flag.hidden);
    if let Some(short) = flag.short.as_deref().and_then(|alias| alias.chars().next()) {
        arg = arg.short(short);
    }
    if flag.value.kind() == Kind::Counter {
        arg.action(ArgAction::Count)
    } else if flag.value.is_bool_flag() {
        arg.action(ArgAction::SetTrue)
    } else {
        arg.action(ArgAction::Append)
            .num_args(1)
            .value_name(flag.value.kind().to_string().to_uppercase())
            .value_parser(clap::value_parser!(String))
    }
}

fn help_text(flag: &Flag<'_>) -> String {
    let mut parts = Vec::new();
    if !flag.usage.is_empty() {
        parts.push(flag.usage.clone());
    }
    if flag.deprecated {
        parts.push(String::from("[deprecated]"));
    }
    if !flag.def_value.is_empty() && !flag.value.is_bool_flag() {
        parts.push(format!("[default: {}]", flag.def_value));
    }
    if !flag.env_names.is_empty() {
        parts.push(format!("[env: {}]", flag.env_names.join(", ")));
    }
    parts.join(" ")
}

/// Applies `matches` to `flags`, using the process environment for
/// fallbacks.
///
/// # Errors
///
/// See [`apply_with_env`].
pub fn apply(flags: &mut [Flag<'_>], matches: &ArgMatches) -> Result<(), CliError> {
    apply_with_env(flags, matches, |name| std::env::var(name).ok())
}

/// Applies `matches` to `flags`, resolving environment fallbacks through
/// `lookup`.
///
/// Command-line occurrences take precedence. A flag absent from the
/// command line takes the first of its environment names that `lookup`
/// resolves.
///
/// # Errors
///
/// Returns [`CliError::Set`] when a value is rejected and
/// [`CliError::MissingRequired`] for a required flag that is still unset.
pub fn apply_with_env<F>(
    flags: &mut [Flag<'_>],
    matches: &ArgMatches,
    lookup: F,
) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
{
    for flag in flags.iter_mut() {
        if matches.value_source(flag.name.as_str()) == Some(ValueSource::CommandLine) {
            if flag.deprecated {
                warn!(flag = %flag.name, "flag is deprecated");
            }
            apply_occurrences(flag, matches)?;
            continue;
        }

        let fallback = flag
            .env_names
            .iter()
            .find_map(|name| lookup(name).map(|raw| (name.clone(), raw)));
        if let Some((variable, raw)) = fallback {
            debug!(flag = %flag.name, variable = %variable, "using environment fallback");
            set(flag, &raw)?;
            continue;
        }

        if flag.required {
            return Err(CliError::MissingRequired {
                flag: flag.name.clone(),
            });
        }
    }
    Ok(())
}

fn apply_occurrences(flag: &mut Flag<'_>, matches: &ArgMatches) -> Result<(), CliError> {
    let id = flag.name.clone();
    if flag.value.kind() == Kind::Counter {
        for _ in 0..matches.get_count(&id) {
            set(flag, "")?;
        }
    } else if flag.value.is_bool_flag() {
        set(flag, "true")?;
    } else if let Ok(Some(values)) = matches.try_get_many::<String>(&id) {
        for raw in values {
            set(flag, raw)?;
        }
    }
    Ok(())
}

fn set(flag: &mut Flag<'_>, raw: &str) -> Result<(), CliError> {
    flag.value.set(raw).map_err(|source| CliError::Set {
        flag: flag.name.clone(),
        source,
    })
}
