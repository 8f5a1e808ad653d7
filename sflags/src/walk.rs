//! The struct walker.
//!
//! Fields are visited in declaration order, depth first. A terminal field
//! yields one [`Flag`]; a composite field contributes its children at its
//! own position. Fields that are unexported, suppressed with `-`, or of an
//! unsupported type are skipped without error. An unexported field marked
//! `embed` is only walked when it is a composite.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::describe::{Describe, Flaggable, Slot};
use crate::error::ParseError;
use crate::flag::Flag;
use crate::options::Options;
use crate::tag::{self, flag_directive};
use crate::value::{Validated, Value};

/// Describes every flag of `config`.
///
/// Unset `Option` fields (other than patterns) are filled with their
/// default in place so each flag can borrow real storage. Fields whose type
/// the registry does not support are left out of the result silently;
/// compare the number of flags against the struct if full coverage matters.
///
/// # Errors
///
/// Returns [`ParseError::MaxDepthExceeded`] when nesting goes deeper than
/// [`Options::max_depth`].
///
/// # Examples
///
/// ```rust
/// use sflags::{Describe, Options};
///
/// #[derive(Describe)]
/// struct Config {
///     #[sflags(flag = "listen l", desc = "listen address")]
///     pub listen: String,
///     pub http_port: u16,
/// }
///
/// let mut config = Config { listen: "0.0.0.0".into(), http_port: 8080 };
/// let mut flags = sflags::parse_struct(&mut config, &Options::default())?;
/// assert_eq!(flags[1].name, "http-port");
/// assert_eq!(flags[1].env_names, ["HTTP_PORT"]);
/// flags[1].value.set("9090")?;
/// drop(flags);
/// assert_eq!(config.http_port, 9090);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_struct<'a, T: Describe>(
    config: &'a mut T,
    options: &Options,
) -> Result<Vec<Flag<'a>>, ParseError> {
    let mut flags = Vec::new();
    walk(config, options, "", 0, &mut flags)?;
    Ok(flags)
}

/// Dynamic form of [`parse_struct`] accepting any registry target.
///
/// # Errors
///
/// Returns [`ParseError::NilConfig`] for `None` and
/// [`ParseError::InvalidConfigType`] when the target is a terminal value
/// rather than a struct.
pub fn parse<'a>(
    config: Option<&'a mut dyn Flaggable>,
    options: &Options,
) -> Result<Vec<Flag<'a>>, ParseError> {
    let target = config.ok_or(ParseError::NilConfig)?;
    let type_name = target.type_name();
    match target.slot() {
        Slot::Nested(describe) => {
            let mut flags = Vec::new();
            walk(describe, options, "", 0, &mut flags)?;
            Ok(flags)
        }
        Slot::Value(_) => Err(ParseError::InvalidConfigType { type_name }),
    }
}

fn walk<'a>(
    target: &'a mut dyn Describe,
    options: &Options,
    parent: &str,
    depth: usize,
    flags: &mut Vec<Flag<'a>>,
) -> Result<(), ParseError> {
    for field in target.fields() {
        let (meta, handle) = field.into_parts();
        let path = if parent.is_empty() {
            meta.name.to_owned()
        } else {
            format!("{parent}.{}", meta.name)
        };

        if !meta.exported && !meta.embedded {
            trace!(field = %path, "skipping unexported field");
            continue;
        }
        let Some(directive) = flag_directive(&meta, options) else {
            trace!(field = %path, "skipping suppressed field");
            continue;
        };
        let Some(storage) = handle else {
            trace!(field = %path, type_name = meta.type_name, "omitting field of unsupported type");
            continue;
        };

        match storage.slot() {
            Slot::Value(_) if !meta.exported => {
                trace!(field = %path, "skipping unexported embedded value");
            }
            Slot::Value(terminal) => {
                let mut value: Box<dyn Value + 'a> = terminal;
                if let Some(validator) = &options.validator {
                    value = Box::new(Validated::new(value, Arc::clone(validator), meta));
                }
                let env_names = tag::env_names(&directive.name, &meta, options);
                let def_value = value.to_string();
                debug!(flag = %directive.name, field = %path, kind = %value.kind(), "discovered flag");
                flags.push(Flag {
                    name: directive.name,
                    short: directive.short,
                    env_names,
                    usage: meta.tag(&options.desc_tag).unwrap_or_default().to_owned(),
                    hidden: directive.hidden,
                    deprecated: directive.deprecated,
                    required: directive.required,
                    value,
                    def_value,
                });
            }
            Slot::Nested(nested) => {
                if depth >= options.max_depth {
                    return Err(ParseError::MaxDepthExceeded {
                        path,
                        limit: options.max_depth,
                    });
                }
                let prefix = if meta.embedded && options.flatten {
                    options.prefix.clone()
                } else {
                    format!("{}{}", directive.name, options.flag_divider)
                };
                let child = options.nested(prefix, directive.hidden, directive.deprecated);
                debug!(field = %path, prefix = %child.prefix, "entering nested scope");
                walk(nested, &child, &path, depth + 1, flags)?;
            }
        }
    }
    Ok(())
}
