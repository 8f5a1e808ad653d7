//! Flag descriptors and their serialisable documentation form.

use std::fmt;

use serde::Serialize;

use crate::value::{Kind, Value};

/// One flag discovered on a configuration struct.
///
/// `value` borrows the originating field, so setting it mutates the
/// configuration in place. `def_value` is the rendering captured at
/// discovery and is never refreshed.
pub struct Flag<'a> {
    /// Canonical flag name, prefix included.
    pub name: String,
    /// Optional short alias.
    pub short: Option<String>,
    /// Environment variables consulted in order when the flag is absent.
    pub env_names: Vec<String>,
    /// Usage text, possibly empty.
    pub usage: String,
    /// Omit from help output.
    pub hidden: bool,
    /// Warn on use.
    pub deprecated: bool,
    /// Must be supplied by the command line or the environment.
    pub required: bool,
    /// Handle bound to the field's storage.
    pub value: Box<dyn Value + 'a>,
    /// Textual default captured at discovery.
    pub def_value: String,
}

impl Flag<'_> {
    /// Snapshot of everything except the value handle.
    #[must_use]
    pub fn spec(&self) -> FlagSpec {
        FlagSpec {
            name: self.name.clone(),
            short: self.short.clone(),
            env_names: self.env_names.clone(),
            usage: self.usage.clone(),
            hidden: self.hidden,
            deprecated: self.deprecated,
            required: self.required,
            default: self.def_value.clone(),
            kind: self.value.kind(),
            is_bool_flag: self.value.is_bool_flag(),
        }
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("env_names", &self.env_names)
            .field("usage", &self.usage)
            .field("hidden", &self.hidden)
            .field("deprecated", &self.deprecated)
            .field("required", &self.required)
            .field("value", &self.value.to_string())
            .field("def_value", &self.def_value)
            .finish()
    }
}

/// Owned, serialisable description of a [`Flag`] for help and manual page
/// tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagSpec {
    /// Canonical flag name.
    pub name: String,
    /// Optional short alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Environment fallbacks in priority order.
    pub env_names: Vec<String>,
    /// Usage text.
    pub usage: String,
    /// Hidden from help output.
    pub hidden: bool,
    /// Deprecated.
    pub deprecated: bool,
    /// Required.
    pub required: bool,
    /// Default captured at discovery.
    pub default: String,
    /// Kind of the bound value.
    pub kind: Kind,
    /// Whether the flag takes no argument.
    pub is_bool_flag: bool,
}

/// Describes every flag in `flags`.
#[must_use]
pub fn specs(flags: &[Flag<'_>]) -> Vec<FlagSpec> {
    flags.iter().map(Flag::spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ScalarValue;
    use rstest::rstest;

    #[rstest]
    fn spec_reports_value_kind() {
        let mut verbose = false;
        let flag = Flag {
            name: String::from("verbose"),
            short: Some(String::from("v")),
            env_names: vec![String::from("VERBOSE")],
            usage: String::from("chatty output"),
            hidden: false,
            deprecated: false,
            required: false,
            value: Box::new(ScalarValue::new(&mut verbose)),
            def_value: String::from("false"),
        };
        let spec = flag.spec();
        assert_eq!(spec.kind, Kind::Bool);
        assert!(spec.is_bool_flag);
        assert_eq!(spec.default, "false");
        assert!(format!("{flag:?}").contains("verbose"));
    }
}
