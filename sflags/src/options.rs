//! Per-call traversal options.
//!
//! [`Options`] is built once by the caller and then treated as read-only.
//! The walker clones it for every nested scope so a child can override the
//! prefix and the inherited markers without affecting its siblings.

use std::fmt;
use std::sync::Arc;

use crate::describe::FieldMeta;
use crate::error::BoxError;

/// Callback consulted before every `set` on a terminal value.
///
/// It receives the raw input and the metadata of the field being set. The
/// configuration itself is not passed: the descriptors hold the only
/// mutable borrow of it while flags are being set, so a validator that
/// needs other fields must capture its own copy of them.
///
/// # Examples
///
/// ```rust
/// use sflags::{Describe, Options, SetError};
///
/// #[derive(Describe, Default)]
/// struct Config {
///     pub port: u16,
/// }
///
/// let options = Options::default().validator(|raw, meta| {
///     if meta.name == "port" && raw == "0" {
///         return Err("port 0 is reserved".into());
///     }
///     Ok(())
/// });
/// let mut config = Config::default();
/// let mut flags = sflags::parse_struct(&mut config, &options)?;
/// let err = flags[0].value.set("0").err();
/// assert!(matches!(err, Some(SetError::Validation(_))));
/// # Ok::<(), sflags::ParseError>(())
/// ```
pub type Validator = Arc<dyn Fn(&str, &FieldMeta) -> Result<(), BoxError> + Send + Sync>;

const DEFAULT_MAX_DEPTH: usize = 32;

/// Options controlling how a configuration struct is turned into flags.
///
/// # Examples
///
/// ```rust
/// use sflags::Options;
///
/// let options = Options::default()
///     .prefix("app-")
///     .env_prefix("APP_")
///     .inherit_hidden(true);
/// assert_eq!(options.name_prefix(), "app-");
/// ```
#[derive(Clone)]
pub struct Options {
    pub(crate) desc_tag: String,
    pub(crate) flag_tag: String,
    pub(crate) prefix: String,
    pub(crate) env_prefix: String,
    pub(crate) flag_divider: String,
    pub(crate) env_divider: String,
    pub(crate) flatten: bool,
    pub(crate) inherit_hidden: bool,
    pub(crate) inherit_deprecated: bool,
    pub(crate) validator: Option<Validator>,
    pub(crate) max_depth: usize,
    pub(crate) hidden: bool,
    pub(crate) deprecated: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            desc_tag: String::from("desc"),
            flag_tag: String::from("flag"),
            prefix: String::new(),
            env_prefix: String::new(),
            flag_divider: String::from("-"),
            env_divider: String::from("_"),
            flatten: true,
            inherit_hidden: false,
            inherit_deprecated: false,
            validator: None,
            max_depth: DEFAULT_MAX_DEPTH,
            hidden: false,
            deprecated: false,
        }
    }
}

impl Options {
    /// Tag key holding the usage text. Defaults to `desc`.
    #[must_use]
    pub fn desc_tag(mut self, key: impl Into<String>) -> Self {
        self.desc_tag = key.into();
        self
    }

    /// Tag key holding the flag name and markers. Defaults to `flag`.
    #[must_use]
    pub fn flag_tag(mut self, key: impl Into<String>) -> Self {
        self.flag_tag = key.into();
        self
    }

    /// Prefix prepended to every flag name not marked with `~`.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Prefix prepended to every environment name not marked with `~`.
    #[must_use]
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Word divider for flag names. Defaults to `-`.
    #[must_use]
    pub fn flag_divider(mut self, divider: impl Into<String>) -> Self {
        self.flag_divider = divider.into();
        self
    }

    /// Word divider for environment names. Defaults to `_`.
    #[must_use]
    pub fn env_divider(mut self, divider: impl Into<String>) -> Self {
        self.env_divider = divider.into();
        self
    }

    /// Whether embedded fields promote their children to the enclosing
    /// scope. Defaults to `true`.
    #[must_use]
    pub const fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Propagates a composite field's `hidden` marker to its descendants.
    #[must_use]
    pub const fn inherit_hidden(mut self, inherit: bool) -> Self {
        self.inherit_hidden = inherit;
        self
    }

    /// Propagates a composite field's `deprecated` marker to its
    /// descendants.
    #[must_use]
    pub const fn inherit_deprecated(mut self, inherit: bool) -> Self {
        self.inherit_deprecated = inherit;
        self
    }

    /// Installs a validator wrapped around every terminal value.
    #[must_use]
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, &FieldMeta) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Maximum nesting depth before traversal fails. Defaults to 32.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// The flag-name prefix in effect.
    #[must_use]
    pub const fn name_prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Derives the options for a nested scope.
    pub(crate) fn nested(&self, prefix: String, hidden: bool, deprecated: bool) -> Self {
        let mut child = self.clone();
        child.prefix = prefix;
        if self.inherit_hidden {
            child.hidden = hidden;
        }
        if self.inherit_deprecated {
            child.deprecated = deprecated;
        }
        child
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("desc_tag", &self.desc_tag)
            .field("flag_tag", &self.flag_tag)
            .field("prefix", &self.prefix)
            .field("env_prefix", &self.env_prefix)
            .field("flag_divider", &self.flag_divider)
            .field("env_divider", &self.env_divider)
            .field("flatten", &self.flatten)
            .field("inherit_hidden", &self.inherit_hidden)
            .field("inherit_deprecated", &self.inherit_deprecated)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_documented_values() {
        let options = Options::default();
        assert_eq!(options.desc_tag, "desc");
        assert_eq!(options.flag_tag, "flag");
        assert_eq!(options.flag_divider, "-");
        assert_eq!(options.env_divider, "_");
        assert!(options.flatten);
        assert!(!options.inherit_hidden && !options.inherit_deprecated);
        assert_eq!(options.max_depth, 32);
    }

    #[rstest]
    fn nested_scope_leaves_parent_untouched() {
        let parent = Options::default().prefix("app-").inherit_hidden(true);
        let child = parent.nested(String::from("app-db-"), true, true);
        assert_eq!(child.prefix, "app-db-");
        assert!(child.hidden);
        assert!(!child.deprecated, "deprecated inheritance is off");
        assert_eq!(parent.prefix, "app-");
        assert!(!parent.hidden);
    }

    #[rstest]
    fn nested_scope_without_inheritance_keeps_markers() {
        let child = Options::default().nested(String::from("db-"), true, true);
        assert!(!child.hidden && !child.deprecated);
    }

    #[rstest]
    fn debug_hides_validator_body() {
        let options = Options::default().validator(|_, _| Ok(()));
        assert!(format!("{options:?}").contains("<fn>"));
    }
}
