//! Regular-expression handles.

use std::any::Any;
use std::fmt;

use regex::Regex;

use super::{Kind, Value};
use crate::error::SetError;

/// Handle binding an `Option<Regex>` field.
///
/// The field stays `None` until a pattern is set. Rendering yields the
/// source pattern, or the empty string when unset.
pub struct PatternValue<'a> {
    target: &'a mut Option<Regex>,
}

impl<'a> PatternValue<'a> {
    /// Binds `target`.
    #[must_use]
    pub const fn new(target: &'a mut Option<Regex>) -> Self {
        Self { target }
    }
}

impl fmt::Display for PatternValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target.as_ref().map_or("", Regex::as_str))
    }
}

impl Value for PatternValue<'_> {
    fn set(&mut self, raw: &str) -> Result<(), SetError> {
        let compiled = Regex::new(raw).map_err(|err| SetError::parse(Kind::Pattern, raw, err.to_string()))?;
        *self.target = Some(compiled);
        Ok(())
    }

    fn get(&self) -> Option<&dyn Any> {
        Some(&*self.target)
    }

    fn kind(&self) -> Kind {
        Kind::Pattern
    }
}
