//! Handles for ordered sequences.

use std::any::Any;
use std::fmt;

use super::{Kind, Scalar, Value};
use crate::error::SetError;

/// Handle binding a `Vec<T>` field.
///
/// Each `set` splits its input on `,`. The first `set` replaces whatever
/// the vector held at discovery time; later calls append, so repeated
/// command-line occurrences accumulate.
pub struct ListValue<'a, T> {
    target: &'a mut Vec<T>,
    changed: bool,
}

impl<'a, T: Scalar> ListValue<'a, T> {
    /// Binds `target`.
    #[must_use]
    pub const fn new(target: &'a mut Vec<T>) -> Self {
        Self {
            target,
            changed: false,
        }
    }
}

impl<T: Scalar> fmt::Display for ListValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.target.iter().map(Scalar::render).collect();
        write!(f, "[{}]", items.join(","))
    }
}

impl<T: Scalar> Value for ListValue<'_, T> {
    fn set(&mut self, raw: &str) -> Result<(), SetError> {
        let items = raw.split(',').map(T::parse).collect::<Result<Vec<_>, _>>()?;
        if !self.changed {
            self.target.clear();
            self.changed = true;
        }
        self.target.extend(items);
        Ok(())
    }

    fn get(&self) -> Option<&dyn Any> {
        Some(&*self.target)
    }

    fn kind(&self) -> Kind {
        Kind::List
    }
}
