//! Repeatable counter flag (`-vvv`).

use std::any::Any;
use std::fmt;

use super::{Kind, Scalar, Value};
use crate::error::SetError;

/// A flag that counts its occurrences.
///
/// Setting the empty string increments the count. Any other input is
/// parsed as an integer and replaces it, so `--verbose=3` and `-vvv`
/// agree.
///
/// # Examples
///
/// ```rust
/// use sflags::{Counter, Value};
///
/// let mut verbosity = Counter::default();
/// verbosity.set("").unwrap();
/// verbosity.set("").unwrap();
/// assert_eq!(verbosity.0, 2);
/// verbosity.set("5").unwrap();
/// assert_eq!(verbosity.to_string(), "5");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter(pub i64);

impl Counter {
    /// Current count.
    #[must_use]
    pub const fn count(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Value for Counter {
    fn set(&mut self, raw: &str) -> Result<(), SetError> {
        if raw.is_empty() {
            self.0 = self
                .0
                .checked_add(1)
                .ok_or_else(|| SetError::parse(Kind::Counter, raw, "counter overflow"))?;
            return Ok(());
        }
        self.0 = i64::parse(raw).map_err(|err| match err {
            SetError::Parse { input, reason, .. } => SetError::Parse {
                kind: Kind::Counter,
                input,
                reason,
            },
            other => other,
        })?;
        Ok(())
    }

    fn get(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn is_bool_flag(&self) -> bool {
        true
    }

    fn kind(&self) -> Kind {
        Kind::Counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;

    #[rstest]
    fn empty_input_increments() -> Result<()> {
        let mut count = Counter(1);
        count.set("")?;
        count.set("")?;
        ensure!(count == Counter(3));
        Ok(())
    }

    #[rstest]
    fn explicit_value_replaces_count() -> Result<()> {
        let mut count = Counter(7);
        count.set("2")?;
        ensure!(count.count() == 2);
        Ok(())
    }

    #[rstest]
    fn garbage_reports_counter_kind() {
        let mut count = Counter::default();
        let err = count.set("lots").err();
        assert!(matches!(
            err,
            Some(SetError::Parse {
                kind: Kind::Counter,
                ..
            })
        ));
        assert_eq!(count, Counter(0));
    }

    #[rstest]
    fn counters_take_no_argument() {
        let count = Counter::default();
        assert!(count.is_bool_flag());
        assert_eq!(count.kind(), Kind::Counter);
    }
}
