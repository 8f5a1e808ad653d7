//! Validator wrapping for terminal handles.

use std::any::Any;
use std::fmt;

use super::{Kind, Value};
use crate::describe::FieldMeta;
use crate::error::SetError;
use crate::options::Validator;

/// A terminal handle whose `set` first consults a validator.
pub(crate) struct Validated<'a> {
    inner: Box<dyn Value + 'a>,
    validator: Validator,
    meta: FieldMeta,
}

impl<'a> Validated<'a> {
    pub(crate) const fn new(inner: Box<dyn Value + 'a>, validator: Validator, meta: FieldMeta) -> Self {
        Self {
            inner,
            validator,
            meta,
        }
    }
}

impl fmt::Display for Validated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Value for Validated<'_> {
    fn set(&mut self, raw: &str) -> Result<(), SetError> {
        (self.validator)(raw, &self.meta).map_err(SetError::Validation)?;
        self.inner.set(raw)
    }

    fn get(&self) -> Option<&dyn Any> {
        self.inner.get()
    }

    fn is_bool_flag(&self) -> bool {
        self.inner.is_bool_flag()
    }

    fn kind(&self) -> Kind {
        self.inner.kind()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::BoxError;
    use crate::value::ScalarValue;
    use anyhow::{Result, ensure};
    use rstest::rstest;

    fn validator<F>(check: F) -> Validator
    where
        F: Fn(&str, &FieldMeta) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Arc::new(check)
    }

    const META: FieldMeta = FieldMeta {
        name: "port",
        type_name: "u16",
        exported: true,
        embedded: false,
        tags: &[],
    };

    #[rstest]
    fn rejection_leaves_storage_untouched() {
        let mut port = 80_u16;
        {
            let reject = validator(|_, _| Err("nope".into()));
            let mut value = Validated::new(Box::new(ScalarValue::new(&mut port)), reject, META);
            let err = value.set("8080").err();
            assert!(matches!(err, Some(SetError::Validation(_))));
        }
        assert_eq!(port, 80);
    }

    #[rstest]
    fn validator_sees_raw_input_and_field() -> Result<()> {
        let mut port = 80_u16;
        {
            let short_ports = validator(|raw, meta| {
                if meta.name == "port" && raw.len() <= 5 {
                    Ok(())
                } else {
                    Err(format!("bad {}: {raw}", meta.name).into())
                }
            });
            let mut value =
                Validated::new(Box::new(ScalarValue::new(&mut port)), short_ports, META);
            value.set("8080")?;
            ensure!(value.to_string() == "8080");
            ensure!(value.kind() == Kind::Uint);
        }
        ensure!(port == 8080);
        Ok(())
    }
}
