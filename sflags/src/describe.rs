//! The capability set a configuration struct exposes to the walker.
//!
//! [`Describe`] is normally implemented by `#[derive(Describe)]`. It hands
//! out every declared field together with its static metadata and a mutable
//! handle on the field's storage. [`Flaggable`] is the per-type registry
//! dispatch that turns such a handle into either a terminal [`Value`] or a
//! nested [`Describe`].

use crate::value::Value;

/// Static metadata for one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Declared identifier, without any `r#` prefix.
    pub name: &'static str,
    /// Fully qualified name of the field's type.
    pub type_name: &'static str,
    /// Whether the field has any visibility other than private.
    pub exported: bool,
    /// Whether the field is embedded (`#[sflags(embed)]`).
    pub embedded: bool,
    /// Declared tags as `(key, value)` pairs in declaration order.
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldMeta {
    /// Returns the value of the first tag named `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sflags::FieldMeta;
    ///
    /// let meta = FieldMeta {
    ///     name: "port",
    ///     type_name: "u16",
    ///     exported: true,
    ///     embedded: false,
    ///     tags: &[("flag", "port p"), ("desc", "listen port")],
    /// };
    /// assert_eq!(meta.tag("desc"), Some("listen port"));
    /// assert_eq!(meta.tag("env"), None);
    /// ```
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(*v))
    }
}

/// A declared field: its metadata and, when the field's type is supported,
/// a handle on its storage.
pub struct Field<'a> {
    meta: FieldMeta,
    target: Option<&'a mut dyn Flaggable>,
}

impl<'a> Field<'a> {
    /// Creates a field entry. `target` is `None` for unsupported types.
    #[must_use]
    pub const fn new(meta: FieldMeta, target: Option<&'a mut dyn Flaggable>) -> Self {
        Self { meta, target }
    }

    /// The field's static metadata.
    #[must_use]
    pub const fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    pub(crate) const fn into_parts(self) -> (FieldMeta, Option<&'a mut dyn Flaggable>) {
        (self.meta, self.target)
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("meta", &self.meta)
            .field("supported", &self.target.is_some())
            .finish()
    }
}

/// Result of resolving a field through the value registry.
pub enum Slot<'a> {
    /// A terminal value bound to the field's storage.
    Value(Box<dyn Value + 'a>),
    /// A composite the walker recurses into.
    Nested(&'a mut dyn Describe),
}

/// A configuration struct whose fields can be walked.
///
/// Implementations must return fields in declaration order.
pub trait Describe {
    /// Lists every declared field.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// A type the value registry knows how to bind.
///
/// Implemented for the supported primitive, collection, and address types,
/// for every [`Value`] implementor, for `Option<T>` of any flaggable
/// `T: Default`, and by `#[derive(Describe)]` for configuration structs.
pub trait Flaggable {
    /// Binds `self` to a terminal value or exposes it as a composite.
    ///
    /// This may initialise storage in place (for example an unset `Option`)
    /// so the returned handle always aliases real storage.
    fn slot(&mut self) -> Slot<'_>;

    /// Static type name, used in error reports.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[doc(hidden)]
pub mod __private {
    //! Support code for `#[derive(Describe)]`. Not public API.

    use super::Flaggable;

    /// Wraps a field borrow so method resolution can pick between the
    /// flaggable and unsupported paths.
    pub struct Probe<'a, T>(pub &'a mut T);

    /// Taken when the field type implements [`Flaggable`].
    pub trait ResolveFlaggable<'a> {
        /// Returns the storage handle.
        fn resolve(self) -> Option<&'a mut dyn Flaggable>;
    }

    impl<'a, T: Flaggable + 'a> ResolveFlaggable<'a> for Probe<'a, T> {
        fn resolve(self) -> Option<&'a mut dyn Flaggable> {
            Some(self.0)
        }
    }

    /// Taken through auto-ref for every other type.
    pub trait ResolveUnsupported<'a> {
        /// Returns `None`.
        fn resolve(self) -> Option<&'a mut dyn Flaggable>;
    }

    impl<'a, T> ResolveUnsupported<'a> for &Probe<'a, T> {
        fn resolve(self) -> Option<&'a mut dyn Flaggable> {
            None
        }
    }
}
