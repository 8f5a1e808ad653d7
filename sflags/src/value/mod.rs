//! Value registry: uniform settable/renderable handles over field storage.
//!
//! Every handle borrows the exact storage location of its field. Setting
//! through a handle mutates the configuration in place and rendering reads
//! the live state.

use std::any::Any;
use std::fmt;

use crate::describe::{Flaggable, Slot};
use crate::error::SetError;

mod counter;
mod duration;
mod list;
mod map;
mod pattern;
mod scalar;
mod validate;

pub use counter::Counter;
pub use list::ListValue;
pub use map::{MapKey, MapStorage, MapValue};
pub use pattern::PatternValue;
pub use scalar::{Scalar, ScalarValue};
pub(crate) use validate::Validated;

/// Closed set of terminal kinds a handle can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Kind {
    /// Free text.
    Text,
    /// Boolean switch.
    Bool,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    /// Floating point number.
    Float,
    /// Time span.
    Duration,
    /// Repeatable counter.
    Counter,
    /// Regular expression.
    Pattern,
    /// IP or socket address.
    Address,
    /// Ordered sequence of a supported kind.
    List,
    /// Keyed mapping of supported kinds.
    Map,
    /// A user type implementing [`Value`] directly.
    Custom,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Duration => "duration",
            Self::Counter => "counter",
            Self::Pattern => "pattern",
            Self::Address => "address",
            Self::List => "list",
            Self::Map => "map",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A settable, renderable flag value.
///
/// [`Display`](fmt::Display) renders the current state.
pub trait Value: fmt::Display {
    /// Parses `raw` and stores the result.
    ///
    /// # Errors
    ///
    /// Returns [`SetError`] when `raw` is not valid for this value; the
    /// underlying storage is left unchanged.
    fn set(&mut self, raw: &str) -> Result<(), SetError>;

    /// Typed access to the underlying storage.
    fn get(&self) -> Option<&dyn Any> {
        None
    }

    /// Whether the flag takes no argument on the command line.
    fn is_bool_flag(&self) -> bool {
        false
    }

    /// The kind of value behind this handle.
    fn kind(&self) -> Kind {
        Kind::Custom
    }
}

impl<V: Value + ?Sized> Value for &mut V {
    fn set(&mut self, raw: &str) -> Result<(), SetError> {
        (**self).set(raw)
    }

    fn get(&self) -> Option<&dyn Any> {
        (**self).get()
    }

    fn is_bool_flag(&self) -> bool {
        (**self).is_bool_flag()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<V: Value> Flaggable for V {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Value(Box::new(self))
    }
}

impl<T: Flaggable + Default> Flaggable for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        self.get_or_insert_with(T::default).slot()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! scalar_flaggable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Flaggable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Value(Box::new(ScalarValue::new(self)))
                }
            }
        )*
    };
}

scalar_flaggable!(
    String,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    std::time::Duration,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
);

impl<T: Scalar> Flaggable for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Value(Box::new(ListValue::new(self)))
    }
}

impl<K, V, S> Flaggable for std::collections::HashMap<K, V, S>
where
    K: MapKey + std::hash::Hash,
    V: Scalar,
    S: std::hash::BuildHasher + 'static,
{
    fn slot(&mut self) -> Slot<'_> {
        Slot::Value(Box::new(MapValue::new(self)))
    }
}

impl<K: MapKey, V: Scalar> Flaggable for std::collections::BTreeMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Value(Box::new(MapValue::new(self)))
    }
}

impl Flaggable for Option<regex::Regex> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Value(Box::new(PatternValue::new(self)))
    }
}
