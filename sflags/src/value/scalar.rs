//! Handles for single-valued kinds: text, booleans, numbers, durations and
//! addresses.

use std::any::Any;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use super::{Kind, Value};
use crate::error::SetError;

/// A type with a textual form that flags can set and render.
///
/// Scalars are also the element kinds accepted by list and map values.
pub trait Scalar: Sized + 'static {
    /// Kind reported by handles over this type.
    const KIND: Kind;

    /// Whether a flag of this type takes no argument.
    const IS_BOOL: bool = false;

    /// Parses the textual form.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Parse`] when `raw` is not a valid value.
    fn parse(raw: &str) -> Result<Self, SetError>;

    /// Renders the textual form.
    fn render(&self) -> String;
}

/// Handle binding a [`Scalar`] field.
pub struct ScalarValue<'a, T> {
    target: &'a mut T,
}

impl<'a, T: Scalar> ScalarValue<'a, T> {
    /// Binds `target`.
    #[must_use]
    pub const fn new(target: &'a mut T) -> Self {
        Self { target }
    }
}

impl<T: Scalar> fmt::Display for ScalarValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target.render())
    }
}

impl<T: Scalar> Value for ScalarValue<'_, T> {
    fn set(&mut self, raw: &str) -> Result<(), SetError> {
        *self.target = T::parse(raw)?;
        Ok(())
    }

    fn get(&self) -> Option<&dyn Any> {
        Some(&*self.target)
    }

    fn is_bool_flag(&self) -> bool {
        T::IS_BOOL
    }

    fn kind(&self) -> Kind {
        T::KIND
    }
}

impl Scalar for String {
    const KIND: Kind = Kind::Text;

    fn parse(raw: &str) -> Result<Self, SetError> {
        Ok(raw.to_owned())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;
    const IS_BOOL: Self = true;

    fn parse(raw: &str) -> Result<Self, SetError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(SetError::parse(
                Kind::Bool,
                raw,
                "expected one of 1, t, true, 0, f, false",
            )),
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// Splits a radix prefix off `digits`.
///
/// Returns the radix, the remaining digits, and whether a prefix was
/// present. A leading `0` followed by more digits selects octal.
fn split_radix(digits: &str) -> (u32, &str, bool) {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in PREFIXES {
        if let Some(rest) = digits.strip_prefix(prefix) {
            return (radix, rest, true);
        }
    }
    match digits.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => (8, rest, true),
        _ => (10, digits, false),
    }
}

fn parse_magnitude(unsigned: &str) -> Result<u128, String> {
    let (radix, digits, prefixed) = split_radix(unsigned);
    if digits.is_empty() {
        return Err(String::from("missing digits"));
    }
    if digits.starts_with(['+', '-']) || digits.ends_with('_') {
        return Err(String::from("misplaced sign or separator"));
    }
    if digits.contains('_') && !prefixed {
        return Err(String::from("digit separators require a base prefix"));
    }
    if digits.contains("__") {
        return Err(String::from("digit separators must sit between digits"));
    }
    let cleaned = digits.replace('_', "");
    u128::from_str_radix(&cleaned, radix).map_err(|err| err.to_string())
}

/// Splits an optional leading sign off `raw`, reporting whether it was `-`.
pub(super) fn split_sign(raw: &str) -> (bool, &str) {
    raw.strip_prefix('-').map_or_else(
        || (false, raw.strip_prefix('+').unwrap_or(raw)),
        |rest| (true, rest),
    )
}

fn parse_signed(raw: &str) -> Result<i128, String> {
    let (negative, unsigned) = split_sign(raw);
    let magnitude = i128::try_from(parse_magnitude(unsigned)?)
        .map_err(|_| String::from("value out of range"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_unsigned(raw: &str) -> Result<u128, String> {
    if raw.starts_with(['+', '-']) {
        return Err(String::from("unsigned values take no sign"));
    }
    parse_magnitude(raw)
}

macro_rules! integer_scalar {
    ($kind:expr, $parse:ident, $($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const KIND: Kind = $kind;

                fn parse(raw: &str) -> Result<Self, SetError> {
                    let wide = $parse(raw).map_err(|reason| SetError::parse($kind, raw, reason))?;
                    Self::try_from(wide).map_err(|_| SetError::parse($kind, raw, "value out of range"))
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_scalar!(Kind::Int, parse_signed, i8, i16, i32, i64, isize);
integer_scalar!(Kind::Uint, parse_unsigned, u8, u16, u32, u64, usize);

macro_rules! from_str_scalar {
    ($kind:expr, $($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const KIND: Kind = $kind;

                fn parse(raw: &str) -> Result<Self, SetError> {
                    raw.parse::<Self>().map_err(|err| SetError::parse($kind, raw, err.to_string()))
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

from_str_scalar!(Kind::Float, f32, f64);
from_str_scalar!(Kind::Address, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);
