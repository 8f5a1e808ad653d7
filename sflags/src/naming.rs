//! Conversions between declared identifiers, flag names, and environment
//! variable names.
//!
//! Identifiers are split into words at case boundaries and at any
//! non-alphanumeric character, so both `HTTPPort` and `http_port` become
//! `http-port`. A run of capitals stays one word unless it is followed by a
//! lowercase letter, in which case the last capital starts the next word.
//! Digits stay attached to the word they follow (`Name2` → `name2`).

use heck::ToKebabCase;

/// Converts a declared identifier into a flag name joined by `divider`.
///
/// # Examples
///
/// ```rust
/// use sflags::naming::identifier_to_flag_name;
///
/// assert_eq!(identifier_to_flag_name("HTTPPort", "-"), "http-port");
/// assert_eq!(identifier_to_flag_name("string_slice_value", "."), "string.slice.value");
/// assert_eq!(identifier_to_flag_name("", "-"), "");
/// ```
#[must_use]
pub fn identifier_to_flag_name(identifier: &str, divider: &str) -> String {
    let kebab = identifier
        .strip_prefix("r#")
        .unwrap_or(identifier)
        .to_kebab_case();
    if divider == "-" {
        kebab
    } else {
        kebab.split('-').collect::<Vec<_>>().join(divider)
    }
}

/// Converts a flag name into an environment variable name.
///
/// Every occurrence of `flag_divider` becomes `env_divider` and the result
/// is upper-cased.
///
/// # Examples
///
/// ```rust
/// use sflags::naming::flag_name_to_env_name;
///
/// assert_eq!(flag_name_to_env_name("sub-name", "-", "_"), "SUB_NAME");
/// assert_eq!(flag_name_to_env_name("name_two", "-", "|"), "NAME_TWO");
/// ```
#[must_use]
pub fn flag_name_to_env_name(flag_name: &str, flag_divider: &str, env_divider: &str) -> String {
    if flag_divider.is_empty() {
        return flag_name.to_uppercase();
    }
    flag_name.replace(flag_divider, env_divider).to_uppercase()
}
