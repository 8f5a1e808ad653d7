//! Handles for keyed mappings.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{Kind, Scalar, Value};
use crate::error::SetError;

/// A scalar usable as a map key: text and integers.
pub trait MapKey: Scalar + Ord {}

impl MapKey for String {}

macro_rules! integer_key {
    ($($ty:ty),*) => {
        $(impl MapKey for $ty {})*
    };
}

integer_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Map types a [`MapValue`] can bind.
pub trait MapStorage: 'static {
    /// Key type.
    type Key: MapKey;
    /// Value type.
    type Item: Scalar;

    /// Inserts or replaces one entry.
    fn insert_entry(&mut self, key: Self::Key, item: Self::Item);

    /// Entries ordered by key.
    fn sorted_entries(&self) -> Vec<(&Self::Key, &Self::Item)>;
}

impl<K, V, S> MapStorage for HashMap<K, V, S>
where
    K: MapKey + Hash,
    V: Scalar,
    S: BuildHasher + 'static,
{
    type Key = K;
    type Item = V;

    fn insert_entry(&mut self, key: K, item: V) {
        self.insert(key, item);
    }

    fn sorted_entries(&self) -> Vec<(&K, &V)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: MapKey, V: Scalar> MapStorage for BTreeMap<K, V> {
    type Key = K;
    type Item = V;

    fn insert_entry(&mut self, key: K, item: V) {
        self.insert(key, item);
    }

    fn sorted_entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

/// Handle binding a map field.
///
/// `set("key:value")` splits on the first `:` and inserts the pair.
/// Rendering lists entries by key as `map[k1:v1 k2:v2]`; an empty map
/// renders as the empty string.
pub struct MapValue<'a, M> {
    target: &'a mut M,
}

impl<'a, M: MapStorage> MapValue<'a, M> {
    /// Binds `target`.
    #[must_use]
    pub const fn new(target: &'a mut M) -> Self {
        Self { target }
    }
}

impl<M: MapStorage> fmt::Display for MapValue<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.target.sorted_entries();
        if entries.is_empty() {
            return Ok(());
        }
        let pairs: Vec<String> = entries
            .into_iter()
            .map(|(key, item)| format!("{}:{}", key.render(), item.render()))
            .collect();
        write!(f, "map[{}]", pairs.join(" "))
    }
}

impl<M: MapStorage> Value for MapValue<'_, M> {
    fn set(&mut self, raw: &str) -> Result<(), SetError> {
        let (raw_key, raw_item) = raw.split_once(':').ok_or_else(|| SetError::Syntax {
            input: raw.to_owned(),
            expected: "key:value",
        })?;
        let key = M::Key::parse(raw_key)?;
        let item = M::Item::parse(raw_item)?;
        self.target.insert_entry(key, item);
        Ok(())
    }

    fn get(&self) -> Option<&dyn Any> {
        Some(&*self.target)
    }

    fn kind(&self) -> Kind {
        Kind::Map
    }
}
