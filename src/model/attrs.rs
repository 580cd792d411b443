//! Permissive coercion of the untyped `attrs` bag.
//!
//! Editors attach kind-specific parameters to nodes and marks as a loose
//! JSON object. Anything missing or of the wrong kind is reported as absent
//! so the caller can substitute its default.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Attribute map of a single node or mark.
pub(crate) type Attrs = Map<String, Value>;

/// Take the attribute object, treating `null`, arrays and scalars as empty.
pub(crate) fn object(attrs: Value) -> Attrs {
    match attrs {
        Value::Object(map) => map,
        _ => Attrs::new(),
    }
}

/// Read an integral number. Floats are accepted only with a zero fraction.
pub(crate) fn integer(attrs: &Attrs, key: &str) -> Option<i64> {
    let value = attrs.get(key)?;
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0).then_some(f as i64)
}

/// Read a string value. Empty strings count as present.
pub(crate) fn string(attrs: &Attrs, key: &str) -> Option<String> {
    attrs.get(key)?.as_str().map(str::to_owned)
}

/// Heading depth from `level`; 1 unless a positive integer is given.
pub(crate) fn heading_level(attrs: &Attrs) -> u32 {
    integer(attrs, "level")
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(1)
}

/// First ordered-list number from `start`; 1 when absent, invalid or zero.
pub(crate) fn list_start(attrs: &Attrs) -> i64 {
    integer(attrs, "start").filter(|n| *n != 0).unwrap_or(1)
}

/// Deserialize a field where explicit `null` means the same as absent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
