//! Replaces an explicit JSON `null` with the fallback registered for the field's type.
//!
//! Use it on a field with `#[serde(with = "brainz_fallback::fallback_on_null")]`.
//! Any other attribute of the field (`rename`, `default`, ...) keeps applying,
//! only the `null` token is intercepted. A non-null value goes to the type's own
//! `Deserialize`.
//!
//! ```rust
//! # use brainz_fallback::register_fallback;
//! # use serde::{Deserialize, Serialize};
//! #
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Studio {
//!     name: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Session {
//!     #[serde(with = "brainz_fallback::fallback_on_null")]
//!     studio: Studio,
//! }
//!
//! register_fallback(Studio { name: "unknown".to_string() });
//!
//! let s: Session = serde_json::from_str(r#"{"studio":null}"#).unwrap();
//! assert_eq!(s.studio.name, "unknown");
//! ```

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};
use std::any::{type_name, Any};
use std::fmt::Debug;

use crate::null_object::fallback;

pub fn deserialize<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Any + Clone,
{
    match Option::<T>::deserialize(de)? {
        Some(v) => Ok(v),
        None => {
            trace!("null {} replaced by its fallback", type_name::<T>());
            fallback::<T>().map_err(D::Error::custom)
        }
    }
}

/// Directly delegates to the `Serialize` of `T`.
pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    value.serialize(serializer)
}

/// Describes the adapter of `T` together with its current fallback.
pub fn describe<T>() -> String
where
    T: Any + Clone + Debug,
{
    let name = type_name::<T>();
    match fallback::<T>() {
        Ok(v) => format!("{}.fallback_on_null({}={:?})", name, name, v),
        Err(_) => format!("{}.fallback_on_null(<not configured>)", name),
    }
}
