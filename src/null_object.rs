//! Null objects and the registry of fallback values.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use crate::error::Error;
use crate::Result;
use crate::{Alias, Area, Artist, ArtistCredit, Genre, LifeSpan, Rating, ReleaseGroup, Tag};

/// Identifier carried by the null object of entities that have one.
pub const NULL_OBJECT_ID: &str = "NullObjectId";

/// Name carried by the null object of entities that have one.
pub const NULL_OBJECT_NAME: &str = "NullObjectName";

/// A type with a sentinel instance which stands for "no value".
///
/// # Examples
///
/// ```rust
/// # use brainz_fallback::{Artist, NullObject};
/// #
/// let artist: Artist = serde_json::from_str(r#"{"id":"x","area":null}"#).unwrap();
///
/// assert!(artist.area.is_null_object());
/// ```
pub trait NullObject: PartialEq + Sized + 'static {
    /// Returns the process-wide sentinel.
    fn null_object() -> &'static Self;

    /// Returns true if the value equals the sentinel.
    fn is_null_object(&self) -> bool {
        self == Self::null_object()
    }
}

// Implements `NullObject` with a lazily built sentinel.
macro_rules! impl_null_object {
    ($t:ty, $init:expr) => {
        impl $crate::null_object::NullObject for $t {
            fn null_object() -> &'static Self {
                lazy_static::lazy_static! {
                    static ref NULL_OBJECT: $t = $init;
                }
                &NULL_OBJECT
            }
        }
    };
}
pub(crate) use impl_null_object;

struct Fallback {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

/// Fallback values keyed by their type.
#[derive(Default)]
pub struct FallbackMap {
    map: HashMap<TypeId, Fallback>,
}

impl FallbackMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        FallbackMap {
            map: HashMap::new(),
        }
    }

    /// Creates a map holding the null object of every entity of the crate.
    pub fn with_null_objects() -> Self {
        let mut map = FallbackMap::new();
        map.insert_null_object::<Alias>();
        map.insert_null_object::<Area>();
        map.insert_null_object::<Artist>();
        map.insert_null_object::<ArtistCredit>();
        map.insert_null_object::<Genre>();
        map.insert_null_object::<LifeSpan>();
        map.insert_null_object::<Rating>();
        map.insert_null_object::<ReleaseGroup>();
        map.insert_null_object::<Tag>();
        map
    }

    /// Registers the fallback for `T`, returning the one it replaces.
    pub fn insert<T>(&mut self, value: T) -> Option<T>
    where
        T: Any + Send + Sync,
    {
        let fallback = Fallback {
            type_name: type_name::<T>(),
            value: Box::new(value),
        };
        self.map
            .insert(TypeId::of::<T>(), fallback)
            .and_then(|old| old.value.downcast::<T>().ok())
            .map(|old| *old)
    }

    /// Registers the null object of `T` as its fallback.
    pub fn insert_null_object<T>(&mut self)
    where
        T: NullObject + Clone + Send + Sync,
    {
        self.insert(T::null_object().clone());
    }

    /// Returns the fallback registered for `T`.
    ///
    /// # Errors
    ///
    /// The method fails if nothing is registered for `T`.
    pub fn get<T: Any>(&self) -> Result<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|f| f.value.downcast_ref::<T>())
            .ok_or_else(|| Error::FallbackNotConfigured(type_name::<T>()))
    }

    /// Returns true if a fallback is registered for `T`.
    pub fn contains<T: Any>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for FallbackMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names: Vec<&str> = self.map.values().map(|v| v.type_name).collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}

lazy_static::lazy_static! {
    static ref FALLBACK_MAP: RwLock<FallbackMap> = RwLock::new(FallbackMap::with_null_objects());
}

/// Registers `value` as the process-wide fallback for `T`.
///
/// # Examples
///
/// ```rust
/// # use brainz_fallback::{fallback, register_fallback};
/// #
/// #[derive(Clone, Debug, PartialEq)]
/// struct Label(String);
///
/// register_fallback(Label("unknown".to_string()));
///
/// assert_eq!(fallback::<Label>().unwrap(), Label("unknown".to_string()));
/// ```
pub fn register_fallback<T>(value: T)
where
    T: Any + Send + Sync,
{
    let mut map = FALLBACK_MAP.write().unwrap_or_else(|e| e.into_inner());
    if map.insert(value).is_some() {
        debug!("fallback for {} replaced", type_name::<T>());
    }
}

/// Returns a copy of the process-wide fallback for `T`.
///
/// # Errors
///
/// The method fails if nothing is registered for `T`.
pub fn fallback<T>() -> Result<T>
where
    T: Any + Clone,
{
    let map = FALLBACK_MAP.read().unwrap_or_else(|e| e.into_inner());
    map.get::<T>().map(|v| v.clone())
}
