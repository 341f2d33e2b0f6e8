//! Type-erased, string-keyed shared simulation state.
//!
//! # Design
//!
//! Each value is stored as a `Box<dyn Any>` in a `HashMap<String, …>` and
//! recovered by downcasting to the type the caller asks for.  A lookup with
//! the wrong type behaves like a missing key for the `Option` accessors and
//! yields [`CoreError::PropertyType`] from [`PropertyBag::require`].
//!
//! # Usage
//!
//! ```rust
//! use abm_core::PropertyBag;
//!
//! let mut props = PropertyBag::new();
//! props.insert("birth_rate", 0.25_f64);
//! assert_eq!(props.get::<f64>("birth_rate"), Some(&0.25));
//! assert!(props.get::<u32>("birth_rate").is_none());
//! ```

use std::any::{Any, type_name};
use std::collections::HashMap;

use crate::{CoreError, CoreResult};

/// Open key → value store owned by the `Sim` and visible to every phase hook.
#[derive(Default)]
pub struct PropertyBag {
    map: HashMap<String, Box<dyn Any>>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Store `value` under `key`, replacing whatever was there.
    ///
    /// Returns `true` if a previous value (of any type) was replaced.
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, value: T) -> bool {
        self.map.insert(key.into(), Box::new(value)).is_some()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<T: Any>(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Shared reference to the value under `key` if it is a `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.map.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    /// Mutable reference to the value under `key` if it is a `T`.
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.map.get_mut(key).and_then(|v| v.downcast_mut::<T>())
    }

    /// Like [`get`](Self::get) but distinguishes "missing" from "wrong type".
    pub fn require<T: Any>(&self, key: &str) -> CoreResult<&T> {
        let value = self
            .map
            .get(key)
            .ok_or_else(|| CoreError::MissingProperty(key.to_owned()))?;
        value.downcast_ref::<T>().ok_or_else(|| CoreError::PropertyType {
            key:      key.to_owned(),
            expected: type_name::<T>(),
        })
    }

    /// Mutable access to `key`, inserting `init()` first if the key is absent.
    ///
    /// Returns `None` only if `key` already holds a value of another type;
    /// that value is left untouched.
    pub fn get_or_insert_with<T: Any>(
        &mut self,
        key:  &str,
        init: impl FnOnce() -> T,
    ) -> Option<&mut T> {
        self.map
            .entry(key.to_owned())
            .or_insert_with(|| Box::new(init()))
            .downcast_mut::<T>()
    }

    /// Remove the value under `key` and return it if it is a `T`.
    ///
    /// A value of another type is left in place.
    pub fn remove<T: Any>(&mut self, key: &str) -> Option<T> {
        if !self.map.get(key)?.is::<T>() {
            return None;
        }
        self.map
            .remove(key)
            .and_then(|v| v.downcast::<T>().ok())
            .map(|b| *b)
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    /// `true` if anything is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All keys, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.map.keys()).finish()
    }
}
