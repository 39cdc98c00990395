//! Omit-only optional values.
//!
//! A [`Val<T>`] is either *set* (holds a `T`) or *unset* (no value was
//! provided). There is no separate null state: a wire null is rejected by the
//! decoders instead of being folded into "unset".
//!
//! - `json.rs` - serde `Serialize`/`Deserialize` and the field-omission hook
//! - `text.rs` - textual encode/decode
//! - `sql.rs` - scanning from and producing SQL driver values

mod json;
mod sql;
mod text;

use std::fmt;

/// The state of a [`Val`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Unset,
    Set,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Set => write!(f, "set"),
        }
    }
}

/// A value that is either set or omitted.
///
/// The default value is unset.
///
/// # Examples
///
/// ```
/// use omitval::Val;
///
/// let mut name: Val<String> = Val::new();
/// assert!(name.is_unset());
///
/// name.set("alice".to_string());
/// assert_eq!(name.get().map(String::as_str), Some("alice"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Val<T> {
    value: Option<T>,
}

impl<T> Val<T> {
    /// An unset value.
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// A set value.
    pub const fn from_value(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Set from a reference, unset when `value` is `None`.
    pub fn from_ptr(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self {
            value: value.cloned(),
        }
    }

    /// Set only when `ok` holds.
    pub fn from_cond(value: T, ok: bool) -> Self {
        if ok {
            Self::from_value(value)
        } else {
            Self::new()
        }
    }

    pub fn from_option(value: Option<T>) -> Self {
        Self { value }
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Same policy as [`Val::from_ptr`], in place.
    pub fn set_ptr(&mut self, value: Option<&T>)
    where
        T: Clone,
    {
        self.value = value.cloned();
    }

    /// Drops the held value and marks this unset.
    pub fn unset(&mut self) {
        self.value = None;
    }

    /// Takes the held value out, leaving this unset.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match &self.value {
            Some(v) => v.clone(),
            None => fallback,
        }
    }

    pub fn get_or_zero(&self) -> T
    where
        T: Clone + Default,
    {
        self.value.clone().unwrap_or_default()
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the value is unset. Only call this after presence has been
    /// checked.
    #[track_caller]
    pub fn must_get(&self) -> &T {
        match &self.value {
            Some(v) => v,
            None => panic!("no value present"),
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Applies `f` to the held value. An unset value stays unset and `f` is
    /// not called.
    pub fn map<U, F>(self, f: F) -> Val<U>
    where
        F: FnOnce(T) -> U,
    {
        Val {
            value: self.value.map(f),
        }
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_unset(&self) -> bool {
        self.value.is_none()
    }

    pub fn state(&self) -> State {
        if self.is_set() {
            State::Set
        } else {
            State::Unset
        }
    }
}

impl<T> Default for Val<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Val<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

/// Function form of [`Val::map`].
pub fn map<A, B, F>(value: Val<A>, f: F) -> Val<B>
where
    F: FnOnce(A) -> B,
{
    value.map(f)
}
