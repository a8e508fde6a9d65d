//! The optional state machine
//!
//! `Optional<T>` is a closed sum over two variants:
//! - [`Present<T>`]: wraps one value that passed the presence predicate
//! - [`Absent`]: stateless, one shared instance for the whole process
//!
//! The variant is fixed at construction. `Present` keeps its field private,
//! so the only way in is through the factory or a conversion that runs the
//! predicate.

use crate::{OptionalError, OptionalResult, Presence};

/// The shared absent value
pub const ABSENT: Absent = Absent;

static ABSENT_INSTANCE: Absent = ABSENT;

/// A value known to be present
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Present<T> {
    value: T,
}

impl<T> Present<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Present { value }
    }

    /// Unwrap the value. Never fails.
    #[inline]
    pub fn get(self) -> T {
        self.value
    }

    /// Borrow the wrapped value
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the wrapped value; the fallback is never inspected
    #[inline]
    pub fn or<P>(self, _fallback: P) -> T {
        self.value
    }

    /// Returns the wrapped value without calling `f`
    #[inline]
    pub fn or_else<P, F: FnOnce() -> P>(self, _f: F) -> T {
        self.value
    }

    #[inline]
    pub fn or_null(self) -> Option<T> {
        Some(self.value)
    }

    #[inline]
    pub fn or_undefined(self) -> Option<T> {
        self.or_null()
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        true
    }

    /// Apply `f` and hand back its raw result, not re-wrapped
    #[inline]
    pub fn transform<U, F: FnOnce(T) -> U>(self, f: F) -> U {
        f(self.value)
    }

    #[inline]
    pub fn as_ref(&self) -> Present<&T> {
        Present { value: &self.value }
    }
}

/// No value. Zero-sized; every instance is equal to every other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Absent;

impl Absent {
    /// The process-wide instance. Always the same reference.
    #[inline]
    pub fn shared() -> &'static Absent {
        &ABSENT_INSTANCE
    }

    /// Always fails with [`OptionalError::MustBePresent`]
    #[inline]
    pub fn get<T>(self) -> OptionalResult<T> {
        Err(OptionalError::MustBePresent)
    }

    /// Returns the fallback when it is present
    ///
    /// Fails with [`OptionalError::AtLeastOnePresent`] when the fallback is
    /// absent too. Use [`Absent::or_null`] to allow a fully empty result.
    #[inline]
    pub fn or<P: Presence>(self, fallback: P) -> OptionalResult<P::Value> {
        fallback
            .into_present()
            .ok_or(OptionalError::AtLeastOnePresent)
    }

    #[inline]
    pub fn or_else<P: Presence, F: FnOnce() -> P>(self, f: F) -> OptionalResult<P::Value> {
        self.or(f())
    }

    #[inline]
    pub fn or_null<T>(self) -> Option<T> {
        None
    }

    #[inline]
    pub fn or_undefined<T>(self) -> Option<T> {
        self.or_null()
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        false
    }

    /// Never calls `f`
    ///
    /// `Absent` carries no type, so the argument type of `f` must come from
    /// the closure annotation. [`Optional::transform`] pins it from `T`.
    ///
    /// ```rust
    /// use presence_core::{absent, ABSENT};
    ///
    /// assert_eq!(ABSENT.transform(|n: i32| n + 1), ABSENT);
    /// assert!(absent::<i32>().transform(|n| n + 1).is_absent());
    /// ```
    #[inline]
    pub fn transform<T, U, F: FnOnce(T) -> U>(self, _f: F) -> Absent {
        *Absent::shared()
    }
}

/// A value that may or may not be present
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub enum Optional<T> {
    Absent(Absent),
    Present(Present<T>),
}

impl<T> Optional<T> {
    /// Wraps `value`, failing if it is absent
    #[inline]
    pub fn of<P: Presence<Value = T>>(value: P) -> OptionalResult<Self> {
        crate::factory::of(value)
    }

    #[inline]
    pub const fn absent() -> Self {
        Optional::Absent(ABSENT)
    }

    #[inline]
    pub fn from_nullable<P: Presence<Value = T>>(value: P) -> Self {
        crate::factory::from_nullable(value)
    }

    #[inline]
    pub fn from_undefinedable<P: Presence<Value = T>>(value: P) -> Self {
        crate::factory::from_undefinedable(value)
    }

    /// Unwrap the value, failing with [`OptionalError::MustBePresent`] when absent
    #[inline]
    pub fn get(self) -> OptionalResult<T> {
        match self {
            Optional::Present(p) => Ok(p.get()),
            Optional::Absent(a) => a.get(),
        }
    }

    /// The wrapped value, or `fallback` when absent
    ///
    /// A present optional never inspects the fallback. An absent optional
    /// with an absent fallback fails with [`OptionalError::AtLeastOnePresent`].
    #[inline]
    pub fn or<P: Presence<Value = T>>(self, fallback: P) -> OptionalResult<T> {
        match self {
            Optional::Present(p) => Ok(p.or(fallback)),
            Optional::Absent(a) => a.or(fallback),
        }
    }

    /// Like [`Optional::or`], but the fallback is only computed when absent
    #[inline]
    pub fn or_else<P, F>(self, f: F) -> OptionalResult<T>
    where
        P: Presence<Value = T>,
        F: FnOnce() -> P,
    {
        match self {
            Optional::Present(p) => Ok(p.or_else(f)),
            Optional::Absent(a) => a.or_else(f),
        }
    }

    #[inline]
    pub fn or_null(self) -> Option<T> {
        match self {
            Optional::Present(p) => p.or_null(),
            Optional::Absent(a) => a.or_null(),
        }
    }

    /// Same as [`Optional::or_null`]
    #[inline]
    pub fn or_undefined(self) -> Option<T> {
        self.or_null()
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        match self {
            Optional::Present(p) => p.is_present(),
            Optional::Absent(a) => a.is_present(),
        }
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Map the wrapped value.
    ///
    /// The raw result of `f` goes back through the presence predicate, so a
    /// mapping that yields `None` (or an absent `Optional`) produces the
    /// shared absent value. When `f` already returns an `Optional`, that
    /// optional comes back unchanged. Absent never calls `f`.
    #[inline]
    pub fn transform<P, F>(self, f: F) -> Optional<P::Value>
    where
        P: Presence,
        F: FnOnce(T) -> P,
    {
        match self {
            Optional::Present(p) => crate::factory::from_nullable(p.transform(f)),
            Optional::Absent(a) => Optional::Absent(a.transform(f)),
        }
    }

    /// [`Optional::transform`] with a mapping function that may be missing.
    ///
    /// A missing function fails with
    /// [`OptionalError::MissingTransformFunction`] on both variants.
    #[inline]
    pub fn transform_with<P, F>(self, f: Option<F>) -> OptionalResult<Optional<P::Value>>
    where
        P: Presence,
        F: FnOnce(T) -> P,
    {
        let f = f.ok_or(OptionalError::MissingTransformFunction)?;
        Ok(self.transform(f))
    }

    /// [`Optional::transform`] with a fallible mapping function.
    ///
    /// Errors from `f` are returned to the caller untouched.
    #[inline]
    pub fn try_transform<P, E, F>(self, f: F) -> Result<Optional<P::Value>, E>
    where
        P: Presence,
        F: FnOnce(T) -> Result<P, E>,
    {
        match self {
            Optional::Present(p) => Ok(crate::factory::from_nullable(p.transform(f)?)),
            Optional::Absent(_) => Ok(Optional::absent()),
        }
    }

    /// Borrowing view of this optional
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(p) => Optional::Present(p.as_ref()),
            Optional::Absent(a) => Optional::Absent(*a),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::absent()
    }
}

impl<T> Presence for Optional<T> {
    type Value = T;

    #[inline]
    fn is_present(&self) -> bool {
        Optional::is_present(self)
    }

    #[inline]
    fn into_present(self) -> Option<T> {
        self.or_null()
    }
}

impl<'a, T> Presence for &'a Optional<T> {
    type Value = &'a T;

    #[inline]
    fn is_present(&self) -> bool {
        Optional::is_present(self)
    }

    #[inline]
    fn into_present(self) -> Option<&'a T> {
        self.as_ref().or_null()
    }
}

impl<T> Presence for Present<T> {
    type Value = T;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_present(self) -> Option<T> {
        Some(self.value)
    }
}

impl<'a, T> Presence for &'a Present<T> {
    type Value = &'a T;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_present(self) -> Option<&'a T> {
        Some(&self.value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        crate::factory::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.or_null()
    }
}

impl<T> From<Present<T>> for Optional<T> {
    fn from(present: Present<T>) -> Self {
        Optional::Present(present)
    }
}

impl<T> From<Absent> for Optional<T> {
    fn from(absent: Absent) -> Self {
        Optional::Absent(absent)
    }
}


#[cfg(test)]
mod proptests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use super::*;
    use crate::{absent, from_nullable, of};

    proptest! {
        #[test]
        fn present_get_returns_input(v in any::<i64>()) {
            let opt = of(v).unwrap();
            prop_assert!(opt.is_present());
            prop_assert_eq!(opt.get(), Ok(v));
        }

        #[test]
        fn strings_including_empty_are_present(s in ".{0,8}") {
            prop_assert_eq!(of(s.clone()).unwrap().get(), Ok(s));
        }

        #[test]
        fn floats_including_nan_are_present(v in any::<f64>()) {
            prop_assert!(of(v).unwrap().is_present());
        }

        #[test]
        fn present_or_ignores_fallback(v in any::<i32>(), f in any::<Option<i32>>()) {
            prop_assert_eq!(of(v).unwrap().or(f), Ok(v));
        }

        #[test]
        fn absent_or_follows_fallback(f in any::<Option<i32>>()) {
            let expected = f.ok_or(OptionalError::AtLeastOnePresent);
            prop_assert_eq!(absent::<i32>().or(f), expected);
        }

        #[test]
        fn from_nullable_classifies(v in any::<Option<u16>>()) {
            let opt = from_nullable(v);
            prop_assert_eq!(opt.is_present(), v.is_some());
            if v.is_none() {
                prop_assert_eq!(opt, absent());
            }
        }

        #[test]
        fn transform_matches_direct_call(v in any::<i32>()) {
            let f = |n: i32| if n >= 0 { of(n).unwrap() } else { absent() };
            prop_assert_eq!(of(v).unwrap().transform(f), f(v));
        }

        #[test]
        fn absent_transform_never_invokes(_seed in any::<u8>()) {
            let calls = Cell::new(0u32);
            let out = absent::<i32>().transform(|n| {
                calls.set(calls.get() + 1);
                n
            });
            prop_assert_eq!(out, absent());
            prop_assert_eq!(calls.get(), 0);
        }

        #[test]
        fn or_null_round_trips(v in any::<i64>()) {
            prop_assert_eq!(from_nullable(of(v).unwrap().or_null()), of(v).unwrap());
        }
    }
}
