//! Factory: the only place the presence predicate runs eagerly
//!
//! Raw input -> predicate -> `Present(value)` | `Absent`. The classification
//! is one-shot; nothing else changes a variant afterwards.

use std::any::type_name;

use tracing::trace;

use crate::{Optional, OptionalError, OptionalResult, Present, Presence};

/// Wrap a value that must be present.
///
/// Fails with [`OptionalError::MustBePresent`] when `value` is absent.
pub fn of<P: Presence>(value: P) -> OptionalResult<Optional<P::Value>> {
    match classify(value) {
        Optional::Absent(_) => Err(OptionalError::MustBePresent),
        present => Ok(present),
    }
}

/// The shared absent value
#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::absent()
}

/// Classify a value that may be absent. Never fails.
pub fn from_nullable<P: Presence>(value: P) -> Optional<P::Value> {
    classify(value)
}

/// Synonym for [`from_nullable`]
#[inline]
pub fn from_undefinedable<P: Presence>(value: P) -> Optional<P::Value> {
    from_nullable(value)
}

fn classify<P: Presence>(value: P) -> Optional<P::Value> {
    match value.into_present() {
        Some(v) => {
            trace!(input = type_name::<P>(), variant = "present", "classified raw value");
            Optional::Present(Present::new(v))
        }
        None => {
            trace!(input = type_name::<P>(), variant = "absent", "classified raw value");
            absent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Absent, ABSENT};

    #[test]
    fn test_of_rejects_absent() {
        assert_eq!(of(None::<i32>), Err(OptionalError::MustBePresent));
        assert_eq!(of(absent::<i32>()), Err(OptionalError::MustBePresent));
    }

    #[test]
    fn test_of_accepts_present() {
        let opt = of(Some(5)).unwrap();
        assert!(opt.is_present());
        assert_eq!(opt.get(), Ok(5));
    }

    #[test]
    fn test_of_unwraps_present_optional() {
        let inner = of(3u8).unwrap();
        assert_eq!(of(inner), Ok(inner));
    }

    #[test]
    fn test_absent_is_shared() {
        assert_eq!(absent::<i32>(), absent::<i32>());
        assert_eq!(absent::<String>(), Optional::Absent(*Absent::shared()));
        assert_eq!(absent::<u8>(), Optional::from(ABSENT));
    }

    #[test]
    fn test_from_nullable() {
        assert_eq!(from_nullable(None::<&str>), absent());
        assert_eq!(from_nullable(Some("a")), of("a").unwrap());
        assert_eq!(from_nullable(0u32), of(0u32).unwrap());
    }

    #[test]
    fn test_borrowed_sentinel_is_absent() {
        let none: Option<i32> = None;
        let zero = Some(0);

        assert_eq!(of(&none), Err(OptionalError::MustBePresent));
        assert_eq!(from_nullable(&none), absent());
        assert_eq!(of(&zero).and_then(Optional::get), Ok(&0));
        assert_eq!(absent::<&i32>().or(&none), Err(OptionalError::AtLeastOnePresent));
        assert_eq!(absent::<&i32>().or(&zero), Ok(&0));
    }

    #[test]
    fn test_borrowed_values_are_present() {
        let text = String::new();
        assert_eq!(from_nullable(&text).get(), Ok(&text));
        assert!(from_nullable("").is_present());
        assert!(from_nullable(&[0u8][..]).is_present());
    }

    #[test]
    fn test_from_undefinedable_matches_from_nullable() {
        for input in [None, Some(0i64), Some(-1), Some(i64::MAX)] {
            assert_eq!(from_undefinedable(input), from_nullable(input));
        }
    }

    #[test]
    fn test_associated_constructors() {
        assert_eq!(Optional::of(Some(1)), of(1));
        assert_eq!(Optional::<i32>::absent(), absent());
        assert_eq!(Optional::from_nullable(None::<i32>), absent());
        assert_eq!(Optional::from_undefinedable(Some(2)), of(2).unwrap());
    }
}
