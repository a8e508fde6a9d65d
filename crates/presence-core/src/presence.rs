//! Presence predicate
//!
//! A raw value is present iff it is not the absence sentinel. In Rust the
//! only absence sentinel is `Option::None` (and the absent variant of
//! [`Optional`](crate::Optional)). Falsy-but-meaningful values such as `0`,
//! `""`, `false` and `NaN` are present.
//!
//! The truthy rule used by older revisions lives in [`legacy`] for auditing
//! only. It never decides how a value is classified.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Classifies a raw input as present or absent.
///
/// `Value` is the type that gets wrapped when the input is present. For
/// `Option<T>` that is `T`; for plain values it is the value itself.
pub trait Presence: Sized {
    type Value;

    /// Does this input satisfy the presence predicate?
    fn is_present(&self) -> bool;

    /// Consume the input, yielding the value if present
    fn into_present(self) -> Option<Self::Value>;
}

impl<T> Presence for Option<T> {
    type Value = T;

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

/// Types whose every value is present, owned or borrowed
macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                type Value = $ty;

                #[inline]
                fn is_present(&self) -> bool {
                    true
                }

                #[inline]
                fn into_present(self) -> Option<$ty> {
                    Some(self)
                }
            }

            impl<'a> Presence for &'a $ty {
                type Value = &'a $ty;

                #[inline]
                fn is_present(&self) -> bool {
                    true
                }

                #[inline]
                fn into_present(self) -> Option<&'a $ty> {
                    Some(self)
                }
            }
        )*
    };
}

always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

/// Generic containers whose every value is present
macro_rules! always_present_generic {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> Presence for $ty<T> {
                type Value = $ty<T>;

                #[inline]
                fn is_present(&self) -> bool {
                    true
                }

                #[inline]
                fn into_present(self) -> Option<$ty<T>> {
                    Some(self)
                }
            }
        )*
    };
}

always_present_generic!(Box, Rc, Arc);

impl<T> Presence for Vec<T> {
    type Value = Vec<T>;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_present(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl<'a, B: ?Sized + ToOwned> Presence for Cow<'a, B> {
    type Value = Cow<'a, B>;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_present(self) -> Option<Cow<'a, B>> {
        Some(self)
    }
}

impl<'a> Presence for &'a str {
    type Value = &'a str;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_present(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a, T> Presence for &'a [T] {
    type Value = &'a [T];

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_present(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<'a, T> Presence for &'a Vec<T> {
    type Value = &'a Vec<T>;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_present(self) -> Option<&'a Vec<T>> {
        Some(self)
    }
}

// A borrowed sentinel is still the sentinel.
impl<'a, T> Presence for &'a Option<T> {
    type Value = &'a T;

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn into_present(self) -> Option<&'a T> {
        self.as_ref()
    }
}

/// Legacy truthy classification, kept for auditing migrations.
///
/// Earlier revisions treated a value as present when it coerced to `true`,
/// which silently dropped `0`, `""`, `false` and `NaN`. Use
/// [`diverges_from_legacy`] to find inputs whose classification changed.
pub mod legacy {
    use super::Presence;

    /// Boolean coercion as the legacy revisions applied it
    pub trait Truthy {
        fn is_truthy(&self) -> bool;
    }

    macro_rules! truthy_int {
        ($($ty:ty),*) => {
            $(
                impl Truthy for $ty {
                    #[inline]
                    fn is_truthy(&self) -> bool {
                        *self != 0
                    }
                }
            )*
        };
    }

    truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

    macro_rules! truthy_float {
        ($($ty:ty),*) => {
            $(
                impl Truthy for $ty {
                    #[inline]
                    fn is_truthy(&self) -> bool {
                        // NaN != 0.0 holds, so test it separately
                        !self.is_nan() && *self != 0.0
                    }
                }
            )*
        };
    }

    truthy_float!(f32, f64);

    impl Truthy for bool {
        #[inline]
        fn is_truthy(&self) -> bool {
            *self
        }
    }

    impl Truthy for char {
        #[inline]
        fn is_truthy(&self) -> bool {
            true
        }
    }

    impl Truthy for str {
        #[inline]
        fn is_truthy(&self) -> bool {
            !self.is_empty()
        }
    }

    impl Truthy for String {
        #[inline]
        fn is_truthy(&self) -> bool {
            !self.is_empty()
        }
    }

    // Collections were objects in the legacy model, and objects are truthy.
    impl<T> Truthy for Vec<T> {
        #[inline]
        fn is_truthy(&self) -> bool {
            true
        }
    }

    impl<T: Truthy> Truthy for Option<T> {
        #[inline]
        fn is_truthy(&self) -> bool {
            self.as_ref().is_some_and(Truthy::is_truthy)
        }
    }

    impl<T: Truthy + ?Sized> Truthy for &T {
        #[inline]
        fn is_truthy(&self) -> bool {
            (**self).is_truthy()
        }
    }

    /// True when the strict predicate and the legacy truthy rule disagree
    pub fn diverges_from_legacy<P: Presence + Truthy>(value: &P) -> bool {
        value.is_present() != value.is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::legacy::{diverges_from_legacy, Truthy};
    use super::*;

    #[test]
    fn test_option_sentinel() {
        assert!(!None::<i32>.is_present());
        assert!(Some(1).is_present());
        assert_eq!(Some(7).into_present(), Some(7));
        assert_eq!(None::<u8>.into_present(), None);
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert!(0i32.is_present());
        assert!(0u64.is_present());
        assert!(0.0f64.is_present());
        assert!((-0.0f32).is_present());
        assert!(f64::NAN.is_present());
        assert!(false.is_present());
        assert!('\0'.is_present());
        assert!("".is_present());
        assert!(String::new().is_present());
        assert!(Vec::<u8>::new().is_present());
    }

    #[test]
    fn test_some_of_falsy_is_present() {
        assert_eq!(Some(0).into_present(), Some(0));
        assert_eq!(Some("").into_present(), Some(""));
        assert_eq!(Some(false).into_present(), Some(false));
    }

    #[test]
    fn test_nested_option_classifies_outer_layer() {
        let inner_absent: Option<Option<i32>> = Some(None);
        assert!(inner_absent.is_present());
        assert_eq!(inner_absent.into_present(), Some(None));
    }

    #[test]
    fn test_borrowed_sentinel_is_absent() {
        let none: Option<i32> = None;
        assert!(!(&none).is_present());
        assert_eq!((&none).into_present(), None);

        let zero = Some(0);
        assert!((&zero).is_present());
        assert_eq!((&zero).into_present(), Some(&0));
    }

    #[test]
    fn test_borrowed_values_are_present() {
        let text = String::new();
        let items: Vec<u8> = Vec::new();
        assert!((&text).is_present());
        assert!((&items).is_present());
        assert!(items.as_slice().is_present());
        assert!((&0i32).is_present());
        assert!((&false).is_present());
        assert_eq!((&f64::NAN).into_present().map(|v| v.is_nan()), Some(true));
    }

    #[test]
    fn test_legacy_divergence_on_references() {
        let none: Option<i32> = None;
        let zero = Some(0);
        assert!(!diverges_from_legacy(&&none));
        assert!(diverges_from_legacy(&&zero));
        assert!(diverges_from_legacy(&""));
        assert!(!diverges_from_legacy(&"x"));
    }

    #[test]
    fn test_smart_pointers_present() {
        assert!(Box::new(0).is_present());
        assert!(Rc::new("").is_present());
        assert!(Arc::<str>::from("").is_present());
        assert!(Cow::Borrowed("").is_present());
    }

    #[test]
    fn test_legacy_truthiness() {
        assert!(!0i32.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!0.0f32.is_truthy());
        assert!(!false.is_truthy());
        assert!(!"".is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(5i32.is_truthy());
        assert!("x".is_truthy());
        assert!(Vec::<u8>::new().is_truthy());
    }

    #[test]
    fn test_legacy_divergence() {
        assert!(diverges_from_legacy(&0i64));
        assert!(diverges_from_legacy(&String::new()));
        assert!(diverges_from_legacy(&false));
        assert!(diverges_from_legacy(&f32::NAN));
        assert!(diverges_from_legacy(&Some(0u8)));

        assert!(!diverges_from_legacy(&42i64));
        assert!(!diverges_from_legacy(&None::<i64>));
        assert!(!diverges_from_legacy(&"value"));
    }
}
