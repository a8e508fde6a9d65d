//! Presence - Optional (Maybe) values with a strict presence predicate
//!
//! This crate provides:
//! - The presence predicate ([`Presence`]) and a legacy truthy audit
//! - The `Present` / `Absent` variants and the [`Optional`] sum over them
//! - Factory functions (`of`, `absent`, `from_nullable`)
//! - Error types with stable codes
//!
//! ```rust
//! use presence_core::{absent, from_nullable, of, OptionalError};
//!
//! assert_eq!(of(5).unwrap().get(), Ok(5));
//! assert!(of(0).unwrap().is_present());
//! assert_eq!(absent::<i32>().get(), Err(OptionalError::MustBePresent));
//! assert!(!from_nullable(None::<i32>).is_present());
//! assert_eq!(of("x").unwrap().transform(|s: &str| s.len()).get(), Ok(1));
//! ```

pub mod error;
pub mod factory;
pub mod optional;
pub mod presence;

pub use error::*;
pub use factory::*;
pub use optional::*;
pub use presence::*;
