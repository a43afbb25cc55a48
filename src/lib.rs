//! Boxed optionals over a dynamic value domain.
//!
//! [`Optional`] tells an explicitly-held value apart from the two absence
//! sentinels, `null` and `undefined`, and layers a small combinator API
//! (map, flat_map, filter, equality) on top of [`Value`].

pub mod error;
pub mod optional;
pub mod value;

pub use error::{Error, Result};
pub use optional::Optional;
pub use value::{Key, Value};
