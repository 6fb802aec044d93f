//! Option and result combinator algebra as plain tagged enums.
//!
//! Two closed, two-case types:
//!
//! - [`Option<T>`]: [`Some`] holds a value, [`None`] holds nothing.
//! - [`Result<T, E>`]: [`Ok`] holds a success value, [`Err`] holds an error value.
//!
//! Each combinator is a single exhaustive `match` over the variants. Reading a payload
//! means matching on the variant (or supplying a fallback via `unwrap_or*` / `map_or*`),
//! so there is no way to read the payload of the wrong variant and nothing in this
//! crate panics.
//!
//! ```rust
//! use optres::{None, Ok, Option, Result, Some};
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     Result::from(raw.parse::<u16>()).map_err(|e| format!("bad port {raw:?}: {e}"))
//! }
//!
//! let port: Option<&str> = Some("8080");
//! assert_eq!(port.map(parse_port).transpose(), Ok(Some(8080)));
//!
//! let port: Option<&str> = None;
//! assert_eq!(port.map(parse_port).transpose(), Ok(None));
//!
//! let port: Option<&str> = Some("http");
//! assert!(port.map(parse_port).transpose().is_err());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` using the same encoding as the std types.
//! - `experimental`: async combinators (`map_async`, `and_then_async`, ...) and
//!   [`experimental::AsyncMappableFrame`].

mod frame;
mod iter;
pub mod option;
pub mod result;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "experimental")]
pub mod experimental;

pub use frame::{MappableFrame, PartiallyApplied, TryMappableFrame};
pub use iter::{IntoIter, Iter};
pub use option::{from_nullable, from_undefinable, None, Option, Some};
pub use result::{Err, Ok, Result};
