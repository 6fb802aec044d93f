//! Asynchronous combinators, gated behind the `experimental` feature.
//!
//! Each combinator builds its callback's future only when the active variant
//! needs it: `Some(4).map_async(f)` calls `f`, `None.map_async(f)` never does.

pub mod combinators;
pub mod frame;

pub use frame::AsyncMappableFrame;
