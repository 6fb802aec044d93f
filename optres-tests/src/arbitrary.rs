//! proptest strategies for optres values.
//!
//! The variants are reached through the `Opt`/`Res` aliases instead of being imported,
//! since proptest's macros expand to bare std `Some`/`Ok`.

use optres::{Option as Opt, Result as Res};
use proptest::prelude::*;

/// Some or None with equal weight, payload drawn from `inner`.
pub fn arb_option<S>(inner: S) -> impl Strategy<Value = Opt<S::Value>>
where
    S: Strategy,
{
    proptest::option::of(inner).prop_map(Opt::from)
}

/// Ok or Err with equal weight.
pub fn arb_result<T, E>(ok: T, err: E) -> impl Strategy<Value = Res<T::Value, E::Value>>
where
    T: Strategy,
    E: Strategy,
{
    proptest::result::maybe_ok(ok, err).prop_map(Res::from)
}
