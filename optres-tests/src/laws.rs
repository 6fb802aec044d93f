use crate::arbitrary::{arb_option, arb_result};
use optres::{MappableFrame, Option as Opt, PartiallyApplied, Result as Res, TryMappableFrame};
use proptest::prelude::*;

type OptFrame = Opt<PartiallyApplied>;
type ResFrame = Res<PartiallyApplied, String>;

fn halve_if_even(v: i32) -> Opt<i32> {
    if v % 2 == 0 {
        Opt::Some(v / 2)
    } else {
        Opt::None
    }
}

fn decrement_positive(v: i32) -> Opt<i32> {
    if v > 0 {
        Opt::Some(v - 1)
    } else {
        Opt::None
    }
}

fn checked_double(v: i32) -> Res<i32, String> {
    match v.checked_mul(2) {
        Some(d) => Res::Ok(d),
        None => Res::Err(format!("{v} overflows when doubled")),
    }
}

fn non_negative(v: i32) -> Res<i32, String> {
    if v >= 0 {
        Res::Ok(v)
    } else {
        Res::Err(format!("{v} is negative"))
    }
}

/// map through any frame, generically
fn map_via_frame<F: MappableFrame>(frame: F::Frame<i32>, f: impl FnMut(i32) -> i64) -> F::Frame<i64> {
    F::map_frame(frame, f)
}

proptest! {
    #[test]
    fn option_discriminator_is_exhaustive(x in arb_option(any::<i32>())) {
        prop_assert!(x.is_some() ^ x.is_none());
    }

    #[test]
    fn result_discriminator_is_exhaustive(r in arb_result(any::<i32>(), any::<u8>())) {
        prop_assert!(r.is_ok() ^ r.is_err());
        prop_assert_eq!(r.ok().is_some(), r.is_ok());
        prop_assert_eq!(r.err().is_some(), r.is_err());
    }

    #[test]
    fn map_identity(x in arb_option(any::<i32>()), r in arb_result(any::<i32>(), ".*")) {
        prop_assert_eq!(x.map(|v| v), x);
        prop_assert_eq!(r.clone().map(|v| v), r.clone());
        prop_assert_eq!(r.clone().map_err(|e| e), r);
    }

    #[test]
    fn map_composes(x in arb_option(any::<i32>())) {
        let f = |v: i32| v as i64;
        let g = |v: i64| v * 3;
        prop_assert_eq!(x.map(f).map(g), x.map(|v| g(f(v))));
    }

    #[test]
    fn frame_map_agrees_with_map(x in arb_option(any::<i32>()), r in arb_result(any::<i32>(), ".*")) {
        let widen = |v: i32| v as i64 + 1;
        prop_assert_eq!(map_via_frame::<OptFrame>(x, widen), x.map(widen));
        prop_assert_eq!(map_via_frame::<ResFrame>(r.clone(), widen), r.map(widen));
    }

    #[test]
    fn try_frame_is_map_then_transpose(x in arb_option(any::<i32>())) {
        prop_assert_eq!(OptFrame::try_map_frame(x, checked_double), x.map(checked_double).transpose());
    }

    #[test]
    fn option_monad_laws(a in any::<i32>(), m in arb_option(any::<i32>())) {
        // left identity
        prop_assert_eq!(Opt::Some(a).and_then(halve_if_even), halve_if_even(a));
        // right identity
        prop_assert_eq!(m.and_then(Opt::Some), m);
        // associativity
        prop_assert_eq!(
            m.and_then(halve_if_even).and_then(decrement_positive),
            m.and_then(|v| halve_if_even(v).and_then(decrement_positive))
        );
    }

    #[test]
    fn result_monad_laws(a in any::<i32>(), m in arb_result(any::<i32>(), ".*")) {
        prop_assert_eq!(Res::Ok(a).and_then(checked_double), checked_double(a));
        prop_assert_eq!(m.clone().and_then(Res::Ok), m.clone());
        prop_assert_eq!(
            m.clone().and_then(checked_double).and_then(non_negative),
            m.and_then(|v| checked_double(v).and_then(non_negative))
        );
    }

    #[test]
    fn xor_truth_table(x in arb_option(any::<i8>()), y in arb_option(any::<i8>())) {
        let expected = match (x, y) {
            (Opt::Some(a), Opt::None) => Opt::Some(a),
            (Opt::None, Opt::Some(b)) => Opt::Some(b),
            _ => Opt::None,
        };
        prop_assert_eq!(x.xor(y), expected);
        prop_assert_eq!(x.xor(y).is_some(), x.is_some() ^ y.is_some());
    }

    #[test]
    fn zip_requires_both(x in arb_option(any::<i8>()), y in arb_option(".*")) {
        let zipped = x.zip(y.clone());
        prop_assert_eq!(zipped.is_some(), x.is_some() && y.is_some());
        if zipped.is_some() {
            prop_assert_eq!(zipped.unzip(), (x, y));
        }
    }

    #[test]
    fn transpose_round_trips(
        x in arb_option(arb_result(any::<i32>(), any::<u8>())),
        r in arb_result(arb_option(any::<i32>()), any::<u8>())
    ) {
        prop_assert_eq!(x.transpose().transpose(), x);
        prop_assert_eq!(r.transpose().transpose(), r);
    }

    #[test]
    fn flatten_removes_one_level(x in arb_option(arb_option(any::<i32>()))) {
        prop_assert_eq!(Opt::Some(x).flatten(), x);
        prop_assert_eq!(Opt::<Opt<Opt<i32>>>::None.flatten(), Opt::None);
        let expected = match x {
            Opt::Some(inner) => inner,
            Opt::None => Opt::None,
        };
        prop_assert_eq!(x.flatten(), expected);
    }

    #[test]
    fn ok_or_then_ok_is_identity(x in arb_option(any::<i32>()), e in any::<u8>()) {
        prop_assert_eq!(x.ok_or(e).ok(), x);
        prop_assert_eq!(x.ok_or(e).err().is_some(), x.is_none());
    }

    #[test]
    fn filter_agrees_with_predicate(x in arb_option(any::<i32>())) {
        let kept = x.filter(|v| *v > 0);
        prop_assert_eq!(kept.is_some(), x.is_some_and(|v| v > 0));
    }

    #[test]
    fn agrees_with_std(x in arb_option(any::<i32>()), r in arb_result(any::<i32>(), any::<u8>())) {
        let std_x: Option<i32> = x.into_std();
        prop_assert_eq!(Opt::from(std_x), x);
        prop_assert_eq!(x.unwrap_or(7), std_x.unwrap_or(7));
        prop_assert_eq!(x.map_or(0, |v| v / 2), std_x.map_or(0, |v| v / 2));

        let std_r: Result<i32, u8> = r.into_std();
        prop_assert_eq!(Res::from(std_r), r);
        prop_assert_eq!(r.unwrap_or_else(i32::from), std_r.unwrap_or_else(i32::from));
        prop_assert_eq!(r.ok().into_std(), std_r.ok());
    }

    #[test]
    fn collect_agrees_with_std(xs in proptest::collection::vec(arb_option(any::<i16>()), 0..16)) {
        let ours: Opt<Vec<i16>> = xs.iter().copied().collect();
        let theirs: Option<Vec<i16>> = xs.iter().map(|x| x.into_std()).collect();
        prop_assert_eq!(ours.into_std(), theirs);
    }

    #[test]
    fn collect_results_agrees_with_std(xs in proptest::collection::vec(arb_result(any::<i16>(), any::<u8>()), 0..16)) {
        let ours: Res<Vec<i16>, u8> = xs.iter().copied().collect();
        let theirs: Result<Vec<i16>, u8> = xs.iter().map(|x| x.into_std()).collect();
        prop_assert_eq!(ours.into_std(), theirs);
    }
}

#[test]
fn lazy_callbacks_are_skipped() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let bump = || calls.set(calls.get() + 1);

    assert_eq!(Opt::Some(4).unwrap_or_else(|| { bump(); 0 }), 4);
    assert_eq!(Opt::Some(4).or_else(|| { bump(); Opt::None }), Opt::Some(4));
    assert_eq!(Opt::Some(4).map_or_else(|| { bump(); 0 }, |v| v), 4);
    assert_eq!(Opt::Some(4).ok_or_else(|| { bump(); "missing" }), Res::Ok(4));
    assert_eq!(Opt::<i32>::None.and_then(|v| { bump(); Opt::Some(v) }), Opt::None);
    assert_eq!(Opt::<i32>::None.map(|v| { bump(); v }), Opt::None);

    assert_eq!(Res::<i32, &str>::Ok(1).unwrap_or_else(|_| { bump(); 0 }), 1);
    assert_eq!(Res::<i32, &str>::Ok(1).or_else(|e| { bump(); Res::<i32, &str>::Err(e) }), Res::Ok(1));
    assert_eq!(Res::<i32, &str>::Err("e").and_then(|v| { bump(); Res::Ok(v) }), Res::Err("e"));
    assert_eq!(Res::<i32, &str>::Err("e").map(|v| { bump(); v }), Res::Err("e"));
    assert_eq!(Res::<i32, &str>::Ok(1).map_err(|e| { bump(); e }), Res::Ok(1));
    assert_eq!(Res::<i32, &str>::Ok(1).map_or_else(|_| { bump(); 0 }, |v| v), 1);

    assert_eq!(calls.get(), 0);
}
