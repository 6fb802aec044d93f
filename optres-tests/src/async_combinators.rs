use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::{future::BoxFuture, FutureExt};
use optres::experimental::AsyncMappableFrame;
use optres::{Option as Opt, PartiallyApplied, Result as Res};

async fn slow_double(x: i32) -> i32 {
    tokio::time::sleep(Duration::from_millis(1)).await;
    x * 2
}

fn counted_double(calls: Arc<AtomicUsize>) -> impl Fn(i32) -> BoxFuture<'static, Res<i64, String>> + Send + Sync {
    move |x| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if x < 0 {
                Res::Err(format!("{x} is negative"))
            } else {
                Res::Ok(x as i64 * 2)
            }
        }
        .boxed()
    }
}

#[test]
fn option_async_combinators() {
    let rt = tokio::runtime::Runtime::new().unwrap();

    rt.block_on(async {
        assert_eq!(Opt::Some(4).map_async(slow_double).await, Opt::Some(8));
        assert_eq!(Opt::None.map_async(slow_double).await, Opt::None);

        let halve = |x: i32| async move { if x % 2 == 0 { Opt::Some(x / 2) } else { Opt::None } };
        assert_eq!(Opt::Some(10).and_then_async(halve).await, Opt::Some(5));
        assert_eq!(Opt::Some(3).and_then_async(halve).await, Opt::None);

        assert_eq!(Opt::None.or_else_async(|| async { Opt::Some(1) }).await, Opt::Some(1));
        assert_eq!(Opt::Some(slow_double(21)).transpose_future().await, Opt::Some(42));
    });
}

#[test]
fn result_async_combinators() {
    let rt = tokio::runtime::Runtime::new().unwrap();

    rt.block_on(async {
        let ok: Res<i32, String> = Res::Ok(5);
        let err: Res<i32, String> = Res::Err("bad".to_string());

        assert_eq!(ok.clone().map_async(slow_double).await, Res::Ok(10));
        assert_eq!(err.clone().map_async(slow_double).await, err.clone());
        assert_eq!(
            err.clone().map_err_async(|e| async move { e.len() }).await,
            Res::<i32, usize>::Err(3)
        );
        assert_eq!(
            ok.clone()
                .and_then_async(|x| async move { Res::<i32, String>::Err(format!("rejected {x}")) })
                .await,
            Res::Err("rejected 5".to_string())
        );
        assert_eq!(
            err.or_else_async(|e| async move { Res::<i32, ()>::Ok(e.len() as i32) }).await,
            Res::Ok(3)
        );
    });
}

#[test]
fn async_callbacks_are_skipped() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    rt.block_on(async {
        let count = |calls: &Arc<AtomicUsize>| {
            calls.fetch_add(1, Ordering::SeqCst);
        };

        Opt::<i32>::None.map_async(|x| { count(&calls); async move { x } }).await;
        Opt::Some(1).or_else_async(|| { count(&calls); async { Opt::None } }).await;
        Res::<i32, ()>::Err(()).and_then_async(|x| { count(&calls); async move { Res::Ok(x) } }).await;
        Res::<i32, ()>::Ok(1).map_err_async(|e| { count(&calls); async move { e } }).await;
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn async_frames() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    rt.block_on(async {
        type OptFrame = Opt<PartiallyApplied>;
        type ResFrame = Res<PartiallyApplied, &'static str>;

        assert_eq!(
            OptFrame::map_frame_async(Opt::Some(3), counted_double(calls.clone())).await,
            Res::Ok(Opt::Some(6))
        );
        assert_eq!(
            OptFrame::map_frame_async(Opt::Some(-3), counted_double(calls.clone())).await,
            Res::Err("-3 is negative".to_string())
        );
        assert_eq!(
            OptFrame::map_frame_async(Opt::None, counted_double(calls.clone())).await,
            Res::Ok(Opt::None)
        );
        assert_eq!(
            ResFrame::map_frame_async(Res::Err("inner"), counted_double(calls.clone())).await,
            Res::Ok(Res::Err("inner"))
        );
        assert_eq!(
            ResFrame::map_frame_async(Res::Ok(1), counted_double(calls.clone())).await,
            Res::Ok(Res::Ok(2))
        );
    });

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
