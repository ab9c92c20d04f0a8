//! Animation task tests on a paused tokio clock.

use std::time::Duration;

use lumen_core::{AnimationHandle, Loader, LoaderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_loader() -> Loader {
    Loader::with_rng(LoaderConfig::default(), StdRng::seed_from_u64(1)).expect("valid config")
}

#[tokio::test(start_paused = true)]
async fn publishes_frames_in_sequence() {
    let handle = AnimationHandle::spawn(seeded_loader());
    let mut frames = handle.frames();

    let mut last = 0;
    for _ in 0..5 {
        frames.changed().await.expect("animation running");
        let frame = frames.borrow_and_update().clone();
        assert!(frame.sequence > last);
        assert_eq!(frame.size, 96);
        assert_eq!(frame.circles().count() as u64, frame.sequence.min(101));
        last = frame.sequence;
    }

    assert!(handle.is_running());
    handle.stop().await.expect("clean shutdown");
}

#[tokio::test(start_paused = true)]
async fn no_frames_after_stop() {
    let handle = AnimationHandle::spawn(seeded_loader());
    let mut frames = handle.frames();
    frames.changed().await.expect("first frame");

    handle.stop().await.expect("clean shutdown");
    let stopped_at = frames.borrow_and_update().sequence;

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(frames.changed().await.is_err(), "sender dropped with the task");
    assert_eq!(frames.borrow().sequence, stopped_at);
}

#[tokio::test(start_paused = true)]
async fn dropping_handle_cancels() {
    let handle = AnimationHandle::spawn(seeded_loader());
    let mut frames = handle.frames();
    frames.changed().await.expect("first frame");

    drop(handle);
    // Drain anything published before the task noticed the cancellation.
    while frames.changed().await.is_ok() {}
}

#[tokio::test(start_paused = true)]
async fn runs_at_configured_rate() {
    let config = LoaderConfig {
        fps: 10,
        ..Default::default()
    };
    let loader = Loader::with_rng(config, StdRng::seed_from_u64(2)).expect("valid config");
    let handle = AnimationHandle::spawn(loader);
    let frames = handle.frames();

    // The first tick fires immediately, then every 100ms.
    tokio::time::sleep(Duration::from_millis(1050)).await;
    assert_eq!(frames.borrow().sequence, 11);

    handle.cancel();
    assert!(!handle.is_running());
    handle.stop().await.expect("clean shutdown");
}
