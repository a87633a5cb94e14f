//! Clock behavior under deterministic (paused) tokio time, plus the
//! no-lost-update guarantee under real concurrency.

use std::time::Duration;

use timewaster_core::SessionStore;

#[tokio::test(start_paused = true)]
async fn ticks_advance_elapsed_once_per_second() {
    let store = SessionStore::new();
    assert!(store.start_timer().is_some());

    // Land between ticks so the count is unambiguous.
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(store.elapsed_seconds(), 3);
}

#[tokio::test(start_paused = true)]
async fn elapsed_does_not_advance_before_start() {
    let store = SessionStore::new();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(store.elapsed_seconds(), 0);
}

#[tokio::test(start_paused = true)]
async fn stop_freezes_elapsed() {
    let store = SessionStore::new();
    store.start_timer();
    tokio::time::sleep(Duration::from_millis(2_500)).await;

    assert!(store.stop_timer().is_some());
    assert!(!store.timer_running());
    let frozen = store.elapsed_seconds();
    assert_eq!(frozen, 2);

    // No tick may land after stop() has returned.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(store.elapsed_seconds(), frozen);
}

#[tokio::test(start_paused = true)]
async fn double_start_keeps_a_single_tick_stream() {
    let store = SessionStore::new();
    assert!(store.start_timer().is_some());
    assert!(store.start_timer().is_none());

    tokio::time::sleep(Duration::from_millis(4_500)).await;
    // A doubled stream would read 8 here.
    assert_eq!(store.elapsed_seconds(), 4);
}

#[tokio::test(start_paused = true)]
async fn double_stop_is_a_no_op() {
    let store = SessionStore::new();
    store.start_timer();
    assert!(store.stop_timer().is_some());
    assert!(store.stop_timer().is_none());
}

#[tokio::test(start_paused = true)]
async fn stop_before_start_is_a_no_op() {
    let store = SessionStore::new();
    assert!(store.stop_timer().is_none());
}

#[tokio::test(start_paused = true)]
async fn reset_stops_the_clock_with_no_stray_tick() {
    let store = SessionStore::new();
    store.start_timer();
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(store.elapsed_seconds(), 2);

    store.reset();
    assert!(!store.timer_running());
    assert_eq!(store.elapsed_seconds(), 0);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(store.elapsed_seconds(), 0);
}

#[tokio::test(start_paused = true)]
async fn restart_after_stop_resumes_ticking() {
    let store = SessionStore::new();
    store.start_timer();
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    store.stop_timer();

    store.start_timer();
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(store.elapsed_seconds(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn clicks_are_never_lost_while_the_clock_runs() {
    let store = SessionStore::new();
    store.start_timer();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let handle = store.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..250 {
                handle.record_click();
            }
        }));
    }
    for handle in handles {
        handle.await.expect("click task panicked");
    }

    assert_eq!(store.total_clicks(), 2_000);
    store.stop_timer();
}
