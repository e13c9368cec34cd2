// Integration tests for the playback controller
//
// Timing is driven by synthetic `Instant`s derived from one base instant, so
// these tests never sleep.

use std::time::{Duration, Instant};

use tacocat::playback::{Playback, DEFAULT_SPEED_MS};
use tacocat::trace::generate_trace;

fn loaded(input: &str) -> Playback {
    let mut playback = Playback::new();
    playback.load_trace(generate_trace(input));
    playback
}

#[test]
fn test_new_controller_is_idle() {
    let playback = Playback::new();
    assert_eq!(playback.total_steps(), 0);
    assert_eq!(playback.current_index(), 0);
    assert!(!playback.is_playing());
    assert_eq!(playback.speed(), Duration::from_millis(DEFAULT_SPEED_MS));
}

#[test]
fn test_idle_controller_transport_is_noop() {
    let mut playback = Playback::new();
    let now = Instant::now();

    playback.play(now);
    assert!(!playback.is_playing(), "play on an empty trace must not start");

    playback.next_step();
    playback.prev_step();
    playback.seek(3);
    assert_eq!(playback.current_index(), 0);

    assert!(!playback.tick(now + Duration::from_secs(10)));
}

#[test]
fn test_load_trace_resets_state() {
    let mut playback = loaded("racecar");
    playback.next_step();
    playback.next_step();
    playback.play(Instant::now());

    playback.load_trace(generate_trace("hello"));
    assert_eq!(playback.current_index(), 0);
    assert!(!playback.is_playing());
    assert_eq!(playback.total_steps(), 3);

    // No timer survives the swap
    assert!(!playback.tick(Instant::now() + Duration::from_secs(10)));
}

#[test]
fn test_auto_advance_visits_every_step_once() {
    let mut playback = loaded("racecar");
    let total = playback.total_steps();
    assert_eq!(total, 7);

    let t0 = Instant::now();
    let speed = playback.speed();
    playback.play(t0);
    assert!(playback.is_playing());

    // Each firing advances exactly one step; the last one auto-pauses.
    let mut visited = vec![playback.current_index()];
    let mut now = t0;
    for _ in 0..total - 1 {
        // Just before the deadline nothing happens
        assert!(!playback.tick(now + speed - Duration::from_millis(1)));
        now += speed;
        assert!(playback.tick(now), "timer failed to fire");
        visited.push(playback.current_index());
    }

    assert_eq!(visited, (0..total).collect::<Vec<_>>());
    assert_eq!(playback.current_index(), total - 1);
    assert!(
        !playback.is_playing(),
        "reaching the last step must auto-pause"
    );

    // No zombie timer after the auto-pause
    assert!(!playback.tick(now + Duration::from_secs(10)));
}

#[test]
fn test_play_at_end_restarts_from_beginning() {
    let mut playback = loaded("hello");
    let last = playback.total_steps() - 1;
    playback.seek(last);
    assert_eq!(playback.current_index(), last);

    playback.play(Instant::now());
    assert_eq!(playback.current_index(), 0);
    assert!(playback.is_playing());
}

#[test]
fn test_play_mid_trace_resumes_in_place() {
    let mut playback = loaded("racecar");
    playback.next_step();
    playback.next_step();

    playback.play(Instant::now());
    assert_eq!(playback.current_index(), 2);
    assert!(playback.is_playing());
}

#[test]
fn test_pause_cancels_timer() {
    let mut playback = loaded("racecar");
    let t0 = Instant::now();
    playback.play(t0);
    playback.pause();
    assert!(!playback.is_playing());

    // The cancelled deadline never fires
    assert!(!playback.tick(t0 + Duration::from_secs(10)));
    assert_eq!(playback.current_index(), 0);

    // Idempotent
    playback.pause();
    assert!(!playback.is_playing());
}

#[test]
fn test_manual_navigation_implicitly_pauses() {
    let mut playback = loaded("racecar");
    let t0 = Instant::now();

    playback.play(t0);
    playback.next_step();
    assert!(!playback.is_playing(), "next_step while playing must pause");
    assert_eq!(playback.current_index(), 1);
    assert!(!playback.tick(t0 + Duration::from_secs(10)));

    playback.play(t0);
    playback.prev_step();
    assert!(!playback.is_playing(), "prev_step while playing must pause");

    playback.play(t0);
    playback.seek(3);
    assert!(!playback.is_playing(), "seek while playing must pause");
    assert_eq!(playback.current_index(), 3);
}

#[test]
fn test_step_bounds() {
    let mut playback = loaded("ab");
    let last = playback.total_steps() - 1;

    playback.prev_step();
    assert_eq!(playback.current_index(), 0, "prev_step must not wrap");

    for _ in 0..10 {
        playback.next_step();
    }
    assert_eq!(playback.current_index(), last, "next_step must not wrap");

    playback.seek(usize::MAX);
    assert_eq!(playback.current_index(), last, "out-of-range seek ignored");
}

#[test]
fn test_reset_returns_to_start_paused() {
    let mut playback = loaded("racecar");
    playback.seek(4);
    playback.play(Instant::now());

    playback.reset();
    assert_eq!(playback.current_index(), 0);
    assert!(!playback.is_playing());

    // Idempotent
    playback.reset();
    assert_eq!(playback.current_index(), 0);
    assert!(!playback.is_playing());
}

#[test]
fn test_set_speed_rearms_pending_wait() {
    let mut playback = loaded("racecar");
    let t0 = Instant::now();
    playback.play(t0); // deadline at t0 + 600ms

    // Changing the speed restarts the wait from now with the new delay
    let t1 = t0 + Duration::from_millis(100);
    playback.set_speed(300, t1);
    assert_eq!(playback.speed(), Duration::from_millis(300));

    assert!(
        !playback.tick(t1 + Duration::from_millis(299)),
        "stale deadline honored after speed change"
    );
    assert!(playback.tick(t1 + Duration::from_millis(300)));
    assert_eq!(playback.current_index(), 1);
}

#[test]
fn test_set_speed_while_paused_does_not_schedule() {
    let mut playback = loaded("racecar");
    let t0 = Instant::now();
    playback.set_speed(300, t0);
    assert!(!playback.is_playing());
    assert!(!playback.tick(t0 + Duration::from_secs(10)));
}

#[test]
fn test_zero_speed_is_clamped() {
    let mut playback = loaded("racecar");
    playback.set_speed(0, Instant::now());
    assert_eq!(playback.speed(), Duration::from_millis(1));
}

#[test]
fn test_single_step_trace_play() {
    // The empty-input trace has exactly one step: play restarts at 0 and the
    // first firing pauses without moving
    let mut playback = loaded("");
    assert_eq!(playback.total_steps(), 1);

    let t0 = Instant::now();
    playback.play(t0);
    assert!(playback.is_playing());
    assert_eq!(playback.current_index(), 0);

    assert!(playback.tick(t0 + playback.speed()));
    assert_eq!(playback.current_index(), 0);
    assert!(!playback.is_playing());
}

#[test]
fn test_current_step_follows_index() {
    let mut playback = loaded("hello");
    assert_eq!(playback.current_step().map(|s| s.index), Some(0));

    playback.next_step();
    assert_eq!(playback.current_step().map(|s| s.index), Some(1));
    assert!(playback.current_step().is_some_and(|s| s.comparing));

    playback.next_step();
    assert_eq!(playback.current_step().and_then(|s| s.result), Some(false));
}
