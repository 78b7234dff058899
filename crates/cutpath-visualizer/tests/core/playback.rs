use cutpath_visualizer::{PlaybackCommand, PlaybackController, PlaybackMode, TickOutcome};
use proptest::prelude::*;
use std::time::Duration;

fn controller(len: usize) -> PlaybackController {
    PlaybackController::new(Duration::from_millis(100), len)
}

#[test]
fn test_playback_clamp_at_end() {
    let mut playback = controller(10).with_mode(PlaybackMode::Realtime);
    playback.set_timer(1.3);
    assert_eq!(playback.tick(Duration::ZERO), TickOutcome::Exhausted);
    assert_eq!(playback.index(), 9);
    assert_eq!(playback.mode(), PlaybackMode::Paused);
    assert!((playback.timer() - 0.9).abs() < 1e-9);
}

#[test]
fn test_paused_does_not_advance() {
    let mut playback = controller(10);
    assert!(playback.is_paused());
    assert_eq!(
        playback.tick(Duration::from_millis(250)),
        TickOutcome::Updated
    );
    assert_eq!(playback.timer(), 0.0);
    assert_eq!(playback.index(), 0);
}

#[test]
fn test_realtime_advances_with_wall_clock() {
    let mut playback = controller(10);
    playback.apply(PlaybackCommand::TogglePlayback);
    assert_eq!(playback.mode(), PlaybackMode::Realtime);

    playback.tick(Duration::from_millis(250));
    assert!((playback.timer() - 0.25).abs() < 1e-9);
    assert_eq!(playback.index(), 2);
}

#[test]
fn test_lag_drops_tick() {
    let mut playback = controller(10).with_mode(PlaybackMode::Realtime);
    playback.set_timer(0.2);
    assert_eq!(
        playback.tick(Duration::from_millis(1500)),
        TickOutcome::Dropped
    );
    assert!((playback.timer() - 0.2).abs() < 1e-9);
    assert_eq!(playback.mode(), PlaybackMode::Realtime);
}

#[test]
fn test_custom_lag_threshold() {
    let mut playback = controller(100)
        .with_mode(PlaybackMode::Realtime)
        .with_lag_threshold(0.1);
    assert_eq!(
        playback.tick(Duration::from_millis(200)),
        TickOutcome::Dropped
    );
    assert_eq!(
        playback.tick(Duration::from_millis(50)),
        TickOutcome::Updated
    );
}

#[test]
fn test_step_forward_and_back() {
    let mut playback = controller(10);
    playback.apply(PlaybackCommand::StepForward);
    assert_eq!(playback.index(), 1);
    playback.apply(PlaybackCommand::IncreaseSkip { coarse: false });
    playback.apply(PlaybackCommand::StepForward);
    assert_eq!(playback.index(), 3);
    playback.apply(PlaybackCommand::StepBackward);
    assert_eq!(playback.index(), 1);
}

#[test]
fn test_step_back_past_start_clamps_to_zero() {
    let mut playback = controller(10);
    playback.apply(PlaybackCommand::StepForward);
    playback.apply(PlaybackCommand::IncreaseSkip { coarse: true });
    playback.apply(PlaybackCommand::StepBackward);
    assert_eq!(playback.timer(), 0.0);
    assert_eq!(playback.index(), 0);
}

#[test]
fn test_step_forward_past_end_pauses() {
    let mut playback = controller(5).with_mode(PlaybackMode::Realtime);
    playback.apply(PlaybackCommand::IncreaseSkip { coarse: true });
    playback.apply(PlaybackCommand::StepForward);
    assert_eq!(playback.index(), 4);
    assert!(playback.is_paused());
}

#[test]
fn test_restart() {
    let mut playback = controller(10);
    playback.set_timer(0.55);
    playback.apply(PlaybackCommand::Restart);
    assert_eq!(playback.timer(), 0.0);
}

#[test]
fn test_skip_bounds() {
    let mut playback = controller(10);
    playback.apply(PlaybackCommand::DecreaseSkip { coarse: false });
    assert_eq!(playback.step_skip(), 1);

    playback.apply(PlaybackCommand::IncreaseSkip { coarse: true });
    assert_eq!(playback.step_skip(), 11);
    playback.apply(PlaybackCommand::DecreaseSkip { coarse: true });
    assert_eq!(playback.step_skip(), 1);

    for _ in 0..20 {
        playback.apply(PlaybackCommand::IncreaseSkip { coarse: true });
    }
    assert_eq!(playback.step_skip(), 100);
}

#[test]
fn test_mode_label() {
    let mut playback = controller(10);
    assert_eq!(playback.to_string(), "frame skip 1");
    playback.apply(PlaybackCommand::TogglePlayback);
    assert_eq!(playback.to_string(), "realtime");
}

proptest! {
    #[test]
    fn prop_index_always_in_range(
        timer in 0.0f64..100.0,
        len in 1usize..200,
        wall_ms in 0u64..900,
    ) {
        let mut playback = controller(len).with_mode(PlaybackMode::Realtime);
        playback.set_timer(timer);
        playback.tick(Duration::from_millis(wall_ms));
        prop_assert!(playback.index() < len);
        prop_assert!(playback.timer() >= 0.0);
    }

    #[test]
    fn prop_clamped_timer_reports_last_index(len in 1usize..500) {
        let mut playback = controller(len);
        playback.set_timer(len as f64 * 0.1 + 5.0);
        playback.tick(Duration::ZERO);
        prop_assert_eq!(playback.index(), len - 1);
    }
}
