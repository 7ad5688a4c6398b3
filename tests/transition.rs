use terralens::{LayoutMode, TransitionController, TransitionState, TRANSITION_SECS};

#[test]
fn requesting_the_displayed_mode_is_a_no_op() {
    let mut ctrl = TransitionController::new();
    assert!(!ctrl.request(LayoutMode::Embedding, LayoutMode::Embedding, 1.0));
    assert_eq!(ctrl.state(), TransitionState::Idle);
    assert_eq!(ctrl.progress(), 1.0, "idle progress stays at 1");
}

#[test]
fn eased_progress_is_zero_at_start_and_snaps_to_exactly_one() {
    let mut ctrl = TransitionController::new();
    assert!(ctrl.request(LayoutMode::Embedding, LayoutMode::Geographic, 10.0));
    assert_eq!(ctrl.tick(10.0), 0.0, "eased value must be 0 at linear = 0");

    let done = ctrl.tick(10.0 + TRANSITION_SECS);
    assert_eq!(done, 1.0, "progress must equal exactly 1 at the duration");
    assert_eq!(ctrl.state(), TransitionState::Idle, "controller reverts to idle");
}

#[test]
fn progress_is_non_decreasing_over_successive_ticks() {
    let mut ctrl = TransitionController::new();
    ctrl.request(LayoutMode::Embedding, LayoutMode::Geographic, 0.0);

    let mut last = 0.0;
    for step in 0..=100 {
        let now = step as f64 * (TRANSITION_SECS / 80.0); // runs past the duration
        let progress = ctrl.tick(now);
        assert!(
            progress >= last,
            "progress regressed from {last} to {progress} at t={now}"
        );
        assert!((0.0..=1.0).contains(&progress));
        last = progress;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn halfway_point_of_the_raised_cosine_is_one_half() {
    let mut ctrl = TransitionController::new();
    ctrl.request(LayoutMode::Embedding, LayoutMode::Geographic, 0.0);
    let mid = ctrl.tick(TRANSITION_SECS / 2.0);
    assert!((mid - 0.5).abs() < 1e-12, "cosine ease is 0.5 at linear 0.5, got {mid}");
}

#[test]
fn ticks_after_completion_keep_reporting_one() {
    let mut ctrl = TransitionController::new();
    ctrl.request(LayoutMode::Embedding, LayoutMode::Geographic, 0.0);
    ctrl.tick(TRANSITION_SECS + 1.0);
    assert_eq!(ctrl.tick(TRANSITION_SECS + 2.0), 1.0);
    assert!(!ctrl.is_animating());
}

#[test]
fn restart_mid_animation_uses_logical_mode_as_source() {
    // The logical mode switches at request time, so a second request while
    // still animating starts from the not-yet-settled target of the first.
    let mut ctrl = TransitionController::new();
    ctrl.request(LayoutMode::Embedding, LayoutMode::Geographic, 0.0);
    ctrl.tick(0.3);
    assert!(ctrl.is_animating());

    // UI-side logical mode is now Geographic; request a switch back.
    assert!(ctrl.request(LayoutMode::Geographic, LayoutMode::Embedding, 0.3));
    match ctrl.state() {
        TransitionState::Animating { source, target, start } => {
            assert_eq!(source, LayoutMode::Geographic);
            assert_eq!(target, LayoutMode::Embedding);
            assert_eq!(start, 0.3);
        }
        TransitionState::Idle => panic!("controller must be animating after restart"),
    }
    assert_eq!(ctrl.progress(), 0.0, "restart re-arms progress at 0");
}

#[test]
fn cancel_returns_to_idle_with_full_progress() {
    let mut ctrl = TransitionController::new();
    ctrl.request(LayoutMode::Embedding, LayoutMode::Geographic, 0.0);
    ctrl.tick(0.2);
    ctrl.cancel();
    assert_eq!(ctrl.state(), TransitionState::Idle);
    assert_eq!(ctrl.progress(), 1.0);
    assert!(ctrl.blend_modes().is_none());
}
