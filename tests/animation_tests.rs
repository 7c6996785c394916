// Integration tests for box identity driven by real traces

use algoviz::playback::{Clock, ManualClock, PlaybackConfig, PlaybackController, PlaybackState};
use algoviz::samples::Sample;
use algoviz::simulator::generate;
use algoviz::ui::slots::{SlotLayout, SWAP_ANIMATION_DURATION};
use rstest::rstest;
use std::time::{Duration, Instant};

fn setup(sample: Sample) -> (PlaybackController, ManualClock, SlotLayout) {
    let clock = ManualClock::new();
    let config = PlaybackConfig {
        speed: Duration::from_millis(1000),
        auto_play: false,
    };
    let mut controller = PlaybackController::with_clock(config, clock.clone());
    controller.set_trace(generate(sample.source()));

    let mut slots = SlotLayout::new();
    slots.reset(controller.original_array_values());
    (controller, clock, slots)
}

/// Same per-frame sync the app performs
fn sync(controller: &PlaybackController, slots: &mut SlotLayout, now: Instant) {
    let values = controller
        .entities()
        .arrays
        .first()
        .map(|a| a.values.clone())
        .unwrap_or_default();
    slots.update(&values, controller.swap_animation(), now);
}

fn shown(slots: &SlotLayout, now: Instant) -> Vec<i64> {
    let mut boxes = slots.boxes(now);
    boxes.sort_by_key(|(slot, _)| slot.physical_index);
    boxes.into_iter().map(|(slot, _)| slot.logical_value).collect()
}

fn snapshot_array(controller: &PlaybackController) -> Vec<i64> {
    controller
        .current()
        .and_then(|s| s.variables.array("arr"))
        .map(|a| a.to_vec())
        .unwrap_or_default()
}

#[test]
fn test_first_bubble_swap_lands_in_snapshot_order() {
    let (mut controller, clock, mut slots) = setup(Sample::BubbleSort);

    // Steps 7..=9 overwrite arr in place; step 10 is the swap
    while controller.current_step() < 10 {
        assert!(controller.next());
        sync(&controller, &mut slots, clock.now());
        if controller.current_step() < 10 {
            assert_eq!(shown(&slots, clock.now()), vec![64, 34, 25, 12, 22, 11, 90]);
        }
    }
    assert!(slots.is_animating());

    clock.advance(SWAP_ANIMATION_DURATION);
    controller.tick();
    sync(&controller, &mut slots, clock.now());
    assert!(!slots.is_animating());
    assert_eq!(shown(&slots, clock.now()), snapshot_array(&controller));
    assert_eq!(shown(&slots, clock.now()), vec![34, 64, 25, 12, 22, 11, 90]);

    // The record clears later; the layout must not snap back
    clock.advance(Duration::from_millis(600));
    controller.tick();
    assert!(controller.swap_animation().is_none());
    sync(&controller, &mut slots, clock.now());
    assert_eq!(shown(&slots, clock.now()), vec![34, 64, 25, 12, 22, 11, 90]);

    // Box 0 was created for 64 and now sits at position 1
    let (first_box, _) = slots.boxes(clock.now())[0];
    assert_eq!(first_box.logical_value, 64);
    assert_eq!(first_box.physical_index, 1);
}

#[rstest]
#[case(Sample::BubbleSort, vec![11, 12, 22, 25, 34, 64, 90])]
#[case(Sample::ReverseArray, vec![7, 6, 5, 4, 3, 2, 1])]
fn test_full_playback_ends_in_final_order(#[case] sample: Sample, #[case] expected: Vec<i64>) {
    let (mut controller, clock, mut slots) = setup(sample);
    controller.play();

    let frame = Duration::from_millis(50);
    while controller.state() != PlaybackState::Completed {
        clock.advance(frame);
        controller.tick();
        sync(&controller, &mut slots, clock.now());

        // Whenever nothing moves, the boxes agree with a swap-complete state
        if !slots.is_animating() && controller.swap_animation().is_none() {
            let kind = controller.current().map(|s| s.kind);
            if kind == Some(algoviz::snapshot::StepKind::Swap) {
                assert_eq!(shown(&slots, clock.now()), snapshot_array(&controller));
            }
        }
    }

    clock.advance(SWAP_ANIMATION_DURATION + Duration::from_millis(600));
    controller.tick();
    sync(&controller, &mut slots, clock.now());
    assert_eq!(shown(&slots, clock.now()), expected);
    assert_eq!(snapshot_array(&controller), expected);
}

#[test]
fn test_stepping_back_resyncs_to_snapshot() {
    let (mut controller, clock, mut slots) = setup(Sample::BubbleSort);
    controller.set_step(9);
    sync(&controller, &mut slots, clock.now());
    assert_eq!(shown(&slots, clock.now()), vec![64, 34, 25, 12, 22, 11, 90]);

    // A jump is not animated, so the layout follows the snapshot instead
    assert!(controller.previous());
    slots.request_resync();
    sync(&controller, &mut slots, clock.now());
    assert_eq!(shown(&slots, clock.now()), snapshot_array(&controller));
    assert_eq!(shown(&slots, clock.now()), vec![34, 34, 25, 12, 22, 11, 90]);
}
