//! End-to-end sessions: edit through the controller, persist, restart.

use rgb_mixer::{
    Channel, ColorController, ColorState, ColorStore, InputReason, JsonFileStore, MemoryStore,
    MixerError, UpdateSource, load_or_default, save_or_log,
};

fn assert_disabled_means_zero(controller: &ColorController) {
    for (channel, ch) in controller.state().iter() {
        if !ch.enabled {
            assert_eq!(ch.value, 0.0, "{} is disabled but non-zero", channel);
        }
    }
}

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color_preferences.json");

    // First run
    {
        let store = JsonFileStore::new(&path);
        let mut controller = ColorController::with_state(load_or_default(&store));
        controller.set_slider_progress(Channel::Red, 100);
        controller.set_channel_value(Channel::Green, "0.5").unwrap();
        controller.set_channel_value(Channel::Blue, "0.42").unwrap();
        controller.toggle_channel(Channel::Blue, false);
        assert_eq!(controller.render_color(), (255, 127, 0));
        save_or_log(&store, controller.state());
    }

    // Second run
    let store = JsonFileStore::new(&path);
    let mut controller = ColorController::with_state(load_or_default(&store));
    assert_eq!(controller.render_color(), (255, 127, 0));
    assert!(!controller.is_enabled(Channel::Blue));

    controller.toggle_channel(Channel::Blue, true);
    assert_eq!(controller.value(Channel::Blue), 0.42);
}

#[test]
fn test_rejected_commit_keeps_committed_value() {
    let mut controller = ColorController::new();
    controller.set_channel_value(Channel::Red, "0.3").unwrap();

    let err = controller
        .set_channel_value(Channel::Red, "1.5")
        .unwrap_err();
    assert!(matches!(
        err,
        MixerError::InvalidInput {
            channel: Channel::Red,
            reason: InputReason::OutOfRange(_)
        }
    ));
    assert_eq!(err.to_string(), "Red value must be between 0.0 and 1.0");
    assert_eq!(controller.value(Channel::Red), 0.3);
    assert_eq!(controller.last_sync().source, UpdateSource::TextField);
}

#[test]
fn test_invariant_holds_across_mixed_operations() {
    let mut controller = ColorController::new();
    let store = MemoryStore::new();

    controller.set_slider_progress(Channel::Green, 75);
    controller.toggle_channel(Channel::Green, false);
    assert_disabled_means_zero(&controller);

    let _ = controller.set_channel_value(Channel::Green, "0.9");
    controller.set_slider_progress(Channel::Green, 10);
    assert_disabled_means_zero(&controller);

    store.save(controller.state()).unwrap();
    controller.reset();
    assert_eq!(*controller.state(), ColorState::default());

    controller.restore(store.load().unwrap());
    assert_disabled_means_zero(&controller);
    controller.toggle_channel(Channel::Green, true);
    assert_eq!(controller.value(Channel::Green), 0.75);
}
