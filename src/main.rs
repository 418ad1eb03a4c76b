//! Opens the mixer window, restoring the last color and saving it again
//! whenever the window is backgrounded or closed.

use std::rc::Rc;

use floem::event::EventListener;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalWith};
use floem::window::WindowConfig;
use log::warn;
use rgb_mixer::{
    ColorController, ColorStore, JsonFileStore, MemoryStore, load_or_default, rgb_mixer,
    save_or_log,
};

fn open_store() -> Rc<dyn ColorStore> {
    match JsonFileStore::in_config_dir() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            warn!("{}; colors will not persist across restarts", e);
            Rc::new(MemoryStore::new())
        }
    }
}

fn main() {
    env_logger::init();

    let store = open_store();
    let controller = RwSignal::new(ColorController::with_state(load_or_default(&*store)));

    floem::Application::new()
        .window(
            move |_| {
                let on_background = store.clone();
                let on_close = store;
                rgb_mixer(controller)
                    .on_event_cont(EventListener::WindowLostFocus, move |_| {
                        controller.with_untracked(|c| save_or_log(&*on_background, c.state()));
                    })
                    .on_event_stop(EventListener::WindowClosed, move |_| {
                        controller.with_untracked(|c| save_or_log(&*on_close, c.state()));
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 340.0))
                    .title("RGB Mixer"),
            ),
        )
        .run();
}
