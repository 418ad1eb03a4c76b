//! Input components for channel editing: level field, on/off switch, buttons.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith, create_effect};
use log::debug;

use crate::channel::Channel;
use crate::constants;
use crate::controller::{ColorController, DraftPreview};
use crate::error::MixerError;

/// Format a committed level for a text field: `0.0`, `0.5`, `0.37`, `1.0`.
pub(crate) fn format_level(level: f64) -> String {
    if level.fract() == 0.0 {
        format!("{:.1}", level)
    } else {
        format!("{}", level)
    }
}

/// A transient message line for rejected input.
#[derive(Clone, Copy)]
pub(crate) struct Notice {
    message: RwSignal<Option<String>>,
    serial: RwSignal<u64>,
}

impl Notice {
    pub(crate) fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            serial: RwSignal::new(0),
        }
    }

    /// Show `text`, hiding it again after [`constants::NOTICE_DURATION`]
    /// unless a newer notice replaced it.
    pub(crate) fn show(self, text: String) {
        let serial = self.serial.get_untracked() + 1;
        self.serial.set(serial);
        self.message.set(Some(text));
        floem::action::exec_after(constants::NOTICE_DURATION, move |_| {
            if self.serial.get_untracked() == serial {
                self.message.set(None);
            }
        });
    }

    pub(crate) fn view(self) -> impl IntoView {
        label(move || self.message.get().unwrap_or_default()).style(move |s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(176, 40, 40))
                .min_height(constants::LABEL_FONT + 4.0)
                .justify_content(Some(floem::taffy::AlignContent::Center))
        })
    }
}

/// Signal wiring behind a channel's level field.
///
/// `text` holds what the field shows. Typing moves `draft` so the slider can
/// follow without committing; committed changes from other widgets rewrite
/// `text` and drop the draft.
#[derive(Clone, Copy)]
pub(crate) struct LevelField {
    channel: Channel,
    controller: RwSignal<ColorController>,
    text: RwSignal<String>,
    draft: RwSignal<Option<f64>>,
}

impl LevelField {
    pub(crate) fn new(
        channel: Channel,
        controller: RwSignal<ColorController>,
        draft: RwSignal<Option<f64>>,
    ) -> Self {
        let text = RwSignal::new(controller.with_untracked(|c| format_level(c.value(channel))));
        let field = Self {
            channel,
            controller,
            text,
            draft,
        };

        // Committed value → text, unless this field produced the change
        create_effect(move |_| {
            let (sync, level) = controller.with(|c| (c.last_sync(), c.value(channel)));
            if !sync.touches(channel) {
                return;
            }
            if draft.get_untracked().is_some() {
                draft.set(None);
            }
            if sync.refreshes_text(channel) {
                let expected = format_level(level);
                if text.get_untracked() != expected {
                    text.set(expected);
                }
            }
        });

        // Live typing → draft
        create_effect(move |_| {
            let raw = text.get();
            let preview = controller.with_untracked(|c| c.preview_draft(channel, &raw));
            if let DraftPreview::Preview(level) = preview {
                let committed = controller.with_untracked(|c| c.value(channel));
                let next = (level != committed).then_some(level);
                if draft.get_untracked() != next {
                    draft.set(next);
                }
            }
        });

        field
    }

    /// Commit the current text. Rejected text is replaced by the last
    /// committed value and the error is handed back for the notice line.
    pub(crate) fn commit(self) -> Result<f64, MixerError> {
        let raw = self.text.get_untracked();
        let channel = self.channel;
        let result = self
            .controller
            .try_update(|c| c.set_channel_value(channel, &raw))
            .unwrap_or_else(|| Ok(self.controller.with_untracked(|c| c.value(channel))));
        if self.draft.get_untracked().is_some() {
            self.draft.set(None);
        }
        if let Err(e) = &result {
            debug!("rejected {} input {:?}: {}", channel, raw, e);
            let formatted = self.controller.with_untracked(|c| format_level(c.value(channel)));
            if raw != formatted {
                self.text.set(formatted);
            }
        }
        result
    }
}

/// A text field editing one channel's level (0.0–1.0).
///
/// Enter or focus loss commits; a rejection is reported through `notice`.
pub(crate) fn level_input(
    channel: Channel,
    controller: RwSignal<ColorController>,
    draft: RwSignal<Option<f64>>,
    notice: Notice,
) -> impl IntoView {
    let field = LevelField::new(channel, controller, draft);
    let on_commit = move || {
        if let Err(e) = field.commit() {
            notice.show(e.to_string());
        }
    };
    let on_commit_clone = on_commit;

    let enabled = move || controller.with(|c| c.is_enabled(channel));

    text_input(field.text)
        .disabled(move || !enabled())
        .style(move |s| {
            s.width(constants::INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
                .apply_if(!enabled(), |s| {
                    s.color(Color::rgb8(160, 160, 160))
                        .background(Color::rgb8(235, 235, 235))
                })
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e
                && ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
            {
                on_commit_clone();
                return EventPropagation::Stop;
            }
            EventPropagation::Continue
        })
}

/// An on/off switch for one channel.
pub(crate) fn channel_switch(
    channel: Channel,
    controller: RwSignal<ColorController>,
) -> impl IntoView {
    let on = move || controller.with(|c| c.is_enabled(channel));
    let (r, g, b) = channel.primary();
    let accent = Color::rgb8((r * 200.0) as u8, (g * 160.0) as u8, (b * 220.0) as u8);

    container(empty().style(move |s| {
        let travel = constants::SWITCH_WIDTH - constants::SWITCH_KNOB - 4.0;
        s.size(constants::SWITCH_KNOB, constants::SWITCH_KNOB)
            .border_radius(constants::SWITCH_KNOB / 2.0)
            .background(Color::WHITE)
            .margin_left(if on() { 2.0 + travel } else { 2.0 })
    }))
    .style(move |s| {
        let track = if on() {
            accent
        } else {
            Color::rgb8(190, 190, 190)
        };
        s.size(constants::SWITCH_WIDTH, constants::SWITCH_HEIGHT)
            .items_center()
            .border_radius(constants::SWITCH_HEIGHT / 2.0)
            .background(track)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        let enabled = !controller.with_untracked(|c| c.is_enabled(channel));
        controller.update(|c| c.toggle_channel(channel, enabled));
    })
}

/// A labelled button with a lucide icon.
pub(crate) fn icon_button(
    icon: lucide_icons::Icon,
    text: &'static str,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    h_stack((
        label(move || icon.unicode().to_string())
            .style(|s| s.font_size(14.0).font_family("lucide".to_string())),
        label(move || text).style(|s| s.font_size(constants::INPUT_FONT)),
    ))
    .style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(80, 80, 80)
        } else {
            Color::rgb8(60, 60, 60)
        };
        s.gap(4.0)
            .items_center()
            .padding_horiz(10.0)
            .padding_vert(4.0)
            .color(c)
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .border_radius(constants::RADIUS)
            .background(Color::WHITE)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "clipboard")]
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                log::warn!("failed to copy {} to clipboard: {}", text, e);
            }
        }
        Err(e) => log::warn!("clipboard unavailable: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(0.0), "0.0");
        assert_eq!(format_level(1.0), "1.0");
        assert_eq!(format_level(0.5), "0.5");
        assert_eq!(format_level(0.37), "0.37");
        assert_eq!(format_level(29.0 / 100.0), "0.29");
    }

    fn red_field() -> (RwSignal<ColorController>, LevelField) {
        let controller = RwSignal::new(ColorController::new());
        let draft = RwSignal::new(None);
        (controller, LevelField::new(Channel::Red, controller, draft))
    }

    #[test]
    fn test_rejected_commit_reverts_text_and_draft() {
        let (controller, field) = red_field();
        field.text.set("0.4".to_string());
        field.commit().unwrap();

        field.text.set("1.5".to_string());
        assert!(field.commit().is_err());
        assert_eq!(field.text.get_untracked(), "0.4");
        assert_eq!(field.draft.get_untracked(), None);
        assert_eq!(controller.with_untracked(|c| c.value(Channel::Red)), 0.4);
    }

    #[test]
    fn test_typing_previews_without_committing() {
        let (controller, field) = red_field();
        field.text.set("0.7".to_string());
        assert_eq!(field.draft.get_untracked(), Some(0.7));
        assert_eq!(controller.with_untracked(|c| c.value(Channel::Red)), 0.0);

        // Unfinished literals leave the preview alone
        field.text.set("0.".to_string());
        assert_eq!(field.draft.get_untracked(), Some(0.7));
    }

    #[test]
    fn test_slider_change_rewrites_text_and_drops_draft() {
        let (controller, field) = red_field();
        field.text.set("0.7".to_string());

        controller.update(|c| c.set_slider_progress(Channel::Red, 20));
        assert_eq!(field.text.get_untracked(), "0.2");
        assert_eq!(field.draft.get_untracked(), None);
    }

    #[test]
    fn test_own_commit_keeps_typed_text() {
        let (controller, field) = red_field();
        field.text.set("0.50".to_string());
        assert_eq!(field.commit().unwrap(), 0.5);
        assert_eq!(field.text.get_untracked(), "0.50");
        assert_eq!(field.draft.get_untracked(), None);

        controller.update(|c| c.toggle_channel(Channel::Green, false));
        assert_eq!(field.text.get_untracked(), "0.50");

        controller.update(|c| c.reset());
        assert_eq!(field.text.get_untracked(), "0.0");
    }

    #[test]
    fn test_negative_zero_echoes_as_zero() {
        let (controller, field) = red_field();
        field.text.set("0.3".to_string());
        field.commit().unwrap();
        field.text.set("-0".to_string());
        assert_eq!(field.commit().unwrap(), 0.0);

        controller.update(|c| c.toggle_channel(Channel::Red, false));
        controller.update(|c| c.toggle_channel(Channel::Red, true));
        assert_eq!(field.text.get_untracked(), "0.0");
    }
}
