//! Mixer panel: one row per channel (switch, slider, level field) above the
//! color swatch, hex readout and reset button.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::channel::Channel;
use crate::channel_slider::channel_slider;
use crate::constants;
use crate::controller::ColorController;
#[cfg(feature = "clipboard")]
use crate::inputs::copy_button;
use crate::inputs::{Notice, channel_switch, icon_button, level_input};

fn channel_row(
    channel: Channel,
    controller: RwSignal<ColorController>,
    notice: Notice,
) -> impl IntoView {
    // Uncommitted level typed into the field; the slider follows it.
    let draft = RwSignal::new(None::<f64>);

    h_stack((
        label(move || channel.name()).style(|s| {
            s.width(constants::CHANNEL_LABEL_WIDTH)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(90, 90, 90))
        }),
        channel_switch(channel, controller),
        channel_slider(
            channel,
            move || {
                draft
                    .get()
                    .unwrap_or_else(|| controller.with(|c| c.value(channel)))
            },
            move || controller.with(|c| c.is_enabled(channel)),
            move |progress| controller.update(|c| c.set_slider_progress(channel, progress)),
        ),
        level_input(channel, controller, draft, notice),
    ))
    .style(|s| s.items_center().gap(constants::GAP))
}

/// Creates the mixer panel.
pub(crate) fn mixer_view(controller: RwSignal<ColorController>) -> impl IntoView {
    let notice = Notice::new();

    v_stack((
        // Swatch
        empty().style(move |st| {
            let (r, g, b) = controller.with(|c| c.render_color());
            st.width_full()
                .height(constants::SWATCH_HEIGHT)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgb8(r, g, b))
        }),
        // Hex + copy row
        h_stack((
            label(move || controller.with(|c| c.hex())).style(|s| {
                s.font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .color(Color::rgb8(90, 90, 90))
            }),
            #[cfg(feature = "clipboard")]
            copy_button(move || controller.with_untracked(|c| c.hex())),
        ))
        .style(|st| st.gap(constants::GAP).items_center().justify_center()),
        channel_row(Channel::Red, controller, notice),
        channel_row(Channel::Green, controller, notice),
        channel_row(Channel::Blue, controller, notice),
        notice.view(),
        h_stack((
            empty().style(|s| s.flex_grow(1.0)),
            icon_button(lucide_icons::Icon::RotateCcw, "Reset", move || {
                controller.update(|c| c.reset());
            }),
        ))
        .style(|st| st.items_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
