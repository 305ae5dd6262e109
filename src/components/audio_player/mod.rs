use crate::config::WidgetConfig;
use crate::markup;
use dioxus::prelude::*;
use tracing::warn;
use uuid::Uuid;

mod binding;
mod surfaces;

pub use binding::PlayerBinding;
pub use surfaces::SignalSurfaces;

/// Element id of one part of a rendered widget.
fn part_id(widget_id: &str, part: &str) -> String {
    format!("{widget_id}-{part}")
}

fn parse_slider(e: &Event<FormData>) -> Option<f64> {
    e.value().parse::<f64>().ok()
}

/// Reusable audio player widget. Changing `config.src` needs a remount (give it a `key`).
#[component]
pub fn AudioPlayer(config: WidgetConfig) -> Element {
    let widget_id = use_hook(|| format!("{}-{}", markup::PLAYER, Uuid::new_v4().simple()));
    let surfaces = use_hook(SignalSurfaces::new);
    let binding = use_hook(PlayerBinding::default);

    // One-time setup once the markup is in the document.
    {
        let binding = binding.clone();
        let widget_id = widget_id.clone();
        let config = config.clone();
        use_effect(move || {
            if binding.is_bound() {
                return;
            }
            if let Err(err) = binding.attach(&widget_id, &config, surfaces) {
                warn!(%err, widget = %widget_id, "audio player not bound");
            }
        });
    }
    {
        let binding = binding.clone();
        use_drop(move || binding.release());
    }

    let seek_max = (surfaces.seek_max)().map(|max| max.to_string());
    let seek_value = (surfaces.seek_value)();
    let volume_value = (surfaces.volume_value)();
    let current_time = (surfaces.current_time)();
    let duration = (surfaces.duration)();

    rsx! {
        div {
            id: "{widget_id}",
            class: markup::PLAYER,
            style: surfaces.track_style(),
            audio {
                id: part_id(&widget_id, "audio"),
                preload: "metadata",
                onloadedmetadata: {
                    let binding = binding.clone();
                    move |_| binding.dispatch(|p| p.on_metadata_ready())
                },
                onprogress: {
                    let binding = binding.clone();
                    move |_| binding.dispatch(|p| p.on_buffer_progress())
                },
                onended: {
                    let binding = binding.clone();
                    move |_| binding.dispatch(|p| p.on_playback_ended())
                },
            }
            button {
                id: part_id(&widget_id, "play"),
                r#type: "button",
                class: markup::PLAY_BUTTON,
                onclick: {
                    let binding = binding.clone();
                    move |_| binding.dispatch(|p| p.on_play_clicked())
                },
            }
            span { class: markup::CURRENT_TIME, "{current_time}" }
            input {
                r#type: "range",
                class: markup::SEEK_SLIDER,
                min: "0",
                max: seek_max,
                value: seek_value,
                oninput: {
                    let binding = binding.clone();
                    move |e: Event<FormData>| {
                        if let Some(value) = parse_slider(&e) {
                            binding.dispatch(|p| p.on_seek_input(value));
                        }
                    }
                },
                onchange: {
                    let binding = binding.clone();
                    move |e: Event<FormData>| {
                        if let Some(value) = parse_slider(&e) {
                            binding.dispatch(|p| p.on_seek_commit(value));
                        }
                    }
                },
            }
            span { class: markup::DURATION_TIME, "{duration}" }
            input {
                r#type: "range",
                class: markup::VOLUME_SLIDER,
                min: "0",
                max: "100",
                value: volume_value,
                oninput: {
                    let binding = binding.clone();
                    move |e: Event<FormData>| {
                        if let Some(value) = parse_slider(&e) {
                            binding.dispatch(|p| p.on_volume_input(value));
                        }
                    }
                },
            }
            button {
                id: part_id(&widget_id, "mute"),
                r#type: "button",
                class: markup::MUTE_BUTTON,
                onclick: {
                    let binding = binding.clone();
                    move |_| binding.dispatch(|p| p.on_mute_clicked())
                },
            }
        }
    }
}
