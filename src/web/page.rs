//! Page-scoped form: binds every pre-rendered `[data-audio-player]` block found in
//! the document. Each block gets its own controller, so several players can share a page.
//!
//! A block carries its configuration in the same data attributes as the component
//! form and must contain:
//!
//! ```html
//! <div class="audio-player" data-audio-player data-src="/track.mp3">
//!     <audio preload="metadata"></audio>
//!     <button type="button" class="play-btn"></button>
//!     <span class="current-time">0:00</span>
//!     <input type="range" class="seek-slider" min="0" value="0">
//!     <span class="duration-time">0:00</span>
//!     <input type="range" class="volume-slider" min="0" max="100" value="100">
//!     <button type="button" class="mute-btn"></button>
//! </div>
//! ```
//!
//! A block missing any of these parts is skipped with a warning.

use super::{
    config_from_element, document, query, AnimationFrameScheduler, DomSurfaces, LottieIcon,
    MediaElementSource,
};
use crate::error::WidgetError;
use crate::markup::{self, class_selector};
use crate::player::{PlayerController, PlayerEvents};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, EventTarget, HtmlAudioElement, HtmlElement, HtmlInputElement};

type PagePlayer =
    PlayerController<MediaElementSource, LottieIcon, DomSurfaces, AnimationFrameScheduler>;

/// Bind all page-scoped players; returns how many were bound.
pub fn bind_page_players() -> usize {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            warn!(%err, "page players not bound");
            return 0;
        }
    };
    let selector = format!("[{}]", markup::PAGE_PLAYER_ATTRIBUTE);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return 0;
    };

    let mut bound = 0;
    for index in 0..nodes.length() {
        let Some(container) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        match bind_page_player(&container) {
            Ok(()) => bound += 1,
            Err(err) => warn!(%err, "skipping page audio player"),
        }
    }
    if bound > 0 {
        info!(bound, "page audio players bound");
    }
    bound
}

fn bind_page_player(container: &HtmlElement) -> Result<(), WidgetError> {
    let config = config_from_element(container)?;

    let audio: HtmlAudioElement = query(container, "audio")?;
    let play_button: Element = query(container, &class_selector(markup::PLAY_BUTTON))?;
    let mute_button: Element = query(container, &class_selector(markup::MUTE_BUTTON))?;
    let seek: HtmlInputElement = query(container, &class_selector(markup::SEEK_SLIDER))?;
    let volume: HtmlInputElement = query(container, &class_selector(markup::VOLUME_SLIDER))?;
    let surfaces = DomSurfaces::new(
        container.clone(),
        query(container, &class_selector(markup::CURRENT_TIME))?,
        query(container, &class_selector(markup::DURATION_TIME))?,
        seek.clone(),
        volume.clone(),
    );

    let play_icon = LottieIcon::load(&play_button, &config.play_icon.path, "Play Button Animation")?;
    let mute_icon = LottieIcon::load(&mute_button, &config.mute_icon.path, "Mute Button Animation")?;
    let frames = AnimationFrameScheduler::new();
    let hook = frames.hook();

    let player = Rc::new(RefCell::new(PlayerController::bind(
        &config,
        MediaElementSource::new(audio.clone()),
        play_icon,
        mute_icon,
        surfaces,
        frames,
    )));

    let weak = Rc::downgrade(&player);
    hook.install(move |ticket| {
        if let Some(player) = weak.upgrade() {
            if let Ok(mut player) = player.try_borrow_mut() {
                player.on_progress_tick(ticket);
            }
        }
    });

    listen(&play_button, "click", &player, |p| p.on_play_clicked())?;
    listen(&mute_button, "click", &player, |p| p.on_mute_clicked())?;
    {
        let slider = seek.clone();
        listen(&seek, "input", &player, move |p| {
            p.on_seek_input(slider.value_as_number())
        })?;
    }
    {
        let slider = seek.clone();
        listen(&seek, "change", &player, move |p| {
            p.on_seek_commit(slider.value_as_number())
        })?;
    }
    {
        let slider = volume.clone();
        listen(&volume, "input", &player, move |p| {
            p.on_volume_input(slider.value_as_number())
        })?;
    }
    listen(&audio, "loadedmetadata", &player, |p| p.on_metadata_ready())?;
    listen(&audio, "progress", &player, |p| p.on_buffer_progress())?;
    listen(&audio, "ended", &player, |p| p.on_playback_ended())?;
    if let Some(window) = window() {
        listen(&window, "pagehide", &player, |p| p.release())?;
    }

    debug!(src = %config.src, "page audio player bound");
    Ok(())
}

/// Forward a DOM event to the player for the lifetime of the page.
fn listen<F>(
    target: &EventTarget,
    event: &str,
    player: &Rc<RefCell<PagePlayer>>,
    mut handler: F,
) -> Result<(), WidgetError>
where
    F: FnMut(&mut PagePlayer) + 'static,
{
    let player = player.clone();
    let event_name = event.to_string();
    let callback = Closure::wrap(Box::new(move || match player.try_borrow_mut() {
        Ok(mut player) => handler(&mut *player),
        Err(_) => debug!(event = %event_name, "player busy, event dropped"),
    }) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|_| WidgetError::Listener(event.to_string()))?;
    callback.forget();
    Ok(())
}
