use super::SignalSurfaces;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::player::PlayerEvents;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::player::PlayerController;
#[cfg(target_arch = "wasm32")]
use crate::web::{self, AnimationFrameScheduler, LottieIcon, MediaElementSource};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(not(target_arch = "wasm32"))]
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, HtmlAudioElement};

type SharedPlayer = Rc<RefCell<dyn PlayerEvents>>;

/// Slot for the controller behind one rendered widget.
/// Empty until the markup is mounted, and again after release.
#[derive(Clone, Default)]
pub struct PlayerBinding(Rc<RefCell<Option<SharedPlayer>>>);

impl PlayerBinding {
    pub fn is_bound(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Run `f` against the bound player; a no-op while unbound.
    pub fn dispatch<F>(&self, f: F)
    where
        F: FnOnce(&mut dyn PlayerEvents),
    {
        let player = self.0.borrow().clone();
        if let Some(player) = player {
            if let Ok(mut player) = player.try_borrow_mut() {
                f(&mut *player);
            }
        }
    }

    pub fn release(&self) {
        self.dispatch(|player| player.release());
        self.0.borrow_mut().take();
    }

    /// Bind a controller to the mounted markup of widget `widget_id`.
    #[cfg(target_arch = "wasm32")]
    pub fn attach(
        &self,
        widget_id: &str,
        config: &WidgetConfig,
        surfaces: SignalSurfaces,
    ) -> Result<(), WidgetError> {
        let document = web::document()?;
        let audio: HtmlAudioElement =
            web::element_by_id(&document, &super::part_id(widget_id, "audio"))?;
        let play_button: Element =
            web::element_by_id(&document, &super::part_id(widget_id, "play"))?;
        let mute_button: Element =
            web::element_by_id(&document, &super::part_id(widget_id, "mute"))?;

        let play_icon =
            LottieIcon::load(&play_button, &config.play_icon.path, "Play Button Animation")?;
        let mute_icon =
            LottieIcon::load(&mute_button, &config.mute_icon.path, "Mute Button Animation")?;
        let frames = AnimationFrameScheduler::new();
        let hook = frames.hook();

        let player = Rc::new(RefCell::new(PlayerController::bind(
            config,
            MediaElementSource::new(audio),
            play_icon,
            mute_icon,
            surfaces,
            frames,
        )));

        // Ticks arrive from requestAnimationFrame, outside any Dioxus event handler.
        let runtime = Runtime::current();
        let weak = Rc::downgrade(&player);
        hook.install(move |ticket| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if let Some(player) = weak.upgrade() {
                if let Ok(mut player) = player.try_borrow_mut() {
                    player.on_progress_tick(ticket);
                }
            }
        });

        *self.0.borrow_mut() = Some(player as SharedPlayer);
        Ok(())
    }

    /// No media element outside the browser; the widget renders but stays unbound.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn attach(
        &self,
        widget_id: &str,
        _config: &WidgetConfig,
        _surfaces: SignalSurfaces,
    ) -> Result<(), WidgetError> {
        debug!(widget_id, "no media element on this target");
        Ok(())
    }
}
