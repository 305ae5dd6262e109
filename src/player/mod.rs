//! Player core - the controller plus the seams it talks through.
//! Everything here is target independent; the browser implementations live in `crate::web`
//! and the Dioxus component in `crate::components`.

mod controller;
mod state;

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_imports))]
pub use controller::*;
pub use state::*;

use crate::config::FrameRange;

/// A time-based audio resource with transport controls.
pub trait PlaybackSource {
    fn load(&mut self, src: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn set_muted(&mut self, muted: bool);
    /// `volume` is in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64);
    fn seek_to(&mut self, seconds: f64);
    fn current_time(&self) -> f64;
    /// `None` until metadata is known.
    fn duration(&self) -> Option<f64>;
    /// End of the furthest buffered range, `None` when nothing is buffered.
    fn buffered_end(&self) -> Option<f64>;
    fn is_paused(&self) -> bool;
}

/// Vector glyph animation that can jump to a frame or play a span of frames.
pub trait IconAnimator {
    fn to_frame(&mut self, frame: u32);
    fn play_range(&mut self, range: FrameRange);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    CurrentTime,
    Duration,
}

/// Style variables the slider tracks read their fill width from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillVar {
    Seek,
    Volume,
    Buffered,
}

impl FillVar {
    pub fn css_name(self) -> &'static str {
        match self {
            FillVar::Seek => "--seek-before-width",
            FillVar::Volume => "--volume-before-width",
            FillVar::Buffered => "--buffered-width",
        }
    }
}

/// The labels, sliders and style hooks the widget renders into.
pub trait ControlSurfaces {
    fn set_label(&mut self, label: Label, text: &str);
    fn set_seek_max(&mut self, max: f64);
    fn set_seek_value(&mut self, value: f64);
    fn set_volume_value(&mut self, value: f64);
    fn set_fill(&mut self, var: FillVar, percent: f64);
}

/// Registration handle for one pending display-refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket(pub i32);

/// "Run on next display refresh" scheduling.
pub trait FrameScheduler {
    /// `None` if the host refused the registration.
    fn request_frame(&mut self) -> Option<FrameTicket>;
    fn cancel_frame(&mut self, ticket: FrameTicket);
}

/// Everything a host adapter forwards to a bound widget.
///
/// Object safe so adapters can hold a controller without naming its collaborator types.
pub trait PlayerEvents {
    fn on_play_clicked(&mut self);
    fn on_mute_clicked(&mut self);
    /// Seek slider moved during a drag.
    fn on_seek_input(&mut self, value: f64);
    /// Seek slider released.
    fn on_seek_commit(&mut self, value: f64);
    fn on_volume_input(&mut self, value: f64);
    fn on_metadata_ready(&mut self);
    fn on_buffer_progress(&mut self);
    fn on_playback_ended(&mut self);
    fn on_progress_tick(&mut self, ticket: FrameTicket);
    /// Widget is being detached from the page.
    fn release(&mut self);
}
