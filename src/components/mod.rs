//! The components module contains the Dioxus side of the widget.

mod app;
mod audio_player;

pub use app::*;
pub use audio_player::*;
