use crate::player::{ControlSurfaces, FillVar, Label};
use dioxus::prelude::*;

/// Widget display state held in signals; the component renders straight from these.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalSurfaces {
    pub(super) current_time: Signal<String>,
    pub(super) duration: Signal<String>,
    pub(super) seek_max: Signal<Option<f64>>,
    pub(super) seek_value: Signal<f64>,
    pub(super) volume_value: Signal<f64>,
    seek_fill: Signal<f64>,
    volume_fill: Signal<f64>,
    buffered_fill: Signal<f64>,
}

impl SignalSurfaces {
    pub fn new() -> Self {
        Self {
            current_time: Signal::new(String::from("0:00")),
            duration: Signal::new(String::from("0:00")),
            seek_max: Signal::new(None),
            seek_value: Signal::new(0.0),
            volume_value: Signal::new(100.0),
            seek_fill: Signal::new(0.0),
            volume_fill: Signal::new(100.0),
            buffered_fill: Signal::new(0.0),
        }
    }

    /// Inline style carrying the three fill variables for the slider tracks.
    pub fn track_style(&self) -> String {
        [
            (FillVar::Seek, (self.seek_fill)()),
            (FillVar::Volume, (self.volume_fill)()),
            (FillVar::Buffered, (self.buffered_fill)()),
        ]
        .iter()
        .map(|(var, percent)| format!("{}: {}%;", var.css_name(), percent))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl ControlSurfaces for SignalSurfaces {
    fn set_label(&mut self, label: Label, text: &str) {
        let mut target = match label {
            Label::CurrentTime => self.current_time,
            Label::Duration => self.duration,
        };
        if *target.peek() != text {
            target.set(text.to_string());
        }
    }

    fn set_seek_max(&mut self, max: f64) {
        write_if_changed(self.seek_max, Some(max));
    }

    fn set_seek_value(&mut self, value: f64) {
        write_if_changed(self.seek_value, value);
    }

    fn set_volume_value(&mut self, value: f64) {
        write_if_changed(self.volume_value, value);
    }

    fn set_fill(&mut self, var: FillVar, percent: f64) {
        let target = match var {
            FillVar::Seek => self.seek_fill,
            FillVar::Volume => self.volume_fill,
            FillVar::Buffered => self.buffered_fill,
        };
        write_if_changed(target, percent);
    }
}

/// Every write re-renders the widget, and most progress ticks land on the same second.
fn write_if_changed<T: PartialEq + 'static>(mut signal: Signal<T>, value: T) {
    if *signal.peek() != value {
        signal.set(value);
    }
}
