use crate::player::{ControlSurfaces, FillVar, Label};
use tracing::warn;
use web_sys::{Element, HtmlElement, HtmlInputElement};

/// Controls of pre-rendered markup, written directly through the DOM.
pub struct DomSurfaces {
    /// Carries the fill style variables.
    container: HtmlElement,
    current_time: Element,
    duration: Element,
    seek: HtmlInputElement,
    volume: HtmlInputElement,
}

impl DomSurfaces {
    pub fn new(
        container: HtmlElement,
        current_time: Element,
        duration: Element,
        seek: HtmlInputElement,
        volume: HtmlInputElement,
    ) -> Self {
        Self {
            container,
            current_time,
            duration,
            seek,
            volume,
        }
    }
}

impl ControlSurfaces for DomSurfaces {
    fn set_label(&mut self, label: Label, text: &str) {
        let target = match label {
            Label::CurrentTime => &self.current_time,
            Label::Duration => &self.duration,
        };
        target.set_text_content(Some(text));
    }

    fn set_seek_max(&mut self, max: f64) {
        self.seek.set_max(&max.to_string());
    }

    fn set_seek_value(&mut self, value: f64) {
        self.seek.set_value_as_number(value);
    }

    fn set_volume_value(&mut self, value: f64) {
        self.volume.set_value_as_number(value);
    }

    fn set_fill(&mut self, var: FillVar, percent: f64) {
        if let Err(err) = self
            .container
            .style()
            .set_property(var.css_name(), &format!("{percent}%"))
        {
            warn!(?err, property = var.css_name(), "could not set fill width");
        }
    }
}
