//! Browser implementations of the player seams and the page-scoped adapter.
//! Only compiled for wasm32.

mod dom_surfaces;
mod frames;
mod lottie;
mod media_source;
mod page;

pub use dom_surfaces::DomSurfaces;
pub use frames::AnimationFrameScheduler;
pub use lottie::LottieIcon;
pub use media_source::MediaElementSource;
pub use page::bind_page_players;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

pub fn document() -> Result<Document, WidgetError> {
    window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::NoDocument)
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::WrongElementType(format!("#{id}")))
}

/// First descendant of `root` matching `selector`.
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Result<T, WidgetError> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| WidgetError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::WrongElementType(selector.to_string()))
}

pub fn config_from_element(element: &Element) -> Result<WidgetConfig, WidgetError> {
    WidgetConfig::from_attributes(|name| element.get_attribute(name))
}
