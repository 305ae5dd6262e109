use thiserror::Error;

/// Failures while binding a widget to its host page.
///
/// Playback problems are not errors here: an unplayable source just never
/// reports metadata and the widget keeps its default display.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget has no `data-src` attribute")]
    MissingSource,
    #[error("no browser window or document available")]
    NoDocument,
    #[error("missing widget element `{0}`")]
    MissingElement(String),
    #[error("widget element `{0}` has an unexpected type")]
    WrongElementType(String),
    #[error("could not attach `{0}` listener")]
    Listener(String),
    #[error("animation library `{0}` is not loaded on this page")]
    AnimationLibraryMissing(&'static str),
    #[error("animation call `{method}` failed: {message}")]
    Animation { method: &'static str, message: String },
    #[error("invalid value for `{attribute}`: {value}")]
    InvalidAttribute { attribute: &'static str, value: String },
    #[error("invalid widget config JSON: {0}")]
    Config(#[from] serde_json::Error),
}
