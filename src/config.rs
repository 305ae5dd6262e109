use crate::error::WidgetError;
use serde::{Deserialize, Serialize};

const PLAY_ICON_PATH: &str =
    "https://maxst.icons8.com/vue-static/landings/animated-icons/icons/pause/pause.json";
const MUTE_ICON_PATH: &str =
    "https://maxst.icons8.com/vue-static/landings/animated-icons/icons/no-sound/no-sound.json";

/// Inclusive-exclusive frame span handed to the icon animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: u32,
    pub end: u32,
}

impl FrameRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// The two animation segments of a two-state glyph.
///
/// `activate` runs on Inactive -> Active (play -> pause glyph, sound -> muted glyph),
/// `deactivate` runs the other way. The glyph rests on the first frame of `activate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSegments {
    pub activate: FrameRange,
    pub deactivate: FrameRange,
}

impl ToggleSegments {
    pub const PLAY_PAUSE: Self = Self {
        activate: FrameRange::new(15, 27),
        deactivate: FrameRange::new(0, 15),
    };

    pub const MUTE: Self = Self {
        activate: FrameRange::new(0, 17),
        deactivate: FrameRange::new(17, 26),
    };

    pub fn rest_frame(&self) -> u32 {
        self.activate.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// URL of the animation JSON.
    pub path: String,
    pub segments: ToggleSegments,
}

fn default_play_icon() -> IconConfig {
    IconConfig {
        path: PLAY_ICON_PATH.to_string(),
        segments: ToggleSegments::PLAY_PAUSE,
    }
}

fn default_mute_icon() -> IconConfig {
    IconConfig {
        path: MUTE_ICON_PATH.to_string(),
        segments: ToggleSegments::MUTE,
    }
}

fn default_volume() -> f64 {
    100.0
}

/// Per-widget configuration, read from the host element's data attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub src: String,
    #[serde(default = "default_play_icon")]
    pub play_icon: IconConfig,
    #[serde(default = "default_mute_icon")]
    pub mute_icon: IconConfig,
    /// Initial volume slider position, 0-100.
    #[serde(default = "default_volume")]
    pub volume: f64,
}

impl WidgetConfig {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            play_icon: default_play_icon(),
            mute_icon: default_mute_icon(),
            volume: default_volume(),
        }
    }

    /// Build a config from element attributes.
    ///
    /// `data-config` may hold a JSON object with any of the fields; the single-value
    /// attributes (`data-src`, `data-play-icon`, `data-mute-icon`, `data-volume`)
    /// take precedence over it.
    pub fn from_attributes<F>(attr: F) -> Result<Self, WidgetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match attr("data-config").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => serde_json::from_str::<WidgetConfig>(&raw)?,
            None => WidgetConfig::new(""),
        };

        if let Some(src) = attr("data-src") {
            config.src = src;
        }
        if let Some(path) = attr("data-play-icon") {
            config.play_icon.path = path;
        }
        if let Some(path) = attr("data-mute-icon") {
            config.mute_icon.path = path;
        }
        if let Some(raw) = attr("data-volume") {
            config.volume = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(WidgetError::InvalidAttribute {
                    attribute: "data-volume",
                    value: raw.clone(),
                })?;
        }

        config.src = config.src.trim().to_string();
        if config.src.is_empty() {
            return Err(WidgetError::MissingSource);
        }
        config.volume = config.volume.clamp(0.0, 100.0);
        Ok(config)
    }
}
