//! Class names shared by the rendered component and pre-rendered page markup,
//! so one stylesheet serves both forms.

pub const PLAYER: &str = "audio-player";
pub const PLAY_BUTTON: &str = "play-btn";
pub const MUTE_BUTTON: &str = "mute-btn";
pub const SEEK_SLIDER: &str = "seek-slider";
pub const VOLUME_SLIDER: &str = "volume-slider";
pub const CURRENT_TIME: &str = "current-time";
pub const DURATION_TIME: &str = "duration-time";

/// Attribute marking a pre-rendered player block for the page-scoped adapter.
pub const PAGE_PLAYER_ATTRIBUTE: &str = "data-audio-player";

/// CSS selector for a descendant carrying `class`.
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST_PAGE: &str = include_str!("../index.html");

    #[test]
    fn host_page_carries_a_complete_page_scoped_block() {
        assert!(HOST_PAGE.contains(PAGE_PLAYER_ATTRIBUTE));
        for class in [
            PLAYER,
            PLAY_BUTTON,
            MUTE_BUTTON,
            SEEK_SLIDER,
            VOLUME_SLIDER,
            CURRENT_TIME,
            DURATION_TIME,
        ] {
            assert!(
                HOST_PAGE.contains(&format!("class=\"{class}\"")),
                "host page is missing `{class}`"
            );
        }
    }

    #[test]
    fn host_page_configures_the_component_mount() {
        assert!(HOST_PAGE.contains(r#"<div id="main" data-src="#));
    }

    #[test]
    fn class_selector_prefixes_a_dot() {
        assert_eq!(class_selector(SEEK_SLIDER), ".seek-slider");
    }
}
