use crate::components::AudioPlayer;
use crate::config::WidgetConfig;
use dioxus::prelude::*;

const PLAYER_CSS: Asset = asset!("/assets/player.css");

/// Widgets configured on the app's mount element (`#main`).
#[cfg(target_arch = "wasm32")]
fn host_players() -> Vec<WidgetConfig> {
    use tracing::warn;

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id("main"))
    else {
        return Vec::new();
    };
    // A mount element without `data-src` just means no component player on this page.
    if !root.has_attribute("data-src") {
        return Vec::new();
    }
    match crate::web::config_from_element(&root) {
        Ok(config) => vec![config],
        Err(err) => {
            warn!(%err, "component audio player not configured");
            Vec::new()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn host_players() -> Vec<WidgetConfig> {
    tracing::warn!("audio players need the web target; nothing to render");
    Vec::new()
}

#[component]
pub fn App() -> Element {
    let players = use_hook(host_players);

    // Pre-rendered players elsewhere on the page share the controller, not the renderer.
    use_hook(|| {
        #[cfg(target_arch = "wasm32")]
        crate::web::bind_page_players();
    });

    rsx! {
        document::Stylesheet { href: PLAYER_CSS }

        for config in players.iter().cloned() {
            AudioPlayer { key: "{config.src}", config }
        }
    }
}
