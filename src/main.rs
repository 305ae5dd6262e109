mod components;
// Outside the browser nothing binds a controller, so the player core goes unused there.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod markup;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod player;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod utils;
#[cfg(target_arch = "wasm32")]
mod web;

use components::App;

fn main() {
    dioxus::launch(App);
}
