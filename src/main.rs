mod components;
mod config;
mod controller;
mod error;
mod geometry;
mod host;
mod score;
mod state;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    yew::Renderer::<App>::new().render();
}
