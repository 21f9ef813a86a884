use super::{config_error_panel::ConfigErrorPanel, play_view::PlayView};
use crate::config::GameConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Loaded once; a bad config stops here instead of surfacing mid-gesture.
    let config = use_state(|| {
        GameConfig::load().map_err(|e| {
            log::error!("invalid game config: {e}");
            e.to_string()
        })
    });

    let content = match &*config {
        Ok(cfg) => html! { <PlayView config={cfg.clone()} /> },
        Err(msg) => html! { <ConfigErrorPanel message={msg.clone()} /> },
    };

    html! { <div id="root" style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9;">{ content }</div> }
}
