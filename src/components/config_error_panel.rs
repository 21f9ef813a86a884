use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfigErrorPanelProps {
    pub message: String,
}

/// Shown instead of the game when the configuration fails validation.
#[function_component]
pub fn ConfigErrorPanel(props: &ConfigErrorPanelProps) -> Html {
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:#161b22; border:2px solid #f85149; padding:20px 28px; border-radius:12px; max-width:520px;">
            <h3 style="margin:0 0 8px 0; color:#f85149;">{"Cannot start game"}</h3>
            <p style="margin:0; font-family:monospace; font-size:13px;">{ props.message.clone() }</p>
            <p style="margin:12px 0 0 0; font-size:11px; opacity:0.7;">{ format!("Fix or remove the '{}' localStorage entry and reload.", crate::config::CONFIG_STORAGE_KEY) }</p>
        </div>
    }
}
