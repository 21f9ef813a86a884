use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub fail_count: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let (title, color) = if props.score > 0 {
        ("Well Done!", "#2ea043")
    } else {
        ("Game Over", "#f85149")
    };
    html! {
        <div style={format!("position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid {color}; padding:24px 32px; border-radius:12px; text-align:center; min-width:280px;")}>
            <h2 style={format!("margin:0 0 12px 0; color:{color};")}>{ title }</h2>
            <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
            <p style="margin:4px 0;">{ format!("Wrong Drops: {}", props.fail_count) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Play Again"}</button>
            </div>
        </div>
    }
}
