use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u32,
    pub fail_count: u32,
    pub fail_threshold: u32,
    /// Feedback for the most recent drop, if any.
    #[prop_or_default]
    pub last_drop: Option<String>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:50px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"★"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Score"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f85149;", icon_style)}>{"✗"}</span>
                <span style={format!("{} color:#f85149;", label_style)}>{"Misses Left"}</span>
                <span style={format!("{} color:#f85149;", value_style)}>{ props.fail_threshold.saturating_sub(props.fail_count) }</span>
            </div>
            { if let Some(txt) = &props.last_drop { html!{ <div style="font-size:12px; line-height:1.2; background:#1c2128; border:1px solid #30363d; padding:4px 6px; border-radius:6px;">{ txt.clone() }</div> } } else { html!{} } }
        </div>
    }
}
