use maze_walker::state::SolveReport;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub state_label: &'static str,
    pub age: usize,
    pub last_solve: Option<SolveReport>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let (restarts, steps) = match props.last_solve {
        Some(r) => (r.restarts.to_string(), r.steps.to_string()),
        None => ("-".to_string(), "-".to_string()),
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={label_style}>{"State"}</span>
                <span style={value_style}>{ props.state_label }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Age"}</span>
                <span style={format!("{} color:#2ea043;", value_style)}>{ props.age }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f0883e;", label_style)}>{"Restarts"}</span>
                <span style={format!("{} color:#f0883e;", value_style)}>{ restarts }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Steps"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ steps }</span>
            </div>
        </div>
    }
}
