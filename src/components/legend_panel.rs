use super::board_view::{COLOR_CURRENT, COLOR_EMPTY, COLOR_END, COLOR_VISITED, COLOR_WALL};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
struct SwatchProps {
    color: &'static str,
    label: &'static str,
}

#[function_component(Swatch)]
fn swatch(props: &SwatchProps) -> Html {
    let chip = format!(
        "width:14px; height:14px; background:{}; border:1px solid black;",
        props.color
    );
    html! {<div style="display:flex; align-items:center; gap:8px; margin:3px 0;">
        <span style={chip}></span>
        <span>{ props.label }</span>
    </div>}
}

#[function_component]
pub fn LegendPanel() -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:150px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <Swatch color={COLOR_CURRENT} label="Walker" />
        <Swatch color={COLOR_VISITED} label="Path" />
        <Swatch color={COLOR_END} label="Goal" />
        <Swatch color={COLOR_WALL} label="Wall" />
        <Swatch color={COLOR_EMPTY} label="Open" />
        <div style="font-size:11px; color:#8b949e; margin-top:6px;">{"Click a cell to place or remove a wall."}</div>
    </div>}
}
