use maze_walker::model::CellState;
use yew::prelude::*;

pub const COLOR_EMPTY: &str = "#ffffff";
pub const COLOR_WALL: &str = "#000000";
pub const COLOR_CURRENT: &str = "#2ea043";
pub const COLOR_VISITED: &str = "#808080";
pub const COLOR_END: &str = "#d4af37";

const CELL_PX: usize = 56;

/// Start is drawn as the walker while it stands there and as path once left.
pub fn cell_color(state: CellState, walker_on_start: bool) -> &'static str {
    match state {
        CellState::Empty => COLOR_EMPTY,
        CellState::Wall => COLOR_WALL,
        CellState::Current => COLOR_CURRENT,
        CellState::Visited => COLOR_VISITED,
        CellState::End => COLOR_END,
        CellState::Start if walker_on_start => COLOR_CURRENT,
        CellState::Start => COLOR_VISITED,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub size: usize,
    /// Row-major.
    pub cells: Vec<CellState>,
    pub walker_on_start: bool,
    pub on_toggle: Callback<(usize, usize)>,
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let n = props.size;
    let grid_style = format!(
        "display:grid; grid-template-columns:repeat({n}, {CELL_PX}px); grid-auto-rows:{CELL_PX}px; padding:10px 10px 0 10px; justify-content:center;"
    );
    html! {<div style={grid_style}>
        { for props.cells.iter().enumerate().map(|(i, state)| {
            let (row, col) = (i / n, i % n);
            let onclick = {
                let cb = props.on_toggle.clone();
                Callback::from(move |_: MouseEvent| cb.emit((row, col)))
            };
            let style = format!(
                "border:1px solid black; background:{}; cursor:pointer;",
                cell_color(*state, props.walker_on_start)
            );
            html! { <div key={i} {onclick} {style} title={format!("({}, {})", row, col)}></div> }
        }) }
    </div>}
}
