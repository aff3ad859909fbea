use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    /// "Next Path" is greyed out once the walk is solved or stuck.
    pub can_step: bool,
    pub on_solve: Callback<()>,
    pub on_step: Callback<()>,
    pub on_clear_path: Callback<()>,
    pub on_clear_board: Callback<()>,
    pub on_open_settings: Callback<()>,
}

fn unit(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    html! {<div style="display:flex; gap:10px; justify-content:center; padding:10px;">
        <button onclick={unit(&props.on_solve)}>{"Find Path"}</button>
        <button onclick={unit(&props.on_step)} disabled={!props.can_step}>{"Next Path"}</button>
        <button onclick={unit(&props.on_clear_path)}>{"Clear Path"}</button>
        <button onclick={unit(&props.on_clear_board)}>{"Clear Board"}</button>
        <button onclick={unit(&props.on_open_settings)}>{"Settings"}</button>
    </div>}
}
