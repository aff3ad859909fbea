use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusHeaderProps {
    pub message: String,
}

#[function_component(StatusHeader)]
pub fn status_header(props: &StatusHeaderProps) -> Html {
    html! {<div style="min-height:28px; display:flex; align-items:center; justify-content:center;">
        <div style="font-size:20px; font-weight:600;">{ props.message.clone() }</div>
    </div>}
}
