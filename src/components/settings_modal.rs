use maze_walker::config::WalkerConfig;
use maze_walker::model::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: WalkerConfig,
    pub on_close: Callback<()>,
    /// Receives a validated config.
    pub on_apply: Callback<WalkerConfig>,
}

/// Parses the three text fields over `base`, keeping its seed.
fn draft_config(
    base: &WalkerConfig,
    grid_size: &str,
    restart_cap: &str,
    step_budget: &str,
) -> Result<WalkerConfig, String> {
    let cfg = WalkerConfig {
        grid_size: grid_size
            .trim()
            .parse()
            .map_err(|_| format!("Board size must be a number ({}-{}).", MIN_GRID_SIZE, MAX_GRID_SIZE))?,
        restart_cap: restart_cap
            .trim()
            .parse()
            .map_err(|_| "Restart cap must be a whole number.".to_string())?,
        step_budget: step_budget
            .trim()
            .parse()
            .map_err(|_| "Step budget must be a whole number.".to_string())?,
        seed: base.seed,
    };
    cfg.validate().map_err(|e| e.to_string())?;
    Ok(cfg)
}

fn text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let grid_size = use_state(|| props.config.grid_size.to_string());
    let restart_cap = use_state(|| props.config.restart_cap.to_string());
    let step_budget = use_state(|| props.config.step_budget.to_string());
    let error = use_state(|| None::<String>);

    // Re-seed the drafts whenever the modal opens or the applied config moves.
    {
        let grid_size = grid_size.clone();
        let restart_cap = restart_cap.clone();
        let step_budget = step_budget.clone();
        let error = error.clone();
        use_effect_with((props.show, props.config.clone()), move |(_, cfg)| {
            grid_size.set(cfg.grid_size.to_string());
            restart_cap.set(cfg.restart_cap.to_string());
            step_budget.set(cfg.step_budget.to_string());
            error.set(None);
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let apply_cb = {
        let cb = props.on_apply.clone();
        let base = props.config.clone();
        let grid_size = grid_size.clone();
        let restart_cap = restart_cap.clone();
        let step_budget = step_budget.clone();
        let error = error.clone();
        Callback::from(move |_| {
            match draft_config(&base, &grid_size, &restart_cap, &step_budget) {
                Ok(cfg) => cb.emit(cfg),
                Err(msg) => error.set(Some(msg)),
            }
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Board Size"}</span>
                    <input type="number" min={MIN_GRID_SIZE.to_string()} max={MAX_GRID_SIZE.to_string()} value={(*grid_size).clone()} oninput={text_input(&grid_size)} />
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Restart Cap"}</span>
                    <input type="number" min="0" value={(*restart_cap).clone()} oninput={text_input(&restart_cap)} />
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Step Budget"}</span>
                    <input type="number" min="1" value={(*step_budget).clone()} oninput={text_input(&step_budget)} />
                </label>
            </div>
            { if let Some(msg) = &*error { html!{ <div style="font-size:12px; color:#f85149;">{ msg.clone() }</div> } } else { html!{} } }
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={apply_cb} style="background:#238636; border:1px solid #2ea043; color:#fff; flex:1;">{"Apply (New Board)"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Cancel"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Applying starts a fresh board. Find Path gives up after the restart cap or step budget."}</div>
        </div>
    </div>}
}
