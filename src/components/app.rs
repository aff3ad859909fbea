use super::{
    board_view::BoardView, controls_panel::ControlsPanel, legend_panel::LegendPanel,
    settings_modal::SettingsModal, stats_panel::StatsPanel, status_header::StatusHeader,
};
use crate::util::{load_config, random_seed, save_config};
use maze_walker::config::WalkerConfig;
use maze_walker::state::{Session, SessionAction, SessionState};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(|| {
        let cfg = load_config();
        Session::new(cfg, random_seed()).unwrap_or_else(|e| {
            log::warn!("falling back to default board: {}", e);
            Session::default()
        })
    });
    let open_settings = use_state(|| false);

    let dispatch = |action: SessionAction| {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(action.clone()))
    };
    let on_solve = dispatch(SessionAction::Solve);
    let on_step = dispatch(SessionAction::Step);
    let on_clear_path = dispatch(SessionAction::ClearPath);
    let on_clear_board = dispatch(SessionAction::ClearBoard);
    let on_toggle = {
        let session = session.clone();
        Callback::from(move |(row, col): (usize, usize)| {
            session.dispatch(SessionAction::ToggleWall { row, col })
        })
    };
    let on_open_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let on_close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let on_apply_settings = {
        let session = session.clone();
        let open_settings = open_settings.clone();
        Callback::from(move |config: WalkerConfig| {
            save_config(&config);
            session.dispatch(SessionAction::Reconfigure {
                config,
                seed: random_seed(),
            });
            open_settings.set(false);
        })
    };

    let grid = session.grid();
    let can_step = !matches!(session.state(), SessionState::Solved | SessionState::Stuck);

    html! {<div style="position:relative; min-height:100vh; display:flex; flex-direction:column; align-items:center; gap:12px; padding-top:10px;">
        <StatusHeader message={session.status_message()} />
        <div style="display:flex; gap:16px; align-items:flex-start;">
            <BoardView
                size={grid.size()}
                cells={grid.cells().to_vec()}
                walker_on_start={grid.position() == grid.start()}
                on_toggle={on_toggle}
            />
            <div style="display:flex; flex-direction:column; gap:12px;">
                <StatsPanel state_label={session.state().label()} age={grid.age()} last_solve={session.last_solve()} />
                <LegendPanel />
            </div>
        </div>
        <ControlsPanel
            can_step={can_step}
            on_solve={on_solve}
            on_step={on_step}
            on_clear_path={on_clear_path}
            on_clear_board={on_clear_board}
            on_open_settings={on_open_settings}
        />
        <SettingsModal show={*open_settings} config={session.config().clone()} on_close={on_close_settings} on_apply={on_apply_settings} />
    </div>}
}
