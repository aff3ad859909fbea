pub mod app;
pub mod board_view;
pub mod controls_panel;
pub mod legend_panel;
pub mod settings_modal;
pub mod stats_panel;
pub mod status_header;
