pub mod app;
pub mod config_error_panel;
pub mod game_over_overlay;
pub mod play_view;
pub mod stats_panel;
