pub mod app;
pub mod draw_view;
pub mod navigator;
pub mod toolbar;
