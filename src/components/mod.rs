pub mod app;
pub mod time_display;
