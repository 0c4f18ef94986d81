//! Terminal UI: feature screens, the store driving them and the view.

pub mod app;
pub mod footer;
pub mod geometry;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod rocket_detail;
pub mod rocket_launch;
pub mod rocket_list;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
