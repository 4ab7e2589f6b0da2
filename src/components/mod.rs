pub mod app;
pub mod nav_bar;

pub use app::App;
